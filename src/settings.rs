//! Singleton site settings: fetched by a fixed key, defaulted in memory when
//! absent, merge-upserted on write.

use mongodb::bson::{doc, Document};

use crate::config::DefaultSettings;
use crate::store::{Store, StoreError, SETTINGS};

pub const SETTINGS_KEY: &str = "site_settings";

/// The document synthesized when nothing has been stored yet. Never persisted.
pub fn default_document(defaults: &DefaultSettings) -> Document {
    doc! {
        "key": SETTINGS_KEY,
        "hero_title": &defaults.hero_title,
        "hero_description": &defaults.hero_description,
        "hero_image": "",
        "logo_url": "",
        "contact_info": {},
    }
}

pub async fn fetch(store: &Store, defaults: &DefaultSettings) -> Result<Document, StoreError> {
    match store.find_one(SETTINGS, doc! { "key": SETTINGS_KEY }).await? {
        Some(document) => Ok(document),
        None => Ok(default_document(defaults)),
    }
}

/// Merge-upsert: only the provided fields are set, and the singleton is
/// created if it does not exist. No field-level validation; unknown keys are
/// stored verbatim.
pub async fn upsert(store: &Store, fields: Document) -> Result<(), StoreError> {
    store
        .upsert_one(SETTINGS, doc! { "key": SETTINGS_KEY }, fields)
        .await
}

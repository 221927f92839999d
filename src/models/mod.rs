//! Request payload types and their conversion to stored documents.
//!
//! Required fields are enforced by deserialization; a missing or mistyped
//! field surfaces as a 400 validation error rather than a missing-key fault
//! deep in a handler.

use mongodb::bson::{doc, DateTime, Document};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use crate::error::ApiError;

/// Well-known product status values. Status is free text; these are the
/// values the listing logic and seed data rely on.
pub const STATUS_AVAILABLE: &str = "available";
pub const STATUS_HIDDEN: &str = "hidden";
pub const STATUS_COMING_SOON: &str = "coming_soon";

/// Deserialize a JSON body into a typed payload, mapping failures to a
/// client-facing validation error.
pub fn parse_payload<T: DeserializeOwned>(payload: Value) -> Result<T, ApiError> {
    serde_json::from_value(payload).map_err(|e| ApiError::validation(e.to_string()))
}

fn default_true() -> bool {
    true
}

fn default_status() -> String {
    STATUS_AVAILABLE.to_string()
}

#[derive(Debug, Deserialize)]
pub struct BrandInput {
    pub name: String,
    pub slug: String,
    pub logo_url: String,
    pub banner_url: String,
    pub description: String,
    #[serde(default = "default_true")]
    pub visible: bool,
    #[serde(default)]
    pub in_navbar: bool,
    #[serde(default)]
    pub order: i32,
}

impl BrandInput {
    fn editable_fields(&self) -> Document {
        doc! {
            "name": &self.name,
            "slug": &self.slug,
            "logo_url": &self.logo_url,
            "banner_url": &self.banner_url,
            "description": &self.description,
            "visible": self.visible,
            "in_navbar": self.in_navbar,
            "order": self.order,
        }
    }

    pub fn into_new_document(self) -> Document {
        let now = DateTime::now();
        let mut document = self.editable_fields();
        document.insert("created_at", now);
        document.insert("updated_at", now);
        document
    }

    /// Full replace of the editable fields; `created_at` is left untouched.
    pub fn into_replacement_fields(self) -> Document {
        let mut fields = self.editable_fields();
        fields.insert("updated_at", DateTime::now());
        fields
    }
}

#[derive(Debug, Deserialize)]
pub struct ProductInput {
    pub name: String,
    pub brand: String,
    pub category: String,
    pub description: String,
    pub images: Vec<String>,
    #[serde(default)]
    pub sizes: Vec<String>,
    #[serde(default = "default_status")]
    pub status: String,
    #[serde(default)]
    pub featured: bool,
}

impl ProductInput {
    fn editable_fields(&self) -> Document {
        doc! {
            "name": &self.name,
            "brand": &self.brand,
            "category": &self.category,
            "description": &self.description,
            "images": &self.images,
            "sizes": &self.sizes,
            "status": &self.status,
            "featured": self.featured,
        }
    }

    pub fn into_new_document(self) -> Document {
        let now = DateTime::now();
        let mut document = self.editable_fields();
        document.insert("created_at", now);
        document.insert("updated_at", now);
        document
    }

    pub fn into_replacement_fields(self) -> Document {
        let mut fields = self.editable_fields();
        fields.insert("updated_at", DateTime::now());
        fields
    }
}

#[derive(Debug, Deserialize)]
pub struct MessageInput {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl MessageInput {
    /// Messages are created unread and never edited in place.
    pub fn into_new_document(self) -> Document {
        doc! {
            "name": self.name,
            "email": self.email,
            "message": self.message,
            "read": false,
            "created_at": DateTime::now(),
        }
    }
}

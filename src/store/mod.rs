//! Document store adapter over MongoDB. Sole owner of persisted state; every
//! call is single-shot against the remote server with no retry policy.

use std::time::Duration;

use mongodb::bson::{doc, oid::ObjectId, Document};
use mongodb::options::{ClientOptions, FindOptions, UpdateOptions};
use mongodb::{Client, Collection, Database};
use thiserror::Error;

use crate::config::StoreConfig;

pub const BRANDS: &str = "brands";
pub const PRODUCTS: &str = "products";
pub const MESSAGES: &str = "messages";
pub const SETTINGS: &str = "settings";

/// Errors from the store adapter
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store unavailable: {0}")]
    Unavailable(#[from] mongodb::error::Error),

    #[error("store returned a non-ObjectId document id")]
    UnexpectedIdShape,
}

/// Handle to the remote database. Clones share the driver's connection pool.
#[derive(Clone)]
pub struct Store {
    db: Database,
}

impl Store {
    /// Build a client from configuration. The driver connects lazily, so this
    /// only fails on an unparseable URI; reachability problems surface on the
    /// first operation instead.
    pub async fn connect(config: &StoreConfig) -> Result<Self, StoreError> {
        let mut options = ClientOptions::parse(&config.uri).await?;
        options.app_name = Some(env!("CARGO_PKG_NAME").to_string());
        options.server_selection_timeout =
            Some(Duration::from_secs(config.server_selection_timeout_secs));

        let client = Client::with_options(options)?;
        Ok(Self {
            db: client.database(&config.database),
        })
    }

    fn collection(&self, name: &str) -> Collection<Document> {
        self.db.collection(name)
    }

    /// Connectivity probe used by the health endpoint.
    pub async fn ping(&self) -> Result<(), StoreError> {
        self.db.run_command(doc! { "ping": 1 }, None).await?;
        Ok(())
    }

    pub async fn insert_one(
        &self,
        collection: &str,
        document: Document,
    ) -> Result<ObjectId, StoreError> {
        let result = self.collection(collection).insert_one(document, None).await?;
        result
            .inserted_id
            .as_object_id()
            .ok_or(StoreError::UnexpectedIdShape)
    }

    pub async fn insert_many(
        &self,
        collection: &str,
        documents: Vec<Document>,
    ) -> Result<usize, StoreError> {
        let result = self.collection(collection).insert_many(documents, None).await?;
        Ok(result.inserted_ids.len())
    }

    pub async fn find_one(
        &self,
        collection: &str,
        filter: Document,
    ) -> Result<Option<Document>, StoreError> {
        Ok(self.collection(collection).find_one(filter, None).await?)
    }

    pub async fn find_by_id(
        &self,
        collection: &str,
        id: ObjectId,
    ) -> Result<Option<Document>, StoreError> {
        self.find_one(collection, doc! { "_id": id }).await
    }

    pub async fn find_many(
        &self,
        collection: &str,
        filter: Document,
        sort: Document,
    ) -> Result<Vec<Document>, StoreError> {
        use futures::TryStreamExt;

        let options = FindOptions::builder().sort(sort).build();
        let cursor = self.collection(collection).find(filter, options).await?;
        Ok(cursor.try_collect().await?)
    }

    pub async fn count(
        &self,
        collection: &str,
        filter: Option<Document>,
    ) -> Result<u64, StoreError> {
        Ok(self.collection(collection).count_documents(filter, None).await?)
    }

    /// `$set` the given fields on the document with this id. Returns the
    /// matched count so callers can map zero to a not-found response.
    pub async fn update_by_id(
        &self,
        collection: &str,
        id: ObjectId,
        fields: Document,
    ) -> Result<u64, StoreError> {
        let result = self
            .collection(collection)
            .update_one(doc! { "_id": id }, doc! { "$set": fields }, None)
            .await?;
        Ok(result.matched_count)
    }

    /// Merge-upsert: `$set` exactly the given fields on the document matching
    /// the filter, inserting it when absent.
    pub async fn upsert_one(
        &self,
        collection: &str,
        filter: Document,
        fields: Document,
    ) -> Result<(), StoreError> {
        let options = UpdateOptions::builder().upsert(true).build();
        self.collection(collection)
            .update_one(filter, doc! { "$set": fields }, options)
            .await?;
        Ok(())
    }

    pub async fn delete_by_id(
        &self,
        collection: &str,
        id: ObjectId,
    ) -> Result<u64, StoreError> {
        let result = self
            .collection(collection)
            .delete_one(doc! { "_id": id }, None)
            .await?;
        Ok(result.deleted_count)
    }
}

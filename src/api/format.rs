//! Shaping of stored documents into client-facing JSON.

use mongodb::bson::{Bson, Document};
use serde_json::Value;

use crate::ids;

/// Render a stored document as API JSON: `_id` becomes its hex string form,
/// datetimes become RFC 3339 strings, nested documents and arrays recurse.
pub fn document_to_api_value(document: Document) -> Value {
    let mut map = serde_json::Map::with_capacity(document.len());
    for (key, value) in document {
        map.insert(key, bson_to_json(value));
    }
    Value::Object(map)
}

fn bson_to_json(value: Bson) -> Value {
    match value {
        Bson::ObjectId(id) => Value::String(ids::to_external(&id)),
        Bson::DateTime(dt) => Value::String(dt.to_chrono().to_rfc3339()),
        Bson::Document(doc) => document_to_api_value(doc),
        Bson::Array(items) => Value::Array(items.into_iter().map(bson_to_json).collect()),
        other => other.into(),
    }
}

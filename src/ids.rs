//! Conversion between the store's native ObjectId and the hex string form
//! used in request paths and response bodies.

use mongodb::bson::oid::ObjectId;
use thiserror::Error;

#[derive(Debug, Error)]
#[error("malformed document identifier: {0}")]
pub struct InvalidIdentifier(pub String);

/// Render a native identifier as the external 24-char hex string.
pub fn to_external(id: &ObjectId) -> String {
    id.to_hex()
}

/// Parse an external identifier string back to its native form.
///
/// Failure is a client error (the string has the wrong length or charset),
/// never a server error.
pub fn from_external(raw: &str) -> Result<ObjectId, InvalidIdentifier> {
    ObjectId::parse_str(raw).map_err(|_| InvalidIdentifier(raw.to_string()))
}

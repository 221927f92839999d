use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use mongodb::bson::doc;
use serde_json::{json, Value};

use crate::api::format::document_to_api_value;
use crate::auth::RequireAdmin;
use crate::error::ApiError;
use crate::models::{parse_payload, MessageInput};
use crate::state::AppState;
use crate::{ids, query, store};

/// POST /messages - public contact form submission
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let input: MessageInput = parse_payload(payload)?;
    let mut document = input.into_new_document();

    let id = state
        .store
        .insert_one(store::MESSAGES, document.clone())
        .await?;

    document.insert("_id", id);
    Ok((StatusCode::CREATED, Json(document_to_api_value(document))))
}

/// GET /messages - full inbox, newest first
pub async fn list(
    _admin: RequireAdmin,
    State(state): State<AppState>,
) -> Result<Json<Value>, ApiError> {
    let messages = state
        .store
        .find_many(
            store::MESSAGES,
            doc! {},
            query::message_inbox_sort(),
        )
        .await?;

    Ok(Json(Value::Array(
        messages.into_iter().map(document_to_api_value).collect(),
    )))
}

/// PUT /messages/:id/read - flip the read flag; message content never changes
pub async fn mark_read(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let id = ids::from_external(&id)?;

    let matched = state
        .store
        .update_by_id(store::MESSAGES, id, doc! { "read": true })
        .await?;
    if matched == 0 {
        return Err(ApiError::not_found("Message not found"));
    }

    Ok(Json(json!({ "message": "Message marked as read" })))
}

/// DELETE /messages/:id
pub async fn delete(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let id = ids::from_external(&id)?;

    let deleted = state.store.delete_by_id(store::MESSAGES, id).await?;
    if deleted == 0 {
        return Err(ApiError::not_found("Message not found"));
    }

    Ok(Json(json!({ "message": "Message deleted successfully" })))
}

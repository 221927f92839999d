use axum::{extract::State, Json};
use mongodb::bson;
use serde_json::{json, Value};

use crate::api::format::document_to_api_value;
use crate::auth::RequireAdmin;
use crate::error::ApiError;
use crate::settings;
use crate::state::AppState;

/// GET /settings - the stored singleton, or the in-memory default when the
/// collection is empty (the default is never persisted)
pub async fn show(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    let document = settings::fetch(&state.store, &state.config.defaults).await?;
    Ok(Json(document_to_api_value(document)))
}

/// PUT /settings - merge-upsert exactly the provided fields
pub async fn update(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> Result<Json<Value>, ApiError> {
    if !payload.is_object() {
        return Err(ApiError::validation("settings payload must be a JSON object"));
    }
    let fields = bson::to_document(&payload)
        .map_err(|e| ApiError::validation(format!("unrepresentable settings payload: {}", e)))?;

    settings::upsert(&state.store, fields).await?;

    Ok(Json(json!({ "message": "Settings updated successfully" })))
}

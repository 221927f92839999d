use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};

use crate::api::format::document_to_api_value;
use crate::auth::RequireAdmin;
use crate::error::ApiError;
use crate::models::{parse_payload, BrandInput};
use crate::state::AppState;
use crate::{ids, query, store};

/// GET /brands - visible brands in display order
pub async fn list_visible(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    let brands = state
        .store
        .find_many(
            store::BRANDS,
            query::visible_brands_filter(),
            query::brand_order_sort(),
        )
        .await?;

    Ok(Json(Value::Array(
        brands.into_iter().map(document_to_api_value).collect(),
    )))
}

/// GET /brands/all - every brand, hidden included
pub async fn list_all(
    _admin: RequireAdmin,
    State(state): State<AppState>,
) -> Result<Json<Value>, ApiError> {
    let brands = state
        .store
        .find_many(
            store::BRANDS,
            query::all_brands_filter(),
            query::brand_order_sort(),
        )
        .await?;

    Ok(Json(Value::Array(
        brands.into_iter().map(document_to_api_value).collect(),
    )))
}

/// POST /brands - create, returning the stored document with its new id
pub async fn create(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let input: BrandInput = parse_payload(payload)?;
    let mut document = input.into_new_document();

    let id = state.store.insert_one(store::BRANDS, document.clone()).await?;
    tracing::info!(brand = %ids::to_external(&id), "brand created");

    document.insert("_id", id);
    Ok((StatusCode::CREATED, Json(document_to_api_value(document))))
}

/// PUT /brands/:id - full replace of the editable fields
pub async fn update(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<Value>,
) -> Result<Json<Value>, ApiError> {
    let id = ids::from_external(&id)?;
    let input: BrandInput = parse_payload(payload)?;

    let matched = state
        .store
        .update_by_id(store::BRANDS, id, input.into_replacement_fields())
        .await?;
    if matched == 0 {
        return Err(ApiError::not_found("Brand not found"));
    }

    Ok(Json(json!({ "message": "Brand updated successfully" })))
}

/// DELETE /brands/:id
pub async fn delete(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let id = ids::from_external(&id)?;

    let deleted = state.store.delete_by_id(store::BRANDS, id).await?;
    if deleted == 0 {
        return Err(ApiError::not_found("Brand not found"));
    }

    Ok(Json(json!({ "message": "Brand deleted successfully" })))
}

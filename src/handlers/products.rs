use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};

use crate::api::format::document_to_api_value;
use crate::auth::RequireAdmin;
use crate::error::ApiError;
use crate::models::{parse_payload, ProductInput};
use crate::query::ProductListingQuery;
use crate::state::AppState;
use crate::{ids, query, store};

/// GET /products - public listing with optional brand/category/search filters
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ProductListingQuery>,
) -> Result<Json<Value>, ApiError> {
    let products = state
        .store
        .find_many(
            store::PRODUCTS,
            query::product_listing_filter(&params),
            query::product_listing_sort(),
        )
        .await?;

    Ok(Json(Value::Array(
        products.into_iter().map(document_to_api_value).collect(),
    )))
}

/// GET /products/:id
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let id = ids::from_external(&id)?;

    let product = state
        .store
        .find_by_id(store::PRODUCTS, id)
        .await?
        .ok_or_else(|| ApiError::not_found("Product not found"))?;

    Ok(Json(document_to_api_value(product)))
}

/// POST /products
pub async fn create(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let input: ProductInput = parse_payload(payload)?;
    let mut document = input.into_new_document();

    let id = state
        .store
        .insert_one(store::PRODUCTS, document.clone())
        .await?;
    tracing::info!(product = %ids::to_external(&id), "product created");

    document.insert("_id", id);
    Ok((StatusCode::CREATED, Json(document_to_api_value(document))))
}

/// PUT /products/:id - full replace of the editable fields
pub async fn update(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<Value>,
) -> Result<Json<Value>, ApiError> {
    let id = ids::from_external(&id)?;
    let input: ProductInput = parse_payload(payload)?;

    let matched = state
        .store
        .update_by_id(store::PRODUCTS, id, input.into_replacement_fields())
        .await?;
    if matched == 0 {
        return Err(ApiError::not_found("Product not found"));
    }

    Ok(Json(json!({ "message": "Product updated successfully" })))
}

/// DELETE /products/:id
pub async fn delete(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let id = ids::from_external(&id)?;

    let deleted = state.store.delete_by_id(store::PRODUCTS, id).await?;
    if deleted == 0 {
        return Err(ApiError::not_found("Product not found"));
    }

    Ok(Json(json!({ "message": "Product deleted successfully" })))
}

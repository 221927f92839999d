//! Filter and sort construction for catalog listings.

use mongodb::bson::{doc, Document};
use serde::Deserialize;

use crate::models::STATUS_HIDDEN;

/// Optional filter parameters accepted by the public product listing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductListingQuery {
    pub brand: Option<String>,
    pub category: Option<String>,
    pub search: Option<String>,
}

/// Build the product listing filter: hidden products are always excluded;
/// brand and category are exact matches; a search term matches name OR
/// description as a case-insensitive substring. Empty parameters are treated
/// as absent, so an empty search filters nothing out.
pub fn product_listing_filter(query: &ProductListingQuery) -> Document {
    let mut filter = doc! { "status": { "$ne": STATUS_HIDDEN } };

    if let Some(brand) = present(&query.brand) {
        filter.insert("brand", brand);
    }
    if let Some(category) = present(&query.category) {
        filter.insert("category", category);
    }
    if let Some(term) = present(&query.search) {
        filter.insert(
            "$or",
            vec![
                doc! { "name": { "$regex": term, "$options": "i" } },
                doc! { "description": { "$regex": term, "$options": "i" } },
            ],
        );
    }

    filter
}

/// Newest first.
pub fn product_listing_sort() -> Document {
    doc! { "created_at": -1 }
}

pub fn visible_brands_filter() -> Document {
    doc! { "visible": true }
}

pub fn all_brands_filter() -> Document {
    Document::new()
}

/// Display sequence among brands.
pub fn brand_order_sort() -> Document {
    doc! { "order": 1 }
}

/// Newest first.
pub fn message_inbox_sort() -> Document {
    doc! { "created_at": -1 }
}

fn present(param: &Option<String>) -> Option<&str> {
    param.as_deref().filter(|value| !value.is_empty())
}

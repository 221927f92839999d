use std::sync::Arc;

use axum::{routing::get, Json, Router};
use serde_json::{json, Value};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use catalog_api::config::AppConfig;
use catalog_api::handlers;
use catalog_api::state::AppState;
use catalog_api::store::Store;

#[tokio::main]
async fn main() {
    // Load .env if present so cargo run picks up MONGODB_URI, ADMIN_USERNAME, etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    let config = Arc::new(AppConfig::from_env());

    let store = Store::connect(&config.store)
        .await
        .unwrap_or_else(|e| panic!("failed to configure store client: {}", e));
    tracing::info!("store client ready for database {}", config.store.database);

    let state = AppState {
        config: config.clone(),
        store,
    };
    let app = app(state);

    let bind_addr = format!("0.0.0.0:{}", config.server.port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind {}: {}", bind_addr, e));

    println!("catalog-api listening on http://{}", bind_addr);

    axum::serve(listener, app).await.expect("server");
}

fn app(state: AppState) -> Router {
    Router::new()
        // Public
        .route("/", get(root))
        .route("/health", get(handlers::health::health))
        // Catalog
        .merge(brand_routes())
        .merge(product_routes())
        .merge(message_routes())
        .merge(settings_routes())
        // Global middleware
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn brand_routes() -> Router<AppState> {
    use axum::routing::put;
    use catalog_api::handlers::brands;

    Router::new()
        .route("/brands", get(brands::list_visible).post(brands::create))
        .route("/brands/all", get(brands::list_all))
        .route("/brands/:id", put(brands::update).delete(brands::delete))
}

fn product_routes() -> Router<AppState> {
    use catalog_api::handlers::products;

    Router::new()
        .route("/products", get(products::list).post(products::create))
        .route(
            "/products/:id",
            get(products::show)
                .put(products::update)
                .delete(products::delete),
        )
}

fn message_routes() -> Router<AppState> {
    use axum::routing::{delete, put};
    use catalog_api::handlers::messages;

    Router::new()
        .route("/messages", get(messages::list).post(messages::create))
        .route("/messages/:id/read", put(messages::mark_read))
        .route("/messages/:id", delete(messages::delete))
}

fn settings_routes() -> Router<AppState> {
    use catalog_api::handlers::settings;

    Router::new().route("/settings", get(settings::show).put(settings::update))
}

async fn root() -> Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    Json(json!({
        "name": "Catalog API",
        "version": version,
        "description": "E-commerce catalog backend: brands, products, messages and site settings",
        "endpoints": {
            "health": "GET /health (public)",
            "brands": "GET /brands (public), GET /brands/all, POST /brands, PUT|DELETE /brands/:id (admin)",
            "products": "GET /products[?brand=&category=&search=], GET /products/:id (public), POST /products, PUT|DELETE /products/:id (admin)",
            "messages": "POST /messages (public), GET /messages, PUT /messages/:id/read, DELETE /messages/:id (admin)",
            "settings": "GET /settings (public), PUT /settings (admin)",
        }
    }))
}

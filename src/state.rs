use std::sync::Arc;

use crate::config::AppConfig;
use crate::store::Store;

/// Shared router state: configuration plus the store handle. Cloning is
/// cheap; the store clones share one driver connection pool.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub store: Store,
}

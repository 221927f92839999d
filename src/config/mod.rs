use serde::{Deserialize, Serialize};
use std::env;

/// Process configuration, loaded once at startup and carried in router state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub admin: AdminConfig,
    pub store: StoreConfig,
    pub defaults: DefaultSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub port: u16,
}

/// Shared admin credential pair checked by the access gate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminConfig {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    pub uri: String,
    pub database: String,
    pub server_selection_timeout_secs: u64,
}

/// Text used to synthesize the settings document when none has been stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultSettings {
    pub hero_title: String,
    pub hero_description: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::defaults().with_env_overrides()
    }

    /// Baseline values used when no environment overrides are present.
    pub fn defaults() -> Self {
        Self {
            server: ServerConfig { port: 5000 },
            admin: AdminConfig {
                username: "admin".to_string(),
                password: "admin".to_string(),
            },
            store: StoreConfig {
                uri: "mongodb://localhost:27017".to_string(),
                database: "catalog".to_string(),
                server_selection_timeout_secs: 5,
            },
            defaults: DefaultSettings {
                hero_title: "Premium Wholesale & Retail Footwear Collection".to_string(),
                hero_description:
                    "Discover our extensive range of high-quality footwear from trusted brands."
                        .to_string(),
            },
        }
    }

    fn with_env_overrides(mut self) -> Self {
        // Server overrides
        if let Some(port) = env::var("CATALOG_API_PORT")
            .ok()
            .or_else(|| env::var("PORT").ok())
            .and_then(|v| v.parse::<u16>().ok())
        {
            self.server.port = port;
        }

        // Admin credential overrides
        if let Ok(v) = env::var("ADMIN_USERNAME") {
            self.admin.username = v;
        }
        if let Ok(v) = env::var("ADMIN_PASSWORD") {
            self.admin.password = v;
        }

        // Store overrides
        if let Ok(v) = env::var("MONGODB_URI") {
            self.store.uri = v;
        }
        if let Ok(v) = env::var("MONGODB_DB") {
            self.store.database = v;
        }
        if let Ok(v) = env::var("STORE_SELECTION_TIMEOUT_SECS") {
            self.store.server_selection_timeout_secs =
                v.parse().unwrap_or(self.store.server_selection_timeout_secs);
        }

        // Default settings overrides
        if let Ok(v) = env::var("SETTINGS_HERO_TITLE") {
            self.defaults.hero_title = v;
        }
        if let Ok(v) = env::var("SETTINGS_HERO_DESCRIPTION") {
            self.defaults.hero_description = v;
        }

        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn baseline_defaults() {
        let config = AppConfig::defaults();
        assert_eq!(config.server.port, 5000);
        assert_eq!(config.store.database, "catalog");
        assert!(config.defaults.hero_title.contains("Footwear"));
    }
}

//! Application configuration loaded from environment variables.

use std::env;

use quill_infra::store::{MongoConfig, PostgresConfig};

/// Which backend the posts store runs on.
#[derive(Debug, Clone)]
pub enum StoreConfig {
    Postgres(PostgresConfig),
    Mongo(MongoConfig),
    /// No database configured - volatile in-memory store.
    Memory,
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub store: StoreConfig,
    /// Gated variant: creating a post requires a password.
    pub require_password: bool,
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// `DATABASE_URL` selects the PostgreSQL backend; otherwise
    /// `MONGODB_URI` selects MongoDB; with neither set the server runs on
    /// the in-memory store.
    pub fn from_env() -> Self {
        let store = if let Ok(url) = env::var("DATABASE_URL") {
            StoreConfig::Postgres(PostgresConfig {
                url,
                max_connections: env_parse("DB_MAX_CONNECTIONS", 100),
                min_connections: env_parse("DB_MIN_CONNECTIONS", 10),
            })
        } else if let Ok(uri) = env::var("MONGODB_URI") {
            StoreConfig::Mongo(MongoConfig {
                uri,
                database: env::var("MONGODB_DATABASE").unwrap_or_else(|_| "quill".to_string()),
            })
        } else {
            StoreConfig::Memory
        };

        Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env_parse("PORT", 8080),
            store,
            require_password: env::var("POSTS_REQUIRE_PASSWORD")
                .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
                .unwrap_or(false),
        }
    }
}

fn env_parse<T: std::str::FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

//! Application state - shared across all handlers.

use std::sync::Arc;

use quill_core::PostService;
use quill_core::ports::PostStore;
use quill_infra::auth::Argon2PasswordService;
use quill_infra::store::MemoryPostStore;

use crate::config::{AppConfig, StoreConfig};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<PostService>,
}

impl AppState {
    /// Build the application state with the configured store backend.
    pub async fn new(config: &AppConfig) -> Self {
        let store = build_store(&config.store).await;
        let passwords = Arc::new(Argon2PasswordService::new());
        let posts = Arc::new(PostService::new(store, passwords, config.require_password));

        tracing::info!(
            gated = config.require_password,
            "Application state initialized"
        );

        Self { posts }
    }
}

async fn build_store(config: &StoreConfig) -> Arc<dyn PostStore> {
    match config {
        #[cfg(feature = "postgres")]
        StoreConfig::Postgres(pg) => match quill_infra::store::connect_postgres(pg).await {
            Ok(conn) => Arc::new(quill_infra::store::PostgresPostStore::new(conn)),
            Err(e) => {
                tracing::error!(
                    "Failed to connect to PostgreSQL: {}. Using in-memory fallback.",
                    e
                );
                Arc::new(MemoryPostStore::new())
            }
        },
        #[cfg(feature = "mongodb")]
        StoreConfig::Mongo(mongo) => match quill_infra::store::connect_mongo(mongo).await {
            Ok(client) => Arc::new(quill_infra::store::MongoPostStore::new(
                &client,
                &mongo.database,
            )),
            Err(e) => {
                tracing::error!(
                    "Failed to connect to MongoDB: {}. Using in-memory fallback.",
                    e
                );
                Arc::new(MemoryPostStore::new())
            }
        },
        StoreConfig::Memory => {
            tracing::warn!("No store configured. Posts are volatile (in-memory mode).");
            Arc::new(MemoryPostStore::new())
        }
        #[cfg(not(all(feature = "postgres", feature = "mongodb")))]
        _ => {
            tracing::error!(
                "Configured store backend is not compiled into this binary. Using in-memory fallback."
            );
            Arc::new(MemoryPostStore::new())
        }
    }
}

//! Store connection management.

#[cfg(feature = "postgres")]
use std::time::Duration;

#[cfg(feature = "postgres")]
use sea_orm::{ConnectOptions, Database, DbConn, DbErr};

/// Configuration for the PostgreSQL backend.
#[derive(Debug, Clone)]
pub struct PostgresConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
}

/// Configuration for the MongoDB backend.
#[derive(Debug, Clone)]
pub struct MongoConfig {
    pub uri: String,
    pub database: String,
}

/// Connect to PostgreSQL with pooling defaults matched to a single primary
/// database.
#[cfg(feature = "postgres")]
pub async fn connect_postgres(config: &PostgresConfig) -> Result<DbConn, DbErr> {
    let opts = ConnectOptions::new(&config.url)
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .connect_timeout(Duration::from_secs(10))
        .idle_timeout(Duration::from_secs(300))
        .sqlx_logging(true)
        .to_owned();

    let conn = Database::connect(opts).await?;
    tracing::info!(pool = config.max_connections, "PostgreSQL connected");

    Ok(conn)
}

/// Connect to MongoDB. The driver manages its own pool internally.
#[cfg(feature = "mongodb")]
pub async fn connect_mongo(
    config: &MongoConfig,
) -> Result<mongodb::Client, mongodb::error::Error> {
    let client = mongodb::Client::with_uri_str(&config.uri).await?;
    tracing::info!(database = %config.database, "MongoDB connected");

    Ok(client)
}

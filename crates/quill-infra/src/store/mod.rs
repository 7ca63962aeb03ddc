//! Store adapters for the posts table/collection.
//!
//! The backends are interchangeable behind `quill_core::ports::PostStore`;
//! each hides its native key type behind the opaque string id.

mod connections;
mod memory;

#[cfg(feature = "postgres")]
mod entity;
#[cfg(feature = "postgres")]
mod postgres;

#[cfg(feature = "mongodb")]
mod mongo;

pub use connections::{MongoConfig, PostgresConfig};
pub use memory::MemoryPostStore;

#[cfg(feature = "postgres")]
pub use connections::connect_postgres;
#[cfg(feature = "postgres")]
pub use postgres::PostgresPostStore;

#[cfg(feature = "mongodb")]
pub use connections::connect_mongo;
#[cfg(feature = "mongodb")]
pub use mongo::MongoPostStore;

#[cfg(test)]
mod tests;

//! # Quill Infrastructure
//!
//! Concrete implementations of the ports defined in `quill-core`:
//! storage backends for the posts collection and password hashing.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All backends enabled
//! - `minimal` - In-memory store only
//! - `postgres` - PostgreSQL backend via SeaORM
//! - `mongodb` - MongoDB backend

pub mod auth;
pub mod store;

pub use auth::Argon2PasswordService;
pub use store::MemoryPostStore;

#[cfg(feature = "postgres")]
pub use store::PostgresPostStore;

#[cfg(feature = "mongodb")]
pub use store::MongoPostStore;

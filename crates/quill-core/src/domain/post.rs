use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Post entity - the single content record managed by the service.
///
/// `id` is opaque at this level: the relational backend renders a sequential
/// integer key, the document backend a generated object id. Both are carried
/// as strings so callers never depend on the native key type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    pub title: String,
    pub content: String,
    pub author: String,
    /// Argon2 PHC string guarding mutation; absent on ungated posts.
    /// Skipped on serialization - the hash never leaves the process.
    #[serde(skip_serializing, default)]
    pub password_hash: Option<String>,
    pub date: DateTime<Utc>,
}

/// Insert payload - id and creation date are assigned by the store.
#[derive(Debug, Clone)]
pub struct NewPost {
    pub title: String,
    pub content: String,
    pub author: String,
    pub password_hash: Option<String>,
}

/// Partial update - `None` fields keep their stored values.
#[derive(Debug, Clone, Default)]
pub struct PostPatch {
    pub title: Option<String>,
    pub content: Option<String>,
    pub author: Option<String>,
}

impl PostPatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none() && self.author.is_none()
    }
}

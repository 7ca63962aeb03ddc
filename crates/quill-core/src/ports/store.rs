use async_trait::async_trait;

use crate::domain::{NewPost, Post, PostPatch};
use crate::error::StoreError;

/// Store port for the posts table/collection.
///
/// Each implementation parses the opaque string id into its native key type.
/// A string that cannot be parsed is `StoreError::InvalidId`, which is a
/// different condition from `Ok(None)` (no such record).
#[async_trait]
pub trait PostStore: Send + Sync {
    /// Insert a post, assigning its id and creation date.
    async fn insert(&self, post: NewPost) -> Result<Post, StoreError>;

    /// All posts, newest first. An empty list is a valid result.
    async fn list_all(&self) -> Result<Vec<Post>, StoreError>;

    /// Find a post by its opaque id.
    async fn find_by_id(&self, id: &str) -> Result<Option<Post>, StoreError>;

    /// Apply the patch to an existing post and return the updated record.
    /// The service never calls this with an empty patch.
    async fn update_partial(
        &self,
        id: &str,
        patch: PostPatch,
    ) -> Result<Option<Post>, StoreError>;

    /// Remove a post, returning its prior state.
    async fn delete_by_id(&self, id: &str) -> Result<Option<Post>, StoreError>;
}

//! Post resource service - validation, password gating, outcome mapping.
//!
//! One service instance fronts whichever store backend was configured; the
//! backends are interchangeable behind the [`PostStore`] port.

use std::sync::Arc;

use crate::domain::{NewPost, Post, PostPatch};
use crate::error::{PostError, StoreError};
use crate::ports::{PasswordService, PostStore};

/// Input for creating a post. The plaintext password, when supplied, is
/// hashed before it reaches the store and never persisted or logged.
#[derive(Debug, Clone, Default)]
pub struct NewPostInput {
    pub title: String,
    pub content: String,
    pub author: String,
    pub password: Option<String>,
}

/// The post resource service.
pub struct PostService {
    store: Arc<dyn PostStore>,
    passwords: Arc<dyn PasswordService>,
    /// Gated variant: a password is mandatory at creation.
    require_password: bool,
}

impl PostService {
    pub fn new(
        store: Arc<dyn PostStore>,
        passwords: Arc<dyn PasswordService>,
        require_password: bool,
    ) -> Self {
        Self {
            store,
            passwords,
            require_password,
        }
    }

    /// Create a post. Every text field must be non-empty; in the gated
    /// variant the password is mandatory as well.
    pub async fn create(&self, input: NewPostInput) -> Result<Post, PostError> {
        if input.title.is_empty() {
            return Err(PostError::MissingFields("title"));
        }
        if input.content.is_empty() {
            return Err(PostError::MissingFields("content"));
        }
        if input.author.is_empty() {
            return Err(PostError::MissingFields("author"));
        }

        let password = input.password.filter(|p| !p.is_empty());
        if self.require_password && password.is_none() {
            return Err(PostError::MissingFields("password"));
        }

        let password_hash = match password {
            Some(plain) => Some(
                self.passwords
                    .hash(&plain)
                    .map_err(|e| PostError::Hash(e.to_string()))?,
            ),
            None => None,
        };

        self.store
            .insert(NewPost {
                title: input.title,
                content: input.content,
                author: input.author,
                password_hash,
            })
            .await
            .map_err(Self::map_store)
    }

    /// All posts, newest first.
    pub async fn list(&self) -> Result<Vec<Post>, PostError> {
        self.store.list_all().await.map_err(Self::map_store)
    }

    /// Fetch a single post by its opaque id.
    pub async fn get(&self, id: &str) -> Result<Post, PostError> {
        self.store
            .find_by_id(id)
            .await
            .map_err(Self::map_store)?
            .ok_or_else(|| PostError::NotFound(id.to_owned()))
    }

    /// Apply a partial update. A stored password hash must be matched by the
    /// supplied plaintext before anything mutates; empty-string fields count
    /// as not supplied.
    ///
    /// The gate check and the mutation are two separate store calls, not a
    /// compare-and-swap; single-statement atomicity comes from the store.
    pub async fn update(
        &self,
        id: &str,
        patch: PostPatch,
        password: Option<&str>,
    ) -> Result<Post, PostError> {
        let existing = self.get(id).await?;
        self.check_gate(&existing, password)?;

        let patch = drop_empty_fields(patch);
        if patch.is_empty() {
            return Err(PostError::NoFieldsProvided);
        }

        self.store
            .update_partial(id, patch)
            .await
            .map_err(Self::map_store)?
            .ok_or_else(|| PostError::NotFound(id.to_owned()))
    }

    /// Delete a post, returning its prior state. Same gate precondition as
    /// [`PostService::update`].
    pub async fn delete(&self, id: &str, password: Option<&str>) -> Result<Post, PostError> {
        let existing = self.get(id).await?;
        self.check_gate(&existing, password)?;

        self.store
            .delete_by_id(id)
            .await
            .map_err(Self::map_store)?
            .ok_or_else(|| PostError::NotFound(id.to_owned()))
    }

    /// A record carrying a hash always demands verification, whatever the
    /// global flag says; records without one are open.
    fn check_gate(&self, post: &Post, password: Option<&str>) -> Result<(), PostError> {
        let Some(hash) = post.password_hash.as_deref() else {
            return Ok(());
        };
        let Some(password) = password.filter(|p| !p.is_empty()) else {
            return Err(PostError::Forbidden);
        };

        let valid = self
            .passwords
            .verify(password, hash)
            .map_err(|e| PostError::Hash(e.to_string()))?;
        if valid { Ok(()) } else { Err(PostError::Forbidden) }
    }

    /// A malformed id is the caller's fault (400), not a store failure (500).
    fn map_store(err: StoreError) -> PostError {
        match err {
            StoreError::InvalidId(id) => PostError::InvalidId(id),
            other => PostError::Store(other),
        }
    }
}

fn drop_empty_fields(patch: PostPatch) -> PostPatch {
    PostPatch {
        title: patch.title.filter(|s| !s.is_empty()),
        content: patch.content.filter(|s| !s.is_empty()),
        author: patch.author.filter(|s| !s.is_empty()),
    }
}

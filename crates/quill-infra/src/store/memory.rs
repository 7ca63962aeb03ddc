//! In-memory post store - used as fallback when no database is configured.

use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use quill_core::domain::{NewPost, Post, PostPatch};
use quill_core::error::StoreError;
use quill_core::ports::PostStore;

/// In-memory post store with sequential integer ids, mirroring the
/// relational backend's key shape.
///
/// Note: data is lost on process restart.
pub struct MemoryPostStore {
    posts: RwLock<Vec<Post>>,
    next_id: AtomicI64,
}

impl MemoryPostStore {
    pub fn new() -> Self {
        Self {
            posts: RwLock::new(Vec::new()),
            next_id: AtomicI64::new(1),
        }
    }

    fn parse_id(id: &str) -> Result<String, StoreError> {
        id.parse::<i64>()
            .map(|key| key.to_string())
            .map_err(|_| StoreError::InvalidId(id.to_owned()))
    }
}

impl Default for MemoryPostStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PostStore for MemoryPostStore {
    async fn insert(&self, post: NewPost) -> Result<Post, StoreError> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let post = Post {
            id: id.to_string(),
            title: post.title,
            content: post.content,
            author: post.author,
            password_hash: post.password_hash,
            date: Utc::now(),
        };

        self.posts.write().await.push(post.clone());
        Ok(post)
    }

    async fn list_all(&self) -> Result<Vec<Post>, StoreError> {
        let mut all = self.posts.read().await.clone();
        all.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(all)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Post>, StoreError> {
        let key = Self::parse_id(id)?;
        let posts = self.posts.read().await;

        Ok(posts.iter().find(|p| p.id == key).cloned())
    }

    async fn update_partial(
        &self,
        id: &str,
        patch: PostPatch,
    ) -> Result<Option<Post>, StoreError> {
        let key = Self::parse_id(id)?;
        let mut posts = self.posts.write().await;

        let Some(post) = posts.iter_mut().find(|p| p.id == key) else {
            return Ok(None);
        };

        if let Some(title) = patch.title {
            post.title = title;
        }
        if let Some(content) = patch.content {
            post.content = content;
        }
        if let Some(author) = patch.author {
            post.author = author;
        }

        Ok(Some(post.clone()))
    }

    async fn delete_by_id(&self, id: &str) -> Result<Option<Post>, StoreError> {
        let key = Self::parse_id(id)?;
        let mut posts = self.posts.write().await;

        let Some(pos) = posts.iter().position(|p| p.id == key) else {
            return Ok(None);
        };

        Ok(Some(posts.remove(pos)))
    }
}

//! MongoDB store implementation.

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::oid::ObjectId;
use mongodb::bson::{self, Document, doc};
use mongodb::options::ReturnDocument;
use mongodb::{Client, Collection};
use serde::{Deserialize, Serialize};

use quill_core::domain::{NewPost, Post, PostPatch};
use quill_core::error::StoreError;
use quill_core::ports::PostStore;

/// Wire form of a post document. `_id` and `date` use native BSON types;
/// the domain sees hex strings and UTC datetimes.
#[derive(Debug, Serialize, Deserialize)]
struct PostDocument {
    #[serde(rename = "_id")]
    id: ObjectId,
    title: String,
    content: String,
    author: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    password_hash: Option<String>,
    date: bson::DateTime,
}

impl From<PostDocument> for Post {
    fn from(document: PostDocument) -> Self {
        Self {
            id: document.id.to_hex(),
            title: document.title,
            content: document.content,
            author: document.author,
            password_hash: document.password_hash,
            date: document.date.to_chrono(),
        }
    }
}

/// MongoDB-backed post store over a single `posts` collection.
pub struct MongoPostStore {
    posts: Collection<PostDocument>,
}

impl MongoPostStore {
    pub fn new(client: &Client, database: &str) -> Self {
        Self {
            posts: client.database(database).collection("posts"),
        }
    }

    fn parse_id(id: &str) -> Result<ObjectId, StoreError> {
        ObjectId::parse_str(id).map_err(|_| StoreError::InvalidId(id.to_owned()))
    }
}

#[async_trait]
impl PostStore for MongoPostStore {
    async fn insert(&self, post: NewPost) -> Result<Post, StoreError> {
        let document = PostDocument {
            id: ObjectId::new(),
            title: post.title,
            content: post.content,
            author: post.author,
            password_hash: post.password_hash,
            date: bson::DateTime::now(),
        };

        self.posts
            .insert_one(&document)
            .await
            .map_err(|e| StoreError::Query(e.to_string()))?;

        Ok(document.into())
    }

    async fn list_all(&self) -> Result<Vec<Post>, StoreError> {
        let cursor = self
            .posts
            .find(doc! {})
            .sort(doc! { "date": -1 })
            .await
            .map_err(|e| StoreError::Query(e.to_string()))?;

        let documents: Vec<PostDocument> = cursor
            .try_collect()
            .await
            .map_err(|e| StoreError::Query(e.to_string()))?;

        Ok(documents.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Post>, StoreError> {
        let oid = Self::parse_id(id)?;

        let found = self
            .posts
            .find_one(doc! { "_id": oid })
            .await
            .map_err(|e| StoreError::Query(e.to_string()))?;

        Ok(found.map(Into::into))
    }

    async fn update_partial(
        &self,
        id: &str,
        patch: PostPatch,
    ) -> Result<Option<Post>, StoreError> {
        let oid = Self::parse_id(id)?;

        let mut set = Document::new();
        if let Some(title) = patch.title {
            set.insert("title", title);
        }
        if let Some(content) = patch.content {
            set.insert("content", content);
        }
        if let Some(author) = patch.author {
            set.insert("author", author);
        }

        let updated = self
            .posts
            .find_one_and_update(doc! { "_id": oid }, doc! { "$set": set })
            .return_document(ReturnDocument::After)
            .await
            .map_err(|e| StoreError::Query(e.to_string()))?;

        Ok(updated.map(Into::into))
    }

    async fn delete_by_id(&self, id: &str) -> Result<Option<Post>, StoreError> {
        let oid = Self::parse_id(id)?;

        let deleted = self
            .posts
            .find_one_and_delete(doc! { "_id": oid })
            .await
            .map_err(|e| StoreError::Query(e.to_string()))?;

        Ok(deleted.map(Into::into))
    }
}

//! PostgreSQL store implementation backed by SeaORM.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, DbConn, DbErr, EntityTrait, NotSet, QueryOrder, Set, Unchanged};

use quill_core::domain::{NewPost, Post, PostPatch};
use quill_core::error::StoreError;
use quill_core::ports::PostStore;

use super::entity::{self, Entity as Posts};

/// PostgreSQL-backed post store. Rows carry a sequential `i64` key which is
/// exposed to callers in decimal string form.
pub struct PostgresPostStore {
    db: DbConn,
}

impl PostgresPostStore {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }

    fn parse_id(id: &str) -> Result<i64, StoreError> {
        id.parse::<i64>()
            .map_err(|_| StoreError::InvalidId(id.to_owned()))
    }
}

#[async_trait]
impl PostStore for PostgresPostStore {
    async fn insert(&self, post: NewPost) -> Result<Post, StoreError> {
        let model = entity::ActiveModel {
            id: NotSet,
            title: Set(post.title),
            content: Set(post.content),
            author: Set(post.author),
            password_hash: Set(post.password_hash),
            date: Set(Utc::now().into()),
        };

        let inserted = model.insert(&self.db).await.map_err(|e| {
            let err_str = e.to_string();
            if err_str.contains("duplicate") || err_str.contains("unique") {
                StoreError::Constraint(err_str)
            } else {
                StoreError::Query(err_str)
            }
        })?;

        Ok(inserted.into())
    }

    async fn list_all(&self) -> Result<Vec<Post>, StoreError> {
        let rows = Posts::find()
            .order_by_desc(entity::Column::Date)
            .all(&self.db)
            .await
            .map_err(|e| StoreError::Query(e.to_string()))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Post>, StoreError> {
        let key = Self::parse_id(id)?;

        let row = Posts::find_by_id(key)
            .one(&self.db)
            .await
            .map_err(|e| StoreError::Query(e.to_string()))?;

        Ok(row.map(Into::into))
    }

    async fn update_partial(
        &self,
        id: &str,
        patch: PostPatch,
    ) -> Result<Option<Post>, StoreError> {
        let key = Self::parse_id(id)?;

        let mut model = entity::ActiveModel {
            id: Unchanged(key),
            ..Default::default()
        };
        if let Some(title) = patch.title {
            model.title = Set(title);
        }
        if let Some(content) = patch.content {
            model.content = Set(content);
        }
        if let Some(author) = patch.author {
            model.author = Set(author);
        }

        match model.update(&self.db).await {
            Ok(updated) => Ok(Some(updated.into())),
            Err(DbErr::RecordNotUpdated) => Ok(None),
            Err(e) => Err(StoreError::Query(e.to_string())),
        }
    }

    async fn delete_by_id(&self, id: &str) -> Result<Option<Post>, StoreError> {
        let key = Self::parse_id(id)?;

        // Two statements: SeaORM's delete does not hand back the removed row.
        let Some(prior) = Posts::find_by_id(key)
            .one(&self.db)
            .await
            .map_err(|e| StoreError::Query(e.to_string()))?
        else {
            return Ok(None);
        };

        Posts::delete_by_id(key)
            .exec(&self.db)
            .await
            .map_err(|e| StoreError::Query(e.to_string()))?;

        Ok(Some(prior.into()))
    }
}

//! PostgreSQL repository implementation.

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DbConn, DbErr, EntityTrait, QueryOrder, Set};

use blog_core::StoreError;
use blog_core::domain::{NewPost, Post, PostChanges, PostId};
use blog_core::ports::PostRepository;

use super::entity::post::{self, Entity as PostEntity};

/// PostgreSQL post repository.
pub struct PostgresPostRepository {
    db: DbConn,
}

impl PostgresPostRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }
}

/// Failures while reading: anything but a lookup miss means the store is unusable.
fn read_error(err: DbErr) -> StoreError {
    match &err {
        DbErr::RecordNotFound(_) => StoreError::NotFound,
        _ => StoreError::Unavailable(err.to_string()),
    }
}

fn write_error(err: DbErr) -> StoreError {
    match &err {
        DbErr::Conn(_) | DbErr::ConnectionAcquire(_) => StoreError::Unavailable(err.to_string()),
        DbErr::RecordNotFound(_) | DbErr::RecordNotUpdated => StoreError::NotFound,
        _ => StoreError::Write(err.to_string()),
    }
}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn list_all(&self) -> Result<Vec<Post>, StoreError> {
        let result = PostEntity::find()
            .order_by_asc(post::Column::CreatedAt)
            .order_by_asc(post::Column::Id)
            .all(&self.db)
            .await
            .map_err(read_error)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn create(&self, fields: NewPost) -> Result<Post, StoreError> {
        let active_model: post::ActiveModel = Post::new(fields).into();
        let model = active_model.insert(&self.db).await.map_err(write_error)?;

        tracing::debug!(post_id = %model.id, "Post inserted");
        Ok(model.into())
    }

    async fn find_by_id(&self, id: PostId) -> Result<Post, StoreError> {
        PostEntity::find_by_id(id.as_uuid())
            .one(&self.db)
            .await
            .map_err(read_error)?
            .map(Into::into)
            .ok_or(StoreError::NotFound)
    }

    async fn update_by_id(&self, id: PostId, changes: PostChanges) -> Result<Post, StoreError> {
        let model = PostEntity::find_by_id(id.as_uuid())
            .one(&self.db)
            .await
            .map_err(read_error)?
            .ok_or(StoreError::NotFound)?;

        if changes.is_empty() {
            return Ok(model.into());
        }

        let mut active_model: post::ActiveModel = model.into();
        if let Some(title) = changes.title {
            active_model.title = Set(title);
        }
        if let Some(image) = changes.image {
            active_model.image = Set(image);
        }
        if let Some(body) = changes.body {
            active_model.body = Set(body);
        }

        // Last write wins; a row deleted since the lookup surfaces as NotFound.
        let model = active_model.update(&self.db).await.map_err(write_error)?;
        Ok(model.into())
    }

    async fn delete_by_id(&self, id: PostId) -> Result<(), StoreError> {
        let result = PostEntity::delete_by_id(id.as_uuid())
            .exec(&self.db)
            .await
            .map_err(write_error)?;

        if result.rows_affected == 0 {
            tracing::debug!(post_id = %id, "Delete of absent post ignored");
        }

        Ok(())
    }
}

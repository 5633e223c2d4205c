use async_trait::async_trait;

use crate::domain::{NewPost, Post, PostChanges, PostId};
use crate::error::StoreError;

/// Post repository - the record store over the single post collection.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// All posts in the store's natural order.
    async fn list_all(&self) -> Result<Vec<Post>, StoreError>;

    /// Insert a post, assigning its ID and creation time.
    async fn create(&self, fields: NewPost) -> Result<Post, StoreError>;

    /// Find a post by ID. A miss is `StoreError::NotFound`.
    async fn find_by_id(&self, id: PostId) -> Result<Post, StoreError>;

    /// Apply `changes` and return the post as stored afterwards.
    async fn update_by_id(&self, id: PostId, changes: PostChanges) -> Result<Post, StoreError>;

    /// Remove a post. Removing an absent post succeeds.
    async fn delete_by_id(&self, id: PostId) -> Result<(), StoreError>;
}

//! In-memory record store - used when no database is configured.

use async_trait::async_trait;
use tokio::sync::RwLock;

use blog_core::StoreError;
use blog_core::domain::{NewPost, Post, PostChanges, PostId};
use blog_core::ports::PostRepository;

/// In-memory post repository backed by a `Vec` under an async RwLock.
///
/// Keeps insertion order, which is the natural order for `list_all`.
/// Note: Data is lost on process restart.
pub struct InMemoryPostRepository {
    posts: RwLock<Vec<Post>>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self {
            posts: RwLock::new(Vec::new()),
        }
    }
}

impl Default for InMemoryPostRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn list_all(&self) -> Result<Vec<Post>, StoreError> {
        Ok(self.posts.read().await.clone())
    }

    async fn create(&self, fields: NewPost) -> Result<Post, StoreError> {
        let post = Post::new(fields);
        self.posts.write().await.push(post.clone());
        tracing::debug!(post_id = %post.id, "Post stored in memory");
        Ok(post)
    }

    async fn find_by_id(&self, id: PostId) -> Result<Post, StoreError> {
        self.posts
            .read()
            .await
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    async fn update_by_id(&self, id: PostId, changes: PostChanges) -> Result<Post, StoreError> {
        let mut posts = self.posts.write().await;
        let post = posts
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(StoreError::NotFound)?;

        post.apply(changes);
        Ok(post.clone())
    }

    async fn delete_by_id(&self, id: PostId) -> Result<(), StoreError> {
        self.posts.write().await.retain(|p| p.id != id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(title: &str) -> NewPost {
        NewPost {
            title: title.to_string(),
            image: "https://example.com/cat.jpg".to_string(),
            body: "<p>body</p>".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_then_find() {
        let repo = InMemoryPostRepository::new();
        let created = repo.create(fields("First")).await.unwrap();

        let found = repo.find_by_id(created.id).await.unwrap();
        assert_eq!(found, created);
        assert_eq!(found.title, "First");
        assert_eq!(found.image, "https://example.com/cat.jpg");
        assert_eq!(found.body, "<p>body</p>");
    }

    #[tokio::test]
    async fn test_list_keeps_insertion_order() {
        let repo = InMemoryPostRepository::new();
        repo.create(fields("a")).await.unwrap();
        repo.create(fields("b")).await.unwrap();
        repo.create(fields("c")).await.unwrap();

        let titles: Vec<_> = repo
            .list_all()
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.title)
            .collect();
        assert_eq!(titles, ["a", "b", "c"]);
    }

    #[tokio::test]
    async fn test_find_missing() {
        let repo = InMemoryPostRepository::new();
        let result = repo.find_by_id(PostId::generate()).await;
        assert_eq!(result, Err(StoreError::NotFound));
    }

    #[tokio::test]
    async fn test_update_keeps_id_and_created_at() {
        let repo = InMemoryPostRepository::new();
        let created = repo.create(fields("Before")).await.unwrap();

        let updated = repo
            .update_by_id(
                created.id,
                PostChanges {
                    title: Some("After".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.created_at, created.created_at);
        assert_eq!(updated.title, "After");
        assert_eq!(updated.body, created.body);
        assert_eq!(repo.find_by_id(created.id).await.unwrap(), updated);
    }

    #[tokio::test]
    async fn test_update_missing() {
        let repo = InMemoryPostRepository::new();
        let result = repo
            .update_by_id(PostId::generate(), PostChanges::default())
            .await;
        assert_eq!(result, Err(StoreError::NotFound));
    }

    #[tokio::test]
    async fn test_delete_then_find() {
        let repo = InMemoryPostRepository::new();
        let created = repo.create(fields("Doomed")).await.unwrap();

        repo.delete_by_id(created.id).await.unwrap();
        assert_eq!(repo.find_by_id(created.id).await, Err(StoreError::NotFound));

        // Deleting again is a no-op.
        repo.delete_by_id(created.id).await.unwrap();
        assert!(repo.list_all().await.unwrap().is_empty());
    }
}

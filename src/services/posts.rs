//! Post service - creation, retrieval, edit and delete over the shared store

use crate::models::{Post, PostChanges, PostDraft};
use crate::store::PostStore;
use std::sync::Arc;
use tokio::sync::RwLock;

/// The single mutation/query surface over the shared post collection.
///
/// actix runs handlers on a multi-threaded runtime, so the store sits
/// behind an `RwLock`: render paths take the read lock, mutations take the
/// write lock. At most one mutation is in flight at a time.
#[derive(Clone)]
pub struct PostService {
    store: Arc<RwLock<PostStore>>,
}

impl PostService {
    pub fn new(store: PostStore) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
        }
    }

    /// Create a new post from submitted fields: allocate the next free id,
    /// construct the entity and insert it. Returns the stored post.
    pub async fn create(&self, draft: PostDraft) -> Post {
        let mut store = self.store.write().await;
        let post = Post::new(store.next_id(), draft);
        store.insert(post.clone());
        post
    }

    /// Get a post by id. Absence is not an error; callers render a
    /// not-found state.
    pub async fn get(&self, id: &str) -> Option<Post> {
        self.store.read().await.get(id).cloned()
    }

    /// All posts, in insertion order.
    pub async fn list(&self) -> Vec<Post> {
        self.store.read().await.all().to_vec()
    }

    /// Apply an edit (per-field diff; see `PostStore::apply_changes`).
    /// A miss is a silent no-op and returns `false`.
    pub async fn edit(&self, id: &str, changes: &PostChanges) -> bool {
        self.store.write().await.apply_changes(id, changes)
    }

    /// Delete a post by id. A miss leaves the collection unchanged.
    pub async fn delete(&self, id: &str) -> bool {
        self.store.write().await.delete(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(title: &str) -> PostDraft {
        PostDraft {
            title: title.to_string(),
            author: "Ada".to_string(),
            author_session: "session-1".to_string(),
            content: "content".to_string(),
            image: "img".to_string(),
        }
    }

    #[tokio::test]
    async fn create_assigns_distinct_ids() {
        let service = PostService::new(PostStore::new());
        let first = service.create(draft("a")).await;
        let second = service.create(draft("b")).await;

        assert_eq!(first.id, "1");
        assert_eq!(second.id, "2");
        assert!(first.updated.is_none());
    }

    #[tokio::test]
    async fn end_to_end_collection_scenario() {
        // Delete from a one-post collection, then rebuild it.
        let service = PostService::new(PostStore::new());
        let seeded = service.create(draft("seed")).await;
        assert!(service.delete(&seeded.id).await);
        assert!(service.list().await.is_empty());
        assert!(service.get(&seeded.id).await.is_none());

        let post = service.create(draft("A")).await;
        assert!(post.updated.is_none());

        let changes = PostChanges {
            title: post.title.clone(),
            author: "Grace".to_string(),
            content: post.content.clone(),
            image: post.image.clone(),
        };
        assert!(service.edit(&post.id, &changes).await);

        let edited = service.get(&post.id).await.expect("post present");
        assert_eq!(edited.title, post.title);
        assert_eq!(edited.author, "Grace");
        assert_eq!(edited.content, post.content);
        assert!(edited.updated.is_some());
    }
}

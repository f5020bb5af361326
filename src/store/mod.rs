//! The in-memory post collection
//!
//! The sole storage structure: an ordered `Vec<Post>` owned by an
//! explicitly injectable store object. Nothing here locks; the service
//! layer wraps the store in a `tokio::sync::RwLock` because actix runs
//! handlers on a multi-threaded runtime.

use crate::models::{format_timestamp, Post, PostChanges};
use chrono::Local;

/// In-memory post collection.
#[derive(Debug, Clone, Default)]
pub struct PostStore {
    posts: Vec<Post>,
}

impl PostStore {
    pub fn new() -> Self {
        PostStore { posts: Vec::new() }
    }

    /// A store pre-populated with the demo seed posts.
    pub fn seeded() -> Self {
        PostStore { posts: seed_posts() }
    }

    /// Next free id: one past the highest numeric id in the collection,
    /// starting at "1" when the collection is empty. Ids that do not parse
    /// as numbers are ignored by the scan.
    pub fn next_id(&self) -> String {
        let highest = self
            .posts
            .iter()
            .filter_map(|post| post.id.parse::<u64>().ok())
            .max()
            .unwrap_or(0);
        (highest + 1).to_string()
    }

    pub fn insert(&mut self, post: Post) {
        self.posts.push(post);
    }

    /// Linear-scan lookup by id (string equality). Absence is not an error.
    pub fn get(&self, id: &str) -> Option<&Post> {
        self.posts.iter().find(|post| post.id == id)
    }

    pub fn all(&self) -> &[Post] {
        &self.posts
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    /// Apply an edit to the post matching `id`: each of the four fields is
    /// overwritten only when the replacement differs from the stored value.
    ///
    /// `updated` is stamped on every matched lookup, even when no field
    /// actually changed. Deliberate; recorded as a policy decision in
    /// DESIGN.md.
    ///
    /// Returns `false` (a silent no-op) when no post matches.
    pub fn apply_changes(&mut self, id: &str, changes: &PostChanges) -> bool {
        let Some(post) = self.posts.iter_mut().find(|post| post.id == id) else {
            return false;
        };

        if post.title != changes.title {
            post.title = changes.title.clone();
        }
        if post.author != changes.author {
            post.author = changes.author.clone();
        }
        if post.content != changes.content {
            post.content = changes.content.clone();
        }
        if post.image != changes.image {
            post.image = changes.image.clone();
        }
        post.updated = Some(format_timestamp(Local::now()));

        true
    }

    /// Remove the post matching `id` by swapping in the filtered collection
    /// produced by [`without`]. Returns whether anything was removed.
    pub fn delete(&mut self, id: &str) -> bool {
        let remaining = without(&self.posts, id);
        let removed = remaining.len() != self.posts.len();
        self.posts = remaining;
        removed
    }
}

/// A new collection containing every post whose id differs from `id`
/// (string comparison). The input is left untouched; a miss yields a
/// collection with unchanged content.
pub fn without(posts: &[Post], id: &str) -> Vec<Post> {
    posts
        .iter()
        .filter(|post| post.id != id)
        .cloned()
        .collect()
}

/// The three demo posts installed at process startup.
fn seed_posts() -> Vec<Post> {
    vec![
        Post {
            id: "1".to_string(),
            title: "Exploring Cooking Methods: Elevate Your Culinary Skills".to_string(),
            author: "ChatGPT".to_string(),
            author_session: String::new(),
            content: "Cooking is an art and a science, offering various methods to transform \
                      raw ingredients into delectable dishes. Each technique imparts unique \
                      flavors and textures, making your meals more enjoyable. Here, we explore \
                      some fundamental cooking methods that can elevate your culinary skills."
                .to_string(),
            image: "images/food.jpg".to_string(),
            created: "14/06/2024 12:00:00".to_string(),
            updated: None,
        },
        Post {
            id: "2".to_string(),
            title: "The Power of Music: Connecting Minds and Hearts".to_string(),
            author: "ChatGPT".to_string(),
            author_session: String::new(),
            content: "Music, a universal language, has the incredible ability to connect people \
                      across cultures and generations. From the rhythmic beats of ancient drums \
                      to the complex compositions of modern symphonies, music transcends \
                      boundaries and speaks directly to our souls. Let's explore the profound \
                      impact of music on our lives and why it continues to be an essential part \
                      of human experience."
                .to_string(),
            image: "images/music.jpg".to_string(),
            created: "14/06/2024 12:01:00".to_string(),
            updated: None,
        },
        Post {
            id: "3".to_string(),
            title: "The Thrill of Sports: Uniting Passion and Perseverance".to_string(),
            author: "ChatGPT".to_string(),
            author_session: String::new(),
            content: "Sports have a unique way of captivating our hearts and minds, offering a \
                      blend of excitement, discipline, and camaraderie. From the roar of the \
                      crowd at a soccer match to the quiet intensity of a chess game, sports \
                      transcend barriers and bring people together. Let's delve into the \
                      multifaceted world of sports and explore why they are an integral part of \
                      our lives."
                .to_string(),
            image: "images/sports.jpg".to_string(),
            created: "14/06/2024 12:02:00".to_string(),
            updated: None,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PostDraft;

    fn post(id: &str, title: &str) -> Post {
        Post::new(
            id.to_string(),
            PostDraft {
                title: title.to_string(),
                author: "Ada".to_string(),
                author_session: "session-1".to_string(),
                content: "content".to_string(),
                image: "img".to_string(),
            },
        )
    }

    fn changes_from(post: &Post) -> PostChanges {
        PostChanges {
            title: post.title.clone(),
            author: post.author.clone(),
            content: post.content.clone(),
            image: post.image.clone(),
        }
    }

    #[test]
    fn next_id_starts_at_one_when_empty() {
        assert_eq!(PostStore::new().next_id(), "1");
    }

    #[test]
    fn next_id_increments_past_highest_numeric_id() {
        let mut store = PostStore::new();
        store.insert(post("1", "a"));
        store.insert(post("7", "b"));
        store.insert(post("3", "c"));
        assert_eq!(store.next_id(), "8");
    }

    #[test]
    fn next_id_ignores_non_numeric_ids() {
        let mut store = PostStore::new();
        store.insert(post("abc", "a"));
        assert_eq!(store.next_id(), "1");
    }

    #[test]
    fn sequential_ids_never_collide() {
        let mut store = PostStore::new();
        let first = store.next_id();
        store.insert(post(&first, "a"));
        let second = store.next_id();
        assert_ne!(first, second);
    }

    #[test]
    fn get_returns_every_present_post() {
        let store = PostStore::seeded();
        for expected in store.all().to_vec() {
            assert_eq!(store.get(&expected.id), Some(&expected));
        }
    }

    #[test]
    fn get_is_absent_for_unknown_id() {
        let store = PostStore::seeded();
        assert!(store.get("999").is_none());
        assert!(PostStore::new().get("1").is_none());
    }

    #[test]
    fn apply_changes_overwrites_only_differing_fields() {
        let mut store = PostStore::new();
        store.insert(post("1", "A"));

        let mut changes = changes_from(store.get("1").unwrap());
        changes.author = "Grace".to_string();
        assert!(store.apply_changes("1", &changes));

        let edited = store.get("1").unwrap();
        assert_eq!(edited.title, "A");
        assert_eq!(edited.author, "Grace");
        assert_eq!(edited.content, "content");
        assert!(edited.updated.is_some());
    }

    #[test]
    fn apply_changes_stamps_updated_even_without_field_changes() {
        let mut store = PostStore::new();
        store.insert(post("1", "A"));

        let changes = changes_from(store.get("1").unwrap());
        assert!(store.apply_changes("1", &changes));
        assert!(store.get("1").unwrap().updated.is_some());
    }

    #[test]
    fn apply_changes_miss_is_a_silent_noop() {
        let mut store = PostStore::new();
        store.insert(post("1", "A"));

        let changes = PostChanges {
            title: "X".to_string(),
            author: "X".to_string(),
            content: "X".to_string(),
            image: "X".to_string(),
        };
        assert!(!store.apply_changes("2", &changes));
        assert_eq!(store.get("1").unwrap().title, "A");
        assert!(store.get("1").unwrap().updated.is_none());
    }

    #[test]
    fn without_filters_only_the_matching_id() {
        let original = vec![post("1", "a"), post("2", "b"), post("3", "c")];
        let remaining = without(&original, "2");

        assert_eq!(remaining.len(), 2);
        assert!(remaining.iter().all(|p| p.id != "2"));
        assert_eq!(remaining[0], original[0]);
        assert_eq!(remaining[1], original[2]);
        // Input collection is untouched.
        assert_eq!(original.len(), 3);
    }

    #[test]
    fn without_miss_leaves_content_unchanged() {
        let original = vec![post("1", "a")];
        assert_eq!(without(&original, "9"), original);
    }

    #[test]
    fn delete_then_lookup_is_absent() {
        let mut store = PostStore::new();
        store.insert(post("1", "a"));

        assert!(store.delete("1"));
        assert!(store.is_empty());
        assert!(store.get("1").is_none());
        assert!(!store.delete("1"));
    }
}

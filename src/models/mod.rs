//! Data models for the blog service
//!
//! - `Post`: a single blog entry, the sole entity
//! - `PostDraft`: the submitted fields a new post is built from
//! - `PostChanges`: replacement values carried by an edit submission

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Timestamp format used for `created` and `updated` (e.g. `14/06/2024 12:00:00`).
const TIMESTAMP_FORMAT: &str = "%d/%m/%Y %H:%M:%S";

/// A single blog entry.
///
/// `image` holds either a filesystem-relative path (seed data) or an inline
/// base64 payload (uploads); there is no distinct binary type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    /// Unique within the collection, assigned at creation time.
    pub id: String,
    pub title: String,
    pub author: String,
    /// Opaque per-visitor token tagging authorship; no authorization semantics.
    pub author_session: String,
    pub content: String,
    pub image: String,
    /// Set once at construction, immutable thereafter.
    pub created: String,
    /// `None` until the first edit, then stamped on every subsequent edit.
    pub updated: Option<String>,
}

/// Submitted fields for a new post. No validation is applied; empty strings
/// are accepted verbatim.
#[derive(Debug, Clone)]
pub struct PostDraft {
    pub title: String,
    pub author: String,
    pub author_session: String,
    pub content: String,
    pub image: String,
}

/// Replacement values carried by an edit submission.
#[derive(Debug, Clone)]
pub struct PostChanges {
    pub title: String,
    pub author: String,
    pub content: String,
    pub image: String,
}

impl Post {
    /// Build a new post from submitted fields under a caller-assigned id.
    ///
    /// The caller (the store's id policy) is responsible for id uniqueness
    /// and for inserting the result into the collection.
    pub fn new(id: String, draft: PostDraft) -> Self {
        Post {
            id,
            title: draft.title,
            author: draft.author,
            author_session: draft.author_session,
            content: draft.content,
            image: draft.image,
            created: format_timestamp(Local::now()),
            updated: None,
        }
    }
}

/// Format a timestamp as `DD/MM/YYYY HH:MM:SS`.
pub fn format_timestamp(at: DateTime<Local>) -> String {
    at.format(TIMESTAMP_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> PostDraft {
        PostDraft {
            title: "A".to_string(),
            author: "Ada".to_string(),
            author_session: "session-1".to_string(),
            content: "first".to_string(),
            image: "images/a.jpg".to_string(),
        }
    }

    #[test]
    fn new_post_is_never_edited() {
        let post = Post::new("1".to_string(), draft());
        assert_eq!(post.id, "1");
        assert!(post.updated.is_none());
    }

    #[test]
    fn timestamp_format_is_day_first() {
        let at = Local::now();
        let formatted = format_timestamp(at);
        assert_eq!(formatted.len(), 19);
        assert_eq!(&formatted[2..3], "/");
        assert_eq!(&formatted[5..6], "/");
        assert_eq!(&formatted[10..11], " ");
        assert_eq!(&formatted[13..14], ":");
    }

    #[test]
    fn empty_fields_are_accepted_verbatim() {
        let post = Post::new(
            "1".to_string(),
            PostDraft {
                title: String::new(),
                author: String::new(),
                author_session: String::new(),
                content: String::new(),
                image: String::new(),
            },
        );
        assert_eq!(post.title, "");
        assert_eq!(post.content, "");
    }
}

//! HTTP handlers for the blog service
//!
//! - `pages`: render-only routes (`/`, `/list`, `/create`, `/view`, `/edit`)
//! - `posts`: mutation routes (`/submit`, `/submit-edit`, `/log-click`)
//! - `forms`: multipart form draining shared by the mutation routes

pub mod forms;
pub mod pages;
pub mod posts;

pub use pages::{create, edit, index, list, view};
pub use posts::{log_click, submit, submit_edit};

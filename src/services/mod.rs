//! Business logic layer for the blog service
//!
//! One service: posts. Handlers never touch the store directly; the
//! service owns the lock discipline around the shared collection.

pub mod posts;

pub use posts::PostService;

//! Blog Service Library
//!
//! A minimal server-rendered blog: posts are submitted through HTML forms,
//! held in a process-local in-memory store, and rendered back as pages.
//!
//! # Modules
//!
//! - `handlers`: HTTP request handlers for page and mutation routes
//! - `models`: The post entity and submitted-form data structures
//! - `store`: The in-memory post collection and its operations
//! - `services`: Business logic layer between handlers and the store
//! - `render`: Server-side HTML page assembly
//! - `middleware`: Visitor session cookie middleware
//! - `assets`: Image file loading and base64 encoding
//! - `error`: Error types and handling
//! - `config`: Configuration management

pub mod assets;
pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod render;
pub mod services;
pub mod store;

pub use config::Config;
pub use error::{AppError, Result};

use services::PostService;

/// Shared application state, injected into handlers via `web::Data`.
pub struct AppState {
    /// The post collection behind its lock discipline.
    pub posts: PostService,
    /// Base64 of the default post image, loaded once at startup.
    pub default_image: String,
}

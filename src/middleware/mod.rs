//! HTTP middleware for the blog service

pub mod session;

pub use session::{VisitorId, VisitorSessionMiddleware};

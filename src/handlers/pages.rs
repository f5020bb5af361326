//! Render-only page routes
//!
//! These take the read lock only; every mutation goes through the routes
//! in [`super::posts`].

use crate::middleware::VisitorId;
use crate::render;
use crate::AppState;
use actix_web::{web, HttpResponse};
use serde::Deserialize;

/// Query string carried by the view/edit routes (`?elementId=ID`).
#[derive(Debug, Deserialize)]
pub struct ElementQuery {
    #[serde(rename = "elementId")]
    pub element_id: String,
}

fn html(body: String) -> HttpResponse {
    HttpResponse::Ok()
        .content_type(mime::TEXT_HTML_UTF_8)
        .body(body)
}

fn not_found(id: &str) -> HttpResponse {
    HttpResponse::NotFound()
        .content_type(mime::TEXT_HTML_UTF_8)
        .body(render::not_found_page(id))
}

/// GET / - the homepage with all posts
pub async fn index(state: web::Data<AppState>, visitor: VisitorId) -> HttpResponse {
    let posts = state.posts.list().await;
    html(render::index_page(&posts, &visitor.0))
}

/// GET /list - compact listing with edit/delete controls
pub async fn list(state: web::Data<AppState>, visitor: VisitorId) -> HttpResponse {
    let posts = state.posts.list().await;
    html(render::list_page(&posts, &visitor.0))
}

/// GET /create - the new-post form
pub async fn create() -> HttpResponse {
    html(render::create_page())
}

/// GET /view?elementId=ID - a single post, or the not-found page
pub async fn view(
    state: web::Data<AppState>,
    query: web::Query<ElementQuery>,
    visitor: VisitorId,
) -> HttpResponse {
    match state.posts.get(&query.element_id).await {
        Some(post) => html(render::view_page(&post, &visitor.0)),
        None => not_found(&query.element_id),
    }
}

/// GET /edit?elementId=ID - the edit form, or the not-found page
pub async fn edit(
    state: web::Data<AppState>,
    query: web::Query<ElementQuery>,
    visitor: VisitorId,
) -> HttpResponse {
    match state.posts.get(&query.element_id).await {
        Some(post) => html(render::edit_page(&post, &visitor.0)),
        None => not_found(&query.element_id),
    }
}

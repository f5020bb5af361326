//! Mutation routes: submit, submit-edit and the click dispatcher

use crate::error::Result;
use crate::handlers::forms;
use crate::middleware::VisitorId;
use crate::models::{PostChanges, PostDraft};
use crate::AppState;
use actix_multipart::Multipart;
use actix_web::{http::header, web, HttpResponse};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{Deserialize, Serialize};

/// Click event posted by the pages' inline script.
#[derive(Debug, Deserialize)]
pub struct ClickEvent {
    #[serde(rename = "elementId")]
    pub element_id: String,
}

/// Navigation target answered to the click script.
#[derive(Debug, Serialize)]
pub struct ClickRedirect {
    #[serde(rename = "redirectUrl")]
    pub redirect_url: String,
}

fn redirect_to(url: &str) -> HttpResponse {
    HttpResponse::Found()
        .insert_header((header::LOCATION, url))
        .finish()
}

/// POST /submit - create a post from the submission form
///
/// Uploaded image bytes are base64-encoded inline; submissions without an
/// upload fall back to the default image loaded at startup.
pub async fn submit(
    state: web::Data<AppState>,
    visitor: VisitorId,
    payload: Multipart,
) -> Result<HttpResponse> {
    let form = forms::read_post_form(payload).await?;

    let image = match &form.image {
        Some(bytes) => {
            tracing::info!(size = bytes.len(), "image uploaded with submission");
            STANDARD.encode(bytes)
        }
        None => {
            tracing::debug!("no image uploaded, using default");
            state.default_image.clone()
        }
    };

    let post = state
        .posts
        .create(PostDraft {
            title: form.title,
            author: form.author,
            author_session: visitor.0,
            content: form.content,
            image,
        })
        .await;

    tracing::info!(post_id = %post.id, "post created");

    Ok(redirect_to(&format!("/view?elementId={}", post.id)))
}

/// POST /submit-edit - apply an edit submission
///
/// Only fields that differ from the stored values are overwritten; the
/// replacement image is the upload when present, the default image
/// otherwise. An unknown id is a silent no-op.
pub async fn submit_edit(
    state: web::Data<AppState>,
    payload: Multipart,
) -> Result<HttpResponse> {
    let form = forms::read_post_form(payload).await?;

    let Some(post_id) = form.post_id.clone() else {
        return Err(crate::AppError::BadRequest(
            "edit submission is missing post-id".to_string(),
        ));
    };

    let image = match &form.image {
        Some(bytes) => STANDARD.encode(bytes),
        None => state.default_image.clone(),
    };

    let changes = PostChanges {
        title: form.title,
        author: form.author,
        content: form.content,
        image,
    };

    let matched = state.posts.edit(&post_id, &changes).await;
    tracing::info!(%post_id, matched, "edit submitted");

    Ok(redirect_to(&format!("/view?elementId={post_id}")))
}

/// POST /log-click - dispatch a clicked element id to a navigation target
///
/// The suffix conventions come from the rendered pages: `{id}_edit_btn`
/// (edit form submission), `{id}_dlt_btn` (delete), `{id}_edit` (edit
/// form), anything else is treated as a post id to view.
pub async fn log_click(
    state: web::Data<AppState>,
    event: web::Json<ClickEvent>,
) -> HttpResponse {
    let element_id = &event.element_id;
    tracing::info!(%element_id, "element clicked");

    let redirect_url = if element_id.contains("_edit_btn") {
        format!("/submit-edit?elementId={}", id_prefix(element_id))
    } else if element_id.contains("dlt_btn") {
        let post_id = id_prefix(element_id);
        let deleted = state.posts.delete(post_id).await;
        tracing::info!(%post_id, deleted, "delete requested");
        "/".to_string()
    } else if element_id.contains("_edit") {
        format!("/edit?elementId={}", id_prefix(element_id))
    } else {
        format!("/view?elementId={element_id}")
    };

    HttpResponse::Ok().json(ClickRedirect { redirect_url })
}

/// The post id portion of a composite element id (`"3_dlt_btn"` -> `"3"`).
fn id_prefix(element_id: &str) -> &str {
    element_id.split('_').next().unwrap_or(element_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_prefix_strips_suffixes() {
        assert_eq!(id_prefix("3_dlt_btn"), "3");
        assert_eq!(id_prefix("12_edit"), "12");
        assert_eq!(id_prefix("7"), "7");
    }
}

//! Multipart form draining for the submit routes
//!
//! Field names match the HTML forms: `post-title`, `post-author`,
//! `post-content`, `post-id` (edit only) and the optional `post-image`
//! file. Unknown fields are drained and dropped.

use crate::error::{AppError, Result};
use actix_multipart::Multipart;
use futures_util::StreamExt;

/// The parsed submit/submit-edit form. Text fields default to empty
/// strings; values are stored verbatim, with no validation.
#[derive(Debug, Default)]
pub struct PostForm {
    /// Present only on edit submissions.
    pub post_id: Option<String>,
    pub title: String,
    pub author: String,
    pub content: String,
    /// Raw bytes of the uploaded image, when a non-empty file was sent.
    pub image: Option<Vec<u8>>,
}

/// Drain a multipart payload into a [`PostForm`].
pub async fn read_post_form(mut payload: Multipart) -> Result<PostForm> {
    let mut form = PostForm::default();

    while let Some(item) = payload.next().await {
        let mut field =
            item.map_err(|e| AppError::BadRequest(format!("malformed multipart payload: {e}")))?;

        let Some(name) = field.name().map(|n| n.to_string()) else {
            continue;
        };

        let mut data = Vec::new();
        while let Some(chunk) = field.next().await {
            let bytes = chunk
                .map_err(|e| AppError::BadRequest(format!("failed reading field {name}: {e}")))?;
            data.extend_from_slice(&bytes);
        }

        match name.as_str() {
            "post-title" => form.title = text_field(&name, data)?,
            "post-author" => form.author = text_field(&name, data)?,
            "post-content" => form.content = text_field(&name, data)?,
            "post-id" => form.post_id = Some(text_field(&name, data)?),
            // A file input with nothing selected still submits an empty part.
            "post-image" => {
                if !data.is_empty() {
                    form.image = Some(data);
                }
            }
            _ => {}
        }
    }

    Ok(form)
}

fn text_field(name: &str, data: Vec<u8>) -> Result<String> {
    String::from_utf8(data)
        .map_err(|_| AppError::BadRequest(format!("field {name} is not valid UTF-8")))
}

//! Server-side HTML page assembly
//!
//! Pages are built with `format!` over a shared layout; user-supplied
//! values are escaped on output. The click targets (`{id}_edit`,
//! `{id}_dlt_btn`, ...) are posted back to `/log-click`, which answers
//! with the URL to navigate to.

use crate::models::Post;

/// Escape a value for interpolation into HTML text or attributes.
pub fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// `src` attribute for a post image: seed posts carry a relative path,
/// submitted posts carry inline base64.
fn image_src(post: &Post) -> String {
    if post.image.starts_with("images/") {
        escape_html(&post.image)
    } else {
        format!("data:image/png;base64,{}", post.image)
    }
}

/// Shared page skeleton, including the click-logging script.
fn layout(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <title>{title}</title>\n\
         </head>\n\
         <body>\n\
         {body}\n\
         <script>\n\
         function logClick(elementId) {{\n\
           fetch('/log-click', {{\n\
             method: 'POST',\n\
             headers: {{ 'Content-Type': 'application/json' }},\n\
             body: JSON.stringify({{ elementId: elementId }})\n\
           }})\n\
             .then(function (res) {{ return res.json(); }})\n\
             .then(function (data) {{ window.location.href = data.redirectUrl; }});\n\
         }}\n\
         </script>\n\
         </body>\n\
         </html>\n",
        title = escape_html(title),
        body = body,
    )
}

fn post_card(post: &Post) -> String {
    format!(
        "<article class=\"post\" id=\"{id}\" onclick=\"logClick('{id}')\">\n\
         <h2>{title}</h2>\n\
         <p class=\"byline\">by {author} on {created}</p>\n\
         <img src=\"{src}\" alt=\"{title}\">\n\
         <p>{content}</p>\n\
         </article>",
        id = escape_html(&post.id),
        title = escape_html(&post.title),
        author = escape_html(&post.author),
        created = escape_html(&post.created),
        src = image_src(post),
        content = escape_html(&post.content),
    )
}

/// The homepage: every post, newest last.
pub fn index_page(posts: &[Post], visitor_id: &str) -> String {
    let cards: Vec<String> = posts.iter().map(post_card).collect();
    let body = format!(
        "<header>\n\
         <h1>Blog</h1>\n\
         <nav><a href=\"/create\">New post</a> <a href=\"/list\">All posts</a></nav>\n\
         <p class=\"session\">session {visitor}</p>\n\
         </header>\n\
         {cards}",
        visitor = escape_html(visitor_id),
        cards = cards.join("\n"),
    );
    layout("Blog", &body)
}

/// Compact listing with per-post edit and delete controls.
pub fn list_page(posts: &[Post], visitor_id: &str) -> String {
    let rows: Vec<String> = posts
        .iter()
        .map(|post| {
            format!(
                "<li>\n\
                 <span id=\"{id}\" onclick=\"logClick('{id}')\">{title}</span>\n\
                 <button id=\"{id}_edit\" onclick=\"logClick('{id}_edit')\">Edit</button>\n\
                 <button id=\"{id}_dlt_btn\" onclick=\"logClick('{id}_dlt_btn')\">Delete</button>\n\
                 </li>",
                id = escape_html(&post.id),
                title = escape_html(&post.title),
            )
        })
        .collect();
    let body = format!(
        "<h1>All posts</h1>\n\
         <p class=\"session\">session {visitor}</p>\n\
         <ul>\n{rows}\n</ul>\n\
         <a href=\"/\">Home</a>",
        visitor = escape_html(visitor_id),
        rows = rows.join("\n"),
    );
    layout("All posts", &body)
}

/// A single post.
pub fn view_page(post: &Post, visitor_id: &str) -> String {
    let updated = match &post.updated {
        Some(at) => format!("<p class=\"updated\">updated {}</p>", escape_html(at)),
        None => String::new(),
    };
    let body = format!(
        "<article>\n\
         <h1>{title}</h1>\n\
         <p class=\"byline\">by {author} on {created}</p>\n\
         {updated}\n\
         <img src=\"{src}\" alt=\"{title}\">\n\
         <p>{content}</p>\n\
         </article>\n\
         <button id=\"{id}_edit\" onclick=\"logClick('{id}_edit')\">Edit</button>\n\
         <button id=\"{id}_dlt_btn\" onclick=\"logClick('{id}_dlt_btn')\">Delete</button>\n\
         <p class=\"session\">session {visitor}</p>\n\
         <a href=\"/\">Home</a>",
        id = escape_html(&post.id),
        title = escape_html(&post.title),
        author = escape_html(&post.author),
        created = escape_html(&post.created),
        updated = updated,
        src = image_src(post),
        content = escape_html(&post.content),
        visitor = escape_html(visitor_id),
    );
    layout(&post.title, &body)
}

/// The submission form for a new post.
pub fn create_page() -> String {
    let body = "<h1>New post</h1>\n\
         <form action=\"/submit\" method=\"post\" enctype=\"multipart/form-data\">\n\
         <label>Title <input type=\"text\" name=\"post-title\"></label>\n\
         <label>Author <input type=\"text\" name=\"post-author\"></label>\n\
         <label>Content <textarea name=\"post-content\"></textarea></label>\n\
         <label>Image <input type=\"file\" name=\"post-image\"></label>\n\
         <button type=\"submit\">Publish</button>\n\
         </form>\n\
         <a href=\"/\">Home</a>";
    layout("New post", body)
}

/// The edit form, pre-filled from the stored post.
pub fn edit_page(post: &Post, visitor_id: &str) -> String {
    let body = format!(
        "<h1>Edit post</h1>\n\
         <form action=\"/submit-edit\" method=\"post\" enctype=\"multipart/form-data\">\n\
         <input type=\"hidden\" name=\"post-id\" value=\"{id}\">\n\
         <label>Title <input type=\"text\" name=\"post-title\" value=\"{title}\"></label>\n\
         <label>Author <input type=\"text\" name=\"post-author\" value=\"{author}\"></label>\n\
         <label>Content <textarea name=\"post-content\">{content}</textarea></label>\n\
         <label>Image <input type=\"file\" name=\"post-image\"></label>\n\
         <button type=\"submit\">Save</button>\n\
         </form>\n\
         <p class=\"session\">session {visitor}</p>\n\
         <a href=\"/\">Home</a>",
        id = escape_html(&post.id),
        title = escape_html(&post.title),
        author = escape_html(&post.author),
        content = escape_html(&post.content),
        visitor = escape_html(visitor_id),
    );
    layout("Edit post", &body)
}

/// Rendered when a lookup misses; absence is a page, not an error value.
pub fn not_found_page(id: &str) -> String {
    let body = format!(
        "<h1>Post not found</h1>\n\
         <p>No post with id {id} exists.</p>\n\
         <a href=\"/\">Home</a>",
        id = escape_html(id),
    );
    layout("Post not found", &body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Post, PostDraft};

    fn post(title: &str) -> Post {
        Post::new(
            "1".to_string(),
            PostDraft {
                title: title.to_string(),
                author: "Ada".to_string(),
                author_session: "session-1".to_string(),
                content: "content".to_string(),
                image: "aGk=".to_string(),
            },
        )
    }

    #[test]
    fn escapes_html_metacharacters() {
        assert_eq!(
            escape_html("<b>\"a\" & 'b'</b>"),
            "&lt;b&gt;&quot;a&quot; &amp; &#39;b&#39;&lt;/b&gt;"
        );
    }

    #[test]
    fn view_page_escapes_user_content() {
        let page = view_page(&post("<script>alert(1)</script>"), "v-1");
        assert!(!page.contains("<script>alert(1)</script>"));
        assert!(page.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
    }

    #[test]
    fn seed_image_paths_render_as_src_uploads_as_data_uri() {
        let mut seeded = post("a");
        seeded.image = "images/food.jpg".to_string();
        assert!(view_page(&seeded, "v").contains("src=\"images/food.jpg\""));

        let uploaded = post("b");
        assert!(view_page(&uploaded, "v").contains("src=\"data:image/png;base64,aGk=\""));
    }

    #[test]
    fn edit_page_carries_the_post_id() {
        let page = edit_page(&post("a"), "v-1");
        assert!(page.contains("name=\"post-id\" value=\"1\""));
    }
}

//! Form payloads submitted by the post views.

use serde::{Deserialize, Serialize};

use blog_core::domain::{NewPost, PostChanges};
use blog_core::sanitize::sanitize_html;

/// URL-encoded post form. Every field is optional so partial submissions
/// still parse; missing fields are left untouched on update.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PostForm {
    #[serde(rename = "blog[title]")]
    pub title: Option<String>,
    #[serde(rename = "blog[image]")]
    pub image: Option<String>,
    #[serde(rename = "blog[body]")]
    pub body: Option<String>,
}

impl PostForm {
    /// Fields for a new post, with the body sanitized.
    pub fn into_new_post(self) -> NewPost {
        NewPost {
            title: self.title.unwrap_or_default(),
            image: self.image.unwrap_or_default(),
            body: sanitize_html(&self.body.unwrap_or_default()),
        }
    }

    /// Change set for an existing post, with the body sanitized.
    pub fn into_changes(self) -> PostChanges {
        PostChanges {
            title: self.title,
            image: self.image,
            body: self.body.as_deref().map(sanitize_html),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_post_sanitizes_body_only() {
        let form = PostForm {
            title: Some("<i>T</i>".to_string()),
            image: Some("https://example.com/x.png".to_string()),
            body: Some("<script>x</script>hello".to_string()),
        };

        let post = form.into_new_post();
        assert_eq!(post.title, "<i>T</i>");
        assert_eq!(post.image, "https://example.com/x.png");
        assert_eq!(post.body, "hello");
    }

    #[test]
    fn test_missing_fields_default_to_empty() {
        let post = PostForm::default().into_new_post();
        assert_eq!(post, NewPost::default());
    }

    #[test]
    fn test_changes_keep_absent_fields_absent() {
        let changes = PostForm {
            body: Some("<b>ok</b><script>bad()</script>".to_string()),
            ..Default::default()
        }
        .into_changes();

        assert_eq!(changes.title, None);
        assert_eq!(changes.image, None);
        assert_eq!(changes.body.as_deref(), Some("<b>ok</b>"));
    }
}

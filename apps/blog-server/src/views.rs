//! Server-side views rendered with Tera templates embedded in the binary.

use std::collections::HashMap;

use actix_web::HttpResponse;
use actix_web::http::StatusCode;
use actix_web::http::header::ContentType;
use tera::{Context, Tera, Value};

use blog_core::sanitize::plain_text;

use crate::middleware::error::AppResult;

const TEMPLATES: &[(&str, &str)] = &[
    ("layout.html", include_str!("../templates/layout.html")),
    ("index.html", include_str!("../templates/index.html")),
    ("new.html", include_str!("../templates/new.html")),
    ("show.html", include_str!("../templates/show.html")),
    ("edit.html", include_str!("../templates/edit.html")),
];

/// Characters kept by the `excerpt` filter when no `length` is given.
const EXCERPT_LENGTH: usize = 100;

/// Standalone so it still renders when the main template set is unavailable.
const ERROR_TEMPLATE: &str = include_str!("../templates/error.html");

/// Page renderer shared by all handlers.
pub struct Views {
    tera: Tera,
}

impl Views {
    /// Compile the embedded templates.
    pub fn new() -> Result<Self, tera::Error> {
        let mut tera = Tera::default();
        register_filters(&mut tera);
        tera.add_raw_templates(TEMPLATES.iter().copied())?;

        tracing::debug!(count = TEMPLATES.len(), "Templates loaded");
        Ok(Self { tera })
    }

    /// Render `template` as a `200 OK` HTML page.
    pub fn render(&self, template: &str, context: &Context) -> AppResult<HttpResponse> {
        self.render_with_status(StatusCode::OK, template, context)
    }

    pub fn render_with_status(
        &self,
        status: StatusCode,
        template: &str,
        context: &Context,
    ) -> AppResult<HttpResponse> {
        let html = self.tera.render(template, context)?;
        Ok(HttpResponse::build(status)
            .content_type(ContentType::html())
            .body(html))
    }
}

fn register_filters(tera: &mut Tera) {
    // Plain-text preview of a sanitized body; autoescape applies to the result.
    tera.register_filter(
        "excerpt",
        |value: &Value, args: &HashMap<String, Value>| {
            let html = tera::try_get_value!("excerpt", "value", String, value);
            let length = args
                .get("length")
                .and_then(Value::as_u64)
                .map_or(EXCERPT_LENGTH, |n| n as usize);

            Ok(Value::String(excerpt(&plain_text(&html), length)))
        },
    );
}

/// First `length` characters of `text`, with an ellipsis when cut.
fn excerpt(text: &str, length: usize) -> String {
    match text.char_indices().nth(length) {
        Some((cut, _)) => format!("{}…", text[..cut].trim_end()),
        None => text.to_string(),
    }
}

/// Render the error page. Falls back to plain text if the template fails.
pub fn error_page(status: StatusCode, title: &str, detail: Option<&str>) -> String {
    let mut context = Context::new();
    context.insert("status", &status.as_u16());
    context.insert("title", title);
    context.insert("detail", &detail);

    Tera::one_off(ERROR_TEMPLATE, &context, true).unwrap_or_else(|e| {
        tracing::error!(error = %e, "Failed to render error page");
        format!("{} {}", status.as_u16(), title)
    })
}

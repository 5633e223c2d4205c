//! Error handling - rendered HTML error pages.

use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use thiserror::Error;

use blog_core::StoreError;

use crate::views;

/// Application-level error type that converts to an HTML error page.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Unprocessable: {0}")]
    Unprocessable(String),

    #[error("Service unavailable: {0}")]
    Unavailable(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        let (title, detail) = match self {
            AppError::NotFound(detail) => ("Not Found", Some(detail.as_str())),
            AppError::BadRequest(detail) => ("Bad Request", Some(detail.as_str())),
            AppError::Unprocessable(_) => (
                "Unprocessable Entity",
                Some("The post could not be saved."),
            ),
            AppError::Unavailable(detail) => {
                tracing::error!("Store unavailable: {}", detail);
                (
                    "Service Unavailable",
                    Some("The blog is temporarily unavailable. Please try again later."),
                )
            }
            AppError::Internal(detail) => {
                // Log internal errors, never show them
                tracing::error!("Internal error: {}", detail);
                ("Internal Server Error", None)
            }
        };

        HttpResponse::build(status)
            .content_type(ContentType::html())
            .body(views::error_page(status, title, detail))
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound => AppError::NotFound("Post not found".to_string()),
            StoreError::Unavailable(msg) => AppError::Unavailable(msg),
            StoreError::Write(msg) => AppError::Unprocessable(msg),
        }
    }
}

impl From<tera::Error> for AppError {
    fn from(err: tera::Error) -> Self {
        AppError::Internal(format!("template rendering failed: {err:?}"))
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;

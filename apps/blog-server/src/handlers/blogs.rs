//! Post handlers - the RESTful routes under `/blogs`.
//!
//! Lookup, update and delete failures redirect to the post list; only the
//! list itself and the creation form surface store errors to the client.

use actix_web::{HttpResponse, ResponseError, http::header, web};
use tera::Context;

use blog_core::StoreError;
use blog_core::domain::{NewPost, Post, PostChanges, PostId};

use crate::dto::PostForm;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

const INDEX_PATH: &str = "/blogs";

fn redirect(location: &str) -> HttpResponse {
    HttpResponse::Found()
        .insert_header((header::LOCATION, location))
        .finish()
}

fn log_store_error(err: &StoreError, action: &str, raw_id: &str) {
    if err.is_not_found() {
        tracing::warn!(post_id = raw_id, action, "Post not found");
    } else {
        tracing::error!(post_id = raw_id, action, error = %err, "Store operation failed");
    }
}

async fn find_post(state: &AppState, raw_id: &str) -> Result<Post, StoreError> {
    let id: PostId = raw_id.parse()?;
    state.posts.find_by_id(id).await
}

async fn update_post(
    state: &AppState,
    raw_id: &str,
    changes: PostChanges,
) -> Result<Post, StoreError> {
    let id: PostId = raw_id.parse()?;
    state.posts.update_by_id(id, changes).await
}

async fn delete_post(state: &AppState, raw_id: &str) -> Result<(), StoreError> {
    let id: PostId = raw_id.parse()?;
    state.posts.delete_by_id(id).await
}

/// GET /
pub async fn root() -> HttpResponse {
    redirect(INDEX_PATH)
}

/// GET /blogs
pub async fn index(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.posts.list_all().await.map_err(|err| {
        tracing::error!(error = %err, "Failed to list posts");
        AppError::from(err)
    })?;

    let mut context = Context::new();
    context.insert("blogs", &posts);
    state.views.render("index.html", &context)
}

/// GET /blogs/new
pub async fn new_form(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let mut context = Context::new();
    context.insert("blog", &NewPost::default());
    state.views.render("new.html", &context)
}

/// POST /blogs
pub async fn create(
    state: web::Data<AppState>,
    form: web::Form<PostForm>,
) -> AppResult<HttpResponse> {
    let fields = form.into_inner().into_new_post();

    match state.posts.create(fields.clone()).await {
        Ok(post) => {
            tracing::info!(post_id = %post.id, title = %post.title, "Post created");
            Ok(redirect(INDEX_PATH))
        }
        Err(err) => {
            tracing::error!(error = %err, "Failed to create post");

            // Re-render the form with what was submitted.
            let status = AppError::from(err).status_code();
            let mut context = Context::new();
            context.insert("blog", &fields);
            context.insert("error", "The post could not be saved. Please try again.");
            state.views.render_with_status(status, "new.html", &context)
        }
    }
}

/// GET /blogs/{id}
pub async fn show(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    match find_post(&state, &path).await {
        Ok(post) => {
            let mut context = Context::new();
            context.insert("blog", &post);
            state.views.render("show.html", &context)
        }
        Err(err) => {
            log_store_error(&err, "show", &path);
            Ok(redirect(INDEX_PATH))
        }
    }
}

/// GET /blogs/{id}/edit
pub async fn edit_form(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    match find_post(&state, &path).await {
        Ok(post) => {
            let mut context = Context::new();
            context.insert("blog", &post);
            state.views.render("edit.html", &context)
        }
        Err(err) => {
            log_store_error(&err, "edit", &path);
            Ok(redirect(INDEX_PATH))
        }
    }
}

/// PUT /blogs/{id}
///
/// An unreadable form body counts as a failed update.
pub async fn update(
    state: web::Data<AppState>,
    path: web::Path<String>,
    form: Option<web::Form<PostForm>>,
) -> HttpResponse {
    let Some(form) = form else {
        tracing::warn!(post_id = %path, "Update without a readable form body");
        return redirect(INDEX_PATH);
    };
    let changes = form.into_inner().into_changes();

    match update_post(&state, &path, changes).await {
        Ok(post) => {
            tracing::info!(post_id = %post.id, "Post updated");
            redirect(&format!("{INDEX_PATH}/{}", post.id))
        }
        Err(err) => {
            log_store_error(&err, "update", &path);
            redirect(INDEX_PATH)
        }
    }
}

/// DELETE /blogs/{id}
pub async fn destroy(state: web::Data<AppState>, path: web::Path<String>) -> HttpResponse {
    match delete_post(&state, &path).await {
        Ok(()) => tracing::info!(post_id = %path, "Post deleted"),
        Err(err) => log_store_error(&err, "delete", &path),
    }

    redirect(INDEX_PATH)
}

//! HTTP handlers and route configuration.

mod blogs;
mod health;

use actix_web::{HttpRequest, web};

use crate::middleware::error::{AppError, AppResult};

/// Largest accepted form body.
const FORM_LIMIT: usize = 256 * 1024;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::FormConfig::default()
            .limit(FORM_LIMIT)
            .error_handler(|err, _req| AppError::BadRequest(err.to_string()).into()),
    )
    .route("/", web::get().to(blogs::root))
    .route("/health", web::get().to(health::health_check))
    .service(
        web::scope("/blogs")
            .service(
                web::resource("")
                    .route(web::get().to(blogs::index))
                    .route(web::post().to(blogs::create)),
            )
            // Must precede "/{id}" so "new" is not taken for an id.
            .service(web::resource("/new").route(web::get().to(blogs::new_form)))
            .service(
                web::resource("/{id}")
                    .route(web::get().to(blogs::show))
                    .route(web::put().to(blogs::update))
                    .route(web::patch().to(blogs::update))
                    .route(web::delete().to(blogs::destroy)),
            )
            .service(web::resource("/{id}/edit").route(web::get().to(blogs::edit_form))),
    )
    .default_service(web::to(not_found));
}

async fn not_found(req: HttpRequest) -> AppResult<&'static str> {
    Err(AppError::NotFound(format!(
        "No page at {} {}",
        req.method(),
        req.path()
    )))
}

//! # Blog Server
//!
//! The main entry point for the Actix-web HTTP server.

use actix_files::Files;
use actix_web::{App, HttpServer, web};
use tracing_actix_web::TracingLogger;

mod config;
mod dto;
mod handlers;
mod middleware;
mod state;
mod telemetry;
mod views;

use config::AppConfig;
use middleware::MethodOverride;
use state::AppState;
use telemetry::TelemetryConfig;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    telemetry::init_telemetry(&TelemetryConfig::from_env());

    let config = AppConfig::from_env();

    tracing::info!("Starting blog server on {}:{}", config.host, config.port);

    // An unreachable database aborts startup here.
    let state = AppState::from_config(&config).await?;

    let public_dir = config.public_dir.clone();
    if !public_dir.is_dir() {
        tracing::warn!(path = %public_dir.display(), "Static directory missing, /public disabled");
    }

    HttpServer::new(move || {
        let public_dir = public_dir.clone();
        App::new()
            .wrap(MethodOverride)
            .wrap(TracingLogger::default())
            .app_data(web::Data::new(state.clone()))
            .configure(move |cfg| {
                if public_dir.is_dir() {
                    cfg.service(Files::new("/public", public_dir));
                }
            })
            .configure(handlers::configure_routes)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await?;

    tracing::info!("Server stopped");
    Ok(())
}

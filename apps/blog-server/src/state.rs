//! Application state - shared across all handlers.

use std::sync::Arc;

use anyhow::Context;
use blog_core::ports::PostRepository;
use blog_infra::InMemoryPostRepository;

#[cfg(feature = "postgres")]
use blog_infra::PostgresPostRepository;
#[cfg(feature = "postgres")]
use migration::{Migrator, MigratorTrait};

use crate::config::AppConfig;
use crate::views::Views;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn PostRepository>,
    pub views: Arc<Views>,
}

impl AppState {
    pub fn new(posts: Arc<dyn PostRepository>, views: Arc<Views>) -> Self {
        Self { posts, views }
    }

    /// Build the application state from configuration.
    ///
    /// Fails if a configured database cannot be reached; the caller aborts
    /// startup in that case.
    pub async fn from_config(config: &AppConfig) -> anyhow::Result<Self> {
        let views = Arc::new(Views::new().context("failed to compile templates")?);
        let posts = build_repository(config).await?;

        tracing::info!("Application state initialized");

        Ok(Self::new(posts, views))
    }
}

#[cfg(feature = "postgres")]
async fn build_repository(config: &AppConfig) -> anyhow::Result<Arc<dyn PostRepository>> {
    let Some(db_config) = &config.database else {
        tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
        return Ok(Arc::new(InMemoryPostRepository::new()));
    };

    let conn = blog_infra::connect(db_config)
        .await
        .context("failed to connect to database")?;

    if config.run_migrations {
        Migrator::up(&conn, None)
            .await
            .context("failed to run migrations")?;
        tracing::info!("Migrations applied");
    }

    Ok(Arc::new(PostgresPostRepository::new(conn)))
}

#[cfg(not(feature = "postgres"))]
async fn build_repository(config: &AppConfig) -> anyhow::Result<Arc<dyn PostRepository>> {
    if config.database.is_some() {
        anyhow::bail!("DATABASE_URL is set but the server was built without the postgres feature");
    }

    tracing::info!("Running without postgres feature - using in-memory repository");
    Ok(Arc::new(InMemoryPostRepository::new()))
}

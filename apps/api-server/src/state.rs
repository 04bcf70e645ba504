//! Application state - shared across all handlers.

use std::sync::Arc;

use bms_core::PostService;
use bms_core::ports::{PostRepository, TokenService};
use bms_infra::database::{DatabaseConnections, InMemoryPostRepository};

use crate::config::AppConfig;

#[cfg(feature = "postgres")]
use bms_infra::database::PostgresPostRepository;
#[cfg(feature = "postgres")]
use migration::{Migrator, MigratorTrait};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: PostService,
    pub token_service: Arc<dyn TokenService>,
    /// Token scope required by mutations.
    pub required_scope: String,
    pub db: Option<Arc<DatabaseConnections>>,
}

impl AppState {
    /// Build the application state with appropriate implementations.
    pub async fn new(config: &AppConfig, token_service: Arc<dyn TokenService>) -> Self {
        #[cfg(feature = "postgres")]
        let (db, repo): (Option<Arc<DatabaseConnections>>, Arc<dyn PostRepository>) = {
            if let Some(db_config) = &config.database {
                match DatabaseConnections::init(db_config).await {
                    Ok(connections) => {
                        if config.auto_migrate {
                            if let Err(e) = Migrator::up(connections.main.as_ref(), None).await {
                                tracing::error!("Failed to apply migrations: {}", e);
                            }
                        }
                        let conn = Arc::new(connections);
                        let repo = Arc::new(PostgresPostRepository::new(Arc::clone(&conn.main)));
                        (Some(conn), repo)
                    }
                    Err(e) => {
                        tracing::error!(
                            "Failed to connect to database: {}. Using in-memory fallback.",
                            e
                        );
                        (None, Arc::new(InMemoryPostRepository::new()))
                    }
                }
            } else {
                tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
                (None, Arc::new(InMemoryPostRepository::new()))
            }
        };

        #[cfg(not(feature = "postgres"))]
        let (db, repo): (Option<Arc<DatabaseConnections>>, Arc<dyn PostRepository>) = {
            tracing::info!("Running without postgres feature - using in-memory repository");
            (None, Arc::new(InMemoryPostRepository::new()))
        };

        tracing::info!("Application state initialized");

        Self {
            db,
            ..Self::with_repository(repo, token_service, config.required_scope.clone())
        }
    }

    /// Build state over an existing repository, without a database handle.
    pub fn with_repository(
        repo: Arc<dyn PostRepository>,
        token_service: Arc<dyn TokenService>,
        required_scope: impl Into<String>,
    ) -> Self {
        Self {
            posts: PostService::new(repo),
            token_service,
            required_scope: required_scope.into(),
            db: None,
        }
    }
}

//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use reaction_common::{AppConfig, AppError, AppResult, StorageBackend};
use reaction_core::{EmojiSet, ReactionRepository};
use reaction_db::{
    create_pool, run_migrations, InMemoryReactionRepository, PgReactionRepository, PoolConfig,
};
use reaction_service::ServiceContextBuilder;
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::middleware::apply_middleware;
use crate::routes::create_router;
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    let timeout = state.config().api.request_timeout();
    let router = create_router();
    let router = apply_middleware(router, timeout);
    router.with_state(state)
}

/// Open the configured reaction store
async fn create_reaction_repo(config: &AppConfig) -> AppResult<Arc<dyn ReactionRepository>> {
    match config.storage {
        StorageBackend::Memory => {
            info!("Using in-memory reaction store");
            Ok(Arc::new(InMemoryReactionRepository::new()))
        }
        StorageBackend::Postgres => {
            let db = config
                .database
                .as_ref()
                .ok_or_else(|| AppError::config("DATABASE_URL is required for postgres storage"))?;

            info!("Connecting to PostgreSQL...");
            let pool = create_pool(&PoolConfig::from(db))
                .await
                .map_err(AppError::database)?;
            info!("PostgreSQL connection established");

            if db.run_migrations {
                run_migrations(&pool, &db.migrations_dir)
                    .await
                    .map_err(AppError::database)?;
            }

            Ok(Arc::new(PgReactionRepository::new(pool)))
        }
    }
}

/// Initialize all dependencies and create AppState
pub async fn create_app_state(config: AppConfig) -> AppResult<AppState> {
    let reaction_repo = create_reaction_repo(&config).await?;

    let service_context = ServiceContextBuilder::new()
        .reaction_repo(reaction_repo)
        .emojis(EmojiSet::default())
        .emoji_policy(config.reactions.emoji_policy)
        .build()
        .map_err(|e| AppError::config(e.to_string()))?;

    Ok(AppState::new(service_context, config))
}

/// Run the HTTP server until a shutdown signal arrives
pub async fn run_server(app: Router, addr: SocketAddr) -> AppResult<()> {
    info!("Starting HTTP server on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::config(format!("Failed to bind to {}: {}", addr, e)))?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::config(format!("Server error: {}", e)))?;

    info!("Server stopped");
    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> AppResult<()> {
    let addr: SocketAddr = config
        .api
        .address()
        .parse()
        .map_err(|e| AppError::config(format!("Invalid listen address {}: {}", config.api.address(), e)))?;

    let state = create_app_state(config).await?;
    let app = create_app(state);

    run_server(app, addr).await
}

/// Resolves on Ctrl+C or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    info!("Shutdown signal received, draining connections");
}

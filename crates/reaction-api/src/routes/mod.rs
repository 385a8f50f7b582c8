//! Route definitions

use axum::{routing::get, Router};

use crate::handlers::{health, reactions};
use crate::state::AppState;

/// Create the main router with all routes
pub fn create_router() -> Router<AppState> {
    Router::new()
        .merge(health_routes())
        .nest("/api", api_routes())
}

/// Health check routes
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// Reaction routes
fn api_routes() -> Router<AppState> {
    Router::new().route(
        "/reactions/:post_id",
        get(reactions::get_reactions).post(reactions::update_reaction),
    )
}

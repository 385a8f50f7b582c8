//! Response DTOs for API endpoints

use reaction_core::ReactionCounts;
use serde::Serialize;

use crate::services::ReactionUpdate;

// ============================================================================
// Reaction Responses
// ============================================================================

/// GET /api/reactions/{post_id}
#[derive(Debug, Clone, Serialize)]
pub struct CountsResponse {
    pub counts: ReactionCounts,
}

/// POST /api/reactions/{post_id}
///
/// `user_reaction` serializes as `null` when the user has no reaction.
#[derive(Debug, Clone, Serialize)]
pub struct UpdateReactionResponse {
    pub counts: ReactionCounts,
    pub user_reaction: Option<String>,
}

impl From<ReactionUpdate> for UpdateReactionResponse {
    fn from(update: ReactionUpdate) -> Self {
        Self {
            counts: update.counts,
            user_reaction: update.user_reaction,
        }
    }
}

// ============================================================================
// Health Responses
// ============================================================================

/// Basic health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self { status: "ok" }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: &'static str,
    pub storage: &'static str,
}

impl ReadinessResponse {
    pub fn from_storage(storage_healthy: bool) -> Self {
        if storage_healthy {
            Self {
                status: "ready",
                storage: "healthy",
            }
        } else {
            Self {
                status: "not_ready",
                storage: "unhealthy",
            }
        }
    }

    pub fn is_ready(&self) -> bool {
        self.status == "ready"
    }
}

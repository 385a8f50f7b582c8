//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation (in-memory map or PostgreSQL table).

use async_trait::async_trait;

use crate::entities::Reaction;
use crate::error::DomainError;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Reaction Repository
// ============================================================================

/// Storage keyed by `(post_id, user_id)`
///
/// Each write method touches at most one record and must either fully apply
/// or leave the store as it was.
#[async_trait]
pub trait ReactionRepository: Send + Sync {
    /// Find the user's current reaction on a post
    async fn get(&self, post_id: &str, user_id: &str) -> RepoResult<Option<Reaction>>;

    /// Insert the reaction, or overwrite the emoji of the existing one
    async fn upsert(&self, reaction: &Reaction) -> RepoResult<()>;

    /// Remove the user's reaction; returns whether one existed
    async fn delete(&self, post_id: &str, user_id: &str) -> RepoResult<bool>;

    /// Get all reactions for a post
    async fn list_by_post(&self, post_id: &str) -> RepoResult<Vec<Reaction>>;

    /// Check that the backing store is reachable
    async fn health_check(&self) -> RepoResult<()> {
        Ok(())
    }
}

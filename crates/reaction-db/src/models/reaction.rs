//! Reaction database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the post_reactions table
#[derive(Debug, Clone, FromRow)]
pub struct ReactionModel {
    pub post_id: String,
    pub user_id: String,
    pub emoji: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

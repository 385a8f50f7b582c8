//! Reaction entity <-> model mapper

use chrono::{DateTime, Utc};
use reaction_core::Reaction;

use crate::models::ReactionModel;

/// Convert ReactionModel to Reaction entity
impl From<ReactionModel> for Reaction {
    fn from(model: ReactionModel) -> Self {
        Reaction {
            post_id: model.post_id,
            user_id: model.user_id,
            emoji: model.emoji,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

/// Borrowed values bound into the upsert statement
pub struct ReactionUpsert<'a> {
    pub post_id: &'a str,
    pub user_id: &'a str,
    pub emoji: &'a str,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl<'a> ReactionUpsert<'a> {
    pub fn new(reaction: &'a Reaction) -> Self {
        Self {
            post_id: &reaction.post_id,
            user_id: &reaction.user_id,
            emoji: &reaction.emoji,
            created_at: reaction.created_at,
            updated_at: reaction.updated_at,
        }
    }
}

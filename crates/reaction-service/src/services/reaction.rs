//! Reaction service
//!
//! Applies a user's requested emoji to their reaction on a post and reports
//! the post's counts.

use reaction_core::{Reaction, ReactionChange, ReactionCounts};
use tracing::{debug, info, instrument};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Result of an update: fresh counts plus the caller's own reaction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReactionUpdate {
    pub counts: ReactionCounts,
    pub user_reaction: Option<String>,
}

/// Reaction service
pub struct ReactionService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ReactionService<'a> {
    /// Create a new ReactionService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Count a post's reactions per allowed emoji
    ///
    /// Every allowed emoji is present, zero-filled. Stored values outside
    /// the allowed set are skipped.
    #[instrument(skip(self))]
    pub async fn get_counts(&self, post_id: &str) -> ServiceResult<ReactionCounts> {
        let reactions = self.ctx.reaction_repo().list_by_post(post_id).await?;

        Ok(self
            .ctx
            .emojis()
            .tally(reactions.iter().map(|r| r.emoji.as_str())))
    }

    /// Set, replace or toggle off a user's reaction on a post
    ///
    /// An empty `emoji`, or the emoji the user already has, removes the
    /// reaction. Anything else becomes the user's reaction. At most one
    /// record is written. All reads happen before that write, so a failed
    /// call leaves the stored state unchanged and a committed write always
    /// reports success.
    #[instrument(skip(self))]
    pub async fn update_reaction(
        &self,
        post_id: &str,
        user_id: &str,
        emoji: &str,
    ) -> ServiceResult<ReactionUpdate> {
        self.ctx.emoji_policy().check(self.ctx.emojis(), emoji)?;

        let repo = self.ctx.reaction_repo();
        let current = repo.get(post_id, user_id).await?;
        let snapshot = repo.list_by_post(post_id).await?;

        let previous = current.as_ref().map(|r| r.emoji.as_str());
        let change = ReactionChange::resolve(previous, emoji);

        match &change {
            ReactionChange::Unchanged => {
                debug!(post_id, user_id, "No reaction to remove");
            }
            ReactionChange::Remove => {
                repo.delete(post_id, user_id).await?;
                info!(post_id, user_id, previous = ?previous, "Reaction removed");
            }
            ReactionChange::Set(new_emoji) => {
                repo.upsert(&Reaction::new(post_id, user_id, new_emoji.as_str()))
                    .await?;
                info!(post_id, user_id, previous = ?previous, emoji = %new_emoji, "Reaction set");
            }
        }

        // Snapshot with this user's entry swapped for the written one
        let counts = self.ctx.emojis().tally(
            snapshot
                .iter()
                .filter(|r| r.user_id != user_id)
                .map(|r| r.emoji.as_str())
                .chain(change.resulting_emoji()),
        );

        Ok(ReactionUpdate {
            counts,
            user_reaction: change.resulting_emoji().map(str::to_string),
        })
    }

    /// Check that the reaction store is reachable
    #[instrument(skip(self))]
    pub async fn check_storage(&self) -> ServiceResult<()> {
        self.ctx.reaction_repo().health_check().await?;
        Ok(())
    }
}

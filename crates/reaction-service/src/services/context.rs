//! Service context - dependency container for services
//!
//! Holds the reaction repository and the emoji rules services apply.

use std::sync::Arc;

use reaction_core::{EmojiPolicy, EmojiSet, ReactionRepository};

use super::error::{ServiceError, ServiceResult};

/// Service context containing all dependencies
///
/// The repository is a trait object, so the same services run on top of
/// the in-memory map or the PostgreSQL table.
#[derive(Clone)]
pub struct ServiceContext {
    reaction_repo: Arc<dyn ReactionRepository>,
    emojis: EmojiSet,
    emoji_policy: EmojiPolicy,
}

impl ServiceContext {
    /// Create a new service context
    pub fn new(
        reaction_repo: Arc<dyn ReactionRepository>,
        emojis: EmojiSet,
        emoji_policy: EmojiPolicy,
    ) -> Self {
        Self {
            reaction_repo,
            emojis,
            emoji_policy,
        }
    }

    /// Get the reaction repository
    pub fn reaction_repo(&self) -> &dyn ReactionRepository {
        self.reaction_repo.as_ref()
    }

    /// Get the allowed emoji set
    pub fn emojis(&self) -> &EmojiSet {
        &self.emojis
    }

    /// Get the write-time emoji policy
    pub fn emoji_policy(&self) -> EmojiPolicy {
        self.emoji_policy
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("reaction_repo", &"ReactionRepository")
            .field("emojis", &self.emojis)
            .field("emoji_policy", &self.emoji_policy)
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
#[derive(Default)]
pub struct ServiceContextBuilder {
    reaction_repo: Option<Arc<dyn ReactionRepository>>,
    emojis: Option<EmojiSet>,
    emoji_policy: Option<EmojiPolicy>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reaction_repo(mut self, repo: Arc<dyn ReactionRepository>) -> Self {
        self.reaction_repo = Some(repo);
        self
    }

    pub fn emojis(mut self, emojis: EmojiSet) -> Self {
        self.emojis = Some(emojis);
        self
    }

    pub fn emoji_policy(mut self, policy: EmojiPolicy) -> Self {
        self.emoji_policy = Some(policy);
        self
    }

    /// Build the context; the repository is required, the rest default
    pub fn build(self) -> ServiceResult<ServiceContext> {
        Ok(ServiceContext::new(
            self.reaction_repo
                .ok_or_else(|| ServiceError::validation("reaction_repo is required"))?,
            self.emojis.unwrap_or_default(),
            self.emoji_policy.unwrap_or_default(),
        ))
    }
}

//! In-memory implementation of ReactionRepository
//!
//! Reactions are grouped per post in a `DashMap`, so operations on different
//! posts never contend and each single-key write is atomic.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use tracing::instrument;

use reaction_core::{Reaction, ReactionRepository, RepoResult};

/// Map-backed reaction store: post_id -> (user_id -> reaction)
#[derive(Debug, Default)]
pub struct InMemoryReactionRepository {
    posts: DashMap<String, HashMap<String, Reaction>>,
}

impl InMemoryReactionRepository {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of stored reactions across all posts
    pub fn len(&self) -> usize {
        self.posts.iter().map(|entry| entry.value().len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl ReactionRepository for InMemoryReactionRepository {
    #[instrument(skip(self))]
    async fn get(&self, post_id: &str, user_id: &str) -> RepoResult<Option<Reaction>> {
        Ok(self
            .posts
            .get(post_id)
            .and_then(|users| users.get(user_id).cloned()))
    }

    #[instrument(skip(self, reaction), fields(post_id = %reaction.post_id, user_id = %reaction.user_id))]
    async fn upsert(&self, reaction: &Reaction) -> RepoResult<()> {
        let mut users = self.posts.entry(reaction.post_id.clone()).or_default();
        users
            .entry(reaction.user_id.clone())
            .and_modify(|existing| {
                existing.emoji.clone_from(&reaction.emoji);
                existing.updated_at = Utc::now();
            })
            .or_insert_with(|| reaction.clone());

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, post_id: &str, user_id: &str) -> RepoResult<bool> {
        let removed = match self.posts.get_mut(post_id) {
            Some(mut users) => users.remove(user_id).is_some(),
            None => false,
        };

        // Guard above is released; drop the post bucket once it empties
        if removed {
            self.posts.remove_if(post_id, |_, users| users.is_empty());
        }

        Ok(removed)
    }

    #[instrument(skip(self))]
    async fn list_by_post(&self, post_id: &str) -> RepoResult<Vec<Reaction>> {
        Ok(self
            .posts
            .get(post_id)
            .map(|users| users.values().cloned().collect())
            .unwrap_or_default())
    }
}

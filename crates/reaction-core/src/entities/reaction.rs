//! Reaction entity - a single user's emoji on a single post

use chrono::{DateTime, Utc};

/// Reaction entity
///
/// Identified by `(post_id, user_id)`; a user holds at most one live
/// reaction per post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reaction {
    pub post_id: String,
    pub user_id: String,
    pub emoji: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Reaction {
    /// Create a new Reaction
    pub fn new(post_id: impl Into<String>, user_id: impl Into<String>, emoji: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            post_id: post_id.into(),
            user_id: user_id.into(),
            emoji: emoji.into(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Check if reaction uses a specific emoji
    #[inline]
    pub fn is_emoji(&self, emoji: &str) -> bool {
        self.emoji == emoji
    }
}

/// Outcome of applying a requested emoji to a user's current reaction.
///
/// An empty request or a request equal to the current emoji toggles the
/// reaction off; any other value replaces whatever was there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReactionChange {
    /// No reaction before, none after
    Unchanged,
    /// Insert or overwrite the reaction with this emoji
    Set(String),
    /// Delete the existing reaction
    Remove,
}

impl ReactionChange {
    /// Decide the change for `requested` given the `current` emoji
    pub fn resolve(current: Option<&str>, requested: &str) -> Self {
        if requested.is_empty() || current == Some(requested) {
            match current {
                Some(_) => Self::Remove,
                None => Self::Unchanged,
            }
        } else {
            Self::Set(requested.to_string())
        }
    }

    /// The user's reaction once this change is applied
    pub fn resulting_emoji(&self) -> Option<&str> {
        match self {
            Self::Set(emoji) => Some(emoji),
            Self::Unchanged | Self::Remove => None,
        }
    }

    /// Whether applying this change writes to storage
    #[inline]
    pub fn is_write(&self) -> bool {
        !matches!(self, Self::Unchanged)
    }
}

//! Allowed emoji set
//!
//! The fixed, ordered vocabulary that counts are reported for.

use std::str::FromStr;
use std::sync::Arc;

use crate::entities::ReactionCounts;
use crate::error::DomainError;

/// 👍 ❤️ 🤔 🔥 💡, in display order
pub const DEFAULT_EMOJIS: [&str; 5] = [
    "\u{1F44D}",
    "\u{2764}\u{FE0F}",
    "\u{1F914}",
    "\u{1F525}",
    "\u{1F4A1}",
];

/// Ordered set of recognized emoji
///
/// Cheap to clone; the list is shared and never changes after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmojiSet {
    emojis: Arc<[String]>,
}

impl Default for EmojiSet {
    fn default() -> Self {
        Self {
            emojis: DEFAULT_EMOJIS.iter().map(|e| (*e).to_string()).collect(),
        }
    }
}

impl EmojiSet {
    /// Check whether an emoji is recognized
    pub fn contains(&self, emoji: &str) -> bool {
        self.emojis.iter().any(|e| e == emoji)
    }

    pub fn len(&self) -> usize {
        self.emojis.len()
    }

    pub fn is_empty(&self) -> bool {
        self.emojis.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.emojis.iter().map(String::as_str)
    }

    /// Counts with every recognized emoji at zero
    pub fn zeroed_counts(&self) -> ReactionCounts {
        ReactionCounts::zeroed(self.iter())
    }

    /// Tally stored emoji values; unrecognized values are ignored
    pub fn tally<'a, I>(&self, emojis: I) -> ReactionCounts
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut counts = self.zeroed_counts();
        for emoji in emojis {
            counts.increment(emoji);
        }
        counts
    }
}

/// When emoji values are checked against the allowed set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmojiPolicy {
    /// Store anything; filter at count time
    #[default]
    Permissive,
    /// Reject unrecognized emoji before writing
    Strict,
}

impl EmojiPolicy {
    /// Check a requested emoji under this policy. The empty string always passes.
    pub fn check(self, emojis: &EmojiSet, requested: &str) -> Result<(), DomainError> {
        match self {
            Self::Strict if !requested.is_empty() && !emojis.contains(requested) => {
                Err(DomainError::UnknownEmoji(requested.to_string()))
            }
            _ => Ok(()),
        }
    }
}

impl FromStr for EmojiPolicy {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "permissive" => Ok(Self::Permissive),
            "strict" => Ok(Self::Strict),
            other => Err(DomainError::ValidationError(format!(
                "unknown emoji policy: {other}"
            ))),
        }
    }
}

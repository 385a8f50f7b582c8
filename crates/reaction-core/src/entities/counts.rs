//! Per-post emoji counts

use serde::ser::{Serialize, SerializeMap, Serializer};

/// Aggregated counts for one post, in allowed-set order
///
/// Serializes as a JSON object whose keys keep that order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ReactionCounts {
    entries: Vec<(String, i64)>,
}

impl ReactionCounts {
    /// Counts with each emoji present at zero
    pub fn zeroed<'a, I>(emojis: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        Self {
            entries: emojis.into_iter().map(|e| (e.to_string(), 0)).collect(),
        }
    }

    /// Bump a tracked emoji. Returns false if the emoji is not tracked.
    pub fn increment(&mut self, emoji: &str) -> bool {
        match self.entries.iter_mut().find(|(e, _)| e == emoji) {
            Some((_, count)) => {
                *count += 1;
                true
            }
            None => false,
        }
    }

    pub fn get(&self, emoji: &str) -> Option<i64> {
        self.entries
            .iter()
            .find(|(e, _)| e == emoji)
            .map(|(_, count)| *count)
    }

    /// Sum over all tracked emoji
    pub fn total(&self) -> i64 {
        self.entries.iter().map(|(_, count)| count).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> {
        self.entries.iter().map(|(e, c)| (e.as_str(), *c))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for ReactionCounts {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (emoji, count) in &self.entries {
            map.serialize_entry(emoji, count)?;
        }
        map.end()
    }
}

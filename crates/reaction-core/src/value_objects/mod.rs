//! Value objects - immutable types that represent domain concepts

mod emoji_set;

pub use emoji_set::{EmojiPolicy, EmojiSet, DEFAULT_EMOJIS};

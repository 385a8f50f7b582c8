//! # reaction-core
//!
//! Domain layer containing the reaction entity, the allowed emoji set, the
//! per-user transition rule, and the storage trait.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{Reaction, ReactionChange, ReactionCounts};
pub use error::DomainError;
pub use traits::{ReactionRepository, RepoResult};
pub use value_objects::{EmojiPolicy, EmojiSet, DEFAULT_EMOJIS};

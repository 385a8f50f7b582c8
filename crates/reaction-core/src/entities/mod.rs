//! Domain entities - core business objects

mod counts;
mod reaction;

pub use counts::ReactionCounts;
pub use reaction::{Reaction, ReactionChange};

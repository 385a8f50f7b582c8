//! Repository implementations
//!
//! Both backends implement the `ReactionRepository` trait from reaction-core.

mod error;
mod memory;
mod reaction;

pub use memory::InMemoryReactionRepository;
pub use reaction::PgReactionRepository;

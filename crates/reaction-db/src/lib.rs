//! # reaction-db
//!
//! Storage layer implementing `ReactionRepository`.
//!
//! ## Overview
//!
//! Two interchangeable backends:
//!
//! - `InMemoryReactionRepository` - a process-local concurrent map
//! - `PgReactionRepository` - the `post_reactions` table via SQLx
//!
//! plus connection pool management, migrations, row models and mappers.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use reaction_db::pool::{create_pool, PoolConfig};
//! use reaction_db::PgReactionRepository;
//!
//! async fn example(config: &reaction_common::DatabaseConfig) -> Result<(), sqlx::Error> {
//!     let pool = create_pool(&PoolConfig::from(config)).await?;
//!     let repo = PgReactionRepository::new(pool);
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{create_pool, run_migrations, PgPool, PoolConfig};
pub use repositories::{InMemoryReactionRepository, PgReactionRepository};

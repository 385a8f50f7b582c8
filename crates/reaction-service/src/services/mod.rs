//! Business logic services
//!
//! Service layer implementations that apply domain rules on top of the
//! injected repository.

pub mod context;
pub mod error;
pub mod reaction;

pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use reaction::{ReactionService, ReactionUpdate};

//! Data transfer objects for API requests and responses
//!
//! This module provides:
//! - Request DTOs deserialized from API inputs
//! - Response DTOs for serializing API outputs

pub mod requests;
pub mod responses;

pub use requests::UpdateReactionRequest;
pub use responses::{CountsResponse, HealthResponse, ReadinessResponse, UpdateReactionResponse};

//! # reaction-service
//!
//! Application layer containing the reaction service, its dependency
//! context, and request/response DTOs.

pub mod dto;
pub mod services;

pub use dto::{
    CountsResponse, HealthResponse, ReadinessResponse, UpdateReactionRequest,
    UpdateReactionResponse,
};
pub use services::{
    ReactionService, ReactionUpdate, ServiceContext, ServiceContextBuilder, ServiceError,
    ServiceResult,
};

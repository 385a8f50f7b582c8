//! Reaction handlers
//!
//! Endpoints for post reaction counts and a user's own reaction.

use axum::{extract::State, Json};
use reaction_service::{
    CountsResponse, ReactionService, UpdateReactionRequest, UpdateReactionResponse,
};

use crate::extractors::{JsonBody, PostIdPath};
use crate::response::ApiResult;
use crate::state::AppState;

/// Get reaction counts for a post
///
/// GET /api/reactions/{post_id}
pub async fn get_reactions(
    State(state): State<AppState>,
    PostIdPath(post_id): PostIdPath,
) -> ApiResult<Json<CountsResponse>> {
    let service = ReactionService::new(state.service_context());
    let counts = service.get_counts(&post_id).await?;
    Ok(Json(CountsResponse { counts }))
}

/// Set, replace or remove the caller's reaction on a post
///
/// POST /api/reactions/{post_id}
pub async fn update_reaction(
    State(state): State<AppState>,
    PostIdPath(post_id): PostIdPath,
    JsonBody(request): JsonBody<UpdateReactionRequest>,
) -> ApiResult<Json<UpdateReactionResponse>> {
    let service = ReactionService::new(state.service_context());
    let update = service
        .update_reaction(&post_id, &request.user_id, &request.emoji)
        .await?;
    Ok(Json(update.into()))
}

//! Request DTOs for API endpoints

use serde::Deserialize;

/// Submit, replace or remove a reaction
///
/// Both fields must be present. Any string is accepted for either;
/// an empty `emoji` means "remove my reaction".
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateReactionRequest {
    pub user_id: String,
    pub emoji: String,
}

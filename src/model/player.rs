use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A player as returned by the API.
///
/// `name`, `real_name` and `avatar_url` come from Slack and are only present when the
/// player was enriched with a directory lookup for this response.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct PlayerDto {
    pub slack_id: String,
    pub nickname: Option<String>,
    pub active: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub real_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

/// Partial update body for `PATCH /api/players/{slack_id}`.
///
/// Every field is optional; only the fields present are written. Sending `null` for
/// `nickname` clears it.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct UpdatePlayerDto {
    #[schema(max_length = 32, min_length = 1)]
    pub nickname: Option<String>,
    pub active: Option<bool>,
}

use axum::{
    body::Bytes,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    model::{
        api::{DataDto, ErrorDto},
        player::{PlayerDto, UpdatePlayerDto},
    },
    server::{
        error::AppError, schema::player::PlayerSchema, service::player::PlayerService,
        state::AppState,
    },
};

/// Tag for grouping player endpoints in OpenAPI documentation
pub static PLAYER_TAG: &str = "player";

#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PlayerSearchParams {
    /// Case-insensitive substring matched against handle, real name and display name
    pub s: Option<String>,
}

impl PlayerSearchParams {
    /// Builds the params from raw query pairs, keeping the first `s` when repeated.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        Self {
            s: pairs
                .into_iter()
                .find(|(key, _)| key == "s")
                .map(|(_, value)| value),
        }
    }
}

/// List players.
///
/// Returns one player per person in the Slack workspace matching the optional search,
/// merged with the locally stored fields. People without a stored player appear with
/// default values.
///
/// # Arguments
/// - `state` - Application state containing the database connection and directory
/// - `query` - Raw query pairs; only the first `s` is used
///
/// # Returns
/// - `200 OK` - Players in directory order
/// - `503 Service Unavailable` - Slack directory lookup failed
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/players",
    tag = PLAYER_TAG,
    params(PlayerSearchParams),
    responses(
        (status = 200, description = "Successfully retrieved players", body = DataDto<Vec<PlayerDto>>),
        (status = 503, description = "Slack directory unavailable", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_players(
    State(state): State<AppState>,
    Query(query): Query<Vec<(String, String)>>,
) -> Result<impl IntoResponse, AppError> {
    let params = PlayerSearchParams::from_pairs(query);

    let service = PlayerService::new(&state.db, state.directory.as_ref());

    let players = service.get_all(params.s.as_deref()).await?;

    Ok((
        StatusCode::OK,
        Json(DataDto::new(PlayerSchema.dump_many(players))),
    ))
}

/// Get a player.
///
/// Unknown Slack users are reported by Slack as a failed lookup and answered with
/// `503`. A Slack user without a stored player gets default values, which are not
/// saved.
///
/// # Returns
/// - `200 OK` - The player with its Slack profile
/// - `503 Service Unavailable` - Slack directory lookup failed
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/players/{slack_id}",
    tag = PLAYER_TAG,
    params(
        ("slack_id" = String, Path, description = "Slack user ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved player", body = DataDto<PlayerDto>),
        (status = 503, description = "Slack directory unavailable", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_player(
    State(state): State<AppState>,
    Path(slack_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let service = PlayerService::new(&state.db, state.directory.as_ref());

    let player = service.get(&slack_id).await?;

    Ok((StatusCode::OK, Json(DataDto::new(PlayerSchema.dump(player)))))
}

/// Create or partially update a player.
///
/// The body is taken raw so the Slack lookup runs before the body is parsed.
///
/// # Arguments
/// - `state` - Application state containing the database connection and directory
/// - `slack_id` - Slack user ID of the player
/// - `body` - JSON object with the fields to change
///
/// # Returns
/// - `201 Created` - The player did not exist and was created
/// - `200 OK` - The existing player was updated
/// - `400 Bad Request` - Empty or malformed body
/// - `422 Unprocessable Entity` - Body failed validation
/// - `503 Service Unavailable` - Slack directory lookup failed
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    patch,
    path = "/api/players/{slack_id}",
    tag = PLAYER_TAG,
    params(
        ("slack_id" = String, Path, description = "Slack user ID")
    ),
    request_body = UpdatePlayerDto,
    responses(
        (status = 200, description = "Successfully updated player", body = DataDto<PlayerDto>),
        (status = 201, description = "Successfully created player", body = DataDto<PlayerDto>),
        (status = 400, description = "Empty or malformed body", body = ErrorDto),
        (status = 422, description = "Body failed validation", body = ErrorDto),
        (status = 503, description = "Slack directory unavailable", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_player(
    State(state): State<AppState>,
    Path(slack_id): Path<String>,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    let service = PlayerService::new(&state.db, state.directory.as_ref());

    let (player, created) = service.update(&slack_id, &body).await?;

    let status = if created {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };

    Ok((status, Json(DataDto::new(PlayerSchema.dump(player)))))
}

/// Delete a player.
///
/// Removes the stored fields only; the Slack user is untouched and a later `GET`
/// returns default values again.
///
/// # Returns
/// - `200 OK` - The deleted player, without Slack profile
/// - `404 Not Found` - No player stored for the Slack user ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/players/{slack_id}",
    tag = PLAYER_TAG,
    params(
        ("slack_id" = String, Path, description = "Slack user ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted player", body = DataDto<PlayerDto>),
        (status = 404, description = "Player not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_player(
    State(state): State<AppState>,
    Path(slack_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let service = PlayerService::new(&state.db, state.directory.as_ref());

    let player = service.delete(&slack_id).await?;

    Ok((StatusCode::OK, Json(DataDto::new(PlayerSchema.dump(player)))))
}

use axum::Router;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::player::{self, PLAYER_TAG},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Slack Players API",
        description = "Players of a Slack workspace, enriched with their Slack profile."
    ),
    tags(
        (name = PLAYER_TAG, description = "Player management")
    )
)]
struct ApiDoc;

/// Builds the application router.
///
/// Serves the player API under `/api/players` and its Swagger UI under `/api/docs`.
pub fn router() -> Router<AppState> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(player::get_players))
        .routes(routes!(
            player::get_player,
            player::update_player,
            player::delete_player
        ))
        .split_for_parts();

    router
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

mod model;
mod server;

use std::sync::Arc;

use crate::server::{
    config::Config, error::AppError, router, service::slack::SlackClient, startup,
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let http_client = startup::setup_reqwest_client()?;
    let slack_client = SlackClient::new(
        http_client,
        config.slack_api_url.clone(),
        config.slack_token.as_str(),
    );

    let app = router::router().with_state(AppState::new(db, Arc::new(slack_client)));

    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;
    tracing::info!("Listening on {}", config.bind_address);

    axum::serve(listener, app).await?;

    Ok(())
}

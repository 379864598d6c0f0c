use axum::http::{Method, StatusCode};
use sea_orm::EntityTrait;
use serde_json::json;
use test_utils::{builder::TestBuilder, factory};

use super::{app, send};
use crate::server::service::slack::fake::{slack_user, FakeDirectory};

mod delete_player;
mod get_player;
mod get_players;

fn directory() -> FakeDirectory {
    FakeDirectory::new(vec![slack_user("U1", "Alice"), slack_user("U2", "Bob")])
}

async fn stored_rows(db: &sea_orm::DatabaseConnection) -> usize {
    entity::prelude::Player::find().all(db).await.unwrap().len()
}

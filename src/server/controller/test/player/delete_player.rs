use super::*;

/// Tests deleting a stored player.
///
/// Verifies the response carries the deleted values without profile, and that a later
/// GET falls back to defaults.
///
/// Expected: 200, then 200 with defaults on GET
#[tokio::test]
async fn deletes_player_and_get_returns_defaults() {
    let test = TestBuilder::new().with_player_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    factory::PlayerFactory::new(db)
        .slack_id("U1")
        .nickname("Al")
        .active(false)
        .build()
        .await
        .unwrap();

    let (status, body) =
        send(app(db, directory()), Method::DELETE, "/api/players/U1", "").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "data": { "slack_id": "U1", "nickname": "Al", "active": false } })
    );
    assert_eq!(stored_rows(db).await, 0);

    let (status, body) = send(app(db, directory()), Method::GET, "/api/players/U1", "").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["nickname"], json!(null));
    assert_eq!(body["data"]["active"], json!(true));
}

/// Tests deleting a player that is not stored.
///
/// Expected: 404 with "Player not found"
#[tokio::test]
async fn returns_404_for_unknown_player() {
    let test = TestBuilder::new().with_player_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    factory::create_player_with_id(db, "U2").await.unwrap();

    let (status, body) =
        send(app(db, directory()), Method::DELETE, "/api/players/U1", "").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "errors": { "general": ["Player not found"] } }));
    assert_eq!(stored_rows(db).await, 1);
}

/// Tests that deleting does not depend on Slack.
///
/// Expected: 200 while the directory is unavailable
#[tokio::test]
async fn deletes_without_directory() {
    let test = TestBuilder::new().with_player_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    factory::create_player_with_id(db, "U1").await.unwrap();

    let (status, _) = send(
        app(db, FakeDirectory::unavailable()),
        Method::DELETE,
        "/api/players/U1",
        "",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
}

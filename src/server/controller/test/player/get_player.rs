use super::*;

/// Tests getting a stored player.
///
/// Expected: 200 with stored nickname and Slack display name
#[tokio::test]
async fn returns_stored_player_with_profile() {
    let test = TestBuilder::new().with_player_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    factory::PlayerFactory::new(db)
        .slack_id("U1")
        .nickname("Al")
        .build()
        .await
        .unwrap();

    let (status, body) = send(app(db, directory()), Method::GET, "/api/players/U1", "").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "data": {
                "slack_id": "U1",
                "nickname": "Al",
                "active": true,
                "name": "Alice",
                "real_name": "Alice Liddell",
                "avatar_url": "https://avatars.slack-edge.com/U1_192.png",
            }
        })
    );
}

/// Tests getting a Slack user that was never stored.
///
/// Expected: 200 with default fields and no row written
#[tokio::test]
async fn returns_defaults_for_unstored_player() {
    let test = TestBuilder::new().with_player_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (status, body) = send(app(db, directory()), Method::GET, "/api/players/U2", "").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["slack_id"], "U2");
    assert_eq!(body["data"]["nickname"], json!(null));
    assert_eq!(body["data"]["active"], json!(true));
    assert_eq!(body["data"]["name"], "Bob");
    assert_eq!(stored_rows(db).await, 0);
}

/// Tests getting an ID Slack does not know.
///
/// Expected: 503 with REQUEST_FAILED
#[tokio::test]
async fn returns_503_for_unknown_slack_user() {
    let test = TestBuilder::new().with_player_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (status, body) =
        send(app(db, directory()), Method::GET, "/api/players/U404", "").await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body, json!({ "errors": { "general": ["REQUEST_FAILED"] } }));
}

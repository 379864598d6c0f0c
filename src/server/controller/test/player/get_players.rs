use super::*;

/// Tests listing players.
///
/// Expected: 200 with one entry per Slack user, stored fields merged in
#[tokio::test]
async fn lists_directory_users_with_stored_fields() {
    let test = TestBuilder::new().with_player_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    factory::PlayerFactory::new(db)
        .slack_id("U2")
        .nickname("Bobby")
        .active(false)
        .build()
        .await
        .unwrap();

    let (status, body) = send(app(db, directory()), Method::GET, "/api/players", "").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "data": [
                {
                    "slack_id": "U1",
                    "nickname": null,
                    "active": true,
                    "name": "Alice",
                    "real_name": "Alice Liddell",
                    "avatar_url": "https://avatars.slack-edge.com/U1_192.png",
                },
                {
                    "slack_id": "U2",
                    "nickname": "Bobby",
                    "active": false,
                    "name": "Bob",
                    "real_name": "Bob Liddell",
                    "avatar_url": "https://avatars.slack-edge.com/U2_192.png",
                },
            ]
        })
    );
}

/// Tests the search query parameter.
///
/// Expected: 200 with only matching users
#[tokio::test]
async fn filters_by_search_term() {
    let test = TestBuilder::new().with_player_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (status, body) =
        send(app(db, directory()), Method::GET, "/api/players?s=BOB", "").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
    assert_eq!(body["data"][0]["slack_id"], "U2");
}

/// Tests a search parameter given more than once.
///
/// Expected: 200 filtered by the first value only
#[tokio::test]
async fn uses_first_of_repeated_search_terms() {
    let test = TestBuilder::new().with_player_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (status, body) = send(
        app(db, directory()),
        Method::GET,
        "/api/players?s=ali&s=bob",
        "",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
    assert_eq!(body["data"][0]["slack_id"], "U1");
}

/// Tests that stored rows without a Slack user are not listed.
///
/// Expected: 200 with an empty list
#[tokio::test]
async fn omits_rows_unknown_to_directory() {
    let test = TestBuilder::new().with_player_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    factory::create_player_with_id(db, "U9").await.unwrap();

    let (status, body) = send(
        app(db, FakeDirectory::new(Vec::new())),
        Method::GET,
        "/api/players",
        "",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "data": [] }));
}

/// Tests listing while Slack is unreachable.
///
/// Expected: 503 with REQUEST_FAILED
#[tokio::test]
async fn returns_503_when_directory_unavailable() {
    let test = TestBuilder::new().with_player_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (status, body) = send(
        app(db, FakeDirectory::unavailable()),
        Method::GET,
        "/api/players",
        "",
    )
    .await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body, json!({ "errors": { "general": ["REQUEST_FAILED"] } }));
}

use super::*;

/// Tests creating a player with every field supplied.
///
/// Expected: Ok(Some(Player)) and a matching row in the database
#[tokio::test]
async fn creates_player_with_given_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_player_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PlayerRepository::new(db);
    let player = repo
        .create_if_absent(
            "U1",
            UpdatePlayerParams {
                nickname: Some(Some("Al".to_string())),
                active: Some(false),
            },
        )
        .await?
        .unwrap();

    assert_eq!(player.slack_id, "U1");
    assert_eq!(player.nickname.as_deref(), Some("Al"));
    assert!(!player.active);

    let row = entity::prelude::Player::find_by_id("U1".to_string())
        .one(db)
        .await?
        .unwrap();
    assert_eq!(row.nickname.as_deref(), Some("Al"));
    assert!(!row.active);

    Ok(())
}

/// Tests creating a player with no fields supplied.
///
/// Expected: Ok(Some(Player)) with no nickname and active
#[tokio::test]
async fn creates_player_with_defaults() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_player_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PlayerRepository::new(db);
    let player = repo
        .create_if_absent("U1", UpdatePlayerParams::default())
        .await?
        .unwrap();

    assert_eq!(player.nickname, None);
    assert!(player.active);

    Ok(())
}

/// Tests inserting a Slack ID that another request already stored.
///
/// Verifies the conflict is reported as `None` rather than an error, and that the
/// existing row keeps its values.
///
/// Expected: Ok(None) and the original row unchanged
#[tokio::test]
async fn returns_none_when_player_already_exists() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_player_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PlayerRepository::new(db);
    let first = repo
        .create_if_absent(
            "U1",
            UpdatePlayerParams {
                nickname: Some(Some("Al".to_string())),
                active: None,
            },
        )
        .await?;
    let second = repo
        .create_if_absent(
            "U1",
            UpdatePlayerParams {
                nickname: Some(Some("Other".to_string())),
                active: Some(false),
            },
        )
        .await?;

    assert!(first.is_some());
    assert!(second.is_none());

    let stored = repo.get_all().await?;
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].nickname.as_deref(), Some("Al"));
    assert!(stored[0].active);

    Ok(())
}

use super::*;

/// Tests updating only the fields present in the parameters.
///
/// Verifies that `active` is written while the nickname is left as it was.
///
/// Expected: Ok(Player) with only `active` changed
#[tokio::test]
async fn updates_only_present_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_player_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::PlayerFactory::new(db)
        .slack_id("U1")
        .nickname("Al")
        .build()
        .await?;

    let repo = PlayerRepository::new(db);
    let player = repo
        .update(
            "U1",
            UpdatePlayerParams {
                nickname: None,
                active: Some(false),
            },
        )
        .await?;

    assert_eq!(player.slack_id, "U1");
    assert_eq!(player.nickname.as_deref(), Some("Al"));
    assert!(!player.active);

    let stored = repo.find_by_slack_id("U1").await?.unwrap();
    assert_eq!(stored, player);

    Ok(())
}

/// Tests clearing the nickname.
///
/// Expected: Ok(Player) with nickname None
#[tokio::test]
async fn clears_nickname() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_player_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::PlayerFactory::new(db)
        .slack_id("U1")
        .nickname("Al")
        .build()
        .await?;

    let repo = PlayerRepository::new(db);
    let player = repo
        .update(
            "U1",
            UpdatePlayerParams {
                nickname: Some(None),
                active: None,
            },
        )
        .await?;

    assert_eq!(player.nickname, None);
    assert!(repo.find_by_slack_id("U1").await?.unwrap().nickname.is_none());

    Ok(())
}

/// Tests that an update with no fields returns the stored player unchanged.
///
/// Expected: Ok(Player) equal to the stored row
#[tokio::test]
async fn empty_update_returns_stored_player() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_player_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::PlayerFactory::new(db)
        .slack_id("U1")
        .nickname("Al")
        .build()
        .await?;

    let repo = PlayerRepository::new(db);
    let player = repo.update("U1", UpdatePlayerParams::default()).await?;

    assert_eq!(player.nickname.as_deref(), Some("Al"));
    assert!(player.active);

    Ok(())
}

/// Tests updating a player that is not stored.
///
/// Expected: Err(DbErr::RecordNotFound) and no row created
#[tokio::test]
async fn fails_for_unknown_player() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_player_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PlayerRepository::new(db);
    let result = repo
        .update(
            "U1",
            UpdatePlayerParams {
                nickname: None,
                active: Some(false),
            },
        )
        .await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));
    assert!(repo.find_by_slack_id("U1").await?.is_none());

    Ok(())
}

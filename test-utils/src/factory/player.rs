//! Player factory for creating test player rows.
//!
//! This module provides factory methods for inserting player entities with sensible
//! defaults. The factory supports customization through a builder pattern.

use crate::factory::helpers::next_slack_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test players with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::player::PlayerFactory;
///
/// let player = PlayerFactory::new(&db)
///     .slack_id("U1")
///     .nickname("Al")
///     .active(false)
///     .build()
///     .await?;
/// ```
pub struct PlayerFactory<'a> {
    db: &'a DatabaseConnection,
    slack_id: String,
    nickname: Option<String>,
    active: bool,
}

impl<'a> PlayerFactory<'a> {
    /// Creates a new PlayerFactory with default values.
    ///
    /// Defaults:
    /// - slack_id: `"UTEST{id}"` where id is auto-incremented
    /// - nickname: `None`
    /// - active: `true`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `PlayerFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            slack_id: next_slack_id(),
            nickname: None,
            active: true,
        }
    }

    /// Sets the Slack user ID for the player.
    pub fn slack_id(mut self, slack_id: impl Into<String>) -> Self {
        self.slack_id = slack_id.into();
        self
    }

    /// Sets the nickname for the player.
    pub fn nickname(mut self, nickname: impl Into<String>) -> Self {
        self.nickname = Some(nickname.into());
        self
    }

    /// Sets whether the player is active.
    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    /// Builds and inserts the player entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::player::Model)` - Created player entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::player::Model, DbErr> {
        entity::player::ActiveModel {
            slack_id: ActiveValue::Set(self.slack_id),
            nickname: ActiveValue::Set(self.nickname),
            active: ActiveValue::Set(self.active),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a player with default values.
///
/// Shorthand for `PlayerFactory::new(db).build().await`.
pub async fn create_player(db: &DatabaseConnection) -> Result<entity::player::Model, DbErr> {
    PlayerFactory::new(db).build().await
}

/// Creates a player with a specific Slack user ID.
///
/// Shorthand for `PlayerFactory::new(db).slack_id(slack_id).build().await`.
pub async fn create_player_with_id(
    db: &DatabaseConnection,
    slack_id: impl Into<String>,
) -> Result<entity::player::Model, DbErr> {
    PlayerFactory::new(db).slack_id(slack_id).build().await
}

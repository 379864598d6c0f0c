//! Player data repository for database operations.
//!
//! This module provides the `PlayerRepository` for managing player rows. It converts
//! entity models to player domain models at the infrastructure boundary. The repository
//! works on any SeaORM connection, so services pass a `DatabaseTransaction` when a
//! read and a write have to commit together.

use sea_orm::{
    sea_query::OnConflict, ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait,
    QueryOrder, TryIntoModel,
};

use crate::server::model::player::{Player, UpdatePlayerParams};

/// Repository providing database operations for player management.
pub struct PlayerRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PlayerRepository<'a, C> {
    /// Creates a new PlayerRepository instance.
    ///
    /// # Arguments
    /// - `db` - Database connection or open transaction
    ///
    /// # Returns
    /// - `PlayerRepository` - New repository instance
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets every stored player, ordered by Slack ID.
    ///
    /// # Returns
    /// - `Ok(Vec<Player>)` - All players (empty if none are stored)
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_all(&self) -> Result<Vec<Player>, DbErr> {
        let entities = entity::prelude::Player::find()
            .order_by_asc(entity::player::Column::SlackId)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Player::from_entity).collect())
    }

    /// Finds a player by their Slack ID.
    ///
    /// # Arguments
    /// - `slack_id` - Slack user ID
    ///
    /// # Returns
    /// - `Ok(Some(Player))` - Player found
    /// - `Ok(None)` - No player stored with that Slack ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_slack_id(&self, slack_id: &str) -> Result<Option<Player>, DbErr> {
        let entity = entity::prelude::Player::find_by_id(slack_id.to_string())
            .one(self.db)
            .await?;

        Ok(entity.map(Player::from_entity))
    }

    /// Inserts a new player unless a row with the same Slack ID already exists.
    ///
    /// Fields missing from `param` take the column defaults: no nickname, active. A
    /// conflicting row, e.g. one inserted by a concurrent request, is left untouched.
    ///
    /// # Arguments
    /// - `slack_id` - Slack user ID of the new player
    /// - `param` - Initial field values
    ///
    /// # Returns
    /// - `Ok(Some(Player))` - The inserted player
    /// - `Ok(None)` - A player with that Slack ID already exists
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create_if_absent(
        &self,
        slack_id: &str,
        param: UpdatePlayerParams,
    ) -> Result<Option<Player>, DbErr> {
        let model = entity::player::ActiveModel {
            slack_id: ActiveValue::Set(slack_id.to_string()),
            nickname: ActiveValue::Set(param.nickname.flatten()),
            active: ActiveValue::Set(param.active.unwrap_or(true)),
        };

        let inserted = entity::prelude::Player::insert(model)
            .on_conflict(
                OnConflict::column(entity::player::Column::SlackId)
                    .do_nothing()
                    .to_owned(),
            )
            .exec_without_returning(self.db)
            .await?;

        if inserted == 0 {
            return Ok(None);
        }

        self.find_by_slack_id(slack_id).await
    }

    /// Updates the fields present in `param` on an existing player.
    ///
    /// The Slack ID is never changed.
    ///
    /// # Arguments
    /// - `slack_id` - Slack user ID of the player to update
    /// - `param` - Fields to write; `None` leaves a column untouched
    ///
    /// # Returns
    /// - `Ok(Player)` - The updated player
    /// - `Err(DbErr::RecordNotFound)` - No player stored with that Slack ID
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(&self, slack_id: &str, param: UpdatePlayerParams) -> Result<Player, DbErr> {
        let entity = entity::prelude::Player::find_by_id(slack_id.to_string())
            .one(self.db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("Player {} not found", slack_id)))?;

        let mut active_model: entity::player::ActiveModel = entity.into();

        if let Some(nickname) = param.nickname {
            active_model.nickname = ActiveValue::Set(nickname);
        }
        if let Some(active) = param.active {
            active_model.active = ActiveValue::Set(active);
        }

        if !active_model.is_changed() {
            return Ok(Player::from_entity(active_model.try_into_model()?));
        }

        let entity = active_model.update(self.db).await?;

        Ok(Player::from_entity(entity))
    }

    /// Deletes a player by Slack ID.
    ///
    /// # Arguments
    /// - `slack_id` - Slack user ID of the player to delete
    ///
    /// # Returns
    /// - `Ok(true)` - The player was deleted
    /// - `Ok(false)` - No player stored with that Slack ID
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, slack_id: &str) -> Result<bool, DbErr> {
        let result = entity::prelude::Player::delete_by_id(slack_id.to_string())
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}

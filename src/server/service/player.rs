use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::api::not_found,
    server::{
        data::player::PlayerRepository,
        error::AppError,
        model::player::{enrich_slack_users_with_players, Player},
        schema::player::PlayerSchema,
        service::slack::Directory,
        util::parse::parse_json_body,
    },
};

pub struct PlayerService<'a> {
    db: &'a DatabaseConnection,
    directory: &'a dyn Directory,
}

impl<'a> PlayerService<'a> {
    pub fn new(db: &'a DatabaseConnection, directory: &'a dyn Directory) -> Self {
        Self { db, directory }
    }

    /// Lists Slack users matching `search`, each merged with its stored player row.
    ///
    /// Users without a row appear with default local fields.
    pub async fn get_all(&self, search: Option<&str>) -> Result<Vec<Player>, AppError> {
        let slack_users = self.directory.get_users(search).await?;

        let players = PlayerRepository::new(self.db).get_all().await?;

        Ok(enrich_slack_users_with_players(slack_users, players))
    }

    /// Gets one player merged with its Slack profile.
    ///
    /// A Slack user without a stored row yields the default player; nothing is written.
    pub async fn get(&self, slack_id: &str) -> Result<Player, AppError> {
        let slack_user = self.directory.get_user(slack_id).await?;

        let player = PlayerRepository::new(self.db)
            .find_by_slack_id(slack_id)
            .await?
            .unwrap_or_else(|| Player::from_slack_id(slack_id));

        Ok(player.merge_slack_user(&slack_user))
    }

    /// Creates or partially updates the player for a Slack user.
    ///
    /// The Slack user is looked up before the body is inspected, so an unknown user or an
    /// unreachable directory fails the request even when the body is invalid. Nothing is
    /// written unless the body validates.
    ///
    /// # Arguments
    /// - `slack_id` - Slack user ID from the path
    /// - `body` - Raw request body
    ///
    /// # Returns
    /// - `Ok((Player, true))` - A new row was created
    /// - `Ok((Player, false))` - The existing row was updated
    /// - `Err(AppError::SlackErr)` - Directory lookup failed
    /// - `Err(AppError::BadRequest)` - Empty or malformed body
    /// - `Err(AppError::Validation)` - Body failed schema validation
    /// - `Err(AppError::DbErr)` - Database error, the transaction is rolled back
    pub async fn update(&self, slack_id: &str, body: &[u8]) -> Result<(Player, bool), AppError> {
        let slack_user = self.directory.get_user(slack_id).await?;

        let input = parse_json_body(body)?;

        let errors = PlayerSchema.validate(&input);
        if !errors.is_empty() {
            return Err(AppError::Validation(errors));
        }
        let params = PlayerSchema.load(&input);

        let txn = self.db.begin().await?;
        let repo = PlayerRepository::new(&txn);

        let (player, created) = match repo.create_if_absent(slack_id, params.clone()).await? {
            Some(player) => (player, true),
            None => (repo.update(slack_id, params).await?, false),
        };

        txn.commit().await?;

        if created {
            tracing::info!("Created player {}", slack_id);
        }

        Ok((player.merge_slack_user(&slack_user), created))
    }

    /// Deletes the stored row of a player.
    ///
    /// The Slack directory is not consulted, so the returned player has no profile.
    ///
    /// # Returns
    /// - `Ok(Player)` - The deleted row's last values
    /// - `Err(AppError::NotFound)` - No row is stored for `slack_id`
    /// - `Err(AppError::DbErr)` - Database error, the transaction is rolled back
    pub async fn delete(&self, slack_id: &str) -> Result<Player, AppError> {
        let txn = self.db.begin().await?;
        let repo = PlayerRepository::new(&txn);

        let Some(player) = repo.find_by_slack_id(slack_id).await? else {
            return Err(AppError::NotFound(not_found("Player")));
        };

        repo.delete(slack_id).await?;

        txn.commit().await?;

        tracing::info!("Deleted player {}", slack_id);

        Ok(player)
    }
}

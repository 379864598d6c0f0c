//! Player domain models and parameters.
//!
//! A player combines the locally stored row with a transient profile taken from the
//! Slack directory. The profile only lives for the duration of one response and is
//! never written to the database.

use std::collections::HashMap;

use crate::server::model::slack::SlackUser;

/// Player with its locally owned fields and, once merged, its Slack profile.
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    /// Slack user ID, primary key of the player table.
    pub slack_id: String,
    /// Locally chosen nickname.
    pub nickname: Option<String>,
    /// Whether the player currently takes part in games.
    pub active: bool,
    /// Directory data from the latest successful lookup, `None` when not looked up.
    pub profile: Option<SlackProfile>,
}

/// Request-scoped directory data attached to a player.
#[derive(Debug, Clone, PartialEq)]
pub struct SlackProfile {
    /// Name to show, see [`SlackUser::preferred_name`].
    pub name: String,
    pub real_name: String,
    pub avatar_url: Option<String>,
}

impl Player {
    /// Creates the default, unsaved player for a Slack user without a local row.
    ///
    /// # Arguments
    /// - `slack_id` - Slack user ID the player belongs to
    ///
    /// # Returns
    /// - `Player` - Player with no nickname, active, and no profile
    pub fn from_slack_id(slack_id: impl Into<String>) -> Self {
        Self {
            slack_id: slack_id.into(),
            nickname: None,
            active: true,
            profile: None,
        }
    }

    /// Converts an entity model to a player domain model at the repository boundary.
    pub fn from_entity(entity: entity::player::Model) -> Self {
        Self {
            slack_id: entity.slack_id,
            nickname: entity.nickname,
            active: entity.active,
            profile: None,
        }
    }

    /// Attaches the profile of `user` to this player.
    ///
    /// Persisted fields are kept as they are; only the transient profile is replaced.
    ///
    /// # Arguments
    /// - `user` - Directory record for the same Slack user
    ///
    /// # Returns
    /// - `Player` - The same player carrying `user`'s profile
    pub fn merge_slack_user(mut self, user: &SlackUser) -> Self {
        self.profile = Some(SlackProfile {
            name: user.preferred_name().to_string(),
            real_name: user.real_name.clone(),
            avatar_url: user.avatar_url.clone(),
        });
        self
    }
}

/// Joins directory search results with the stored players.
///
/// Produces one player per Slack user, in the order Slack returned them. Users without
/// a stored row get a default player. Stored rows whose Slack user is not in the
/// results are left out; the directory decides who is listed.
///
/// # Arguments
/// - `slack_users` - Users returned by the directory search
/// - `players` - All stored players
///
/// # Returns
/// - `Vec<Player>` - Enriched players, exactly one per Slack user
pub fn enrich_slack_users_with_players(
    slack_users: Vec<SlackUser>,
    players: Vec<Player>,
) -> Vec<Player> {
    let by_slack_id: HashMap<String, Player> = players
        .into_iter()
        .map(|player| (player.slack_id.clone(), player))
        .collect();

    slack_users
        .iter()
        .map(|user| {
            by_slack_id
                .get(&user.id)
                .cloned()
                .unwrap_or_else(|| Player::from_slack_id(&user.id))
                .merge_slack_user(user)
        })
        .collect()
}

/// Parameters for a partial player update.
///
/// `None` leaves the column untouched. For `nickname`, `Some(None)` clears the value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdatePlayerParams {
    pub nickname: Option<Option<String>>,
    pub active: Option<bool>,
}

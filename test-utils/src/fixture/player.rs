//! Player fixtures for creating in-memory test data.

use entity::player;

/// Default test Slack user ID.
pub const DEFAULT_SLACK_ID: &str = "U0000000001";

/// Creates a player entity model with default values.
///
/// # Default Values
/// - slack_id: `"U0000000001"`
/// - nickname: `None`
/// - active: `true`
///
/// # Example
///
/// ```rust,ignore
/// let player = test_utils::fixture::player::entity();
/// assert!(player.active);
/// ```
pub fn entity() -> player::Model {
    entity_builder().build()
}

/// Creates a player entity builder for customization.
pub fn entity_builder() -> PlayerEntityBuilder {
    PlayerEntityBuilder::default()
}

/// Builder for creating customized player entity models.
pub struct PlayerEntityBuilder {
    slack_id: String,
    nickname: Option<String>,
    active: bool,
}

impl Default for PlayerEntityBuilder {
    fn default() -> Self {
        Self {
            slack_id: DEFAULT_SLACK_ID.to_string(),
            nickname: None,
            active: true,
        }
    }
}

impl PlayerEntityBuilder {
    pub fn slack_id(mut self, slack_id: impl Into<String>) -> Self {
        self.slack_id = slack_id.into();
        self
    }

    pub fn nickname(mut self, nickname: impl Into<String>) -> Self {
        self.nickname = Some(nickname.into());
        self
    }

    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    pub fn build(self) -> player::Model {
        player::Model {
            slack_id: self.slack_id,
            nickname: self.nickname,
            active: self.active,
        }
    }
}

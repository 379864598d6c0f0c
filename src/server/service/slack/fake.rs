use async_trait::async_trait;

use super::Directory;
use crate::server::{
    error::slack::SlackError,
    model::slack::{filter_users, SlackUser},
};

/// In-memory directory for tests.
#[derive(Debug, Clone, Default)]
pub struct FakeDirectory {
    users: Vec<SlackUser>,
    unavailable: bool,
}

impl FakeDirectory {
    pub fn new(users: Vec<SlackUser>) -> Self {
        Self {
            users,
            unavailable: false,
        }
    }

    /// A directory whose every call fails, as when Slack is down.
    pub fn unavailable() -> Self {
        Self {
            users: Vec::new(),
            unavailable: true,
        }
    }

    fn check(&self, method: &'static str) -> Result<(), SlackError> {
        if self.unavailable {
            return Err(SlackError::Api {
                method,
                error: "service_unavailable".to_string(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl Directory for FakeDirectory {
    async fn get_user(&self, slack_id: &str) -> Result<SlackUser, SlackError> {
        self.check("users.info")?;

        self.users
            .iter()
            .find(|user| user.id == slack_id)
            .cloned()
            .ok_or_else(|| SlackError::Api {
                method: "users.info",
                error: "user_not_found".to_string(),
            })
    }

    async fn get_users(&self, search: Option<&str>) -> Result<Vec<SlackUser>, SlackError> {
        self.check("users.list")?;

        Ok(filter_users(self.users.clone(), search))
    }
}

/// Builds a person with the given display name, for test fixtures.
pub fn slack_user(id: &str, display_name: &str) -> SlackUser {
    SlackUser {
        id: id.to_string(),
        name: display_name.to_lowercase(),
        real_name: format!("{} Liddell", display_name),
        display_name: display_name.to_string(),
        avatar_url: Some(format!("https://avatars.slack-edge.com/{}_192.png", id)),
        deleted: false,
        is_bot: false,
    }
}

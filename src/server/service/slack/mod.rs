//! Slack directory access.
//!
//! Handlers never talk to Slack directly. They go through the [`Directory`] trait stored
//! in the application state, which the real [`SlackClient`] implements and tests replace
//! with an in-memory fake.

mod client;
#[cfg(test)]
pub mod fake;

pub use client::SlackClient;

use async_trait::async_trait;

use crate::server::{error::slack::SlackError, model::slack::SlackUser};

/// Read-only view of the Slack user directory.
#[async_trait]
pub trait Directory: Send + Sync {
    /// Looks up a single user by Slack ID.
    ///
    /// # Returns
    /// - `Ok(SlackUser)` - The user's directory record
    /// - `Err(SlackError)` - The lookup failed, including when the user does not exist
    async fn get_user(&self, slack_id: &str) -> Result<SlackUser, SlackError>;

    /// Lists people in the workspace, optionally filtered by a substring search.
    ///
    /// Bots, Slackbot and deactivated accounts are never returned.
    ///
    /// # Returns
    /// - `Ok(Vec<SlackUser>)` - Matching users in directory order
    /// - `Err(SlackError)` - The listing failed
    async fn get_users(&self, search: Option<&str>) -> Result<Vec<SlackUser>, SlackError>;
}

//! Slack user domain model.
//!
//! A `SlackUser` is the directory's view of a person. It is never persisted; its profile
//! data is merged into players for the duration of a single response.

/// Slack's built-in bot user, which is not flagged `is_bot` in `users.list`.
const SLACKBOT_ID: &str = "USLACKBOT";

/// A user record from the Slack directory.
#[derive(Debug, Clone, PartialEq)]
pub struct SlackUser {
    /// Slack user ID, e.g. `U024BE7LH`.
    pub id: String,
    /// Slack handle.
    pub name: String,
    /// Full name from the profile, empty when the user has not set one.
    pub real_name: String,
    /// Display name from the profile, empty when the user has not set one.
    pub display_name: String,
    /// URL of the 192px avatar.
    pub avatar_url: Option<String>,
    /// Whether the account has been deactivated.
    pub deleted: bool,
    /// Whether the account belongs to an app or bot.
    pub is_bot: bool,
}

impl SlackUser {
    /// Name to show for this user.
    ///
    /// The display name, falling back to the real name and then to the handle when the
    /// user left the fields empty, the same order Slack's own client uses.
    pub fn preferred_name(&self) -> &str {
        [&self.display_name, &self.real_name, &self.name]
            .into_iter()
            .map(|name| name.trim())
            .find(|name| !name.is_empty())
            .unwrap_or_default()
    }

    /// Whether this is a real, active person rather than a bot or deactivated account.
    pub fn is_person(&self) -> bool {
        !self.deleted && !self.is_bot && self.id != SLACKBOT_ID
    }

    /// Case-insensitive substring match against the handle, real name and display name.
    ///
    /// `needle` must already be lowercase.
    fn matches(&self, needle: &str) -> bool {
        [&self.name, &self.real_name, &self.display_name]
            .into_iter()
            .any(|name| name.to_lowercase().contains(needle))
    }
}

/// Applies the directory search rules to a full user listing.
///
/// Drops bots and deactivated accounts, then keeps the users matching `search`. A
/// missing or blank search keeps everyone. Order is preserved.
///
/// # Arguments
/// - `users` - Every user returned by the directory
/// - `search` - Optional substring filter
///
/// # Returns
/// - `Vec<SlackUser>` - Matching users in directory order
pub fn filter_users(users: Vec<SlackUser>, search: Option<&str>) -> Vec<SlackUser> {
    let needle = search
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty());

    users
        .into_iter()
        .filter(SlackUser::is_person)
        .filter(|user| needle.as_deref().map_or(true, |needle| user.matches(needle)))
        .collect()
}

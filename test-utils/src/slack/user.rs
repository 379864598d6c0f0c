//! Test factory for Slack user objects.

use serde_json::{json, Value};

/// Creates a Slack user object as `users.info` and `users.list` return it.
///
/// # Arguments
/// - `id` - Slack user ID (e.g. `"U1"`)
/// - `name` - Slack handle
/// - `real_name` - Full name from the profile
/// - `display_name` - Display name from the profile, may be empty
///
/// # Example
///
/// ```rust,ignore
/// let user = create_test_user("U1", "alice", "Alice Liddell", "Alice");
/// ```
pub fn create_test_user(id: &str, name: &str, real_name: &str, display_name: &str) -> Value {
    json!({
        "id": id,
        "team_id": "T0000000001",
        "name": name,
        "deleted": false,
        "real_name": real_name,
        "tz": "Europe/Amsterdam",
        "is_admin": false,
        "is_bot": false,
        "profile": {
            "real_name": real_name,
            "display_name": display_name,
            "image_72": format!("https://avatars.slack-edge.com/{id}_72.png"),
            "image_192": format!("https://avatars.slack-edge.com/{id}_192.png"),
        },
    })
}

/// Creates a deactivated Slack user.
pub fn create_deleted_user(id: &str, name: &str) -> Value {
    let mut user = create_test_user(id, name, name, "");
    user["deleted"] = json!(true);
    user
}

/// Creates a Slack bot user.
pub fn create_test_bot(id: &str, name: &str) -> Value {
    let mut user = create_test_user(id, name, name, name);
    user["is_bot"] = json!(true);
    user
}

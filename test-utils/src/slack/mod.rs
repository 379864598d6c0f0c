//! Test payloads shaped like Slack Web API responses.
//!
//! Slack objects are handed out as `serde_json::Value` so tests deserialize them through
//! the same types the client uses for real responses.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::slack::{user::create_test_user, users_info_ok};
//!
//! let user = create_test_user("U1", "alice", "Alice Liddell", "Alice");
//! let body = users_info_ok(user);
//! ```

pub mod user;

pub use user::{create_deleted_user, create_test_bot, create_test_user};

use serde_json::{json, Value};

/// Body of a successful `users.info` call.
pub fn users_info_ok(user: Value) -> Value {
    json!({ "ok": true, "user": user })
}

/// Body of a successful `users.list` page.
///
/// An empty `next_cursor` marks the final page, the same way Slack does.
pub fn users_list_page(members: Vec<Value>, next_cursor: &str) -> Value {
    json!({
        "ok": true,
        "members": members,
        "response_metadata": { "next_cursor": next_cursor },
    })
}

/// Body of a failed call, e.g. `api_error("user_not_found")`.
pub fn api_error(error: &str) -> Value {
    json!({ "ok": false, "error": error })
}

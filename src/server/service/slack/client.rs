//! Slack Web API client.
//!
//! Only the two read methods the directory needs are implemented: `users.info` and
//! `users.list`. Every call authenticates with the bot token as a bearer token.

use std::sync::Arc;

use async_trait::async_trait;
use serde::{de::DeserializeOwned, Deserialize};
use url::Url;

use super::Directory;
use crate::server::{
    error::slack::SlackError,
    model::slack::{filter_users, SlackUser},
};

/// Maximum page size `users.list` accepts.
const USERS_LIST_LIMIT: &str = "200";

/// HTTP client for the Slack Web API.
#[derive(Debug, Clone)]
pub struct SlackClient {
    http_client: reqwest::Client,
    api_url: Url,
    token: Arc<str>,
}

impl SlackClient {
    /// Creates a new client.
    ///
    /// # Arguments
    /// - `http_client` - Shared reqwest client
    /// - `api_url` - Base URL of the Web API, must end with `/`
    /// - `token` - Bot token used as bearer token
    pub fn new(http_client: reqwest::Client, api_url: Url, token: impl Into<Arc<str>>) -> Self {
        Self {
            http_client,
            api_url,
            token: token.into(),
        }
    }

    /// Calls a Web API method and unwraps Slack's `ok`/`error` envelope.
    async fn call<T: DeserializeOwned>(
        &self,
        method: &'static str,
        query: &[(&str, &str)],
    ) -> Result<T, SlackError> {
        let url = self.api_url.join(method)?;

        let response: ApiResponse<T> = self
            .http_client
            .get(url)
            .bearer_auth(&*self.token)
            .query(query)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        if !response.ok {
            return Err(SlackError::Api {
                method,
                error: response.error.unwrap_or_else(|| "unknown_error".to_string()),
            });
        }

        Ok(response.payload)
    }

    /// Fetches every workspace member, following `users.list` pagination.
    async fn list_all_users(&self) -> Result<Vec<SlackUser>, SlackError> {
        let mut users = Vec::new();
        let mut cursor = String::new();

        loop {
            let mut query = vec![("limit", USERS_LIST_LIMIT)];
            if !cursor.is_empty() {
                query.push(("cursor", cursor.as_str()));
            }

            let page: UsersListPayload = self.call("users.list", &query).await?;
            users.extend(page.members.into_iter().map(SlackUser::from));

            match page.response_metadata.and_then(|meta| meta.next_cursor) {
                Some(next) if !next.is_empty() => cursor = next,
                _ => break,
            }
        }

        tracing::debug!("Fetched {} users from Slack", users.len());

        Ok(users)
    }
}

#[async_trait]
impl Directory for SlackClient {
    async fn get_user(&self, slack_id: &str) -> Result<SlackUser, SlackError> {
        let payload: UsersInfoPayload = self.call("users.info", &[("user", slack_id)]).await?;

        payload
            .user
            .map(SlackUser::from)
            .ok_or(SlackError::MissingField {
                method: "users.info",
                field: "user",
            })
    }

    async fn get_users(&self, search: Option<&str>) -> Result<Vec<SlackUser>, SlackError> {
        let users = self.list_all_users().await?;

        Ok(filter_users(users, search))
    }
}

#[derive(Deserialize)]
struct ApiResponse<T> {
    ok: bool,
    #[serde(default)]
    error: Option<String>,
    #[serde(flatten)]
    payload: T,
}

#[derive(Deserialize)]
struct UsersInfoPayload {
    #[serde(default)]
    user: Option<UserObject>,
}

#[derive(Deserialize)]
struct UsersListPayload {
    #[serde(default)]
    members: Vec<UserObject>,
    #[serde(default)]
    response_metadata: Option<ResponseMetadata>,
}

#[derive(Deserialize)]
struct ResponseMetadata {
    #[serde(default)]
    next_cursor: Option<String>,
}

#[derive(Deserialize)]
struct UserObject {
    id: String,
    #[serde(default)]
    name: String,
    #[serde(default)]
    real_name: Option<String>,
    #[serde(default)]
    deleted: bool,
    #[serde(default)]
    is_bot: bool,
    #[serde(default)]
    profile: ProfileObject,
}

#[derive(Deserialize, Default)]
struct ProfileObject {
    #[serde(default)]
    real_name: String,
    #[serde(default)]
    display_name: String,
    #[serde(default)]
    image_192: Option<String>,
}

impl From<UserObject> for SlackUser {
    fn from(user: UserObject) -> Self {
        let real_name = if user.profile.real_name.is_empty() {
            user.real_name.unwrap_or_default()
        } else {
            user.profile.real_name
        };

        Self {
            id: user.id,
            name: user.name,
            real_name,
            display_name: user.profile.display_name,
            avatar_url: user.profile.image_192.filter(|url| !url.is_empty()),
            deleted: user.deleted,
            is_bot: user.is_bot,
        }
    }
}

use url::Url;

use crate::server::error::{config::ConfigError, AppError};

const SLACK_API_URL: &str = "https://slack.com/api/";
const BIND_ADDRESS: &str = "0.0.0.0:8080";

pub struct Config {
    pub database_url: String,

    /// Bot token sent as bearer auth to the Slack Web API.
    pub slack_token: String,
    /// Base URL the Slack method names are joined onto; always ends in `/`.
    pub slack_api_url: Url,

    pub bind_address: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    ///
    /// # Arguments
    /// - `var` - Returns the value of the named variable, `None` when unset
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables present and valid
    /// - `Err(AppError::ConfigErr)` - A required variable is missing or a value is invalid
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let optional = |name: &str| var(name).filter(|value| !value.trim().is_empty());
        let required = |name: &str| {
            optional(name).ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
        };

        let mut slack_api_url =
            optional("SLACK_API_URL").unwrap_or_else(|| SLACK_API_URL.to_string());
        if !slack_api_url.ends_with('/') {
            slack_api_url.push('/');
        }
        let slack_api_url =
            Url::parse(&slack_api_url).map_err(|e| ConfigError::InvalidEnvVar {
                name: "SLACK_API_URL".to_string(),
                reason: e.to_string(),
            })?;

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            slack_token: required("SLACK_TOKEN")?,
            slack_api_url,
            bind_address: optional("BIND_ADDRESS").unwrap_or_else(|| BIND_ADDRESS.to_string()),
        })
    }
}

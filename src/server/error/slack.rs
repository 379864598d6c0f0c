use thiserror::Error;

/// A failed call to the Slack Web API.
///
/// Callers never distinguish between the variants: any of them means the directory
/// lookup failed and is answered with `503 Service Unavailable`. The variants exist so
/// the logged message says what went wrong.
#[derive(Error, Debug)]
pub enum SlackError {
    /// Transport failure, non-success HTTP status (including 429 rate limits) or a
    /// response body that could not be decoded.
    #[error("request to Slack failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Slack answered with `"ok": false`.
    ///
    /// Unknown users surface here as `user_not_found`, bad tokens as `invalid_auth`.
    #[error("Slack method {method} returned error: {error}")]
    Api {
        /// Web API method that was called, e.g. `users.info`
        method: &'static str,
        /// The `error` string from the response body
        error: String,
    },

    /// Slack answered with `"ok": true` but without the expected payload.
    #[error("Slack method {method} response is missing `{field}`")]
    MissingField {
        method: &'static str,
        field: &'static str,
    },

    /// The method URL could not be built from the configured API base URL.
    #[error("invalid Slack API url: {0}")]
    Url(#[from] url::ParseError),
}

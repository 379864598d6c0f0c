//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into the uniform error envelope. The `AppError` enum serves
//! as the top-level error type that wraps domain-specific errors and implements
//! `IntoResponse` for automatic error handling in API endpoints.

pub mod config;
pub mod slack;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::{ErrorDto, INTERNAL_ERROR, REQUEST_FAILED},
    server::{
        error::{config::ConfigError, slack::SlackError},
        schema::FieldErrors,
    },
};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application and provides
/// automatic conversion to HTTP responses. Most variants use `#[from]` for automatic
/// error conversion.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Database operation error from SeaORM.
    ///
    /// Results in 500 Internal Server Error with error details logged server-side.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Slack directory lookup failed.
    ///
    /// Logged and answered with 503 Service Unavailable and a generic
    /// `REQUEST_FAILED` message; the cause is never exposed to the caller.
    #[error(transparent)]
    SlackErr(#[from] SlackError),

    /// HTTP client construction error from reqwest.
    #[error(transparent)]
    ReqwestErr(#[from] reqwest::Error),

    /// I/O error, e.g. binding the listener.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Request body failed schema validation.
    ///
    /// Results in 422 Unprocessable Entity with the field-level error map.
    #[error("Request body failed validation")]
    Validation(FieldErrors),

    /// Resource not found error.
    ///
    /// Results in 404 Not Found with the provided message under `general`.
    #[error("{0}")]
    NotFound(String),

    /// Invalid request error.
    ///
    /// Results in 400 Bad Request with the provided message under `general`.
    #[error("{0}")]
    BadRequest(String),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For `BadRequest` variant
/// - 404 Not Found - For `NotFound` variant
/// - 422 Unprocessable Entity - For `Validation` variant
/// - 503 Service Unavailable - For `SlackErr` variant
/// - 500 Internal Server Error - For all other error types (DbErr, ConfigErr, etc.)
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::SlackErr(err) => {
                tracing::error!("Slack API error: {}", err);
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    Json(ErrorDto::general(REQUEST_FAILED)),
                )
                    .into_response()
            }
            Self::Validation(errors) => {
                (StatusCode::UNPROCESSABLE_ENTITY, Json(ErrorDto { errors })).into_response()
            }
            Self::NotFound(msg) => {
                (StatusCode::NOT_FOUND, Json(ErrorDto::general(msg))).into_response()
            }
            Self::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, Json(ErrorDto::general(msg))).into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns the generic `INTERNAL_ERROR` message to the client.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto::general(INTERNAL_ERROR)),
        )
            .into_response()
    }
}

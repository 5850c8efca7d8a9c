//! Typed errors and HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Startup configuration errors. These never reach a client.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid {var} '{value}': {reason}")]
    InvalidValue {
        var: &'static str,
        value: String,
        reason: String,
    },
}

/// Anything that can go wrong while handling one exec request.
///
/// Every variant is reported to the client the same way (500 with the display text);
/// the variants only exist so logs and tests can tell them apart.
#[derive(Error, Debug)]
pub enum ExecError {
    #[error("{0} is not set")]
    MissingConfig(&'static str),
    #[error("{0}")]
    Body(String),
    #[error("{0}")]
    Connect(sqlx::Error),
    #[error("{0}")]
    Query(sqlx::Error),
}

impl ExecError {
    /// Short variant name for structured logs.
    pub fn kind(&self) -> &'static str {
        match self {
            ExecError::MissingConfig(_) => "missing_config",
            ExecError::Body(_) => "body",
            ExecError::Connect(_) => "connect",
            ExecError::Query(_) => "query",
        }
    }
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl IntoResponse for ExecError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.to_string(),
        };
        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}

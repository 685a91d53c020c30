use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use crate::api::ErrorResponse;

/// How much diagnostic information error bodies carry.
#[derive(Debug, Deserialize, Default, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ErrorDetail {
    /// Adds a `details` field with the raw upstream body or the error chain.
    #[default]
    Verbose,
    Terse,
}

#[derive(Debug, Error)]
pub enum NotionError {
    /// Notion answered with a non-success status.
    #[error("{message}")]
    Api {
        status: StatusCode,
        message: String,
        details: Value,
    },
    #[error("error sending request to notion api")]
    Transport(#[from] reqwest::Error),
    #[error("failed to decode notion api response")]
    Decode(#[source] reqwest::Error),
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Method not allowed")]
    MethodNotAllowed,
    #[error("Missing required fields")]
    MissingFields,
    #[error("Invalid request body")]
    InvalidBody(#[source] serde_json::Error),
    #[error("Request body too large or unreadable")]
    UnreadableBody(#[source] axum::Error),
    #[error(transparent)]
    Notion(#[from] NotionError),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        use AppError::*;
        match self {
            MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            MissingFields | InvalidBody(_) => StatusCode::BAD_REQUEST,
            UnreadableBody(_) => StatusCode::PAYLOAD_TOO_LARGE,
            Notion(NotionError::Api { status, .. }) => *status,
            Notion(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn details(&self) -> Option<Value> {
        use AppError::*;
        match self {
            MethodNotAllowed | MissingFields => None,
            InvalidBody(e) => Some(Value::String(e.to_string())),
            UnreadableBody(e) => Some(Value::String(crate::unpack_error(e))),
            Notion(NotionError::Api { details, .. }) => Some(details.clone()),
            Notion(e) => Some(Value::from(error_chain(e))),
        }
    }

    /// Internal failures report their full error chain.
    fn message(&self) -> String {
        match self {
            AppError::Notion(e @ (NotionError::Transport(_) | NotionError::Decode(_))) => {
                crate::unpack_error(e)
            }
            _ => self.to_string(),
        }
    }

    pub fn body(&self, detail: ErrorDetail) -> ErrorResponse {
        let details = match detail {
            ErrorDetail::Verbose => self.details(),
            ErrorDetail::Terse => None,
        };
        ErrorResponse {
            error: self.message(),
            details,
        }
    }

    /// Logs the error and renders it as a JSON response.
    pub fn into_response_with(self, detail: ErrorDetail) -> Response {
        let status = self.status();
        match &self {
            AppError::Notion(NotionError::Api { details, .. }) => {
                tracing::error!(status = %status, details = %details, "notion api error");
            }
            AppError::Notion(e) => {
                tracing::error!(error = %crate::unpack_error(e), "failed to save book");
            }
            _ => {
                tracing::warn!(status = %status, error = %crate::unpack_error(&self), "rejected request");
            }
        }
        (status, Json(self.body(detail))).into_response()
    }
}

fn error_chain(err: &(dyn std::error::Error)) -> Vec<String> {
    let mut parts = Vec::new();
    let mut current = err.source();
    while let Some(source) = current {
        parts.push(source.to_string());
        current = source.source();
    }
    parts
}

// Connect protocol error envelope for unary JSON RPCs.
//
// Responsibilities
// - Map application failures and undecodable bodies onto Connect codes.
// - Render `{"code": "...", "message": "..."}` with the matching HTTP status.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::shared::core::errors::ApplicationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Code {
    InvalidArgument,
    NotFound,
    FailedPrecondition,
}

impl Code {
    pub fn http_status(self) -> StatusCode {
        match self {
            Code::InvalidArgument | Code::FailedPrecondition => StatusCode::BAD_REQUEST,
            Code::NotFound => StatusCode::NOT_FOUND,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Error)]
#[error("{message}")]
pub struct ConnectError {
    pub code: Code,
    pub message: String,
}

impl ConnectError {
    pub fn new(code: Code, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl From<ApplicationError> for ConnectError {
    fn from(error: ApplicationError) -> Self {
        match error {
            ApplicationError::NotFound(message) => Self::new(Code::NotFound, message),
            ApplicationError::FailedPrecondition(message) => {
                Self::new(Code::FailedPrecondition, message)
            }
        }
    }
}

impl From<JsonRejection> for ConnectError {
    fn from(rejection: JsonRejection) -> Self {
        Self::new(Code::InvalidArgument, rejection.body_text())
    }
}

impl IntoResponse for ConnectError {
    fn into_response(self) -> Response {
        (self.code.http_status(), Json(self)).into_response()
    }
}

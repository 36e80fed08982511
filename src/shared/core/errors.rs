use thiserror::Error;

/// Failures the stores surface to their callers. Transports pick their own
/// status codes from the variant; the message is passed through as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApplicationError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    FailedPrecondition(String),
}

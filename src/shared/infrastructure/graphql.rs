use async_graphql::{Error, ErrorExtensions};

use crate::shared::core::errors::ApplicationError;

impl ErrorExtensions for ApplicationError {
    fn extend(&self) -> Error {
        let code = match self {
            ApplicationError::NotFound(_) => "NOT_FOUND",
            ApplicationError::FailedPrecondition(_) => "FAILED_PRECONDITION",
        };
        Error::new(self.to_string()).extend_with(|_, extensions| extensions.set("code", code))
    }
}

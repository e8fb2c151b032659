use thiserror::Error;

use crate::outcome::{Failure, ResultError};

/// Errors raised by the mediator itself, as opposed to failures a handler
/// reports through its outcome.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MediatorError {
    #[error("handler not found for request_type={0}")]
    HandlerNotFound(&'static str),

    #[error("handler for request_type={expected} received a different request type")]
    RequestTypeMismatch { expected: &'static str },

    /// Guard on the response downcast. `TypedHandler` always boxes
    /// `R::Response`, so a registry built through `register` never yields it.
    #[error("handler for request_type={request} returned an unexpected response type")]
    ResponseTypeMismatch { request: &'static str },
}

impl From<MediatorError> for Failure {
    fn from(err: MediatorError) -> Self {
        let error = match &err {
            MediatorError::HandlerNotFound(_) => ResultError::not_found(err.to_string()),
            _ => ResultError::internal(err.to_string()),
        };
        Failure::new(error.with_title("mediator"))
    }
}

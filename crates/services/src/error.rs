//! Shared error types for the services crate.

use thiserror::Error;

/// Errors emitted by a `RequestClient` for a single round trip.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum RequestError {
    #[error("recommendation request returned an empty response")]
    EmptyBody,
    #[error("recommendation response was malformed: {0}")]
    MalformedBody(String),
    #[error("recommendation request failed with status {0}")]
    Status(reqwest::StatusCode),
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}

/// Why a submission ended in `SubmissionOutcome::Failure`.
///
/// Caught at the controller boundary and turned into a failure notice; it is
/// never propagated to the view layer as an `Err`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SubmissionError {
    #[error("network failure: {0}")]
    NetworkFailure(String),
    #[error("server failure: {0}")]
    ServerFailure(String),
    #[error("unexpected error: {0}")]
    Unhandled(String),
}

impl From<RequestError> for SubmissionError {
    fn from(err: RequestError) -> Self {
        match err {
            RequestError::Transport(inner) => Self::NetworkFailure(inner.to_string()),
            RequestError::Status(_) | RequestError::EmptyBody | RequestError::MalformedBody(_) => {
                Self::ServerFailure(err.to_string())
            }
        }
    }
}

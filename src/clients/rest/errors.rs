//! Errors raised by [`RestClient`](super::RestClient).

use crate::clients::HttpError;
use thiserror::Error;

/// Error type for REST calls.
///
/// # Example
///
/// ```rust
/// use shopify_rest::clients::rest::RestError;
///
/// let error = RestError::InvalidPath { path: "/.json".to_string() };
/// assert_eq!(error.to_string(), "Invalid REST API path: /.json");
/// ```
#[derive(Debug, Error)]
pub enum RestError {
    /// The path is empty once slashes and the `.json` suffix are removed.
    #[error("Invalid REST API path: {path}")]
    InvalidPath {
        /// The path as given by the caller.
        path: String,
    },

    /// Transport failure.
    #[error(transparent)]
    Http(#[from] HttpError),
}

impl RestError {
    /// Returns the HTTP status code when the error came from a response.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::InvalidPath { .. } => None,
            Self::Http(e) => e.status(),
        }
    }
}

//! Transport error types.
//!
//! - [`HttpResponseError`]: a non-2xx response from the Admin API
//! - [`MaxHttpRetriesExceededError`]: 429/500 responses outlasted the configured tries
//! - [`InvalidHttpRequestError`]: a request was rejected before it was sent
//! - [`HttpError`]: the union of the above plus network failures
//!
//! # Example
//!
//! ```rust,ignore
//! use shopify_rest::clients::HttpError;
//!
//! match client.request(request).await {
//!     Ok(response) => println!("{}", response.body),
//!     Err(HttpError::Response(e)) => println!("{}: {}", e.code, e.message),
//!     Err(other) => println!("{other}"),
//! }
//! ```

use thiserror::Error;

/// A non-successful response from the Admin API.
///
/// `message` is human readable. It comes from the `errors` or `error`
/// fields of the body, and is `"Unknown Error"` when the body carries
/// neither.
///
/// # Example
///
/// ```rust
/// use shopify_rest::clients::HttpResponseError;
///
/// let error = HttpResponseError {
///     code: 500,
///     message: "Unknown Error".to_string(),
///     error_reference: None,
/// };
/// assert_eq!(error.to_string(), "Unknown Error");
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct HttpResponseError {
    /// HTTP status code.
    pub code: u16,
    /// Message extracted from the response body.
    pub message: String,
    /// Value of the `X-Request-Id` header, if any.
    pub error_reference: Option<String>,
}

/// Every attempt ended in a retryable (429 or 500) response.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Exceeded maximum retry count of {tries}. Last message: {message}")]
pub struct MaxHttpRetriesExceededError {
    /// Status code of the last response.
    pub code: u16,
    /// Number of attempts made.
    pub tries: u32,
    /// Message extracted from the last response body.
    pub message: String,
    /// Value of the `X-Request-Id` header on the last response, if any.
    pub error_reference: Option<String>,
}

/// A request that failed validation before it was sent.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// POST and PUT need a JSON body.
    #[error("Cannot use {method} without specifying data.")]
    MissingBody {
        /// The offending method.
        method: String,
    },

    /// GET and DELETE never carry a body.
    #[error("Cannot send a body with {method}.")]
    UnexpectedBody {
        /// The offending method.
        method: String,
    },
}

/// Unified transport error.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Non-2xx response.
    #[error(transparent)]
    Response(#[from] HttpResponseError),

    /// Retry attempts exhausted.
    #[error(transparent)]
    MaxRetries(#[from] MaxHttpRetriesExceededError),

    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// A 2xx response whose body is not JSON.
    #[error("could not decode response body as JSON: {source}")]
    InvalidBody {
        /// Status of the response.
        code: u16,
        /// Underlying serde error.
        #[source]
        source: serde_json::Error,
    },

    /// Connection, TLS, timeout or body read failure.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl HttpError {
    /// Returns the HTTP status code when the error came from a response.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Response(e) => Some(e.code),
            Self::MaxRetries(e) => Some(e.code),
            Self::InvalidBody { code, .. } => Some(*code),
            Self::InvalidRequest(_) | Self::Network(_) => None,
        }
    }
}

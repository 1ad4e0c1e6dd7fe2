//! Error types for resource operations and pagination.
//!
//! Pagination failures keep their original shape: a malformed `Link`
//! header is a [`ResponseDecodingError`], while a bad percent escape or a
//! non-numeric `limit` surfaces the low-level parse error unchanged.
//!
//! # Example
//!
//! ```rust,ignore
//! use shopify_rest::rest::{PaginationError, ResourceError};
//!
//! match client.products().list(None).await {
//!     Ok(products) => println!("{} products", products.len()),
//!     Err(ResourceError::Pagination(PaginationError::Decoding(e))) => {
//!         println!("bad pagination header: {}", e.message);
//!     }
//!     Err(e) => println!("{e}"),
//! }
//! ```

use std::fmt;
use std::num::ParseIntError;

use crate::clients::{HttpError, RestError};
use thiserror::Error;

/// A response that could not be decoded according to the pagination protocol.
///
/// Displays only its message, e.g. `page_info is missing`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ResponseDecodingError {
    /// Human-readable reason.
    pub message: String,
    /// Status of the response that carried the header, when known.
    pub status: Option<u16>,
}

impl ResponseDecodingError {
    /// Creates an error with no status attached.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status: None,
        }
    }

    /// Attaches the response status.
    #[must_use]
    pub const fn with_status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }
}

/// A query string that is not valid `application/x-www-form-urlencoded`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QueryDecodeError {
    /// `%` not followed by two hex digits. Holds the offending text
    /// starting at `%`, at most three characters.
    #[error("invalid URL escape {0:?}")]
    InvalidEscape(String),

    /// `;` used as a pair separator.
    #[error("invalid semicolon separator in query")]
    SemicolonSeparator,

    /// Escapes decoded to bytes that are not UTF-8.
    #[error("invalid UTF-8 in URL query: {0}")]
    InvalidUtf8(String),
}

/// Anything that can go wrong while turning a `Link` header into a
/// [`Pagination`](super::Pagination).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PaginationError {
    /// Malformed header, invalid URL or missing `page_info`.
    #[error(transparent)]
    Decoding(#[from] ResponseDecodingError),

    /// Malformed percent-encoding in the link URL's query.
    #[error(transparent)]
    Query(#[from] QueryDecodeError),

    /// Non-numeric `limit`.
    #[error(transparent)]
    Limit(#[from] ParseIntError),
}

/// Error type for resource service calls.
#[derive(Debug, Error)]
pub enum ResourceError {
    /// Transport failure or non-2xx response.
    #[error(transparent)]
    Http(#[from] HttpError),

    /// REST client failure, including wrapped transport failures.
    #[error(transparent)]
    Rest(#[from] RestError),

    /// The `Link` header could not be turned into page options.
    #[error(transparent)]
    Pagination(#[from] PaginationError),

    /// The body had the envelope key but its content did not decode.
    #[error("could not decode '{key}' from response body: {source}")]
    Decode {
        /// Envelope key being decoded.
        key: &'static str,
        /// Underlying serde error.
        #[source]
        source: serde_json::Error,
    },

    /// A request body could not be serialized.
    #[error("could not encode '{key}' request body: {source}")]
    Encode {
        /// Envelope key of the body.
        key: &'static str,
        /// Underlying serde error.
        #[source]
        source: serde_json::Error,
    },

    /// A single-entity response lacked its envelope key.
    #[error("response body is missing '{key}'")]
    MissingEnvelope {
        /// The expected key.
        key: &'static str,
    },

    /// Request options could not be encoded as query parameters.
    #[error("could not encode request options: {message}")]
    EncodeOptions {
        /// What went wrong.
        message: String,
    },
}

impl ResourceError {
    /// Returns the HTTP status code when the error came from a response.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http(e) => e.status(),
            Self::Rest(e) => e.status(),
            Self::Pagination(PaginationError::Decoding(e)) => e.status,
            _ => None,
        }
    }

    /// Returns the `X-Request-Id` of the failing response, if any.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        let http = match self {
            Self::Http(e) | Self::Rest(RestError::Http(e)) => e,
            _ => return None,
        };
        match http {
            HttpError::Response(e) => e.error_reference.as_deref(),
            HttpError::MaxRetries(e) => e.error_reference.as_deref(),
            _ => None,
        }
    }

    /// `true` when the `Link` header violated the pagination protocol.
    #[must_use]
    pub const fn is_pagination_error(&self) -> bool {
        matches!(self, Self::Pagination(_))
    }
}

/// Failure part-way through an exhaustive fetch.
///
/// `items` holds everything decoded from the pages that succeeded, in
/// order. Displays as `source`.
pub struct ListAllError<T> {
    /// Items collected before the failure.
    pub items: Vec<T>,
    /// What stopped the fetch.
    pub source: ResourceError,
}

impl<T> ListAllError<T> {
    /// Splits into the partial items and the error.
    #[must_use]
    pub fn into_parts(self) -> (Vec<T>, ResourceError) {
        (self.items, self.source)
    }
}

impl<T> fmt::Debug for ListAllError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListAllError")
            .field("items", &self.items.len())
            .field("source", &self.source)
            .finish()
    }
}

impl<T> fmt::Display for ListAllError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.source, f)
    }
}

impl<T> std::error::Error for ListAllError<T> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

impl<T> From<ListAllError<T>> for ResourceError {
    fn from(error: ListAllError<T>) -> Self {
        error.source
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::HttpResponseError;

    #[test]
    fn test_response_decoding_error_displays_message() {
        let error = ResponseDecodingError::new("page_info is missing").with_status(200);
        assert_eq!(error.to_string(), "page_info is missing");
        assert_eq!(error.status, Some(200));
    }

    #[test]
    fn test_invalid_escape_message() {
        let error = QueryDecodeError::InvalidEscape("%in".to_string());
        assert_eq!(error.to_string(), r#"invalid URL escape "%in""#);
    }

    #[test]
    fn test_pagination_errors_are_transparent() {
        let limit: PaginationError = "invalid".parse::<u32>().unwrap_err().into();
        assert_eq!(limit.to_string(), "invalid digit found in string");

        let resource: ResourceError =
            PaginationError::from(QueryDecodeError::InvalidEscape("%in".into())).into();
        assert_eq!(resource.to_string(), r#"invalid URL escape "%in""#);
        assert!(resource.is_pagination_error());
    }

    #[test]
    fn test_status_and_request_id() {
        let error: ResourceError = RestError::Http(HttpError::Response(HttpResponseError {
            code: 404,
            message: "Not Found".to_string(),
            error_reference: Some("req-9".to_string()),
        }))
        .into();
        assert_eq!(error.status(), Some(404));
        assert_eq!(error.request_id(), Some("req-9"));
        assert_eq!(error.to_string(), "Not Found");

        let error = ResourceError::MissingEnvelope { key: "product" };
        assert_eq!(error.status(), None);
        assert_eq!(error.request_id(), None);
    }

    #[test]
    fn test_list_all_error_keeps_partial_items() {
        let error = ListAllError {
            items: vec![1, 2],
            source: ResourceError::MissingEnvelope { key: "products" },
        };
        assert_eq!(error.to_string(), "response body is missing 'products'");
        assert!(std::error::Error::source(&error).is_some());

        let (items, source) = error.into_parts();
        assert_eq!(items, vec![1, 2]);
        assert!(matches!(source, ResourceError::MissingEnvelope { .. }));
    }
}

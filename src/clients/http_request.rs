//! Request type and builder for the transport layer.

use std::collections::BTreeMap;
use std::fmt;

use crate::clients::errors::InvalidHttpRequestError;

/// HTTP methods used by the Admin REST API.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    /// GET
    Get,
    /// POST
    Post,
    /// PUT
    Put,
    /// DELETE
    Delete,
}

impl HttpMethod {
    const fn carries_body(self) -> bool {
        matches!(self, Self::Post | Self::Put)
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Get => "get",
            Self::Post => "post",
            Self::Put => "put",
            Self::Delete => "delete",
        })
    }
}

/// Query parameters, kept sorted so encoded URLs are deterministic.
pub type Query = BTreeMap<String, String>;

/// A request relative to the client's `/admin/api/{version}` base path.
///
/// Bodies are always JSON.
///
/// # Example
///
/// ```rust
/// use shopify_rest::clients::{HttpMethod, HttpRequest};
/// use serde_json::json;
///
/// let request = HttpRequest::builder(HttpMethod::Post, "products.json")
///     .body(json!({"product": {"title": "Burton Custom Freestyle 151"}}))
///     .build()
///     .unwrap();
/// assert!(request.body.is_some());
/// ```
#[derive(Clone, Debug)]
pub struct HttpRequest {
    /// Method.
    pub http_method: HttpMethod,
    /// Path relative to the base path, e.g. `products.json`.
    pub path: String,
    /// JSON body for POST and PUT.
    pub body: Option<serde_json::Value>,
    /// Query parameters.
    pub query: Query,
    /// How many times to attempt the request on 429/500 responses.
    pub tries: u32,
}

impl HttpRequest {
    /// Starts a builder.
    #[must_use]
    pub fn builder(method: HttpMethod, path: impl Into<String>) -> HttpRequestBuilder {
        HttpRequestBuilder::new(method, path)
    }

    /// Checks that the body matches the method.
    ///
    /// # Errors
    ///
    /// [`InvalidHttpRequestError::MissingBody`] for POST/PUT without a body,
    /// [`InvalidHttpRequestError::UnexpectedBody`] for GET/DELETE with one.
    pub fn verify(&self) -> Result<(), InvalidHttpRequestError> {
        match (self.http_method.carries_body(), self.body.is_some()) {
            (true, false) => Err(InvalidHttpRequestError::MissingBody {
                method: self.http_method.to_string(),
            }),
            (false, true) => Err(InvalidHttpRequestError::UnexpectedBody {
                method: self.http_method.to_string(),
            }),
            _ => Ok(()),
        }
    }
}

/// Builder for [`HttpRequest`].
#[derive(Debug)]
pub struct HttpRequestBuilder {
    http_method: HttpMethod,
    path: String,
    body: Option<serde_json::Value>,
    query: Query,
    tries: u32,
}

impl HttpRequestBuilder {
    fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            http_method: method,
            path: path.into(),
            body: None,
            query: Query::new(),
            tries: 1,
        }
    }

    /// Sets the JSON body.
    #[must_use]
    pub fn body(mut self, body: impl Into<serde_json::Value>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Replaces all query parameters.
    #[must_use]
    pub fn query(mut self, query: Query) -> Self {
        self.query = query;
        self
    }

    /// Adds one query parameter.
    #[must_use]
    pub fn query_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.insert(key.into(), value.into());
        self
    }

    /// Sets the number of attempts (minimum 1).
    #[must_use]
    pub fn tries(mut self, tries: u32) -> Self {
        self.tries = tries.max(1);
        self
    }

    /// Builds and validates the request.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] if the body does not match the method.
    pub fn build(self) -> Result<HttpRequest, InvalidHttpRequestError> {
        let request = HttpRequest {
            http_method: self.http_method,
            path: self.path,
            body: self.body,
            query: self.query,
            tries: self.tries,
        };
        request.verify()?;
        Ok(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_get_request_defaults() {
        let request = HttpRequest::builder(HttpMethod::Get, "products.json")
            .build()
            .unwrap();
        assert_eq!(request.http_method, HttpMethod::Get);
        assert!(request.body.is_none());
        assert!(request.query.is_empty());
        assert_eq!(request.tries, 1);
    }

    #[test]
    fn test_post_and_put_require_body() {
        for method in [HttpMethod::Post, HttpMethod::Put] {
            let result = HttpRequest::builder(method, "products.json").build();
            assert!(matches!(
                result,
                Err(InvalidHttpRequestError::MissingBody { method: m }) if m == method.to_string()
            ));
        }
    }

    #[test]
    fn test_get_and_delete_reject_body() {
        for method in [HttpMethod::Get, HttpMethod::Delete] {
            let result = HttpRequest::builder(method, "products/1.json")
                .body(json!({}))
                .build();
            assert!(matches!(
                result,
                Err(InvalidHttpRequestError::UnexpectedBody { .. })
            ));
        }
    }

    #[test]
    fn test_query_params_are_sorted() {
        let request = HttpRequest::builder(HttpMethod::Get, "products.json")
            .query_param("page_info", "abc")
            .query_param("limit", "50")
            .build()
            .unwrap();
        let keys: Vec<_> = request.query.keys().map(String::as_str).collect();
        assert_eq!(keys, ["limit", "page_info"]);
    }

    #[test]
    fn test_zero_tries_is_clamped() {
        let request = HttpRequest::builder(HttpMethod::Get, "shop.json")
            .tries(0)
            .build()
            .unwrap();
        assert_eq!(request.tries, 1);
    }
}

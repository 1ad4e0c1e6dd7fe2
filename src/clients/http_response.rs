//! Response type and Shopify-specific header parsing.

use std::collections::HashMap;

/// Rate limit state from `X-Shopify-Shop-Api-Call-Limit` (`"used/bucket"`).
///
/// # Example
///
/// ```rust
/// use shopify_rest::clients::ApiCallLimit;
///
/// let limit = ApiCallLimit::parse("39/40").unwrap();
/// assert_eq!(limit.remaining(), 1);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ApiCallLimit {
    /// Requests used in the current bucket.
    pub request_count: u32,
    /// Bucket capacity.
    pub bucket_size: u32,
}

impl ApiCallLimit {
    /// Parses the header value, returning `None` if it is malformed.
    #[must_use]
    pub fn parse(header_value: &str) -> Option<Self> {
        let (used, size) = header_value.trim().split_once('/')?;
        Some(Self {
            request_count: used.parse().ok()?,
            bucket_size: size.parse().ok()?,
        })
    }

    /// Requests left before the bucket is full.
    #[must_use]
    pub const fn remaining(&self) -> u32 {
        self.bucket_size.saturating_sub(self.request_count)
    }
}

/// A response from the Admin API.
///
/// Header names are stored lowercased; a header may repeat.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// Status code.
    pub code: u16,
    /// Headers by lowercased name.
    pub headers: HashMap<String, Vec<String>>,
    /// Parsed JSON body; `{}` when the body was empty.
    pub body: serde_json::Value,
    /// Parsed `X-Shopify-Shop-Api-Call-Limit`.
    pub api_call_limit: Option<ApiCallLimit>,
    /// Parsed `Retry-After`, in seconds.
    pub retry_request_after: Option<f64>,
}

impl HttpResponse {
    /// Builds a response and parses the rate-limit headers.
    #[must_use]
    pub fn new(code: u16, headers: HashMap<String, Vec<String>>, body: serde_json::Value) -> Self {
        let api_call_limit =
            first_value(&headers, "x-shopify-shop-api-call-limit").and_then(ApiCallLimit::parse);
        let retry_request_after =
            first_value(&headers, "retry-after").and_then(|value| value.trim().parse().ok());

        Self {
            code,
            headers,
            body,
            api_call_limit,
            retry_request_after,
        }
    }

    /// `true` for 2xx.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// The first header value for `name` (case-insensitive).
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        first_value(&self.headers, &name.to_lowercase())
    }

    /// The raw `Link` header, the only pagination signal.
    #[must_use]
    pub fn link_header(&self) -> Option<&str> {
        first_value(&self.headers, "link")
    }

    /// `X-Request-Id`, worth quoting in support requests.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        first_value(&self.headers, "x-request-id")
    }

    /// `X-Shopify-API-Deprecated-Reason`, present when the endpoint is deprecated.
    #[must_use]
    pub fn deprecation_reason(&self) -> Option<&str> {
        first_value(&self.headers, "x-shopify-api-deprecated-reason")
    }
}

fn first_value<'a>(headers: &'a HashMap<String, Vec<String>>, key: &str) -> Option<&'a str> {
    headers
        .get(key)
        .and_then(|values| values.first())
        .map(String::as_str)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn headers(pairs: &[(&str, &str)]) -> HashMap<String, Vec<String>> {
        let mut map: HashMap<String, Vec<String>> = HashMap::new();
        for (key, value) in pairs {
            map.entry((*key).to_string())
                .or_default()
                .push((*value).to_string());
        }
        map
    }

    #[test]
    fn test_is_ok_only_for_2xx() {
        assert!(HttpResponse::new(200, HashMap::new(), json!({})).is_ok());
        assert!(HttpResponse::new(201, HashMap::new(), json!({})).is_ok());
        for code in [301, 400, 404, 429, 500] {
            assert!(!HttpResponse::new(code, HashMap::new(), json!({})).is_ok());
        }
    }

    #[test]
    fn test_api_call_limit_parsing() {
        let limit = ApiCallLimit::parse("40/80").unwrap();
        assert_eq!(limit.request_count, 40);
        assert_eq!(limit.bucket_size, 80);
        assert_eq!(limit.remaining(), 40);

        for bad in ["", "40", "40/", "/80", "a/b", "1/2/3"] {
            assert!(ApiCallLimit::parse(bad).is_none(), "{bad:?}");
        }
    }

    #[test]
    fn test_parses_shopify_headers() {
        let response = HttpResponse::new(
            429,
            headers(&[
                ("x-shopify-shop-api-call-limit", "40/40"),
                ("retry-after", "2.0"),
                ("x-request-id", "req-1"),
            ]),
            json!({}),
        );
        assert_eq!(response.api_call_limit.unwrap().remaining(), 0);
        assert!((response.retry_request_after.unwrap() - 2.0).abs() < f64::EPSILON);
        assert_eq!(response.request_id(), Some("req-1"));
    }

    #[test]
    fn test_link_header_uses_first_value() {
        let response = HttpResponse::new(
            200,
            headers(&[
                ("link", r#"<https://a.example/x?page_info=1>; rel="next""#),
                ("link", r#"<https://a.example/x?page_info=2>; rel="next""#),
            ]),
            json!({}),
        );
        assert_eq!(
            response.link_header(),
            Some(r#"<https://a.example/x?page_info=1>; rel="next""#)
        );
        assert_eq!(response.header("Link"), response.link_header());
    }

    #[test]
    fn test_missing_headers_are_none() {
        let response = HttpResponse::new(200, HashMap::new(), json!({}));
        assert!(response.link_header().is_none());
        assert!(response.deprecation_reason().is_none());
        assert!(response.api_call_limit.is_none());
    }
}

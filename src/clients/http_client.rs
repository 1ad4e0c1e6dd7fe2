//! Low-level HTTP client for the Admin API.
//!
//! [`HttpClient`] owns the reqwest client, the base URL and the default
//! headers, and implements the tries-based retry loop for 429 and 500
//! responses.

use std::collections::HashMap;
use std::time::Duration;

use crate::clients::errors::{HttpError, HttpResponseError, MaxHttpRetriesExceededError};
use crate::clients::http_request::{HttpMethod, HttpRequest};
use crate::clients::http_response::HttpResponse;
use crate::config::ShopifyConfig;

/// Delay between retries when the response has no usable `Retry-After`.
pub const RETRY_WAIT_TIME: u64 = 1;

/// Crate version, reported in the `User-Agent` header.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Message used when an error body carries neither `errors` nor `error`.
pub const UNKNOWN_ERROR: &str = "Unknown Error";

/// HTTP client bound to one shop and one base path.
///
/// `HttpClient` is `Send + Sync`; share it across tasks by reference.
///
/// # Example
///
/// ```rust,ignore
/// use shopify_rest::clients::{HttpClient, HttpMethod, HttpRequest};
///
/// let client = HttpClient::new("/admin/api/2025-10", &config)?;
/// let request = HttpRequest::builder(HttpMethod::Get, "shop.json").build()?;
/// let response = client.request(request).await?;
/// ```
#[derive(Debug)]
pub struct HttpClient {
    client: reqwest::Client,
    base_uri: String,
    base_path: String,
    default_headers: HashMap<String, String>,
}

const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a client for `config`'s shop, rooted at `base_path`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the TLS backend cannot be initialized.
    pub fn new(base_path: impl Into<String>, config: &ShopifyConfig) -> Result<Self, HttpError> {
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or_else(String::new, |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent = format!(
            "{user_agent_prefix}Shopify REST Client v{SDK_VERSION} | Rust {rust_version}"
        );

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());
        default_headers.insert(
            "X-Shopify-Access-Token".to_string(),
            config.access_token().as_ref().to_string(),
        );

        let mut builder = reqwest::Client::builder().use_rustls_tls();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            base_uri: config.base_uri(),
            base_path: base_path.into(),
            default_headers,
        })
    }

    /// Scheme and host, e.g. `https://fooshop.myshopify.com`.
    #[must_use]
    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    /// Path prefix, e.g. `/admin/api/2025-10`.
    #[must_use]
    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    /// Headers sent with every request.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Sends `request`, retrying 429 and 500 responses up to `request.tries` times.
    ///
    /// # Errors
    ///
    /// - [`HttpError::InvalidRequest`] if the request fails validation
    /// - [`HttpError::Network`] on connection or timeout failures
    /// - [`HttpError::Response`] on a non-2xx response
    /// - [`HttpError::MaxRetries`] when every attempt was retryable and failed
    /// - [`HttpError::InvalidBody`] when a 2xx body is not valid JSON
    pub async fn request(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        request.verify()?;

        let url = format!("{}{}/{}", self.base_uri, self.base_path, request.path);

        let mut tries: u32 = 0;
        loop {
            tries += 1;
            tracing::debug!(
                method = %request.http_method,
                url = %url,
                attempt = tries,
                "Sending request to Shopify API"
            );

            let mut req_builder = match request.http_method {
                HttpMethod::Get => self.client.get(&url),
                HttpMethod::Post => self.client.post(&url),
                HttpMethod::Put => self.client.put(&url),
                HttpMethod::Delete => self.client.delete(&url),
            };
            for (key, value) in &self.default_headers {
                req_builder = req_builder.header(key, value);
            }
            if !request.query.is_empty() {
                req_builder = req_builder.query(&request.query);
            }
            if let Some(body) = &request.body {
                req_builder = req_builder
                    .header("Content-Type", "application/json")
                    .body(body.to_string());
            }

            let res = req_builder.send().await?;

            let code = res.status().as_u16();
            let res_headers = Self::parse_response_headers(res.headers());
            let body_text = res.text().await?;
            let body = Self::parse_body(code, &body_text)
                .map_err(|source| HttpError::InvalidBody { code, source })?;

            let response = HttpResponse::new(code, res_headers, body);

            if let Some(reason) = response.deprecation_reason() {
                tracing::warn!(
                    "Deprecated request to Shopify API at {}, received reason: {}",
                    request.path,
                    reason
                );
            }

            if response.is_ok() {
                return Ok(response);
            }

            let message = Self::serialize_error(&response);
            let error_reference = response.request_id().map(String::from);

            let retryable = code == 429 || code == 500;
            if !retryable || request.tries == 1 {
                return Err(HttpError::Response(HttpResponseError {
                    code,
                    message,
                    error_reference,
                }));
            }
            if tries >= request.tries {
                return Err(HttpError::MaxRetries(MaxHttpRetriesExceededError {
                    code,
                    tries: request.tries,
                    message,
                    error_reference,
                }));
            }

            let delay = Self::calculate_retry_delay(&response, code);
            tracing::debug!(
                status = code,
                delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX),
                "Retrying request to Shopify API"
            );
            tokio::time::sleep(delay).await;
        }
    }

    fn parse_response_headers(headers: &reqwest::header::HeaderMap) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }

    /// Empty bodies become `{}`. A non-JSON 2xx body is an error; on error
    /// statuses it becomes `{}`, or `raw_body` for 5xx.
    fn parse_body(code: u16, body_text: &str) -> Result<serde_json::Value, serde_json::Error> {
        if body_text.trim().is_empty() {
            return Ok(serde_json::json!({}));
        }
        match serde_json::from_str(body_text) {
            Ok(body) => Ok(body),
            Err(e) if (200..=299).contains(&code) => Err(e),
            Err(_) if code >= 500 => Ok(serde_json::json!({ "raw_body": body_text })),
            Err(_) => Ok(serde_json::json!({})),
        }
    }

    /// 429 honors `Retry-After`; everything else waits the fixed delay.
    fn calculate_retry_delay(response: &HttpResponse, status: u16) -> Duration {
        if status == 429 {
            if let Some(retry_after) = response.retry_request_after {
                if retry_after.is_finite() && retry_after >= 0.0 {
                    return Duration::from_secs_f64(retry_after);
                }
            }
        }
        Duration::from_secs(RETRY_WAIT_TIME)
    }

    /// Turns an error body into a human-readable message.
    ///
    /// `errors` may be a string, a list, or a map of field to messages; map
    /// entries are rendered `field: message` and sorted. `error` is used
    /// with its `error_description` when present. Anything else is
    /// [`UNKNOWN_ERROR`].
    pub(crate) fn serialize_error(response: &HttpResponse) -> String {
        if let Some(errors) = response.body.get("errors") {
            let message = match errors {
                serde_json::Value::String(s) => s.clone(),
                serde_json::Value::Array(items) => items
                    .iter()
                    .map(value_to_message)
                    .collect::<Vec<_>>()
                    .join(", "),
                serde_json::Value::Object(fields) => {
                    let mut entries: Vec<String> = fields
                        .iter()
                        .flat_map(|(field, value)| match value {
                            serde_json::Value::Array(items) => items
                                .iter()
                                .map(|item| format!("{field}: {}", value_to_message(item)))
                                .collect::<Vec<_>>(),
                            other => vec![format!("{field}: {}", value_to_message(other))],
                        })
                        .collect();
                    entries.sort();
                    entries.join(", ")
                }
                serde_json::Value::Null => String::new(),
                other => other.to_string(),
            };
            if !message.is_empty() {
                return message;
            }
        }

        if let Some(error) = response.body.get("error").map(value_to_message) {
            if !error.is_empty() {
                return match response.body.get("error_description").map(value_to_message) {
                    Some(description) if !description.is_empty() => {
                        format!("{error}: {description}")
                    }
                    _ => error,
                };
            }
        }

        UNKNOWN_ERROR.to_string()
    }
}

fn value_to_message(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Null => String::new(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AccessToken, BaseUrl, ShopDomain};
    use serde_json::json;

    fn config() -> ShopifyConfig {
        ShopifyConfig::builder()
            .shop(ShopDomain::new("test-shop").unwrap())
            .access_token(AccessToken::new("test-access-token").unwrap())
            .build()
            .unwrap()
    }

    fn error_response(body: serde_json::Value) -> HttpResponse {
        HttpResponse::new(422, HashMap::new(), body)
    }

    #[test]
    fn test_client_construction() {
        let client = HttpClient::new("/admin/api/2024-10", &config()).unwrap();
        assert_eq!(client.base_uri(), "https://test-shop.myshopify.com");
        assert_eq!(client.base_path(), "/admin/api/2024-10");
    }

    #[test]
    fn test_base_url_override() {
        let config = ShopifyConfig::builder()
            .shop(ShopDomain::new("test-shop").unwrap())
            .access_token(AccessToken::new("token").unwrap())
            .base_url(BaseUrl::new("http://127.0.0.1:3000").unwrap())
            .build()
            .unwrap();
        let client = HttpClient::new("/admin/api/2024-10", &config).unwrap();
        assert_eq!(client.base_uri(), "http://127.0.0.1:3000");
    }

    #[test]
    fn test_default_headers() {
        let client = HttpClient::new("/admin/api/2024-10", &config()).unwrap();
        let headers = client.default_headers();
        assert_eq!(
            headers.get("X-Shopify-Access-Token").map(String::as_str),
            Some("test-access-token")
        );
        assert_eq!(headers.get("Accept").map(String::as_str), Some("application/json"));
        let user_agent = headers.get("User-Agent").unwrap();
        assert!(user_agent.contains("Shopify REST Client v"));
        assert!(user_agent.contains("Rust"));
    }

    #[test]
    fn test_user_agent_with_prefix() {
        let config = ShopifyConfig::builder()
            .shop(ShopDomain::new("test-shop").unwrap())
            .access_token(AccessToken::new("token").unwrap())
            .user_agent_prefix("MyApp/1.0")
            .build()
            .unwrap();
        let client = HttpClient::new("/admin/api/2024-10", &config).unwrap();
        assert!(client.default_headers()["User-Agent"].starts_with("MyApp/1.0 | "));
    }

    #[test]
    fn test_serialize_error_variants() {
        let cases = [
            (json!({"errors": "Not Found"}), "Not Found"),
            (json!({"errors": ["one", "two"]}), "one, two"),
            (
                json!({"errors": {"title": ["can't be blank"], "handle": "is taken"}}),
                "handle: is taken, title: can't be blank",
            ),
            (
                json!({"error": "invalid_request", "error_description": "bad token"}),
                "invalid_request: bad token",
            ),
            (json!({"error": "locked"}), "locked"),
            (json!({}), UNKNOWN_ERROR),
            (json!({"raw_body": "<html>"}), UNKNOWN_ERROR),
            (json!({"errors": null}), UNKNOWN_ERROR),
        ];
        for (body, expected) in cases {
            assert_eq!(
                HttpClient::serialize_error(&error_response(body.clone())),
                expected,
                "{body}"
            );
        }
    }

    #[test]
    fn test_parse_body() {
        assert_eq!(HttpClient::parse_body(200, "").unwrap(), json!({}));
        assert_eq!(
            HttpClient::parse_body(200, "{\"a\":1}").unwrap(),
            json!({"a": 1})
        );
        assert_eq!(HttpClient::parse_body(404, "nope").unwrap(), json!({}));
        assert_eq!(
            HttpClient::parse_body(502, "bad gateway").unwrap(),
            json!({"raw_body": "bad gateway"})
        );
        assert!(HttpClient::parse_body(200, "<html>oops</html>").is_err());
        assert!(HttpClient::parse_body(201, "{\"product\": ").is_err());
    }

    #[test]
    fn test_retry_delay() {
        let mut headers = HashMap::new();
        headers.insert("retry-after".to_string(), vec!["0.5".to_string()]);
        let response = HttpResponse::new(429, headers, json!({}));
        assert_eq!(
            HttpClient::calculate_retry_delay(&response, 429),
            Duration::from_millis(500)
        );
        assert_eq!(
            HttpClient::calculate_retry_delay(&response, 500),
            Duration::from_secs(RETRY_WAIT_TIME)
        );
    }
}

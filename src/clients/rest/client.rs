//! Admin REST client.

use crate::clients::rest::RestError;
use crate::clients::{HttpClient, HttpMethod, HttpRequest, HttpResponse, Query};
use crate::config::{ApiVersion, ShopifyConfig};

/// REST client for one shop and one API version.
///
/// Paths are relative to `/admin/api/{version}/`. A leading `/` and a
/// trailing `.json` are optional: `products`, `/products` and
/// `products.json` all address `/admin/api/{version}/products.json`.
///
/// `RestClient` is `Send + Sync`. Resource services borrow it, so one client
/// can serve any number of concurrent calls.
///
/// # Example
///
/// ```rust,no_run
/// use shopify_rest::{AccessToken, RestClient, ShopDomain, ShopifyConfig};
///
/// # async fn run() -> Result<(), Box<dyn std::error::Error>> {
/// let config = ShopifyConfig::builder()
///     .shop(ShopDomain::new("fooshop")?)
///     .access_token(AccessToken::new("shpat_123")?)
///     .build()?;
/// let client = RestClient::new(&config)?;
///
/// let response = client.get("shop", None).await?;
/// println!("{}", response.body["shop"]["name"]);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct RestClient {
    http_client: HttpClient,
    api_version: ApiVersion,
    tries: u32,
}

const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<RestClient>();
};

impl RestClient {
    /// Creates a client using the configuration's API version.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::Http`] if the underlying HTTP client cannot be built.
    pub fn new(config: &ShopifyConfig) -> Result<Self, RestError> {
        Self::create_client(config, config.api_version().clone())
    }

    /// Creates a client pinned to `version`, ignoring the configured one.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::Http`] if the underlying HTTP client cannot be built.
    pub fn with_version(config: &ShopifyConfig, version: ApiVersion) -> Result<Self, RestError> {
        if &version == config.api_version() {
            tracing::debug!(
                "Rest client has a redundant API version override to the default {}",
                version
            );
        } else {
            tracing::debug!(
                "Rest client overriding default API version {} with {}",
                config.api_version(),
                version
            );
        }
        Self::create_client(config, version)
    }

    fn create_client(config: &ShopifyConfig, api_version: ApiVersion) -> Result<Self, RestError> {
        let base_path = format!("/admin/api/{api_version}");
        let http_client = HttpClient::new(base_path, config)?;

        Ok(Self {
            http_client,
            api_version,
            tries: config.tries(),
        })
    }

    /// The API version in every request path.
    #[must_use]
    pub const fn api_version(&self) -> &ApiVersion {
        &self.api_version
    }

    /// The underlying transport.
    #[must_use]
    pub const fn http_client(&self) -> &HttpClient {
        &self.http_client
    }

    /// Sends a GET request.
    ///
    /// # Errors
    ///
    /// [`RestError::InvalidPath`] for an empty path, [`RestError::Http`]
    /// for transport failures and non-2xx responses.
    pub async fn get(&self, path: &str, query: Option<Query>) -> Result<HttpResponse, RestError> {
        self.make_request(HttpMethod::Get, path, None, query).await
    }

    /// Sends a POST request with a JSON body.
    ///
    /// # Errors
    ///
    /// Same as [`get`](Self::get).
    pub async fn post(
        &self,
        path: &str,
        body: serde_json::Value,
        query: Option<Query>,
    ) -> Result<HttpResponse, RestError> {
        self.make_request(HttpMethod::Post, path, Some(body), query)
            .await
    }

    /// Sends a PUT request with a JSON body.
    ///
    /// # Errors
    ///
    /// Same as [`get`](Self::get).
    pub async fn put(
        &self,
        path: &str,
        body: serde_json::Value,
        query: Option<Query>,
    ) -> Result<HttpResponse, RestError> {
        self.make_request(HttpMethod::Put, path, Some(body), query)
            .await
    }

    /// Sends a DELETE request.
    ///
    /// # Errors
    ///
    /// Same as [`get`](Self::get).
    pub async fn delete(
        &self,
        path: &str,
        query: Option<Query>,
    ) -> Result<HttpResponse, RestError> {
        self.make_request(HttpMethod::Delete, path, None, query)
            .await
    }

    async fn make_request(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<serde_json::Value>,
        query: Option<Query>,
    ) -> Result<HttpResponse, RestError> {
        let normalized_path = normalize_path(path)?;

        let mut builder = HttpRequest::builder(method, normalized_path).tries(self.tries);
        if let Some(body) = body {
            builder = builder.body(body);
        }
        if let Some(query) = query {
            builder = builder.query(query);
        }

        let request = builder.build().map_err(|e| RestError::Http(e.into()))?;
        self.http_client.request(request).await.map_err(Into::into)
    }
}

/// Strips leading slashes and a trailing `.json`, then re-adds `.json`.
fn normalize_path(path: &str) -> Result<String, RestError> {
    let trimmed = path.trim_start_matches('/');
    let trimmed = trimmed.strip_suffix(".json").unwrap_or(trimmed);

    if trimmed.is_empty() {
        return Err(RestError::InvalidPath {
            path: path.to_string(),
        });
    }

    Ok(format!("{trimmed}.json"))
}

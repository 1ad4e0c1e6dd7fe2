//! Client configuration.
//!
//! - [`ShopifyConfig`]: everything the transport needs to reach a shop
//! - [`ShopifyConfigBuilder`]: fluent builder with validation on `build()`
//! - [`ShopDomain`], [`AccessToken`], [`BaseUrl`]: validated newtypes
//! - [`ApiVersion`]: the Admin API version used in request paths
//!
//! # Example
//!
//! ```rust
//! use shopify_rest::{AccessToken, ApiVersion, ShopDomain, ShopifyConfig};
//!
//! let config = ShopifyConfig::builder()
//!     .shop(ShopDomain::new("fooshop").unwrap())
//!     .access_token(AccessToken::new("shpat_123").unwrap())
//!     .api_version(ApiVersion::V2025_07)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.base_uri(), "https://fooshop.myshopify.com");
//! ```

mod newtypes;
mod version;

use std::time::Duration;

pub use newtypes::{AccessToken, BaseUrl, ShopDomain};
pub use version::ApiVersion;

use crate::error::ConfigError;

/// Configuration for a shop-bound REST client.
///
/// `ShopifyConfig` is `Clone + Send + Sync`; one value can back any number
/// of clients.
#[derive(Clone, Debug)]
pub struct ShopifyConfig {
    shop: ShopDomain,
    access_token: AccessToken,
    api_version: ApiVersion,
    base_url: Option<BaseUrl>,
    user_agent_prefix: Option<String>,
    tries: u32,
    timeout: Option<Duration>,
}

impl ShopifyConfig {
    /// Creates a new builder.
    #[must_use]
    pub fn builder() -> ShopifyConfigBuilder {
        ShopifyConfigBuilder::new()
    }

    /// Returns the shop domain.
    #[must_use]
    pub const fn shop(&self) -> &ShopDomain {
        &self.shop
    }

    /// Returns the access token.
    #[must_use]
    pub const fn access_token(&self) -> &AccessToken {
        &self.access_token
    }

    /// Returns the API version.
    #[must_use]
    pub const fn api_version(&self) -> &ApiVersion {
        &self.api_version
    }

    /// Returns the base URL override, if configured.
    #[must_use]
    pub const fn base_url(&self) -> Option<&BaseUrl> {
        self.base_url.as_ref()
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }

    /// Returns how many times a request is attempted on 429/500 responses.
    #[must_use]
    pub const fn tries(&self) -> u32 {
        self.tries
    }

    /// Returns the per-request timeout, if configured.
    #[must_use]
    pub const fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Returns the scheme and host every request is sent to.
    ///
    /// This is the base URL override when present, otherwise
    /// `https://{shop}`.
    #[must_use]
    pub fn base_uri(&self) -> String {
        self.base_url.as_ref().map_or_else(
            || format!("https://{}", self.shop.as_ref()),
            |url| url.as_ref().to_string(),
        )
    }
}

const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ShopifyConfig>();
};

/// Builder for [`ShopifyConfig`].
///
/// `shop` and `access_token` are required.
///
/// # Defaults
///
/// - `api_version`: [`ApiVersion::latest`]
/// - `tries`: 1 (no retries)
/// - `base_url`, `user_agent_prefix`, `timeout`: unset
#[derive(Debug, Default)]
pub struct ShopifyConfigBuilder {
    shop: Option<ShopDomain>,
    access_token: Option<AccessToken>,
    api_version: Option<ApiVersion>,
    base_url: Option<BaseUrl>,
    user_agent_prefix: Option<String>,
    tries: Option<u32>,
    timeout: Option<Duration>,
}

impl ShopifyConfigBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the shop (required).
    #[must_use]
    pub fn shop(mut self, shop: ShopDomain) -> Self {
        self.shop = Some(shop);
        self
    }

    /// Sets the access token (required).
    #[must_use]
    pub fn access_token(mut self, token: AccessToken) -> Self {
        self.access_token = Some(token);
        self
    }

    /// Sets the API version.
    #[must_use]
    pub fn api_version(mut self, version: ApiVersion) -> Self {
        self.api_version = Some(version);
        self
    }

    /// Sends requests to `url` instead of `https://{shop}`.
    #[must_use]
    pub fn base_url(mut self, url: BaseUrl) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Prepends `prefix | ` to the `User-Agent` header.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Sets how many times a request is attempted on 429/500 responses.
    ///
    /// Values below 1 are treated as 1.
    #[must_use]
    pub const fn tries(mut self, tries: u32) -> Self {
        self.tries = Some(tries);
        self
    }

    /// Sets a per-request timeout.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `shop` or
    /// `access_token` is not set.
    pub fn build(self) -> Result<ShopifyConfig, ConfigError> {
        let shop = self
            .shop
            .ok_or(ConfigError::MissingRequiredField { field: "shop" })?;
        let access_token = self
            .access_token
            .ok_or(ConfigError::MissingRequiredField {
                field: "access_token",
            })?;

        Ok(ShopifyConfig {
            shop,
            access_token,
            api_version: self.api_version.unwrap_or_else(ApiVersion::latest),
            base_url: self.base_url,
            user_agent_prefix: self.user_agent_prefix,
            tries: self.tries.unwrap_or(1).max(1),
            timeout: self.timeout,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shop() -> ShopDomain {
        ShopDomain::new("fooshop").unwrap()
    }

    fn token() -> AccessToken {
        AccessToken::new("shpat_test").unwrap()
    }

    #[test]
    fn test_builder_requires_shop() {
        let result = ShopifyConfig::builder().access_token(token()).build();
        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField { field: "shop" })
        ));
    }

    #[test]
    fn test_builder_requires_access_token() {
        let result = ShopifyConfig::builder().shop(shop()).build();
        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField {
                field: "access_token"
            })
        ));
    }

    #[test]
    fn test_builder_defaults() {
        let config = ShopifyConfig::builder()
            .shop(shop())
            .access_token(token())
            .build()
            .unwrap();

        assert_eq!(config.api_version(), &ApiVersion::latest());
        assert_eq!(config.tries(), 1);
        assert!(config.timeout().is_none());
        assert!(config.base_url().is_none());
        assert!(config.user_agent_prefix().is_none());
        assert_eq!(config.base_uri(), "https://fooshop.myshopify.com");
    }

    #[test]
    fn test_builder_with_all_optional_fields() {
        let config = ShopifyConfig::builder()
            .shop(shop())
            .access_token(token())
            .api_version(ApiVersion::V2024_10)
            .base_url(BaseUrl::new("http://127.0.0.1:9000").unwrap())
            .user_agent_prefix("MyApp/1.0")
            .tries(3)
            .timeout(Duration::from_secs(5))
            .build()
            .unwrap();

        assert_eq!(config.api_version(), &ApiVersion::V2024_10);
        assert_eq!(config.base_uri(), "http://127.0.0.1:9000");
        assert_eq!(config.user_agent_prefix(), Some("MyApp/1.0"));
        assert_eq!(config.tries(), 3);
        assert_eq!(config.timeout(), Some(Duration::from_secs(5)));
    }

    #[test]
    fn test_zero_tries_is_clamped() {
        let config = ShopifyConfig::builder()
            .shop(shop())
            .access_token(token())
            .tries(0)
            .build()
            .unwrap();
        assert_eq!(config.tries(), 1);
    }

    #[test]
    fn test_debug_does_not_leak_token() {
        let config = ShopifyConfig::builder()
            .shop(shop())
            .access_token(token())
            .build()
            .unwrap();
        assert!(!format!("{config:?}").contains("shpat_test"));
    }
}

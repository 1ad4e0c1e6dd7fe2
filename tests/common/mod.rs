//! Shared helpers for integration tests.

#![allow(dead_code)]

use shopify_rest::{AccessToken, ApiVersion, BaseUrl, RestClient, ShopDomain, ShopifyConfig};
use wiremock::MockServer;

pub const API_PREFIX: &str = "/admin/api/2025-07";

/// Builds a client that sends every request to `server`.
pub fn client_for(server: &MockServer) -> RestClient {
    client_with_tries(server, 1)
}

pub fn client_with_tries(server: &MockServer, tries: u32) -> RestClient {
    let config = ShopifyConfig::builder()
        .shop(ShopDomain::new("fooshop").unwrap())
        .access_token(AccessToken::new("shpat_test_token").unwrap())
        .api_version(ApiVersion::V2025_07)
        .base_url(BaseUrl::new(server.uri()).unwrap())
        .tries(tries)
        .build()
        .unwrap();
    RestClient::new(&config).unwrap()
}

/// Full request path for a resource path such as `products`.
pub fn api_path(resource: &str) -> String {
    format!("{API_PREFIX}/{resource}.json")
}

/// A `Link` header with one relation.
pub fn link(url: &str, rel: &str) -> String {
    format!(r#"<{url}>; rel="{rel}""#)
}

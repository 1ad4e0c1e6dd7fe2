//! # Shopify REST Client
//!
//! A typed client for the Shopify Admin REST API with cursor pagination.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`ShopifyConfig`] and [`ShopifyConfigBuilder`]
//! - Validated newtypes for the shop domain, access token and base URL
//! - An async [`RestClient`] with retry handling for 429 and 500 responses
//! - Services for products, product listings, collections, Shopify Payments
//!   payouts and balance transactions, order transactions and metafields
//! - Cursor pagination driven by the `Link` response header, with strict
//!   error reporting for malformed headers
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use shopify_rest::{AccessToken, ApiVersion, RestClient, ShopDomain, ShopifyConfig};
//! use shopify_rest::rest::resources::ProductListOptions;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ShopifyConfig::builder()
//!     .shop(ShopDomain::new("fooshop")?)
//!     .access_token(AccessToken::new("shpat_123")?)
//!     .api_version(ApiVersion::latest())
//!     .tries(3)
//!     .build()?;
//! let client = RestClient::new(&config)?;
//!
//! let options = ProductListOptions {
//!     vendor: Some("Burton".to_string()),
//!     limit: Some(250),
//!     ..Default::default()
//! };
//! let products = client.products().list_all(Some(&options)).await?;
//! println!("{} products", products.len());
//! # Ok(())
//! # }
//! ```
//!
//! ## Manual Pagination
//!
//! ```rust,ignore
//! let (page, pagination) = client.payouts().list_with_pagination(None).await?;
//! if let Some(next) = pagination.next_page_options {
//!     // Only `page_info` and `limit` are set; the cursor carries the filters.
//!     let (next_page, _) = client.payouts().list_with_pagination(Some(&next)).await?;
//! }
//! ```
//!
//! ## Logging
//!
//! Requests, retries and page fetches are reported through [`tracing`] at
//! `debug` level; deprecated endpoints are reported at `warn`. Install any
//! subscriber to see them.
//!
//! ## Design Principles
//!
//! - **No global state**: configuration is passed explicitly
//! - **Fail-fast validation**: newtypes validate on construction
//! - **Thread-safe**: clients and services are `Send + Sync`
//! - **Async-first**: built on Tokio and reqwest

pub mod clients;
pub mod config;
pub mod error;
pub mod rest;

pub use config::{AccessToken, ApiVersion, BaseUrl, ShopDomain, ShopifyConfig, ShopifyConfigBuilder};
pub use error::ConfigError;

pub use clients::{
    ApiCallLimit, HttpClient, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder, HttpResponse,
    HttpResponseError, InvalidHttpRequestError, MaxHttpRetriesExceededError, RestClient,
    RestError,
};

pub use rest::{
    CountOptions, GetOptions, ListAllError, ListOptions, PageOptions, Pagination,
    PaginationError, ResourceError, ResponseDecodingError,
};

//! REST layer over [`HttpClient`](crate::clients::HttpClient).
//!
//! - [`RestClient`]: `get`, `post`, `put`, `delete` against `/admin/api/{version}`
//! - [`RestError`]: invalid paths and wrapped transport errors
//!
//! # Path Normalization
//!
//! - Leading slashes are stripped: `/products` -> `products.json`
//! - A trailing `.json` is stripped and re-added: `products.json` -> `products.json`
//! - A path that is empty after stripping is rejected with [`RestError::InvalidPath`]
//!
//! # Retry Behavior
//!
//! Requests are attempted `ShopifyConfig::tries` times (default 1) when the
//! response is 429 or 500.

mod client;
mod errors;

pub use client::RestClient;
pub use errors::RestError;

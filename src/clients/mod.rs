//! Transport layer.
//!
//! - [`HttpClient`]: async client with default headers and retry handling
//! - [`HttpRequest`]: a method, path, optional JSON body and query
//! - [`HttpResponse`]: status, lowercased headers, JSON body
//! - [`rest::RestClient`]: path-normalizing REST client used by every service
//!
//! # Retry Behavior
//!
//! - **429**: waits for `Retry-After`, or 1 second if absent
//! - **500**: waits 1 second
//! - **Other non-2xx**: fails immediately
//!
//! The default is one attempt. Raise it with `ShopifyConfigBuilder::tries`.

mod errors;
mod http_client;
mod http_request;
mod http_response;
pub mod rest;

pub use errors::{
    HttpError, HttpResponseError, InvalidHttpRequestError, MaxHttpRetriesExceededError,
};
pub use http_client::{HttpClient, SDK_VERSION, UNKNOWN_ERROR};
pub use http_request::{HttpMethod, HttpRequest, HttpRequestBuilder, Query};
pub use http_response::{ApiCallLimit, HttpResponse};

pub use rest::{RestClient, RestError};

//! Typed REST resources and the cursor pagination engine.
//!
//! - [`pagination`]: turns a `Link` header into a [`Pagination`]
//! - [`PageOptions`] and the option structs: typed query parameters
//! - [`list_with_pagination`], [`list`], [`list_all`]: the paging driver
//! - [`resources`]: one service per Admin API resource
//!
//! # Example
//!
//! ```rust,ignore
//! use shopify_rest::rest::resources::ProductListOptions;
//!
//! let options = ProductListOptions { vendor: Some("Acme".into()), limit: Some(250), ..Default::default() };
//!
//! // One page at a time
//! let (products, pagination) = client.products().list_with_pagination(Some(&options)).await?;
//! if let Some(next) = pagination.next_page_options {
//!     let (more, _) = client.products().list_with_pagination(Some(&next)).await?;
//! }
//!
//! // Everything, keeping what arrived before a failure
//! match client.products().list_all(Some(&options)).await {
//!     Ok(all) => println!("{} products", all.len()),
//!     Err(e) => println!("{} products before: {}", e.items.len(), e.source),
//! }
//! ```

mod errors;
mod options;
mod paginate;
pub mod pagination;
pub mod query;
mod resource;
pub mod resources;

pub use errors::{
    ListAllError, PaginationError, QueryDecodeError, ResourceError, ResponseDecodingError,
};
pub use options::{CountOptions, GetOptions, ListOptions, PageOptions};
pub use paginate::{list, list_all, list_with_pagination};
pub use pagination::{extract_pagination, parse_link_header, Pagination};
pub use resource::{count, create, delete, get, get_value, update, RestResource};

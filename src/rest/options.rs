//! Typed request options.
//!
//! Every list endpoint has its own options struct with an explicit field
//! set. Options are encoded with [`to_query`](super::query::to_query):
//! unset fields are left out of the URL.
//!
//! Options that drive cursor pagination implement [`PageOptions`]. A page
//! built from a `Link` header carries only `page_info` and `limit`, since
//! the cursor already encodes the caller's filters. A value that sets both
//! a cursor and filters is sent as-is.

use std::fmt::Debug;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Options that can address a page by cursor.
///
/// # Example
///
/// ```rust
/// use shopify_rest::rest::{ListOptions, PageOptions};
///
/// let next = ListOptions::from_cursor("eyJsYXN0X2lkIjo0fQ".to_string(), Some(50));
/// assert_eq!(next.page_info(), Some("eyJsYXN0X2lkIjo0fQ"));
/// assert_eq!(next.limit(), Some(50));
/// assert!(next.since_id.is_none());
/// ```
pub trait PageOptions: Serialize + Clone + Default + Debug + PartialEq + Send + Sync {
    /// Builds options for the page at `page_info`; all filters are unset.
    fn from_cursor(page_info: String, limit: Option<u32>) -> Self;

    /// The cursor, if set.
    fn page_info(&self) -> Option<&str>;

    /// The page size, if set.
    fn limit(&self) -> Option<u32>;
}

/// Implements [`PageOptions`] for structs with `page_info` and `limit` fields.
macro_rules! page_options {
    ($($options:ty),+ $(,)?) => {
        $(
            impl $crate::rest::PageOptions for $options {
                fn from_cursor(page_info: String, limit: Option<u32>) -> Self {
                    Self {
                        page_info: Some(page_info),
                        limit,
                        ..Self::default()
                    }
                }

                fn page_info(&self) -> Option<&str> {
                    self.page_info.as_deref()
                }

                fn limit(&self) -> Option<u32> {
                    self.limit
                }
            }
        )+
    };
}

pub(crate) use page_options;

/// General list options shared by several endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ListOptions {
    /// Cursor for the requested page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_info: Option<String>,

    /// Page size (default 50, max 250).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,

    /// Only results after this ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub since_id: Option<u64>,

    /// Only results with these IDs.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub ids: Vec<u64>,

    /// Created at or after.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at_min: Option<DateTime<Utc>>,

    /// Created at or before.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at_max: Option<DateTime<Utc>>,

    /// Updated at or after.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at_min: Option<DateTime<Utc>>,

    /// Updated at or before.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at_max: Option<DateTime<Utc>>,

    /// Sort order, e.g. `created_at desc`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<String>,

    /// Comma-separated fields to return.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<String>,
}

page_options!(ListOptions);

/// Filters for `count` endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct CountOptions {
    /// Created at or after.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at_min: Option<DateTime<Utc>>,

    /// Created at or before.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at_max: Option<DateTime<Utc>>,

    /// Updated at or after.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at_min: Option<DateTime<Utc>>,

    /// Updated at or before.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at_max: Option<DateTime<Utc>>,
}

/// Options for single-entity reads.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct GetOptions {
    /// Comma-separated fields to return.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<String>,
}

//! Cursor extraction from the `Link` response header.
//!
//! Shopify signals more pages with an RFC 5988 header:
//!
//! ```text
//! Link: <https://shop.myshopify.com/admin/api/2025-10/products.json?page_info=abc&limit=50>; rel="next",
//!       <https://shop.myshopify.com/admin/api/2025-10/products.json?page_info=xyz&limit=50>; rel="previous"
//! ```
//!
//! An absent or blank header means there are no further pages. Anything
//! else must parse completely: a malformed header is an error, never an
//! empty result.

use url::Url;

use crate::clients::HttpResponse;
use crate::rest::query::parse_query;
use crate::rest::{PageOptions, PaginationError, ResponseDecodingError};

/// Entry not of the form `<url>; rel="next"` or `<url>; rel="previous"`.
pub const MALFORMED_LINK_HEADER: &str = "could not extract pagination link header";
/// Link target is not a URL.
pub const INVALID_LINK_URL: &str = "pagination does not contain a valid URL";
/// Link URL lacks a non-empty `page_info`.
pub const MISSING_PAGE_INFO: &str = "page_info is missing";

const RELATIVE_BASE: &str = "http://localhost/";

/// Options for the neighbouring pages of one response.
///
/// Both fields are `None` on the last page of a single-page result.
///
/// # Example
///
/// ```rust
/// use shopify_rest::rest::{parse_link_header, ListOptions, Pagination};
///
/// let header = r#"<https://fooshop.myshopify.com/admin/api/2025-10/products.json?page_info=foo&limit=2>; rel="next""#;
/// let pagination: Pagination<ListOptions> = parse_link_header(Some(header)).unwrap();
///
/// let next = pagination.next_page_options.unwrap();
/// assert_eq!(next.page_info.as_deref(), Some("foo"));
/// assert_eq!(next.limit, Some(2));
/// assert!(pagination.previous_page_options.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pagination<O> {
    /// Options that fetch the next page.
    pub next_page_options: Option<O>,
    /// Options that fetch the previous page.
    pub previous_page_options: Option<O>,
}

impl<O> Default for Pagination<O> {
    fn default() -> Self {
        Self {
            next_page_options: None,
            previous_page_options: None,
        }
    }
}

impl<O> Pagination<O> {
    /// `true` when there is a next page.
    #[must_use]
    pub const fn has_next_page(&self) -> bool {
        self.next_page_options.is_some()
    }

    /// `true` when there is a previous page.
    #[must_use]
    pub const fn has_previous_page(&self) -> bool {
        self.previous_page_options.is_some()
    }

    /// `true` when neither neighbour exists.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        !self.has_next_page() && !self.has_previous_page()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Relation {
    Next,
    Previous,
}

/// Reads the `Link` header of `response`.
///
/// A [`ResponseDecodingError`] carries the response status.
///
/// # Errors
///
/// See [`parse_link_header`].
pub fn extract_pagination<O: PageOptions>(
    response: &HttpResponse,
) -> Result<Pagination<O>, PaginationError> {
    parse_link_header(response.link_header()).map_err(|e| match e {
        PaginationError::Decoding(decoding) => decoding.with_status(response.code).into(),
        other => other,
    })
}

/// Parses a raw `Link` header value.
///
/// # Errors
///
/// - [`PaginationError::Decoding`] with [`MALFORMED_LINK_HEADER`],
///   [`INVALID_LINK_URL`] or [`MISSING_PAGE_INFO`]
/// - [`PaginationError::Query`] for bad percent-encoding in a link URL
/// - [`PaginationError::Limit`] for a non-numeric `limit`
pub fn parse_link_header<O: PageOptions>(
    header: Option<&str>,
) -> Result<Pagination<O>, PaginationError> {
    let mut pagination = Pagination::default();

    let Some(header) = header.map(str::trim).filter(|h| !h.is_empty()) else {
        return Ok(pagination);
    };

    for entry in header.split(',') {
        let (target, relation) = parse_entry(entry)
            .ok_or_else(|| ResponseDecodingError::new(MALFORMED_LINK_HEADER))?;
        let options = page_options_from_url(target)?;
        match relation {
            Relation::Next => pagination.next_page_options = Some(options),
            Relation::Previous => pagination.previous_page_options = Some(options),
        }
    }

    Ok(pagination)
}

/// Splits ` <target>; rel="next" ` into its parts.
fn parse_entry(entry: &str) -> Option<(&str, Relation)> {
    let entry = entry.trim_matches(' ');
    let rest = entry.strip_prefix('<')?;
    let (target, params) = rest.split_once('>')?;
    if target.is_empty() {
        return None;
    }
    let relation = match params {
        r#"; rel="next""# => Relation::Next,
        r#"; rel="previous""# => Relation::Previous,
        _ => return None,
    };
    Some((target, relation))
}

fn page_options_from_url<O: PageOptions>(target: &str) -> Result<O, PaginationError> {
    let url = parse_url(target).ok_or_else(|| ResponseDecodingError::new(INVALID_LINK_URL))?;
    let params = parse_query(url.query().unwrap_or_default())?;

    let first = |name: &str| {
        params
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    };

    let page_info = first("page_info")
        .filter(|value| !value.is_empty())
        .ok_or_else(|| ResponseDecodingError::new(MISSING_PAGE_INFO))?;

    let limit = match first("limit").filter(|value| !value.is_empty()) {
        Some(raw) => Some(raw.parse::<u32>()?),
        None => None,
    };

    Ok(O::from_cursor(page_info.to_string(), limit))
}

/// Accepts absolute URLs and relative references.
///
/// A relative reference whose first segment contains `:` is rejected, as it
/// reads as a URL with an empty scheme.
fn parse_url(target: &str) -> Option<Url> {
    match Url::parse(target) {
        Ok(url) => Some(url),
        Err(url::ParseError::RelativeUrlWithoutBase) => {
            let first_segment = target.split(['/', '?', '#']).next().unwrap_or_default();
            if first_segment.contains(':') {
                return None;
            }
            Url::parse(RELATIVE_BASE).ok()?.join(target).ok()
        }
        Err(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rest::{ListOptions, QueryDecodeError};
    use serde_json::json;
    use std::collections::HashMap;

    fn parse(header: &str) -> Result<Pagination<ListOptions>, PaginationError> {
        parse_link_header(Some(header))
    }

    fn cursor(page_info: &str, limit: Option<u32>) -> ListOptions {
        ListOptions::from_cursor(page_info.to_string(), limit)
    }

    fn decoding(message: &str) -> PaginationError {
        ResponseDecodingError::new(message).into()
    }

    #[test]
    fn test_absent_or_blank_header_is_last_page() {
        assert!(parse_link_header::<ListOptions>(None).unwrap().is_empty());
        assert!(parse("").unwrap().is_empty());
        assert!(parse("   ").unwrap().is_empty());
    }

    #[test]
    fn test_next_with_limit() {
        let pagination = parse(r#"<http://valid.url?page_info=foo&limit=2>; rel="next""#).unwrap();
        assert_eq!(pagination.next_page_options, Some(cursor("foo", Some(2))));
        assert!(pagination.previous_page_options.is_none());
        assert!(pagination.has_next_page());
    }

    #[test]
    fn test_next_and_previous() {
        let pagination = parse(
            r#"<http://valid.url?page_info=foo>; rel="next", <http://valid.url?page_info=bar>; rel="previous""#,
        )
        .unwrap();
        assert_eq!(pagination.next_page_options, Some(cursor("foo", None)));
        assert_eq!(pagination.previous_page_options, Some(cursor("bar", None)));
    }

    #[test]
    fn test_previous_only() {
        let pagination = parse(r#"<http://valid.url?page_info=pg1>; rel="previous""#).unwrap();
        assert!(!pagination.has_next_page());
        assert!(pagination.has_previous_page());
    }

    #[test]
    fn test_repeated_relation_keeps_last() {
        let pagination = parse(
            r#"<http://valid.url?page_info=a>; rel="next", <http://valid.url?page_info=b>; rel="next""#,
        )
        .unwrap();
        assert_eq!(pagination.next_page_options, Some(cursor("b", None)));
    }

    #[test]
    fn test_real_shopify_header() {
        let header = concat!(
            r#"<https://fooshop.myshopify.com/admin/api/2025-10/products.json?limit=50&page_info=eyJsYXN0X2lkIjo0fQ>; rel="next", "#,
            r#"<https://fooshop.myshopify.com/admin/api/2025-10/products.json?limit=50&page_info=eyJkaXJlY3Rpb24iOiJwcmV2In0>; rel="previous""#
        );
        let pagination = parse(header).unwrap();
        assert_eq!(
            pagination.next_page_options,
            Some(cursor("eyJsYXN0X2lkIjo0fQ", Some(50)))
        );
        assert_eq!(
            pagination.previous_page_options,
            Some(cursor("eyJkaXJlY3Rpb24iOiJwcmV2In0", Some(50)))
        );
    }

    #[test]
    fn test_relative_link_target() {
        let pagination =
            parse(r#"</admin/api/2025-10/products.json?page_info=rel>; rel="next""#).unwrap();
        assert_eq!(pagination.next_page_options, Some(cursor("rel", None)));
    }

    #[test]
    fn test_malformed_entries() {
        for header in [
            "invalid link",
            r#"<http://valid.url?page_info=a>; rel="last""#,
            r#"<http://valid.url?page_info=a>; rel=next"#,
            r#"<http://valid.url?page_info=a>"#,
            r#"<>; rel="next""#,
            r#"<http://valid.url?page_info=a>; rel="next","#,
        ] {
            assert_eq!(parse(header), Err(decoding(MALFORMED_LINK_HEADER)), "{header}");
        }
    }

    #[test]
    fn test_invalid_url() {
        assert_eq!(
            parse(r#"<:invalid.url>; rel="next""#),
            Err(decoding(INVALID_LINK_URL))
        );
        assert_eq!(
            parse(r#"<http://[::1>; rel="next""#),
            Err(decoding(INVALID_LINK_URL))
        );
    }

    #[test]
    fn test_bad_escape_is_not_wrapped() {
        let error = parse(r#"<http://valid.url?%invalid_query>; rel="next""#).unwrap_err();
        assert_eq!(
            error,
            PaginationError::Query(QueryDecodeError::InvalidEscape("%in".to_string()))
        );
        assert_eq!(error.to_string(), r#"invalid URL escape "%in""#);
    }

    #[test]
    fn test_missing_page_info() {
        for header in [
            r#"<http://valid.url>; rel="next""#,
            r#"<http://valid.url?paage_info=pg2>; rel="previous""#,
            r#"<http://valid.url?page_info=&limit=2>; rel="next""#,
        ] {
            assert_eq!(parse(header), Err(decoding(MISSING_PAGE_INFO)), "{header}");
        }
    }

    #[test]
    fn test_invalid_limit_propagates_parse_error() {
        let error =
            parse(r#"<http://valid.url?page_info=foo&limit=invalid>; rel="next""#).unwrap_err();
        assert!(matches!(error, PaginationError::Limit(_)));
        assert_eq!(error.to_string(), "invalid digit found in string");
    }

    #[test]
    fn test_empty_limit_is_ignored() {
        let pagination = parse(r#"<http://valid.url?page_info=foo&limit=>; rel="next""#).unwrap();
        assert_eq!(pagination.next_page_options, Some(cursor("foo", None)));
    }

    #[test]
    fn test_extract_pagination_attaches_status() {
        let mut headers = HashMap::new();
        headers.insert(
            "link".to_string(),
            vec![r#"<http://valid.url>; rel="next""#.to_string()],
        );
        let response = HttpResponse::new(200, headers, json!({}));

        let error = extract_pagination::<ListOptions>(&response).unwrap_err();
        assert_eq!(
            error,
            PaginationError::Decoding(ResponseDecodingError {
                message: MISSING_PAGE_INFO.to_string(),
                status: Some(200),
            })
        );
    }
}

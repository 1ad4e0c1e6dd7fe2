//! Paginating request driver.
//!
//! Pages are fetched strictly in sequence: the cursor for page N+1 is only
//! known once page N has been decoded. After the first request, options are
//! replaced wholesale by the `next_page_options` of the previous page.

use crate::clients::RestClient;
use crate::rest::resource::{decode_collection, encode_options};
use crate::rest::{extract_pagination, ListAllError, Pagination, ResourceError, RestResource};

/// Fetches one page of `T` and its pagination handle.
///
/// The body is decoded before the `Link` header is read, so a body error
/// wins over a pagination error.
///
/// # Errors
///
/// Transport errors (no partial results), [`ResourceError::Decode`] for a
/// malformed collection and [`ResourceError::Pagination`] for a malformed
/// `Link` header.
pub async fn list_with_pagination<T: RestResource>(
    client: &RestClient,
    path: &str,
    options: Option<&T::ListOptions>,
) -> Result<(Vec<T>, Pagination<T::ListOptions>), ResourceError> {
    let query = encode_options(options)?;
    let response = client.get(path, query).await?;
    let items = decode_collection(&response.body, T::PLURAL)?;
    let pagination = extract_pagination(&response)?;
    Ok((items, pagination))
}

/// Fetches the first page of `T`.
///
/// # Errors
///
/// Same as [`list_with_pagination`].
pub async fn list<T: RestResource>(
    client: &RestClient,
    path: &str,
    options: Option<&T::ListOptions>,
) -> Result<Vec<T>, ResourceError> {
    list_with_pagination(client, path, options)
        .await
        .map(|(items, _)| items)
}

/// Fetches every page of `T`, following `rel="next"` until it disappears.
///
/// # Errors
///
/// A [`ListAllError`] with the items of every page fetched before the
/// failing one.
pub async fn list_all<T: RestResource>(
    client: &RestClient,
    path: &str,
    options: Option<&T::ListOptions>,
) -> Result<Vec<T>, ListAllError<T>> {
    let mut items = Vec::new();
    let mut next: Option<T::ListOptions> = None;
    let mut page: u32 = 1;

    loop {
        tracing::debug!(path, page, "Fetching page from Shopify API");

        let current = next.as_ref().or(options);
        let (mut page_items, pagination) =
            match list_with_pagination::<T>(client, path, current).await {
                Ok(result) => result,
                Err(source) => {
                    tracing::debug!(path, page, error = %source, "Stopped paging");
                    return Err(ListAllError { items, source });
                }
            };
        items.append(&mut page_items);

        match pagination.next_page_options {
            Some(options) => next = Some(options),
            None => return Ok(items),
        }
        page = page.saturating_add(1);
    }
}

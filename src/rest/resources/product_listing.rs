//! Product listings: products published to the calling sales channel app.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::clients::RestClient;
use crate::rest::resource::{decode_envelope, encode_options};
use crate::rest::{
    self, CountOptions, GetOptions, ListAllError, ListOptions, Pagination, ResourceError,
    RestResource,
};

use super::common::{Image, ProductOption, Variant};

const PRODUCT_LISTINGS_BASE_PATH: &str = "product_listings";

/// A product as published to a sales channel.
///
/// Identified by `product_id`; there is no separate listing ID.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ProductListing {
    #[serde(rename = "product_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_html: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub handle: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub available: Option<bool>,

    #[serde(skip_serializing)]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(skip_serializing)]
    pub updated_at: Option<DateTime<Utc>>,

    #[serde(skip_serializing)]
    pub published_at: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<ProductOption>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub variants: Option<Vec<Variant>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<Image>>,
}

impl RestResource for ProductListing {
    const KEY: &'static str = "product_listing";
    const PLURAL: &'static str = "product_listings";
    type ListOptions = ListOptions;
}

/// Product listing endpoints.
#[derive(Debug, Clone, Copy)]
pub struct ProductListingService<'a> {
    client: &'a RestClient,
}

impl<'a> ProductListingService<'a> {
    #[must_use]
    pub const fn new(client: &'a RestClient) -> Self {
        Self { client }
    }

    /// First page of product listings.
    ///
    /// # Errors
    ///
    /// See [`rest::list`].
    pub async fn list(
        &self,
        options: Option<&ListOptions>,
    ) -> Result<Vec<ProductListing>, ResourceError> {
        rest::list(self.client, PRODUCT_LISTINGS_BASE_PATH, options).await
    }

    /// Every product listing, following pagination.
    ///
    /// # Errors
    ///
    /// See [`rest::list_all`].
    pub async fn list_all(
        &self,
        options: Option<&ListOptions>,
    ) -> Result<Vec<ProductListing>, ListAllError<ProductListing>> {
        rest::list_all(self.client, PRODUCT_LISTINGS_BASE_PATH, options).await
    }

    /// One page of product listings with its pagination handle.
    ///
    /// # Errors
    ///
    /// See [`rest::list_with_pagination`].
    pub async fn list_with_pagination(
        &self,
        options: Option<&ListOptions>,
    ) -> Result<(Vec<ProductListing>, Pagination<ListOptions>), ResourceError> {
        rest::list_with_pagination(self.client, PRODUCT_LISTINGS_BASE_PATH, options).await
    }

    /// Number of products published to the app.
    ///
    /// # Errors
    ///
    /// See [`rest::count`].
    pub async fn count(&self, options: Option<&CountOptions>) -> Result<u64, ResourceError> {
        rest::count(
            self.client,
            &format!("{PRODUCT_LISTINGS_BASE_PATH}/count"),
            options,
        )
        .await
    }

    /// The listing of one product.
    ///
    /// # Errors
    ///
    /// See [`rest::get`].
    pub async fn get(
        &self,
        product_id: u64,
        options: Option<&GetOptions>,
    ) -> Result<ProductListing, ResourceError> {
        rest::get(
            self.client,
            &format!("{PRODUCT_LISTINGS_BASE_PATH}/{product_id}"),
            options,
        )
        .await
    }

    /// IDs of the products published to the app.
    ///
    /// # Errors
    ///
    /// See [`rest::get_value`].
    pub async fn product_ids(&self, options: Option<&ListOptions>) -> Result<Vec<u64>, ResourceError> {
        let query = encode_options(options)?;
        rest::get_value(
            self.client,
            &format!("{PRODUCT_LISTINGS_BASE_PATH}/product_ids"),
            "product_ids",
            query,
        )
        .await
    }

    /// Publishes a product to the app.
    ///
    /// # Errors
    ///
    /// Transport errors, or a body without `product_listing`.
    pub async fn publish(&self, product_id: u64) -> Result<ProductListing, ResourceError> {
        let body = json!({ "product_listing": { "product_id": product_id } });
        let response = self
            .client
            .put(
                &format!("{PRODUCT_LISTINGS_BASE_PATH}/{product_id}"),
                body,
                None,
            )
            .await?;
        decode_envelope(response.body, ProductListing::KEY)
    }

    /// Unpublishes a product from the app.
    ///
    /// # Errors
    ///
    /// See [`rest::delete`].
    pub async fn delete(&self, product_id: u64) -> Result<(), ResourceError> {
        rest::delete(
            self.client,
            &format!("{PRODUCT_LISTINGS_BASE_PATH}/{product_id}"),
        )
        .await
    }
}

impl RestClient {
    /// Product listing endpoints.
    #[must_use]
    pub const fn product_listings(&self) -> ProductListingService<'_> {
        ProductListingService::new(self)
    }
}

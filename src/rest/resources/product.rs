//! Products.
//!
//! # Example
//!
//! ```rust,ignore
//! use shopify_rest::rest::resources::{Product, ProductListOptions, ProductStatus};
//!
//! let options = ProductListOptions {
//!     status: Some(ProductStatus::Active),
//!     limit: Some(250),
//!     ..Default::default()
//! };
//! let products = client.products().list_all(Some(&options)).await?;
//!
//! let created = client
//!     .products()
//!     .create(&Product {
//!         title: Some("Burton Custom Freestyle 151".into()),
//!         vendor: Some("Burton".into()),
//!         ..Default::default()
//!     })
//!     .await?;
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::RestClient;
use crate::rest::options::page_options;
use crate::rest::{
    self, CountOptions, GetOptions, ListAllError, Pagination, ResourceError, RestResource,
};

use super::common::{Image, ProductOption, Variant};
use super::metafield::MetafieldService;

const PRODUCTS_BASE_PATH: &str = "products";

/// Whether a product is visible to customers.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ProductStatus {
    #[default]
    Active,
    Archived,
    Draft,
}

/// A product.
///
/// `id`, `handle`, `created_at`, `updated_at` and `admin_graphql_api_id` are
/// read-only and never sent.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Product {
    #[serde(skip_serializing)]
    pub id: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Description in HTML.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_html: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_type: Option<String>,

    #[serde(skip_serializing)]
    pub handle: Option<String>,

    #[serde(skip_serializing)]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(skip_serializing)]
    pub updated_at: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_at: Option<DateTime<Utc>>,

    /// `web` or `global`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_scope: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ProductStatus>,

    /// Comma-separated tags.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_suffix: Option<String>,

    #[serde(skip_serializing)]
    pub admin_graphql_api_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub variants: Option<Vec<Variant>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<ProductOption>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<Image>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<Image>,
}

impl RestResource for Product {
    const KEY: &'static str = "product";
    const PLURAL: &'static str = "products";
    type ListOptions = ProductListOptions;
}

/// Options for listing products.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ProductListOptions {
    /// Cursor for the requested page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_info: Option<String>,

    /// Page size (default 50, max 250).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,

    /// Only products with these IDs, sent comma separated.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub ids: Vec<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub since_id: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub handle: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ProductStatus>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub collection_id: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at_min: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at_max: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at_min: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at_max: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_at_min: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_at_max: Option<DateTime<Utc>>,

    /// `published`, `unpublished` or `any`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_status: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<String>,

    /// Comma-separated currency codes for presentment prices.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub presentment_currencies: Option<String>,
}

page_options!(ProductListOptions);

/// Product endpoints.
#[derive(Debug, Clone, Copy)]
pub struct ProductService<'a> {
    client: &'a RestClient,
}

impl<'a> ProductService<'a> {
    /// Creates the service.
    #[must_use]
    pub const fn new(client: &'a RestClient) -> Self {
        Self { client }
    }

    /// First page of products.
    ///
    /// # Errors
    ///
    /// See [`rest::list`].
    pub async fn list(
        &self,
        options: Option<&ProductListOptions>,
    ) -> Result<Vec<Product>, ResourceError> {
        rest::list(self.client, PRODUCTS_BASE_PATH, options).await
    }

    /// Every product, following pagination.
    ///
    /// # Errors
    ///
    /// See [`rest::list_all`].
    pub async fn list_all(
        &self,
        options: Option<&ProductListOptions>,
    ) -> Result<Vec<Product>, ListAllError<Product>> {
        rest::list_all(self.client, PRODUCTS_BASE_PATH, options).await
    }

    /// One page of products with its pagination handle.
    ///
    /// # Errors
    ///
    /// See [`rest::list_with_pagination`].
    pub async fn list_with_pagination(
        &self,
        options: Option<&ProductListOptions>,
    ) -> Result<(Vec<Product>, Pagination<ProductListOptions>), ResourceError> {
        rest::list_with_pagination(self.client, PRODUCTS_BASE_PATH, options).await
    }

    /// Number of products.
    ///
    /// # Errors
    ///
    /// See [`rest::count`].
    pub async fn count(&self, options: Option<&CountOptions>) -> Result<u64, ResourceError> {
        rest::count(self.client, &format!("{PRODUCTS_BASE_PATH}/count"), options).await
    }

    /// A single product.
    ///
    /// # Errors
    ///
    /// See [`rest::get`].
    pub async fn get(
        &self,
        product_id: u64,
        options: Option<&GetOptions>,
    ) -> Result<Product, ResourceError> {
        rest::get(
            self.client,
            &format!("{PRODUCTS_BASE_PATH}/{product_id}"),
            options,
        )
        .await
    }

    /// Creates a product.
    ///
    /// # Errors
    ///
    /// See [`rest::create`].
    pub async fn create(&self, product: &Product) -> Result<Product, ResourceError> {
        rest::create(self.client, PRODUCTS_BASE_PATH, product).await
    }

    /// Updates the product with ID `product_id`.
    ///
    /// # Errors
    ///
    /// See [`rest::update`].
    pub async fn update(&self, product_id: u64, product: &Product) -> Result<Product, ResourceError> {
        rest::update(
            self.client,
            &format!("{PRODUCTS_BASE_PATH}/{product_id}"),
            product,
        )
        .await
    }

    /// Deletes a product.
    ///
    /// # Errors
    ///
    /// See [`rest::delete`].
    pub async fn delete(&self, product_id: u64) -> Result<(), ResourceError> {
        rest::delete(self.client, &format!("{PRODUCTS_BASE_PATH}/{product_id}")).await
    }

    /// Metafields of one product.
    #[must_use]
    pub const fn metafields(&self, product_id: u64) -> MetafieldService<'a> {
        MetafieldService::for_owner(self.client, PRODUCTS_BASE_PATH, product_id)
    }
}

impl RestClient {
    /// Product endpoints.
    #[must_use]
    pub const fn products(&self) -> ProductService<'_> {
        ProductService::new(self)
    }
}

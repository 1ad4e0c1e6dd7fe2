//! Custom collections: products grouped by hand.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::RestClient;
use crate::rest::{
    self, CountOptions, GetOptions, ListAllError, Pagination, ResourceError, RestResource,
};

use super::common::{CollectionListOptions, Image};
use super::metafield::{Metafield, MetafieldService};

const CUSTOM_COLLECTIONS_BASE_PATH: &str = "custom_collections";
pub(super) const COLLECTIONS_RESOURCE_NAME: &str = "collections";

/// A custom collection.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct CustomCollection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub handle: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing)]
    pub updated_at: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_html: Option<String>,

    /// e.g. `manual`, `best-selling`, `alpha-asc`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_suffix: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<Image>,

    /// Write-only on create; `false` creates the collection hidden.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_at: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_scope: Option<String>,

    /// Metafields to create along with the collection.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metafields: Option<Vec<Metafield>>,
}

impl RestResource for CustomCollection {
    const KEY: &'static str = "custom_collection";
    const PLURAL: &'static str = "custom_collections";
    type ListOptions = CollectionListOptions;
}

/// Custom collection endpoints.
#[derive(Debug, Clone, Copy)]
pub struct CustomCollectionService<'a> {
    client: &'a RestClient,
}

impl<'a> CustomCollectionService<'a> {
    #[must_use]
    pub const fn new(client: &'a RestClient) -> Self {
        Self { client }
    }

    /// First page of custom collections.
    ///
    /// # Errors
    ///
    /// See [`rest::list`].
    pub async fn list(
        &self,
        options: Option<&CollectionListOptions>,
    ) -> Result<Vec<CustomCollection>, ResourceError> {
        rest::list(self.client, CUSTOM_COLLECTIONS_BASE_PATH, options).await
    }

    /// Every custom collection, following pagination.
    ///
    /// # Errors
    ///
    /// See [`rest::list_all`].
    pub async fn list_all(
        &self,
        options: Option<&CollectionListOptions>,
    ) -> Result<Vec<CustomCollection>, ListAllError<CustomCollection>> {
        rest::list_all(self.client, CUSTOM_COLLECTIONS_BASE_PATH, options).await
    }

    /// One page of custom collections with its pagination handle.
    ///
    /// # Errors
    ///
    /// See [`rest::list_with_pagination`].
    pub async fn list_with_pagination(
        &self,
        options: Option<&CollectionListOptions>,
    ) -> Result<(Vec<CustomCollection>, Pagination<CollectionListOptions>), ResourceError> {
        rest::list_with_pagination(self.client, CUSTOM_COLLECTIONS_BASE_PATH, options).await
    }

    /// # Errors
    ///
    /// See [`rest::count`].
    pub async fn count(&self, options: Option<&CountOptions>) -> Result<u64, ResourceError> {
        rest::count(
            self.client,
            &format!("{CUSTOM_COLLECTIONS_BASE_PATH}/count"),
            options,
        )
        .await
    }

    /// # Errors
    ///
    /// See [`rest::get`].
    pub async fn get(
        &self,
        collection_id: u64,
        options: Option<&GetOptions>,
    ) -> Result<CustomCollection, ResourceError> {
        rest::get(
            self.client,
            &format!("{CUSTOM_COLLECTIONS_BASE_PATH}/{collection_id}"),
            options,
        )
        .await
    }

    /// # Errors
    ///
    /// See [`rest::create`].
    pub async fn create(
        &self,
        collection: &CustomCollection,
    ) -> Result<CustomCollection, ResourceError> {
        rest::create(self.client, CUSTOM_COLLECTIONS_BASE_PATH, collection).await
    }

    /// # Errors
    ///
    /// See [`rest::update`].
    pub async fn update(
        &self,
        collection_id: u64,
        collection: &CustomCollection,
    ) -> Result<CustomCollection, ResourceError> {
        rest::update(
            self.client,
            &format!("{CUSTOM_COLLECTIONS_BASE_PATH}/{collection_id}"),
            collection,
        )
        .await
    }

    /// # Errors
    ///
    /// See [`rest::delete`].
    pub async fn delete(&self, collection_id: u64) -> Result<(), ResourceError> {
        rest::delete(
            self.client,
            &format!("{CUSTOM_COLLECTIONS_BASE_PATH}/{collection_id}"),
        )
        .await
    }

    /// Metafields of one collection, under `collections/{id}/metafields`.
    #[must_use]
    pub const fn metafields(&self, collection_id: u64) -> MetafieldService<'a> {
        MetafieldService::for_owner(self.client, COLLECTIONS_RESOURCE_NAME, collection_id)
    }
}

impl RestClient {
    /// Custom collection endpoints.
    #[must_use]
    pub const fn custom_collections(&self) -> CustomCollectionService<'_> {
        CustomCollectionService::new(self)
    }
}

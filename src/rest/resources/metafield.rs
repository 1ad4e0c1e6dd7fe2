//! Metafields: custom metadata attached to shops and resources.
//!
//! The path depends on the owner:
//! - Shop: `metafields/{id}`
//! - Products: `products/{product_id}/metafields/{id}`
//! - Collections (custom and smart): `collections/{collection_id}/metafields/{id}`
//!
//! Owning services hand out a [`MetafieldService`] scoped to one owner:
//!
//! ```rust,ignore
//! use shopify_rest::rest::resources::Metafield;
//!
//! let metafields = client.products().metafields(632910392).list_all(None).await?;
//!
//! let created = client
//!     .smart_collections()
//!     .metafields(482865238)
//!     .create(&Metafield {
//!         namespace: Some("inventory".into()),
//!         key: Some("warehouse".into()),
//!         value: Some(25.into()),
//!         metafield_type: Some("number_integer".into()),
//!         ..Default::default()
//!     })
//!     .await?;
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::clients::RestClient;
use crate::rest::options::page_options;
use crate::rest::{
    self, CountOptions, GetOptions, ListAllError, Pagination, ResourceError, RestResource,
};

/// A metafield.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Metafield {
    /// The unique identifier of the metafield.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    /// Container for a group of metafields, e.g. `inventory`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,

    /// Name of the metafield within its namespace.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,

    /// The stored value; a string or a number depending on the type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,

    /// Content type, e.g. `single_line_text_field`.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub metafield_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// ID of the owning resource.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<u64>,

    /// Kind of owning resource, e.g. `product`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_resource: Option<String>,

    /// Read-only field.
    #[serde(skip_serializing)]
    pub created_at: Option<DateTime<Utc>>,

    /// Read-only field.
    #[serde(skip_serializing)]
    pub updated_at: Option<DateTime<Utc>>,

    /// Read-only field.
    #[serde(skip_serializing)]
    pub admin_graphql_api_id: Option<String>,
}

impl RestResource for Metafield {
    const KEY: &'static str = "metafield";
    const PLURAL: &'static str = "metafields";
    type ListOptions = MetafieldListOptions;
}

/// Options for listing metafields.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct MetafieldListOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_info: Option<String>,

    /// Page size (default 50, max 250).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub since_id: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at_min: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at_max: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at_min: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at_max: Option<DateTime<Utc>>,

    /// Only metafields in this namespace.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,

    /// Only metafields with this key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,

    /// Only metafields of this type.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub metafield_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<String>,
}

page_options!(MetafieldListOptions);

/// Metafield operations for one owner, or for the shop.
#[derive(Debug, Clone, Copy)]
pub struct MetafieldService<'a> {
    client: &'a RestClient,
    owner: Option<(&'static str, u64)>,
}

impl<'a> MetafieldService<'a> {
    /// Metafields of the shop itself.
    #[must_use]
    pub const fn shop(client: &'a RestClient) -> Self {
        Self {
            client,
            owner: None,
        }
    }

    /// Metafields of the resource at `{resource}/{resource_id}`.
    #[must_use]
    pub const fn for_owner(client: &'a RestClient, resource: &'static str, resource_id: u64) -> Self {
        Self {
            client,
            owner: Some((resource, resource_id)),
        }
    }

    /// Owner path segment, e.g. `products`.
    #[must_use]
    pub fn resource(&self) -> Option<&'static str> {
        self.owner.map(|(resource, _)| resource)
    }

    /// Owner ID.
    #[must_use]
    pub fn resource_id(&self) -> Option<u64> {
        self.owner.map(|(_, id)| id)
    }

    fn base_path(&self) -> String {
        match self.owner {
            Some((resource, id)) => format!("{resource}/{id}/metafields"),
            None => "metafields".to_string(),
        }
    }

    /// First page of metafields.
    ///
    /// # Errors
    ///
    /// See [`rest::list`].
    pub async fn list(
        &self,
        options: Option<&MetafieldListOptions>,
    ) -> Result<Vec<Metafield>, ResourceError> {
        rest::list(self.client, &self.base_path(), options).await
    }

    /// Every metafield, following pagination.
    ///
    /// # Errors
    ///
    /// See [`rest::list_all`].
    pub async fn list_all(
        &self,
        options: Option<&MetafieldListOptions>,
    ) -> Result<Vec<Metafield>, ListAllError<Metafield>> {
        rest::list_all(self.client, &self.base_path(), options).await
    }

    /// One page of metafields with its pagination handle.
    ///
    /// # Errors
    ///
    /// See [`rest::list_with_pagination`].
    pub async fn list_with_pagination(
        &self,
        options: Option<&MetafieldListOptions>,
    ) -> Result<(Vec<Metafield>, Pagination<MetafieldListOptions>), ResourceError> {
        rest::list_with_pagination(self.client, &self.base_path(), options).await
    }

    /// Number of metafields.
    ///
    /// # Errors
    ///
    /// See [`rest::count`].
    pub async fn count(&self, options: Option<&CountOptions>) -> Result<u64, ResourceError> {
        rest::count(self.client, &format!("{}/count", self.base_path()), options).await
    }

    /// A single metafield.
    ///
    /// # Errors
    ///
    /// See [`rest::get`].
    pub async fn get(
        &self,
        metafield_id: u64,
        options: Option<&GetOptions>,
    ) -> Result<Metafield, ResourceError> {
        rest::get(self.client, &format!("{}/{metafield_id}", self.base_path()), options).await
    }

    /// Creates a metafield.
    ///
    /// # Errors
    ///
    /// See [`rest::create`].
    pub async fn create(&self, metafield: &Metafield) -> Result<Metafield, ResourceError> {
        rest::create(self.client, &self.base_path(), metafield).await
    }

    /// Updates the metafield with ID `metafield_id`.
    ///
    /// # Errors
    ///
    /// See [`rest::update`].
    pub async fn update(
        &self,
        metafield_id: u64,
        metafield: &Metafield,
    ) -> Result<Metafield, ResourceError> {
        rest::update(
            self.client,
            &format!("{}/{metafield_id}", self.base_path()),
            metafield,
        )
        .await
    }

    /// Deletes a metafield.
    ///
    /// # Errors
    ///
    /// See [`rest::delete`].
    pub async fn delete(&self, metafield_id: u64) -> Result<(), ResourceError> {
        rest::delete(self.client, &format!("{}/{metafield_id}", self.base_path())).await
    }
}

impl RestClient {
    /// Shop-level metafields.
    #[must_use]
    pub const fn metafields(&self) -> MetafieldService<'_> {
        MetafieldService::shop(self)
    }
}

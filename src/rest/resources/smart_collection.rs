//! Smart collections: products grouped by rules.
//!
//! ```rust,ignore
//! use shopify_rest::rest::resources::{Rule, SmartCollection};
//!
//! let collection = client
//!     .smart_collections()
//!     .create(&SmartCollection {
//!         title: Some("Macbooks".into()),
//!         rules: Some(vec![Rule {
//!             column: "vendor".into(),
//!             relation: "equals".into(),
//!             condition: "Apple".into(),
//!         }]),
//!         ..Default::default()
//!     })
//!     .await?;
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::RestClient;
use crate::rest::{
    self, CountOptions, GetOptions, ListAllError, Pagination, ResourceError, RestResource,
};

use super::common::{CollectionListOptions, Image};
use super::custom_collection::COLLECTIONS_RESOURCE_NAME;
use super::metafield::{Metafield, MetafieldService};

const SMART_COLLECTIONS_BASE_PATH: &str = "smart_collections";

/// A condition a product must meet to belong to a smart collection.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Rule {
    /// Product property, e.g. `tag`, `vendor`, `variant_price`.
    pub column: String,
    /// e.g. `equals`, `greater_than`, `contains`.
    pub relation: String,
    pub condition: String,
}

/// A smart collection.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct SmartCollection {
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

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_suffix: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<Image>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub published: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_at: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_scope: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub rules: Option<Vec<Rule>>,

    /// `true` when a product needs to match any rule rather than all of them.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disjunctive: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub metafields: Option<Vec<Metafield>>,
}

impl RestResource for SmartCollection {
    const KEY: &'static str = "smart_collection";
    const PLURAL: &'static str = "smart_collections";
    type ListOptions = CollectionListOptions;
}

/// Smart collection endpoints.
#[derive(Debug, Clone, Copy)]
pub struct SmartCollectionService<'a> {
    client: &'a RestClient,
}

impl<'a> SmartCollectionService<'a> {
    #[must_use]
    pub const fn new(client: &'a RestClient) -> Self {
        Self { client }
    }

    /// # Errors
    ///
    /// See [`rest::list`].
    pub async fn list(
        &self,
        options: Option<&CollectionListOptions>,
    ) -> Result<Vec<SmartCollection>, ResourceError> {
        rest::list(self.client, SMART_COLLECTIONS_BASE_PATH, options).await
    }

    /// # Errors
    ///
    /// See [`rest::list_all`].
    pub async fn list_all(
        &self,
        options: Option<&CollectionListOptions>,
    ) -> Result<Vec<SmartCollection>, ListAllError<SmartCollection>> {
        rest::list_all(self.client, SMART_COLLECTIONS_BASE_PATH, options).await
    }

    /// # Errors
    ///
    /// See [`rest::list_with_pagination`].
    pub async fn list_with_pagination(
        &self,
        options: Option<&CollectionListOptions>,
    ) -> Result<(Vec<SmartCollection>, Pagination<CollectionListOptions>), ResourceError> {
        rest::list_with_pagination(self.client, SMART_COLLECTIONS_BASE_PATH, options).await
    }

    /// # Errors
    ///
    /// See [`rest::count`].
    pub async fn count(&self, options: Option<&CountOptions>) -> Result<u64, ResourceError> {
        rest::count(
            self.client,
            &format!("{SMART_COLLECTIONS_BASE_PATH}/count"),
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
    ) -> Result<SmartCollection, ResourceError> {
        rest::get(
            self.client,
            &format!("{SMART_COLLECTIONS_BASE_PATH}/{collection_id}"),
            options,
        )
        .await
    }

    /// # Errors
    ///
    /// See [`rest::create`].
    pub async fn create(
        &self,
        collection: &SmartCollection,
    ) -> Result<SmartCollection, ResourceError> {
        rest::create(self.client, SMART_COLLECTIONS_BASE_PATH, collection).await
    }

    /// # Errors
    ///
    /// See [`rest::update`].
    pub async fn update(
        &self,
        collection_id: u64,
        collection: &SmartCollection,
    ) -> Result<SmartCollection, ResourceError> {
        rest::update(
            self.client,
            &format!("{SMART_COLLECTIONS_BASE_PATH}/{collection_id}"),
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
            &format!("{SMART_COLLECTIONS_BASE_PATH}/{collection_id}"),
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
    /// Smart collection endpoints.
    #[must_use]
    pub const fn smart_collections(&self) -> SmartCollectionService<'_> {
        SmartCollectionService::new(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_smart_collection_rules() {
        let collection: SmartCollection = serde_json::from_value(json!({
            "id": 1063001322,
            "handle": "ipods",
            "title": "IPods",
            "sort_order": "best-selling",
            "disjunctive": false,
            "rules": [
                {"column": "title", "relation": "starts_with", "condition": "iPod"}
            ]
        }))
        .unwrap();

        let rules = collection.rules.unwrap();
        assert_eq!(rules.len(), 1);
        assert_eq!(rules[0].relation, "starts_with");
        assert_eq!(collection.disjunctive, Some(false));
    }

    #[test]
    fn test_rule_fields_are_always_sent() {
        let rule = Rule {
            column: "vendor".to_string(),
            relation: "equals".to_string(),
            condition: String::new(),
        };
        assert_eq!(
            serde_json::to_value(&rule).unwrap(),
            json!({"column": "vendor", "relation": "equals", "condition": ""})
        );
    }
}

//! Resource contract and single-entity JSON helpers.
//!
//! A type implementing [`RestResource`] names its envelope keys and its
//! page-options type. The free functions here perform one request each and
//! unwrap the envelope; services build paths and delegate to them.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::clients::{Query, RestClient};
use crate::rest::query::to_query;
use crate::rest::{GetOptions, PageOptions, ResourceError};

/// A resource exchanged with the Admin API inside a named envelope.
///
/// # Example
///
/// ```rust
/// use serde::{Deserialize, Serialize};
/// use shopify_rest::rest::{ListOptions, RestResource};
///
/// #[derive(Debug, Clone, Serialize, Deserialize)]
/// struct Redirect {
///     id: Option<u64>,
///     path: String,
///     target: String,
/// }
///
/// impl RestResource for Redirect {
///     const KEY: &'static str = "redirect";
///     const PLURAL: &'static str = "redirects";
///     type ListOptions = ListOptions;
/// }
/// ```
pub trait RestResource: Serialize + DeserializeOwned + Clone + Send + Sync + Sized {
    /// Envelope key for single-entity bodies, e.g. `product`.
    const KEY: &'static str;

    /// Envelope key for collection bodies, e.g. `products`.
    const PLURAL: &'static str;

    /// Options accepted by the collection endpoint.
    type ListOptions: PageOptions;
}

/// Encodes optional options, dropping an empty result.
pub(crate) fn encode_options<O: Serialize>(
    options: Option<&O>,
) -> Result<Option<Query>, ResourceError> {
    Ok(options
        .map(to_query)
        .transpose()?
        .filter(|query| !query.is_empty()))
}

/// Wraps `value` as `{key: value}`.
pub(crate) fn wrap<T: Serialize + ?Sized>(
    key: &'static str,
    value: &T,
) -> Result<Value, ResourceError> {
    let inner = serde_json::to_value(value).map_err(|source| ResourceError::Encode { key, source })?;
    let mut body = Map::new();
    body.insert(key.to_string(), inner);
    Ok(Value::Object(body))
}

/// Takes `key` out of a single-entity body.
///
/// A missing or `null` key is [`ResourceError::MissingEnvelope`].
pub(crate) fn decode_envelope<V: DeserializeOwned>(
    mut body: Value,
    key: &'static str,
) -> Result<V, ResourceError> {
    match body.get_mut(key).map(Value::take) {
        None | Some(Value::Null) => Err(ResourceError::MissingEnvelope { key }),
        Some(value) => {
            serde_json::from_value(value).map_err(|source| ResourceError::Decode { key, source })
        }
    }
}

/// Decodes the collection under `key`.
///
/// A missing or `null` key is an empty collection.
pub(crate) fn decode_collection<T: DeserializeOwned>(
    body: &Value,
    key: &'static str,
) -> Result<Vec<T>, ResourceError> {
    match body.get(key) {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(value) => {
            Vec::<T>::deserialize(value).map_err(|source| ResourceError::Decode { key, source })
        }
    }
}

/// GETs a single entity.
///
/// # Errors
///
/// Transport errors, [`ResourceError::MissingEnvelope`] or
/// [`ResourceError::Decode`].
pub async fn get<T: RestResource>(
    client: &RestClient,
    path: &str,
    options: Option<&GetOptions>,
) -> Result<T, ResourceError> {
    let query = encode_options(options)?;
    let response = client.get(path, query).await?;
    decode_envelope(response.body, T::KEY)
}

/// GETs `path` and decodes the value under `key`.
///
/// For endpoints whose body is not a resource envelope, such as
/// `product_listings/product_ids`.
///
/// # Errors
///
/// Same as [`get`].
pub async fn get_value<V: DeserializeOwned>(
    client: &RestClient,
    path: &str,
    key: &'static str,
    query: Option<Query>,
) -> Result<V, ResourceError> {
    let response = client.get(path, query).await?;
    decode_envelope(response.body, key)
}

/// POSTs `resource` wrapped in its singular envelope.
///
/// # Errors
///
/// Same as [`get`], plus [`ResourceError::Encode`].
pub async fn create<T: RestResource>(
    client: &RestClient,
    path: &str,
    resource: &T,
) -> Result<T, ResourceError> {
    let body = wrap(T::KEY, resource)?;
    let response = client.post(path, body, None).await?;
    decode_envelope(response.body, T::KEY)
}

/// PUTs `resource` wrapped in its singular envelope.
///
/// # Errors
///
/// Same as [`create`].
pub async fn update<T: RestResource>(
    client: &RestClient,
    path: &str,
    resource: &T,
) -> Result<T, ResourceError> {
    let body = wrap(T::KEY, resource)?;
    let response = client.put(path, body, None).await?;
    decode_envelope(response.body, T::KEY)
}

/// DELETEs `path`, ignoring the body.
///
/// # Errors
///
/// Transport errors only.
pub async fn delete(client: &RestClient, path: &str) -> Result<(), ResourceError> {
    client.delete(path, None).await?;
    Ok(())
}

/// GETs a `count` endpoint.
///
/// # Errors
///
/// Same as [`get`]; a body without `count` is
/// [`ResourceError::MissingEnvelope`].
pub async fn count<O: Serialize>(
    client: &RestClient,
    path: &str,
    options: Option<&O>,
) -> Result<u64, ResourceError> {
    let query = encode_options(options)?;
    get_value(client, path, "count", query).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rest::CountOptions;
    use serde_json::json;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Widget {
        #[serde(skip_serializing_if = "Option::is_none")]
        id: Option<u64>,
        name: String,
    }

    #[test]
    fn test_encode_options_drops_empty_query() {
        assert!(encode_options::<CountOptions>(None).unwrap().is_none());
        assert!(encode_options(Some(&CountOptions::default()))
            .unwrap()
            .is_none());
        let options = GetOptions {
            fields: Some("id,title".to_string()),
        };
        let query = encode_options(Some(&options)).unwrap().unwrap();
        assert_eq!(query.get("fields").map(String::as_str), Some("id,title"));
    }

    #[test]
    fn test_wrap_uses_key_and_skips_missing_id() {
        let body = wrap(
            "widget",
            &Widget {
                id: None,
                name: "a".to_string(),
            },
        )
        .unwrap();
        assert_eq!(body, json!({"widget": {"name": "a"}}));
    }

    #[test]
    fn test_decode_envelope() {
        let widget: Widget =
            decode_envelope(json!({"widget": {"id": 1, "name": "a"}}), "widget").unwrap();
        assert_eq!(widget.id, Some(1));

        let missing = decode_envelope::<Widget>(json!({}), "widget");
        assert!(matches!(
            missing,
            Err(ResourceError::MissingEnvelope { key: "widget" })
        ));

        let null = decode_envelope::<Widget>(json!({"widget": null}), "widget");
        assert!(matches!(null, Err(ResourceError::MissingEnvelope { .. })));

        let wrong = decode_envelope::<Widget>(json!({"widget": {"id": "x"}}), "widget");
        assert!(matches!(
            wrong,
            Err(ResourceError::Decode { key: "widget", .. })
        ));
    }

    #[test]
    fn test_decode_collection_defaults_to_empty() {
        let widgets: Vec<Widget> = decode_collection(&json!({}), "widgets").unwrap();
        assert!(widgets.is_empty());

        let widgets: Vec<Widget> = decode_collection(
            &json!({"widgets": [{"id": 1, "name": "a"}, {"id": 2, "name": "b"}]}),
            "widgets",
        )
        .unwrap();
        assert_eq!(
            widgets.iter().map(|w| w.id).collect::<Vec<_>>(),
            vec![Some(1), Some(2)]
        );

        let bad = decode_collection::<Widget>(&json!({"widgets": {}}), "widgets");
        assert!(matches!(bad, Err(ResourceError::Decode { .. })));
    }
}

//! Query-string encoding for request options and strict decoding for
//! pagination links.

use serde::Serialize;
use serde_json::Value;

use crate::clients::Query;
use crate::rest::{QueryDecodeError, ResourceError};

/// Encodes an options struct as query parameters.
///
/// `None` fields are omitted, sequences are comma-joined and scalars use
/// their JSON text. Nested objects are rejected.
///
/// # Errors
///
/// Returns [`ResourceError::EncodeOptions`] if `options` does not serialize
/// to a flat JSON object.
pub fn to_query<T: Serialize + ?Sized>(options: &T) -> Result<Query, ResourceError> {
    let value = serde_json::to_value(options).map_err(|e| ResourceError::EncodeOptions {
        message: e.to_string(),
    })?;

    let fields = match value {
        Value::Null => return Ok(Query::new()),
        Value::Object(fields) => fields,
        other => {
            return Err(ResourceError::EncodeOptions {
                message: format!("expected a struct of options, got {other}"),
            })
        }
    };

    let mut query = Query::new();
    for (key, value) in fields {
        let encoded = match value {
            Value::Null => continue,
            Value::Array(items) => {
                let parts = items
                    .iter()
                    .filter(|item| !item.is_null())
                    .map(|item| scalar(&key, item))
                    .collect::<Result<Vec<_>, _>>()?;
                if parts.is_empty() {
                    continue;
                }
                parts.join(",")
            }
            other => scalar(&key, &other)?,
        };
        query.insert(key, encoded);
    }
    Ok(query)
}

fn scalar(key: &str, value: &Value) -> Result<String, ResourceError> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        _ => Err(ResourceError::EncodeOptions {
            message: format!("'{key}' is not a scalar or a list of scalars"),
        }),
    }
}

/// Renders query parameters as `key=value&...` with percent-encoding.
#[must_use]
pub fn to_query_string(query: &Query) -> String {
    query
        .iter()
        .map(|(key, value)| {
            format!(
                "{}={}",
                urlencoding::encode(key),
                urlencoding::encode(value)
            )
        })
        .collect::<Vec<_>>()
        .join("&")
}

/// Parses a raw query string into ordered key/value pairs.
///
/// Pairs are separated by `&` only; a `;` anywhere in a segment is rejected.
/// `+` decodes to a space and every `%` must start a two-digit hex escape.
/// Empty segments are skipped; a segment without `=` has an empty value.
///
/// # Errors
///
/// Returns the first [`QueryDecodeError`] found in a key or value.
pub fn parse_query(raw: &str) -> Result<Vec<(String, String)>, QueryDecodeError> {
    raw.split('&')
        .filter(|segment| !segment.is_empty())
        .map(|segment| {
            if segment.contains(';') {
                return Err(QueryDecodeError::SemicolonSeparator);
            }
            let (key, value) = segment.split_once('=').unwrap_or((segment, ""));
            Ok((unescape(key)?, unescape(value)?))
        })
        .collect()
}

/// Decodes one query component.
///
/// # Errors
///
/// [`QueryDecodeError::InvalidEscape`] for a `%` not followed by two hex
/// digits, [`QueryDecodeError::InvalidUtf8`] if the decoded bytes are not UTF-8.
pub fn unescape(component: &str) -> Result<String, QueryDecodeError> {
    let bytes = component.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let valid = bytes.len() > i + 2
                && bytes[i + 1].is_ascii_hexdigit()
                && bytes[i + 2].is_ascii_hexdigit();
            if !valid {
                let end = (i + 3).min(bytes.len());
                let fragment = String::from_utf8_lossy(&bytes[i..end]).into_owned();
                return Err(QueryDecodeError::InvalidEscape(fragment));
            }
            i += 3;
        } else {
            i += 1;
        }
    }

    let spaced = component.replace('+', " ");
    urlencoding::decode(&spaced)
        .map(std::borrow::Cow::into_owned)
        .map_err(|e| QueryDecodeError::InvalidUtf8(e.to_string()))
}

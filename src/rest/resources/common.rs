//! Types shared by several resources.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

use crate::rest::options::page_options;

/// A calendar date on the wire as `YYYY-MM-DD`.
///
/// Parsing is strict: the year has four digits and month and day two each.
/// A full RFC 3339 timestamp is also accepted, keeping its date part, since
/// Shopify Payments reports `processed_at` both ways.
///
/// # Example
///
/// ```rust
/// use shopify_rest::rest::resources::OnlyDate;
///
/// let date: OnlyDate = "2013-11-01".parse().unwrap();
/// assert_eq!(date.to_string(), "2013-11-01");
///
/// let from_timestamp: OnlyDate = "2013-11-01T12:30:00-05:00".parse().unwrap();
/// assert_eq!(from_timestamp, date);
///
/// assert!("20-02-2".parse::<OnlyDate>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct OnlyDate(pub NaiveDate);

/// A string that is not a `YYYY-MM-DD` date.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("invalid date {value:?}, expected YYYY-MM-DD")]
pub struct InvalidDateError {
    /// The rejected input.
    pub value: String,
}

impl OnlyDate {
    /// Builds a date, returning `None` for an impossible one.
    #[must_use]
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    /// The wrapped date.
    #[must_use]
    pub const fn date(&self) -> NaiveDate {
        self.0
    }
}

impl From<NaiveDate> for OnlyDate {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl fmt::Display for OnlyDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl FromStr for OnlyDate {
    type Err = InvalidDateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || InvalidDateError {
            value: s.to_string(),
        };

        let prefix = s.get(..10).ok_or_else(invalid)?;
        let shape_ok = prefix.bytes().enumerate().all(|(i, b)| match i {
            4 | 7 => b == b'-',
            _ => b.is_ascii_digit(),
        });
        if !shape_ok {
            return Err(invalid());
        }
        let date = NaiveDate::parse_from_str(prefix, "%Y-%m-%d").map_err(|_| invalid())?;

        if s.len() == 10 {
            return Ok(Self(date));
        }
        DateTime::parse_from_rfc3339(s)
            .map(|_| Self(date))
            .map_err(|_| invalid())
    }
}

impl Serialize for OnlyDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for OnlyDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// An image attached to a collection or product listing.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Image {
    /// The unique identifier of the image.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    /// The source URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub src: Option<String>,

    /// Alternative text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,

    /// Width in pixels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<i64>,

    /// Height in pixels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<i64>,

    /// Base64 image data, for uploads.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachment: Option<String>,

    /// When the image was created.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub created_at: Option<DateTime<Utc>>,
}

/// A product option such as Size or Color.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ProductOption {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub values: Option<Vec<String>>,
}

/// A variant embedded in a product or product listing.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Variant {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Price as a decimal string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub compare_at_price: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<i64>,

    /// Read-only field.
    #[serde(skip_serializing)]
    pub inventory_quantity: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub option1: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub option2: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub option3: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_id: Option<u64>,

    #[serde(skip_serializing)]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(skip_serializing)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Options for listing custom or smart collections.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct CollectionListOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_info: Option<String>,

    /// Page size (default 50, max 250).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub ids: Vec<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub since_id: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Only collections containing this product.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub handle: Option<String>,

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
}

page_options!(CollectionListOptions);

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_only_date_parses_plain_dates() {
        let date: OnlyDate = serde_json::from_value(json!("2013-11-01")).unwrap();
        assert_eq!(date, OnlyDate::from_ymd(2013, 11, 1).unwrap());
        assert_eq!(serde_json::to_value(date).unwrap(), json!("2013-11-01"));
    }

    #[test]
    fn test_only_date_keeps_date_of_timestamp() {
        let date: OnlyDate = "2012-11-12T16:25:01-05:00".parse().unwrap();
        assert_eq!(date, OnlyDate::from_ymd(2012, 11, 12).unwrap());
    }

    #[test]
    fn test_only_date_rejects_malformed_input() {
        for bad in [
            "20-02-2",
            "2013-1-01",
            "2013/11/01",
            "2013-13-01",
            "2013-02-30",
            "2013-11-01garbage",
            "",
        ] {
            assert!(bad.parse::<OnlyDate>().is_err(), "{bad:?}");
        }

        let error = serde_json::from_value::<OnlyDate>(json!("20-02-2")).unwrap_err();
        assert!(error.to_string().contains("20-02-2"));
    }

    #[test]
    fn test_image_skips_read_only_fields() {
        let image = Image {
            src: Some("https://cdn.shopify.com/collection.jpg".to_string()),
            created_at: Some(Utc::now()),
            ..Default::default()
        };
        let value = serde_json::to_value(&image).unwrap();
        assert_eq!(value, json!({"src": "https://cdn.shopify.com/collection.jpg"}));
    }
}

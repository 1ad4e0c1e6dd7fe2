//! Admin API version selection.
//!
//! The version is part of every request path (`/admin/api/{version}/...`),
//! so it is validated once when the configuration is built.

use crate::error::ConfigError;
use std::fmt;
use std::str::FromStr;

/// Shopify Admin API version.
///
/// Shopify ships a stable version every quarter. Known releases get their own
/// variant; any other well-formed `YYYY-MM` string is kept as `Custom`.
///
/// # Example
///
/// ```rust
/// use shopify_rest::ApiVersion;
///
/// let version: ApiVersion = "2025-07".parse().unwrap();
/// assert_eq!(version, ApiVersion::V2025_07);
/// assert_eq!(version.to_string(), "2025-07");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ApiVersion {
    /// 2024-04
    V2024_04,
    /// 2024-07
    V2024_07,
    /// 2024-10
    V2024_10,
    /// 2025-01
    V2025_01,
    /// 2025-04
    V2025_04,
    /// 2025-07
    V2025_07,
    /// 2025-10
    V2025_10,
    /// The `unstable` channel.
    Unstable,
    /// A release this crate does not know about yet.
    Custom(String),
}

impl ApiVersion {
    /// Returns the newest stable version known to this crate.
    #[must_use]
    pub const fn latest() -> Self {
        Self::V2025_10
    }

    /// Returns `false` for `Unstable` and `Custom`.
    #[must_use]
    pub const fn is_stable(&self) -> bool {
        !matches!(self, Self::Unstable | Self::Custom(_))
    }

    const fn rank(&self) -> u8 {
        match self {
            Self::V2024_04 => 0,
            Self::V2024_07 => 1,
            Self::V2024_10 => 2,
            Self::V2025_01 => 3,
            Self::V2025_04 => 4,
            Self::V2025_07 => 5,
            Self::V2025_10 => 6,
            Self::Unstable => 200,
            Self::Custom(_) => 201,
        }
    }

    /// Release months are January, April, July and October.
    fn is_release_string(s: &str) -> bool {
        let Some((year, month)) = s.split_once('-') else {
            return false;
        };
        year.len() == 4
            && year.bytes().all(|b| b.is_ascii_digit())
            && matches!(month, "01" | "04" | "07" | "10")
    }
}

impl PartialOrd for ApiVersion {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ApiVersion {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        if let (Self::Custom(a), Self::Custom(b)) = (self, other) {
            return a.cmp(b);
        }
        self.rank().cmp(&other.rank())
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::V2024_04 => "2024-04",
            Self::V2024_07 => "2024-07",
            Self::V2024_10 => "2024-10",
            Self::V2025_01 => "2025-01",
            Self::V2025_04 => "2025-04",
            Self::V2025_07 => "2025-07",
            Self::V2025_10 => "2025-10",
            Self::Unstable => "unstable",
            Self::Custom(version) => version,
        })
    }
}

impl FromStr for ApiVersion {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let version = s.trim().to_lowercase();
        let known = match version.as_str() {
            "2024-04" => Self::V2024_04,
            "2024-07" => Self::V2024_07,
            "2024-10" => Self::V2024_10,
            "2025-01" => Self::V2025_01,
            "2025-04" => Self::V2025_04,
            "2025-07" => Self::V2025_07,
            "2025-10" => Self::V2025_10,
            "unstable" => Self::Unstable,
            _ if Self::is_release_string(&version) => Self::Custom(version),
            _ => return Err(ConfigError::InvalidApiVersion { version }),
        };
        Ok(known)
    }
}

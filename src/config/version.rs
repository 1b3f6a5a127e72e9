//! Squarespace Commerce API version definitions.
//!
//! This module provides the [`ApiVersion`] enum used as the versioned path
//! prefix of every request (`{base_url}/{api_version}/...`).

use crate::error::ConfigError;
use std::fmt;
use std::str::FromStr;

/// Squarespace Commerce API version.
///
/// The orders API has been published under `0.1` and `1.0`. The default is
/// `0.1`; changing the version without matching code changes may break
/// response handling. `Custom` holds any other well-formed `MAJOR.MINOR`.
///
/// # Example
///
/// ```rust
/// use squarespace_commerce::ApiVersion;
///
/// assert_eq!(ApiVersion::default(), ApiVersion::V0_1);
///
/// let version: ApiVersion = "1.0".parse().unwrap();
/// assert_eq!(version, ApiVersion::V1_0);
/// assert_eq!(version.to_string(), "1.0");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ApiVersion {
    /// API version 0.1
    #[default]
    V0_1,
    /// API version 1.0
    V1_0,
    /// Custom version string for future or unrecognized versions.
    Custom(String),
}

impl ApiVersion {
    /// Returns `true` if this is a version the client was written against.
    #[must_use]
    pub const fn is_known(&self) -> bool {
        !matches!(self, Self::Custom(_))
    }

    fn is_valid_version_format(s: &str) -> bool {
        let Some((major, minor)) = s.split_once('.') else {
            return false;
        };

        !major.is_empty()
            && !minor.is_empty()
            && major.chars().all(|c| c.is_ascii_digit())
            && minor.chars().all(|c| c.is_ascii_digit())
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let version_str = match self {
            Self::V0_1 => "0.1",
            Self::V1_0 => "1.0",
            Self::Custom(s) => s,
        };
        f.write_str(version_str)
    }
}

impl FromStr for ApiVersion {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        match s {
            "0.1" => Ok(Self::V0_1),
            "1.0" => Ok(Self::V1_0),
            _ if Self::is_valid_version_format(s) => Ok(Self::Custom(s.to_string())),
            _ => Err(ConfigError::InvalidApiVersion {
                version: s.to_string(),
            }),
        }
    }
}

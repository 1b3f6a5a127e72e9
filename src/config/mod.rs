//! Configuration types for the Squarespace Commerce client.
//!
//! This module provides the configuration used to construct a
//! [`CommerceClient`](crate::clients::CommerceClient).
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`CommerceConfig`]: The configuration struct holding all client settings
//! - [`CommerceConfigBuilder`]: A builder for constructing [`CommerceConfig`] instances
//! - [`ApiKey`]: A validated API key newtype with masked debug output
//! - [`BaseUrl`]: A validated API base URL
//! - [`ApiVersion`]: The API version used as the path prefix
//!
//! # Example
//!
//! ```rust
//! use squarespace_commerce::{ApiKey, ApiVersion, CommerceConfig};
//!
//! let config = CommerceConfig::builder()
//!     .api_key(ApiKey::new("my-api-key").unwrap())
//!     .api_version(ApiVersion::V1_0)
//!     .build()
//!     .unwrap();
//! ```

mod newtypes;
mod version;

pub use newtypes::{ApiKey, BaseUrl};
pub use version::ApiVersion;

use crate::clients::SDK_VERSION;
use crate::error::ConfigError;

/// Default tracking URL template; the tracking number is appended to it.
pub const DEFAULT_TRACKING_URL_TEMPLATE: &str =
    "https://tools.usps.com/go/TrackConfirmAction?tLabels=";

/// Default number of pages fetched by
/// [`CommerceClient::all_orders`](crate::clients::CommerceClient::all_orders).
pub const DEFAULT_MAX_PAGES: usize = 20;

/// Configuration for the Squarespace Commerce client.
///
/// # Thread Safety
///
/// `CommerceConfig` is `Clone`, `Send`, and `Sync`. The same configuration can
/// be used to build any number of independent clients.
///
/// # Example
///
/// ```rust
/// use squarespace_commerce::{ApiKey, CommerceConfig};
///
/// let config = CommerceConfig::builder()
///     .api_key(ApiKey::new("your-api-key").unwrap())
///     .max_pages(50)
///     .build()
///     .unwrap();
///
/// assert_eq!(config.max_pages(), 50);
/// assert_eq!(config.base_url().as_ref(), "https://api.squarespace.com");
/// ```
#[derive(Clone, Debug)]
pub struct CommerceConfig {
    api_key: ApiKey,
    base_url: BaseUrl,
    api_version: ApiVersion,
    tracking_url_template: String,
    user_agent: String,
    max_pages: usize,
}

impl CommerceConfig {
    /// Creates a new builder for constructing a `CommerceConfig`.
    #[must_use]
    pub fn builder() -> CommerceConfigBuilder {
        CommerceConfigBuilder::new()
    }

    /// Returns the API key.
    #[must_use]
    pub const fn api_key(&self) -> &ApiKey {
        &self.api_key
    }

    /// Returns the API base URL.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns the API version.
    #[must_use]
    pub const fn api_version(&self) -> &ApiVersion {
        &self.api_version
    }

    /// Returns the template that tracking numbers are appended to.
    #[must_use]
    pub fn tracking_url_template(&self) -> &str {
        &self.tracking_url_template
    }

    /// Returns the initial `User-Agent` header value.
    #[must_use]
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// Returns the page cap for automatic pagination.
    #[must_use]
    pub const fn max_pages(&self) -> usize {
        self.max_pages
    }
}

// Verify CommerceConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<CommerceConfig>();
};

/// Returns the library-identifying user agent.
#[must_use]
pub fn default_user_agent() -> String {
    let rust_version = env!("CARGO_PKG_RUST_VERSION");
    format!("Squarespace Commerce Rust Library v{SDK_VERSION} | Rust {rust_version}")
}

/// Builder for constructing [`CommerceConfig`] instances.
///
/// The only required field is `api_key`.
///
/// # Defaults
///
/// - `base_url`: `https://api.squarespace.com`
/// - `api_version`: `0.1`
/// - `tracking_url_template`: USPS tracking lookup
/// - `user_agent`: library name and version, optionally prefixed
/// - `max_pages`: 20
///
/// # Example
///
/// ```rust
/// use squarespace_commerce::{ApiKey, ApiVersion, BaseUrl, CommerceConfig};
///
/// let config = CommerceConfig::builder()
///     .api_key(ApiKey::new("key").unwrap())
///     .base_url(BaseUrl::new("https://api.squarespace.com").unwrap())
///     .api_version(ApiVersion::V1_0)
///     .tracking_url_template("https://www.ups.com/track?tracknum=")
///     .user_agent_prefix("MyShop/1.0")
///     .max_pages(5)
///     .build()
///     .unwrap();
///
/// assert!(config.user_agent().starts_with("MyShop/1.0 | "));
/// ```
#[derive(Debug, Default)]
pub struct CommerceConfigBuilder {
    api_key: Option<ApiKey>,
    base_url: Option<BaseUrl>,
    api_version: Option<ApiVersion>,
    tracking_url_template: Option<String>,
    user_agent: Option<String>,
    user_agent_prefix: Option<String>,
    max_pages: Option<usize>,
}

impl CommerceConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API key (required).
    #[must_use]
    pub fn api_key(mut self, key: ApiKey) -> Self {
        self.api_key = Some(key);
        self
    }

    /// Overrides the API base URL.
    #[must_use]
    pub fn base_url(mut self, url: BaseUrl) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Sets the API version.
    #[must_use]
    pub fn api_version(mut self, version: ApiVersion) -> Self {
        self.api_version = Some(version);
        self
    }

    /// Overrides the template tracking numbers are appended to.
    #[must_use]
    pub fn tracking_url_template(mut self, template: impl Into<String>) -> Self {
        self.tracking_url_template = Some(template.into());
        self
    }

    /// Replaces the `User-Agent` header value entirely.
    ///
    /// Takes precedence over [`user_agent_prefix`](Self::user_agent_prefix).
    #[must_use]
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    /// Prepends `"{prefix} | "` to the default user agent.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Sets the page cap for automatic pagination.
    #[must_use]
    pub const fn max_pages(mut self, max_pages: usize) -> Self {
        self.max_pages = Some(max_pages);
        self
    }

    /// Builds the [`CommerceConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `api_key` is not set,
    /// or [`ConfigError::InvalidMaxPages`] if `max_pages` is zero.
    pub fn build(self) -> Result<CommerceConfig, ConfigError> {
        let api_key = self
            .api_key
            .ok_or(ConfigError::MissingRequiredField { field: "api_key" })?;

        let max_pages = self.max_pages.unwrap_or(DEFAULT_MAX_PAGES);
        if max_pages == 0 {
            return Err(ConfigError::InvalidMaxPages { value: max_pages });
        }

        let user_agent = self.user_agent.unwrap_or_else(|| {
            self.user_agent_prefix.map_or_else(default_user_agent, |prefix| {
                format!("{prefix} | {}", default_user_agent())
            })
        });

        Ok(CommerceConfig {
            api_key,
            base_url: self.base_url.unwrap_or_default(),
            api_version: self.api_version.unwrap_or_default(),
            tracking_url_template: self
                .tracking_url_template
                .unwrap_or_else(|| DEFAULT_TRACKING_URL_TEMPLATE.to_string()),
            user_agent,
            max_pages,
        })
    }
}

//! HTTP client for Squarespace API communication.
//!
//! This module provides the [`HttpClient`] type, the authenticated session
//! shared by every request of one [`CommerceClient`](crate::clients::CommerceClient).

use std::collections::HashMap;

use crate::clients::errors::HttpError;
use crate::clients::http_request::{HttpMethod, HttpRequest};
use crate::clients::http_response::{classify_response, ResponseBody};
use crate::config::CommerceConfig;

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client for making requests to the Squarespace API.
///
/// The client handles:
/// - URL construction as `{base_url}/{api_version}/{path}`
/// - Default headers including `Authorization: Bearer` and `User-Agent`
/// - Response classification via [`classify_response`]
///
/// Requests are sent exactly once. There is no retry logic and no timeout
/// beyond the transport defaults.
///
/// # Example
///
/// ```rust,ignore
/// use squarespace_commerce::{ApiKey, CommerceConfig};
/// use squarespace_commerce::clients::{HttpClient, HttpMethod, HttpRequest};
///
/// let config = CommerceConfig::builder()
///     .api_key(ApiKey::new("my-api-key").unwrap())
///     .build()
///     .unwrap();
/// let client = HttpClient::new(&config)?;
///
/// let request = HttpRequest::builder(HttpMethod::Get, "commerce/orders")
///     .build()
///     .unwrap();
///
/// let body = client.request(request).await?;
/// ```
#[derive(Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Base URL including the version prefix (e.g., `https://api.squarespace.com/0.1`).
    base_path: String,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the underlying reqwest client cannot
    /// be created (e.g., TLS initialization failure).
    pub fn new(config: &CommerceConfig) -> Result<Self, HttpError> {
        let base_path = format!("{}/{}", config.base_url(), config.api_version());

        let mut default_headers = HashMap::new();
        default_headers.insert("Authorization".to_string(), config.api_key().bearer());
        default_headers.insert("User-Agent".to_string(), config.user_agent().to_string());
        default_headers.insert("Accept".to_string(), "application/json".to_string());

        let client = reqwest::Client::builder().use_rustls_tls().build()?;

        Ok(Self {
            client,
            base_path,
            default_headers,
        })
    }

    /// Returns the versioned base path for this client.
    #[must_use]
    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Returns the `User-Agent` header sent with every request.
    #[must_use]
    pub fn user_agent(&self) -> &str {
        self.default_headers
            .get("User-Agent")
            .map_or("", String::as_str)
    }

    /// Replaces the `User-Agent` header for all subsequent requests.
    pub fn set_user_agent(&mut self, agent: impl Into<String>) {
        self.default_headers
            .insert("User-Agent".to_string(), agent.into());
    }

    /// Builds the full URL for a request path.
    #[must_use]
    pub fn url_for(&self, path: &str) -> String {
        format!("{}/{}", self.base_path, path.trim_start_matches('/'))
    }

    /// Sends an HTTP request to the Squarespace API.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - Request validation fails (`InvalidRequest`)
    /// - A network error occurs (`Network`)
    /// - The classifier rejects the response (every other variant)
    pub async fn request(&self, request: HttpRequest) -> Result<ResponseBody, HttpError> {
        request.verify()?;

        let url = self.url_for(&request.path);

        let mut headers = self.default_headers.clone();
        if let Some(body_type) = &request.body_type {
            headers.insert(
                "Content-Type".to_string(),
                body_type.as_content_type().to_string(),
            );
        }

        let mut req_builder = match request.http_method {
            HttpMethod::Get => self.client.get(&url),
            HttpMethod::Post => self.client.post(&url),
        };

        for (key, value) in &headers {
            req_builder = req_builder.header(key, value);
        }

        if let Some(query) = &request.query {
            tracing::debug!(url = %url, query = ?query, "Sending {} request", request.http_method);
            req_builder = req_builder.query(query);
        } else {
            tracing::debug!(url = %url, "Sending {} request", request.http_method);
        }

        if let Some(body) = &request.body {
            tracing::debug!(body = %body, "Request body");
            req_builder = req_builder.body(body.to_string());
        }

        let res = req_builder.send().await?;

        let code = res.status().as_u16();
        let final_url = res.url().to_string();
        let body_text = res.text().await?;

        classify_response(code, &final_url, &body_text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ApiKey, ApiVersion, BaseUrl};

    fn create_test_config() -> CommerceConfig {
        CommerceConfig::builder()
            .api_key(ApiKey::new("test-api-key").unwrap())
            .build()
            .unwrap()
    }

    #[test]
    fn test_client_construction_with_defaults() {
        let client = HttpClient::new(&create_test_config()).unwrap();

        assert_eq!(client.base_path(), "https://api.squarespace.com/0.1");
    }

    #[test]
    fn test_base_path_uses_configured_url_and_version() {
        let config = CommerceConfig::builder()
            .api_key(ApiKey::new("test-api-key").unwrap())
            .base_url(BaseUrl::new("http://localhost:8080/").unwrap())
            .api_version(ApiVersion::V1_0)
            .build()
            .unwrap();
        let client = HttpClient::new(&config).unwrap();

        assert_eq!(client.base_path(), "http://localhost:8080/1.0");
        assert_eq!(
            client.url_for("/commerce/orders"),
            "http://localhost:8080/1.0/commerce/orders"
        );
    }

    #[test]
    fn test_bearer_authorization_header_injection() {
        let client = HttpClient::new(&create_test_config()).unwrap();

        assert_eq!(
            client.default_headers().get("Authorization"),
            Some(&"Bearer test-api-key".to_string())
        );
    }

    #[test]
    fn test_user_agent_header_format() {
        let client = HttpClient::new(&create_test_config()).unwrap();

        assert!(client
            .user_agent()
            .contains("Squarespace Commerce Rust Library v"));
        assert!(client.user_agent().contains("Rust"));
    }

    #[test]
    fn test_set_user_agent_replaces_header() {
        let mut client = HttpClient::new(&create_test_config()).unwrap();
        client.set_user_agent("OrderSync/3.0");

        assert_eq!(client.user_agent(), "OrderSync/3.0");
        assert_eq!(
            client.default_headers().get("User-Agent"),
            Some(&"OrderSync/3.0".to_string())
        );
    }

    #[test]
    fn test_accept_header_is_json() {
        let client = HttpClient::new(&create_test_config()).unwrap();

        assert_eq!(
            client.default_headers().get("Accept"),
            Some(&"application/json".to_string())
        );
    }

    #[test]
    fn test_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<HttpClient>();
    }
}

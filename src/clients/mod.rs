//! HTTP client types for Squarespace API communication.
//!
//! This module provides the HTTP layer for making authenticated requests to
//! the Squarespace API: request validation, response classification and the
//! session that carries the bearer token and `User-Agent`.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`HttpClient`]: The async HTTP session bound to one API key
//! - [`HttpRequest`]: A request to be sent to the API
//! - [`ResponseBody`]: The body of a successful response
//! - [`classify_response`]: Maps a status code and body to a result
//! - [`HttpMethod`]: Supported HTTP methods (GET, POST)
//! - [`DataType`]: Content types for request bodies
//! - [`commerce::CommerceClient`]: Higher-level client for the orders API
//! - [`commerce::CommerceError`]: Commerce-specific error types
//!
//! # Example
//!
//! ```rust,ignore
//! use squarespace_commerce::{ApiKey, CommerceConfig, HttpClient, HttpMethod, HttpRequest};
//!
//! let config = CommerceConfig::builder()
//!     .api_key(ApiKey::new("your-api-key").unwrap())
//!     .build()
//!     .unwrap();
//!
//! let client = HttpClient::new(&config)?;
//!
//! let request = HttpRequest::builder(HttpMethod::Get, "commerce/orders")
//!     .query_param("fulfillmentStatus", "PENDING")
//!     .build()
//!     .unwrap();
//!
//! let body = client.request(request).await?;
//! ```
//!
//! # Retry Behavior
//!
//! Requests are sent exactly once. [`HttpError::is_retryable`] tells callers
//! which failures are worth sending again.

pub mod commerce;
mod errors;
mod http_client;
mod http_request;
mod http_response;

pub use errors::{HttpError, HttpResponseError, InvalidHttpRequestError};
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_request::{DataType, HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::{classify_response, ResponseBody};

// Re-export Commerce client types at the clients module level
pub use commerce::{CommerceClient, CommerceError};

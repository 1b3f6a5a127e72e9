//! # Squarespace Commerce Rust Client
//!
//! A Rust client for the Squarespace Commerce orders API: list orders with
//! cursor pagination, look up a single order, and mark orders shipped.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`CommerceConfig`] and [`CommerceConfigBuilder`]
//! - Validated newtypes for the API key, base URL and API version
//! - An async HTTP session with bearer authentication and a configurable `User-Agent`
//! - A status-code classifier mapping every response to a body or a typed [`HttpError`]
//! - [`CommerceClient`] with order listing, lookup and fulfillment
//!
//! ## Quick Start
//!
//! ```rust
//! use squarespace_commerce::{ApiKey, ApiVersion, CommerceConfig};
//!
//! let config = CommerceConfig::builder()
//!     .api_key(ApiKey::new("your-api-key").unwrap())
//!     .api_version(ApiVersion::V1_0)
//!     .user_agent_prefix("OrderSync/2.1")
//!     .max_pages(10)
//!     .build()
//!     .unwrap();
//!
//! assert!(config.user_agent().starts_with("OrderSync/2.1 | "));
//! ```
//!
//! ## Listing Orders
//!
//! ```rust,ignore
//! use squarespace_commerce::{CommerceClient, FulfillmentStatus, OrdersQuery};
//!
//! let mut client = CommerceClient::from_api_key("your-api-key")?;
//!
//! // Stateful: the client remembers the cursor
//! let query = OrdersQuery {
//!     fulfillment_status: Some(FulfillmentStatus::Pending),
//!     ..Default::default()
//! };
//! let mut pending = client.orders(&query).await?;
//! while let Some(page) = client.next_page().await? {
//!     pending.extend(page);
//! }
//!
//! // Stateless: the cursor travels with the page
//! let mut page = client.orders_page(&OrdersQuery::default()).await?;
//! while let Some(next) = page.next_query() {
//!     page = client.orders_page(&next).await?;
//! }
//! ```
//!
//! ## Fulfilling Orders
//!
//! ```rust,ignore
//! let order = client.order(None, Some("1001")).await?.expect("order exists");
//! client
//!     .fulfill(order.id().unwrap(), "9400111899223", "USPS", "Priority Mail", None)
//!     .await?;
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: All newtypes validate on construction
//! - **Thread-safe**: All types are `Send + Sync`
//! - **Async-first**: Designed for use with Tokio async runtime
//! - **No hidden retries**: Every operation sends its requests exactly once

pub mod clients;
pub mod commerce;
pub mod config;
pub mod error;

// Re-export public types at crate root for convenience
pub use config::{ApiKey, ApiVersion, BaseUrl, CommerceConfig, CommerceConfigBuilder};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    classify_response, DataType, HttpClient, HttpError, HttpMethod, HttpRequest,
    HttpRequestBuilder, HttpResponseError, InvalidHttpRequestError, ResponseBody,
};

// Re-export Commerce types
pub use clients::{CommerceClient, CommerceError};
pub use commerce::{
    FulfillmentRequest, FulfillmentStatus, Order, OrdersPage, OrdersQuery, Pagination, Shipment,
};

//! Client for the Squarespace Commerce orders API.
//!
//! This module provides a higher-level client built on top of the
//! [`HttpClient`](crate::clients::HttpClient) with one method per order
//! operation.
//!
//! # Overview
//!
//! - [`CommerceClient`]: `get()`/`post()` plus order listing, lookup and fulfillment
//! - [`CommerceError`]: Error type for Commerce operations
//!
//! # Example
//!
//! ```rust,ignore
//! use squarespace_commerce::{CommerceClient, CommerceConfig, ApiKey};
//!
//! let config = CommerceConfig::builder()
//!     .api_key(ApiKey::new("your-api-key").unwrap())
//!     .max_pages(5)
//!     .build()
//!     .unwrap();
//!
//! let mut client = CommerceClient::new(&config)?;
//!
//! if let Some(order) = client.order(None, Some("1001")).await? {
//!     println!("Found order {:?}", order.id());
//! }
//! ```

mod client;
mod errors;

pub use client::CommerceClient;
pub use errors::CommerceError;

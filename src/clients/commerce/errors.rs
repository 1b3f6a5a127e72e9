//! Error types for Squarespace Commerce operations.
//!
//! - [`CommerceError::Config`]: the client could not be configured
//! - [`CommerceError::InvalidArgument`]: an operation was called without a required argument
//! - [`CommerceError::InvalidResponse`]: a successful response had an unusable body
//! - [`CommerceError::Serialization`]: a request body could not be encoded
//! - [`CommerceError::Http`]: wraps every [`HttpError`] from the classifier
//!
//! # Example
//!
//! ```rust,ignore
//! use squarespace_commerce::{CommerceError, HttpError};
//!
//! match client.order_by_id("585d498fdee9f31a60284a37").await {
//!     Ok(order) => println!("Order {:?}", order.order_number()),
//!     Err(CommerceError::Http(HttpError::ClientRequest(e))) if e.code == 404 => {
//!         println!("No such order");
//!     }
//!     Err(e) => println!("Failed: {e}"),
//! }
//! ```

use crate::clients::HttpError;
use crate::error::ConfigError;
use thiserror::Error;

/// Error type for Squarespace Commerce operations.
#[derive(Debug, Error)]
pub enum CommerceError {
    /// The client configuration is invalid.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A required argument is missing.
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// What was wrong with the arguments.
        message: &'static str,
    },

    /// The response was classified as a success but its body cannot be used.
    #[error("Invalid response from Squarespace: {reason}")]
    InvalidResponse {
        /// Why the body was rejected.
        reason: String,
    },

    /// A request body could not be encoded as JSON.
    #[error("Failed to serialize request body: {0}")]
    Serialization(#[from] serde_json::Error),

    /// An HTTP-level error occurred.
    #[error(transparent)]
    Http(#[from] HttpError),
}

impl CommerceError {
    /// Returns the HTTP status code, if the error came from a response.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http(e) => e.status(),
            _ => None,
        }
    }

    /// Returns `true` if the failed request may succeed when sent again later.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::Http(HttpError::Server(_)))
    }
}

// Verify CommerceError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<CommerceError>();
};

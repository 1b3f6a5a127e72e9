//! HTTP-specific error types for the Squarespace Commerce client.
//!
//! This module contains the error taxonomy produced by the response
//! classifier, plus request validation and transport failures.
//!
//! # Error Handling
//!
//! - [`HttpResponseError`]: status, URL and body of a rejected response
//! - [`InvalidHttpRequestError`]: a request that fails validation before sending
//! - [`HttpError`]: unified error type, one variant per failure class
//!
//! No request is ever retried by the client. [`HttpError::is_retryable`]
//! tells the caller whether retrying later can help.
//!
//! # Example
//!
//! ```rust,ignore
//! use squarespace_commerce::HttpError;
//!
//! match client.get("commerce/orders", None).await {
//!     Ok(body) => println!("{:?}", body),
//!     Err(HttpError::Authentication(e)) => println!("Bad API key ({})", e.code),
//!     Err(e) if e.is_retryable() => println!("Try again later: {e}"),
//!     Err(e) => println!("Request failed: {e}"),
//! }
//! ```

use thiserror::Error;

/// Context of a response the classifier rejected.
///
/// # Example
///
/// ```rust
/// use squarespace_commerce::clients::HttpResponseError;
///
/// let error = HttpResponseError {
///     code: 404,
///     url: "https://api.squarespace.com/0.1/commerce/orders/abc".to_string(),
///     body: r#"{"message":"Not found"}"#.to_string(),
/// };
///
/// assert!(error.to_string().starts_with("HTTP 404"));
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("HTTP {code} from {url}: {body}")]
pub struct HttpResponseError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// The request URL, including the query string.
    pub url: String,
    /// The raw response body.
    pub body: String,
}

/// Error returned when an HTTP request fails validation.
///
/// This error is raised before a request is sent.
///
/// # Example
///
/// ```rust
/// use squarespace_commerce::clients::InvalidHttpRequestError;
///
/// let error = InvalidHttpRequestError::MissingBody {
///     method: "post".to_string(),
/// };
///
/// assert_eq!(error.to_string(), "Cannot use post without specifying data.");
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// A request body was provided without specifying the body type.
    #[error("Cannot set a body without also setting body_type.")]
    MissingBodyType,

    /// A POST request was made without a body.
    #[error("Cannot use {method} without specifying data.")]
    MissingBody {
        /// The HTTP method that requires a body.
        method: String,
    },

    /// The request path is empty after normalization.
    #[error("Invalid request path: '{path}'")]
    InvalidPath {
        /// The path that was provided.
        path: String,
    },
}

/// Unified error type for all HTTP-related errors.
///
/// Each variant maps to one class of the response classifier.
#[derive(Debug, Error)]
pub enum HttpError {
    /// The API key was rejected (HTTP 401).
    #[error("The API key is not valid: {0}")]
    Authentication(HttpResponseError),

    /// The request was rejected by the server (HTTP 4xx other than 401).
    #[error("Request rejected by server: {0}")]
    ClientRequest(HttpResponseError),

    /// The remote service failed (HTTP 5xx).
    #[error("Remote service unavailable, retry later: {0}")]
    Server(HttpResponseError),

    /// A 2xx status the client does not know how to handle.
    #[error("Unexpected success status: {0}")]
    UnexpectedSuccess(HttpResponseError),

    /// A 200/201 response whose body is not valid JSON.
    #[error("Response body is not valid JSON ({response}): {source}")]
    InvalidJson {
        /// The response that could not be decoded.
        response: HttpResponseError,
        /// The decoding failure.
        #[source]
        source: serde_json::Error,
    },

    /// Any status outside the classified ranges.
    #[error("An unknown error occurred fetching your request: {0}")]
    UnknownResponse(HttpResponseError),

    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl HttpError {
    /// Returns the response context, if the error came from a response.
    #[must_use]
    pub const fn response(&self) -> Option<&HttpResponseError> {
        match self {
            Self::Authentication(e)
            | Self::ClientRequest(e)
            | Self::Server(e)
            | Self::UnexpectedSuccess(e)
            | Self::UnknownResponse(e)
            | Self::InvalidJson { response: e, .. } => Some(e),
            Self::InvalidRequest(_) | Self::Network(_) => None,
        }
    }

    /// Returns the HTTP status code, if the error came from a response.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        self.response().map(|e| e.code)
    }

    /// Returns `true` if the same request may succeed when sent again later.
    ///
    /// Only server-side failures qualify. Authentication failures never do.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::Server(_))
    }
}

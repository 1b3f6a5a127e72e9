//! Response classification for the Squarespace Commerce client.
//!
//! Every response passes through [`classify_response`], which turns a status
//! code and raw body into either a [`ResponseBody`] or a typed [`HttpError`].
//!
//! | Status | Result |
//! |---|---|
//! | 200, 201 | [`ResponseBody::Json`] with the parsed body |
//! | 204 | [`ResponseBody::NoContent`], the body is ignored |
//! | 401 | [`HttpError::Authentication`] |
//! | other 2xx | [`HttpError::UnexpectedSuccess`] |
//! | other 4xx | [`HttpError::ClientRequest`] |
//! | 5xx | [`HttpError::Server`] |
//! | anything else | [`HttpError::UnknownResponse`] |

use crate::clients::errors::{HttpError, HttpResponseError};

/// A successfully classified response.
///
/// # Example
///
/// ```rust
/// use squarespace_commerce::clients::ResponseBody;
/// use serde_json::json;
///
/// let body = ResponseBody::Json(json!({"id": "abc"}));
/// assert_eq!(body.json(), Some(&json!({"id": "abc"})));
///
/// assert!(ResponseBody::NoContent.as_bool());
/// assert_eq!(serde_json::Value::from(ResponseBody::NoContent), json!(true));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum ResponseBody {
    /// A 200 or 201 response and its decoded JSON body.
    Json(serde_json::Value),
    /// A 204 response. Stands for a bare `true` success marker.
    NoContent,
}

impl ResponseBody {
    /// Returns the decoded body, or `None` for [`ResponseBody::NoContent`].
    #[must_use]
    pub const fn json(&self) -> Option<&serde_json::Value> {
        match self {
            Self::Json(value) => Some(value),
            Self::NoContent => None,
        }
    }

    /// Consumes the response and returns the decoded body, if any.
    #[must_use]
    pub fn into_json(self) -> Option<serde_json::Value> {
        match self {
            Self::Json(value) => Some(value),
            Self::NoContent => None,
        }
    }

    /// Returns `true`; every classified response is a success.
    ///
    /// Exists for callers that only care whether the call went through,
    /// such as fulfillment posts answered with 204.
    #[must_use]
    #[allow(clippy::unused_self)]
    pub const fn as_bool(&self) -> bool {
        true
    }
}

impl From<ResponseBody> for serde_json::Value {
    fn from(body: ResponseBody) -> Self {
        match body {
            ResponseBody::Json(value) => value,
            ResponseBody::NoContent => Self::Bool(true),
        }
    }
}

/// Classifies a raw response.
///
/// This is a pure function of its inputs apart from logging: every failure is
/// logged with status code, request URL and body before it is returned.
///
/// # Errors
///
/// Returns the [`HttpError`] variant matching the status code, or
/// [`HttpError::InvalidJson`] if a 200/201 body cannot be decoded.
///
/// # Example
///
/// ```rust
/// use squarespace_commerce::clients::{classify_response, ResponseBody};
/// use squarespace_commerce::HttpError;
/// use serde_json::json;
///
/// let url = "https://api.squarespace.com/0.1/commerce/orders";
///
/// let body = classify_response(200, url, r#"{"result":[]}"#).unwrap();
/// assert_eq!(body, ResponseBody::Json(json!({"result": []})));
///
/// let error = classify_response(401, url, "").unwrap_err();
/// assert!(matches!(error, HttpError::Authentication(_)));
/// ```
pub fn classify_response(code: u16, url: &str, body: &str) -> Result<ResponseBody, HttpError> {
    let context = || HttpResponseError {
        code,
        url: url.to_string(),
        body: body.to_string(),
    };

    match code {
        200 | 201 => serde_json::from_str(body).map(ResponseBody::Json).map_err(|source| {
            tracing::error!(status = code, url, body, "Squarespace sent an undecodable body");
            HttpError::InvalidJson {
                response: context(),
                source,
            }
        }),
        204 => Ok(ResponseBody::NoContent),
        401 => {
            tracing::error!(status = code, url, body, "Squarespace rejected the API key");
            Err(HttpError::Authentication(context()))
        }
        202..=299 => {
            tracing::warn!(status = code, url, body, "Squarespace success response we're not prepared for");
            Err(HttpError::UnexpectedSuccess(context()))
        }
        400..=499 => {
            tracing::error!(status = code, url, body, "Squarespace error response");
            Err(HttpError::ClientRequest(context()))
        }
        500..=599 => {
            tracing::error!(status = code, url, body, "Squarespace error response");
            Err(HttpError::Server(context()))
        }
        _ => {
            tracing::error!(status = code, url, body, "Squarespace unknown response");
            Err(HttpError::UnknownResponse(context()))
        }
    }
}

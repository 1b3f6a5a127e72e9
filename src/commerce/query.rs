//! Query parameters for the order listing endpoint.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The fulfillment status filter accepted by `GET commerce/orders`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FulfillmentStatus {
    /// Orders waiting to be shipped.
    Pending,
    /// Orders that have been shipped.
    Fulfilled,
    /// Orders that were canceled.
    Canceled,
}

/// Parameters for listing orders.
///
/// All fields are optional. Unset fields will not be included in the request.
/// The API does not accept `cursor` together with the other filters; the
/// filters only apply to the first page of a listing.
///
/// # Example
///
/// ```rust
/// use squarespace_commerce::commerce::{FulfillmentStatus, OrdersQuery};
///
/// let query = OrdersQuery {
///     fulfillment_status: Some(FulfillmentStatus::Pending),
///     ..Default::default()
/// }
/// .param("customerId", "abc");
///
/// let params = query.to_query();
/// assert_eq!(params.get("fulfillmentStatus").map(String::as_str), Some("PENDING"));
/// assert_eq!(params.get("customerId").map(String::as_str), Some("abc"));
/// ```
#[derive(Debug, Clone, Serialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct OrdersQuery {
    /// Resume a listing from a cursor returned by a previous page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cursor: Option<String>,

    /// Show orders modified after this date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_after: Option<DateTime<Utc>>,

    /// Show orders modified before this date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_before: Option<DateTime<Utc>>,

    /// Filter by fulfillment status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fulfillment_status: Option<FulfillmentStatus>,

    /// Any other query parameters, passed through unchanged.
    #[serde(flatten)]
    pub extra: HashMap<String, String>,
}

impl OrdersQuery {
    /// Creates a query that resumes a listing at `cursor`.
    #[must_use]
    pub fn with_cursor(cursor: impl Into<String>) -> Self {
        Self {
            cursor: Some(cursor.into()),
            ..Self::default()
        }
    }

    /// Adds an arbitrary query parameter.
    #[must_use]
    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    /// Returns `true` if no parameter is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.to_query().is_empty()
    }

    /// Converts the parameters into a query map.
    #[must_use]
    pub fn to_query(&self) -> HashMap<String, String> {
        let mut query = HashMap::new();

        // Fields are strings, timestamps and unit enums only; this never errs.
        if let Ok(Value::Object(map)) = serde_json::to_value(self) {
            for (key, val) in map {
                match val {
                    Value::Null => {}
                    Value::String(s) => {
                        query.insert(key, s);
                    }
                    other => {
                        query.insert(key, other.to_string());
                    }
                }
            }
        }

        query
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_default_query_is_empty() {
        assert!(OrdersQuery::default().is_empty());
        assert!(OrdersQuery::default().to_query().is_empty());
    }

    #[test]
    fn test_with_cursor_sets_only_cursor() {
        let query = OrdersQuery::with_cursor("eyJwYWdlIjoyfQ");
        let params = query.to_query();

        assert_eq!(params.len(), 1);
        assert_eq!(params.get("cursor"), Some(&"eyJwYWdlIjoyfQ".to_string()));
    }

    #[test]
    fn test_modification_dates_serialize_as_iso_8601() {
        let query = OrdersQuery {
            modified_after: Some(Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap()),
            modified_before: Some(Utc.with_ymd_and_hms(2024, 3, 31, 23, 59, 59).unwrap()),
            ..Default::default()
        };
        let params = query.to_query();

        assert_eq!(
            params.get("modifiedAfter"),
            Some(&"2024-03-01T00:00:00Z".to_string())
        );
        assert_eq!(
            params.get("modifiedBefore"),
            Some(&"2024-03-31T23:59:59Z".to_string())
        );
    }

    #[test]
    fn test_fulfillment_status_serializes_upper_case() {
        let query = OrdersQuery {
            fulfillment_status: Some(FulfillmentStatus::Canceled),
            ..Default::default()
        };
        assert_eq!(
            query.to_query().get("fulfillmentStatus"),
            Some(&"CANCELED".to_string())
        );
    }

    #[test]
    fn test_extra_params_are_passed_through() {
        let query = OrdersQuery::default().param("customerId", "c-42");
        assert!(!query.is_empty());
        assert_eq!(query.to_query().get("customerId"), Some(&"c-42".to_string()));
    }
}

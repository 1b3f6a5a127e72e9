//! The order resource.
//!
//! Orders are passed through as opaque JSON objects. The client only reads
//! `id` and `orderNumber`; every other field is left to the caller.

use std::ops::Deref;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single order as returned by the API.
///
/// Dereferences to the underlying JSON object.
///
/// # Example
///
/// ```rust
/// use squarespace_commerce::commerce::Order;
/// use serde_json::json;
///
/// let order = Order::from_value(json!({
///     "id": "585d498fdee9f31a60284a37",
///     "orderNumber": "1001",
///     "customerEmail": "jane@example.com"
/// }))
/// .unwrap();
///
/// assert_eq!(order.id(), Some("585d498fdee9f31a60284a37"));
/// assert!(order.has_order_number("1001"));
/// assert_eq!(order["customerEmail"], "jane@example.com");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Order(Map<String, Value>);

impl Order {
    /// Wraps a JSON object.
    #[must_use]
    pub const fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// Wraps a JSON value, returning `None` unless it is an object.
    #[must_use]
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(fields) => Some(Self(fields)),
            _ => None,
        }
    }

    /// Returns the order ID.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.0.get("id").and_then(Value::as_str)
    }

    /// Returns the raw `orderNumber` field.
    #[must_use]
    pub fn order_number(&self) -> Option<&Value> {
        self.0.get("orderNumber")
    }

    /// Returns `true` if `orderNumber` equals `number`.
    ///
    /// Numeric order numbers compare by their decimal rendering.
    #[must_use]
    pub fn has_order_number(&self, number: &str) -> bool {
        match self.order_number() {
            Some(Value::String(s)) => s == number,
            Some(Value::Number(n)) => n.to_string() == number,
            _ => false,
        }
    }

    /// Consumes the order and returns the underlying JSON object.
    #[must_use]
    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }
}

impl Deref for Order {
    type Target = Map<String, Value>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Order> for Value {
    fn from(order: Order) -> Self {
        Self::Object(order.0)
    }
}

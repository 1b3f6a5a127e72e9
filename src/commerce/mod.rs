//! Domain types of the Squarespace Commerce orders API.
//!
//! - [`Order`]: an order, kept as an opaque JSON object
//! - [`OrdersQuery`]: query parameters for order listings
//! - [`OrdersPage`] and [`Pagination`]: one page of an order listing
//! - [`FulfillmentRequest`] and [`Shipment`]: the body that marks an order shipped
//!
//! These types carry no I/O. Requests are made by
//! [`CommerceClient`](crate::clients::CommerceClient).

mod fulfillment;
mod order;
mod query;
mod response;

pub use fulfillment::{
    format_ship_date, tracking_url, FulfillmentRequest, Shipment, SHIP_DATE_FORMAT,
};
pub use order::Order;
pub use query::{FulfillmentStatus, OrdersQuery};
pub use response::{OrdersPage, Pagination};

//! Fulfillment requests.
//!
//! Marking an order shipped posts a [`FulfillmentRequest`] to
//! `commerce/orders/{order_id}/fulfillments`. The client always sends a
//! single shipment and asks Squarespace to notify the customer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// `strftime` format of [`Shipment::ship_date`]: UTC, second precision.
pub const SHIP_DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Formats a timestamp as a ship date (e.g. `2024-05-01T14:03:09Z`).
#[must_use]
pub fn format_ship_date(date: DateTime<Utc>) -> String {
    date.format(SHIP_DATE_FORMAT).to_string()
}

/// Builds a tracking URL by appending the tracking number to the template.
///
/// # Example
///
/// ```rust
/// use squarespace_commerce::commerce::tracking_url;
///
/// assert_eq!(
///     tracking_url("https://tools.usps.com/go/TrackConfirmAction?tLabels=", "9400111"),
///     "https://tools.usps.com/go/TrackConfirmAction?tLabels=9400111"
/// );
/// ```
#[must_use]
pub fn tracking_url(template: &str, tracking_number: &str) -> String {
    format!("{template}{tracking_number}")
}

/// One shipment of a fulfillment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shipment {
    /// When the shipment left, formatted with [`SHIP_DATE_FORMAT`].
    pub ship_date: String,
    /// The carrier, e.g. `USPS`.
    pub carrier_name: String,
    /// The carrier's service level, e.g. `First Class Package`.
    pub service: String,
    /// The carrier's tracking number.
    pub tracking_number: String,
    /// Where the customer can track the shipment.
    pub tracking_url: String,
}

impl Shipment {
    /// Creates a shipment, deriving the tracking URL from `tracking_url_template`.
    #[must_use]
    pub fn new(
        ship_date: DateTime<Utc>,
        tracking_number: &str,
        carrier_name: &str,
        service_name: &str,
        tracking_url_template: &str,
    ) -> Self {
        Self {
            ship_date: format_ship_date(ship_date),
            carrier_name: carrier_name.to_string(),
            service: service_name.to_string(),
            tracking_number: tracking_number.to_string(),
            tracking_url: tracking_url(tracking_url_template, tracking_number),
        }
    }
}

/// The body of `POST commerce/orders/{order_id}/fulfillments`.
///
/// # Example
///
/// ```rust
/// use squarespace_commerce::commerce::{FulfillmentRequest, Shipment};
/// use chrono::{TimeZone, Utc};
///
/// let shipped = Utc.with_ymd_and_hms(2024, 5, 1, 14, 3, 9).unwrap();
/// let request = FulfillmentRequest::single(Shipment::new(
///     shipped,
///     "1Z999AA10123456784",
///     "UPS",
///     "Ground",
///     "https://www.ups.com/track?tracknum=",
/// ));
///
/// let body = serde_json::to_value(&request).unwrap();
/// assert_eq!(body["shouldSendNotification"], true);
/// assert_eq!(body["shipments"][0]["shipDate"], "2024-05-01T14:03:09Z");
/// assert_eq!(
///     body["shipments"][0]["trackingUrl"],
///     "https://www.ups.com/track?tracknum=1Z999AA10123456784"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FulfillmentRequest {
    /// Whether Squarespace emails the customer. Always `true` for requests
    /// built by this crate.
    pub should_send_notification: bool,
    /// The shipments being recorded.
    pub shipments: Vec<Shipment>,
}

impl FulfillmentRequest {
    /// Creates a notifying request for a single shipment.
    #[must_use]
    pub fn single(shipment: Shipment) -> Self {
        Self {
            should_send_notification: true,
            shipments: vec![shipment],
        }
    }

    /// Creates a notifying request for a single shipment leaving now.
    #[must_use]
    pub fn shipped_now(
        tracking_number: &str,
        carrier_name: &str,
        service_name: &str,
        tracking_url_template: &str,
    ) -> Self {
        Self::single(Shipment::new(
            Utc::now(),
            tracking_number,
            carrier_name,
            service_name,
            tracking_url_template,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDateTime, TimeZone};
    use serde_json::json;

    #[test]
    fn test_ship_date_has_second_precision_and_z_suffix() {
        let date = Utc
            .with_ymd_and_hms(2023, 12, 31, 23, 59, 58)
            .unwrap()
            .checked_add_signed(chrono::Duration::milliseconds(750))
            .unwrap();

        assert_eq!(format_ship_date(date), "2023-12-31T23:59:58Z");
    }

    #[test]
    fn test_shipped_now_builds_one_notifying_shipment() {
        let before = Utc::now().timestamp();
        let request = FulfillmentRequest::shipped_now(
            "9400111899223",
            "USPS",
            "First Class Package",
            "https://tools.usps.com/go/TrackConfirmAction?tLabels=",
        );
        let after = Utc::now().timestamp();

        assert!(request.should_send_notification);
        assert_eq!(request.shipments.len(), 1);

        let shipment = &request.shipments[0];
        assert_eq!(shipment.carrier_name, "USPS");
        assert_eq!(shipment.service, "First Class Package");
        assert_eq!(shipment.tracking_number, "9400111899223");
        assert_eq!(
            shipment.tracking_url,
            "https://tools.usps.com/go/TrackConfirmAction?tLabels=9400111899223"
        );

        let parsed = NaiveDateTime::parse_from_str(&shipment.ship_date, SHIP_DATE_FORMAT)
            .unwrap()
            .and_utc()
            .timestamp();
        assert!((before..=after).contains(&parsed));
    }

    #[test]
    fn test_request_serializes_with_api_field_names() {
        let shipped = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
        let request = FulfillmentRequest::single(Shipment::new(
            shipped, "T1", "FedEx", "Overnight", "https://fedex.example/t/",
        ));

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "shouldSendNotification": true,
                "shipments": [{
                    "shipDate": "2024-01-02T03:04:05Z",
                    "carrierName": "FedEx",
                    "service": "Overnight",
                    "trackingNumber": "T1",
                    "trackingUrl": "https://fedex.example/t/T1"
                }]
            })
        );
    }
}

//! Client implementation for the Squarespace Commerce orders API.
//!
//! This module provides the [`CommerceClient`] type: low-level `get`/`post`
//! plus the order operations built on them.

use std::collections::HashMap;

use crate::clients::commerce::CommerceError;
use crate::clients::{DataType, HttpClient, HttpMethod, HttpRequest, ResponseBody};
use crate::commerce::{FulfillmentRequest, Order, OrdersPage, OrdersQuery};
use crate::config::{ApiKey, CommerceConfig};
use crate::error::ConfigError;

/// Path of the order collection, relative to the versioned base URL.
const ORDERS_PATH: &str = "commerce/orders";

/// Client for the Squarespace Commerce orders API.
///
/// # Pagination State
///
/// The client holds one pagination cursor, replaced by every call to
/// [`orders`](Self::orders) and consumed by [`next_page`](Self::next_page).
/// It always reflects the last listing call, so interleaving two listings on
/// one client mixes their pages. Operations that touch the cursor take
/// `&mut self`. For independent listings use [`orders_page`](Self::orders_page),
/// which threads the cursor through its return value instead, or use one
/// client per listing.
///
/// # Example
///
/// ```rust,ignore
/// use squarespace_commerce::{CommerceClient, OrdersQuery};
///
/// let mut client = CommerceClient::from_api_key("your-api-key")?;
///
/// // First page, then walk the cursor
/// let mut orders = client.orders(&OrdersQuery::default()).await?;
/// while let Some(page) = client.next_page().await? {
///     orders.extend(page);
/// }
///
/// // Mark an order shipped
/// client
///     .fulfill(&orders[0].id().unwrap(), "9400111899223", "USPS", "Priority Mail", None)
///     .await?;
/// ```
#[derive(Debug)]
pub struct CommerceClient {
    /// The authenticated HTTP session.
    http_client: HttpClient,
    /// Template tracking numbers are appended to.
    tracking_url_template: String,
    /// Page cap for [`all_orders`](Self::all_orders).
    max_pages: usize,
    /// Cursor returned by the last listing call.
    next_page_cursor: Option<String>,
}

// Verify CommerceClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<CommerceClient>();
};

impl CommerceClient {
    /// Creates a new client from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`CommerceError::Http`] if the HTTP session cannot be created.
    pub fn new(config: &CommerceConfig) -> Result<Self, CommerceError> {
        let http_client = HttpClient::new(config)?;

        tracing::debug!(
            base_path = http_client.base_path(),
            max_pages = config.max_pages(),
            "Created Squarespace Commerce client"
        );

        Ok(Self {
            http_client,
            tracking_url_template: config.tracking_url_template().to_string(),
            max_pages: config.max_pages(),
            next_page_cursor: None,
        })
    }

    /// Creates a client with default settings for the given API key.
    ///
    /// # Errors
    ///
    /// Returns [`CommerceError::Config`] if the key is empty.
    ///
    /// # Example
    ///
    /// ```rust
    /// use squarespace_commerce::{CommerceClient, CommerceError, ConfigError};
    ///
    /// assert!(matches!(
    ///     CommerceClient::from_api_key(""),
    ///     Err(CommerceError::Config(ConfigError::EmptyApiKey))
    /// ));
    /// ```
    pub fn from_api_key(api_key: &str) -> Result<Self, CommerceError> {
        let config = CommerceConfig::builder()
            .api_key(ApiKey::new(api_key)?)
            .build()?;
        Self::new(&config)
    }

    /// Returns the current `User-Agent` header value.
    #[must_use]
    pub fn user_agent(&self) -> &str {
        self.http_client.user_agent()
    }

    /// Sets the `User-Agent` header for all subsequent requests of this client.
    pub fn set_user_agent(&mut self, agent: impl Into<String>) {
        self.http_client.set_user_agent(agent);
    }

    /// Returns the page cap for [`all_orders`](Self::all_orders).
    #[must_use]
    pub const fn max_pages(&self) -> usize {
        self.max_pages
    }

    /// Sets the page cap for [`all_orders`](Self::all_orders).
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidMaxPages`] if `max_pages` is zero.
    pub fn set_max_pages(&mut self, max_pages: usize) -> Result<(), ConfigError> {
        if max_pages == 0 {
            return Err(ConfigError::InvalidMaxPages { value: max_pages });
        }
        self.max_pages = max_pages;
        Ok(())
    }

    /// Returns the template tracking numbers are appended to.
    #[must_use]
    pub fn tracking_url_template(&self) -> &str {
        &self.tracking_url_template
    }

    /// Returns the cursor stored by the last [`orders`](Self::orders) call.
    #[must_use]
    pub fn next_page_cursor(&self) -> Option<&str> {
        self.next_page_cursor.as_deref()
    }

    /// Sends a GET request to `{base_url}/{api_version}/{path}`.
    ///
    /// # Errors
    ///
    /// Returns [`CommerceError::Http`] for invalid paths, transport failures
    /// and every response the classifier rejects.
    pub async fn get(
        &self,
        path: &str,
        query: Option<HashMap<String, String>>,
    ) -> Result<ResponseBody, CommerceError> {
        let mut builder = HttpRequest::builder(HttpMethod::Get, path);

        if let Some(query_params) = query.filter(|q| !q.is_empty()) {
            builder = builder.query(query_params);
        }

        let request = builder.build().map_err(|e| CommerceError::Http(e.into()))?;
        self.http_client.request(request).await.map_err(Into::into)
    }

    /// Sends a POST request with a JSON body to `{base_url}/{api_version}/{path}`.
    ///
    /// # Errors
    ///
    /// Returns [`CommerceError::Http`] for invalid paths, transport failures
    /// and every response the classifier rejects.
    pub async fn post(
        &self,
        path: &str,
        body: serde_json::Value,
    ) -> Result<ResponseBody, CommerceError> {
        let request = HttpRequest::builder(HttpMethod::Post, path)
            .body(body)
            .body_type(DataType::Json)
            .build()
            .map_err(|e| CommerceError::Http(e.into()))?;

        self.http_client.request(request).await.map_err(Into::into)
    }

    /// Retrieves a single order by ID or by order number.
    ///
    /// Empty strings count as absent. When both selectors are given, `order_id`
    /// takes precedence and `order_number` is ignored. Looking up by number
    /// scans [`all_orders`](Self::all_orders), so it is bounded by
    /// [`max_pages`](Self::max_pages) and replaces the stored cursor.
    ///
    /// Returns `Ok(None)` only for a number lookup that finds no match.
    ///
    /// # Errors
    ///
    /// Returns [`CommerceError::InvalidArgument`] if neither selector is given,
    /// otherwise any error of the underlying lookup.
    pub async fn order(
        &mut self,
        order_id: Option<&str>,
        order_number: Option<&str>,
    ) -> Result<Option<Order>, CommerceError> {
        let order_id = order_id.filter(|id| !id.is_empty());
        let order_number = order_number.filter(|number| !number.is_empty());

        match (order_id, order_number) {
            (Some(id), number) => {
                if number.is_some() {
                    tracing::debug!(order_id = id, "Both selectors given, looking up by order_id");
                }
                self.order_by_id(id).await.map(Some)
            }
            (None, Some(number)) => self.order_by_number(number).await,
            (None, None) => Err(CommerceError::InvalidArgument {
                message: "You must specify one of `order_id` or `order_number`",
            }),
        }
    }

    /// Retrieves a single order with `GET commerce/orders/{order_id}`.
    ///
    /// # Errors
    ///
    /// Returns [`CommerceError::InvalidArgument`] if `order_id` is empty,
    /// [`CommerceError::InvalidResponse`] if the body is not a JSON object,
    /// or [`CommerceError::Http`] for request failures.
    pub async fn order_by_id(&self, order_id: &str) -> Result<Order, CommerceError> {
        if order_id.is_empty() {
            return Err(CommerceError::InvalidArgument {
                message: "`order_id` cannot be empty",
            });
        }

        let path = format!("{ORDERS_PATH}/{}", urlencoding::encode(order_id));

        match self.get(&path, None).await? {
            ResponseBody::Json(value) => {
                Order::from_value(value).ok_or_else(|| CommerceError::InvalidResponse {
                    reason: format!("order {order_id} is not a JSON object"),
                })
            }
            ResponseBody::NoContent => Err(CommerceError::InvalidResponse {
                reason: format!("order {order_id} came back as an empty response"),
            }),
        }
    }

    /// Finds the first order whose `orderNumber` equals `order_number`.
    ///
    /// # Errors
    ///
    /// Returns any error of [`all_orders`](Self::all_orders).
    pub async fn order_by_number(
        &mut self,
        order_number: &str,
    ) -> Result<Option<Order>, CommerceError> {
        let orders = self.all_orders().await?;
        Ok(orders
            .into_iter()
            .find(|order| order.has_order_number(order_number)))
    }

    /// Fetches one page of orders without touching the stored cursor.
    ///
    /// Use [`OrdersPage::next_query`] to request the following page.
    ///
    /// # Errors
    ///
    /// Returns [`CommerceError::InvalidResponse`] if the body is not an orders
    /// envelope, or [`CommerceError::Http`] for request failures.
    pub async fn orders_page(&self, query: &OrdersQuery) -> Result<OrdersPage, CommerceError> {
        let body = self.get(ORDERS_PATH, Some(query.to_query())).await?;
        OrdersPage::from_body(body)
    }

    /// Fetches one page of orders with `GET commerce/orders`.
    ///
    /// On success the stored cursor is replaced by the page's
    /// `pagination.nextPageCursor`, or cleared when the page has none or an
    /// empty one.
    /// On failure the stored cursor is left unchanged.
    ///
    /// # Errors
    ///
    /// Same as [`orders_page`](Self::orders_page).
    pub async fn orders(&mut self, query: &OrdersQuery) -> Result<Vec<Order>, CommerceError> {
        let OrdersPage { result, pagination } = self.orders_page(query).await?;
        self.next_page_cursor = pagination.next_page_cursor.filter(|c| !c.is_empty());
        Ok(result)
    }

    /// Fetches the page at the stored cursor.
    ///
    /// Returns `Ok(None)` without any request when no cursor is held.
    ///
    /// # Errors
    ///
    /// Same as [`orders`](Self::orders).
    pub async fn next_page(&mut self) -> Result<Option<Vec<Order>>, CommerceError> {
        let Some(cursor) = self.next_page_cursor.clone() else {
            return Ok(None);
        };

        self.orders(&OrdersQuery::with_cursor(cursor)).await.map(Some)
    }

    /// Fetches every page of orders, up to [`max_pages`](Self::max_pages) pages.
    ///
    /// Pages are concatenated in the order they were fetched. When the cap is
    /// reached while the API still reports a next page, a warning is logged and
    /// the orders fetched so far are returned. The cursor for the remaining
    /// pages stays stored, so [`next_page`](Self::next_page) can continue.
    ///
    /// # Errors
    ///
    /// Returns the first error of any page request; orders fetched before it
    /// are discarded.
    pub async fn all_orders(&mut self) -> Result<Vec<Order>, CommerceError> {
        let mut orders = self.orders(&OrdersQuery::default()).await?;
        let mut pages = 1;

        while self.next_page_cursor.is_some() {
            if pages >= self.max_pages {
                tracing::warn!(
                    max_pages = self.max_pages,
                    "CommerceClient::all_orders: max_pages ({}) hit, returning {} orders",
                    self.max_pages,
                    orders.len()
                );
                break;
            }

            if let Some(page) = self.next_page().await? {
                orders.extend(page);
            }
            pages += 1;
        }

        Ok(orders)
    }

    /// Marks an order shipped.
    ///
    /// Posts a single notifying shipment dated now (UTC, second precision) to
    /// `commerce/orders/{order_id}/fulfillments`. The tracking URL is
    /// `tracking_baseurl` (or the configured template when `None` or empty)
    /// followed by `tracking_number`.
    ///
    /// # Errors
    ///
    /// Same as [`fulfill_with`](Self::fulfill_with).
    pub async fn fulfill(
        &self,
        order_id: &str,
        tracking_number: &str,
        carrier_name: &str,
        service_name: &str,
        tracking_baseurl: Option<&str>,
    ) -> Result<ResponseBody, CommerceError> {
        let template = tracking_baseurl
            .filter(|t| !t.is_empty())
            .unwrap_or(&self.tracking_url_template);

        let request =
            FulfillmentRequest::shipped_now(tracking_number, carrier_name, service_name, template);

        self.fulfill_with(order_id, &request).await
    }

    /// Posts a prepared fulfillment request for an order.
    ///
    /// # Errors
    ///
    /// Returns [`CommerceError::InvalidArgument`] if `order_id` is empty,
    /// [`CommerceError::Serialization`] if the body cannot be encoded, or
    /// [`CommerceError::Http`] for request failures.
    pub async fn fulfill_with(
        &self,
        order_id: &str,
        request: &FulfillmentRequest,
    ) -> Result<ResponseBody, CommerceError> {
        if order_id.is_empty() {
            return Err(CommerceError::InvalidArgument {
                message: "`order_id` cannot be empty",
            });
        }

        let path = format!(
            "{ORDERS_PATH}/{}/fulfillments",
            urlencoding::encode(order_id)
        );
        let body = serde_json::to_value(request)?;

        self.post(&path, body).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_client() -> CommerceClient {
        CommerceClient::from_api_key("test-api-key").unwrap()
    }

    #[test]
    fn test_from_api_key_rejects_empty_key() {
        let result = CommerceClient::from_api_key("");
        assert!(matches!(
            result,
            Err(CommerceError::Config(ConfigError::EmptyApiKey))
        ));
    }

    #[test]
    fn test_new_client_uses_config_values() {
        let config = CommerceConfig::builder()
            .api_key(ApiKey::new("key").unwrap())
            .tracking_url_template("https://www.ups.com/track?tracknum=")
            .max_pages(3)
            .user_agent("OrderSync/1.0")
            .build()
            .unwrap();
        let client = CommerceClient::new(&config).unwrap();

        assert_eq!(client.max_pages(), 3);
        assert_eq!(client.user_agent(), "OrderSync/1.0");
        assert_eq!(
            client.tracking_url_template(),
            "https://www.ups.com/track?tracknum="
        );
        assert!(client.next_page_cursor().is_none());
    }

    #[test]
    fn test_set_user_agent_updates_session() {
        let mut client = create_test_client();
        assert!(client
            .user_agent()
            .starts_with("Squarespace Commerce Rust Library"));

        client.set_user_agent("Warehouse/4.2");
        assert_eq!(client.user_agent(), "Warehouse/4.2");
    }

    #[test]
    fn test_set_max_pages_rejects_zero() {
        let mut client = create_test_client();

        assert!(matches!(
            client.set_max_pages(0),
            Err(ConfigError::InvalidMaxPages { value: 0 })
        ));
        assert_eq!(client.max_pages(), 20);

        client.set_max_pages(50).unwrap();
        assert_eq!(client.max_pages(), 50);
    }

    #[test]
    fn test_order_without_selector_is_invalid_argument() {
        let mut client = create_test_client();

        let result = tokio_test::block_on(client.order(None, None));
        assert!(matches!(result, Err(CommerceError::InvalidArgument { .. })));

        let result = tokio_test::block_on(client.order(Some(""), Some("")));
        assert!(matches!(result, Err(CommerceError::InvalidArgument { .. })));
    }

    #[test]
    fn test_next_page_without_cursor_returns_none() {
        let mut client = create_test_client();

        let result = tokio_test::block_on(client.next_page()).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_fulfill_with_empty_order_id_is_invalid_argument() {
        let client = create_test_client();
        let request = FulfillmentRequest::shipped_now("T1", "USPS", "Priority", "https://t/");

        let result = tokio_test::block_on(client.fulfill_with("", &request));
        assert!(matches!(result, Err(CommerceError::InvalidArgument { .. })));
    }

    #[test]
    fn test_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<CommerceClient>();
    }
}

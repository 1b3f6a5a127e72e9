//! The paginated envelope returned by `GET commerce/orders`.
//!
//! ```json
//! {
//!   "result": [ { "id": "...", "orderNumber": "1001" } ],
//!   "pagination": {
//!     "hasNextPage": true,
//!     "nextPageCursor": "b785a2...",
//!     "nextPageUrl": "https://api.squarespace.com/1.0/commerce/orders?cursor=b785a2..."
//!   }
//! }
//! ```
//!
//! An absent, `null` or empty `nextPageCursor` means there are no further
//! pages. `hasNextPage` is decoded but not consulted.

use std::ops::Deref;

use serde::{Deserialize, Serialize};

use crate::clients::{CommerceError, ResponseBody};
use crate::commerce::{Order, OrdersQuery};

/// Pagination metadata of one page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    /// Whether the API reports another page, as sent. Paging follows
    /// [`next_page_cursor`](Self::next_page_cursor) only.
    #[serde(default)]
    pub has_next_page: bool,
    /// Cursor for the next page, if any. Never empty after
    /// [`OrdersPage::from_body`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_page_cursor: Option<String>,
    /// Ready-made URL for the next page, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_page_url: Option<String>,
}

/// One page of orders together with its pagination metadata.
///
/// Implements `Deref<Target = [Order]>` so the orders can be iterated
/// directly.
///
/// # Example
///
/// ```rust
/// use squarespace_commerce::commerce::OrdersPage;
/// use squarespace_commerce::clients::ResponseBody;
/// use serde_json::json;
///
/// let page = OrdersPage::from_body(ResponseBody::Json(json!({
///     "result": [{"id": "a"}, {"id": "b"}],
///     "pagination": {"hasNextPage": true, "nextPageCursor": "c2"}
/// })))
/// .unwrap();
///
/// assert_eq!(page.len(), 2);
/// assert_eq!(page.next_page_cursor(), Some("c2"));
/// assert_eq!(page.next_query().unwrap().cursor.as_deref(), Some("c2"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrdersPage {
    /// The orders on this page.
    pub result: Vec<Order>,
    /// Pagination metadata. Missing metadata means "no further pages".
    #[serde(default)]
    pub pagination: Pagination,
}

impl OrdersPage {
    /// Decodes a page from a classified response.
    ///
    /// # Errors
    ///
    /// Returns [`CommerceError::InvalidResponse`] if the body is not an
    /// orders envelope.
    pub fn from_body(body: ResponseBody) -> Result<Self, CommerceError> {
        let value = body.into_json().ok_or_else(|| CommerceError::InvalidResponse {
            reason: "expected an orders envelope, got an empty response".to_string(),
        })?;

        let mut page: Self =
            serde_json::from_value(value).map_err(|e| CommerceError::InvalidResponse {
                reason: format!("malformed orders envelope: {e}"),
            })?;

        page.pagination.next_page_cursor = page
            .pagination
            .next_page_cursor
            .take()
            .filter(|cursor| !cursor.is_empty());

        Ok(page)
    }

    /// Returns the cursor for the next page, if any. An empty cursor counts
    /// as none.
    #[must_use]
    pub fn next_page_cursor(&self) -> Option<&str> {
        self.pagination
            .next_page_cursor
            .as_deref()
            .filter(|cursor| !cursor.is_empty())
    }

    /// Returns `true` if the page carries a cursor for a following page.
    ///
    /// Decided by the cursor alone; `pagination.has_next_page` is ignored.
    #[must_use]
    pub fn has_next_page(&self) -> bool {
        self.next_page_cursor().is_some()
    }

    /// Returns the query that fetches the next page, if there is one.
    #[must_use]
    pub fn next_query(&self) -> Option<OrdersQuery> {
        self.next_page_cursor().map(OrdersQuery::with_cursor)
    }

    /// Consumes the page and returns its orders.
    #[must_use]
    pub fn into_orders(self) -> Vec<Order> {
        self.result
    }
}

impl Deref for OrdersPage {
    type Target = [Order];

    fn deref(&self) -> &Self::Target {
        &self.result
    }
}

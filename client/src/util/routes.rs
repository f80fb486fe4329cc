//! Route builders for pages this app links to but does not render.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

/// Order detail page for a prepared order. The id is interpolated as-is.
#[must_use]
pub fn order_detail_href(id: &str) -> String {
    format!("/client/history/order_detail/{id}")
}

/// Order cancellation page for a prepared order. The id is interpolated as-is.
#[must_use]
pub fn order_cancel_href(id: &str) -> String {
    format!("/client/history/order_cancel/{id}")
}

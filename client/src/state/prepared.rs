//! Prepared orders for the client history page.
//!
//! SYSTEM CONTEXT
//! ==============
//! There is no order endpoint yet. `load_prepared` stands in for one by
//! releasing a fixed in-process catalog after `PREPARED_DELAY`.

#[cfg(test)]
#[path = "prepared_test.rs"]
mod prepared_test;

use std::future::Future;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::load::ListItem;
use crate::net::types::LoadError;

/// Simulated latency of the prepared-orders source.
pub const PREPARED_DELAY: Duration = Duration::from_millis(1000);

/// An order line that has been prepared and awaits pickup or delivery.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreparedOrder {
    pub id: String,
    pub name: String,
    /// Thumbnail URI.
    pub image: String,
    pub category: String,
    pub quantity: u32,
    /// Current unit price in whole VND.
    pub price: u64,
    /// Unit price before discount in whole VND.
    pub old_price: u64,
}

impl ListItem for PreparedOrder {
    fn key(&self) -> &str {
        &self.id
    }
}

fn order(id: &str, name: &str, image: &str, category: &str, quantity: u32, price: u64, old_price: u64) -> PreparedOrder {
    PreparedOrder {
        id: id.to_owned(),
        name: name.to_owned(),
        image: image.to_owned(),
        category: category.to_owned(),
        quantity,
        price,
        old_price,
    }
}

/// The fixed catalog, in display order.
#[must_use]
pub fn prepared_catalog() -> Vec<PreparedOrder> {
    vec![
        order(
            "1",
            "Áo thun cotton basic",
            "/images/products/ao-thun-basic.png",
            "Trắng, size M",
            2,
            100_000,
            150_000,
        ),
        order(
            "2",
            "Quần jean ống suông",
            "/images/products/quan-jean-ong-suong.png",
            "Xanh đậm, size 30",
            1,
            350_000,
            420_000,
        ),
        order(
            "3",
            "Giày thể thao nữ",
            "/images/products/giay-the-thao-nu.png",
            "Hồng, size 37",
            1,
            590_000,
            690_000,
        ),
        order(
            "4",
            "Túi tote canvas",
            "/images/products/tui-tote-canvas.png",
            "Be",
            3,
            85_000,
            120_000,
        ),
    ]
}

/// Resolve with the catalog after `delay`.
///
/// # Errors
///
/// Never fails; the `Result` matches the other list producers.
pub async fn load_prepared(delay: Duration) -> Result<Vec<PreparedOrder>, LoadError> {
    load_prepared_after(sleep(delay)).await
}

/// Resolve with the catalog once `delay` completes.
///
/// # Errors
///
/// Never fails; the `Result` matches the other list producers.
pub async fn load_prepared_after(delay: impl Future<Output = ()>) -> Result<Vec<PreparedOrder>, LoadError> {
    delay.await;
    Ok(prepared_catalog())
}

#[cfg(feature = "hydrate")]
async fn sleep(delay: Duration) {
    gloo_timers::future::sleep(delay).await;
}

// Nothing to wait for while rendering on the server.
#[cfg(not(feature = "hydrate"))]
async fn sleep(_delay: Duration) {}

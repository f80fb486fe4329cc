//! Card for one prepared order on the client history page.
//!
//! DESIGN
//! ======
//! `PreparedRow` holds every display string so formatting and link rules
//! are checked without rendering; the component only lays them out.

#[cfg(test)]
#[path = "prepared_card_test.rs"]
mod prepared_card_test;

use leptos::prelude::*;

use crate::state::prepared::PreparedOrder;
use crate::util::money::{format_vnd, line_total};
use crate::util::routes::{order_cancel_href, order_detail_href};

/// Label of the cancel action.
pub const CANCEL_LABEL: &str = "Hủy đơn";

/// Display-ready fields of a prepared order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PreparedRow {
    pub id: String,
    pub name: String,
    pub image: String,
    pub category_label: String,
    pub quantity_label: String,
    pub old_price: String,
    pub price: String,
    pub total: String,
    pub detail_href: String,
    pub cancel_href: String,
}

impl PreparedRow {
    #[must_use]
    pub fn from_order(order: &PreparedOrder) -> Self {
        Self {
            id: order.id.clone(),
            name: order.name.clone(),
            image: order.image.clone(),
            category_label: format!("Phân loại: {}", order.category),
            quantity_label: format!("x {}", order.quantity),
            old_price: format_vnd(order.old_price),
            price: format_vnd(order.price),
            total: format_vnd(line_total(order.price, order.quantity)),
            detail_href: order_detail_href(&order.id),
            cancel_href: order_cancel_href(&order.id),
        }
    }
}

#[component]
pub fn PreparedCard(row: PreparedRow) -> impl IntoView {
    let alt = row.name.clone();
    view! {
        <div class="prepared-card" data-key=row.id>
            <div class="prepared-card__body">
                <a class="prepared-card__link" href=row.detail_href>
                    <div class="prepared-card__summary">
                        <div class="prepared-card__product">
                            <img class="prepared-card__thumb" src=row.image alt=alt/>
                            <div class="prepared-card__info">
                                <b class="prepared-card__name">{row.name}</b>
                                <div class="prepared-card__category">{row.category_label}</div>
                                <div class="prepared-card__quantity">{row.quantity_label}</div>
                            </div>
                        </div>
                        <div class="prepared-card__prices">
                            <s class="prepared-card__old-price">{row.old_price}</s>
                            <b class="prepared-card__price">{row.price}</b>
                        </div>
                    </div>
                    <div class="prepared-card__total">
                        "Tổng số tiền: " <b class="prepared-card__price">{row.total}</b>
                    </div>
                </a>
            </div>
            <div class="prepared-card__actions">
                <a class="btn btn--secondary" href=row.cancel_href>
                    {CANCEL_LABEL}
                </a>
            </div>
        </div>
    }
}

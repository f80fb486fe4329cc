//! Client history page listing prepared orders.

#[cfg(test)]
#[path = "prepared_test.rs"]
mod prepared_test;

use leptos::prelude::*;

use crate::components::list_content::{FAILED_PREFIX, LOADING_TEXT, ListContent, ListPlaceholder};
use crate::components::prepared_card::{PreparedCard, PreparedRow};
use crate::state::load::{LoadState, start_list_load};
use crate::state::prepared::{PREPARED_DELAY, PreparedOrder, load_prepared};

/// Source label used in load diagnostics.
pub const PREPARED_SOURCE: &str = "prepared";

/// Placeholder shown when there are no prepared orders.
pub const EMPTY_PREPARED_TEXT: &str = "Không có đơn hàng nào";

/// Cards to show for the current load state.
pub fn prepared_content(state: &LoadState<PreparedOrder>) -> ListContent<PreparedRow> {
    ListContent::from_state(state, PreparedRow::from_order)
}

#[component]
pub fn PreparedPage() -> impl IntoView {
    // Loads once per mount; the catalog is not a reactive dependency.
    let orders = start_list_load(PREPARED_SOURCE, || load_prepared(PREPARED_DELAY));

    let content = move || match orders.with(prepared_content) {
        ListContent::Loading => view! { <ListPlaceholder text=LOADING_TEXT/> }.into_any(),
        ListContent::Empty => view! { <ListPlaceholder text=EMPTY_PREPARED_TEXT/> }.into_any(),
        ListContent::Failed(message) => {
            view! { <ListPlaceholder text=format!("{FAILED_PREFIX}{message}") error=true/> }.into_any()
        }
        ListContent::Rows(rows) => rows
            .into_iter()
            .map(|row| view! { <PreparedCard row=row/> })
            .collect_view()
            .into_any(),
    };

    view! {
        <div class="prepared-page">
            <div class="prepared-page__list">{content}</div>
        </div>
    }
}

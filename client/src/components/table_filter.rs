//! Free-text global filter input for a `DataTable`.

#[cfg(test)]
#[path = "table_filter_test.rs"]
mod table_filter_test;

use leptos::prelude::*;

use super::data_table::TableState;

/// Placeholder of the provider search box.
pub const FILTER_PLACEHOLDER: &str = "Tìm theo ID, Tên, Email hoặc Địa chỉ...";

/// Forward one input event's value to the table. No trimming or debouncing.
pub(crate) fn forward_filter_input(table: &mut TableState, value: String) {
    table.set_global_filter(value);
}

#[component]
pub fn TableFilter(
    table: RwSignal<TableState>,
    #[prop(default = FILTER_PLACEHOLDER)] placeholder: &'static str,
) -> impl IntoView {
    view! {
        <div class="table-filter">
            <input
                class="table-filter__input"
                type="text"
                placeholder=placeholder
                prop:value=move || table.with(|t| t.global_filter().to_owned())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    table.update(|t| forward_filter_input(t, value));
                }
            />
        </div>
    }
}

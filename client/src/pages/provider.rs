//! Admin page listing providers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Loads `GET /api/provider` once per mount and hands the live load state,
//! including a failure, straight to the table.

#[cfg(test)]
#[path = "provider_test.rs"]
mod provider_test;

use leptos::prelude::*;

use crate::components::data_table::{Column, DataTable, TableState};
use crate::components::table_filter::TableFilter;
use crate::net::api::{PROVIDER_SOURCE, fetch_providers};
use crate::state::load::{LogObserver, start_list_load};
use crate::state::provider::Provider;

/// Breadcrumb shown above the provider table.
pub const BREADCRUMB: &str = "Trung tâm / Quản lý / Nhà cung cấp";

fn optional_cell(value: Option<&String>) -> String {
    value.cloned().unwrap_or_default()
}

/// Columns of the provider table, in display order.
#[must_use]
pub fn provider_columns() -> Vec<Column<Provider>> {
    vec![
        Column::new("ID", |p: &Provider| p.id.clone()),
        Column::new("Tên", |p: &Provider| p.name.clone()),
        Column::new("Email", |p: &Provider| optional_cell(p.email.as_ref())),
        Column::new("Số điện thoại", |p: &Provider| optional_cell(p.phone.as_ref())),
        Column::new("Địa chỉ", |p: &Provider| optional_cell(p.address.as_ref())),
    ]
}

#[component]
pub fn ProviderPage() -> impl IntoView {
    let providers = start_list_load(PROVIDER_SOURCE, || async { fetch_providers(&LogObserver).await });
    let table = RwSignal::new(TableState::default());

    view! {
        <div class="provider-page">
            <div class="breadcrumb">{BREADCRUMB}</div>
            <TableFilter table=table/>
            <DataTable columns=provider_columns() state=providers table=table/>
        </div>
    }
}

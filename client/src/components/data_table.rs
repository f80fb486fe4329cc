//! Generic filterable table over a loaded list.
//!
//! DESIGN
//! ======
//! Columns are header + accessor pairs. The global filter is a
//! case-insensitive substring match against every column's text, so the
//! filter can only match what the table actually shows. No sorting or paging.

#[cfg(test)]
#[path = "data_table_test.rs"]
mod data_table_test;

use std::sync::Arc;

use leptos::prelude::*;

use super::list_content::{FAILED_PREFIX, LOADING_TEXT, ListContent, ListPlaceholder};
use crate::state::load::{ListItem, LoadState};

/// Placeholder shown when the table has no rows to display.
pub const EMPTY_TABLE_TEXT: &str = "Không có dữ liệu";

/// One table column: a header and how to render a record's cell.
pub struct Column<T> {
    pub header: &'static str,
    pub cell: fn(&T) -> String,
}

impl<T> Column<T> {
    #[must_use]
    pub const fn new(header: &'static str, cell: fn(&T) -> String) -> Self {
        Self { header, cell }
    }
}

impl<T> Clone for Column<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Column<T> {}

/// Table-local view state driven by sibling controls.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TableState {
    global_filter: String,
}

impl TableState {
    #[must_use]
    pub fn global_filter(&self) -> &str {
        &self.global_filter
    }

    /// Store the filter exactly as typed.
    pub fn set_global_filter(&mut self, value: impl Into<String>) {
        self.global_filter = value.into();
    }

    /// Whether any cell contains the filter, ignoring case.
    #[must_use]
    pub fn matches(&self, cells: &[String]) -> bool {
        if self.global_filter.is_empty() {
            return true;
        }
        let needle = self.global_filter.to_lowercase();
        cells.iter().any(|cell| cell.to_lowercase().contains(&needle))
    }
}

/// A rendered table row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableRow {
    pub key: String,
    pub cells: Vec<String>,
}

/// Rows to display for `state` under the current filter.
pub fn table_content<T: ListItem>(state: &LoadState<T>, columns: &[Column<T>], table: &TableState) -> ListContent<TableRow> {
    ListContent::from_state_filtered(
        state,
        |item| TableRow {
            key: item.key().to_owned(),
            cells: columns.iter().map(|column| (column.cell)(item)).collect(),
        },
        |row| table.matches(&row.cells),
    )
}

#[component]
pub fn DataTable<T>(
    columns: Vec<Column<T>>,
    state: RwSignal<LoadState<T>>,
    table: RwSignal<TableState>,
) -> impl IntoView
where
    T: ListItem + Send + Sync + 'static,
{
    let headers: Vec<&'static str> = columns.iter().map(|column| column.header).collect();
    let span = headers.len().to_string();
    let columns = Arc::new(columns);

    let body = move || {
        let content = state.with(|current| table.with(|t| table_content(current, &columns, t)));
        match content {
            ListContent::Loading => placeholder_row(&span, LOADING_TEXT.to_owned(), false),
            ListContent::Empty => placeholder_row(&span, EMPTY_TABLE_TEXT.to_owned(), false),
            ListContent::Failed(message) => placeholder_row(&span, format!("{FAILED_PREFIX}{message}"), true),
            ListContent::Rows(rows) => rows
                .into_iter()
                .map(|row| {
                    view! {
                        <tr class="data-table__row" data-key=row.key>
                            {row.cells.into_iter().map(|cell| view! { <td>{cell}</td> }).collect_view()}
                        </tr>
                    }
                })
                .collect_view()
                .into_any(),
        }
    };

    view! {
        <table class="data-table">
            <thead>
                <tr>{headers.into_iter().map(|header| view! { <th>{header}</th> }).collect_view()}</tr>
            </thead>
            <tbody>{body}</tbody>
        </table>
    }
}

fn placeholder_row(span: &str, text: String, error: bool) -> AnyView {
    view! {
        <tr>
            <td colspan=span.to_owned()>
                <ListPlaceholder text=text error=error/>
            </td>
        </tr>
    }
    .into_any()
}

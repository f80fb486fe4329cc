//! Pure mapping from `LoadState` to what a list view shows.
//!
//! DESIGN
//! ======
//! Pages and the data table compute a `ListContent` first and only then turn
//! it into markup, so the loading/empty/failed/rows rules are tested without a
//! renderer.

#[cfg(test)]
#[path = "list_content_test.rs"]
mod list_content_test;

use leptos::prelude::*;

use crate::state::load::LoadState;

/// Placeholder shown while a list is loading.
pub const LOADING_TEXT: &str = "Đang tải dữ liệu...";

/// Prefix of the placeholder shown when a list failed to load.
pub const FAILED_PREFIX: &str = "Không thể tải dữ liệu: ";

/// What a list view renders for its current state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ListContent<R> {
    Loading,
    Empty,
    Failed(String),
    Rows(Vec<R>),
}

impl<R> ListContent<R> {
    /// Map every loaded item through `row`, preserving order.
    pub fn from_state<T>(state: &LoadState<T>, row: impl FnMut(&T) -> R) -> Self {
        Self::from_state_filtered(state, row, |_| true)
    }

    /// Like `from_state`, keeping only rows accepted by `keep`.
    ///
    /// A list whose rows are all filtered out is `Empty`.
    pub fn from_state_filtered<T>(
        state: &LoadState<T>,
        row: impl FnMut(&T) -> R,
        keep: impl FnMut(&R) -> bool,
    ) -> Self {
        match state {
            LoadState::Loading => Self::Loading,
            LoadState::Failed(message) => Self::Failed(message.clone()),
            LoadState::Loaded(items) => {
                let rows: Vec<R> = items.iter().map(row).filter(keep).collect();
                if rows.is_empty() { Self::Empty } else { Self::Rows(rows) }
            }
        }
    }

    #[must_use]
    pub fn row_count(&self) -> usize {
        match self {
            Self::Rows(rows) => rows.len(),
            _ => 0,
        }
    }
}

/// Single-line placeholder for the non-row states.
#[component]
pub fn ListPlaceholder(#[prop(into)] text: String, #[prop(optional)] error: bool) -> impl IntoView {
    view! {
        <div class="list-placeholder" class:list-placeholder--error=error>
            {text}
        </div>
    }
}

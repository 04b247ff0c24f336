//! Bulk-action bar driven by selection membership.

use leptos::prelude::*;

use crate::net::types::Asset;
use crate::state::selection::SelectionStore;

/// Shows the selection count and the actions that operate on it. Actions
/// are disabled while nothing is selected; the print action hands the
/// selected assets to the page as the batch payload.
#[component]
pub fn BulkActionBar(on_print: Callback<Vec<Asset>>) -> impl IntoView {
    let selection = expect_context::<SelectionStore>();

    let count_label = move || format!("{} selected", selection.len());
    let nothing_selected = move || selection.is_empty();

    let on_print_click = move |_| {
        let batch = selection.selected_assets();
        if !batch.is_empty() {
            on_print.run(batch);
        }
    };

    view! {
        <div class="bulk-bar">
            <span class="bulk-bar__count">{count_label}</span>
            <button
                class="btn"
                disabled=nothing_selected
                on:click=move |_| selection.clear()
            >
                "Clear"
            </button>
            <button
                class="btn btn--primary"
                disabled=nothing_selected
                on:click=on_print_click
            >
                "Print labels"
            </button>
        </div>
    }
}

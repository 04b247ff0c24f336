//! Selectable row in the asset list.

use leptos::prelude::*;

use crate::net::types::Asset;
use crate::state::selection::SelectionStore;

/// One asset in the list: selection checkbox, identifying fields, a link
/// to the detail page, and the edit action.
#[component]
pub fn AssetRow(asset: Asset, on_edit: Callback<Asset>) -> impl IntoView {
    let selection = expect_context::<SelectionStore>();

    let row_id = asset.id.clone();
    let is_checked = move || selection.is_selected(&row_id);

    let toggle_asset = asset.clone();
    let on_toggle = move |_| {
        if selection.is_selected(&toggle_asset.id) {
            selection.deselect(&toggle_asset.id);
        } else {
            selection.select(toggle_asset.clone());
        }
    };

    let edit_asset = asset.clone();
    let on_edit_click = move |_| on_edit.run(edit_asset.clone());

    let detail_href = format!("/asset/{}", asset.id);

    view! {
        <div class="asset-row">
            <input
                class="asset-row__select"
                type="checkbox"
                prop:checked=is_checked
                on:change=on_toggle
            />
            <a class="asset-row__name" href=detail_href>
                {asset.asset_name.clone()}
            </a>
            <span class="asset-row__no">{asset.asset_no.clone()}</span>
            <span class="asset-row__condition">{asset.condition.clone()}</span>
            <button class="btn btn--small" on:click=on_edit_click>
                "Edit"
            </button>
        </div>
    }
}

//! Asset list page: browse, select for bulk actions, create and edit.

use leptos::prelude::*;

use crate::components::asset_form::AssetFormModal;
use crate::components::asset_row::AssetRow;
use crate::components::bulk_action_bar::BulkActionBar;
use crate::components::require_auth::RequireAuth;
use crate::components::user_menu::UserMenu;
use crate::net::types::Asset;
use crate::state::form::AssetFormState;
use crate::state::selection::SelectionStore;

/// Asset list page.
#[component]
pub fn AssetsPage() -> impl IntoView {
    view! {
        <RequireAuth>
            <AssetsView/>
        </RequireAuth>
    }
}

#[component]
fn AssetsView() -> impl IntoView {
    let selection = expect_context::<SelectionStore>();

    let assets = RwSignal::new(Vec::<Asset>::new());
    let loading = RwSignal::new(true);
    let reload = RwSignal::new(0u32);
    let form = RwSignal::new(AssetFormState::default());

    // Fetch on mount and again whenever a submission bumps `reload`.
    Effect::new(move || {
        reload.get();
        loading.set(true);
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_assets().await {
                Ok(list) => assets.set(list),
                Err(err) => leptos::logging::warn!("asset list fetch failed: {err}"),
            }
            loading.set(false);
        });
    });

    let on_new = move |_| form.update(AssetFormState::start_create);
    let on_edit = Callback::new(move |asset: Asset| form.update(|f| f.start_edit(&asset)));
    let on_success = Callback::new(move |()| reload.update(|n| *n += 1));
    let on_cancel = Callback::new(move |()| form.update(AssetFormState::cancel));

    // Label printing itself happens outside this core; hand the batch
    // payload to the boundary.
    let on_print = Callback::new(move |batch: Vec<Asset>| {
        let ids: Vec<String> = batch.iter().map(|a| a.id.clone()).collect();
        leptos::logging::log!("label print requested for {} assets: {ids:?}", batch.len());
    });

    let all_selected = move || {
        assets.with(|list| !list.is_empty() && list.iter().all(|a| selection.is_selected(&a.id)))
    };
    let on_toggle_all = move |_| {
        if all_selected() {
            selection.clear();
        } else {
            selection.select_all(assets.get_untracked());
        }
    };

    view! {
        <div class="assets-page">
            <header class="assets-page__header">
                <h1>"Assets"</h1>
                <UserMenu/>
                <button class="btn btn--primary" on:click=on_new>
                    "+ New Asset"
                </button>
            </header>

            <BulkActionBar on_print=on_print/>

            <div class="assets-page__select-all">
                <label>
                    <input type="checkbox" prop:checked=all_selected on:change=on_toggle_all/>
                    "Select all"
                </label>
            </div>

            <Show when=move || loading.get()>
                <p class="assets-page__loading">"Loading assets..."</p>
            </Show>

            <Show when=move || !loading.get() && assets.with(Vec::is_empty)>
                <p class="assets-page__empty">"No assets found."</p>
            </Show>

            <div class="assets-page__list">
                {move || {
                    assets
                        .get()
                        .into_iter()
                        .map(|asset| view! { <AssetRow asset=asset on_edit=on_edit/> })
                        .collect::<Vec<_>>()
                }}
            </div>

            <Show when=move || form.get().show_form>
                <AssetFormModal form=form on_success=on_success on_cancel=on_cancel/>
            </Show>
        </div>
    }
}

//! Asset detail page with the inspection log and embedded entry form.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::inspection_form::InspectionForm;
use crate::components::require_auth::RequireAuth;
use crate::net::types::{Asset, AuditRecord};

/// Asset detail page.
#[component]
pub fn AssetDetailPage() -> impl IntoView {
    view! {
        <RequireAuth>
            <AssetDetailView/>
        </RequireAuth>
    }
}

#[component]
fn AssetDetailView() -> impl IntoView {
    let params = use_params_map();
    let asset_id = move || params.read().get("id").unwrap_or_default();

    let asset = RwSignal::new(None::<Asset>);
    let history = RwSignal::new(Vec::<AuditRecord>::new());
    let show_entry = RwSignal::new(false);
    let reload = RwSignal::new(0u32);

    // Fetch the asset and its inspection log together; re-run when the
    // route param changes or a saved entry bumps `reload`.
    Effect::new(move || {
        reload.get();
        let id = asset_id();
        if id.is_empty() {
            return;
        }
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_asset_with_history(&id).await {
                Ok((fetched, records)) => {
                    asset.set(Some(fetched));
                    history.set(records);
                }
                Err(err) => leptos::logging::warn!("asset fetch failed: {err}"),
            }
        });
    });

    let on_saved = Callback::new(move |()| {
        show_entry.set(false);
        reload.update(|n| *n += 1);
    });
    let on_cancel = Callback::new(move |()| show_entry.set(false));

    view! {
        <div class="asset-detail">
            <a class="asset-detail__back" href="/asset" title="Back to assets">
                "\u{2190} Assets"
            </a>

            {move || {
                asset
                    .get()
                    .map(|a| {
                        view! {
                            <div class="asset-detail__summary">
                                <h1>{a.asset_name}</h1>
                                <p class="asset-detail__no">{a.asset_no}</p>
                                <dl class="asset-detail__facts">
                                    <dt>"Condition"</dt>
                                    <dd>{a.condition}</dd>
                                    <dt>"Category"</dt>
                                    <dd>{a.category_code}</dd>
                                    <dt>"Book Value"</dt>
                                    <dd>
                                        {a.book_value.map_or_else(String::new, |v| format!("{v:.2}"))}
                                    </dd>
                                </dl>
                            </div>
                        }
                    })
            }}

            <section class="asset-detail__inspections">
                <header class="asset-detail__inspections-header">
                    <h2>"Inspection Log"</h2>
                    <button class="btn btn--primary" on:click=move |_| show_entry.set(true)>
                        "+ New Inspection"
                    </button>
                </header>

                <Show when=move || show_entry.get()>
                    <InspectionForm asset_id=asset_id() on_saved=on_saved on_cancel=on_cancel/>
                </Show>

                <Show when=move || history.with(Vec::is_empty)>
                    <p class="asset-detail__no-inspections">"No inspections recorded yet."</p>
                </Show>

                <table class="asset-detail__log">
                    <thead>
                        <tr>
                            <th>"Date"</th>
                            <th>"Inspector"</th>
                            <th>"Status"</th>
                            <th>"Notes"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            history
                                .get()
                                .into_iter()
                                .map(|record| {
                                    view! {
                                        <tr>
                                            <td>{record.check_date}</td>
                                            <td>{record.checked_by}</td>
                                            <td>{record.status}</td>
                                            <td>{record.remarks}</td>
                                        </tr>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </tbody>
                </table>
            </section>
        </div>
    }
}

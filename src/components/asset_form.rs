//! Modal dialog for creating or editing an asset.

use leptos::prelude::*;

use crate::state::form::{AssetFormState, CONDITION_OPTIONS, SubmitPhase, parse_amount};

/// Asset create/edit dialog bound to an `AssetFormState`.
///
/// Submission routes to the create or update endpoint depending on the
/// draft's editing id. While a request is in flight the submit button is
/// disabled and re-entry is suppressed; a failure keeps the draft and the
/// dialog open with the error shown, so the user retries without
/// re-entering anything.
#[component]
pub fn AssetFormModal(
    form: RwSignal<AssetFormState>,
    on_success: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let title = move || {
        if form.get().editing_id.is_some() {
            "Edit Asset"
        } else {
            "New Asset"
        }
    };
    let submitting = move || form.get().phase == SubmitPhase::Submitting;
    let submit_label = move || if submitting() { "Saving..." } else { "Save" };
    let error = move || form.get().error;

    let submit = move |_| {
        let mut started = false;
        form.update(|f| started = f.begin_submit());
        if !started {
            return;
        }
        let snapshot = form.get_untracked();
        if let Err(message) = snapshot.draft.validate() {
            form.update(|f| f.finish_failure(message.to_owned()));
            return;
        }
        leptos::task::spawn_local(async move {
            let result = match snapshot.editing_id.as_deref() {
                Some(id) => crate::net::api::update_asset(id, &snapshot.draft).await,
                None => crate::net::api::create_asset(&snapshot.draft).await,
            };
            match result {
                Ok(()) => {
                    form.update(AssetFormState::finish_success);
                    on_success.run(());
                }
                Err(err) => {
                    leptos::logging::warn!("asset save failed: {err}");
                    form.update(|f| f.finish_failure(err.to_string()));
                }
            }
        });
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>{title}</h2>

                <Show when=move || error().is_some()>
                    <p class="dialog__error">{move || error().unwrap_or_default()}</p>
                </Show>

                <label class="dialog__label">
                    "Asset Name"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || form.get().draft.asset_name
                        on:input=move |ev| {
                            form.update(|f| f.draft.asset_name = event_target_value(&ev));
                        }
                    />
                </label>
                <label class="dialog__label">
                    "Asset No"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || form.get().draft.asset_no
                        on:input=move |ev| {
                            form.update(|f| f.draft.asset_no = event_target_value(&ev));
                        }
                    />
                </label>
                <label class="dialog__label">
                    "Line No"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || form.get().draft.line_no
                        on:input=move |ev| {
                            form.update(|f| f.draft.line_no = event_target_value(&ev));
                        }
                    />
                </label>
                <label class="dialog__label">
                    "Category Code"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || form.get().draft.category_code
                        on:input=move |ev| {
                            form.update(|f| f.draft.category_code = event_target_value(&ev));
                        }
                    />
                </label>
                <label class="dialog__label">
                    "Condition"
                    <select
                        class="dialog__input"
                        prop:value=move || form.get().draft.condition
                        on:change=move |ev| {
                            form.update(|f| f.draft.condition = event_target_value(&ev));
                        }
                    >
                        <option value="">"Select Condition"</option>
                        {CONDITION_OPTIONS
                            .iter()
                            .map(|option| view! { <option value=*option>{*option}</option> })
                            .collect::<Vec<_>>()}
                    </select>
                </label>
                <label class="dialog__label">
                    "Acquisition Value"
                    <input
                        class="dialog__input"
                        type="number"
                        prop:value=move || {
                            form.get().draft.acq_value.map_or_else(String::new, |v| v.to_string())
                        }
                        on:input=move |ev| {
                            form.update(|f| f.draft.acq_value = parse_amount(&event_target_value(&ev)));
                        }
                    />
                </label>
                <label class="dialog__label">
                    "Book Value"
                    <input
                        class="dialog__input"
                        type="number"
                        prop:value=move || {
                            form.get().draft.book_value.map_or_else(String::new, |v| v.to_string())
                        }
                        on:input=move |ev| {
                            form.update(|f| f.draft.book_value = parse_amount(&event_target_value(&ev)));
                        }
                    />
                </label>
                <label class="dialog__label">
                    "Placed in Service"
                    <input
                        class="dialog__input"
                        type="date"
                        prop:value=move || form.get().draft.pis_date
                        on:input=move |ev| {
                            form.update(|f| f.draft.pis_date = event_target_value(&ev));
                        }
                    />
                </label>
                <label class="dialog__label">
                    "Transfer Date"
                    <input
                        class="dialog__input"
                        type="date"
                        prop:value=move || form.get().draft.trans_date
                        on:input=move |ev| {
                            form.update(|f| f.draft.trans_date = event_target_value(&ev));
                        }
                    />
                </label>

                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--primary" disabled=submitting on:click=submit>
                        {submit_label}
                    </button>
                </div>
            </div>
        </div>
    }
}

//! Embedded inspection entry form for one asset.

use leptos::prelude::*;

use crate::state::form::{CONDITION_OPTIONS, InspectionDraft, InspectionFormState, SubmitPhase};
use crate::state::session::SessionStore;

/// New-inspection entry embedded in the asset detail page. The asset is
/// contextually fixed, so no asset selector is shown.
///
/// The entry only closes on confirmed success (via `on_saved`, which the
/// page uses to refresh the inspection log). A rejected or failed
/// submission keeps the entry open with the server's message so the user
/// can correct and retry.
#[component]
pub fn InspectionForm(
    asset_id: String,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let session = expect_context::<SessionStore>();

    let inspector = {
        let s = session.session_untracked();
        if s.name.is_empty() { s.email } else { s.name }
    };
    let state = RwSignal::new(InspectionFormState::new(InspectionDraft::for_asset(
        &asset_id,
        &inspector,
        &today(),
    )));

    let submitting = move || state.get().phase == SubmitPhase::Submitting;
    let submit_label = move || if submitting() { "Saving..." } else { "Save Inspection" };
    let error = move || state.get().error;

    let submit = move |_| {
        let mut started = false;
        state.update(|s| started = s.begin_submit());
        if !started {
            return;
        }
        let draft = state.get_untracked().draft;
        if let Err(message) = draft.validate() {
            state.update(|s| s.finish_failure(message.to_owned()));
            return;
        }
        leptos::task::spawn_local(async move {
            match crate::net::api::submit_inspection(&draft).await {
                Ok(()) => {
                    state.update(InspectionFormState::finish_success);
                    on_saved.run(());
                }
                Err(err) => {
                    leptos::logging::warn!("inspection submit failed: {err}");
                    state.update(|s| s.finish_failure(err.to_string()));
                }
            }
        });
    };

    view! {
        <div class="inspection-form">
            <div class="inspection-form__header">
                <h3>"New Inspection Entry"</h3>
                <button class="inspection-form__close" on:click=move |_| on_cancel.run(())>
                    "\u{2715}"
                </button>
            </div>

            <Show when=move || error().is_some()>
                <p class="inspection-form__error">{move || error().unwrap_or_default()}</p>
            </Show>

            <label class="inspection-form__label">
                "Inspector"
                <input
                    class="inspection-form__input"
                    type="text"
                    prop:value=move || state.get().draft.checked_by
                    on:input=move |ev| {
                        state.update(|s| s.draft.checked_by = event_target_value(&ev));
                    }
                />
            </label>
            <label class="inspection-form__label">
                "Date"
                <input
                    class="inspection-form__input"
                    type="date"
                    prop:value=move || state.get().draft.check_date
                    on:input=move |ev| {
                        state.update(|s| s.draft.check_date = event_target_value(&ev));
                    }
                />
            </label>
            <label class="inspection-form__label">
                "Condition"
                <select
                    class="inspection-form__input"
                    prop:value=move || state.get().draft.status
                    on:change=move |ev| {
                        state.update(|s| s.draft.status = event_target_value(&ev));
                    }
                >
                    {CONDITION_OPTIONS
                        .iter()
                        .map(|option| view! { <option value=*option>{*option}</option> })
                        .collect::<Vec<_>>()}
                </select>
            </label>
            <label class="inspection-form__label">
                "Remarks"
                <textarea
                    class="inspection-form__input"
                    prop:value=move || state.get().draft.remarks
                    on:input=move |ev| {
                        state.update(|s| s.draft.remarks = event_target_value(&ev));
                    }
                ></textarea>
            </label>

            <div class="inspection-form__actions">
                <button class="btn" on:click=move |_| on_cancel.run(())>
                    "Cancel"
                </button>
                <button class="btn btn--primary" disabled=submitting on:click=submit>
                    {submit_label}
                </button>
            </div>
        </div>
    }
}

/// Today's date (`YYYY-MM-DD`) for the check-date prefill.
fn today() -> String {
    #[cfg(feature = "hydrate")]
    {
        let iso = String::from(js_sys::Date::new_0().to_iso_string());
        iso.chars().take(10).collect()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        String::new()
    }
}

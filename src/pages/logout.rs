//! Logout page — terminates the server session and force-clears client
//! state.
//!
//! The client-side clears happen whether or not the logout request
//! succeeds, so a user is never stuck half-logged-out: the session store
//! and selection are reset, the persisted record and legacy key are
//! removed, and the visitor lands back on the login page.

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use crate::state::selection::SelectionStore;
#[cfg(feature = "hydrate")]
use crate::state::session::SessionStore;

/// Redirect delay so the sign-off message is visible before navigation.
#[cfg(feature = "hydrate")]
const REDIRECT_DELAY_MS: u64 = 800;

/// Logout page — shows a brief sign-off message while the flow runs.
#[component]
pub fn LogoutPage() -> impl IntoView {
    #[cfg(feature = "hydrate")]
    {
        let session = expect_context::<SessionStore>();
        let selection = expect_context::<SelectionStore>();

        Effect::new(move || {
            leptos::task::spawn_local(async move {
                if let Err(err) = crate::net::api::logout().await {
                    leptos::logging::warn!("logout request failed: {err}");
                }
                session.clear_user();
                selection.clear();

                gloo_timers::future::sleep(std::time::Duration::from_millis(REDIRECT_DELAY_MS))
                    .await;
                // Full navigation rather than a router transition, for a
                // clean slate after sign-out.
                if let Some(window) = web_sys::window() {
                    if window.location().set_href("/login").is_err() {
                        leptos::logging::warn!("redirect to login failed");
                    }
                }
            });
        });
    }

    view! {
        <div class="logout-page">
            <h1>"Logging out..."</h1>
            <p>"Please wait while we securely sign you out."</p>
        </div>
    }
}

//! Login page — resolves the SSO redirect target and renders the sign-in
//! link.

use leptos::prelude::*;

/// Endpoint that returns the login redirect target as plain text. Also
/// the fallback link target when the lookup fails, so sign-in always has
/// somewhere to go.
const LOGIN_ENDPOINT: &str = "/api/auth/login";

/// Login page — the only public page besides logout.
#[component]
pub fn LoginPage() -> impl IntoView {
    let login_url = RwSignal::new(LOGIN_ENDPOINT.to_owned());

    // Resolve the SSO target once on mount.
    Effect::new(move || {
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_login_url().await {
                Ok(url) if !url.trim().is_empty() => login_url.set(url),
                Ok(_) => {}
                Err(err) => leptos::logging::warn!("login target lookup failed: {err}"),
            }
        });
    });

    view! {
        <div class="login-page">
            <h1>"Asset Console"</h1>
            <p>"Sign in to manage assets and inspections"</p>
            <a class="login-button" href=move || login_url.get()>
                "Sign in"
            </a>
        </div>
    }
}

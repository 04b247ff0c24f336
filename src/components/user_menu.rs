//! Session readout with the sign-out link.

use leptos::prelude::*;

use crate::state::session::SessionStore;

/// Shows who is signed in and links to the logout flow.
#[component]
pub fn UserMenu() -> impl IntoView {
    let session = expect_context::<SessionStore>();

    let display_name = move || {
        let s = session.session();
        if s.name.is_empty() { s.email } else { s.name }
    };
    let role = move || session.session().role;

    view! {
        <div class="user-menu">
            <span class="user-menu__name">{display_name}</span>
            <span class="user-menu__role">{role}</span>
            <a class="user-menu__logout" href="/logout">
                "Sign out"
            </a>
        </div>
    }
}

//! Protected landing page.

use leptos::prelude::*;

use crate::components::require_auth::RequireAuth;
use crate::components::user_menu::UserMenu;
use crate::state::session::SessionStore;

/// Dashboard page — greets the signed-in user and links into the console.
#[component]
pub fn DashboardPage() -> impl IntoView {
    view! {
        <RequireAuth>
            <DashboardView/>
        </RequireAuth>
    }
}

#[component]
fn DashboardView() -> impl IntoView {
    let session = expect_context::<SessionStore>();

    let greeting = move || {
        let s = session.session();
        if s.name.is_empty() {
            "Welcome".to_owned()
        } else {
            format!("Welcome, {}", s.name)
        }
    };

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header">
                <h1>"Asset Console"</h1>
                <UserMenu/>
            </header>

            <p class="dashboard-page__greeting">{greeting}</p>

            <div class="dashboard-page__links">
                <a class="dashboard-card" href="/asset">
                    <span class="dashboard-card__title">"Assets"</span>
                    <span class="dashboard-card__hint">
                        "Browse, create, and edit assets"
                    </span>
                </a>
            </div>
        </div>
    }
}

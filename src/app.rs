//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{
    asset_detail::AssetDetailPage, assets::AssetsPage, dashboard::DashboardPage, login::LoginPage,
    logout::LogoutPage,
};
use crate::state::selection::SelectionStore;
use crate::state::session::SessionStore;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Builds the shared stores, hydrates the session from durable storage
/// before the router mounts (so the guard's first decision never races
/// storage hydration), and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = SessionStore::new();
    session.hydrate();
    let selection = SelectionStore::new();

    provide_context(session);
    provide_context(selection);

    // With no persisted record (fresh sign-in redirect), restore identity
    // from the server once per page load. Untracked read so clearing the
    // session later does not re-trigger a sign-in.
    Effect::new(move || {
        if session.session_untracked().is_authenticated {
            return;
        }
        leptos::task::spawn_local(async move {
            if let Some(user) = crate::net::api::fetch_current_user().await {
                session.set_user(user);
            }
        });
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/asset-console.css"/>
        <Title text="Asset Console"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("logout") view=LogoutPage/>
                <Route path=StaticSegment("") view=DashboardPage/>
                <Route path=StaticSegment("asset") view=AssetsPage/>
                <Route path=(StaticSegment("asset"), ParamSegment("id")) view=AssetDetailPage/>
            </Routes>
        </Router>
    }
}

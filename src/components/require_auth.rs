//! Route guard for protected pages.
//!
//! Every mount of a protected page re-evaluates the check against the
//! in-memory session — there is no cached verdict, so a session cleared
//! mid-visit is caught on the next navigation. During server pre-render
//! there is no navigable context; the guard renders nothing protected and
//! does not attempt navigation.

#[cfg(test)]
#[path = "require_auth_test.rs"]
mod require_auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::session::{Session, SessionStore};

/// Outcome of a protected-route check.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Session is authenticated; render proceeds.
    Authorized,
    /// Unauthenticated in a browser: navigate to the login route.
    Redirecting,
    /// Unauthenticated outside a browser: no navigation target exists.
    Skipped,
}

/// Synchronous guard check against the in-memory session.
pub fn decide(session: &Session, in_browser: bool) -> GuardDecision {
    if session.is_authenticated {
        GuardDecision::Authorized
    } else if in_browser {
        GuardDecision::Redirecting
    } else {
        GuardDecision::Skipped
    }
}

fn in_browser() -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window().is_some()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Wrapper for protected page content. Unauthenticated visitors are sent
/// to `/login`; protected children are only ever rendered for an
/// authenticated session.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let navigate = use_navigate();

    Effect::new(move || {
        if decide(&session.session(), in_browser()) == GuardDecision::Redirecting {
            navigate("/login", NavigateOptions::default());
        }
    });

    move || session.session().is_authenticated.then(|| children())
}

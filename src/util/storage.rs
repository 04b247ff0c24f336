//! Durable storage for the session record.
//!
//! One localStorage key holds the JSON-encoded whitelisted session record
//! (the serde view of `Session`). Read and write failures are absorbed and
//! logged — the in-memory session stays authoritative for the page
//! lifetime regardless of persistence outcome. Requires a browser
//! environment; on the server every operation is a no-op.

use crate::state::session::Session;

/// localStorage key for the persisted session record.
pub const SESSION_KEY: &str = "asset-console-session";

/// Key written by an earlier release; removed on logout so stale identity
/// can never linger next to the current record.
pub const LEGACY_SESSION_KEY: &str = "user-auth-storage";

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    let window = web_sys::window()?;
    match window.local_storage() {
        Ok(storage) => storage,
        Err(_) => {
            leptos::logging::warn!("localStorage unavailable");
            None
        }
    }
}

/// Read and decode the persisted session record, if one exists.
#[cfg(feature = "hydrate")]
pub fn load_session() -> Option<Session> {
    let storage = local_storage()?;
    let raw = match storage.get_item(SESSION_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return None,
        Err(_) => {
            leptos::logging::warn!("session record read failed");
            return None;
        }
    };
    match serde_json::from_str(&raw) {
        Ok(session) => Some(session),
        Err(err) => {
            leptos::logging::warn!("session record corrupt, ignoring: {err}");
            None
        }
    }
}

#[cfg(not(feature = "hydrate"))]
pub fn load_session() -> Option<Session> {
    None
}

/// Persist the whitelisted session record. Failures are logged, never
/// returned — the caller's in-memory session remains valid either way.
#[cfg(feature = "hydrate")]
pub fn store_session(session: &Session) {
    let Some(storage) = local_storage() else {
        return;
    };
    match serde_json::to_string(session) {
        Ok(json) => {
            if storage.set_item(SESSION_KEY, &json).is_err() {
                leptos::logging::warn!("session record write failed");
            }
        }
        Err(err) => leptos::logging::warn!("session record encode failed: {err}"),
    }
}

#[cfg(not(feature = "hydrate"))]
pub fn store_session(_session: &Session) {}

/// Remove the session record, the legacy key, and all sessionStorage
/// entries. Called on logout.
#[cfg(feature = "hydrate")]
pub fn clear_session() {
    if let Some(storage) = local_storage() {
        if storage.remove_item(SESSION_KEY).is_err() {
            leptos::logging::warn!("session record removal failed");
        }
        if storage.remove_item(LEGACY_SESSION_KEY).is_err() {
            leptos::logging::warn!("legacy session record removal failed");
        }
    }
    let session_storage = web_sys::window().and_then(|w| match w.session_storage() {
        Ok(storage) => storage,
        Err(_) => None,
    });
    if let Some(session_storage) = session_storage {
        if session_storage.clear().is_err() {
            leptos::logging::warn!("sessionStorage clear failed");
        }
    }
}

#[cfg(not(feature = "hydrate"))]
pub fn clear_session() {}

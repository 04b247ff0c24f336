#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;

use crate::net::types::UserInfo;
use crate::util::storage;

/// Authenticated-identity state for the current browser context.
///
/// A session is either the full unauthenticated default or a full
/// authenticated tuple; there are no partial states. `is_authenticated` is
/// the sole gate consulted by the route guard. The serde view of this
/// struct is exactly the whitelisted record persisted to localStorage.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub email: String,
    pub is_authenticated: bool,
    pub name: String,
    pub role: String,
    #[serde(default)]
    pub location: serde_json::Value,
}

impl Session {
    /// Replace the whole session with an authenticated tuple for `user`.
    pub fn set_user(&mut self, user: UserInfo) {
        *self = Self {
            email: user.email,
            is_authenticated: true,
            name: user.name,
            role: user.role,
            location: user.location,
        };
    }

    /// Reset to the unauthenticated default tuple. Idempotent.
    pub fn clear_user(&mut self) {
        *self = Self::default();
    }
}

/// Injectable handle for the process-wide session state.
///
/// Wraps the session in a private signal so all mutation goes through
/// `set_user`/`clear_user`, which couple the in-memory update with the
/// durable-storage side effect. Storage failures never reach callers; the
/// in-memory session stays authoritative for the page lifetime.
#[derive(Clone, Copy)]
pub struct SessionStore {
    inner: RwSignal<Session>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self {
            inner: RwSignal::new(Session::default()),
        }
    }

    /// Load the persisted record, if any. Called once before the router
    /// mounts; localStorage reads are synchronous in the browser, so the
    /// guard's first decision never sees a pre-hydration default.
    pub fn hydrate(&self) {
        if let Some(stored) = storage::load_session() {
            self.inner.set(stored);
        }
    }

    /// Current session value; subscribes the caller to changes.
    pub fn session(&self) -> Session {
        self.inner.get()
    }

    /// Current session value without subscribing.
    pub fn session_untracked(&self) -> Session {
        self.inner.get_untracked()
    }

    /// Replace the session with an authenticated tuple and persist the
    /// whitelisted record.
    pub fn set_user(&self, user: UserInfo) {
        self.inner.update(|s| s.set_user(user));
        storage::store_session(&self.inner.get_untracked());
    }

    /// Reset to the unauthenticated default and clear every session-scoped
    /// browser record, including the legacy key.
    pub fn clear_user(&self) {
        self.inner.update(Session::clear_user);
        storage::clear_session();
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

//! Session-token state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session store is the single shared source of truth the route guard
//! reads from. Only the authentication flows write to it: the login page
//! establishes a session, sign-out clears it, and startup hydration restores
//! the persisted token. The guard itself never mutates this state.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;

use crate::net::types::User;
use crate::util::storage;

/// Fixed localStorage key the deployment stores the session token under.
pub const TOKEN_STORAGE_KEY: &str = "ocr_token";

/// Authentication state tracking the session token and signed-in profile.
#[derive(Clone, Debug, PartialEq)]
pub struct SessionState {
    /// Opaque token issued by the backend. Presence is the only signal the
    /// client inspects.
    pub token: Option<String>,
    /// Profile returned at login. Lost on reload; the token alone carries
    /// the session across page loads.
    pub user: Option<User>,
    /// True until the startup read from persistent storage has completed.
    pub hydrating: bool,
}

impl Default for SessionState {
    // Starts hydrating so the route guard defers its first decision until
    // the persisted token has been read.
    fn default() -> Self {
        Self {
            token: None,
            user: None,
            hydrating: true,
        }
    }
}

impl SessionState {
    /// True once hydration finished and a non-empty token is present.
    pub fn authenticated(&self) -> bool {
        !self.hydrating && self.token.as_deref().is_some_and(|t| !t.is_empty())
    }
}

/// Read the persisted token once at startup and mark the session hydrated.
///
/// A missing or unreadable storage area hydrates to an absent token, which
/// downstream the guard treats as signed-out.
pub fn hydrate_session(session: RwSignal<SessionState>) {
    let token = storage::load_string(TOKEN_STORAGE_KEY);
    log::debug!(
        "session hydrated; token {}",
        if token.is_some() { "present" } else { "absent" }
    );
    session.update(|s| {
        s.token = token;
        s.hydrating = false;
    });
}

/// Install a signed-in session after a successful login and persist the
/// token for future page loads.
pub fn establish_session(session: RwSignal<SessionState>, token: String, user: Option<User>) {
    storage::save_string(TOKEN_STORAGE_KEY, &token);
    session.update(|s| {
        s.token = Some(token);
        s.user = user;
        s.hydrating = false;
    });
}

/// Drop the session and the persisted token (sign-out). The route guard
/// picks up the change and bounces protected pages to the login screen.
pub fn clear_session(session: RwSignal<SessionState>) {
    storage::remove(TOKEN_STORAGE_KEY);
    session.update(|s| {
        s.token = None;
        s.user = None;
    });
}

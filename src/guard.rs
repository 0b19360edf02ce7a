//! Route access gate for client-side navigation.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every route change passes through a single decision: does the destination
//! require a signed-in session, and if so, is a session token present? The
//! token is opaque at this layer — presence alone authorizes passage, and
//! expiry/signature enforcement stays with the HTTP layer and the backend.
//! The gate only ever reads the session store; login and sign-out own the
//! writes.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_location;

use crate::state::session::SessionState;

/// Path of the login screen. Always a member of [`PublicRoutes`], so a
/// redirect can never bounce back onto itself.
pub const LOGIN_PATH: &str = "/login";

/// Enumerable set of paths reachable without a session token.
///
/// Configured once at startup. [`LOGIN_PATH`] is always a member; extra
/// entries (a future `/register`, `/forgot-password`) slot in without
/// touching the decision logic.
#[derive(Clone, Debug)]
pub struct PublicRoutes {
    paths: Vec<String>,
}

impl PublicRoutes {
    /// Build the set from extra exempt paths, deduplicated, plus
    /// [`LOGIN_PATH`].
    pub fn new<I>(extra: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let mut paths = vec![LOGIN_PATH.to_owned()];
        for path in extra {
            let path = path.into();
            if !paths.contains(&path) {
                paths.push(path);
            }
        }
        Self { paths }
    }

    /// Exact-path membership test.
    pub fn contains(&self, path: &str) -> bool {
        self.paths.iter().any(|p| p == path)
    }
}

impl Default for PublicRoutes {
    fn default() -> Self {
        Self::new(Vec::<String>::new())
    }
}

/// A single in-flight navigation attempt, consumed by one gate evaluation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteRequest {
    pub target_path: String,
    pub origin_path: String,
}

/// Outcome of a gate evaluation.
///
/// There is no error variant: every navigation resolves to one of these,
/// and an unreadable token store resolves to `Redirect` via the absent-token
/// branch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Decision {
    /// Navigation proceeds to the requested path unmodified.
    Allow,
    /// Navigation is replaced with a navigation to the named login path.
    Redirect(String),
}

/// Decide whether a navigation may proceed.
///
/// `token` is the session token as read from the shared store; a store that
/// is missing or was never initialized reads as `None`, which fails closed.
/// An empty string counts as absent. No other token inspection happens here.
pub fn evaluate(public: &PublicRoutes, request: &RouteRequest, token: Option<&str>) -> Decision {
    if public.contains(&request.target_path) {
        return Decision::Allow;
    }
    match token {
        Some(value) if !value.is_empty() => Decision::Allow,
        _ => Decision::Redirect(LOGIN_PATH.to_owned()),
    }
}

/// Register the gate with the router: watch the current location and the
/// session store, and redirect whenever [`evaluate`] says so.
///
/// Installed exactly once, inside the `Router`. While the session store is
/// still hydrating from persistent storage the decision is deferred; the
/// effect re-runs when hydration lands or the location changes, so the
/// latest navigation always wins over a superseded evaluation.
pub fn install_route_guard<F>(public: PublicRoutes, session: RwSignal<SessionState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    let location = use_location();
    let last_path = StoredValue::new(String::new());
    Effect::new(move || {
        let target_path = location.pathname.get();
        let state = session.get();
        if state.hydrating {
            // Startup read from storage has not landed yet; deciding now
            // could bounce an already-signed-in user off a protected page.
            return;
        }
        let request = RouteRequest {
            target_path: target_path.clone(),
            origin_path: last_path.get_value(),
        };
        let decision = evaluate(&public, &request, state.token.as_deref());
        last_path.set_value(target_path);
        if let Decision::Redirect(to) = decision {
            log::debug!(
                "no session token for {}; redirecting to {to}",
                request.target_path
            );
            navigate(&to, NavigateOptions::default());
        }
    });
}

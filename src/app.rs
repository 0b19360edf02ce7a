//! Root application component with routing and context providers.
//!
//! ARCHITECTURE
//! ============
//! The app root owns shared state, the one-time session hydration, and the
//! single route-guard registration. Pages never wire their own redirect
//! logic.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
    hooks::use_navigate,
};

use crate::guard::{self, PublicRoutes};
use crate::pages::{dashboard::DashboardPage, login::LoginPage, settings::ProfilePage};
use crate::state::providers::ProvidersState;
use crate::state::session::{self, SessionState};
use crate::state::tasks::TaskLookupState;

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
/// Provides all shared state contexts and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Provide reactive state contexts for all child components.
    let session = RwSignal::new(SessionState::default());
    let providers = RwSignal::new(ProvidersState::default());
    let tasks = RwSignal::new(TaskLookupState::default());

    provide_context(session);
    provide_context(providers);
    provide_context(tasks);

    // One-time startup read of the persisted token. Effects only run in the
    // browser, so SSR output never depends on storage.
    Effect::new(move || {
        session::hydrate_session(session);
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/ocrweb.css"/>
        <Title text="OCR Service"/>

        <Router>
            <RouteGuardHost/>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("") view=DashboardPage/>
                <Route path=(StaticSegment("settings"), StaticSegment("profile")) view=ProfilePage/>
            </Routes>
        </Router>
    }
}

/// Invisible host that registers the route access gate once with the
/// router's navigation handling.
#[component]
fn RouteGuardHost() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();
    guard::install_route_guard(PublicRoutes::default(), session, navigate);
}

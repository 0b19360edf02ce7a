//! Dashboard page with provider inventory and task-status lookup.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated landing route. It fetches the provider list
//! once the session is ready and offers a task-status checker that keeps
//! polling while the backend reports a transient processing phase. Content
//! stays hidden until the session store has hydrated, so nothing protected
//! is observable before the route guard has run for this location.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;

use crate::components::provider_card::ProviderCard;
use crate::net::types::TaskStatus;
use crate::state::providers::ProvidersState;
use crate::state::session::SessionState;
use crate::state::tasks::TaskLookupState;

/// Validate the task-id form input before any network call.
fn validate_task_id(input: &str) -> Result<String, &'static str> {
    let id = input.trim();
    if id.is_empty() {
        return Err("Enter a task ID first.");
    }
    Ok(id.to_owned())
}

/// One-line summary of a task's current phase.
fn status_summary(status: &TaskStatus) -> String {
    match status.provider.as_deref() {
        Some(provider) => format!("{} ({provider})", status.status),
        None => status.status.clone(),
    }
}

/// Refresh the lookup state for one task: status first, then the result
/// payload once the backend reports completion.
#[cfg(feature = "hydrate")]
async fn run_lookup(token: String, task_id: String, lookup: RwSignal<TaskLookupState>) {
    match crate::net::api::fetch_task_status(&token, &task_id).await {
        Ok(status) => {
            let completed = status.status == "completed";
            lookup.update(|s| {
                s.status = Some(status);
                s.error = None;
            });
            if completed {
                match crate::net::api::fetch_task_result(&token, &task_id).await {
                    Ok(result) => lookup.update(|s| s.result = Some(result)),
                    Err(e) => lookup.update(|s| s.error = Some(e)),
                }
            }
            lookup.update(|s| s.pending = false);
        }
        Err(e) => lookup.update(|s| {
            s.pending = false;
            s.error = Some(e);
        }),
    }
}

/// Dashboard page — provider inventory plus the OCR task status checker.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let providers = expect_context::<RwSignal<ProvidersState>>();
    let lookup = expect_context::<RwSignal<TaskLookupState>>();

    // Fetch the provider inventory once the session is ready.
    let requested_providers = RwSignal::new(false);
    Effect::new(move || {
        if requested_providers.get() {
            return;
        }
        if !session.get().authenticated() {
            return;
        }
        requested_providers.set(true);
        providers.update(|s| s.loading = true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_providers().await {
                Some(items) => providers.update(|s| {
                    s.items = items;
                    s.loading = false;
                    s.error = None;
                }),
                None => providers.update(|s| {
                    s.loading = false;
                    s.error = Some("Could not load providers.".to_owned());
                }),
            }
        });
    });

    // Keep refreshing a looked-up task while the backend is still working
    // on it.
    #[cfg(feature = "hydrate")]
    {
        let poll_alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
        let poll_alive_task = poll_alive.clone();
        let session_poll = session;
        let lookup_poll = lookup;
        leptos::task::spawn_local(async move {
            loop {
                gloo_timers::future::sleep(std::time::Duration::from_secs(3)).await;
                if !poll_alive_task.load(std::sync::atomic::Ordering::Relaxed) {
                    break;
                }
                let state = lookup_poll.get_untracked();
                if state.pending || !state.awaiting_completion() {
                    continue;
                }
                let Some(task_id_value) = state.task_id else {
                    continue;
                };
                let Some(token) = session_poll.get_untracked().token else {
                    continue;
                };
                run_lookup(token, task_id_value, lookup_poll).await;
            }
        });
        on_cleanup(move || poll_alive.store(false, std::sync::atomic::Ordering::Relaxed));
    }

    let task_id = RwSignal::new(String::new());
    let on_check = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if lookup.get().pending {
            return;
        }
        let task_id_value = match validate_task_id(&task_id.get()) {
            Ok(value) => value,
            Err(message) => {
                lookup.update(|s| s.error = Some(message.to_owned()));
                return;
            }
        };
        let Some(token) = session.get().token else {
            return;
        };
        lookup.update(|s| {
            s.task_id = Some(task_id_value.clone());
            s.status = None;
            s.result = None;
            s.error = None;
            s.pending = true;
        });
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(run_lookup(token, task_id_value, lookup));
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (token, task_id_value);
        }
    };

    view! {
        <div class="dashboard-page">
            <header class="dashboard-header">
                <h1>"OCR Service"</h1>
                <nav class="dashboard-nav">
                    <a href="/settings/profile" class="dashboard-nav__link">"Profile"</a>
                </nav>
            </header>
            <Show when=move || session.get().authenticated()>
                <main class="dashboard-main">
                    <section class="providers-section">
                        <h2>"Providers"</h2>
                        <Show when=move || providers.get().loading>
                            <p class="providers-loading">"Loading providers..."</p>
                        </Show>
                        <Show when=move || providers.get().error.is_some()>
                            <p class="providers-error">
                                {move || providers.get().error.unwrap_or_default()}
                            </p>
                        </Show>
                        <ul class="provider-list">
                            <For
                                each=move || providers.get().items
                                key=|p| p.name.clone()
                                children=move |p| view! { <ProviderCard provider=p/> }
                            />
                        </ul>
                        <Show when=move || !providers.get().keyed_provider_names().is_empty()>
                            <p class="providers-hint">
                                {move || {
                                    format!(
                                        "Vendor API keys required for: {}",
                                        providers.get().keyed_provider_names().join(", ")
                                    )
                                }}
                            </p>
                        </Show>
                    </section>
                    <section class="lookup-section">
                        <h2>"Task Status"</h2>
                        <form class="lookup-form" on:submit=on_check>
                            <input
                                class="lookup-input"
                                type="text"
                                placeholder="Task ID"
                                prop:value=move || task_id.get()
                                on:input=move |ev| task_id.set(event_target_value(&ev))
                            />
                            <button
                                class="lookup-button"
                                type="submit"
                                disabled=move || lookup.get().pending
                            >
                                "Check Status"
                            </button>
                        </form>
                        <Show when=move || lookup.get().status.is_some()>
                            <p class="lookup-status">
                                {move || {
                                    lookup
                                        .get()
                                        .status
                                        .map(|s| status_summary(&s))
                                        .unwrap_or_default()
                                }}
                            </p>
                        </Show>
                        <Show when=move || lookup.get().result.is_some()>
                            <pre class="lookup-result">
                                {move || {
                                    lookup
                                        .get()
                                        .result
                                        .and_then(|r| r.raw_text().map(ToOwned::to_owned))
                                        .unwrap_or_default()
                                }}
                            </pre>
                        </Show>
                        <Show when=move || {
                            lookup.get().result.is_some_and(|r| r.page_count().is_some())
                        }>
                            <p class="lookup-pages">
                                {move || {
                                    lookup
                                        .get()
                                        .result
                                        .and_then(|r| r.page_count())
                                        .map(|n| format!("{n} pages"))
                                        .unwrap_or_default()
                                }}
                            </p>
                        </Show>
                        <Show when=move || lookup.get().error.is_some()>
                            <p class="lookup-error">
                                {move || lookup.get().error.unwrap_or_default()}
                            </p>
                        </Show>
                    </section>
                </main>
            </Show>
        </div>
    }
}

//! Login page posting SSO credentials to the backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the only public route and the only place a session gets
//! established. On success the token is persisted and the user lands on the
//! dashboard; the route guard never interferes because the login path is a
//! permanent member of the public route set.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;

#[cfg(feature = "hydrate")]
use crate::state::session::{SessionState, establish_session};

/// Validate raw form input before any network call.
fn validate_login_input(user: &str, password: &str) -> Result<(String, String), &'static str> {
    let user = user.trim();
    if user.is_empty() || password.is_empty() {
        return Err("Enter both email/NIP and password.");
    }
    Ok((user.to_owned(), password.to_owned()))
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let user = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    let session = expect_context::<RwSignal<SessionState>>();
    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (user_value, password_value) = match validate_login_input(&user.get(), &password.get())
        {
            Ok(values) => values,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Signing in...".to_owned());

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::login(&user_value, &password_value).await {
                    Ok(resp) => {
                        if let Some(token) = resp.token {
                            establish_session(session, token, resp.user);
                            navigate("/", NavigateOptions::default());
                        } else {
                            info.set("Login succeeded but no session token was returned.".to_owned());
                            busy.set(false);
                        }
                    }
                    Err(e) => {
                        info.set(e);
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (user_value, password_value);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"OCR Service"</h1>
                <p class="login-card__subtitle">"Sign in with your SSO account"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="text"
                        placeholder="Email or NIP/NPP"
                        prop:value=move || user.get()
                        on:input=move |ev| user.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Sign In"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
            </div>
        </div>
    }
}

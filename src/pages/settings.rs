//! Profile settings page for the signed-in user.

#[cfg(test)]
#[path = "settings_test.rs"]
mod settings_test;

use leptos::prelude::*;

use crate::net::types::User;
use crate::state::session::{SessionState, clear_session};

/// Label/value rows for the profile fields the SSO upstream provided.
fn profile_rows(user: &User) -> Vec<(&'static str, String)> {
    let mut rows = Vec::new();
    if let Some(email) = &user.email {
        rows.push(("Email", email.clone()));
    }
    if let Some(name) = &user.name {
        rows.push(("Name", name.clone()));
    }
    if let Some(nip) = &user.nip {
        rows.push(("NIP/NPP", nip.clone()));
    }
    if let Some(status) = &user.status {
        rows.push(("Status", status.clone()));
    }
    if user.is_admin {
        rows.push(("Role", "Administrator".to_owned()));
    }
    rows
}

/// Profile page — shows the signed-in identity and the sign-out action.
#[component]
pub fn ProfilePage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    let on_sign_out = move |_| {
        // Clearing the session is enough: the route guard sees the token
        // disappear and sends this page to the login screen.
        clear_session(session);
    };

    view! {
        <div class="profile-page">
            <header class="profile-header">
                <a href="/" class="profile-header__back">"Dashboard"</a>
                <h1>"Profile"</h1>
            </header>
            <Show when=move || session.get().authenticated()>
                <main class="profile-main">
                    {move || match session.get().user {
                        Some(user) => {
                            let rows = profile_rows(&user);
                            view! {
                                <dl class="profile-fields">
                                    {rows
                                        .into_iter()
                                        .map(|(label, value)| {
                                            view! {
                                                <div class="profile-field">
                                                    <dt>{label}</dt>
                                                    <dd>{value}</dd>
                                                </div>
                                            }
                                        })
                                        .collect_view()}
                                </dl>
                            }
                                .into_any()
                        }
                        None => {
                            view! {
                                <p class="profile-note">
                                    "Profile details are available after your next sign-in."
                                </p>
                            }
                                .into_any()
                        }
                    }}
                    <button class="profile-signout" on:click=on_sign_out>
                        "Sign Out"
                    </button>
                </main>
            </Show>
        </div>
    }
}

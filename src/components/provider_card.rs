//! Card component for OCR provider entries on the dashboard.

use leptos::prelude::*;

use crate::net::types::ProviderInfo;

/// A list entry describing one OCR provider.
#[component]
pub fn ProviderCard(provider: ProviderInfo) -> impl IntoView {
    let requires_key = provider.requires_api_key;
    view! {
        <li class="provider-card">
            <span class="provider-card__name">{provider.display_name.clone()}</span>
            <span class="provider-card__id">{provider.name.clone()}</span>
            <Show when=move || requires_key>
                <span class="provider-card__badge">"API key required"</span>
            </Show>
        </li>
    }
}

//! OCR provider inventory state for the dashboard.

#[cfg(test)]
#[path = "providers_test.rs"]
mod providers_test;

use crate::net::types::ProviderInfo;

/// Shared provider list state backed by `GET /api/v1/providers`.
#[derive(Clone, Debug, Default)]
pub struct ProvidersState {
    pub items: Vec<ProviderInfo>,
    pub loading: bool,
    pub error: Option<String>,
}

impl ProvidersState {
    /// Names of providers that need a configured vendor API key, for the
    /// dashboard's setup hints.
    pub fn keyed_provider_names(&self) -> Vec<String> {
        self.items
            .iter()
            .filter(|p| p.requires_api_key)
            .map(|p| p.display_name.clone())
            .collect()
    }
}

use super::*;
use crate::net::types::ProviderInfo;

fn provider(name: &str, display_name: &str, requires_api_key: bool) -> ProviderInfo {
    ProviderInfo {
        name: name.to_owned(),
        display_name: display_name.to_owned(),
        requires_api_key,
        config_schema: serde_json::json!({}),
    }
}

#[test]
fn keyed_provider_names_filters_keyless_providers() {
    let state = ProvidersState {
        items: vec![
            provider("paddle_ocr", "PaddleOCR", false),
            provider("google_vision", "Google Vision", true),
            provider("mistral_ocr", "Mistral OCR", true),
        ],
        loading: false,
        error: None,
    };
    assert_eq!(
        state.keyed_provider_names(),
        vec!["Google Vision".to_owned(), "Mistral OCR".to_owned()]
    );
}

#[test]
fn keyed_provider_names_empty_for_default_state() {
    assert!(ProvidersState::default().keyed_provider_names().is_empty());
}

use super::*;

// =============================================================
// Helpers
// =============================================================

fn make_result(data: serde_json::Value) -> TaskResult {
    TaskResult {
        task_id: "t-1".to_owned(),
        status: "completed".to_owned(),
        data: Some(data),
    }
}

// =============================================================
// Login response decoding
// =============================================================

#[test]
fn login_response_decodes_success_body() {
    let body = serde_json::json!({
        "success": true,
        "message": "Login successful",
        "token": "abc123",
        "user": {
            "email": "user@example.com",
            "name": "Alice",
            "nip": "198001012005012001",
            "is_admin": false,
            "status": "active"
        }
    });
    let resp: LoginResponse = serde_json::from_value(body).expect("decode");
    assert!(resp.success);
    assert_eq!(resp.token.as_deref(), Some("abc123"));
    let user = resp.user.expect("user present");
    assert_eq!(user.name.as_deref(), Some("Alice"));
    assert!(!user.is_admin);
}

#[test]
fn user_decodes_with_missing_profile_fields() {
    let body = serde_json::json!({
        "email": null,
        "name": null,
        "nip": null,
        "status": null
    });
    let user: User = serde_json::from_value(body).expect("decode");
    assert_eq!(user.email, None);
    assert!(!user.is_admin);
}

// =============================================================
// Provider list decoding
// =============================================================

#[test]
fn provider_info_decodes_listing_entry() {
    let body = serde_json::json!({
        "name": "google_vision",
        "display_name": "Google Vision",
        "requires_api_key": true,
        "config_schema": {"api_key": {"type": "string"}}
    });
    let provider: ProviderInfo = serde_json::from_value(body).expect("decode");
    assert_eq!(provider.name, "google_vision");
    assert!(provider.requires_api_key);
}

// =============================================================
// Task status / result payloads
// =============================================================

#[test]
fn task_status_decodes_transient_phase() {
    let body = serde_json::json!({
        "task_id": "t-1",
        "status": "processed 2/3 pages",
        "provider": "paddle_ocr"
    });
    let status: TaskStatus = serde_json::from_value(body).expect("decode");
    assert_eq!(status.status, "processed 2/3 pages");
}

#[test]
fn raw_text_reads_result_payload() {
    let result = make_result(serde_json::json!({
        "status": "success",
        "raw_text": "INVOICE 2024-001",
        "provider": "paddle_ocr"
    }));
    assert_eq!(result.raw_text(), Some("INVOICE 2024-001"));
}

#[test]
fn raw_text_absent_when_payload_missing() {
    let result = TaskResult {
        task_id: "t-1".to_owned(),
        status: "completed".to_owned(),
        data: None,
    };
    assert_eq!(result.raw_text(), None);
}

#[test]
fn page_count_present_only_for_multi_page_results() {
    let multi = make_result(serde_json::json!({"raw_text": "x", "page_count": 3}));
    assert_eq!(multi.page_count(), Some(3));

    let single = make_result(serde_json::json!({"raw_text": "x"}));
    assert_eq!(single.page_count(), None);
}

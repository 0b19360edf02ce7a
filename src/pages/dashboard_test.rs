use super::*;

#[test]
fn validate_task_id_trims_and_requires_value() {
    assert_eq!(
        validate_task_id("  6a1f-22  "),
        Ok("6a1f-22".to_owned())
    );
    assert_eq!(validate_task_id("   "), Err("Enter a task ID first."));
}

#[test]
fn status_summary_includes_provider_when_known() {
    let status = TaskStatus {
        task_id: "t-1".to_owned(),
        status: "processing 3 pages in parallel".to_owned(),
        provider: Some("mistral_ocr".to_owned()),
    };
    assert_eq!(
        status_summary(&status),
        "processing 3 pages in parallel (mistral_ocr)"
    );
}

#[test]
fn status_summary_without_provider_is_bare_status() {
    let status = TaskStatus {
        task_id: "t-1".to_owned(),
        status: "pending".to_owned(),
        provider: None,
    };
    assert_eq!(status_summary(&status), "pending");
}

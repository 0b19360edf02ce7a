//! REST API helpers for communicating with the OCR Service backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `None`/error since these endpoints
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option`/`Result` outputs instead of panics so fetch failures
//! degrade UI behavior without crashing hydration. A 401 on a protected
//! endpoint is where an expired-but-present token finally gets rejected.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{LoginResponse, ProviderInfo, TaskResult, TaskStatus};

#[cfg(any(test, feature = "hydrate"))]
fn task_status_endpoint(task_id: &str) -> String {
    format!("/api/v1/ocr/status/{task_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn task_result_endpoint(task_id: &str) -> String {
    format!("/api/v1/ocr/result/{task_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn bearer_value(token: &str) -> String {
    format!("Bearer {token}")
}

#[cfg(any(test, feature = "hydrate"))]
fn login_failed_message(status: u16) -> String {
    format!("login failed: {status}")
}

#[cfg(any(test, feature = "hydrate"))]
fn status_request_failed_message(status: u16) -> String {
    format!("status request failed: {status}")
}

#[cfg(any(test, feature = "hydrate"))]
fn result_request_failed_message(status: u16) -> String {
    format!("result request failed: {status}")
}

/// Authenticate via `POST /api/v1/auth/login`.
///
/// Returns the full login payload (token + profile) on success.
///
/// # Errors
///
/// Returns the backend's `detail` message when it provides one (wrong
/// credentials), otherwise a generic status-code message.
pub async fn login(user: &str, password: &str) -> Result<LoginResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "user": user, "password": password });
        let resp = gloo_net::http::Request::post("/api/v1/auth/login")
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            #[derive(serde::Deserialize)]
            struct ErrorBody {
                detail: Option<String>,
            }
            let status = resp.status();
            if let Ok(body) = resp.json::<ErrorBody>().await {
                if let Some(detail) = body.detail {
                    return Err(detail);
                }
            }
            return Err(login_failed_message(status));
        }
        resp.json::<LoginResponse>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (user, password);
        Err("not available on server".to_owned())
    }
}

/// Fetch the OCR provider inventory from `GET /api/v1/providers`.
/// Returns `None` on any failure or on the server.
pub async fn fetch_providers() -> Option<Vec<ProviderInfo>> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/v1/providers")
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        #[derive(serde::Deserialize)]
        struct ProvidersResponse {
            providers: Vec<ProviderInfo>,
        }
        let body: ProvidersResponse = resp.json().await.ok()?;
        Some(body.providers)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Check task progress via `GET /api/v1/ocr/status/{task_id}`.
///
/// # Errors
///
/// Returns an error string if the request fails, the task is unknown, or the
/// token is rejected.
pub async fn fetch_task_status(token: &str, task_id: &str) -> Result<TaskStatus, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&task_status_endpoint(task_id))
            .header("Authorization", &bearer_value(token))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(status_request_failed_message(resp.status()));
        }
        resp.json::<TaskStatus>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, task_id);
        Err("not available on server".to_owned())
    }
}

/// Fetch a completed task's payload via `GET /api/v1/ocr/result/{task_id}`.
///
/// # Errors
///
/// Returns an error string if the request fails or the task has not
/// completed yet.
pub async fn fetch_task_result(token: &str, task_id: &str) -> Result<TaskResult, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&task_result_endpoint(task_id))
            .header("Authorization", &bearer_value(token))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(result_request_failed_message(resp.status()));
        }
        resp.json::<TaskResult>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, task_id);
        Err("not available on server".to_owned())
    }
}

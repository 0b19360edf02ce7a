//! Wire-format DTOs for the OCR Service backend.
//!
//! DESIGN
//! ======
//! These types mirror the backend's JSON responses field-for-field so serde
//! can decode them without adaptation layers. Profile fields are optional
//! because the SSO upstream omits them for some account types.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Signed-in user profile as returned by the login endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub email: Option<String>,
    pub name: Option<String>,
    /// Employee number (NIP/NPP) for SSO accounts.
    pub nip: Option<String>,
    #[serde(default)]
    pub is_admin: bool,
    pub status: Option<String>,
}

/// Response body of `POST /api/v1/auth/login`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub success: bool,
    pub message: String,
    /// Opaque session token. The client stores it verbatim and never
    /// inspects its contents.
    pub token: Option<String>,
    pub user: Option<User>,
}

/// One OCR provider as listed by `GET /api/v1/providers`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProviderInfo {
    pub name: String,
    pub display_name: String,
    pub requires_api_key: bool,
    /// Open-ended per-provider configuration schema.
    #[serde(default)]
    pub config_schema: serde_json::Value,
}

/// Response body of `GET /api/v1/ocr/status/{task_id}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TaskStatus {
    pub task_id: String,
    /// Free-text processing phase; `"completed"` and `"failed"` are
    /// terminal.
    pub status: String,
    pub provider: Option<String>,
}

/// Response body of `GET /api/v1/ocr/result/{task_id}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TaskResult {
    pub task_id: String,
    pub status: String,
    /// Provider-specific result payload; shape varies per provider.
    pub data: Option<serde_json::Value>,
}

impl TaskResult {
    /// Recognized text from the result payload, when the provider reported
    /// any.
    pub fn raw_text(&self) -> Option<&str> {
        self.data.as_ref()?.get("raw_text")?.as_str()
    }

    /// Page count for multi-page documents; absent for single images.
    pub fn page_count(&self) -> Option<u64> {
        self.data.as_ref()?.get("page_count")?.as_u64()
    }
}

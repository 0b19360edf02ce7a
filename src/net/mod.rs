//! Networking modules for the OCR Service REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles REST calls and bearer-token attachment; `types` defines the
//! wire schema shared with the backend. Token expiry surfaces here as HTTP
//! 401s — never in the route guard, which checks presence only.

pub mod api;
pub mod types;

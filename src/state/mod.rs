//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`session`, `providers`, `tasks`) so individual
//! components can depend on small focused models. Each state struct lives in
//! an `RwSignal` provided via context at the app root.

pub mod providers;
pub mod session;
pub mod tasks;

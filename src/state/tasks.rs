//! OCR task lookup state for the dashboard status checker.
//!
//! DESIGN
//! ======
//! Separating lookup state from provider inventory keeps the status-poll
//! loop decoupled from the one-shot provider fetch. The looked-up task
//! survives navigation so returning to the dashboard keeps the last result.

#[cfg(test)]
#[path = "tasks_test.rs"]
mod tasks_test;

use crate::net::types::{TaskResult, TaskStatus};

/// State of the most recent task-status lookup.
#[derive(Clone, Debug, Default)]
pub struct TaskLookupState {
    /// Task id the current `status`/`result` belong to.
    pub task_id: Option<String>,
    pub status: Option<TaskStatus>,
    pub result: Option<TaskResult>,
    pub pending: bool,
    pub error: Option<String>,
}

impl TaskLookupState {
    /// True while the looked-up task is still being processed server-side
    /// and the poll loop should keep refreshing.
    pub fn awaiting_completion(&self) -> bool {
        self.status
            .as_ref()
            .is_some_and(|s| !is_terminal_status(&s.status))
    }
}

/// Whether a backend status string marks the end of processing.
///
/// The backend reports transient phases as free text ("pending",
/// "processing 3 pages in parallel", "processed 2/3 pages"); only
/// "completed" and "failed" are terminal.
pub fn is_terminal_status(status: &str) -> bool {
    matches!(status, "completed" | "failed")
}

//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use chrono::Local;

use crate::core::state::App;
use crate::feed::{CafeteriaQueue, QueueSnapshot};

/// Creates a test App with the sample event list and no reports.
pub fn test_app() -> App {
    App::new("Test Campus".to_string())
}

/// A fixed two-cafeteria snapshot for render tests.
pub fn test_snapshot() -> QueueSnapshot {
    QueueSnapshot {
        taken_at: Local::now(),
        queues: vec![
            CafeteriaQueue::new("North Commons", 6),
            CafeteriaQueue::new("Union Food Court", 19),
        ],
    }
}

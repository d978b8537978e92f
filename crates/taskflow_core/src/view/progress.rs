//! Aggregate progress counters over the task collection.

use crate::model::task::{Priority, Task};

/// Derived counters for the progress panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressSummary {
    pub total: usize,
    pub completed: usize,
    /// Open tasks (`total - completed`).
    pub pending: usize,
    pub high_priority: usize,
    /// Rounded completion rate in percent; 0 for an empty collection.
    pub completion_percent: u8,
}

/// Computes progress counters for the given tasks.
pub fn progress(tasks: &[Task]) -> ProgressSummary {
    let total = tasks.len();
    let completed = tasks.iter().filter(|task| task.completed).count();
    let high_priority = tasks
        .iter()
        .filter(|task| task.priority == Priority::High)
        .count();
    let completion_percent = if total == 0 {
        0
    } else {
        ((completed as f64 / total as f64) * 100.0).round() as u8
    };

    ProgressSummary {
        total,
        completed,
        pending: total - completed,
        high_priority,
        completion_percent,
    }
}

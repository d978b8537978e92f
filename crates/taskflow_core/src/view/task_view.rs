//! Task list filtering and ordering.
//!
//! # Responsibility
//! - Apply the status and priority selectors as independent, ANDed filters.
//! - Order the surviving tasks for display.
//!
//! # Invariants
//! - Sort is stable: incomplete before completed, then by priority rank;
//!   ties keep their relative order from the filtered sequence.
//! - Input collections are never mutated or reordered.

use crate::model::task::{Priority, Task};

/// Completion-state selector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusFilter {
    /// Every task regardless of completion state.
    #[default]
    All,
    /// Only open tasks (`completed == false`).
    Active,
    /// Only finished tasks (`completed == true`).
    Completed,
}

impl StatusFilter {
    fn matches(self, task: &Task) -> bool {
        match self {
            Self::All => true,
            Self::Active => !task.completed,
            Self::Completed => task.completed,
        }
    }
}

/// Priority selector, independent from the status selector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PriorityFilter {
    /// Every priority.
    #[default]
    All,
    Low,
    Medium,
    High,
}

impl PriorityFilter {
    fn selected(self) -> Option<Priority> {
        match self {
            Self::All => None,
            Self::Low => Some(Priority::Low),
            Self::Medium => Some(Priority::Medium),
            Self::High => Some(Priority::High),
        }
    }

    fn matches(self, task: &Task) -> bool {
        self.selected().map_or(true, |wanted| task.priority == wanted)
    }
}

/// Combined selector state for one view read.
///
/// Defaults to no filtering at all (`All`/`All`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaskViewQuery {
    pub status: StatusFilter,
    pub priority: PriorityFilter,
}

/// Computes the ordered display list for the given selector state.
///
/// Both filters apply as a logical AND. The result is sorted by a two-key
/// comparator: completion status first (incomplete before completed), then
/// priority rank ascending (high before medium before low). No tertiary key;
/// the stable sort keeps tied tasks in collection order.
pub fn visible_tasks(tasks: &[Task], query: &TaskViewQuery) -> Vec<Task> {
    let mut selected: Vec<Task> = tasks
        .iter()
        .filter(|task| query.status.matches(task) && query.priority.matches(task))
        .cloned()
        .collect();
    selected.sort_by_key(|task| (task.completed, task.priority.rank()));
    selected
}

//! Core domain logic for TaskFlow.
//! This crate is the single source of truth for business invariants.

pub mod logging;
pub mod model;
pub mod store;
pub mod view;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::task::{Priority, Task, TaskDraft, TaskId, TaskValidationError};
pub use store::outcome::{Outcome, OutcomeKind, OutcomeSink, Subject};
pub use store::seed::{SeedTask, StoreSeed};
pub use store::task_store::{StoreError, StoreResult, TaskStore};
pub use view::progress::{progress, ProgressSummary};
pub use view::task_view::{visible_tasks, PriorityFilter, StatusFilter, TaskViewQuery};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

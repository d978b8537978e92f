//! Task domain model.
//!
//! # Responsibility
//! - Define the canonical task record owned by the store.
//! - Provide constructors for live creation and seed/import paths.
//!
//! # Invariants
//! - `id` is stable and never reused for another task.
//! - `created_at` is set once at creation and never modified.
//! - `title` must be non-blank for any task accepted by the store.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for every task owned by the store.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type TaskId = Uuid;

/// Task urgency level.
///
/// Ordering for display is expressed through `rank()`, not through the
/// variant declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    /// Can wait.
    Low,
    /// Default urgency for new tasks.
    Medium,
    /// Should be handled first.
    High,
}

impl Priority {
    /// Sort ordinal: high(0) < medium(1) < low(2), ascending.
    pub fn rank(self) -> u8 {
        match self {
            Self::High => 0,
            Self::Medium => 1,
            Self::Low => 2,
        }
    }

    /// Stable lowercase name for diagnostics and log events.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

/// Validation error for task field values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskValidationError {
    /// Title is empty or whitespace-only.
    BlankTitle,
    /// Task id is the nil UUID.
    NilId,
}

impl Display for TaskValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankTitle => write!(f, "task title must not be blank"),
            Self::NilId => write!(f, "task id must not be the nil uuid"),
        }
    }
}

impl Error for TaskValidationError {}

/// Mutable-field payload shared by create and full-replacement update.
///
/// Carries every task attribute except `id` and `created_at`, which the
/// store assigns once and preserves thereafter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskDraft {
    /// Short task label shown to the user.
    pub title: String,
    /// Free-form details, may be empty.
    #[serde(default)]
    pub description: String,
    /// Urgency level.
    pub priority: Priority,
    /// Name of an existing category.
    pub category: String,
    /// Completion flag; new tasks default to open.
    #[serde(default)]
    pub completed: bool,
    /// Optional deadline in unix epoch milliseconds.
    #[serde(default)]
    pub due_date: Option<i64>,
}

impl TaskDraft {
    /// Checks field values that do not depend on store state.
    ///
    /// # Errors
    /// - `BlankTitle` when the title is empty after trimming.
    pub fn validate(&self) -> Result<(), TaskValidationError> {
        if self.title.trim().is_empty() {
            return Err(TaskValidationError::BlankTitle);
        }
        Ok(())
    }
}

/// Canonical task record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Stable global ID used for targeting update/toggle/delete calls.
    pub id: TaskId,
    /// Short task label shown to the user.
    pub title: String,
    /// Free-form details, may be empty.
    pub description: String,
    /// Completion flag.
    pub completed: bool,
    /// Urgency level.
    pub priority: Priority,
    /// Name of the category this task belongs to.
    pub category: String,
    /// Optional deadline in unix epoch milliseconds.
    pub due_date: Option<i64>,
    /// Unix epoch milliseconds at creation. Never rewritten.
    pub created_at: i64,
}

impl Task {
    /// Builds a task from a draft with a freshly generated stable ID.
    pub fn from_draft(draft: TaskDraft, created_at: i64) -> Self {
        Self::assemble(Uuid::new_v4(), draft, created_at)
    }

    /// Builds a task with a caller-provided stable ID.
    ///
    /// Used by seed/import paths where identity already exists externally.
    ///
    /// # Errors
    /// - `NilId` when `id` is the nil UUID.
    /// - `BlankTitle` when the draft title is blank.
    pub fn with_id(
        id: TaskId,
        draft: TaskDraft,
        created_at: i64,
    ) -> Result<Self, TaskValidationError> {
        let task = Self::assemble(id, draft, created_at);
        task.validate()?;
        Ok(task)
    }

    fn assemble(id: TaskId, draft: TaskDraft, created_at: i64) -> Self {
        Self {
            id,
            title: draft.title,
            description: draft.description,
            completed: draft.completed,
            priority: draft.priority,
            category: draft.category,
            due_date: draft.due_date,
            created_at,
        }
    }

    /// Checks record-level invariants.
    pub fn validate(&self) -> Result<(), TaskValidationError> {
        if self.id.is_nil() {
            return Err(TaskValidationError::NilId);
        }
        if self.title.trim().is_empty() {
            return Err(TaskValidationError::BlankTitle);
        }
        Ok(())
    }

    /// Replaces all mutable fields from the draft.
    ///
    /// `id` and `created_at` are untouched by construction.
    pub fn apply_draft(&mut self, draft: TaskDraft) {
        self.title = draft.title;
        self.description = draft.description;
        self.completed = draft.completed;
        self.priority = draft.priority;
        self.category = draft.category;
        self.due_date = draft.due_date;
    }

    /// Flips the completion flag.
    pub fn toggle_completed(&mut self) {
        self.completed = !self.completed;
    }
}

//! Categorized outcome events raised after store operations.
//!
//! # Responsibility
//! - Describe what happened in a form the presentation layer can render as
//!   user feedback (toast/alert/status line).
//! - Keep the store decoupled from any concrete feedback channel.
//!
//! # Invariants
//! - One outcome per completed operation; rejected duplicates are the only
//!   failure reported through this channel.

use crate::model::task::Task;
use serde::{Deserialize, Serialize};

/// What kind of state change (or rejection) the operation produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutcomeKind {
    Created,
    Updated,
    Deleted,
    DuplicateRejected,
}

/// Which collection the operation targeted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Subject {
    Task,
    Category,
}

/// Post-operation event delivered to subscribed sinks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    pub kind: OutcomeKind,
    pub subject: Subject,
    /// Short human-readable feedback line.
    pub message: String,
}

impl Outcome {
    pub(crate) fn task_added(task: &Task) -> Self {
        Self {
            kind: OutcomeKind::Created,
            subject: Subject::Task,
            message: format!("task added: {}", task.title),
        }
    }

    pub(crate) fn task_updated(task: &Task) -> Self {
        Self {
            kind: OutcomeKind::Updated,
            subject: Subject::Task,
            message: format!("task updated: {}", task.title),
        }
    }

    pub(crate) fn task_toggled(task: &Task) -> Self {
        let state = if task.completed {
            "task completed"
        } else {
            "task reopened"
        };
        Self {
            kind: OutcomeKind::Updated,
            subject: Subject::Task,
            message: format!("{state}: {}", task.title),
        }
    }

    pub(crate) fn task_deleted(task: &Task) -> Self {
        Self {
            kind: OutcomeKind::Deleted,
            subject: Subject::Task,
            message: format!("task deleted: {}", task.title),
        }
    }

    pub(crate) fn category_added(name: &str) -> Self {
        Self {
            kind: OutcomeKind::Created,
            subject: Subject::Category,
            message: format!("category added: {name}"),
        }
    }

    pub(crate) fn category_duplicate(name: &str) -> Self {
        Self {
            kind: OutcomeKind::DuplicateRejected,
            subject: Subject::Category,
            message: format!("category already exists: {name}"),
        }
    }
}

/// Receiver for outcome events.
///
/// Implemented by presentation-layer collaborators; the store never inspects
/// sink behavior and tolerates any number of subscribers, including zero.
pub trait OutcomeSink {
    fn publish(&self, outcome: &Outcome);
}

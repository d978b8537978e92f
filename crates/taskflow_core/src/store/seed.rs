//! Initial-state seeding for fresh sessions.
//!
//! # Responsibility
//! - Describe a deserializable starting collection of categories and tasks.
//! - Build a store from a seed under the same invariants as live mutations.
//!
//! # Invariants
//! - Seeding never bypasses store validation: blank titles, unknown
//!   categories, duplicate categories and duplicate/nil task ids are all
//!   rejected.
//! - Seed task order is preserved as given (first element = most recent).

use crate::model::task::{Priority, Task, TaskDraft, TaskId, TaskValidationError};
use crate::store::task_store::{now_epoch_ms, StoreResult, TaskStore};
use serde::{Deserialize, Serialize};

/// One task entry in a seed.
///
/// `id` and `created_at` are optional: import paths with external identity
/// pin them, demo data lets the store assign both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedTask {
    #[serde(default)]
    pub id: Option<TaskId>,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub priority: Priority,
    pub category: String,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub due_date: Option<i64>,
    #[serde(default)]
    pub created_at: Option<i64>,
}

impl SeedTask {
    fn into_task(self) -> Result<Task, TaskValidationError> {
        let created_at = self.created_at.unwrap_or_else(now_epoch_ms);
        let draft = TaskDraft {
            title: self.title,
            description: self.description,
            priority: self.priority,
            category: self.category,
            completed: self.completed,
            due_date: self.due_date,
        };
        match self.id {
            Some(id) => Task::with_id(id, draft, created_at),
            None => Ok(Task::from_draft(draft, created_at)),
        }
    }
}

/// Bootstrap collections for a fresh session.
///
/// A configuration input, not a persistence format: nothing written back,
/// nothing survives process restart.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreSeed {
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub tasks: Vec<SeedTask>,
}

impl StoreSeed {
    /// Built-in sample data for demo/bootstrap sessions.
    pub fn starter() -> Self {
        let sample = |title: &str, description: &str, priority: Priority, category: &str| {
            SeedTask {
                id: None,
                title: title.to_string(),
                description: description.to_string(),
                priority,
                category: category.to_string(),
                completed: false,
                due_date: None,
                created_at: None,
            }
        };

        Self {
            categories: vec![
                "Work".to_string(),
                "Personal".to_string(),
                "Shopping".to_string(),
            ],
            tasks: vec![
                sample(
                    "Prepare project update",
                    "Collect status notes before the weekly sync",
                    Priority::High,
                    "Work",
                ),
                sample(
                    "Book dentist appointment",
                    "",
                    Priority::Medium,
                    "Personal",
                ),
                sample(
                    "Buy groceries",
                    "Milk, bread, coffee",
                    Priority::Low,
                    "Shopping",
                ),
            ],
        }
    }
}

impl TaskStore {
    /// Builds a store pre-populated from the seed.
    ///
    /// Categories are added first (in seed order), then tasks; both go
    /// through the regular invariant checks.
    ///
    /// # Errors
    /// - Any `StoreError` a live mutation would produce for the same input,
    ///   plus `DuplicateTaskId` for id collisions inside the seed.
    pub fn from_seed(seed: StoreSeed) -> StoreResult<Self> {
        let mut store = Self::new();
        for name in seed.categories {
            store.add_category(name)?;
        }
        for entry in seed.tasks {
            let task = entry.into_task()?;
            store.insert_seed_task(task)?;
        }
        Ok(store)
    }
}

//! Authoritative in-memory task/category store.
//!
//! # Responsibility
//! - Provide stable create/update/toggle/delete entry points for tasks and
//!   category add for the category list.
//! - Enforce store invariants on every mutation path.
//! - Publish one outcome event per completed operation.
//!
//! # Invariants
//! - Task ids are unique among live tasks; `id`/`created_at` never change
//!   after create.
//! - Category names are unique (case-sensitive exact match), kept in
//!   insertion order.
//! - Tasks are kept most-recent-first: create prepends, update/toggle keep
//!   position, delete removes.

use crate::model::task::{Task, TaskDraft, TaskId, TaskValidationError};
use crate::store::outcome::{Outcome, OutcomeSink};
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

pub type StoreResult<T> = Result<T, StoreError>;

/// Semantic errors for store mutations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Field-level task validation failed.
    Validation(TaskValidationError),
    /// Task references a category name the store does not know.
    UnknownCategory(String),
    /// Category name is empty or whitespace-only.
    InvalidCategoryName(String),
    /// Category name already present (exact match).
    DuplicateCategory(String),
    /// No live task carries this id.
    TaskNotFound(TaskId),
    /// Seed input re-used an existing task id.
    DuplicateTaskId(TaskId),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::UnknownCategory(name) => write!(f, "unknown category: `{name}`"),
            Self::InvalidCategoryName(name) => write!(f, "invalid category name: `{name}`"),
            Self::DuplicateCategory(name) => write!(f, "category already exists: `{name}`"),
            Self::TaskNotFound(id) => write!(f, "task not found: {id}"),
            Self::DuplicateTaskId(id) => write!(f, "task id already in use: {id}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            _ => None,
        }
    }
}

impl From<TaskValidationError> for StoreError {
    fn from(value: TaskValidationError) -> Self {
        Self::Validation(value)
    }
}

/// In-memory store owning the task and category collections.
///
/// State lives only for the process lifetime; a fresh session starts empty
/// or from a seed (see `store::seed`).
#[derive(Default)]
pub struct TaskStore {
    tasks: Vec<Task>,
    categories: Vec<String>,
    sinks: Vec<Arc<dyn OutcomeSink>>,
}

impl std::fmt::Debug for TaskStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TaskStore")
            .field("tasks", &self.tasks)
            .field("categories", &self.categories)
            .field("sinks", &self.sinks.len())
            .finish()
    }
}

impl TaskStore {
    /// Creates an empty store with no subscribers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers one outcome sink.
    ///
    /// Sinks receive every outcome published after subscription, in
    /// registration order.
    pub fn subscribe(&mut self, sink: Arc<dyn OutcomeSink>) {
        self.sinks.push(sink);
    }

    /// Read-only view of the task collection, most-recent-first.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Read-only view of category names in insertion order.
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Returns one task by stable id.
    pub fn task(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    /// Creates a new task from the draft and prepends it to the collection.
    ///
    /// Assigns a fresh unique id and `created_at = now`.
    ///
    /// # Errors
    /// - `Validation(BlankTitle)` for a blank title.
    /// - `UnknownCategory` when the draft references an unknown category.
    pub fn create_task(&mut self, draft: TaskDraft) -> StoreResult<Task> {
        draft.validate()?;
        self.ensure_known_category(&draft.category)?;

        let task = Task::from_draft(draft, now_epoch_ms());
        self.tasks.insert(0, task.clone());

        info!(
            "event=task_created module=store status=ok id={} priority={} tasks={}",
            task.id,
            task.priority.as_str(),
            self.tasks.len()
        );
        self.emit(Outcome::task_added(&task));
        Ok(task)
    }

    /// Replaces all mutable fields of the task with `id` from the draft.
    ///
    /// `id` and `created_at` are preserved; the task keeps its position in
    /// the collection.
    ///
    /// # Errors
    /// - `Validation(BlankTitle)` for a blank title.
    /// - `UnknownCategory` when the draft references an unknown category.
    /// - `TaskNotFound` when no live task carries `id`.
    pub fn update_task(&mut self, id: TaskId, draft: TaskDraft) -> StoreResult<Task> {
        draft.validate()?;
        self.ensure_known_category(&draft.category)?;

        let task = self
            .tasks
            .iter_mut()
            .find(|task| task.id == id)
            .ok_or(StoreError::TaskNotFound(id))?;
        task.apply_draft(draft);
        let updated = task.clone();

        info!(
            "event=task_updated module=store status=ok id={} priority={}",
            updated.id,
            updated.priority.as_str()
        );
        self.emit(Outcome::task_updated(&updated));
        Ok(updated)
    }

    /// Flips the completion flag of the task with `id`.
    ///
    /// # Errors
    /// - `TaskNotFound` when no live task carries `id`.
    pub fn toggle_complete(&mut self, id: TaskId) -> StoreResult<Task> {
        let task = self
            .tasks
            .iter_mut()
            .find(|task| task.id == id)
            .ok_or(StoreError::TaskNotFound(id))?;
        task.toggle_completed();
        let toggled = task.clone();

        info!(
            "event=task_toggled module=store status=ok id={} completed={}",
            toggled.id, toggled.completed
        );
        self.emit(Outcome::task_toggled(&toggled));
        Ok(toggled)
    }

    /// Removes the task with `id` and returns it.
    ///
    /// The id is never reused: fresh ids come from random v4 generation, not
    /// from recycling freed slots.
    ///
    /// # Errors
    /// - `TaskNotFound` when no live task carries `id`; the collection is
    ///   unchanged in that case.
    pub fn delete_task(&mut self, id: TaskId) -> StoreResult<Task> {
        let index = self
            .tasks
            .iter()
            .position(|task| task.id == id)
            .ok_or(StoreError::TaskNotFound(id))?;
        let removed = self.tasks.remove(index);

        info!(
            "event=task_deleted module=store status=ok id={} tasks={}",
            removed.id,
            self.tasks.len()
        );
        self.emit(Outcome::task_deleted(&removed));
        Ok(removed)
    }

    /// Appends one category name to the end of the category list.
    ///
    /// # Errors
    /// - `InvalidCategoryName` for a blank name.
    /// - `DuplicateCategory` when the exact name is already present; the
    ///   collection is unchanged and a `duplicate-rejected` outcome is
    ///   published so the caller can surface the refusal.
    pub fn add_category(&mut self, name: impl Into<String>) -> StoreResult<String> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(StoreError::InvalidCategoryName(name));
        }
        if self.categories.iter().any(|existing| existing == &name) {
            warn!(
                "event=category_duplicate_rejected module=store status=rejected categories={}",
                self.categories.len()
            );
            self.emit(Outcome::category_duplicate(&name));
            return Err(StoreError::DuplicateCategory(name));
        }

        self.categories.push(name.clone());
        info!(
            "event=category_added module=store status=ok categories={}",
            self.categories.len()
        );
        self.emit(Outcome::category_added(&name));
        Ok(name)
    }

    /// Inserts a pre-built task at the end of the collection.
    ///
    /// Seed-only path: preserves the given id/`created_at` and the seed's
    /// ordering instead of the prepend convention.
    pub(crate) fn insert_seed_task(&mut self, task: Task) -> StoreResult<()> {
        task.validate()?;
        self.ensure_known_category(&task.category)?;
        if self.tasks.iter().any(|existing| existing.id == task.id) {
            return Err(StoreError::DuplicateTaskId(task.id));
        }
        self.tasks.push(task);
        Ok(())
    }

    fn ensure_known_category(&self, name: &str) -> StoreResult<()> {
        if self.categories.iter().any(|existing| existing == name) {
            return Ok(());
        }
        Err(StoreError::UnknownCategory(name.to_string()))
    }

    fn emit(&self, outcome: Outcome) {
        for sink in &self.sinks {
            sink.publish(&outcome);
        }
    }
}

/// Current wall-clock time in unix epoch milliseconds.
///
/// A clock before the unix epoch collapses to 0 rather than failing the
/// mutation.
pub(crate) fn now_epoch_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as i64)
        .unwrap_or(0)
}

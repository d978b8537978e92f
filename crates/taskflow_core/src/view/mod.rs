//! Derived, stateless query layer over the task collection.
//!
//! # Responsibility
//! - Turn (tasks, filters) into an ordered display list.
//! - Derive aggregate progress counters.
//!
//! # Invariants
//! - Pure functions only; no view state, no caching, recomputed per call.

pub mod progress;
pub mod task_view;

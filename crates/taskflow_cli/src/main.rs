//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `taskflow_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use taskflow_core::{progress, StoreSeed, TaskStore};

fn main() {
    println!("taskflow_core ping={}", taskflow_core::ping());
    println!("taskflow_core version={}", taskflow_core::core_version());

    match TaskStore::from_seed(StoreSeed::starter()) {
        Ok(store) => {
            let summary = progress(store.tasks());
            println!(
                "starter_seed categories={} tasks={} completed={} percent={}",
                store.categories().len(),
                summary.total,
                summary.completed,
                summary.completion_percent
            );
        }
        Err(err) => eprintln!("starter seed failed: {err}"),
    }
}

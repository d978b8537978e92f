use taskflow_core::{
    visible_tasks, Priority, PriorityFilter, StatusFilter, Task, TaskDraft, TaskStore,
    TaskViewQuery,
};

fn draft(title: &str, priority: Priority, category: &str) -> TaskDraft {
    TaskDraft {
        title: title.to_string(),
        description: String::new(),
        priority,
        category: category.to_string(),
        completed: false,
        due_date: None,
    }
}

fn task(title: &str, completed: bool, priority: Priority) -> Task {
    let mut payload = draft(title, priority, "Work");
    payload.completed = completed;
    Task::from_draft(payload, 1_700_000_000_000)
}

fn store_with_work_category() -> TaskStore {
    let mut store = TaskStore::new();
    store.add_category("Work").unwrap();
    store
}

fn titles(tasks: &[Task]) -> Vec<&str> {
    tasks.iter().map(|task| task.title.as_str()).collect()
}

#[test]
fn single_task_visible_with_default_filters() {
    let mut store = store_with_work_category();
    store.create_task(draft("X", Priority::High, "Work")).unwrap();

    let visible = visible_tasks(store.tasks(), &TaskViewQuery::default());
    assert_eq!(titles(&visible), vec!["X"]);
    assert!(!visible[0].completed);
}

#[test]
fn incomplete_tasks_order_by_priority_rank() {
    let mut store = store_with_work_category();
    store.create_task(draft("A", Priority::High, "Work")).unwrap();
    store.create_task(draft("B", Priority::Low, "Work")).unwrap();

    let visible = visible_tasks(store.tasks(), &TaskViewQuery::default());
    assert_eq!(titles(&visible), vec!["A", "B"]);
}

#[test]
fn completed_tasks_sort_after_incomplete_regardless_of_priority() {
    let mut store = store_with_work_category();
    let a = store.create_task(draft("A", Priority::High, "Work")).unwrap();
    store.create_task(draft("B", Priority::Low, "Work")).unwrap();

    store.toggle_complete(a.id).unwrap();

    let visible = visible_tasks(store.tasks(), &TaskViewQuery::default());
    assert_eq!(titles(&visible), vec!["B", "A"]);
}

#[test]
fn status_and_priority_filters_combine_with_and() {
    let tasks = vec![
        task("A", false, Priority::High),
        task("B", true, Priority::High),
        task("C", false, Priority::Medium),
    ];

    let query = TaskViewQuery {
        status: StatusFilter::Active,
        priority: PriorityFilter::High,
    };
    let visible = visible_tasks(&tasks, &query);
    assert_eq!(titles(&visible), vec!["A"]);
}

#[test]
fn status_filter_selects_matching_completion_state() {
    let tasks = vec![
        task("open", false, Priority::Medium),
        task("done", true, Priority::Medium),
    ];

    let active = visible_tasks(
        &tasks,
        &TaskViewQuery {
            status: StatusFilter::Active,
            priority: PriorityFilter::All,
        },
    );
    assert_eq!(titles(&active), vec!["open"]);

    let completed = visible_tasks(
        &tasks,
        &TaskViewQuery {
            status: StatusFilter::Completed,
            priority: PriorityFilter::All,
        },
    );
    assert_eq!(titles(&completed), vec!["done"]);
}

#[test]
fn priority_filter_requires_exact_match() {
    let tasks = vec![
        task("low", false, Priority::Low),
        task("medium", false, Priority::Medium),
        task("high", false, Priority::High),
    ];

    let visible = visible_tasks(
        &tasks,
        &TaskViewQuery {
            status: StatusFilter::All,
            priority: PriorityFilter::Medium,
        },
    );
    assert_eq!(titles(&visible), vec!["medium"]);
}

#[test]
fn default_query_applies_no_filtering() {
    assert_eq!(
        TaskViewQuery::default(),
        TaskViewQuery {
            status: StatusFilter::All,
            priority: PriorityFilter::All,
        }
    );

    let tasks = vec![
        task("one", false, Priority::Low),
        task("two", true, Priority::High),
    ];
    let visible = visible_tasks(&tasks, &TaskViewQuery::default());
    assert_eq!(visible.len(), 2);
}

#[test]
fn repeated_reads_return_identical_order() {
    let tasks = vec![
        task("a", false, Priority::Medium),
        task("b", true, Priority::High),
        task("c", false, Priority::High),
        task("d", false, Priority::Medium),
        task("e", true, Priority::Low),
    ];
    let query = TaskViewQuery::default();

    let first = visible_tasks(&tasks, &query);
    let second = visible_tasks(&tasks, &query);
    assert_eq!(first, second);
}

#[test]
fn sort_law_holds_over_mixed_collection() {
    let tasks = vec![
        task("a", true, Priority::High),
        task("b", false, Priority::Low),
        task("c", false, Priority::High),
        task("d", true, Priority::Low),
        task("e", false, Priority::Medium),
        task("f", true, Priority::Medium),
        task("g", false, Priority::High),
    ];

    let visible = visible_tasks(&tasks, &TaskViewQuery::default());
    assert_eq!(visible.len(), tasks.len());

    for window in visible.windows(2) {
        let (earlier, later) = (&window[0], &window[1]);
        assert!(
            !earlier.completed || later.completed,
            "incomplete task sorted after completed one"
        );
        if earlier.completed == later.completed {
            assert!(
                earlier.priority.rank() <= later.priority.rank(),
                "priority rank order violated within completion group"
            );
        }
    }
}

#[test]
fn ties_keep_collection_order() {
    let tasks = vec![
        task("first", false, Priority::Medium),
        task("second", false, Priority::Medium),
        task("third", false, Priority::Medium),
    ];

    let visible = visible_tasks(&tasks, &TaskViewQuery::default());
    assert_eq!(titles(&visible), vec!["first", "second", "third"]);
}

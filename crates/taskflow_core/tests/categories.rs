use taskflow_core::{StoreError, TaskStore};

#[test]
fn add_category_appends_in_insertion_order() {
    let mut store = TaskStore::new();

    store.add_category("Work").unwrap();
    store.add_category("Personal").unwrap();
    store.add_category("Shopping").unwrap();

    assert_eq!(store.categories(), ["Work", "Personal", "Shopping"]);
}

#[test]
fn duplicate_category_is_rejected_and_collection_unchanged() {
    let mut store = TaskStore::new();
    store.add_category("Work").unwrap();

    let err = store.add_category("Work").unwrap_err();
    assert_eq!(err, StoreError::DuplicateCategory("Work".to_string()));
    assert_eq!(store.categories(), ["Work"]);
}

#[test]
fn category_names_match_case_sensitively() {
    let mut store = TaskStore::new();

    store.add_category("Work").unwrap();
    store.add_category("work").unwrap();

    assert_eq!(store.categories(), ["Work", "work"]);
}

#[test]
fn blank_category_name_is_rejected() {
    let mut store = TaskStore::new();

    let err = store.add_category("   ").unwrap_err();
    assert_eq!(err, StoreError::InvalidCategoryName("   ".to_string()));
    assert!(store.categories().is_empty());
}

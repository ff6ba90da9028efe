use std::fs;
use std::path::Path;

use proptest::prelude::*;
use rstest::rstest;
use tempfile::TempDir;
use todo_core::models::{NewTodoData, UpdateTodoData};
use todo_core::query::TodoFilter;
use todo_core::repository::{JsonRepository, TodoRepository};

/// Helper function to open a repository on a fresh temporary file
fn setup_test_repo() -> (JsonRepository, TempDir) {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp directory");
    let path = temp_dir.path().join("todos.json");
    let repo = JsonRepository::open(path).expect("Failed to open test repository");
    (repo, temp_dir)
}

/// Helper function to create a test todo
fn create_test_todo(
    repo: &mut JsonRepository,
    text: &str,
    priority: Option<i64>,
    due: Option<&str>,
) -> u64 {
    repo.add_todo(NewTodoData {
        text: text.to_string(),
        priority,
        due: due.map(String::from),
    })
    .expect("Failed to create test todo")
}

fn reopen(path: &Path) -> JsonRepository {
    JsonRepository::open(path).expect("Failed to reopen repository")
}

#[test]
fn test_add_and_list_round_trip() {
    let (mut repo, _temp_dir) = setup_test_repo();
    assert!(repo.find_todos(&TodoFilter::default()).is_empty());

    let id = create_test_todo(&mut repo, "write tests", None, None);

    let todos = repo.find_todos(&TodoFilter::default());
    assert_eq!(todos.len(), 1);
    assert_eq!(todos[0].id, id);
    assert_eq!(todos[0].text, "write tests");
    assert!(!todos[0].done);
}

#[test]
fn test_changes_survive_reopen() {
    let (mut repo, _temp_dir) = setup_test_repo();
    let id = create_test_todo(&mut repo, "pay bills", Some(1), Some("2026-01-20"));
    repo.complete_todo(id).unwrap();

    let reopened = reopen(repo.path());
    let todo = reopened.find_todo_by_id(id).expect("todo should persist");
    assert_eq!(todo.text, "pay bills");
    assert_eq!(todo.priority, Some(1));
    assert_eq!(todo.due.as_deref(), Some("2026-01-20"));
    assert!(todo.done);
}

#[test]
fn test_complete_and_remove_workflow() {
    let (mut repo, _temp_dir) = setup_test_repo();
    let id = create_test_todo(&mut repo, "task", None, None);

    assert!(repo.complete_todo(id).unwrap());
    assert!(repo.complete_todo(id).unwrap(), "completing twice still succeeds");

    let todos = repo.find_todos(&TodoFilter::all());
    assert!(todos.iter().any(|t| t.id == id && t.done));
    assert!(repo.find_todos(&TodoFilter::default()).is_empty());

    assert!(repo.delete_todo(id).unwrap());
    assert!(repo.find_todos(&TodoFilter::all()).is_empty());
    assert!(!repo.delete_todo(id).unwrap());
}

#[test]
fn test_edit_and_filters() {
    let (mut repo, _temp_dir) = setup_test_repo();
    let t1 = create_test_todo(&mut repo, "pay bills", Some(1), Some("2026-01-20"));
    let t2 = create_test_todo(&mut repo, "buy milk", Some(2), Some("2026-02-01"));

    // Edit text and priority
    assert!(repo
        .update_todo(
            t2,
            UpdateTodoData {
                text: Some("buy almond milk".to_string()),
                priority: Some(Some(1)),
                ..Default::default()
            },
        )
        .unwrap());

    let edited = repo.find_todo_by_id(t2).unwrap();
    assert_eq!(edited.text, "buy almond milk");
    assert_eq!(edited.priority, Some(1));
    assert_eq!(edited.due.as_deref(), Some("2026-02-01"));

    // Filter by priority
    let p1 = repo.find_todos(&TodoFilter {
        show_all: true,
        priority: Some(1),
        ..Default::default()
    });
    assert_eq!(p1.len(), 2);

    // Due-before filter
    let due_early = repo.find_todos(&TodoFilter {
        show_all: true,
        due_before: Some("2026-01-25".to_string()),
        ..Default::default()
    });
    assert_eq!(due_early.len(), 1);
    assert_eq!(due_early[0].id, t1);
}

#[rstest]
#[case::query(Some("MILK"), None, None, vec![2])]
#[case::priority(None, Some(3), None, vec![3])]
#[case::cutoff(None, None, Some("2026-01-31"), vec![1])]
#[case::combined(Some("b"), Some(1), Some("2026-12-31"), vec![1])]
#[case::bad_cutoff(None, None, Some("soon"), vec![1, 2, 3, 4])]
fn test_list_filters(
    #[case] query: Option<&str>,
    #[case] priority: Option<i64>,
    #[case] due_before: Option<&str>,
    #[case] expected: Vec<u64>,
) {
    let (mut repo, _temp_dir) = setup_test_repo();
    create_test_todo(&mut repo, "pay bills", Some(1), Some("2026-01-20"));
    create_test_todo(&mut repo, "buy milk", Some(2), Some("2026-02-01"));
    create_test_todo(&mut repo, "call the bank", Some(3), Some("whenever"));
    create_test_todo(&mut repo, "stretch", None, None);

    let filter = TodoFilter {
        show_all: false,
        query: query.map(String::from),
        priority,
        due_before: due_before.map(String::from),
    };
    let ids: Vec<u64> = repo.find_todos(&filter).iter().map(|t| t.id).collect();
    assert_eq!(ids, expected);
}

#[test]
fn test_list_returns_a_copy() {
    let (mut repo, _temp_dir) = setup_test_repo();
    let id = create_test_todo(&mut repo, "original", None, None);

    let mut listed = repo.find_todos(&TodoFilter::all());
    listed[0].text = "changed locally".to_string();

    assert_eq!(repo.find_todo_by_id(id).unwrap().text, "original");
}

#[test]
fn test_ids_follow_current_maximum() {
    let (mut repo, _temp_dir) = setup_test_repo();
    let a = create_test_todo(&mut repo, "a", None, None);
    let b = create_test_todo(&mut repo, "b", None, None);
    let c = create_test_todo(&mut repo, "c", None, None);

    repo.delete_todo(a).unwrap();
    assert_eq!(create_test_todo(&mut repo, "d", None, None), c + 1);

    repo.delete_todo(c + 1).unwrap();
    repo.delete_todo(c).unwrap();
    assert_eq!(create_test_todo(&mut repo, "e", None, None), b + 1);
}

#[test]
fn test_corrupt_file_resets_to_empty() {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join("todos.json");
    fs::write(&path, "this is not json").unwrap();

    let mut repo = reopen(&path);
    assert!(repo.find_todos(&TodoFilter::all()).is_empty());
    assert_eq!(create_test_todo(&mut repo, "fresh start", None, None), 1);

    let raw: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(raw["todos"][0]["text"], "fresh start");
}

#[test]
fn test_file_format_matches_documented_layout() {
    let (mut repo, _temp_dir) = setup_test_repo();
    create_test_todo(&mut repo, "pay bills", Some(1), Some("2026-01-20"));
    create_test_todo(&mut repo, "stretch", None, None);

    let raw: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(repo.path()).unwrap()).unwrap();
    assert_eq!(
        raw,
        serde_json::json!({
            "todos": [
                { "id": 1, "text": "pay bills", "done": false, "priority": 1, "due": "2026-01-20" },
                { "id": 2, "text": "stretch", "done": false, "priority": null, "due": null }
            ]
        })
    );
}

proptest! {
    #[test]
    fn prop_ids_are_unique_and_increasing(texts in prop::collection::vec("[a-z]{1,12}", 1..20)) {
        let (mut repo, _temp_dir) = setup_test_repo();
        let ids: Vec<u64> = texts
            .iter()
            .map(|t| create_test_todo(&mut repo, t, None, None))
            .collect();

        prop_assert!(ids.windows(2).all(|w| w[0] < w[1]));
        prop_assert_eq!(ids[0], 1);
    }

    #[test]
    fn prop_priority_filter_is_exact(priorities in prop::collection::vec(prop::option::of(0i64..5), 1..20), wanted in 0i64..5) {
        let (mut repo, _temp_dir) = setup_test_repo();
        for (i, p) in priorities.iter().enumerate() {
            create_test_todo(&mut repo, &format!("todo {i}"), *p, None);
        }

        let matched = repo.find_todos(&TodoFilter {
            show_all: true,
            priority: Some(wanted),
            ..Default::default()
        });

        prop_assert!(matched.iter().all(|t| t.priority == Some(wanted)));
        prop_assert_eq!(matched.len(), priorities.iter().filter(|p| **p == Some(wanted)).count());
    }
}

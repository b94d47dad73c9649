use std::path::Path;
use taskin_types::core::search_path::generated_dir_for;
use taskin_types::{default_generated_dir, models, EXPORTS, VERSION};

#[test]
fn test_default_location_is_independent_of_cwd() {
    let expected = Path::new(env!("CARGO_MANIFEST_DIR")).join("generated");
    assert_eq!(default_generated_dir(), expected);

    let anchor = Path::new(env!("CARGO_MANIFEST_DIR")).join("src").join("lib.rs");
    assert_eq!(generated_dir_for(&anchor), expected);
    assert!(default_generated_dir().is_absolute());
}

#[test]
fn test_shipped_models_load() {
    let loaded = models().expect("generated/ should ship with the crate");

    let task = loaded.task();
    assert_eq!(task.name, "Task");
    assert_eq!(task.module, "task");
    for field in ["createdAt", "id", "status", "title", "type"] {
        assert!(task.is_required(field), "Task.{field} should be required");
    }
    assert!(!task.is_required("assignee"));

    let user = loaded.user();
    assert_eq!(user.required(), vec!["email", "id", "name"]);
}

#[test]
fn test_repeated_access_returns_same_models() {
    let first = models().unwrap();
    let second = models().unwrap();
    assert!(std::ptr::eq(first, second));
    assert!(std::ptr::eq(first.task(), second.task()));
}

#[test]
fn test_export_list_matches_resolvable_names() {
    let loaded = models().unwrap();
    assert_eq!(EXPORTS, ["Task", "User"]);
    assert_eq!(loaded.names(), &EXPORTS);

    let resolved: Vec<&str> = loaded.definitions().map(|d| d.name.as_str()).collect();
    assert_eq!(resolved, EXPORTS);
    for name in EXPORTS {
        assert!(loaded.get(name).is_some());
    }
    assert!(loaded.get("TaskStatus").is_none());
    assert!(loaded.get("task").is_none());
}

#[test]
fn test_version_constant() {
    assert_eq!(VERSION, "1.0.5");
}

use std::fs;

use chrono::Utc;
use todo::error::Error;
use todo::task::TaskStore;

fn store_with(dir: &tempfile::TempDir, descriptions: &[&str]) -> TaskStore {
    let mut store = TaskStore::new(dir.path().join("todos.json"));
    for description in descriptions {
        store.add(*description);
    }
    store
}

#[test]
fn complete_marks_only_the_target() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut store = store_with(&dir, &["a", "b", "c"]);
    let before = store.tasks().to_vec();

    store.complete(2).expect("complete");

    let after = store.tasks();
    assert_eq!(after[0], before[0]);
    assert_eq!(after[2], before[2]);
    assert!(after[1].done);
    assert!(after[1].completed_at.is_some());
    assert_eq!(after[1].description, "b");
    assert_eq!(after[1].created_at, before[1].created_at);
}

#[test]
fn delete_removes_exactly_one_and_shifts() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut store = store_with(&dir, &["first", "second", "third"]);
    let before = store.tasks().to_vec();

    let removed = store.delete(2).expect("delete");

    assert_eq!(removed, before[1]);
    assert_eq!(store.len(), 2);
    assert_eq!(store.tasks()[0], before[0]);
    assert_eq!(store.tasks()[1], before[2]);
}

#[test]
fn delete_last_task() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut store = store_with(&dir, &["only"]);

    store.delete(1).expect("delete");

    assert!(store.is_empty());
}

#[test]
fn update_changes_description_and_updated_at_only() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut store = store_with(&dir, &["a", "b"]);
    store.complete(1).expect("complete");
    let before = store.tasks().to_vec();

    store.update(1, "renamed").expect("update");

    let task = &store.tasks()[0];
    assert_eq!(task.description, "renamed");
    assert!(task.updated_at.is_some());
    assert_eq!(task.created_at, before[0].created_at);
    assert_eq!(task.done, before[0].done);
    assert_eq!(task.completed_at, before[0].completed_at);
    assert_eq!(store.tasks()[1], before[1]);
}

#[test]
fn out_of_range_indices_are_rejected_without_mutation() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut store = store_with(&dir, &["a", "b", "c"]);
    let before = store.tasks().to_vec();

    for index in [0, -1, 4] {
        assert!(matches!(
            store.complete(index),
            Err(Error::InvalidIndex { len: 3, .. })
        ));
        assert!(matches!(
            store.delete(index),
            Err(Error::InvalidIndex { len: 3, .. })
        ));
        assert!(matches!(
            store.update(index, "x"),
            Err(Error::InvalidIndex { len: 3, .. })
        ));
    }

    assert_eq!(store.tasks(), before.as_slice());
}

#[test]
fn empty_list_rejects_every_index() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut store = store_with(&dir, &[]);

    assert!(matches!(
        store.complete(1),
        Err(Error::InvalidIndex { index: 1, len: 0 })
    ));
}

#[test]
fn update_with_blank_text_is_empty_input() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut store = store_with(&dir, &["keep me"]);
    let before = store.tasks().to_vec();

    for text in ["", "   ", "\t\n"] {
        assert!(matches!(store.update(1, text), Err(Error::EmptyInput)));
    }

    assert_eq!(store.tasks(), before.as_slice());
}

#[test]
fn store_then_load_round_trips() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    for count in [0usize, 1, 5] {
        let descriptions: Vec<String> = (0..count).map(|i| format!("task {i}")).collect();
        let mut store = TaskStore::new(dir.path().join(format!("todos-{count}.json")));
        for description in &descriptions {
            store.add(description.as_str());
        }
        if count > 1 {
            store.complete(1)?;
            store.update(2, "edited")?;
        }
        store.store()?;

        let loaded = TaskStore::open(store.path())?;
        assert_eq!(loaded.tasks(), store.tasks());
    }
    Ok(())
}

#[test]
fn load_missing_file_is_empty() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let store = TaskStore::open(dir.path().join("missing.json"))?;
    assert!(store.is_empty());
    assert!(!dir.path().join("missing.json").exists());
    Ok(())
}

#[test]
fn load_zero_byte_file_is_empty() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("todos.json");
    fs::write(&path, "")?;

    let store = TaskStore::open(&path)?;
    assert!(store.is_empty());
    Ok(())
}

#[test]
fn load_null_document_is_empty() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("todos.json");
    fs::write(&path, "null")?;

    let mut store = TaskStore::open(&path)?;
    assert!(store.is_empty());

    store.add("after null");
    store.store()?;
    assert_eq!(TaskStore::open(&path)?.len(), 1);
    Ok(())
}

#[test]
fn load_malformed_file_is_parse_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("todos.json");
    for content in ["{not json", r#"{"task": "x"}"#, r#"[{"done": true}]"#] {
        fs::write(&path, content).expect("write");
        let result = TaskStore::open(&path);
        assert!(
            matches!(result, Err(Error::Parse { .. })),
            "content {content:?} should fail to parse"
        );
    }
}

#[test]
fn load_reads_files_from_prior_version() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("todos.json");
    fs::write(
        &path,
        r#"[{"task":"old task","done":false,"created_at":"2022-11-02T08:00:00.5-07:00","completed_at":"0001-01-01T00:00:00Z","updated_at":"0001-01-01T00:00:00Z"}]"#,
    )?;

    let store = TaskStore::open(&path)?;

    assert_eq!(store.len(), 1);
    let task = store.get(1)?;
    assert_eq!(task.description, "old task");
    assert!(!task.done);
    assert!(task.created_at < Utc::now());
    assert_eq!(task.completed_at, None);
    assert_eq!(task.updated_at, None);
    Ok(())
}

#[test]
fn stored_file_keeps_field_names() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let mut store = store_with(&dir, &["buy milk"]);
    store.store()?;

    let raw: serde_json::Value = serde_json::from_str(&fs::read_to_string(store.path())?)?;
    let task = &raw[0];
    assert_eq!(task["task"], "buy milk");
    assert_eq!(task["done"], false);
    assert!(task["created_at"].is_string());
    assert_eq!(task["completed_at"], "0001-01-01T00:00:00Z");
    assert_eq!(task["updated_at"], "0001-01-01T00:00:00Z");
    Ok(())
}

#[cfg(unix)]
#[test]
fn store_keeps_file_mode() -> Result<(), Box<dyn std::error::Error>> {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempfile::tempdir()?;
    let path = dir.path().join("todos.json");
    fs::write(&path, "[]")?;
    fs::set_permissions(&path, fs::Permissions::from_mode(0o644))?;

    let mut store = TaskStore::open(&path)?;
    store.add("x");
    store.store()?;

    assert_eq!(fs::metadata(&path)?.permissions().mode() & 0o777, 0o644);
    Ok(())
}

#[cfg(unix)]
#[test]
fn first_store_creates_readable_file() -> Result<(), Box<dyn std::error::Error>> {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempfile::tempdir()?;
    let mut store = store_with(&dir, &["x"]);
    store.store()?;

    assert_eq!(fs::metadata(store.path())?.permissions().mode() & 0o777, 0o644);
    Ok(())
}

#[test]
fn store_into_unwritable_location_is_io_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let blocker = dir.path().join("not-a-dir");
    fs::write(&blocker, "file").expect("write");

    let mut store = TaskStore::new(blocker.join("todos.json"));
    store.add("x");

    assert!(matches!(store.store(), Err(Error::Io(_))));
}

#[test]
fn buy_milk_scenario() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("todos.json");

    let mut store = TaskStore::open(&path)?;
    store.add("buy milk");
    store.store()?;

    let loaded = TaskStore::open(&path)?;
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded.pending(), 1);
    let task = loaded.get(1)?;
    assert_eq!(task.description, "buy milk");
    assert!(!task.done);
    Ok(())
}

use lazytask_core::{ErrorKind, Task, TaskManager, TrackerError};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn manager_in(dir: &TempDir) -> (TaskManager, PathBuf) {
    let path = dir.path().join("tasks.txt");
    (TaskManager::with_save_file(&path), path)
}

fn read(path: &Path) -> String {
    fs::read_to_string(path).unwrap()
}

fn assert_sorted(manager: &TaskManager) {
    let keys = manager
        .tasks()
        .iter()
        .map(Task::sort_key)
        .collect::<Vec<_>>();
    assert!(keys.windows(2).all(|pair| pair[0] <= pair[1]), "{keys:?}");
}

#[test]
fn todo_is_listed_with_its_position() {
    let dir = tempfile::tempdir().unwrap();
    let (mut manager, path) = manager_in(&dir);

    let result = manager.add_from_command("todo", "Buy milk");
    assert!(result.ok);
    assert!(result.error.is_none());
    assert_eq!(result.data, "[T][ ] Buy milk");
    assert_eq!(manager.list(), "1. [T][ ] Buy milk");
    assert_eq!(read(&path), "T | 0 | Buy milk\n");
}

#[test]
fn deadline_is_listed_with_its_due_date() {
    let dir = tempfile::tempdir().unwrap();
    let (mut manager, _) = manager_in(&dir);

    manager.add_from_command("deadline", "Submit report /by 31-12-2025 23:59");
    assert_eq!(
        manager.list(),
        "1. [D][ ] Submit report (by: 31-12-2025 23:59)"
    );
}

#[test]
fn reversed_event_is_rejected_without_touching_the_list() {
    let dir = tempfile::tempdir().unwrap();
    let (mut manager, path) = manager_in(&dir);

    let result =
        manager.add_from_command("event", "Trip /from 01-01-2026 09:00 /to 01-01-2026 08:00");
    assert!(!result.ok);
    assert_eq!(result.error_kind(), Some(ErrorKind::InvalidTimeRange));
    assert!(manager.is_empty());
    assert!(!path.exists());
}

#[test]
fn parse_failures_report_their_kind() {
    let dir = tempfile::tempdir().unwrap();
    let (mut manager, _) = manager_in(&dir);

    let cases = [
        ("todo", "   ", ErrorKind::InvalidTodo),
        ("deadline", "no separator", ErrorKind::InvalidDeadline),
        ("deadline", "x /by 31/12/2025", ErrorKind::BadDateFormat),
        ("event", "x /from 01-01-2026 09:00", ErrorKind::InvalidEvent),
        ("meeting", "x", ErrorKind::InvalidCommand),
    ];
    for (keyword, input, expected) in cases {
        let result = manager.add_from_command(keyword, input);
        assert!(!result.ok);
        assert_eq!(result.error_kind(), Some(expected), "{keyword} {input}");
    }
    assert!(manager.is_empty());
}

#[test]
fn mark_out_of_range_reports_no_task_found() {
    let dir = tempfile::tempdir().unwrap();
    let (mut manager, _) = manager_in(&dir);
    manager.add_from_command("todo", "a");
    manager.add_from_command("todo", "b");

    for index in [0, 3, 5] {
        let result = manager.mark_done(index);
        assert!(!result.ok);
        assert!(matches!(
            result.error,
            Some(TrackerError::NoTaskFound { len: 2, .. })
        ));
    }
    assert!(manager.tasks().iter().all(|task| !task.is_complete()));
}

#[test]
fn mark_and_unmark_report_noops_distinctly() {
    let dir = tempfile::tempdir().unwrap();
    let (mut manager, path) = manager_in(&dir);
    manager.add_from_command("todo", "Read book");

    let done = manager.mark_done(1);
    assert!(done.ok);
    assert_eq!(done.data, "[T][X] Read book");
    assert_eq!(read(&path), "T | 1 | Read book\n");

    fs::write(&path, "edited elsewhere\n").unwrap();
    let again = manager.mark_done(1);
    assert!(!again.ok);
    assert_eq!(again.error_kind(), Some(ErrorKind::InvalidCompletion));
    assert!(manager.tasks()[0].is_complete());
    assert_eq!(read(&path), "edited elsewhere\n");

    let undone = manager.mark_incomplete(1);
    assert!(undone.ok);
    assert_eq!(read(&path), "T | 0 | Read book\n");

    fs::write(&path, "edited elsewhere\n").unwrap();
    let undone_again = manager.mark_incomplete(1);
    assert!(!undone_again.ok);
    assert_eq!(undone_again.error_kind(), Some(ErrorKind::InvalidCompletion));
    assert!(!manager.tasks()[0].is_complete());
    assert_eq!(read(&path), "T | 0 | Read book\n");
}

#[test]
fn failed_resave_on_unmark_noop_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let missing_parent = dir.path().join("missing").join("tasks.txt");
    let mut manager = TaskManager::with_save_file(&missing_parent);
    manager.add_from_command("todo", "never done");

    let result = manager.mark_incomplete(1);
    assert!(!result.ok);
    assert_eq!(result.error_kind(), Some(ErrorKind::InvalidCompletion));
    assert!(result.data.starts_with("[T][ ] never done\n"));
    assert!(result.data.contains("could not be written"));
}

#[test]
fn list_stays_sorted_by_sort_key_after_mutations() {
    let dir = tempfile::tempdir().unwrap();
    let (mut manager, _) = manager_in(&dir);

    manager.add_from_command("deadline", "late /by 10-01-2026 10:00");
    manager.add_from_command("todo", "first todo");
    manager.add_from_command("event", "early /from 02-01-2026 10:00 /to 03-01-2026 10:00");
    manager.add_from_command("todo", "second todo");
    assert_sorted(&manager);

    let names = manager
        .tasks()
        .iter()
        .map(|task| task.name().to_string())
        .collect::<Vec<_>>();
    assert_eq!(names, vec!["first todo", "second todo", "early", "late"]);

    manager.mark_done(3);
    assert_sorted(&manager);
    manager.delete(1);
    assert_sorted(&manager);
    assert_eq!(manager.tasks()[0].name(), "second todo");
}

#[test]
fn repeated_delete_of_same_index_never_removes_a_task_twice() {
    let dir = tempfile::tempdir().unwrap();
    let (mut manager, path) = manager_in(&dir);
    manager.add_from_command("todo", "a");
    manager.add_from_command("todo", "b");

    let first = manager.delete(2);
    assert!(first.ok);
    assert_eq!(first.data, "[T][ ] b");

    let second = manager.delete(2);
    assert!(!second.ok);
    assert_eq!(second.error_kind(), Some(ErrorKind::NoTaskFound));

    let third = manager.delete(1);
    assert_eq!(third.data, "[T][ ] a");
    assert!(manager.is_empty());
    assert_eq!(read(&path), "");
}

#[test]
fn list_by_name_ignores_case_and_keeps_date_order_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let (mut manager, _) = manager_in(&dir);
    manager.add_from_command("todo", "banana");
    manager.add_from_command("todo", "Apple");
    manager.add_from_command("todo", "cherry");

    assert_eq!(
        manager.list_by_name(),
        "1. [T][ ] Apple\n2. [T][ ] banana\n3. [T][ ] cherry"
    );
    assert_eq!(manager.tasks()[0].name(), "banana");
}

#[test]
fn empty_list_renders_as_empty_string() {
    let dir = tempfile::tempdir().unwrap();
    let (manager, _) = manager_in(&dir);
    assert_eq!(manager.list(), "");
    assert_eq!(manager.list_by_name(), "");
}

#[test]
fn find_matches_case_insensitively_with_current_positions() {
    let dir = tempfile::tempdir().unwrap();
    let (mut manager, _) = manager_in(&dir);
    manager.add_from_command("todo", "Buy MILK");
    manager.add_from_command("todo", "walk dog");
    manager.add_from_command("deadline", "milk the cow /by 01-02-2026 06:00");

    let result = manager.find("milk");
    assert!(result.ok);
    assert_eq!(
        result.data,
        "1. [T][ ] Buy MILK\n3. [D][ ] milk the cow (by: 01-02-2026 06:00)"
    );
}

#[test]
fn find_without_matches_reports_empty_search() {
    let dir = tempfile::tempdir().unwrap();
    let (mut manager, _) = manager_in(&dir);
    manager.add_from_command("todo", "Buy milk");

    let result = manager.find("xyz");
    assert!(!result.ok);
    assert_eq!(result.error_kind(), Some(ErrorKind::SearchResultEmpty));
}

#[test]
fn load_recovers_valid_lines_and_reports_skipped_ones() {
    let dir = tempfile::tempdir().unwrap();
    let (mut manager, path) = manager_in(&dir);
    fs::write(&path, "T|1|Read book\nthis line is garbage\n\n").unwrap();

    let result = manager.load();
    assert!(result.ok);
    assert!(result.is_partial());
    assert_eq!(result.error_kind(), Some(ErrorKind::CorruptRecord));
    match result.error {
        Some(TrackerError::RecordsSkipped { lines }) => {
            assert_eq!(lines.len(), 1);
            assert_eq!(lines[0].0, 2);
        }
        other => panic!("unexpected error: {other:?}"),
    }

    assert_eq!(manager.len(), 1);
    assert_eq!(manager.tasks()[0].name(), "Read book");
    assert!(manager.tasks()[0].is_complete());
}

#[test]
fn load_sorts_tasks_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let (mut manager, path) = manager_in(&dir);
    fs::write(
        &path,
        "D | 0 | later | 05-05-2026 10:00\nE | 0 | sooner | 01-05-2026 10:00 | 02-05-2026 10:00\nT | 0 | todo\n",
    )
    .unwrap();

    let result = manager.load();
    assert!(result.ok);
    assert!(!result.is_partial());
    assert_eq!(
        manager.list(),
        "1. [T][ ] todo\n2. [E][ ] sooner (from: 01-05-2026 10:00 to: 02-05-2026 10:00)\n3. [D][ ] later (by: 05-05-2026 10:00)"
    );
}

#[test]
fn load_without_save_file_starts_empty_and_creates_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let (mut manager, path) = manager_in(&dir);

    let result = manager.load();
    assert!(!result.ok);
    assert_eq!(result.error_kind(), Some(ErrorKind::NoSaveFile));
    assert!(manager.is_empty());
    assert!(!path.exists());

    manager.add_from_command("todo", "first");
    assert!(path.exists());
}

#[test]
fn load_of_unreadable_file_reports_corrupt_file() {
    let dir = tempfile::tempdir().unwrap();
    let (mut manager, path) = manager_in(&dir);
    fs::write(&path, [0xff, 0xfe, 0x00, 0x41]).unwrap();

    let result = manager.load();
    assert!(!result.ok);
    assert_eq!(result.error_kind(), Some(ErrorKind::CorruptFile));
}

#[test]
fn failed_save_keeps_in_memory_state() {
    let dir = tempfile::tempdir().unwrap();
    let missing_parent = dir.path().join("missing").join("tasks.txt");
    let mut manager = TaskManager::with_save_file(&missing_parent);

    let added = manager.add_from_command("todo", "kept anyway");
    assert!(added.ok);
    assert!(added.is_partial());
    assert_eq!(added.error_kind(), Some(ErrorKind::FailToSave));
    assert_eq!(manager.len(), 1);

    let saved = manager.save();
    assert!(!saved.ok);
    assert_eq!(saved.error_kind(), Some(ErrorKind::FailToSave));
    assert_eq!(manager.len(), 1);
}

#[test]
fn saved_file_round_trips_through_a_new_manager() {
    let dir = tempfile::tempdir().unwrap();
    let (mut manager, path) = manager_in(&dir);
    manager.add_from_command("todo", "Buy milk");
    manager.add_from_command("event", "Trip /from 01-01-2026 09:00 /to 02-01-2026 09:00");
    manager.add_from_command("deadline", "Report /by 31-12-2025 23:59");
    manager.mark_done(2);
    assert!(manager.save().ok);

    let mut reloaded = TaskManager::with_save_file(&path);
    let result = reloaded.load();
    assert!(result.ok);
    assert!(result.error.is_none());
    assert_eq!(reloaded.list(), manager.list());
    assert_eq!(result.data, manager.list());
}

#[test]
fn added_task_is_always_findable() {
    let dir = tempfile::tempdir().unwrap();
    let (mut manager, _) = manager_in(&dir);
    for name in ["Plan Trip", "plan budget", "PLANT tree", "unplanned"] {
        manager.add_from_command("todo", name);
        let result = manager.find("PlAn");
        assert!(result.ok);
        assert!(result.data.contains(name), "{name} missing from {}", result.data);
    }
}

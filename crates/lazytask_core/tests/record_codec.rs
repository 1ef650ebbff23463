use lazytask_core::{decode, encode, parse_task, RecordError, Task, TaskKind};

#[test]
fn encode_writes_pipe_delimited_fields() {
    let mut todo = Task::todo("Read book").unwrap();
    todo.mark_complete();
    assert_eq!(encode(&todo), "T | 1 | Read book");

    let deadline = Task::deadline("Submit report", "31-12-2025 23:59").unwrap();
    assert_eq!(encode(&deadline), "D | 0 | Submit report | 31-12-2025 23:59");

    let event = Task::event("Trip", "01-01-2026 09:00", "01-01-2026 17:00").unwrap();
    assert_eq!(
        encode(&event),
        "E | 0 | Trip | 01-01-2026 09:00 | 01-01-2026 17:00"
    );
}

#[test]
fn encoding_is_stable_across_a_decode_cycle() {
    let commands = [
        ("todo", "Buy milk"),
        ("deadline", "Submit report /by 31-12-2025 23:59"),
        ("event", "Trip /from 01-01-2026 09:00 /to 03-01-2026 08:00"),
        ("event", "Call /from 29-02-2028 00:00 /to 29-02-2028 00:00"),
    ];
    for (keyword, input) in commands {
        let mut task = parse_task(keyword, input).unwrap();
        for complete in [false, true] {
            if complete {
                task.mark_complete();
            }
            let line = encode(&task);
            let decoded = decode(&line).unwrap();
            assert_eq!(decoded, task);
            assert_eq!(encode(&decoded), line);
        }
    }
}

#[test]
fn decode_accepts_compact_separators() {
    let task = decode("T|1|Read book").unwrap();
    assert_eq!(task.name(), "Read book");
    assert!(task.is_complete());
    assert_eq!(task.kind(), &TaskKind::Todo);
}

#[test]
fn decode_rejects_wrong_field_counts() {
    assert_eq!(
        decode("T | 0 | a | 01-01-2026 10:00").unwrap_err(),
        RecordError::FieldCount {
            tag: "T".to_string(),
            expected: 3,
            actual: 4,
        }
    );
    assert!(matches!(
        decode("D | 0 | a").unwrap_err(),
        RecordError::FieldCount { expected: 4, .. }
    ));
    assert!(matches!(
        decode("E | 0 | a | 01-01-2026 10:00").unwrap_err(),
        RecordError::FieldCount { expected: 5, .. }
    ));
}

#[test]
fn decode_rejects_unknown_types_and_flags() {
    assert_eq!(
        decode("X | 0 | a").unwrap_err(),
        RecordError::UnknownType("X".to_string())
    );
    assert_eq!(
        decode("T | yes | a").unwrap_err(),
        RecordError::InvalidCompletionFlag("yes".to_string())
    );
    assert!(decode("not a record").is_err());
}

#[test]
fn decode_rejects_invalid_dates_and_ranges() {
    assert!(matches!(
        decode("D | 0 | a | someday").unwrap_err(),
        RecordError::InvalidTask(_)
    ));
    assert!(matches!(
        decode("E | 0 | a | 02-01-2026 10:00 | 01-01-2026 10:00").unwrap_err(),
        RecordError::InvalidTask(_)
    ));
    assert!(matches!(
        decode("T | 0 |  ").unwrap_err(),
        RecordError::InvalidTask(_)
    ));
}

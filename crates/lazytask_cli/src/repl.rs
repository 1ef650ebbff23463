//! Read-eval-print loop over any line source and sink.

use crate::render::{render_greeting, render_step};
use crate::session::Session;
use lazytask_core::{CommandResult, TaskRepository};
use std::io::{self, BufRead, Write};

/// Output flavour of the loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Framed text for humans.
    Text,
    /// One JSON object per line for structured front ends.
    Json,
}

/// Runs the session until `bye` or end of input.
///
/// Blank lines are skipped without a reply. Bytes that are not valid UTF-8
/// are replaced rather than ending the session.
pub fn run<R: TaskRepository>(
    session: &mut Session<R>,
    mut input: impl BufRead,
    mut output: impl Write,
    mode: OutputMode,
) -> io::Result<()> {
    let load = session.start();
    match mode {
        OutputMode::Text => writeln!(output, "{}", render_greeting(&load, session.options()))?,
        OutputMode::Json => write_json(&mut output, &load)?,
    }
    output.flush()?;

    let mut buf = Vec::new();
    loop {
        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        let line = String::from_utf8_lossy(&buf);
        if line.trim().is_empty() {
            continue;
        }

        let step = session.execute(&line);
        match mode {
            OutputMode::Text => writeln!(output, "{}", render_step(&step, session.options()))?,
            OutputMode::Json => write_json(&mut output, &step.result)?,
        }
        output.flush()?;

        if step.exit {
            break;
        }
    }
    Ok(())
}

fn write_json(output: &mut impl Write, result: &CommandResult) -> io::Result<()> {
    let encoded = serde_json::to_string(&result.to_view()).map_err(io::Error::other)?;
    writeln!(output, "{encoded}")
}

#[cfg(test)]
mod tests {
    use super::{run, OutputMode};
    use crate::render::RenderOptions;
    use crate::session::Session;
    use lazytask_core::TaskManager;
    use std::io::Cursor;

    #[test]
    fn text_session_runs_until_bye() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tasks.txt");
        let mut session = Session::new(TaskManager::with_save_file(&path), RenderOptions::default());

        let input = Cursor::new("todo Buy milk\n\nlist\nbye\ntodo never added\n");
        let mut output = Vec::new();
        run(&mut session, input, &mut output, OutputMode::Text).unwrap();

        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("Welcome to"));
        assert!(text.contains("1. [T][ ] Buy milk"));
        assert!(text.contains("Always glad to help!"));
        assert_eq!(session.manager().len(), 1);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "T | 0 | Buy milk\n");
    }

    #[test]
    fn invalid_utf8_line_does_not_end_the_session() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tasks.txt");
        let mut session = Session::new(TaskManager::with_save_file(&path), RenderOptions::default());

        let mut bytes = b"todo a\n".to_vec();
        bytes.extend_from_slice(&[0xff, 0xfe, b'\n']);
        bytes.extend_from_slice(b"todo b\nbye\n");
        let mut output = Vec::new();
        run(&mut session, Cursor::new(bytes), &mut output, OutputMode::Text).unwrap();

        let text = String::from_utf8(output).unwrap();
        assert_eq!(session.manager().len(), 2);
        assert!(text.contains("I'm not sure what to do..."));
        assert!(text.contains("Always glad to help!"));
    }

    #[test]
    fn json_mode_emits_one_object_per_reply() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tasks.txt");
        let mut session = Session::new(TaskManager::with_save_file(&path), RenderOptions::default());

        let input = Cursor::new("todo a\nmark 9\n");
        let mut output = Vec::new();
        run(&mut session, input, &mut output, OutputMode::Json).unwrap();

        let lines = String::from_utf8(output).unwrap();
        let values = lines
            .lines()
            .map(|line| serde_json::from_str::<serde_json::Value>(line).unwrap())
            .collect::<Vec<_>>();
        assert_eq!(values.len(), 3);
        assert_eq!(values[0]["error_kind"], "NoSaveFile");
        assert_eq!(values[1]["ok"], true);
        assert_eq!(values[1]["data"], "[T][ ] a");
        assert!(values[1].get("error_kind").is_none());
        assert_eq!(values[2]["error_kind"], "NoTaskFound");
    }
}

//! Task list manager.
//!
//! # Responsibility
//! - Own the ordered task list and expose the user-facing operations.
//! - Orchestrate parsing and persistence for every mutation.
//!
//! # Invariants
//! - After every mutation the list is stably sorted by `Task::sort_key`.
//! - User-facing indices are 1-based positions in that sorted order.
//! - Every successful mutation rewrites the whole save file.
//! - A failed save never rolls back the in-memory list.

use crate::error::TrackerError;
use crate::model::task::Task;
use crate::parser::command::parse_task;
use crate::repo::task_file::{FileTaskRepository, StorageError, TaskRepository};
use crate::service::result::CommandResult;
use log::{info, warn};
use std::path::PathBuf;

/// Use-case facade over the task list and its repository.
pub struct TaskManager<R: TaskRepository = FileTaskRepository> {
    repo: R,
    tasks: Vec<Task>,
}

impl TaskManager<FileTaskRepository> {
    /// Creates an empty manager backed by the save file at `path`.
    ///
    /// Nothing is read until [`TaskManager::load`] is called.
    pub fn with_save_file(path: impl Into<PathBuf>) -> Self {
        Self::new(FileTaskRepository::new(path))
    }
}

impl<R: TaskRepository> TaskManager<R> {
    /// Creates an empty manager using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self {
            repo,
            tasks: Vec::new(),
        }
    }

    /// Current tasks in sort-key order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Parses `keyword` + `input` into a task and adds it to the list.
    ///
    /// # Contract
    /// - Success payload is the new task's display string.
    /// - Parse failures leave the list untouched.
    pub fn add_from_command(&mut self, keyword: &str, input: &str) -> CommandResult {
        let task = match parse_task(keyword, input) {
            Ok(task) => task,
            Err(err) => {
                info!(
                    "event=task_add module=service status=rejected error_kind={}",
                    err.kind()
                );
                return CommandResult::failure("I couldn't add that task!", "", err.into());
            }
        };

        let display = task.to_string();
        let kind = task.kind().label();
        self.tasks.push(task);
        self.sort_tasks();
        info!(
            "event=task_add module=service status=ok kind={} count={}",
            kind,
            self.tasks.len()
        );

        self.persisted(CommandResult::success(
            "Got it! This is what's up...",
            display,
        ))
    }

    /// Marks the task at 1-based `index` as complete.
    ///
    /// # Contract
    /// - Out-of-range index -> `NoTaskFound`, no effect.
    /// - Already complete -> `ok = false` with `InvalidCompletion`, no save.
    pub fn mark_done(&mut self, index: usize) -> CommandResult {
        let Some(position) = self.position(index) else {
            return self.no_task_found(index);
        };

        if !self.tasks[position].mark_complete() {
            info!("event=task_mark module=service status=noop");
            return CommandResult::failure(
                "Task is already completed!",
                self.tasks[position].to_string(),
                TrackerError::InvalidCompletion { complete: true },
            );
        }

        let display = self.tasks[position].to_string();
        self.sort_tasks();
        info!("event=task_mark module=service status=ok");
        self.persisted(CommandResult::success(
            "I've marked it as complete! Nice work!",
            display,
        ))
    }

    /// Marks the task at 1-based `index` as incomplete.
    ///
    /// # Contract
    /// - Out-of-range index -> `NoTaskFound`, no effect.
    /// - Already incomplete -> `ok = false` with `InvalidCompletion`.
    /// - The list is re-saved in both the transition and the no-op case; a
    ///   failed save on the no-op is appended to the payload.
    pub fn mark_incomplete(&mut self, index: usize) -> CommandResult {
        let Some(position) = self.position(index) else {
            return self.no_task_found(index);
        };

        let changed = self.tasks[position].mark_incomplete();
        let display = self.tasks[position].to_string();
        self.sort_tasks();

        let result = if changed {
            info!("event=task_unmark module=service status=ok");
            CommandResult::success(
                "I've marked it as incomplete. Let's hope it doesn't stay that way for long...",
                display,
            )
        } else {
            info!("event=task_unmark module=service status=noop");
            CommandResult::failure(
                "Task was never completed!",
                display,
                TrackerError::InvalidCompletion { complete: false },
            )
        };

        match self.persist() {
            Ok(()) => result,
            Err(err) if result.ok => result.with_warning(err.into()),
            // The no-op already carries `InvalidCompletion`; report the
            // failed save in the payload instead.
            Err(err) => {
                let mut result = result;
                result.data.push_str(&format!("\n(I couldn't write that down either: {err})"));
                result
            }
        }
    }

    /// Deletes the task at 1-based `index`.
    ///
    /// Success payload is the removed task's display string.
    pub fn delete(&mut self, index: usize) -> CommandResult {
        let Some(position) = self.position(index) else {
            return self.no_task_found(index);
        };

        let removed = self.tasks.remove(position);
        self.sort_tasks();
        info!(
            "event=task_delete module=service status=ok kind={} count={}",
            removed.kind().label(),
            self.tasks.len()
        );
        self.persisted(CommandResult::success(
            "Got it! I've forgotten all about:",
            removed.to_string(),
        ))
    }

    /// Renders the list in sort-key order as `"{n}. {task}"` lines.
    ///
    /// Returns an empty string for an empty list.
    pub fn list(&self) -> String {
        render_numbered(self.tasks.iter().enumerate().map(|(i, task)| (i + 1, task)))
    }

    /// Renders the list ordered by case-insensitive name.
    ///
    /// The numbers are positions in this view only and are not valid
    /// arguments for mark/unmark/delete.
    pub fn list_by_name(&self) -> String {
        let mut by_name = self.tasks.iter().collect::<Vec<_>>();
        by_name.sort_by_cached_key(|task| task.name().to_lowercase());
        render_numbered(by_name.into_iter().enumerate().map(|(i, task)| (i + 1, task)))
    }

    /// Finds tasks whose name contains `keyword`, ignoring case.
    ///
    /// Matches keep list order and are numbered with their current 1-based
    /// positions, so the numbers are valid for mark/unmark/delete.
    pub fn find(&self, keyword: &str) -> CommandResult {
        let needle = keyword.to_lowercase();
        let matches = self
            .tasks
            .iter()
            .enumerate()
            .filter(|(_, task)| task.name().to_lowercase().contains(&needle))
            .map(|(i, task)| (i + 1, task))
            .collect::<Vec<_>>();

        info!(
            "event=task_find module=service status=ok hits={}",
            matches.len()
        );
        if matches.is_empty() {
            return CommandResult::failure(
                "I couldn't find anything!",
                "Try a different keyword?",
                TrackerError::SearchResultEmpty {
                    keyword: keyword.to_string(),
                },
            );
        }

        CommandResult::success("I found these matches!", render_numbered(matches))
    }

    /// Writes every task to the save file, replacing its contents.
    pub fn save(&self) -> CommandResult {
        match self.persist() {
            Ok(()) => CommandResult::success("Tasks saved!", ""),
            Err(err) => {
                CommandResult::failure("Save file could not be made!", "", err.into())
            }
        }
    }

    /// Replaces the in-memory list with the contents of the save file.
    ///
    /// # Contract
    /// - Missing file -> `NoSaveFile`; unreadable file -> `CorruptFile`; the
    ///   current list is kept in both cases and no file is created.
    /// - Undecodable lines are skipped; the result is then `ok` with a
    ///   `CorruptRecord` caveat listing the skipped line numbers.
    pub fn load(&mut self) -> CommandResult {
        let loaded = match self.repo.load_all() {
            Ok(loaded) => loaded,
            Err(err) => {
                let message = match err {
                    StorageError::NoSaveFile(_) => "No save file found!",
                    _ => "File could not be read. It might be corrupted!",
                };
                return CommandResult::failure(message, "", err.into());
            }
        };

        self.tasks = loaded.tasks;
        self.sort_tasks();
        info!(
            "event=task_load module=service status=ok count={} skipped={}",
            self.tasks.len(),
            loaded.skipped.len()
        );

        if loaded.skipped.is_empty() {
            return CommandResult::success("Save file found. Data has been loaded!", self.list());
        }

        CommandResult::success(
            "Save file found, but it was corrupted. I recovered what I could!",
            self.list(),
        )
        .with_warning(TrackerError::RecordsSkipped {
            lines: loaded.skipped,
        })
    }

    fn position(&self, index: usize) -> Option<usize> {
        (1..=self.tasks.len()).contains(&index).then(|| index - 1)
    }

    fn no_task_found(&self, index: usize) -> CommandResult {
        CommandResult::failure(
            "That task doesn't exist!",
            "",
            TrackerError::NoTaskFound {
                index,
                len: self.tasks.len(),
            },
        )
    }

    fn sort_tasks(&mut self) {
        // Stable: ties (all todos, equal dates) keep insertion order.
        self.tasks.sort_by_key(Task::sort_key);
    }

    fn persist(&self) -> Result<(), StorageError> {
        self.repo.save_all(&self.tasks).inspect_err(|err| {
            warn!(
                "event=task_persist module=service status=error error_kind={}",
                err.kind()
            );
        })
    }

    fn persisted(&self, result: CommandResult) -> CommandResult {
        match self.persist() {
            Ok(()) => result,
            Err(err) => result.with_warning(err.into()),
        }
    }
}

fn render_numbered<'a>(items: impl IntoIterator<Item = (usize, &'a Task)>) -> String {
    items
        .into_iter()
        .map(|(number, task)| format!("{number}. {task}"))
        .collect::<Vec<_>>()
        .join("\n")
}

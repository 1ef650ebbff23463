//! Interactive session: one raw input line in, one step out.
//!
//! # Responsibility
//! - Split a raw line into keyword and argument and route it to the manager.
//! - Hold presentation state (diagnostic mode) explicitly, never globally.
//!
//! # Invariants
//! - Keywords are case-sensitive.
//! - No input ever panics or terminates the process; `bye` only sets `exit`.

use crate::render::RenderOptions;
use lazytask_core::{
    CommandResult, FileTaskRepository, TaskManager, TaskRepository, TrackerError,
};
use log::debug;

/// How a step should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Dispatch,
    Listing,
    Search,
    Deleted,
    DevToggle,
    Farewell,
}

/// Result of handling one input line.
#[derive(Debug)]
pub struct Step {
    pub result: CommandResult,
    pub view: View,
    /// `true` once the user asked to end the session.
    pub exit: bool,
}

impl Step {
    fn new(result: CommandResult, view: View) -> Self {
        Self {
            result,
            view,
            exit: false,
        }
    }
}

/// Shell state wrapped around one task manager.
pub struct Session<R: TaskRepository = FileTaskRepository> {
    manager: TaskManager<R>,
    options: RenderOptions,
}

impl<R: TaskRepository> Session<R> {
    pub fn new(manager: TaskManager<R>, options: RenderOptions) -> Self {
        Self { manager, options }
    }

    pub fn options(&self) -> RenderOptions {
        self.options
    }

    pub fn manager(&self) -> &TaskManager<R> {
        &self.manager
    }

    /// Loads the save file into the manager.
    pub fn start(&mut self) -> CommandResult {
        self.manager.load()
    }

    /// Handles one raw input line.
    pub fn execute(&mut self, line: &str) -> Step {
        let line = line.trim();
        let (keyword, argument) = line.split_once(' ').unwrap_or((line, ""));
        let argument = argument.trim();
        debug!("event=shell_command module=cli keyword_len={}", keyword.len());

        match keyword {
            "" => Step::new(
                CommandResult::failure(
                    "Meow?",
                    "(Try typing a command...)",
                    TrackerError::EmptyInput,
                ),
                View::Dispatch,
            ),
            "todo" | "deadline" | "event" => Step::new(
                self.manager.add_from_command(keyword, argument),
                View::Dispatch,
            ),
            "list" => Step::new(
                CommandResult::success("Here are your tasks!", self.manager.list()),
                View::Listing,
            ),
            "listByName" => Step::new(
                CommandResult::success(
                    "Here are your tasks by name!",
                    self.manager.list_by_name(),
                ),
                View::Listing,
            ),
            "mark" | "unmark" | "delete" => self.execute_indexed(keyword, argument),
            "find" if argument.is_empty() => Step::new(
                CommandResult::failure(
                    "Find what?",
                    "Try: find book",
                    TrackerError::MissingArgument {
                        command: keyword.to_string(),
                    },
                ),
                View::Dispatch,
            ),
            "find" => Step::new(self.manager.find(argument), View::Search),
            "dev" => {
                self.options.show_error_kind = !self.options.show_error_kind;
                let result = if self.options.show_error_kind {
                    CommandResult::success(
                        "Dev mode enabled!",
                        "I'll have to think extra hard now...",
                    )
                } else {
                    CommandResult::success("Dev mode disabled.", "")
                };
                Step::new(result, View::DevToggle)
            }
            "bye" => Step {
                result: CommandResult::success("Always glad to help!", "Goodbye..."),
                view: View::Farewell,
                exit: true,
            },
            other => Step::new(
                CommandResult::failure(
                    "I'm not sure what to do...",
                    "(Try typing a valid command...)",
                    TrackerError::UnknownCommand {
                        keyword: other.to_string(),
                    },
                ),
                View::Dispatch,
            ),
        }
    }

    fn execute_indexed(&mut self, keyword: &str, argument: &str) -> Step {
        let Ok(index) = argument.parse::<usize>() else {
            return Step::new(
                CommandResult::failure(
                    "Invalid task number!",
                    "",
                    TrackerError::InvalidIndex {
                        raw: argument.to_string(),
                    },
                ),
                View::Dispatch,
            );
        };

        match keyword {
            "mark" => Step::new(self.manager.mark_done(index), View::Dispatch),
            "unmark" => Step::new(self.manager.mark_incomplete(index), View::Dispatch),
            _ => Step::new(self.manager.delete(index), View::Deleted),
        }
    }
}

//! Text rendering for shell replies.
//!
//! # Responsibility
//! - Frame messages in the cat speech box.
//! - Turn a `CommandResult` into display text, honoring diagnostic mode.
//!
//! # Invariants
//! - Error kind names only appear when `RenderOptions::show_error_kind` is set.

use crate::session::{Step, View};
use lazytask_core::CommandResult;

const RULE: &str = "  --------------------------------------------------";
const SEARCH_RULE: &str = "----------";

pub const BANNER: &str = r"
  _                  _____         _
 | |    __ _ _____  |_   _|_ _ ___| | __
 | |   / _` |_  / | | || |/ _` / __| |/ /
 | |__| (_| |/ /| |_| || | (_| \__ \   <
 |_____\__,_/___|\__, ||_|\__,_|___/_|\_\
                 |___/
";

/// Rendering switches passed explicitly by the session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Diagnostic mode: add `DEBUG: [<ErrorKind>]` to failures.
    pub show_error_kind: bool,
}

/// Facial expression of the cat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expression {
    Normal,
    Thinking,
    Happy,
    Confused,
}

impl Expression {
    fn eyes(self) -> &'static str {
        match self {
            Self::Normal => "o.o",
            Self::Thinking => "-.-",
            Self::Happy => "^.^",
            Self::Confused => "?.?",
        }
    }
}

/// Frames a headline plus detail lines next to the cat.
///
/// Blank details are dropped; the dashed box is omitted when none remain.
pub fn frame(headline: &str, details: &[&str], expression: Expression) -> String {
    let mut out = format!("\n /\\_/\\\n( {} )  ", expression.eyes());
    out.push_str(headline.trim_end());
    out.push_str("\n > ^ <\n");

    let lines = details
        .iter()
        .flat_map(|detail| detail.lines())
        .filter(|line| !line.trim().is_empty())
        .collect::<Vec<_>>();
    if lines.is_empty() {
        return out;
    }

    out.push_str(RULE);
    out.push('\n');
    for line in lines {
        out.push_str("  ");
        out.push_str(line);
        out.push('\n');
    }
    out.push_str(RULE);
    out.push('\n');
    out
}

/// Generic rendering of one result.
///
/// - Success: normal cat, payload as detail; a caveat adds a confused frame.
/// - Failure: confused cat (thinking in diagnostic mode), error text and
///   payload as details.
pub fn dispatch(result: &CommandResult, options: RenderOptions) -> String {
    if result.ok {
        let mut out = frame(&result.message, &[result.data.as_str()], Expression::Normal);
        out.push_str(&render_caveat(result, options));
        return out;
    }

    let label = debug_label(result, options);
    let expression = if label.is_empty() {
        Expression::Confused
    } else {
        Expression::Thinking
    };
    let detail = error_text(result);
    frame(
        &result.message,
        &[label.as_str(), detail.as_str(), result.data.as_str()],
        expression,
    )
}

/// Renders one session step according to its view.
pub fn render_step(step: &Step, options: RenderOptions) -> String {
    let result = &step.result;
    match step.view {
        View::Listing => {
            let mut out = frame(
                "Let me try to recall!",
                &["If I remember correctly..."],
                Expression::Thinking,
            );
            if result.data.is_empty() {
                out.push_str(&frame("Nothing to do!", &[], Expression::Normal));
            } else {
                out.push_str(&result.data);
                out.push('\n');
            }
            out.push_str(&frame("Hope that helps!", &[], Expression::Happy));
            out
        }
        View::Search if result.ok => {
            let mut out = frame("Searching my memory...", &[], Expression::Thinking);
            out.push_str(&format!("{SEARCH_RULE}\n{}\n{SEARCH_RULE}\n", result.data));
            out.push_str(&frame("Found them!", &[], Expression::Happy));
            out
        }
        View::Deleted if result.ok => {
            let mut out = frame(
                &result.message,
                &[result.data.as_str(), "What were we talking about...?"],
                Expression::Normal,
            );
            out.push_str(&render_caveat(result, options));
            out
        }
        View::DevToggle => {
            let expression = if options.show_error_kind {
                Expression::Thinking
            } else {
                Expression::Normal
            };
            frame(&result.message, &[result.data.as_str()], expression)
        }
        View::Farewell => frame(&result.message, &[result.data.as_str()], Expression::Happy),
        View::Dispatch | View::Search | View::Deleted => dispatch(result, options),
    }
}

/// Renders the start-up banner and the outcome of the initial load.
pub fn render_greeting(load: &CommandResult, options: RenderOptions) -> String {
    let mut out = format!("\n\nWelcome to\n{BANNER}\n");
    out.push_str(&frame(
        "Hi there! Your task cat is ready to help!",
        &[],
        Expression::Normal,
    ));

    let label = debug_label(load, options);
    let detail = error_text(load);
    if load.is_partial() {
        out.push_str(&frame(
            "I found your tasks but skipped over some messy parts...",
            &[
                label.as_str(),
                detail.as_str(),
                "Close the app now if you want to fix the file manually!",
            ],
            Expression::Confused,
        ));
    } else if load.ok {
        out.push_str(&frame(
            "I found a save file!",
            &["Data has been restored."],
            Expression::Happy,
        ));
    } else {
        out.push_str(&frame(
            "Meow! I couldn't load your tasks.",
            &[
                label.as_str(),
                load.message.as_str(),
                "I'll start a fresh list for you!",
            ],
            Expression::Confused,
        ));
    }
    out
}

fn render_caveat(result: &CommandResult, options: RenderOptions) -> String {
    if result.error.is_none() {
        return String::new();
    }
    let label = debug_label(result, options);
    let detail = error_text(result);
    frame(
        "Heads up, I couldn't write that down!",
        &[label.as_str(), detail.as_str()],
        Expression::Confused,
    )
}

fn error_text(result: &CommandResult) -> String {
    result
        .error
        .as_ref()
        .map(ToString::to_string)
        .unwrap_or_default()
}

fn debug_label(result: &CommandResult, options: RenderOptions) -> String {
    match result.error_kind() {
        Some(kind) if options.show_error_kind => format!("DEBUG: [{kind}]"),
        _ => String::new(),
    }
}

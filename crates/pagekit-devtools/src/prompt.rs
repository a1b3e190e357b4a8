//! Prompt backends
//!
//! A prompt shows a message with a pre-filled default and returns what
//! the user submitted, or `None` when they cancelled.

use std::collections::VecDeque;
use std::io::{BufRead, Write};

use crate::DevToolsError;

/// Something that can ask the user for a line of input
pub trait Prompt {
    fn prompt(&mut self, message: &str, default: &str) -> Option<String>;
}

/// Line prompt over a reader/writer pair.
///
/// End of input cancels. A lone `.` submits the default unchanged.
pub struct StdioPrompt<R, W> {
    input: R,
    output: W,
    last_error: Option<DevToolsError>,
}

impl<R: BufRead, W: Write> StdioPrompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output, last_error: None }
    }

    /// The I/O error that ended the last prompt, if any
    pub fn take_error(&mut self) -> Option<DevToolsError> {
        self.last_error.take()
    }

    fn read_answer(&mut self, message: &str, default: &str) -> Result<Option<String>, DevToolsError> {
        writeln!(self.output, "{message}")?;
        if default.is_empty() {
            write!(self.output, "> ")?;
        } else {
            write!(self.output, "[{default}] > ")?;
        }
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let line = line.trim_end_matches(['\r', '\n']);
        if line == "." {
            return Ok(Some(default.to_string()));
        }
        Ok(Some(line.to_string()))
    }
}

impl<R: BufRead, W: Write> Prompt for StdioPrompt<R, W> {
    fn prompt(&mut self, message: &str, default: &str) -> Option<String> {
        match self.read_answer(message, default) {
            Ok(answer) => answer,
            Err(err) => {
                tracing::warn!(%err, "prompt failed, treating as cancel");
                self.last_error = Some(err);
                None
            }
        }
    }
}

/// Replays canned answers and records every default it was shown
#[derive(Debug, Default)]
pub struct ScriptedPrompt {
    answers: VecDeque<Option<String>>,
    /// `(message, default)` for each prompt, in order
    pub shown: Vec<(String, String)>,
}

impl ScriptedPrompt {
    /// Answers to give in order; running out cancels
    pub fn new<S: Into<String>>(answers: impl IntoIterator<Item = S>) -> Self {
        Self {
            answers: answers.into_iter().map(|a| Some(a.into())).collect(),
            shown: Vec::new(),
        }
    }

    /// Queue a cancel (the user pressed Cancel)
    pub fn then_cancel(mut self) -> Self {
        self.answers.push_back(None);
        self
    }

    /// Defaults shown, in order
    pub fn defaults(&self) -> Vec<&str> {
        self.shown.iter().map(|(_, d)| d.as_str()).collect()
    }
}

impl Prompt for ScriptedPrompt {
    fn prompt(&mut self, message: &str, default: &str) -> Option<String> {
        self.shown.push((message.to_string(), default.to_string()));
        self.answers.pop_front().flatten()
    }
}

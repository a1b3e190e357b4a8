//! pagekit DevTools
//!
//! Developer helpers for pages built on pagekit.
//!
//! Features:
//! - Breakpoint prompt loop
//! - Prompt backends (line-based I/O, scripted)
//! - Console value formatting

pub mod console;
pub mod prompt;
pub mod breakpoint;

pub use console::ConsoleValue;
pub use prompt::{Prompt, StdioPrompt, ScriptedPrompt};
pub use breakpoint::{breakpoint, Breakpoint, BreakpointReport};

/// DevTools error
#[derive(Debug, thiserror::Error)]
pub enum DevToolsError {
    #[error("Expression evaluation failed: {0}")]
    EvaluationFailed(String),

    #[error("No element with id {0:?}")]
    UnknownElement(String),

    #[error("Prompt I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

//! Breakpoint
//!
//! Pauses the caller and runs a read-eval-prompt loop. The caller passes
//! an evaluator closed over whatever scope it wants inspectable; each
//! result (or error) is offered as the next prompt's default.

use std::fmt::Display;

use crate::Prompt;

/// Message shown when none is given
pub const DEFAULT_MESSAGE: &str = "Enter an expression:";

/// Breakpoint prompt loop
#[derive(Debug, Clone, Default)]
pub struct Breakpoint {
    message: Option<String>,
}

/// What happened while paused
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BreakpointReport {
    /// Expressions evaluated
    pub evaluations: usize,
    /// Evaluations that returned an error
    pub failures: usize,
    /// Last value shown as a default
    pub last_result: Option<String>,
}

impl Breakpoint {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: Some(message.into()) }
    }

    /// Prompt text: `BREAKPOINT: <message>` followed by the input hint
    pub fn prompt_text(&self) -> String {
        match self.message.as_deref().filter(|m| !m.is_empty()) {
            Some(message) => format!("BREAKPOINT: {message}\n{DEFAULT_MESSAGE}"),
            None => format!("BREAKPOINT\n{DEFAULT_MESSAGE}"),
        }
    }

    /// Prompt until the user cancels or submits empty input.
    ///
    /// Evaluator errors never escape; their text becomes the next default.
    pub fn run<T, E>(&self, prompt: &mut impl Prompt, mut evaluate: impl FnMut(&str) -> Result<T, E>) -> BreakpointReport
    where
        T: Display,
        E: Display,
    {
        let text = self.prompt_text();
        let mut report = BreakpointReport::default();
        let mut shown = String::new();
        tracing::debug!(note = self.message.as_deref(), "breakpoint hit");

        while let Some(input) = prompt.prompt(&text, &shown) {
            let expr = input.trim();
            if expr.is_empty() {
                break;
            }

            report.evaluations += 1;
            shown = match evaluate(expr) {
                Ok(value) => value.to_string(),
                Err(err) => {
                    report.failures += 1;
                    tracing::debug!(%expr, %err, "breakpoint evaluation failed");
                    err.to_string()
                }
            };
            report.last_result = Some(shown.clone());
        }

        tracing::debug!(evaluations = report.evaluations, "breakpoint resumed");
        report
    }
}

/// Pause with `message` and evaluate until the user resumes
pub fn breakpoint<T, E>(
    prompt: &mut impl Prompt,
    message: Option<&str>,
    evaluate: impl FnMut(&str) -> Result<T, E>,
) -> BreakpointReport
where
    T: Display,
    E: Display,
{
    let bp = message.map(Breakpoint::new).unwrap_or_default();
    bp.run(prompt, evaluate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ScriptedPrompt;

    fn double(expr: &str) -> Result<i64, String> {
        expr.parse::<i64>().map(|n| n * 2).map_err(|_| format!("cannot parse {expr:?}"))
    }

    #[test]
    fn test_result_becomes_next_default() {
        let mut prompt = ScriptedPrompt::new(["2", "5"]).then_cancel();
        let report = Breakpoint::new("checking").run(&mut prompt, double);

        assert_eq!(prompt.defaults(), vec!["", "4", "10"]);
        assert_eq!(report.evaluations, 2);
        assert_eq!(report.last_result.as_deref(), Some("10"));
    }

    #[test]
    fn test_error_becomes_next_default() {
        let mut prompt = ScriptedPrompt::new(["x", "3"]).then_cancel();
        let report = Breakpoint::default().run(&mut prompt, double);

        assert_eq!(prompt.defaults(), vec!["", "cannot parse \"x\"", "6"]);
        assert_eq!(report.failures, 1);
    }

    #[test]
    fn test_empty_input_resumes() {
        let mut prompt = ScriptedPrompt::new(["1", "   ", "2"]);
        let report = Breakpoint::default().run(&mut prompt, double);

        assert_eq!(report.evaluations, 1);
        assert_eq!(prompt.shown.len(), 2);
    }

    #[test]
    fn test_prompt_text() {
        assert_eq!(Breakpoint::new("in drop").prompt_text(), "BREAKPOINT: in drop\nEnter an expression:");
        assert_eq!(Breakpoint::default().prompt_text(), "BREAKPOINT\nEnter an expression:");
        assert_eq!(Breakpoint::new("").prompt_text(), "BREAKPOINT\nEnter an expression:");
    }

    #[test]
    fn test_free_function() {
        let mut prompt = ScriptedPrompt::new(["7"]);
        let report = breakpoint(&mut prompt, Some("here"), double);

        assert_eq!(report.last_result.as_deref(), Some("14"));
        assert!(prompt.shown[0].0.starts_with("BREAKPOINT: here"));
    }
}

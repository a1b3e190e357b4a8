//! Event scripts
//!
//! One step per line:
//!
//! A `#` followed by whitespace (or ending the line) starts a comment;
//! `#bin` is an element id.
//!
//! ```text
//! # comment
//! down 10 10        pointer-down on #src
//! down 10 10 #bin   pointer-down on #bin
//! move 50 50
//! up                release where the pointer last was
//! up 230 230
//! key Escape
//! scroll 0 120
//! ```

use pagekit_dom::Key;

/// Default session: grab `#src`, carry it onto `#bin`, release
pub const DEFAULT_SCRIPT: &str = "\
down 30 30
move 50 50
move 240 240
up
";

#[derive(Debug, Clone, PartialEq)]
pub enum Step {
    Down { x: f64, y: f64, target: String },
    Move { x: f64, y: f64 },
    Up { at: Option<(f64, f64)> },
    Key(Key),
    Scroll { x: f64, y: f64 },
}

#[derive(Debug, thiserror::Error)]
pub enum ScriptError {
    #[error("line {line}: unknown step {word:?}")]
    UnknownStep { line: usize, word: String },

    #[error("line {line}: expected {expected}")]
    BadArguments { line: usize, expected: &'static str },
}

pub fn parse(text: &str) -> Result<Vec<Step>, ScriptError> {
    let mut steps = Vec::new();
    for (idx, raw) in text.lines().enumerate() {
        let line = idx + 1;
        let content = strip_comment(raw).trim();
        if content.is_empty() {
            continue;
        }

        let mut words = content.split_whitespace();
        let Some(word) = words.next() else { continue };
        let args: Vec<&str> = words.collect();

        let step = match word {
            "down" => {
                let (x, y) = point(&args, line, "down X Y [ID]")?;
                let target = args.get(2).copied().unwrap_or("src").trim_start_matches('#').to_string();
                Step::Down { x, y, target }
            }
            "move" => {
                let (x, y) = point(&args, line, "move X Y")?;
                Step::Move { x, y }
            }
            "up" => {
                let at = if args.is_empty() { None } else { Some(point(&args, line, "up [X Y]")?) };
                Step::Up { at }
            }
            "key" => match args.as_slice() {
                [name] => Step::Key(Key::from_name(name)),
                _ => return Err(ScriptError::BadArguments { line, expected: "key NAME" }),
            },
            "scroll" => {
                let (x, y) = point(&args, line, "scroll X Y")?;
                Step::Scroll { x, y }
            }
            other => {
                return Err(ScriptError::UnknownStep { line, word: other.to_string() });
            }
        };
        steps.push(step);
    }
    Ok(steps)
}

fn strip_comment(line: &str) -> &str {
    let bytes = line.as_bytes();
    for (i, &b) in bytes.iter().enumerate() {
        if b != b'#' {
            continue;
        }
        let starts_word = i == 0 || bytes[i - 1].is_ascii_whitespace();
        let ends_word = bytes.get(i + 1).is_none_or(|c| c.is_ascii_whitespace());
        if starts_word && ends_word {
            return &line[..i];
        }
    }
    line
}

fn point(args: &[&str], line: usize, expected: &'static str) -> Result<(f64, f64), ScriptError> {
    let bad = || ScriptError::BadArguments { line, expected };
    let x = args.first().and_then(|v| v.parse().ok()).ok_or_else(bad)?;
    let y = args.get(1).and_then(|v| v.parse().ok()).ok_or_else(bad)?;
    Ok((x, y))
}

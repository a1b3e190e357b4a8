//! Console values
//!
//! Evaluation results formatted the way a devtools console prints them.

use std::fmt::{self, Write as _};

/// Console value (for object inspection)
#[derive(Debug, Clone, PartialEq)]
pub enum ConsoleValue {
    Undefined,
    Null,
    Boolean(bool),
    Number(f64),
    String(String),
    Object(Vec<(String, ConsoleValue)>),
    Array(Vec<ConsoleValue>),
    Error { name: String, message: String },
}

impl ConsoleValue {
    /// Object from `(key, value)` pairs, order kept
    pub fn object<K: Into<String>>(props: impl IntoIterator<Item = (K, ConsoleValue)>) -> Self {
        Self::Object(props.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error { .. })
    }
}

impl From<f64> for ConsoleValue {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<bool> for ConsoleValue {
    fn from(b: bool) -> Self {
        Self::Boolean(b)
    }
}

impl From<&str> for ConsoleValue {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl<T: Into<ConsoleValue>> From<Option<T>> for ConsoleValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(Self::Null)
    }
}

/// Write `items` separated by `, ` between `open` and `close`
fn write_list<T>(
    f: &mut fmt::Formatter<'_>,
    open: char,
    close: char,
    items: impl IntoIterator<Item = T>,
    mut each: impl FnMut(&mut fmt::Formatter<'_>, T) -> fmt::Result,
) -> fmt::Result {
    f.write_char(open)?;
    for (n, item) in items.into_iter().enumerate() {
        if n > 0 {
            f.write_str(", ")?;
        }
        each(f, item)?;
    }
    f.write_char(close)
}

impl fmt::Display for ConsoleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Undefined => f.write_str("undefined"),
            Self::Null => f.write_str("null"),
            Self::Boolean(b) => write!(f, "{b}"),
            Self::Number(n) => write!(f, "{n}"),
            Self::String(s) => write!(f, "{s:?}"),
            Self::Object(props) => write_list(f, '{', '}', props, |f, (key, value)| write!(f, "{key}: {value}")),
            Self::Array(items) => write_list(f, '[', ']', items, |f, value| write!(f, "{value}")),
            Self::Error { name, message } => write!(f, "{name}: {message}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_scalars() {
        assert_eq!(ConsoleValue::Undefined.to_string(), "undefined");
        assert_eq!(ConsoleValue::from(2.5).to_string(), "2.5");
        assert_eq!(ConsoleValue::from(40.0).to_string(), "40");
        assert_eq!(ConsoleValue::from("bin").to_string(), "\"bin\"");
        assert_eq!(ConsoleValue::from(None::<bool>).to_string(), "null");
    }

    #[test]
    fn test_display_nested() {
        let value = ConsoleValue::object([
            ("id", ConsoleValue::from("src")),
            ("pos", ConsoleValue::Array(vec![1.0.into(), 2.0.into()])),
        ]);
        assert_eq!(value.to_string(), "{id: \"src\", pos: [1, 2]}");
        assert_eq!(ConsoleValue::object(Vec::<(String, ConsoleValue)>::new()).to_string(), "{}");
    }

    #[test]
    fn test_string_quotes_are_escaped() {
        assert_eq!(ConsoleValue::from("say \"hi\"").to_string(), r#""say \"hi\"""#);
    }

    #[test]
    fn test_error_display() {
        let err = ConsoleValue::Error { name: "ReferenceError".into(), message: "x is not defined".into() };
        assert!(err.is_error());
        assert_eq!(err.to_string(), "ReferenceError: x is not defined");
    }
}

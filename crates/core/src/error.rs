use serde::Serialize;
use std::fmt;

/// Category of a validation failure.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// First token is not a statement keyword.
    Lexical,
    /// Statement appears outside its section.
    Ordering,
    /// Wrong number of fields, or mismatched edge constant count.
    Arity,
    /// Undeclared node/function, or duplicate name.
    Referential,
    /// Malformed name or variable list.
    Format,
    /// Constant or flow value is not a number.
    Numeric,
    /// Function formula could not be parsed.
    Expression,
    /// Source could not be read.
    Io,
}

/// A checker failure, before the session attaches a line number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub kind: ErrorKind,
    pub message: String,
}

impl Violation {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Violation {
            kind,
            message: message.into(),
        }
    }

    pub fn at(self, line: u32) -> ValidationError {
        ValidationError {
            line,
            kind: self.kind,
            message: self.message,
        }
    }
}

/// The first error of a validation pass. Line 0 means the source could not
/// be read at all.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ValidationError {
    pub line: u32,
    pub kind: ErrorKind,
    pub message: String,
}

impl ValidationError {
    pub fn io(path: &str, err: &std::io::Error) -> Self {
        ValidationError {
            line: 0,
            kind: ErrorKind::Io,
            message: format!("error reading file '{}': {}", path, err),
        }
    }

    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "line":    self.line,
            "kind":    self.kind,
            "message": self.message,
        })
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ErrorKind::Io => f.write_str(&self.message),
            _ => write!(f, "ERROR on line {}: {}", self.line, self.message),
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_report_format() {
        let err = Violation::new(ErrorKind::Arity, "Edge definition is incomplete or invalid!").at(4);
        assert_eq!(
            err.to_string(),
            "ERROR on line 4: Edge definition is incomplete or invalid!"
        );
    }

    #[test]
    fn json_value_uses_snake_case_kind() {
        let err = Violation::new(ErrorKind::Referential, "Node's name already declared!").at(7);
        let v = err.to_json_value();
        assert_eq!(v["line"], 7);
        assert_eq!(v["kind"], "referential");
        assert_eq!(v["message"], "Node's name already declared!");
    }

    #[test]
    fn io_error_has_no_line_prefix() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = ValidationError::io("net.txt", &io);
        assert_eq!(err.line, 0);
        assert_eq!(err.to_string(), "error reading file 'net.txt': gone");
    }
}

//! Line tokenization and statement classification.

use crate::section::Section;

/// Comment marker: everything from here to end of line is ignored.
pub const COMMENT_MARKER: char = '#';

/// Statement kind, chosen by the first token of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatementKind {
    Function,
    Node,
    Edge,
    Od,
}

impl StatementKind {
    pub fn from_keyword(word: &str) -> Option<Self> {
        match word {
            "function" => Some(StatementKind::Function),
            "node" => Some(StatementKind::Node),
            "edge" => Some(StatementKind::Edge),
            "od" => Some(StatementKind::Od),
            _ => None,
        }
    }

    pub fn keyword(self) -> &'static str {
        match self {
            StatementKind::Function => "function",
            StatementKind::Node => "node",
            StatementKind::Edge => "edge",
            StatementKind::Od => "od",
        }
    }

    /// The file section this kind of statement belongs to.
    pub fn section(self) -> Section {
        match self {
            StatementKind::Function => Section::Function,
            StatementKind::Node => Section::Node,
            StatementKind::Edge => Section::Edge,
            StatementKind::Od => Section::Od,
        }
    }
}

/// A classified, non-empty line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement<'a> {
    Known {
        kind: StatementKind,
        tokens: Vec<&'a str>,
    },
    Unrecognized {
        keyword: &'a str,
    },
}

/// Strip the line terminator and any comment, then split on whitespace.
pub fn tokenize(line: &str) -> Vec<&str> {
    let line = line.trim_end_matches(['\n', '\r']);
    let code = match line.find(COMMENT_MARKER) {
        Some(pos) => &line[..pos],
        None => line,
    };
    code.split_whitespace().collect()
}

/// Tokenize and classify a raw line. Blank and comment-only lines yield
/// `None`.
pub fn parse_line(line: &str) -> Option<Statement<'_>> {
    let tokens = tokenize(line);
    let first = *tokens.first()?;
    Some(match StatementKind::from_keyword(first) {
        Some(kind) => Statement::Known { kind, tokens },
        None => Statement::Unrecognized { keyword: first },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_runs_of_whitespace() {
        assert_eq!(
            tokenize("edge  A-B\tA   B f1 3.5\r\n"),
            vec!["edge", "A-B", "A", "B", "f1", "3.5"]
        );
    }

    #[test]
    fn comment_truncates_the_line() {
        assert_eq!(tokenize("node A # first node"), vec!["node", "A"]);
        assert_eq!(tokenize("node A#"), vec!["node", "A"]);
        assert_eq!(tokenize("node A#B"), vec!["node", "A"]);
    }

    #[test]
    fn blank_and_comment_only_lines_are_empty() {
        assert!(parse_line("").is_none());
        assert!(parse_line("   \n").is_none());
        assert!(parse_line("# just a comment").is_none());
        assert!(parse_line("    #").is_none());
    }

    #[test]
    fn classifies_by_first_token() {
        match parse_line("od A|B A B 100").unwrap() {
            Statement::Known { kind, tokens } => {
                assert_eq!(kind, StatementKind::Od);
                assert_eq!(tokens.len(), 5);
            }
            other => panic!("Expected Known, got {:?}", other),
        }
    }

    #[test]
    fn keywords_are_case_sensitive() {
        assert_eq!(
            parse_line("Node A").unwrap(),
            Statement::Unrecognized { keyword: "Node" }
        );
    }

    #[test]
    fn keyword_round_trips() {
        for kind in [
            StatementKind::Function,
            StatementKind::Node,
            StatementKind::Edge,
            StatementKind::Od,
        ] {
            assert_eq!(StatementKind::from_keyword(kind.keyword()), Some(kind));
        }
    }
}

//! Formula term extraction.
//!
//! A function line carries an infix arithmetic formula. The validator never
//! evaluates it; it only needs the distinct identifiers the formula refers
//! to, so that declared variables and edge constants can be reconciled.

pub mod lexer;
pub mod parser;

use std::collections::BTreeSet;

pub use parser::{BUILTIN_CONSTANTS, BUILTIN_FUNCTIONS, MAX_DEPTH};

/// Reasons a formula cannot be parsed. Offsets are byte offsets into the
/// formula text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExprError {
    #[error("unexpected character '{ch}' at offset {offset}")]
    UnexpectedChar { ch: char, offset: usize },

    #[error("unexpected {found} at offset {offset}")]
    UnexpectedToken { found: String, offset: usize },

    #[error("unexpected end of formula")]
    UnexpectedEnd,

    #[error("unknown function '{name}' at offset {offset}")]
    UnknownFunction { name: String, offset: usize },

    #[error("formula nested too deeply at offset {offset}")]
    TooDeep { offset: usize },
}

/// Parse `formula` and return the set of term names it references:
/// every identifier except built-in constants and called function names.
pub fn extract_terms(formula: &str) -> Result<BTreeSet<String>, ExprError> {
    let tokens = lexer::lex(formula)?;
    parser::parse(&tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn terms(formula: &str) -> Vec<String> {
        extract_terms(formula).unwrap().into_iter().collect()
    }

    #[test]
    fn bpr_cost_function_terms() {
        assert_eq!(
            terms("t0*(1+0.15*(f/c)^4)"),
            vec!["c".to_owned(), "f".to_owned(), "t0".to_owned()]
        );
    }

    #[test]
    fn repeated_identifiers_are_reported_once() {
        assert_eq!(terms("x*x+x"), vec!["x".to_owned()]);
    }

    #[test]
    fn constant_only_formula_has_no_terms() {
        assert!(extract_terms("2*PI").unwrap().is_empty());
    }

    #[test]
    fn error_display_names_the_offending_input() {
        let err = extract_terms("x+#").unwrap_err();
        assert_eq!(err.to_string(), "unexpected character '#' at offset 2");
        let err = extract_terms("x+").unwrap_err();
        assert_eq!(err.to_string(), "unexpected end of formula");
    }

    #[test]
    fn deep_nesting_is_an_error_not_a_crash() {
        let formula = format!("{}x{}", "(".repeat(10_000), ")".repeat(10_000));
        let err = extract_terms(&formula).unwrap_err();
        assert_eq!(err, ExprError::TooDeep { offset: MAX_DEPTH });
        assert_eq!(err.to_string(), "formula nested too deeply at offset 256");
    }
}

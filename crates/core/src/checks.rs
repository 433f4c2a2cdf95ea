//! Per-statement consistency checks.
//!
//! Each checker receives the full token list of one line (keyword included)
//! and the registry of symbols declared on earlier lines. The first failed
//! check is returned; successful function, node and edge lines are
//! registered for later cross-reference.

use crate::error::{ErrorKind, Violation};
use crate::expr;
use crate::registry::{FunctionSig, Registry};
use tracing::debug;

/// `true` if `s` parses as a floating-point number. Single underscores
/// between digits are allowed as separators (`1_000`).
pub fn is_number(s: &str) -> bool {
    if !s.contains('_') {
        return s.parse::<f64>().is_ok();
    }
    let b = s.as_bytes();
    let grouped = b.iter().enumerate().all(|(i, &c)| {
        c != b'_'
            || (i > 0 && i + 1 < b.len() && b[i - 1].is_ascii_digit() && b[i + 1].is_ascii_digit())
    });
    grouped && s.replace('_', "").parse::<f64>().is_ok()
}

/// `true` if the first two `sep`-separated pieces of `name` are `a` and `b`.
/// Pieces past the second are ignored.
fn name_matches(name: &str, sep: char, a: &str, b: &str) -> bool {
    let mut parts = name.split(sep);
    parts.next() == Some(a) && parts.next() == Some(b)
}

fn fail(kind: ErrorKind, message: impl Into<String>) -> Result<(), Violation> {
    Err(Violation::new(kind, message))
}

/// `function <name> (<vars>) <formula>`
pub fn check_function(tokens: &[&str], reg: &mut Registry, line: u32) -> Result<(), Violation> {
    if tokens.len() < 4 {
        return fail(ErrorKind::Arity, "Function definition is incomplete or invalid!");
    }
    if tokens.len() > 4 {
        return fail(ErrorKind::Arity, "Invalid character(s) after function's formula!");
    }
    let (name, var_list, formula) = (tokens[1], tokens[2], tokens[3]);

    let terms = expr::extract_terms(formula).map_err(|e| {
        Violation::new(
            ErrorKind::Expression,
            format!("Function's formula is invalid: {}", e),
        )
    })?;

    if !(var_list.starts_with('(') && var_list.ends_with(')')) {
        return fail(
            ErrorKind::Format,
            "Function's variables need to be defined between parentheses!",
        );
    }

    let inner = var_list.replace(['(', ')'], "");
    let variables: Vec<String> = if inner.is_empty() {
        Vec::new()
    } else {
        inner.split(',').map(str::to_owned).collect()
    };
    if let Some(v) = variables.iter().find(|v| !terms.contains(v.as_str())) {
        return fail(
            ErrorKind::Referential,
            format!("Variable '{}' is not part of the function!", v),
        );
    }

    let sig = FunctionSig {
        terms,
        variables,
        line,
    };
    if let Err(first) = reg.declare_function(name, sig) {
        debug!(function = name, first_line = first, "duplicate function");
        return fail(ErrorKind::Referential, "Function's name already declared!");
    }
    Ok(())
}

/// `node <name>`
pub fn check_node(tokens: &[&str], reg: &mut Registry, line: u32) -> Result<(), Violation> {
    if tokens.len() < 2 {
        return fail(ErrorKind::Arity, "Node definition is incomplete or invalid!");
    }
    if tokens.len() > 2 {
        return fail(ErrorKind::Arity, "Invalid character(s) after node's name!");
    }
    if let Err(first) = reg.declare_node(tokens[1], line) {
        debug!(node = tokens[1], first_line = first, "duplicate node");
        return fail(ErrorKind::Referential, "Node's name already declared!");
    }
    Ok(())
}

/// `edge <from>-<to> <from> <to> <function> [<constant>...]`
pub fn check_edge(tokens: &[&str], reg: &mut Registry, line: u32) -> Result<(), Violation> {
    // name, both endpoints and the function are needed before anything else
    // can be checked
    if tokens.len() < 5 {
        return fail(ErrorKind::Arity, "Edge definition is incomplete or invalid!");
    }
    let (name, from, to, func) = (tokens[1], tokens[2], tokens[3], tokens[4]);

    if !name.contains('-') {
        return fail(ErrorKind::Format, "Edge's name is not in the correct format!");
    }
    if !name_matches(name, '-', from, to) {
        return fail(
            ErrorKind::Format,
            "Edge's name does not correspond to the nodes it connects!",
        );
    }

    if let Err(first) = reg.declare_edge(name, line) {
        debug!(edge = name, first_line = first, "duplicate edge");
        return fail(ErrorKind::Referential, "Edge's name already declared!");
    }

    if !reg.has_node(from) || !reg.has_node(to) {
        return fail(
            ErrorKind::Referential,
            "Nodes connected by the edge were not defined!",
        );
    }

    let Some(sig) = reg.function(func) else {
        return fail(ErrorKind::Referential, "Edge's function was not defined!");
    };

    let expected = 5 + sig.constant_count();
    let actual = tokens.len() as isize;
    if actual < expected {
        return fail(ErrorKind::Arity, "Edge definition is incomplete or invalid!");
    }
    if actual > expected {
        return fail(
            ErrorKind::Arity,
            "Invalid character(s) after edges's constant(s)!",
        );
    }

    if !tokens[5..].iter().all(|c| is_number(c)) {
        return fail(ErrorKind::Numeric, "One or more constants are not numbers!");
    }
    Ok(())
}

/// `od <origin>|<dest> <origin> <dest> <flow>`
pub fn check_od(tokens: &[&str], reg: &mut Registry) -> Result<(), Violation> {
    if tokens.len() < 4 {
        return fail(ErrorKind::Arity, "OD pair's definition is incomplete or invalid!");
    }
    let (name, origin, dest) = (tokens[1], tokens[2], tokens[3]);

    if !name.contains('|') {
        return fail(ErrorKind::Format, "OD pair's name is not in the correct format!");
    }
    if !name_matches(name, '|', origin, dest) {
        return fail(
            ErrorKind::Format,
            "OD pair's name does not correspond to the specified origin and destination nodes!",
        );
    }

    if !reg.has_node(origin) || !reg.has_node(dest) {
        return fail(
            ErrorKind::Referential,
            "Origin or destination nodes were not defined!",
        );
    }

    if tokens.len() < 5 {
        return fail(ErrorKind::Arity, "OD pair's definition is incomplete or invalid!");
    }
    if tokens.len() > 5 {
        return fail(ErrorKind::Arity, "Invalid character(s) after OD pair's total flow!");
    }

    if !is_number(tokens[4]) {
        return fail(ErrorKind::Numeric, "OD pair's total flow is not a number!");
    }

    reg.record_od();
    Ok(())
}

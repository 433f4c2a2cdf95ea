//! The validation pass: scan a network file line by line, enforce section
//! order, and run the matching checker on every statement.

use crate::checks;
use crate::error::{ErrorKind, ValidationError, Violation};
use crate::registry::Registry;
use crate::section::Section;
use crate::source::{FileSystemProvider, SourceProvider};
use crate::statement::{self, Statement, StatementKind};
use serde::Serialize;
use std::path::Path;
use tracing::{debug, info, trace};

/// What a successful pass accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NetworkSummary {
    pub functions: usize,
    pub nodes: usize,
    pub edges: usize,
    pub od_pairs: usize,
    /// Furthest section reached.
    pub section: Section,
}

/// One validation session. Owns the section state and the registries of a
/// single pass; build a fresh one per file.
#[derive(Debug, Default)]
pub struct Validator {
    section: Section,
    registry: Registry,
    line: u32,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of lines consumed so far.
    pub fn line(&self) -> u32 {
        self.line
    }

    pub fn section(&self) -> Section {
        self.section
    }

    /// Consume the next raw line of the file. Blank and comment-only lines
    /// only advance the line counter.
    pub fn check_line(&mut self, raw: &str) -> Result<(), ValidationError> {
        self.line += 1;
        let line = self.line;
        match statement::parse_line(raw) {
            None => Ok(()),
            Some(Statement::Unrecognized { keyword }) => Err(Violation::new(
                ErrorKind::Lexical,
                format!("Undefined type '{}'!", keyword),
            )
            .at(line)),
            Some(Statement::Known { kind, tokens }) => {
                self.check_statement(kind, &tokens).map_err(|v| v.at(line))
            }
        }
    }

    fn check_statement(&mut self, kind: StatementKind, tokens: &[&str]) -> Result<(), Violation> {
        let next = self.section.enter(kind.section())?;
        if next != self.section {
            debug!(line = self.line, from = ?self.section, to = ?next, "section advanced");
            self.section = next;
        }
        trace!(line = self.line, keyword = kind.keyword(), fields = tokens.len(), "statement");

        let reg = &mut self.registry;
        match kind {
            StatementKind::Function => checks::check_function(tokens, reg, self.line),
            StatementKind::Node => checks::check_node(tokens, reg, self.line),
            StatementKind::Edge => checks::check_edge(tokens, reg, self.line),
            StatementKind::Od => checks::check_od(tokens, reg),
        }
    }

    /// End of input: everything seen so far was valid.
    pub fn finish(self) -> NetworkSummary {
        let summary = NetworkSummary {
            functions: self.registry.function_count(),
            nodes: self.registry.node_count(),
            edges: self.registry.edge_count(),
            od_pairs: self.registry.od_count(),
            section: self.section,
        };
        info!(
            lines = self.line,
            functions = summary.functions,
            nodes = summary.nodes,
            edges = summary.edges,
            od_pairs = summary.od_pairs,
            "network file is valid"
        );
        summary
    }
}

/// Validate network file text held in memory.
pub fn validate_str(src: &str) -> Result<NetworkSummary, ValidationError> {
    let mut validator = Validator::new();
    for raw in src.lines() {
        validator.check_line(raw)?;
    }
    Ok(validator.finish())
}

/// Validate the network file at `path`, read from the filesystem.
pub fn validate_file(path: &Path) -> Result<NetworkSummary, ValidationError> {
    validate_with_provider(path, &FileSystemProvider)
}

/// Validate the network file at `path`, read through `provider`.
pub fn validate_with_provider(
    path: &Path,
    provider: &dyn SourceProvider,
) -> Result<NetworkSummary, ValidationError> {
    let src = provider
        .read_source(path)
        .map_err(|e| ValidationError::io(&path.to_string_lossy(), &e))?;
    debug!(path = %path.display(), bytes = src.len(), "validating network file");
    validate_str(&src)
}

//! netfile-core: validator for transportation network files.
//!
//! A network file declares cost functions, nodes, edges and OD pairs, one
//! statement per line and in that order:
//!
//! ```text
//! function <name> (<var1>,<var2>,...) <formula>
//! node <name>
//! edge <from>-<to> <from> <to> <function> [<constant>...]
//! od <origin>|<dest> <origin> <dest> <flow>
//! ```
//!
//! # Public API
//!
//! - [`validate_file()`], [`validate_str()`], [`validate_with_provider()`]
//!   -- run a full pass and return the first error, if any
//! - [`Validator`] -- drive a pass one line at a time
//! - [`ValidationError`] -- line number, [`ErrorKind`] and message
//! - [`expr::extract_terms()`] -- term names referenced by a formula

pub mod checks;
pub mod error;
pub mod expr;
pub mod registry;
pub mod section;
pub mod source;
pub mod statement;
pub mod validate;

// ── Convenience re-exports ───────────────────────────────────────────

pub use error::{ErrorKind, ValidationError, Violation};
pub use expr::{extract_terms, ExprError};
pub use registry::{FunctionSig, Registry};
pub use section::Section;
pub use source::{FileSystemProvider, InMemoryProvider, SourceProvider};
pub use statement::{Statement, StatementKind};
pub use validate::{validate_file, validate_str, validate_with_provider, NetworkSummary, Validator};

//! Section ordering: functions, then nodes, then edges, then OD pairs.

use crate::error::{ErrorKind, Violation};
use serde::Serialize;

/// The furthest section reached while scanning a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    #[default]
    Function,
    Node,
    Edge,
    Od,
}

impl Section {
    /// The section that may directly follow this one.
    pub fn next(self) -> Option<Section> {
        match self {
            Section::Function => Some(Section::Node),
            Section::Node => Some(Section::Edge),
            Section::Edge => Some(Section::Od),
            Section::Od => None,
        }
    }

    fn order_message(self) -> &'static str {
        match self {
            Section::Function => "Functions should be defined before nodes, edges and OD pairs!",
            Section::Node => {
                "Nodes should be defined after functions and before edges and OD pairs!"
            }
            Section::Edge => {
                "Edges should be defined after functions and nodes and before OD pairs!"
            }
            Section::Od => "OD pairs should be defined after functions, nodes and edges!",
        }
    }

    /// Decide the state after a statement belonging to `target` is seen while
    /// in `self`. Staying put and moving exactly one step forward are the only
    /// legal moves.
    pub fn enter(self, target: Section) -> Result<Section, Violation> {
        if target == self || self.next() == Some(target) {
            Ok(target)
        } else {
            Err(Violation::new(ErrorKind::Ordering, target.order_message()))
        }
    }
}

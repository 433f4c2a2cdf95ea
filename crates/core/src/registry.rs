//! Symbols declared so far in a validation pass, keyed by name, with the
//! line of their declaration.

use std::collections::{BTreeSet, HashMap};

/// What later edge lines need to know about a declared function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionSig {
    /// Every term the formula references (variables and constants).
    pub terms: BTreeSet<String>,
    /// Variables in declaration order, as written between the parentheses.
    pub variables: Vec<String>,
    pub line: u32,
}

impl FunctionSig {
    /// Number of terms an edge must supply as numeric constants. Negative
    /// when the variable list names more entries than the formula has terms
    /// (possible only with repeated variables).
    pub fn constant_count(&self) -> isize {
        self.terms.len() as isize - self.variables.len() as isize
    }
}

#[derive(Debug, Default)]
pub struct Registry {
    functions: HashMap<String, FunctionSig>,
    nodes: HashMap<String, u32>,
    edges: HashMap<String, u32>,
    od_pairs: usize,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn function(&self, name: &str) -> Option<&FunctionSig> {
        self.functions.get(name)
    }

    pub fn has_node(&self, name: &str) -> bool {
        self.nodes.contains_key(name)
    }

    /// Register a function. On a duplicate, returns the line of the first
    /// declaration and leaves the registry unchanged.
    pub fn declare_function(&mut self, name: &str, sig: FunctionSig) -> Result<(), u32> {
        if let Some(first) = self.functions.get(name) {
            return Err(first.line);
        }
        self.functions.insert(name.to_owned(), sig);
        Ok(())
    }

    pub fn declare_node(&mut self, name: &str, line: u32) -> Result<(), u32> {
        declare(&mut self.nodes, name, line)
    }

    pub fn declare_edge(&mut self, name: &str, line: u32) -> Result<(), u32> {
        declare(&mut self.edges, name, line)
    }

    /// OD pairs are counted, never looked up.
    pub fn record_od(&mut self) {
        self.od_pairs += 1;
    }

    pub fn function_count(&self) -> usize {
        self.functions.len()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn od_count(&self) -> usize {
        self.od_pairs
    }
}

fn declare(map: &mut HashMap<String, u32>, name: &str, line: u32) -> Result<(), u32> {
    if let Some(&first) = map.get(name) {
        return Err(first);
    }
    map.insert(name.to_owned(), line);
    Ok(())
}

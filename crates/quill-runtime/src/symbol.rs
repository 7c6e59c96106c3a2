//! Symbol table and name binding

use std::collections::HashMap;

/// Symbol classification
///
/// Globals live in the VM's globals array; locals live in the current
/// frame's stack slots. The two scopes map to distinct opcode families so
/// the VM never consults a name at run time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolScope {
    Global,
    Local,
}

/// Symbol information
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbol {
    /// Symbol name
    pub name: String,
    /// Whether the binding is global or frame-local
    pub scope: SymbolScope,
    /// Slot index within the scope, assigned sequentially from 0
    pub index: usize,
}

/// Symbol table for name resolution
///
/// Tables nest: entering a function encloses the current table, leaving it
/// restores the outer one. Definitions in the outermost table are `Global`;
/// definitions in any enclosed table are `Local`. Resolution walks outward
/// until a hit, so inner names shadow outer ones.
#[derive(Debug, Default)]
pub struct SymbolTable {
    store: HashMap<String, Symbol>,
    num_definitions: usize,
    outer: Option<Box<SymbolTable>>,
}

impl SymbolTable {
    /// Create a new outermost (global) symbol table
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a table enclosed in `outer`
    pub fn enclosed(outer: SymbolTable) -> Self {
        Self {
            store: HashMap::new(),
            num_definitions: 0,
            outer: Some(Box::new(outer)),
        }
    }

    /// Define a name in this table and return its symbol
    ///
    /// Redefining a name reuses the name but still consumes a fresh index,
    /// matching sequential slot assignment.
    pub fn define(&mut self, name: &str) -> Symbol {
        let scope = if self.outer.is_none() {
            SymbolScope::Global
        } else {
            SymbolScope::Local
        };
        let symbol = Symbol {
            name: name.to_string(),
            scope,
            index: self.num_definitions,
        };
        self.store.insert(name.to_string(), symbol.clone());
        self.num_definitions += 1;
        symbol
    }

    /// Look up a name, walking outward through enclosing tables
    pub fn resolve(&self, name: &str) -> Option<&Symbol> {
        match self.store.get(name) {
            Some(symbol) => Some(symbol),
            None => self.outer.as_ref().and_then(|outer| outer.resolve(name)),
        }
    }

    /// Number of definitions made directly in this table
    pub fn num_definitions(&self) -> usize {
        self.num_definitions
    }

    /// Unwrap into the enclosing table; outermost tables yield a fresh one
    pub(crate) fn into_outer(self) -> SymbolTable {
        match self.outer {
            Some(outer) => *outer,
            None => SymbolTable::new(),
        }
    }
}

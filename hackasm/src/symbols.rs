use std::fmt::Display;

use indexmap::IndexMap;
use libhack::{Word, MAX_ADDRESS};

use crate::constants::{BUILTINS, VARIABLE_BASE};

/// Symbol name to address, for one assembly run.
///
/// Bindings are never overwritten: the first address bound to a name is the
/// one it keeps. Iteration follows binding order, built-ins first.
#[derive(Debug, Clone)]
pub struct SymbolTable {
    symbols: IndexMap<String, Word>,
    variables: usize,
}

impl SymbolTable {
    pub fn new() -> Self {
        let mut table = Self {
            symbols: IndexMap::new(),
            variables: 0,
        };
        for (name, address) in BUILTINS.iter() {
            table.bind(name, *address);
        }
        table
    }

    /// Bind `name` if it is not already bound. Returns whether it was inserted.
    pub fn bind(&mut self, name: &str, address: Word) -> bool {
        if self.symbols.contains_key(name) {
            return false;
        }
        self.symbols.insert(name.to_owned(), address);
        true
    }

    /// Bind `name` to the next free variable address, or return its existing address.
    /// `None` once variables would run past `MAX_ADDRESS`.
    pub fn allocate(&mut self, name: &str) -> Option<Word> {
        if let Some(address) = self.resolve(name) {
            return Some(address);
        }
        let address = Word::try_from(self.variables)
            .ok()
            .and_then(|offset| VARIABLE_BASE.checked_add(offset))
            .filter(|address| *address <= MAX_ADDRESS)?;
        self.symbols.insert(name.to_owned(), address);
        self.variables += 1;
        Some(address)
    }

    pub fn resolve(&self, name: &str) -> Option<Word> {
        self.symbols.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.symbols.contains_key(name)
    }

    pub fn variables(&self) -> usize {
        self.variables
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Word)> {
        self.symbols.iter().map(|(name, address)| (name.as_str(), *address))
    }
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::new()
    }
}

/// One `name:address` line per symbol.
impl Display for SymbolTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (name, address) in self.iter() {
            writeln!(f, "{}:{}", name, address)?;
        }
        Ok(())
    }
}

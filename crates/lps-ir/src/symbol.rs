//! Symbol table mapping variable names to variables.
//!
//! Insertion order is significant: it decides the column order of the
//! simplex tableau, so the table is backed by an `IndexMap` rather than a
//! plain hash map.

use indexmap::IndexMap;

use crate::variable::Variable;

/// Name-to-variable mapping with stable insertion order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SymbolTable {
    table: IndexMap<String, Variable>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up a variable by name.
    pub fn get(&self, name: &str) -> Option<&Variable> {
        self.table.get(name)
    }

    /// Looks up a variable by name, mutably.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut Variable> {
        self.table.get_mut(name)
    }

    /// Returns the variable with this name, creating it with default bounds
    /// on first reference.
    pub fn get_or_create(&mut self, name: &str) -> &mut Variable {
        self.table
            .entry(name.to_string())
            .or_insert_with(|| Variable::new(name))
    }

    /// Inserts a fresh variable unconditionally, replacing any previous entry
    /// with the same name. Used for synthesized slack variables.
    pub fn create(&mut self, name: &str) -> &mut Variable {
        let var = Variable::new(name);
        match self.table.entry(name.to_string()) {
            indexmap::map::Entry::Occupied(mut entry) => {
                entry.insert(var);
                entry.into_mut()
            }
            indexmap::map::Entry::Vacant(entry) => entry.insert(var),
        }
    }

    /// Column index of a variable: its insertion position.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.table.get_index_of(name)
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Variables in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Variable)> {
        self.table.iter()
    }

    /// Variables in insertion order, mutably.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (&String, &mut Variable)> {
        self.table.iter_mut()
    }

    /// Variable names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.table.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_or_create_is_idempotent() {
        let mut symbols = SymbolTable::new();
        symbols.get_or_create("x").set_lower_bound(2.0, false);
        let again = symbols.get_or_create("x");
        assert_eq!(again.lower_bound, 2.0);
        assert_eq!(symbols.len(), 1);
    }

    #[test]
    fn insertion_order_is_stable() {
        let mut symbols = SymbolTable::new();
        symbols.get_or_create("z");
        symbols.get_or_create("a");
        symbols.get_or_create("m");
        let names: Vec<_> = symbols.names().collect();
        assert_eq!(names, vec!["z", "a", "m"]);
        assert_eq!(symbols.index_of("a"), Some(1));
        assert_eq!(symbols.index_of("missing"), None);
    }

    #[test]
    fn create_replaces_but_keeps_position() {
        let mut symbols = SymbolTable::new();
        symbols.get_or_create("x").set_lower_bound(4.0, false);
        symbols.get_or_create("y");
        symbols.create("x");
        assert_eq!(symbols.get("x").unwrap().lower_bound, 0.0);
        assert_eq!(symbols.index_of("x"), Some(0));
    }
}

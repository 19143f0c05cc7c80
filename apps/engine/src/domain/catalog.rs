//! The immutable, name-ordered set of practicable symbols.

use crate::domain::symbol::{canonical_name, is_unknown_name, Symbol, FINGERSPELLING_ALPHABET};

/// Ordered catalog of practicable symbols.
///
/// Built once and never mutated: sorted by name, no duplicates, never holds
/// the Unknown sentinel. Share it with `Arc<SymbolCatalog>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolCatalog {
    symbols: Vec<Symbol>,
}

impl SymbolCatalog {
    /// Catalog of the full fingerspelling alphabet.
    pub fn standard() -> Self {
        Self::from_names(FINGERSPELLING_ALPHABET)
    }

    /// Build from arbitrary names. Blank names and the sentinel are dropped.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut symbols: Vec<Symbol> = names
            .into_iter()
            .map(|raw| canonical_name(raw.as_ref()))
            .filter(|name| !name.is_empty() && !is_unknown_name(name))
            .map(|name| Symbol::letter(&name))
            .collect();
        symbols.sort_by(|a, b| a.name().cmp(b.name()));
        symbols.dedup();
        Self { symbols }
    }

    pub fn find(&self, name: &str) -> Option<&Symbol> {
        let wanted = canonical_name(name);
        self.symbols.iter().find(|s| s.name() == wanted)
    }

    /// Lookup that degrades to Unknown when the name is absent.
    pub fn resolve(&self, name: &str) -> Symbol {
        self.find(name).cloned().unwrap_or_else(Symbol::unknown)
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        let wanted = canonical_name(name);
        self.symbols.iter().position(|s| s.name() == wanted)
    }

    pub fn get(&self, index: usize) -> Option<&Symbol> {
        self.symbols.get(index)
    }

    pub fn first(&self) -> Option<&Symbol> {
        self.symbols.first()
    }

    pub fn last(&self) -> Option<&Symbol> {
        self.symbols.last()
    }

    pub fn names(&self) -> Vec<&str> {
        self.symbols.iter().map(Symbol::name).collect()
    }

    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

impl Default for SymbolCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

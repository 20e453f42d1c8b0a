//! Symbols and the per-run symbol table.
//!
//! Symbols are interned by name: declaring the same name twice yields the
//! same symbol, and two symbols are equal exactly when their names are.

use std::fmt;
use std::rc::Rc;

use hashbrown::HashMap;

use crate::error::{DeriveError, Result};

/// An immutable named scalar unknown.
///
/// Cloning is a reference-count bump. Ordering is by name, which fixes the
/// lexicographic monomial order used for printing.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Symbol(Rc<str>);

impl Symbol {
    /// Returns the symbol's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Symbol({})", self.0)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Declares the symbols available to one derivation run.
#[derive(Clone, Debug, Default)]
pub struct SymbolTable {
    /// Maps names to their position in `symbols`.
    index: HashMap<Rc<str>, usize>,
    /// Symbols in declaration order.
    symbols: Vec<Symbol>,
}

impl SymbolTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares a symbol, returning the existing one if the name is taken.
    pub fn declare(&mut self, name: &str) -> Symbol {
        if let Some(&i) = self.index.get(name) {
            return self.symbols[i].clone();
        }

        let name: Rc<str> = Rc::from(name);
        let symbol = Symbol(Rc::clone(&name));
        self.index.insert(name, self.symbols.len());
        self.symbols.push(symbol.clone());
        symbol
    }

    /// Declares every name in order.
    pub fn declare_all<'a>(&mut self, names: impl IntoIterator<Item = &'a str>) -> Vec<Symbol> {
        names.into_iter().map(|name| self.declare(name)).collect()
    }

    /// Looks up a previously declared symbol.
    ///
    /// # Errors
    ///
    /// Returns `UnknownSymbol` if `name` was never declared.
    pub fn lookup(&self, name: &str) -> Result<Symbol> {
        self.index
            .get(name)
            .map(|&i| self.symbols[i].clone())
            .ok_or_else(|| DeriveError::UnknownSymbol {
                name: name.to_string(),
            })
    }

    /// Checks that a symbol was declared in this table.
    ///
    /// # Errors
    ///
    /// Returns `UnknownSymbol` if the symbol's name is not declared here.
    pub fn ensure_declared(&self, symbol: &Symbol) -> Result<()> {
        if self.contains(symbol.name()) {
            Ok(())
        } else {
            Err(DeriveError::UnknownSymbol {
                name: symbol.name().to_string(),
            })
        }
    }

    /// Returns true if `name` is declared.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Returns the number of declared symbols.
    #[must_use]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Returns true if nothing has been declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Iterates over symbols in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &Symbol> {
        self.symbols.iter()
    }
}

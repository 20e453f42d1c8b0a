//! The fixed equations coeffgen knows how to eliminate.
//!
//! Each scenario declares its own symbols, assembles its governing equation
//! through the checked `Value` algebra, and fixes the pivot and the
//! expected polynomial degree. Nothing here is read from the outside world.

use std::fmt;
use std::str::FromStr;

use coeffgen_core::{Result, Symbol, SymbolTable};
use coeffgen_poly::Expr;

use crate::value::Value;

/// Entries of the first fundamental-matrix basis element, row-major.
const F1: [&str; 9] = ["a", "b", "c", "d", "e", "f", "g", "h", "i"];
/// Entries of the second fundamental-matrix basis element, row-major.
const F2: [&str; 9] = ["j", "k", "l", "m", "n", "o", "p", "q", "r"];
/// Dot products and squared norms of the panoramic image rays.
const PANOGRAPHY: [&str; 6] = ["a12", "a1", "a2", "b12", "b1", "b2"];

/// A hardcoded elimination problem.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum Scenario {
    /// Seven-point fundamental matrix: `det(F1 + z*F2) = 0`.
    #[default]
    Fundamental,
    /// Seven-point fundamental matrix as a convex combination:
    /// `det(alpha*F1 + (1 - alpha)*F2) = 0`.
    FundamentalConvex,
    /// Focal length of a rotating camera from two point pairs
    /// (Brown, Hartley and Nister, equation 12), cubic in `f2 = f^2`.
    Panography,
}

impl Scenario {
    /// All scenarios, in display order.
    pub const ALL: [Scenario; 3] = [
        Scenario::Fundamental,
        Scenario::FundamentalConvex,
        Scenario::Panography,
    ];

    /// Returns the command-line name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Scenario::Fundamental => "fundamental",
            Scenario::FundamentalConvex => "fundamental-convex",
            Scenario::Panography => "panography",
        }
    }

    /// Returns a one-line description of the equation.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Scenario::Fundamental => "det(F1 + z*F2) over two symbolic 3x3 matrices, pivot z",
            Scenario::FundamentalConvex => {
                "det(alpha*F1 + (1 - alpha)*F2) over two symbolic 3x3 matrices, pivot alpha"
            }
            Scenario::Panography => {
                "(a12+f2)^2 (b1+f2)(b2+f2) - (b12+f2)^2 (a1+f2)(a2+f2), pivot f2"
            }
        }
    }

    /// Declares the symbols and assembles the equation.
    ///
    /// # Errors
    ///
    /// Propagates any algebra error raised while assembling the equation.
    pub fn build(&self) -> Result<Derivation> {
        match self {
            Scenario::Fundamental => fundamental(),
            Scenario::FundamentalConvex => fundamental_convex(),
            Scenario::Panography => panography(),
        }
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Scenario {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Scenario::ALL
            .into_iter()
            .find(|sc| sc.name() == s)
            .ok_or_else(|| {
                let names: Vec<_> = Scenario::ALL.iter().map(Scenario::name).collect();
                format!("unknown scenario `{s}` (expected one of: {})", names.join(", "))
            })
    }
}

/// An assembled equation ready for collection.
#[derive(Debug)]
pub struct Derivation {
    symbols: SymbolTable,
    equation: Expr,
    pivot: Symbol,
    max_degree: u32,
}

impl Derivation {
    /// Bundles an equation with its symbols, pivot and declared degree.
    #[must_use]
    pub fn new(symbols: SymbolTable, equation: Expr, pivot: Symbol, max_degree: u32) -> Self {
        Self {
            symbols,
            equation,
            pivot,
            max_degree,
        }
    }

    /// Returns the symbol table the equation was built from.
    #[must_use]
    pub fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    /// Returns the expanded equation (implicitly `= 0`).
    #[must_use]
    pub fn equation(&self) -> &Expr {
        &self.equation
    }

    /// Returns the pivot symbol.
    #[must_use]
    pub fn pivot(&self) -> &Symbol {
        &self.pivot
    }

    /// Returns the declared maximum pivot degree.
    #[must_use]
    pub fn max_degree(&self) -> u32 {
        self.max_degree
    }
}

fn symbol_matrix(symbols: &SymbolTable, names: [&str; 9]) -> Result<Value> {
    let mut entries: [Value; 9] = std::array::from_fn(|_| Value::from(0));
    for (slot, name) in entries.iter_mut().zip(names) {
        *slot = Value::from(symbols.lookup(name)?);
    }
    Value::matrix(entries)
}

fn fundamental() -> Result<Derivation> {
    let mut symbols = SymbolTable::new();
    symbols.declare_all(F1);
    symbols.declare_all(F2);
    let pivot = symbols.declare("z");

    let f1 = symbol_matrix(&symbols, F1)?;
    let f2 = symbol_matrix(&symbols, F2)?;
    let z = Value::from(pivot.clone());

    let equation = f1
        .add(z.multiply(f2)?)?
        .determinant()?
        .into_expr("determinant")?;

    Ok(Derivation::new(symbols, equation, pivot, 3))
}

fn fundamental_convex() -> Result<Derivation> {
    let mut symbols = SymbolTable::new();
    symbols.declare_all(F1);
    symbols.declare_all(F2);
    let pivot = symbols.declare("alpha");

    let f1 = symbol_matrix(&symbols, F1)?;
    let f2 = symbol_matrix(&symbols, F2)?;
    let alpha = Value::from(pivot.clone());
    let complement = Value::from(1).sub(alpha.clone())?;

    let equation = alpha
        .multiply(f1)?
        .add(complement.multiply(f2)?)?
        .determinant()?
        .into_expr("determinant")?;

    Ok(Derivation::new(symbols, equation, pivot, 3))
}

fn panography() -> Result<Derivation> {
    let mut symbols = SymbolTable::new();
    let pivot = symbols.declare("f2");
    symbols.declare_all(PANOGRAPHY);

    let shifted = |name: &str| -> Result<Value> {
        Value::from(symbols.lookup(name)?).add(Value::from(pivot.clone()))
    };

    // The f2^4 terms cancel, leaving a cubic.
    let lhs = shifted("a12")?
        .power(2)?
        .multiply(shifted("b1")?)?
        .multiply(shifted("b2")?)?;
    let rhs = shifted("b12")?
        .power(2)?
        .multiply(shifted("a1")?)?
        .multiply(shifted("a2")?)?;
    let equation = lhs.sub(rhs)?.into_expr("sub")?;

    Ok(Derivation::new(symbols, equation, pivot, 3))
}

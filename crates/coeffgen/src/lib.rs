//! # coeffgen
//!
//! Derives closed-form polynomial coefficients for minimal multi-view
//! geometry solvers.
//!
//! A scenario eliminates all but one unknown from a geometric constraint
//! (typically through a 3x3 determinant), expands the result, collects it
//! by powers of a pivot symbol and prints the coefficients as an array
//! literal for a numeric root finder.
//!
//! ## Quick Start
//!
//! ```rust
//! use coeffgen::prelude::*;
//!
//! let out = coeffgen::run(Scenario::Panography, &EmitConfig::default()).unwrap();
//! assert_eq!(out.table.len(), 4);
//! assert!(out.text.starts_with("// Coefficients in ascending powers of f2"));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod pipeline;
pub mod scenario;
pub mod value;

pub use coeffgen_core as core;
pub use coeffgen_emit as emit;
pub use coeffgen_linalg as linalg;
pub use coeffgen_poly as poly;
pub use coeffgen_rings as rings;

pub use pipeline::{derive, run, Output};
pub use scenario::{Derivation, Scenario};
pub use value::Value;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use coeffgen_core::{DeriveError, Symbol, SymbolTable};
    pub use coeffgen_emit::{EmitConfig, Emitter, Target};
    pub use coeffgen_linalg::Matrix3;
    pub use coeffgen_poly::{collect, CoefficientTable, Expr};
    pub use coeffgen_rings::{One, Ring, Zero, Q};

    pub use crate::scenario::{Derivation, Scenario};
    pub use crate::value::Value;
}

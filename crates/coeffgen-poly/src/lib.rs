//! # coeffgen-poly
//!
//! Fully expanded multivariate expressions over exact rationals.
//!
//! This crate provides:
//! - Sparse monomials keyed by named symbols
//! - `Expr`, a canonical sum of monomials that stays expanded under every
//!   operation
//! - The coefficient collector, which regroups an expression as a dense
//!   univariate polynomial in a pivot symbol
//!
//! ## Canonical Form
//!
//! An `Expr` never holds an unexpanded product or power. Terms with the same
//! monomial are merged as soon as they meet, zero terms are dropped, and the
//! remaining terms are kept in descending lexicographic order so that two
//! equal expressions are structurally identical.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod collect;
pub mod expr;
pub mod monomial;

#[cfg(test)]
mod proptests;

pub use collect::{collect, CoefficientTable};
pub use expr::Expr;
pub use monomial::Monomial;

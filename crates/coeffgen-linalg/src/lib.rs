//! # coeffgen-linalg
//!
//! Fixed-size matrices over any `Ring`.
//!
//! Elimination in the two-view scenarios goes through a single 3x3
//! determinant, so this crate carries exactly that: element-wise
//! arithmetic, row operations, and the closed-form six-term determinant.
//! The same code runs over rationals (for checking identities numerically)
//! and over symbolic expressions (for derivations).

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod matrix;

#[cfg(test)]
mod proptests;

pub use matrix::Matrix3;

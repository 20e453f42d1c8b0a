//! # coeffgen-rings
//!
//! Exact scalar arithmetic for coeffgen.
//!
//! This crate provides:
//! - The `Ring` trait shared by scalars, expressions and matrix entries,
//!   built on the `num_traits` identities `Zero` and `One`
//! - The field of rationals `Q`, backed by `dashu` arbitrary precision
//!
//! Nothing in the derivation pipeline uses floating point. Numeric factors
//! that arise while expanding determinants stay exact until the emitter
//! spells them as literals.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod rationals;
pub mod traits;

#[cfg(test)]
mod proptests;

pub use num_traits::{One, Zero};
pub use rationals::Q;
pub use traits::Ring;

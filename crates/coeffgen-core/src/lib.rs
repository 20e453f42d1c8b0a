//! # coeffgen-core
//!
//! Shared vocabulary for the coeffgen derivation pipeline.
//!
//! This crate provides:
//! - `Symbol`, an immutable named scalar unknown
//! - `SymbolTable`, which declares the symbols of one derivation run
//! - `DeriveError`, the error taxonomy every stage reports through

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod symbol;

pub use error::{Component, DeriveError, Result};
pub use symbol::{Symbol, SymbolTable};

//! # coeffgen-emit
//!
//! Renders a coefficient table as an array literal that a numeric solver
//! can paste in verbatim.
//!
//! Rendering is split in two:
//! - `ArraySyntax` knows how one target language spells comments, array
//!   declarations and numeric literals
//! - `Emitter` walks the table and the expressions and stays the same for
//!   every target
//!
//! Output is deterministic: the same table always yields the same bytes.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod emitter;
pub mod syntax;

pub use emitter::{render_expr, EmitConfig, Emitter};
pub use syntax::{ArraySyntax, Target};

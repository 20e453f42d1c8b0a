//! Target-language spelling of array literals.

use std::fmt;
use std::str::FromStr;

use coeffgen_rings::Q;

/// How a target language spells the pieces of a coefficient array.
pub trait ArraySyntax {
    /// A single-line comment.
    fn comment(&self, text: &str) -> String;

    /// The line that opens an array of `len` doubles named `name`.
    fn open_array(&self, name: &str, len: usize) -> String;

    /// The line that closes the array.
    fn close_array(&self) -> &'static str;

    /// Terminator written after every element.
    fn separator(&self) -> &'static str {
        ","
    }

    /// A non-negative integer literal usable in floating-point arithmetic.
    fn integer(&self, digits: &str) -> String;

    /// A non-negative rational literal that cannot fall into integer division.
    fn rational(&self, numerator: &str, denominator: &str) -> String {
        format!("({numerator}.0/{denominator}.0)")
    }

    /// Spells a non-negative exact scalar.
    fn scalar(&self, value: &Q) -> String {
        if value.is_integer() {
            self.integer(&value.numerator())
        } else {
            self.rational(&value.numerator(), &value.denominator())
        }
    }

    /// The literal for a coefficient that vanishes identically.
    fn zero(&self) -> String {
        self.integer("0")
    }
}

/// Supported output languages.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum Target {
    /// A C/C++ `double` array initializer.
    #[default]
    C,
    /// A Rust `[f64; N]` binding.
    Rust,
    /// A Python list.
    Python,
}

impl Target {
    /// All targets, in display order.
    pub const ALL: [Target; 3] = [Target::C, Target::Rust, Target::Python];

    /// Returns a short name for the target.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Target::C => "c",
            Target::Rust => "rust",
            Target::Python => "python",
        }
    }
}

impl ArraySyntax for Target {
    fn comment(&self, text: &str) -> String {
        match self {
            Target::C | Target::Rust => format!("// {text}"),
            Target::Python => format!("# {text}"),
        }
    }

    fn open_array(&self, name: &str, len: usize) -> String {
        match self {
            Target::C => format!("double {name}[{len}] = {{"),
            Target::Rust => format!("let {name}: [f64; {len}] = ["),
            Target::Python => format!("{name} = ["),
        }
    }

    fn close_array(&self) -> &'static str {
        match self {
            Target::C => "};",
            Target::Rust => "];",
            Target::Python => "]",
        }
    }

    fn integer(&self, digits: &str) -> String {
        match self {
            // Rust does not mix integer and float operands
            Target::Rust => format!("{digits}.0"),
            Target::C | Target::Python => digits.to_string(),
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Target {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Target::ALL
            .into_iter()
            .find(|t| t.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown target `{s}` (expected c, rust or python)"))
    }
}

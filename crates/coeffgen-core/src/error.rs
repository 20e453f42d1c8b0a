//! Error taxonomy for the derivation pipeline.
//!
//! Every failure is fatal for the current run: a coefficient list with a
//! silently wrong or missing entry would corrupt the numeric solver that
//! embeds it.

use std::fmt;

use thiserror::Error;

/// The pipeline stage that raised an error.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Component {
    /// Symbol declaration and lookup.
    SymbolTable,
    /// Scalar expression construction and expansion.
    ExpressionAlgebra,
    /// 3x3 matrix assembly and determinants.
    MatrixAlgebra,
    /// Grouping of monomials by pivot degree.
    CoefficientCollector,
}

impl Component {
    /// Returns a short human-readable name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Component::SymbolTable => "symbol table",
            Component::ExpressionAlgebra => "expression algebra",
            Component::MatrixAlgebra => "matrix algebra",
            Component::CoefficientCollector => "coefficient collector",
        }
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Errors raised while building, expanding or collecting an equation.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum DeriveError {
    /// An operation received an operand of the wrong kind.
    #[error("{component}: `{operation}` expects {expected}, found {found}")]
    TypeMismatch {
        /// Stage that rejected the operand.
        component: Component,
        /// Name of the rejected operation.
        operation: &'static str,
        /// Operand kinds the operation accepts.
        expected: &'static str,
        /// Operand kind that was supplied.
        found: &'static str,
    },

    /// A symbol was referenced without being declared.
    #[error("symbol table: unknown symbol `{name}`")]
    UnknownSymbol {
        /// The undeclared name.
        name: String,
    },

    /// The pivot degree of the equation exceeds the declared maximum.
    #[error(
        "coefficient collector: pivot `{pivot}` appears with degree {degree}, \
         but the maximum degree was declared as {max_degree}"
    )]
    DegreeOverflow {
        /// Name of the pivot symbol.
        pivot: String,
        /// Highest pivot exponent found in the equation.
        degree: u32,
        /// Caller-declared maximum degree.
        max_degree: u32,
    },
}

impl DeriveError {
    /// Returns the component that raised this error.
    #[must_use]
    pub fn component(&self) -> Component {
        match self {
            DeriveError::TypeMismatch { component, .. } => *component,
            DeriveError::UnknownSymbol { .. } => Component::SymbolTable,
            DeriveError::DegreeOverflow { .. } => Component::CoefficientCollector,
        }
    }
}

/// Result alias used throughout coeffgen.
pub type Result<T> = std::result::Result<T, DeriveError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_component() {
        let err = DeriveError::TypeMismatch {
            component: Component::MatrixAlgebra,
            operation: "det",
            expected: "a matrix",
            found: "a symbol",
        };
        assert_eq!(err.to_string(), "matrix algebra: `det` expects a matrix, found a symbol");
        assert_eq!(err.component(), Component::MatrixAlgebra);

        let err = DeriveError::UnknownSymbol { name: "w".into() };
        assert_eq!(err.to_string(), "symbol table: unknown symbol `w`");

        let err = DeriveError::DegreeOverflow {
            pivot: "z".into(),
            degree: 4,
            max_degree: 3,
        };
        assert!(err.to_string().starts_with("coefficient collector: pivot `z`"));
        assert_eq!(err.component(), Component::CoefficientCollector);
    }
}

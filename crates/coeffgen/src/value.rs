//! Dynamically checked operands.
//!
//! Scenario definitions combine numbers, symbols, expressions and matrices
//! freely. `Value` carries the operand kind at runtime so that a misuse,
//! such as raising a matrix to a power, is reported as a `TypeMismatch`
//! naming the operation instead of producing a wrong equation.

use coeffgen_core::{Component, DeriveError, Result, Symbol};
use coeffgen_linalg::Matrix3;
use coeffgen_poly::Expr;
use coeffgen_rings::Q;

/// An operand of the derivation algebra.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Value {
    /// An exact numeric constant.
    Number(Q),
    /// A declared symbol.
    Symbol(Symbol),
    /// An expanded expression.
    Expr(Expr),
    /// A 3x3 matrix of expressions.
    Matrix(Box<Matrix3<Expr>>),
}

const SCALAR: &str = "a number, symbol or expression";

impl Value {
    /// Returns the operand kind, as used in diagnostics.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Number(_) => "a number",
            Value::Symbol(_) => "a symbol",
            Value::Expr(_) => "an expression",
            Value::Matrix(_) => "a matrix",
        }
    }

    /// Builds a matrix from nine scalar operands in row-major order.
    ///
    /// # Errors
    ///
    /// Returns `TypeMismatch` if any entry is itself a matrix.
    pub fn matrix(entries: [Value; 9]) -> Result<Value> {
        let mut exprs: [Expr; 9] = std::array::from_fn(|_| Expr::zero());
        for (slot, entry) in exprs.iter_mut().zip(entries) {
            *slot = entry.into_scalar(Component::MatrixAlgebra, "matrix")?;
        }
        Ok(Value::Matrix(Box::new(Matrix3::from_row_major(exprs))))
    }

    /// Converts a scalar operand into an expression.
    ///
    /// # Errors
    ///
    /// Returns `TypeMismatch` if the operand is a matrix.
    pub fn into_expr(self, operation: &'static str) -> Result<Expr> {
        self.into_scalar(Component::ExpressionAlgebra, operation)
    }

    /// Converts a matrix operand into its matrix.
    ///
    /// # Errors
    ///
    /// Returns `TypeMismatch` if the operand is a scalar.
    pub fn into_matrix(self, operation: &'static str) -> Result<Matrix3<Expr>> {
        match self {
            Value::Matrix(m) => Ok(*m),
            other => Err(mismatch(Component::MatrixAlgebra, operation, "a matrix", &other)),
        }
    }

    /// Adds two scalars, or two matrices element-wise.
    ///
    /// # Errors
    ///
    /// Returns `TypeMismatch` when a scalar meets a matrix.
    pub fn add(self, rhs: Value) -> Result<Value> {
        match (self, rhs) {
            (Value::Matrix(a), Value::Matrix(b)) => Ok(Value::from(&*a + &*b)),
            (Value::Matrix(_), other) | (other, Value::Matrix(_)) => Err(mismatch(
                Component::MatrixAlgebra,
                "add",
                "two matrices or two scalars",
                &other,
            )),
            (a, b) => Ok(Value::Expr(&a.into_expr("add")? + &b.into_expr("add")?)),
        }
    }

    /// Subtracts two scalars, or two matrices element-wise.
    ///
    /// # Errors
    ///
    /// Returns `TypeMismatch` when a scalar meets a matrix.
    pub fn sub(self, rhs: Value) -> Result<Value> {
        match (self, rhs) {
            (Value::Matrix(a), Value::Matrix(b)) => Ok(Value::from(&*a - &*b)),
            (Value::Matrix(_), other) | (other, Value::Matrix(_)) => Err(mismatch(
                Component::MatrixAlgebra,
                "sub",
                "two matrices or two scalars",
                &other,
            )),
            (a, b) => Ok(Value::Expr(&a.into_expr("sub")? - &b.into_expr("sub")?)),
        }
    }

    /// Multiplies two scalars, or scales a matrix by a scalar.
    ///
    /// # Errors
    ///
    /// Returns `TypeMismatch` for a product of two matrices.
    pub fn multiply(self, rhs: Value) -> Result<Value> {
        match (self, rhs) {
            (Value::Matrix(_), Value::Matrix(_)) => Err(DeriveError::TypeMismatch {
                component: Component::MatrixAlgebra,
                operation: "multiply",
                expected: "at least one scalar operand",
                found: "two matrices",
            }),
            (Value::Matrix(m), k) | (k, Value::Matrix(m)) => {
                let k = k.into_expr("multiply")?;
                Ok(Value::from(m.scale(&k)))
            }
            (a, b) => Ok(Value::Expr(&a.into_expr("multiply")? * &b.into_expr("multiply")?)),
        }
    }

    /// Raises a scalar to a non-negative integer power.
    ///
    /// # Errors
    ///
    /// Returns `TypeMismatch` if the operand is a matrix.
    pub fn power(self, n: u32) -> Result<Value> {
        Ok(Value::Expr(self.into_expr("power")?.pow(n)))
    }

    /// Multiplies by a numeric constant.
    ///
    /// Works for scalars and, element-wise, for matrices.
    ///
    /// # Errors
    ///
    /// This never fails today; the signature matches the other operations.
    pub fn scale(self, k: &Q) -> Result<Value> {
        match self {
            Value::Matrix(m) => Ok(Value::from(m.scale(&Expr::constant(k.clone())))),
            scalar => Ok(Value::Expr(scalar.into_expr("scale")?.scale(k))),
        }
    }

    /// Negates a scalar or a matrix.
    ///
    /// # Errors
    ///
    /// This never fails today; the signature matches the other operations.
    pub fn neg(self) -> Result<Value> {
        self.scale(&-Q::from_integer(1))
    }

    /// Computes the determinant of a matrix operand.
    ///
    /// # Errors
    ///
    /// Returns `TypeMismatch` if the operand is not a matrix.
    pub fn determinant(self) -> Result<Value> {
        Ok(Value::Expr(self.into_matrix("determinant")?.det()))
    }

    fn into_scalar(self, component: Component, operation: &'static str) -> Result<Expr> {
        match self {
            Value::Number(q) => Ok(Expr::constant(q)),
            Value::Symbol(s) => Ok(Expr::symbol(s)),
            Value::Expr(e) => Ok(e),
            other @ Value::Matrix(_) => Err(mismatch(component, operation, SCALAR, &other)),
        }
    }
}

fn mismatch(
    component: Component,
    operation: &'static str,
    expected: &'static str,
    found: &Value,
) -> DeriveError {
    DeriveError::TypeMismatch {
        component,
        operation,
        expected,
        found: found.kind(),
    }
}

impl From<Q> for Value {
    fn from(q: Q) -> Self {
        Value::Number(q)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(Q::from_integer(n))
    }
}

impl From<Symbol> for Value {
    fn from(s: Symbol) -> Self {
        Value::Symbol(s)
    }
}

impl From<Expr> for Value {
    fn from(e: Expr) -> Self {
        Value::Expr(e)
    }
}

impl From<Matrix3<Expr>> for Value {
    fn from(m: Matrix3<Expr>) -> Self {
        Value::Matrix(Box::new(m))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use coeffgen_core::SymbolTable;

    fn symbol_matrix(table: &mut SymbolTable, names: [&str; 9]) -> Value {
        Value::matrix(names.map(|n| Value::from(table.declare(n)))).unwrap()
    }

    #[test]
    fn test_scalar_arithmetic() {
        let mut table = SymbolTable::new();
        let x = Value::from(table.declare("x"));

        // (x + 1)^2 - 2x = x^2 + 1
        let e = x
            .clone()
            .add(Value::from(1))
            .and_then(|v| v.power(2))
            .and_then(|v| v.sub(x.scale(&Q::from_integer(2)).unwrap()))
            .and_then(|v| v.into_expr("test"))
            .unwrap();
        assert_eq!(e.to_string(), "x^2 + 1");
    }

    #[test]
    fn test_matrix_operations() {
        let mut table = SymbolTable::new();
        let a = symbol_matrix(&mut table, ["a", "b", "c", "d", "e", "f", "g", "h", "i"]);
        let z = Value::from(table.declare("z"));

        let scaled = z.multiply(a.clone()).unwrap();
        let m = scaled.clone().into_matrix("test").unwrap();
        assert_eq!(m[(1, 1)].to_string(), "e*z");

        let sum = a.clone().add(scaled).unwrap();
        assert_eq!(sum.kind(), "a matrix");

        let det = a.determinant().unwrap().into_expr("test").unwrap();
        assert_eq!(det.len(), 6);
    }

    #[test]
    fn test_type_mismatches() {
        let mut table = SymbolTable::new();
        let a = symbol_matrix(&mut table, ["a", "b", "c", "d", "e", "f", "g", "h", "i"]);
        let x = Value::from(table.declare("x"));

        let err = x.clone().determinant().unwrap_err();
        assert_eq!(
            err,
            DeriveError::TypeMismatch {
                component: Component::MatrixAlgebra,
                operation: "determinant",
                expected: "a matrix",
                found: "a symbol",
            }
        );

        let err = a.clone().power(2).unwrap_err();
        assert_eq!(err.component(), Component::ExpressionAlgebra);
        assert!(err.to_string().contains("found a matrix"));

        assert!(a.clone().add(x.clone()).is_err());
        assert!(x.add(a.clone()).is_err());
        assert!(a.clone().multiply(a.clone()).is_err());
        assert!(Value::matrix(std::array::from_fn(|_| a.clone())).is_err());
    }

    #[test]
    fn test_neg_and_scale() {
        let mut table = SymbolTable::new();
        let x = Value::from(table.declare("x"));

        let e = x.neg().unwrap().into_expr("test").unwrap();
        assert_eq!(e.to_string(), "-x");

        let a = symbol_matrix(&mut table, ["a", "b", "c", "d", "e", "f", "g", "h", "i"]);
        let m = a.scale(&Q::new(1, 2)).unwrap().into_matrix("test").unwrap();
        assert_eq!(m[(0, 0)].to_string(), "1/2*a");
        assert_eq!(Value::from(3).kind(), "a number");
    }
}

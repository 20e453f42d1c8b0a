//! Collection of an expanded expression by powers of a pivot symbol.
//!
//! The result is dense: a numeric solver consumes it as a fixed-size array
//! with one slot per degree, so a vanishing coefficient is stored as the
//! zero expression rather than omitted.

use coeffgen_core::{DeriveError, Result, Symbol};
use tracing::{debug, warn};

use crate::expr::Expr;
use crate::monomial::Monomial;

/// Coefficients of a polynomial in one pivot symbol, indexed by degree.
///
/// Invariant: exactly `max_degree + 1` entries, one per degree.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct CoefficientTable {
    pivot: Symbol,
    coeffs: Vec<Expr>,
}

impl CoefficientTable {
    /// Returns the pivot symbol.
    #[must_use]
    pub fn pivot(&self) -> &Symbol {
        &self.pivot
    }

    /// Returns the declared maximum degree N.
    #[must_use]
    pub fn max_degree(&self) -> u32 {
        // Construction guarantees at least one entry.
        (self.coeffs.len() - 1) as u32
    }

    /// Returns the number of entries (N + 1).
    #[must_use]
    pub fn len(&self) -> usize {
        self.coeffs.len()
    }

    /// Always false; the table holds at least the degree-0 entry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.coeffs.is_empty()
    }

    /// Returns the coefficient of `pivot^degree`.
    #[must_use]
    pub fn get(&self, degree: u32) -> Option<&Expr> {
        self.coeffs.get(degree as usize)
    }

    /// Iterates over `(degree, coefficient)` in ascending degree.
    pub fn iter(&self) -> impl Iterator<Item = (u32, &Expr)> {
        self.coeffs.iter().enumerate().map(|(d, c)| (d as u32, c))
    }

    /// Returns the coefficients as a slice, index = degree.
    #[must_use]
    pub fn coefficients(&self) -> &[Expr] {
        &self.coeffs
    }

    /// Returns the coefficient of the declared maximum degree.
    #[must_use]
    pub fn leading(&self) -> &Expr {
        &self.coeffs[self.coeffs.len() - 1]
    }

    /// Returns true if the leading coefficient vanishes identically.
    ///
    /// For a well-posed scenario this never happens; a structurally zero
    /// leading term means the declared degree overstates the polynomial.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.leading().is_zero()
    }

    /// Rebuilds `sum(coeff[i] * pivot^i)` as a single expanded expression.
    #[must_use]
    pub fn reconstruct(&self) -> Expr {
        let pivot = Expr::symbol(self.pivot.clone());
        let mut power = Expr::one();
        let mut sum = Expr::zero();

        for c in &self.coeffs {
            sum = &sum + &(c * &power);
            power = &power * &pivot;
        }

        sum
    }
}

/// Groups the monomials of `expr` by their exponent of `pivot`.
///
/// Every degree in `0..=max_degree` receives an entry, the zero expression
/// when no monomial lands there.
///
/// # Errors
///
/// Returns `DegreeOverflow` if any monomial carries `pivot` with an exponent
/// above `max_degree`.
pub fn collect(expr: &Expr, pivot: &Symbol, max_degree: u32) -> Result<CoefficientTable> {
    let degree = expr.degree_in(pivot);
    if degree > max_degree {
        return Err(DeriveError::DegreeOverflow {
            pivot: pivot.name().to_string(),
            degree,
            max_degree,
        });
    }

    let mut buckets: Vec<Vec<(Monomial, _)>> = vec![Vec::new(); max_degree as usize + 1];
    for (m, c) in expr.terms() {
        let (e, rest) = m.split_off(pivot);
        buckets[e as usize].push((rest, c.clone()));
    }

    let coeffs: Vec<Expr> = buckets.into_iter().map(Expr::new).collect();
    for (d, c) in coeffs.iter().enumerate() {
        debug!(pivot = %pivot, degree = d, terms = c.len(), "collected coefficient");
    }

    let table = CoefficientTable {
        pivot: pivot.clone(),
        coeffs,
    };
    if table.is_degenerate() {
        warn!(
            pivot = %pivot,
            degree = max_degree,
            "leading coefficient vanishes identically; the declared degree may be too high"
        );
    }

    Ok(table)
}

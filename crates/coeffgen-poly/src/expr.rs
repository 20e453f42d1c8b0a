//! Fully expanded expressions.
//!
//! An `Expr` is a sum of `(monomial, coefficient)` terms. Every operation
//! distributes immediately, so callers never observe an unexpanded product
//! or power.

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use coeffgen_core::{DeriveError, Result, Symbol};
use coeffgen_rings::{One, Ring, Zero, Q};
use rustc_hash::FxHashMap;

use crate::monomial::Monomial;

/// A polynomial in named symbols with exact rational coefficients.
///
/// Terms are sorted in descending lexicographic monomial order, no two
/// terms share a monomial, and no coefficient is zero.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Default)]
pub struct Expr {
    terms: Vec<(Monomial, Q)>,
}

impl Expr {
    /// Creates an expression from terms, sorting and combining like terms.
    #[must_use]
    pub fn new(terms: Vec<(Monomial, Q)>) -> Self {
        let mut expr = Self { terms };
        expr.normalize();
        expr
    }

    /// Creates the zero expression.
    #[must_use]
    pub fn zero() -> Self {
        Self::default()
    }

    /// Creates the constant expression 1.
    #[must_use]
    pub fn one() -> Self {
        Self::constant(Q::one())
    }

    /// Creates a constant expression.
    #[must_use]
    pub fn constant(c: Q) -> Self {
        if c.is_zero() {
            Self::zero()
        } else {
            Self {
                terms: vec![(Monomial::one(), c)],
            }
        }
    }

    /// Creates the expression consisting of a single symbol.
    #[must_use]
    pub fn symbol(symbol: Symbol) -> Self {
        Self {
            terms: vec![(Monomial::var(symbol), Q::one())],
        }
    }

    /// Returns true if this is the zero expression.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }

    /// Returns the number of terms.
    #[must_use]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Returns true if there are no terms.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Returns the terms in canonical order.
    #[must_use]
    pub fn terms(&self) -> &[(Monomial, Q)] {
        &self.terms
    }

    /// Returns the highest exponent of `symbol` across all terms.
    #[must_use]
    pub fn degree_in(&self, symbol: &Symbol) -> u32 {
        self.terms
            .iter()
            .map(|(m, _)| m.exponent(symbol))
            .max()
            .unwrap_or(0)
    }

    /// Returns the symbols that occur, sorted and deduplicated.
    #[must_use]
    pub fn symbols(&self) -> Vec<Symbol> {
        let mut symbols: Vec<Symbol> = self
            .terms
            .iter()
            .flat_map(|(m, _)| m.symbols().cloned())
            .collect();
        symbols.sort();
        symbols.dedup();
        symbols
    }

    /// Multiplies every coefficient by `k`.
    #[must_use]
    pub fn scale(&self, k: &Q) -> Self {
        if k.is_zero() {
            return Self::zero();
        }

        Self {
            terms: self.terms.iter().map(|(m, c)| (m.clone(), c * k)).collect(),
        }
    }

    /// Raises to a non-negative integer power, fully expanded.
    #[must_use]
    pub fn pow(&self, n: u32) -> Self {
        <Self as Ring>::pow(self, n)
    }

    /// Replaces `symbol` by `value` everywhere and re-expands.
    #[must_use]
    pub fn substitute(&self, symbol: &Symbol, value: &Expr) -> Self {
        let mut powers = vec![Self::one()];
        let mut result = Vec::with_capacity(self.terms.len());

        for (m, c) in &self.terms {
            let (e, rest) = m.split_off(symbol);
            if e == 0 {
                result.push((m.clone(), c.clone()));
                continue;
            }

            while powers.len() <= e as usize {
                let next = powers[powers.len() - 1].mul_ref(value);
                powers.push(next);
            }

            for (pm, pc) in &powers[e as usize].terms {
                result.push((rest.mul(pm), c * pc));
            }
        }

        Self::new(result)
    }

    /// Evaluates exactly with every symbol bound to a rational.
    ///
    /// # Errors
    ///
    /// Returns `UnknownSymbol` if a symbol has no binding.
    pub fn evaluate(&self, bindings: &FxHashMap<Symbol, Q>) -> Result<Q> {
        let mut total = Q::zero();

        for (m, c) in &self.terms {
            let mut value = c.clone();
            for (s, e) in m.factors() {
                let x = bindings
                    .get(s)
                    .ok_or_else(|| DeriveError::UnknownSymbol {
                        name: s.name().to_string(),
                    })?;
                value = value * x.pow(*e);
            }
            total = total + value;
        }

        Ok(total)
    }

    /// Multiplies two expressions by distributing every term pair.
    fn mul_ref(&self, other: &Self) -> Self {
        if self.is_zero() || other.is_zero() {
            return Self::zero();
        }

        let mut acc: FxHashMap<Monomial, Q> = FxHashMap::default();
        for (m1, c1) in &self.terms {
            for (m2, c2) in &other.terms {
                let c = c1 * c2;
                acc.entry(m1.mul(m2))
                    .and_modify(|sum| *sum = &*sum + &c)
                    .or_insert(c);
            }
        }

        Self::new(acc.into_iter().collect())
    }

    /// Merges two sorted term lists.
    fn add_ref(&self, other: &Self) -> Self {
        let mut terms = Vec::with_capacity(self.terms.len() + other.terms.len());
        let (mut i, mut j) = (0, 0);

        while i < self.terms.len() && j < other.terms.len() {
            let (ma, ca) = &self.terms[i];
            let (mb, cb) = &other.terms[j];
            match ma.cmp(mb) {
                std::cmp::Ordering::Greater => {
                    terms.push((ma.clone(), ca.clone()));
                    i += 1;
                }
                std::cmp::Ordering::Less => {
                    terms.push((mb.clone(), cb.clone()));
                    j += 1;
                }
                std::cmp::Ordering::Equal => {
                    let c = ca + cb;
                    if !c.is_zero() {
                        terms.push((ma.clone(), c));
                    }
                    i += 1;
                    j += 1;
                }
            }
        }
        terms.extend(self.terms[i..].iter().cloned());
        terms.extend(other.terms[j..].iter().cloned());

        Self { terms }
    }

    fn neg_ref(&self) -> Self {
        Self {
            terms: self.terms.iter().map(|(m, c)| (m.clone(), -c)).collect(),
        }
    }

    /// Sorts terms and combines like terms.
    fn normalize(&mut self) {
        // Descending, so the leading term comes first
        self.terms.sort_by(|a, b| b.0.cmp(&a.0));

        let mut merged: Vec<(Monomial, Q)> = Vec::with_capacity(self.terms.len());
        for (m, c) in self.terms.drain(..) {
            if let Some((last, acc)) = merged.last_mut() {
                if *last == m {
                    *acc = &*acc + &c;
                    continue;
                }
            }
            merged.push((m, c));
        }
        merged.retain(|(_, c)| !c.is_zero());

        self.terms = merged;
    }
}

impl Ring for Expr {}

impl Zero for Expr {
    fn zero() -> Self {
        Self::zero()
    }

    fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }
}

impl One for Expr {
    fn one() -> Self {
        Self::one()
    }

    fn is_one(&self) -> bool {
        matches!(self.terms.as_slice(), [(m, c)] if m.is_one() && c.is_one())
    }
}

impl From<Symbol> for Expr {
    fn from(symbol: Symbol) -> Self {
        Self::symbol(symbol)
    }
}

impl From<&Symbol> for Expr {
    fn from(symbol: &Symbol) -> Self {
        Self::symbol(symbol.clone())
    }
}

impl From<Q> for Expr {
    fn from(c: Q) -> Self {
        Self::constant(c)
    }
}

impl From<i64> for Expr {
    fn from(n: i64) -> Self {
        Self::constant(Q::from_integer(n))
    }
}

impl Add for Expr {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        self.add_ref(&rhs)
    }
}

impl Add<&Expr> for &Expr {
    type Output = Expr;

    fn add(self, rhs: &Expr) -> Self::Output {
        self.add_ref(rhs)
    }
}

impl Sub for Expr {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        self.add_ref(&rhs.neg_ref())
    }
}

impl Sub<&Expr> for &Expr {
    type Output = Expr;

    fn sub(self, rhs: &Expr) -> Self::Output {
        self.add_ref(&rhs.neg_ref())
    }
}

impl Mul for Expr {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        self.mul_ref(&rhs)
    }
}

impl Mul<&Expr> for &Expr {
    type Output = Expr;

    fn mul(self, rhs: &Expr) -> Self::Output {
        self.mul_ref(rhs)
    }
}

impl Neg for Expr {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.neg_ref()
    }
}

impl Neg for &Expr {
    type Output = Expr;

    fn neg(self) -> Self::Output {
        self.neg_ref()
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }

        for (i, (m, c)) in self.terms.iter().enumerate() {
            let sign = if c.is_negative() { "-" } else { "+" };
            match (i, c.is_negative()) {
                (0, false) => {}
                (0, true) => write!(f, "-")?,
                _ => write!(f, " {sign} ")?,
            }

            let c = c.abs();
            if m.is_one() {
                write!(f, "{c}")?;
            } else if c.is_one() {
                write!(f, "{m}")?;
            } else {
                write!(f, "{c}*{m}")?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use coeffgen_core::SymbolTable;

    fn xyz() -> (Expr, Expr, Expr) {
        let mut table = SymbolTable::new();
        (
            Expr::symbol(table.declare("x")),
            Expr::symbol(table.declare("y")),
            Expr::symbol(table.declare("z")),
        )
    }

    #[test]
    fn test_add_merges_like_terms() {
        let (x, y, _) = xyz();

        let sum = &(&x + &y) + &x;
        assert_eq!(sum.len(), 2);
        assert_eq!(sum.to_string(), "2*x + y");

        let cancelled = &(&x + &y) - &x;
        assert_eq!(cancelled, y);
    }

    #[test]
    fn test_mul_distributes() {
        let (x, _, _) = xyz();
        let one = Expr::one();

        // (x + 1)^2 = x^2 + 2x + 1
        let xp1 = &x + &one;
        let sq = &xp1 * &xp1;
        assert_eq!(sq.len(), 3);
        assert_eq!(sq.to_string(), "x^2 + 2*x + 1");
        assert_eq!(xp1.pow(2), sq);
    }

    #[test]
    fn test_difference_of_squares_cancels() {
        let (x, y, _) = xyz();

        let product = &(&x + &y) * &(&x - &y);
        assert_eq!(product.to_string(), "x^2 - y^2");
    }

    #[test]
    fn test_zero_identities() {
        let (x, _, _) = xyz();

        assert!((&x - &x).is_zero());
        assert!((&x * &Expr::zero()).is_zero());
        assert!(x.scale(&Q::zero()).is_zero());
        assert_eq!(Expr::zero().to_string(), "0");
        assert!(Expr::from(0).is_zero());
        assert!(x.pow(0).is_one());
    }

    #[test]
    fn test_scale_keeps_exact_fractions() {
        let (x, _, _) = xyz();

        let half = x.scale(&Q::new(1, 2));
        assert_eq!(half.to_string(), "1/2*x");
        assert_eq!(&half + &half, x);
    }

    #[test]
    fn test_degree_and_symbols() {
        let (x, y, z) = xyz();
        let e = &(&x.pow(3) * &y) + &z;

        let mut table = SymbolTable::new();
        let sx = table.declare("x");
        let sw = table.declare("w");

        assert_eq!(e.degree_in(&sx), 3);
        assert_eq!(e.degree_in(&sw), 0);
        let names: Vec<String> = e.symbols().iter().map(ToString::to_string).collect();
        assert_eq!(names, ["x", "y", "z"]);
    }

    #[test]
    fn test_substitute() {
        let mut table = SymbolTable::new();
        let sx = table.declare("x");
        let x = Expr::symbol(sx.clone());
        let y = Expr::symbol(table.declare("y"));

        // (x + 1)^2 with x := y - 1 gives y^2
        let e = (&x + &Expr::one()).pow(2);
        let substituted = e.substitute(&sx, &(&y - &Expr::one()));
        assert_eq!(substituted, y.pow(2));

        // x := 0 keeps only the constant term
        assert_eq!(e.substitute(&sx, &Expr::zero()), Expr::one());
    }

    #[test]
    fn test_evaluate() {
        let mut table = SymbolTable::new();
        let sx = table.declare("x");
        let sy = table.declare("y");
        let e = &Expr::symbol(sx.clone()).pow(2) - &Expr::symbol(sy.clone()).scale(&Q::new(1, 3));

        let mut bindings = FxHashMap::default();
        bindings.insert(sx, Q::from_integer(2));
        assert!(matches!(
            e.evaluate(&bindings),
            Err(DeriveError::UnknownSymbol { name }) if name == "y"
        ));

        bindings.insert(sy, Q::from_integer(3));
        assert_eq!(e.evaluate(&bindings).unwrap(), Q::from_integer(3));
    }
}

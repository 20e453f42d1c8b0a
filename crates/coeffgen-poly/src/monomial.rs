//! Sparse monomials over named symbols.
//!
//! A monomial is stored as `(symbol, exponent)` pairs sorted by symbol,
//! with every stored exponent at least 1. The empty monomial is 1.

use std::cmp::Ordering;
use std::fmt;

use coeffgen_core::Symbol;
use smallvec::SmallVec;

/// Inline capacity covers every monomial of a 3x3 determinant.
type Factors = SmallVec<[(Symbol, u32); 4]>;

/// A product of symbol powers with unit coefficient.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Default)]
pub struct Monomial {
    factors: Factors,
}

impl Monomial {
    /// Creates the monomial 1.
    #[must_use]
    pub fn one() -> Self {
        Self::default()
    }

    /// Creates the monomial `symbol^1`.
    #[must_use]
    pub fn var(symbol: Symbol) -> Self {
        Self {
            factors: smallvec::smallvec![(symbol, 1)],
        }
    }

    /// Creates a monomial from arbitrary `(symbol, exponent)` pairs.
    ///
    /// Repeated symbols are merged and zero exponents dropped.
    #[must_use]
    pub fn from_factors(factors: impl IntoIterator<Item = (Symbol, u32)>) -> Self {
        let mut raw: Factors = factors.into_iter().filter(|(_, e)| *e > 0).collect();
        raw.sort_by(|a, b| a.0.cmp(&b.0));

        let mut merged = Factors::new();
        for (s, e) in raw {
            if let Some((last, acc)) = merged.last_mut() {
                if *last == s {
                    *acc += e;
                    continue;
                }
            }
            merged.push((s, e));
        }

        Self { factors: merged }
    }

    /// Returns true if this is the monomial 1.
    #[must_use]
    pub fn is_one(&self) -> bool {
        self.factors.is_empty()
    }

    /// Returns the `(symbol, exponent)` pairs, sorted by symbol.
    #[must_use]
    pub fn factors(&self) -> &[(Symbol, u32)] {
        &self.factors
    }

    /// Returns the exponent of `symbol` (0 if absent).
    #[must_use]
    pub fn exponent(&self, symbol: &Symbol) -> u32 {
        self.factors
            .binary_search_by(|(s, _)| s.cmp(symbol))
            .map_or(0, |i| self.factors[i].1)
    }

    /// Computes the total degree.
    #[must_use]
    pub fn total_degree(&self) -> u32 {
        self.factors.iter().map(|(_, e)| e).sum()
    }

    /// Multiplies two monomials (adds exponents).
    #[must_use]
    pub fn mul(&self, other: &Self) -> Self {
        let mut factors = Factors::with_capacity(self.factors.len() + other.factors.len());
        let (mut i, mut j) = (0, 0);

        while i < self.factors.len() && j < other.factors.len() {
            let (a, ea) = &self.factors[i];
            let (b, eb) = &other.factors[j];
            match a.cmp(b) {
                Ordering::Less => {
                    factors.push((a.clone(), *ea));
                    i += 1;
                }
                Ordering::Greater => {
                    factors.push((b.clone(), *eb));
                    j += 1;
                }
                Ordering::Equal => {
                    factors.push((a.clone(), ea + eb));
                    i += 1;
                    j += 1;
                }
            }
        }
        factors.extend(self.factors[i..].iter().cloned());
        factors.extend(other.factors[j..].iter().cloned());

        Self { factors }
    }

    /// Removes `symbol`, returning its exponent and the remaining monomial.
    #[must_use]
    pub fn split_off(&self, symbol: &Symbol) -> (u32, Self) {
        match self.factors.binary_search_by(|(s, _)| s.cmp(symbol)) {
            Ok(i) => {
                let mut factors = self.factors.clone();
                let (_, e) = factors.remove(i);
                (e, Self { factors })
            }
            Err(_) => (0, self.clone()),
        }
    }

    /// Iterates over the symbols that occur in this monomial.
    pub fn symbols(&self) -> impl Iterator<Item = &Symbol> {
        self.factors.iter().map(|(s, _)| s)
    }
}

/// Lexicographic order: the first symbol (by name) whose exponents differ
/// decides, and the larger exponent wins.
impl Ord for Monomial {
    fn cmp(&self, other: &Self) -> Ordering {
        let (mut i, mut j) = (0, 0);
        loop {
            match (self.factors.get(i), other.factors.get(j)) {
                (None, None) => return Ordering::Equal,
                (Some(_), None) => return Ordering::Greater,
                (None, Some(_)) => return Ordering::Less,
                (Some((a, ea)), Some((b, eb))) => match a.cmp(b) {
                    // `a` is absent from `other`, so `self` has the larger exponent.
                    Ordering::Less => return Ordering::Greater,
                    Ordering::Greater => return Ordering::Less,
                    Ordering::Equal => match ea.cmp(eb) {
                        Ordering::Equal => {
                            i += 1;
                            j += 1;
                        }
                        ord => return ord,
                    },
                },
            }
        }
    }
}

impl PartialOrd for Monomial {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Monomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_one() {
            return write!(f, "1");
        }

        let parts: Vec<String> = self
            .factors
            .iter()
            .map(|(s, e)| {
                if *e == 1 {
                    s.to_string()
                } else {
                    format!("{s}^{e}")
                }
            })
            .collect();

        write!(f, "{}", parts.join("*"))
    }
}

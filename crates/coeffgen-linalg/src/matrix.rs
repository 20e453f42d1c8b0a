//! 3x3 matrices stored in row-major order.

use std::ops::{Add, Index, IndexMut, Sub};

use coeffgen_rings::Ring;

/// A 3x3 matrix over a ring.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix3<R> {
    rows: [[R; 3]; 3],
}

impl<R: Ring> Matrix3<R> {
    /// Creates a matrix from its rows.
    #[must_use]
    pub fn from_rows(rows: [[R; 3]; 3]) -> Self {
        Self { rows }
    }

    /// Creates a matrix whose entry `(i, j)` is `f(i, j)`.
    #[must_use]
    pub fn from_fn(mut f: impl FnMut(usize, usize) -> R) -> Self {
        Self {
            rows: std::array::from_fn(|i| std::array::from_fn(|j| f(i, j))),
        }
    }

    /// Creates a matrix from nine entries in row-major order.
    #[must_use]
    pub fn from_row_major(entries: [R; 9]) -> Self {
        let [a, b, c, d, e, f, g, h, i] = entries;
        Self::from_rows([[a, b, c], [d, e, f], [g, h, i]])
    }

    /// Applies `f` to every entry.
    #[must_use]
    pub fn map<S: Ring>(&self, mut f: impl FnMut(&R) -> S) -> Matrix3<S> {
        Matrix3::from_fn(|i, j| f(&self.rows[i][j]))
    }

    /// Returns the transpose.
    #[must_use]
    pub fn transpose(&self) -> Self {
        Self::from_fn(|i, j| self.rows[j][i].clone())
    }

    /// Multiplies every entry by `scalar`.
    #[must_use]
    pub fn scale(&self, scalar: &R) -> Self {
        self.map(|v| v.clone() * scalar.clone())
    }

    /// Swaps two rows in-place.
    pub fn swap_rows(&mut self, i: usize, j: usize) {
        self.rows.swap(i, j);
    }

    /// Multiplies one row by `scalar` in-place.
    pub fn scale_row(&mut self, row: usize, scalar: &R) {
        for v in &mut self.rows[row] {
            *v = v.clone() * scalar.clone();
        }
    }

    /// Computes the determinant by the closed-form Leibniz expansion.
    ///
    /// The three even permutations of the column indices contribute with a
    /// plus sign, the three odd ones with a minus sign.
    #[must_use]
    pub fn det(&self) -> R {
        let m = &self.rows;
        let term = |a: usize, b: usize, c: usize| {
            m[0][a].clone() * m[1][b].clone() * m[2][c].clone()
        };

        let even = term(0, 1, 2) + term(1, 2, 0) + term(2, 0, 1);
        let odd = term(0, 2, 1) + term(1, 0, 2) + term(2, 1, 0);
        even - odd
    }
}

impl<R> Index<(usize, usize)> for Matrix3<R> {
    type Output = R;

    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        &self.rows[row][col]
    }
}

impl<R> IndexMut<(usize, usize)> for Matrix3<R> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        &mut self.rows[row][col]
    }
}

impl<R: Ring> Add for &Matrix3<R> {
    type Output = Matrix3<R>;

    fn add(self, other: Self) -> Matrix3<R> {
        Matrix3::from_fn(|i, j| self[(i, j)].clone() + other[(i, j)].clone())
    }
}

impl<R: Ring> Sub for &Matrix3<R> {
    type Output = Matrix3<R>;

    fn sub(self, other: Self) -> Matrix3<R> {
        Matrix3::from_fn(|i, j| self[(i, j)].clone() - other[(i, j)].clone())
    }
}

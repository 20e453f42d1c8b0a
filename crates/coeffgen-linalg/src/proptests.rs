//! Property-based tests for determinants.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use coeffgen_rings::{Zero, Q};

    use crate::matrix::Matrix3;

    fn small_q() -> impl Strategy<Value = Q> {
        (-20i64..20i64).prop_map(Q::from_integer)
    }

    fn small_matrix() -> impl Strategy<Value = Matrix3<Q>> {
        proptest::array::uniform9(small_q()).prop_map(Matrix3::from_row_major)
    }

    proptest! {
        #[test]
        fn det_row_swap_negates(m in small_matrix(), i in 0usize..3, j in 0usize..3) {
            prop_assume!(i != j);
            let mut swapped = m.clone();
            swapped.swap_rows(i, j);
            prop_assert_eq!(swapped.det(), -m.det());
        }

        #[test]
        fn det_linear_in_row(m in small_matrix(), row in 0usize..3, k in small_q()) {
            let mut scaled = m.clone();
            scaled.scale_row(row, &k);
            prop_assert_eq!(scaled.det(), m.det() * k);
        }

        #[test]
        fn det_additive_in_row(a in small_matrix(), b in small_matrix(), row in 0usize..3) {
            // Rows other than `row` are shared by all three matrices
            let mut mixed = a.clone();
            let mut sum = a.clone();
            for col in 0..3 {
                mixed[(row, col)] = b[(row, col)].clone();
                sum[(row, col)] = a[(row, col)].clone() + b[(row, col)].clone();
            }
            prop_assert_eq!(sum.det(), a.det() + mixed.det());
        }

        #[test]
        fn det_transpose_invariant(m in small_matrix()) {
            prop_assert_eq!(m.transpose().det(), m.det());
        }

        #[test]
        fn det_of_repeated_row_is_zero(m in small_matrix()) {
            let mut dup = m.clone();
            for col in 0..3 {
                dup[(1, col)] = m[(0, col)].clone();
            }
            prop_assert!(dup.det().is_zero());
        }
    }
}

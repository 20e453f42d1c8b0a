//! Property-based tests for exact rational arithmetic.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::{One, Ring, Zero, Q};

    fn small_q() -> impl Strategy<Value = Q> {
        (-50i64..50i64, 1i64..20i64).prop_map(|(n, d)| Q::new(n, d))
    }

    proptest! {
        #[test]
        fn q_add_commutative(a in small_q(), b in small_q()) {
            prop_assert_eq!(a.clone() + b.clone(), b + a);
        }

        #[test]
        fn q_mul_associative(a in small_q(), b in small_q(), c in small_q()) {
            prop_assert_eq!(
                (a.clone() * b.clone()) * c.clone(),
                a * (b * c)
            );
        }

        #[test]
        fn q_distributive(a in small_q(), b in small_q(), c in small_q()) {
            prop_assert_eq!(
                a.clone() * (b.clone() + c.clone()),
                a.clone() * b + a * c
            );
        }

        #[test]
        fn q_additive_inverse(a in small_q()) {
            prop_assert!((a.clone() + (-a)).is_zero());
        }

        #[test]
        fn q_pow_matches_repeated_mul(a in small_q(), n in 0u32..6) {
            let mut expected = Q::one();
            for _ in 0..n {
                expected = expected * a.clone();
            }
            prop_assert_eq!(a.pow(n), expected);
        }
    }
}

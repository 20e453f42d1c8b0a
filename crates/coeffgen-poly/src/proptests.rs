//! Property-based tests for expansion and collection.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use coeffgen_core::{Symbol, SymbolTable};
    use coeffgen_rings::Q;

    use crate::collect::collect;
    use crate::expr::Expr;
    use crate::monomial::Monomial;

    fn symbols() -> [Symbol; 3] {
        let mut table = SymbolTable::new();
        [table.declare("x"), table.declare("y"), table.declare("z")]
    }

    // Strategy for small expressions in x, y, z with exponents up to 3
    fn small_expr() -> impl Strategy<Value = Expr> {
        proptest::collection::vec(((0u32..4, 0u32..4, 0u32..4), -5i64..6), 0..6).prop_map(|terms| {
            let [x, y, z] = symbols();
            Expr::new(
                terms
                    .into_iter()
                    .map(|((ex, ey, ez), c)| {
                        let m = Monomial::from_factors([(x.clone(), ex), (y.clone(), ey), (z.clone(), ez)]);
                        (m, Q::from_integer(c))
                    })
                    .collect(),
            )
        })
    }

    proptest! {
        #[test]
        fn expr_add_commutative(a in small_expr(), b in small_expr()) {
            prop_assert_eq!(&a + &b, &b + &a);
        }

        #[test]
        fn expr_mul_commutative(a in small_expr(), b in small_expr()) {
            prop_assert_eq!(&a * &b, &b * &a);
        }

        #[test]
        fn expr_mul_associative(a in small_expr(), b in small_expr(), c in small_expr()) {
            prop_assert_eq!(&(&a * &b) * &c, &a * &(&b * &c));
        }

        #[test]
        fn expr_distributive(a in small_expr(), b in small_expr(), c in small_expr()) {
            let left = &a * &(&b + &c);
            let right = &(&a * &b) + &(&a * &c);
            prop_assert_eq!(left, right);
        }

        #[test]
        fn expr_sub_self_is_zero(a in small_expr()) {
            prop_assert!((&a - &a).is_zero());
        }

        #[test]
        fn expr_terms_stay_canonical(a in small_expr(), b in small_expr()) {
            let p = &a * &b;
            for pair in p.terms().windows(2) {
                prop_assert!(pair[0].0 > pair[1].0);
            }
            prop_assert!(p.terms().iter().all(|(_, c)| !coeffgen_rings::Zero::is_zero(c)));
        }

        #[test]
        fn collect_round_trip(e in small_expr()) {
            let [_, _, z] = symbols();
            let table = collect(&e, &z, 3).unwrap();
            prop_assert_eq!(table.len(), 4);
            prop_assert_eq!(table.reconstruct(), e);
        }

        #[test]
        fn collect_idempotent(e in small_expr()) {
            let [x, _, _] = symbols();
            let first = collect(&e, &x, 5).unwrap();
            let second = collect(&e, &x, 5).unwrap();
            prop_assert_eq!(first, second);
        }

        #[test]
        fn collect_coefficients_are_pivot_free(e in small_expr()) {
            let [_, y, _] = symbols();
            let table = collect(&e, &y, 3).unwrap();
            for (_, c) in table.iter() {
                prop_assert_eq!(c.degree_in(&y), 0);
            }
        }
    }
}

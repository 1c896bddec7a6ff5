//! Property-based tests across the expansion pipeline.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use ramus_poly::{BiPoly, LaurentPoly, Poly};
    use ramus_rings::{AlgebraicNumber, Q};

    use crate::driver::puiseux;
    use crate::polygon::newton_data;
    use crate::refine::newton_iteration;

    fn positive_terms() -> impl Strategy<Value = Vec<(usize, usize, i64)>> {
        proptest::collection::vec(((0usize..=6), (0usize..=6), (1i64..50)), 0..8)
    }

    /// Positive coefficients rule out cancellation, and a forced term on
    /// the j = 0 axis keeps the restriction to x = 0 nonzero.
    fn curve_with_axis_term() -> impl Strategy<Value = BiPoly<Q>> {
        (positive_terms(), 1usize..=6, 1i64..50).prop_map(|(mut terms, i, c)| {
            terms.push((i, 0, c));
            BiPoly::from_terms(
                terms
                    .into_iter()
                    .map(|(i, j, c)| (i, j, Q::from(c)))
                    .collect(),
            )
        })
    }

    /// A polynomial series with zero constant term.
    fn series_through_origin() -> impl Strategy<Value = Poly<Q>> {
        proptest::collection::vec(-20i64..20, 0..=5).prop_map(|tail| {
            let mut coeffs = vec![Q::from(0)];
            coeffs.extend(tail.into_iter().map(Q::from));
            Poly::new(coeffs)
        })
    }

    proptest! {
        #[test]
        fn edge_degrees_account_for_all_origin_roots(f in curve_with_axis_term()) {
            let counted: usize = newton_data(&f)
                .unwrap()
                .iter()
                .map(|d| d.q * d.phi.degree())
                .sum();
            prop_assert_eq!(counted, f.eval_x0().ord());
        }

        #[test]
        fn refinement_is_truncation_consistent(
            p in series_through_origin(),
            q0 in 1i64..30,
            n in 0usize..6,
        ) {
            // (y - p(x)) (y - q0): the branch through the origin is p.
            let offset = Poly::constant(Q::from(q0));
            let g = BiPoly::new(vec![
                p.mul(&offset),
                p.add(&offset).neg(),
                Poly::constant(Q::from(1)),
            ]);
            prop_assert_eq!(newton_iteration(&g, n).unwrap(), p.truncated(n + 1));
        }

        #[test]
        fn refinement_is_monotone_in_the_order(
            a in 1i64..20,
            b in -20i64..20,
            c in 1i64..20,
            n1 in 0usize..5,
            extra in 0usize..5,
        ) {
            // (a + b x) y - c expands an infinite series at y0 = c / a.
            let g = BiPoly::new(vec![
                Poly::constant(Q::from(-c)),
                Poly::new(vec![Q::from(a), Q::from(b)]),
            ]);
            let n2 = n1 + extra;
            let coarse = newton_iteration(&g, n1).unwrap();
            let fine = newton_iteration(&g, n2).unwrap();
            prop_assert_eq!(coarse, fine.truncated(n1 + 1));
        }

        #[test]
        fn graph_curve_recovers_its_series(
            p in series_through_origin(),
            n in 0usize..6,
        ) {
            // y - p(x) has the single unramified branch y = p.
            let f = BiPoly::new(vec![p.neg(), Poly::constant(Q::from(1))])
                .map(|c| AlgebraicNumber::from_rational(c.clone()));
            let bs = puiseux(&f, n).unwrap();
            prop_assert_eq!(bs.len(), 1);
            prop_assert_eq!(bs[0].ramification, 1);
            prop_assert_eq!(&bs[0].x_scale, &AlgebraicNumber::from_i64(1));
            let expected = p
                .truncated(n + 1)
                .map(|c| AlgebraicNumber::from_rational(c.clone()));
            prop_assert_eq!(&bs[0].series, &LaurentPoly::from_poly(&expected));
        }
    }
}

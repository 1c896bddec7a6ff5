//! Property-based tests for polynomial arithmetic.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::algorithms::gcd::{poly_div_rem, poly_gcd};
    use crate::algorithms::squarefree::squarefree_decomposition;
    use crate::dense::Poly;
    use ramus_rings::Q;

    fn small_coeff() -> impl Strategy<Value = Q> {
        (-100i64..100i64).prop_map(Q::from)
    }

    fn small_poly() -> impl Strategy<Value = Poly<Q>> {
        proptest::collection::vec(small_coeff(), 0..=6).prop_map(Poly::new)
    }

    fn nonzero_poly() -> impl Strategy<Value = Poly<Q>> {
        small_poly().prop_filter("polynomial must be non-zero", |p| !p.is_zero())
    }

    proptest! {
        #[test]
        fn add_commutative(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(a.add(&b), b.add(&a));
        }

        #[test]
        fn mul_associative(a in small_poly(), b in small_poly(), c in small_poly()) {
            prop_assert_eq!(a.mul(&b).mul(&c), a.mul(&b.mul(&c)));
        }

        #[test]
        fn distributive(a in small_poly(), b in small_poly(), c in small_poly()) {
            let left = a.mul(&b.add(&c));
            let right = a.mul(&b).add(&a.mul(&c));
            prop_assert_eq!(left, right);
        }

        #[test]
        fn additive_inverse(a in small_poly()) {
            prop_assert!(a.add(&a.neg()).is_zero());
        }

        #[test]
        fn mul_degree_adds(a in nonzero_poly(), b in nonzero_poly()) {
            prop_assert_eq!(a.mul(&b).degree(), a.degree() + b.degree());
        }

        #[test]
        fn eval_is_a_ring_map(a in small_poly(), b in small_poly(), x in small_coeff()) {
            prop_assert_eq!(a.add(&b).eval(&x), a.eval(&x) + b.eval(&x));
            prop_assert_eq!(a.mul(&b).eval(&x), a.eval(&x) * b.eval(&x));
        }

        #[test]
        fn division_reconstructs(a in small_poly(), b in nonzero_poly()) {
            let (q, r) = poly_div_rem(&a, &b);
            prop_assert_eq!(q.mul(&b).add(&r), a);
            prop_assert!(r.is_zero() || r.degree() < b.degree());
        }

        #[test]
        fn gcd_divides_both(a in nonzero_poly(), b in nonzero_poly()) {
            let g = poly_gcd(&a, &b);
            let (_, ra) = poly_div_rem(&a, &g);
            let (_, rb) = poly_div_rem(&b, &g);
            prop_assert!(ra.is_zero());
            prop_assert!(rb.is_zero());
        }

        #[test]
        fn squarefree_reconstruction(a in nonzero_poly(), b in nonzero_poly()) {
            // A product with a forced square still reconstructs exactly.
            let f = a.mul(&b).mul(&b);
            let decomp = squarefree_decomposition(&f);
            prop_assert_eq!(decomp.to_polynomial(), f);
        }
    }
}

use crate::{Integer, Rational};
use num_traits::{One, Zero};
use proptest::prelude::*;

fn z(n: i64) -> Integer {
    Integer::new(n)
}

fn q(n: i64, d: i64) -> Rational {
    Rational::new(Integer::new(n), Integer::new(d))
}

proptest! {
    #[test]
    fn integer_addition_commutes(a in any::<i64>(), b in any::<i64>()) {
        prop_assert_eq!(z(a) + z(b), z(b) + z(a));
    }

    #[test]
    fn integer_multiplication_associates(a in -10_000i64..10_000, b in -10_000i64..10_000, c in -10_000i64..10_000) {
        prop_assert_eq!((z(a) * z(b)) * z(c), z(a) * (z(b) * z(c)));
    }

    #[test]
    fn integer_distributivity(a in -10_000i64..10_000, b in -10_000i64..10_000, c in -10_000i64..10_000) {
        prop_assert_eq!(z(a) * (z(b) + z(c)), z(a) * z(b) + z(a) * z(c));
    }

    #[test]
    fn integer_gcd_divides_both(a in 1i64..100_000, b in 1i64..100_000) {
        let g = z(a).gcd(&z(b));
        prop_assert_eq!(&z(a) % &g, Integer::zero());
        prop_assert_eq!(&z(b) % &g, Integer::zero());
    }

    #[test]
    fn integer_div_rem_reconstructs(a in any::<i64>(), b in 1i64..100_000) {
        let quot = z(a) / z(b);
        let rem = z(a) % z(b);
        prop_assert_eq!(quot * z(b) + rem, z(a));
    }

    #[test]
    fn rational_is_reduced(n in -10_000i64..10_000, d in 1i64..10_000) {
        let r = q(n, d);
        let g = r.numerator().gcd(&r.denominator());
        prop_assert_eq!(g, Integer::one());
    }

    #[test]
    fn rational_recip_roundtrips(n in 1i64..10_000, d in 1i64..10_000) {
        let r = q(n, d);
        prop_assert_eq!(r.recip().recip(), r);
    }

    #[test]
    fn rational_add_sub_roundtrips(a in -1_000i64..1_000, b in 1i64..1_000, c in -1_000i64..1_000, d in 1i64..1_000) {
        let x = q(a, b);
        let y = q(c, d);
        prop_assert_eq!(x.clone() + y.clone() - y, x);
    }

    #[test]
    fn rational_field_inverse(a in 1i64..1_000, b in 1i64..1_000) {
        let r = q(a, b);
        prop_assert_eq!(r.clone() * r.recip(), Rational::one());
    }
}

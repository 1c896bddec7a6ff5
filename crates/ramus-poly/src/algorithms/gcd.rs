//! Polynomial division, gcd, content and primitive part.

use ramus_rings::{EuclideanDomain, Field};

use crate::dense::Poly;

/// Divides polynomial `a` by `b` over a field, returning (quotient, remainder).
///
/// # Panics
///
/// Panics when `b` is the zero polynomial.
pub fn poly_div_rem<F: Field>(a: &Poly<F>, b: &Poly<F>) -> (Poly<F>, Poly<F>) {
    let Some(lead_inv) = b.leading().and_then(Field::inv) else {
        panic!("division by zero polynomial");
    };

    let divisor_len = b.coeffs().len();
    let mut remainder = a.coeffs().to_vec();
    if remainder.len() < divisor_len {
        return (Poly::new(Vec::new()), a.clone());
    }

    let mut quotient = vec![F::zero(); remainder.len() - divisor_len + 1];
    while remainder.len() >= divisor_len {
        let Some(top) = remainder.pop() else { break };
        if top.is_zero() {
            continue;
        }
        let q = top * lead_inv.clone();
        let pos = remainder.len() + 1 - divisor_len;
        for (k, c) in b.coeffs().iter().take(divisor_len - 1).enumerate() {
            remainder[pos + k] = remainder[pos + k].clone() - q.clone() * c.clone();
        }
        quotient[pos] = q;
    }

    (Poly::new(quotient), Poly::new(remainder))
}

/// Computes the monic gcd of two polynomials over a field.
pub fn poly_gcd<F: Field>(a: &Poly<F>, b: &Poly<F>) -> Poly<F> {
    if a.is_zero() {
        return make_monic(b);
    }
    if b.is_zero() {
        return make_monic(a);
    }

    let mut p = a.clone();
    let mut q = b.clone();
    while !q.is_zero() {
        let (_, r) = poly_div_rem(&p, &q);
        p = q;
        q = r;
    }

    make_monic(&p)
}

/// Scales a polynomial so its leading coefficient is one.
pub fn make_monic<F: Field>(p: &Poly<F>) -> Poly<F> {
    match p.leading().and_then(Field::inv) {
        Some(inv) => p.scale(&inv),
        None => p.clone(),
    }
}

/// Computes the content of a polynomial: the gcd of all coefficients.
pub fn content<R: EuclideanDomain>(p: &Poly<R>) -> R {
    p.coeffs()
        .iter()
        .cloned()
        .reduce(|a, b| a.gcd(&b))
        .unwrap_or_else(R::zero)
}

/// Divides a polynomial by its content.
pub fn primitive_part<R: EuclideanDomain>(p: &Poly<R>) -> Poly<R> {
    let c = content(p);
    if c.is_zero() || c.is_one() {
        return p.clone();
    }
    Poly::new(p.coeffs().iter().map(|x| x.div_rem(&c).0).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ramus_rings::{Q, Z};

    fn poly(coeffs: &[i64]) -> Poly<Q> {
        Poly::new(coeffs.iter().map(|&n| Q::from(n)).collect())
    }

    fn zpoly(coeffs: &[i64]) -> Poly<Z> {
        Poly::new(coeffs.iter().map(|&n| Z::new(n)).collect())
    }

    #[test]
    fn division_with_remainder() {
        // x^3 + 2x + 1 = x*(x^2 + 1) + (x + 1)
        let a = poly(&[1, 2, 0, 1]);
        let b = poly(&[1, 0, 1]);
        let (q, r) = poly_div_rem(&a, &b);
        assert_eq!(q, poly(&[0, 1]));
        assert_eq!(r, poly(&[1, 1]));
        assert_eq!(q.mul(&b).add(&r), a);
    }

    #[test]
    fn division_by_nonmonic() {
        // 2x^2 - 2 = (2x + 2)(x - 1)
        let a = poly(&[-2, 0, 2]);
        let b = poly(&[2, 2]);
        let (q, r) = poly_div_rem(&a, &b);
        assert_eq!(q, poly(&[-1, 1]));
        assert!(r.is_zero());
    }

    #[test]
    fn gcd_is_monic() {
        // gcd(2x^2 - 2, 4x - 4) = x - 1
        let g = poly_gcd(&poly(&[-2, 0, 2]), &poly(&[-4, 4]));
        assert_eq!(g, poly(&[-1, 1]));

        assert_eq!(poly_gcd(&poly(&[]), &poly(&[0, 3])), poly(&[0, 1]));
    }

    #[test]
    fn content_and_primitive_part() {
        let p = zpoly(&[6, -9, 12]);
        assert_eq!(content(&p), Z::new(3));
        assert_eq!(primitive_part(&p), zpoly(&[2, -3, 4]));

        let negative_lead = zpoly(&[4, -6]);
        assert_eq!(content(&negative_lead), Z::new(2));
        assert_eq!(primitive_part(&negative_lead), zpoly(&[2, -3]));
    }
}

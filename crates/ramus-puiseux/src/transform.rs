//! The edge substitution that moves a polygon edge into expansion position.
//!
//! For an edge (q, m, l) and a root xi of its characteristic polynomial the
//! substitution is H'(x, y) = x^(-l) * H(lam*x^q, x^m*(mu + y)) with
//! lam = xi^(-v), mu = xi^u and u*q + v*m = 1. The hull inequality
//! q*j + m*i >= l makes every x-exponent of H' non-negative, and the branch
//! y-values of H through the edge correspond to branches of H' through the
//! origin, one order deeper.

use num_traits::{One, Zero};
use ramus_poly::{BiPoly, Poly};
use ramus_rings::{Field, Ring};

use crate::error::{PuiseuxError, Result};
use crate::polygon::EdgeData;

/// Applies the edge substitution for `edge` at the root `xi`.
///
/// `xi = 0` requests the order-raising substitution (lam, mu) = (1, 0).
/// The exceptional datum (1, 0, 0, .) turns this into the pure shift
/// y -> xi + y.
///
/// # Errors
///
/// `DegenerateEdge` when a support point falls below the edge line, which
/// cannot happen for data extracted from the polygon of `f`.
pub fn transform<K: Field>(f: &BiPoly<K>, edge: &EdgeData<K>, xi: &K) -> Result<BiPoly<K>> {
    let (q, m, l) = (edge.q, edge.m, edge.l);
    let (lam, mu) = edge_scalars(q, m, xi);

    let dy = f.deg_y();
    let dx = f.deg_x();
    let width = q * dx + m * dy + 1;
    let mut acc: Vec<Vec<K>> = vec![vec![K::zero(); width]; dy + 1];

    let binom = binomial_rows::<K>(dy);
    let lam_pows = powers(&lam, dx);
    let mu_pows = powers(&mu, dy);

    for (i, row) in f.rows().iter().enumerate() {
        for (j, a) in row.coeffs().iter().enumerate() {
            if a.is_zero() {
                continue;
            }
            let base = q * j + m * i;
            if base < l {
                return Err(PuiseuxError::DegenerateEdge {
                    edge: format!("support point ({i}, {j}) below level {l}"),
                });
            }
            let e = base - l;
            let scaled = a.clone() * lam_pows[j].clone();
            for k in 0..=i {
                let term = binom[i][k].clone() * mu_pows[i - k].clone() * scaled.clone();
                acc[k][e] = acc[k][e].clone() + term;
            }
        }
    }

    Ok(BiPoly::new(acc.into_iter().map(Poly::new).collect()))
}

/// The substitution scalars (lam, mu) for an edge direction and a root.
pub(crate) fn edge_scalars<K: Field>(q: usize, m: usize, xi: &K) -> (K, K) {
    if xi.is_zero() {
        return (K::one(), K::zero());
    }
    let (u, v) = bezout(q, m);
    (field_pow(xi, -v), field_pow(xi, u))
}

/// The Bezout pair u*q + v*m = 1 normalized to 0 <= v < q.
///
/// Requires gcd(q, m) = 1 and q >= 1, which polygon edges guarantee.
pub(crate) fn bezout(q: usize, m: usize) -> (i64, i64) {
    let target = 1 % q;
    for v in 0..q {
        if (v * m) % q == target {
            let u = (1 - (v * m) as i64) / q as i64;
            return (u, v as i64);
        }
    }
    unreachable!("edge direction is primitive");
}

/// Raises a field element to a signed power.
///
/// Negative exponents require a nonzero base.
pub(crate) fn field_pow<K: Field>(base: &K, exp: i64) -> K {
    let mut acc = K::one();
    let mut sq = base.clone();
    let mut mag = exp.unsigned_abs();
    while mag > 0 {
        if mag & 1 == 1 {
            acc = acc * sq.clone();
        }
        sq = sq.clone() * sq;
        mag >>= 1;
    }
    if exp < 0 {
        acc.inv().expect("inverse of a nonzero element")
    } else {
        acc
    }
}

fn powers<K: Ring>(base: &K, up_to: usize) -> Vec<K> {
    let mut pows = Vec::with_capacity(up_to + 1);
    pows.push(K::one());
    for k in 1..=up_to {
        let next = pows[k - 1].clone() * base.clone();
        pows.push(next);
    }
    pows
}

/// Pascal rows 0..=n computed inside the coefficient ring.
fn binomial_rows<K: Ring>(n: usize) -> Vec<Vec<K>> {
    let mut rows: Vec<Vec<K>> = Vec::with_capacity(n + 1);
    rows.push(vec![K::one()]);
    for i in 1..=n {
        let mut row = Vec::with_capacity(i + 1);
        row.push(K::one());
        for k in 1..i {
            row.push(rows[i - 1][k - 1].clone() + rows[i - 1][k].clone());
        }
        row.push(K::one());
        rows.push(row);
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use ramus_rings::Q;

    fn bp(terms: &[(usize, usize, i64)]) -> BiPoly<Q> {
        BiPoly::from_terms(terms.iter().map(|&(i, j, c)| (i, j, Q::from(c))).collect())
    }

    fn shift_edge() -> EdgeData<Q> {
        EdgeData {
            q: 1,
            m: 0,
            l: 0,
            phi: Poly::new(vec![Q::from(0), Q::from(1)]),
        }
    }

    #[test]
    fn test_bezout_normalization() {
        for &(q, m) in &[(1, 0), (1, 1), (2, 1), (3, 2), (2, 3), (5, 3), (4, 7)] {
            let (u, v) = bezout(q, m);
            assert_eq!(u * q as i64 + v * m as i64, 1);
            assert!(0 <= v && v < q as i64);
        }
        assert_eq!(bezout(1, 0), (1, 0));
    }

    #[test]
    fn test_edge_scalars() {
        // Identity direction: lam = 1, mu = xi.
        let (lam, mu) = edge_scalars(1, 0, &Q::from(5));
        assert_eq!((lam, mu), (Q::from(1), Q::from(5)));
        // Zero root always gives (1, 0).
        let (lam, mu) = edge_scalars(2, 3, &Q::from(0));
        assert_eq!((lam, mu), (Q::from(1), Q::from(0)));
        // Slope 3/2: v = 1, u = -1.
        let (lam, mu) = edge_scalars(2, 3, &Q::from(2));
        assert_eq!((lam, mu), (Q::new(1, 2), Q::new(1, 2)));
    }

    #[test]
    fn test_transform_identity() {
        let f = bp(&[(2, 0, 1), (1, 1, 2), (0, 0, 3)]);
        let out = transform(&f, &shift_edge(), &Q::from(0)).unwrap();
        assert_eq!(out, f);
    }

    #[test]
    fn test_transform_unit_shift() {
        // y^2 under y -> 1 + y
        let f = bp(&[(2, 0, 1)]);
        let out = transform(&f, &shift_edge(), &Q::from(1)).unwrap();
        assert_eq!(out, bp(&[(0, 0, 1), (1, 0, 2), (2, 0, 1)]));
    }

    #[test]
    fn test_transform_cusp_edge() {
        // y^2 - 2x^3 along (2,3,6) at xi = 2 becomes y + y^2.
        let f = bp(&[(2, 0, 1), (0, 3, -2)]);
        let edge = EdgeData {
            q: 2,
            m: 3,
            l: 6,
            phi: Poly::new(vec![Q::from(-2), Q::from(1)]),
        };
        let out = transform(&f, &edge, &Q::from(2)).unwrap();
        assert_eq!(out, bp(&[(1, 0, 1), (2, 0, 1)]));
    }

    #[test]
    fn test_transform_zero_root_raises_order() {
        // -x^7 + 2x^3 y + y^3 along (1,1,3) at the zero root.
        let f = bp(&[(0, 7, -1), (1, 3, 2), (3, 0, 1)]);
        let edge = EdgeData {
            q: 1,
            m: 1,
            l: 3,
            phi: Poly::new(vec![Q::from(0), Q::from(0), Q::from(0), Q::from(1)]),
        };
        let out = transform(&f, &edge, &Q::from(0)).unwrap();
        assert_eq!(out, bp(&[(0, 4, -1), (1, 1, 2), (3, 0, 1)]));
    }

    #[test]
    fn test_transform_rejects_point_below_level() {
        let f = bp(&[(1, 0, 1)]);
        let edge = EdgeData {
            q: 1,
            m: 0,
            l: 5,
            phi: Poly::new(vec![Q::from(0), Q::from(1)]),
        };
        assert!(matches!(
            transform(&f, &edge, &Q::from(0)),
            Err(PuiseuxError::DegenerateEdge { .. })
        ));
    }
}

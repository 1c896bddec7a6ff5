//! Power-series refinement of a branch in simple-root position.
//!
//! The lift maintains the pair (g, s) with G(x, g) = 0 and s*G_y(x, g) = 1
//! modulo x^(2^k), doubling the precision each round. Tracking the inverse
//! alongside the root avoids a series division inside the loop.

use num_traits::{One, Zero};
use ramus_factor::factor_q;
use ramus_poly::{BiPoly, Poly};
use ramus_rings::{Field, Q};

use crate::error::{PuiseuxError, Result};

/// Refines the branch of `g` through its rational base point to degree `n`.
///
/// The base point y0 is 0 when G(0, 0) = 0 and otherwise the greatest
/// rational root of G(0, y). The result is the series solution truncated
/// to degree at most `n`.
///
/// # Errors
///
/// `NotSimpleRoot` when G(0, y) has no rational root or the root is not
/// simple.
pub fn newton_iteration(g: &BiPoly<Q>, n: usize) -> Result<Poly<Q>> {
    let at_zero = g.eval_x0();
    let y0 = if at_zero.coeff(0).is_zero() {
        Q::zero()
    } else {
        greatest_rational_root(&at_zero).ok_or(PuiseuxError::NotSimpleRoot)?
    };
    lift(g, &y0, n)
}

/// Quadratic Newton lift of the simple root `y0` of G(0, y) to a series
/// solution modulo x^(n+1).
pub(crate) fn lift<K: Field>(g: &BiPoly<K>, y0: &K, n: usize) -> Result<Poly<K>> {
    if !g.eval_x0().eval(y0).is_zero() {
        return Err(PuiseuxError::NotSimpleRoot);
    }
    let gy = g.deriv_y();
    let Some(slope_inv) = gy.eval_x0().eval(y0).inv() else {
        return Err(PuiseuxError::NotSimpleRoot);
    };

    let two = Poly::constant(K::one() + K::one());
    let mut cur = Poly::constant(y0.clone());
    let mut inv = Poly::constant(slope_inv);
    let mut prec = 1usize;
    while prec < n + 1 {
        prec = (prec * 2).min(n + 1);
        let val = g.eval_series(&cur, prec);
        cur = (&cur - &val.mul(&inv)).truncated(prec);
        let dval = gy.eval_series(&cur, prec);
        inv = inv.mul(&(&two - &dval.mul(&inv))).truncated(prec);
    }
    Ok(cur)
}

/// The greatest rational root of `p`, read off the linear factors of its
/// factorization over Q.
fn greatest_rational_root(p: &Poly<Q>) -> Option<Q> {
    factor_q(p)
        .factors
        .iter()
        .filter(|part| part.factor.degree() == 1)
        .map(|part| -part.factor.coeff(0))
        .max()
}

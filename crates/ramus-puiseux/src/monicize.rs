//! Rescaling away a leading coefficient that vanishes at x = 0.
//!
//! Substituting y -> y/x and clearing denominators with the smallest x-power
//! raises the low rows relative to the leading one; iterating makes the
//! leading coefficient a unit at x = 0. The substitution is undone on the
//! finished series by dividing through by x^shift, which is where Laurent
//! tails with negative exponents enter.

use num_traits::Zero;
use ramus_poly::{BiPoly, Poly};
use ramus_rings::Ring;

use crate::error::{PuiseuxError, Result};

/// An almost-monic rescale G(x, y) = x^a * F(x, y / x^shift).
///
/// Branches map back through y_F(x) = Y_G(x) / x^shift.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Monicized<R: Ring> {
    /// The rescaled polynomial, y-leading coefficient a unit at x = 0.
    pub poly: BiPoly<R>,
    /// The accumulated rescale exponent.
    pub shift: usize,
}

/// Rescales `f` until its y-leading coefficient no longer vanishes at x = 0.
///
/// # Errors
///
/// `InvalidPolynomial` when `f` is zero or free of `y`; `NotMonicizable`
/// when the iteration budget runs out, which no genuine polynomial reaches.
pub fn almost_monicize<R: Ring>(f: &BiPoly<R>) -> Result<Monicized<R>> {
    if f.is_zero() {
        return Err(PuiseuxError::InvalidPolynomial("zero polynomial".into()));
    }
    if f.deg_y() == 0 {
        return Err(PuiseuxError::InvalidPolynomial(
            "no dependence on y".into(),
        ));
    }

    let mut rows: Vec<Poly<R>> = f.rows().to_vec();
    let mut shift = 0usize;
    let budget = rows[rows.len() - 1].ord() + 2;
    loop {
        if !rows[rows.len() - 1].coeff(0).is_zero() {
            break;
        }
        if shift >= budget {
            return Err(PuiseuxError::NotMonicizable);
        }
        let s = rows
            .iter()
            .enumerate()
            .filter(|(_, row)| !row.is_zero())
            .map(|(i, row)| i as i64 - row.ord() as i64)
            .max()
            .unwrap_or(0)
            .max(0) as usize;
        for (i, row) in rows.iter_mut().enumerate() {
            if row.is_zero() {
                continue;
            }
            *row = if s >= i {
                row.shift(s - i)
            } else {
                row.div_xpow(i - s).expect("row order covers the rescale")
            };
        }
        shift += 1;
    }
    Ok(Monicized {
        poly: BiPoly::new(rows),
        shift,
    })
}

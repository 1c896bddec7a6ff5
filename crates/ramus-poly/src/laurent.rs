//! Laurent polynomials with finitely many terms of either sign.
//!
//! These carry the results of substituting x = t^e / c into ordinary
//! polynomials, so exponents are signed and sparse storage fits better
//! than a coefficient vector.

use ramus_rings::Ring;
use std::collections::BTreeMap;

use crate::dense::Poly;

/// A Laurent polynomial: finitely many terms c * x^n with n ∈ ℤ.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct LaurentPoly<R: Ring> {
    /// Nonzero coefficients indexed by exponent.
    coeffs: BTreeMap<i64, R>,
}

impl<R: Ring> LaurentPoly<R> {
    /// Creates a Laurent polynomial from (exponent, coefficient) pairs.
    /// Repeated exponents are accumulated; zero coefficients dropped.
    #[must_use]
    pub fn new(terms: Vec<(i64, R)>) -> Self {
        let mut coeffs: BTreeMap<i64, R> = BTreeMap::new();
        for (exp, c) in terms {
            if c.is_zero() {
                continue;
            }
            match coeffs.remove(&exp) {
                Some(existing) => {
                    let sum = existing + c;
                    if !sum.is_zero() {
                        coeffs.insert(exp, sum);
                    }
                }
                None => {
                    coeffs.insert(exp, c);
                }
            }
        }
        Self { coeffs }
    }

    /// Views an ordinary polynomial as a Laurent polynomial.
    #[must_use]
    pub fn from_poly(p: &Poly<R>) -> Self {
        Self::new(
            p.coeffs()
                .iter()
                .enumerate()
                .map(|(i, c)| (i as i64, c.clone()))
                .collect(),
        )
    }

    /// Returns the coefficient of x^n.
    #[must_use]
    pub fn coeff(&self, n: i64) -> R {
        self.coeffs.get(&n).cloned().unwrap_or_else(R::zero)
    }

    /// Returns the lowest exponent carrying a nonzero coefficient.
    #[must_use]
    pub fn min_exp(&self) -> Option<i64> {
        self.coeffs.keys().next().copied()
    }

    /// Returns true if there are no terms.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.coeffs.is_empty()
    }

    /// Returns the nonzero terms in ascending exponent order.
    pub fn terms(&self) -> impl Iterator<Item = (i64, &R)> {
        self.coeffs.iter().map(|(&e, c)| (e, c))
    }

    /// Multiplies by x^n.
    #[must_use]
    pub fn shift(&self, n: i64) -> Self {
        Self {
            coeffs: self
                .coeffs
                .iter()
                .map(|(&e, c)| (e + n, c.clone()))
                .collect(),
        }
    }

    /// Multiplies every coefficient by a constant.
    #[must_use]
    pub fn scale(&self, c: &R) -> Self {
        Self::new(
            self.coeffs
                .iter()
                .map(|(&e, coeff)| (e, coeff.clone() * c.clone()))
                .collect(),
        )
    }
}

impl<R: Ring + std::fmt::Display> std::fmt::Display for LaurentPoly<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }

        let mut first = true;
        for (&exp, coeff) in &self.coeffs {
            if first {
                first = false;
            } else {
                write!(f, " + ")?;
            }

            if exp == 0 {
                write!(f, "({coeff})")?;
            } else if exp == 1 {
                write!(f, "({coeff})*x")?;
            } else {
                write!(f, "({coeff})*x^{exp}")?;
            }
        }

        Ok(())
    }
}

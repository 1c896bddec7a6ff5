//! Branch values and the composition state threaded through the recursion.
//!
//! A finished branch parametrizes x = x_scale * t^ramification and y as a
//! Laurent series in t. During the recursion a branch is kept in raw form:
//! the exact singular part accumulated so far plus one linear slot
//! B * t^b * S(t) into which the refined tail of the leaf residual is
//! substituted at the end.

use std::sync::Arc;

use num_complex::Complex64;
use num_traits::{One, Zero};
use ramus_poly::{BiPoly, LaurentPoly, Poly};
use ramus_rings::{AlgebraicNumber, Field, NumberField, Q};

use crate::error::Result;
use crate::refine::lift;

/// One Puiseux branch of a plane curve at x = 0.
///
/// The parametrization is x = `x_scale` * t^`ramification`, y = `series`(t).
/// Negative series exponents appear only when undoing a monicizing rescale,
/// i.e. on branches with a pole at the origin.
#[derive(Clone, Debug)]
pub struct PuiseuxBranch {
    /// The leaf residual the series tail was refined from.
    pub residual: BiPoly<AlgebraicNumber>,
    /// Coefficient of the x-parametrization.
    pub x_scale: AlgebraicNumber,
    /// Exponent of the x-parametrization.
    pub ramification: usize,
    /// The y-series in the branch parameter t.
    pub series: LaurentPoly<AlgebraicNumber>,
}

/// Branches compare by parametrization; the residual is a trace payload.
impl PartialEq for PuiseuxBranch {
    fn eq(&self, other: &Self) -> bool {
        self.ramification == other.ramification
            && self.x_scale == other.x_scale
            && self.series == other.series
    }
}

impl Eq for PuiseuxBranch {}

impl PuiseuxBranch {
    /// Evaluates the y-series numerically at `t`, embedding the coefficient
    /// field through its root number `root_index`.
    #[must_use]
    pub fn evaluate(&self, t: Complex64, root_index: usize) -> Complex64 {
        crate::numeric::branch_value(self, t, root_index)
    }

    /// Undoes a monicizing rescale of exponent `k`: the series divides by
    /// (x_scale * t^ramification)^k.
    pub(crate) fn rescaled(&self, k: usize) -> Self {
        if k == 0 {
            return self.clone();
        }
        let scale = self
            .x_scale
            .pow_u(k as u32)
            .inv()
            .expect("x-scale is a unit");
        PuiseuxBranch {
            residual: self.residual.clone(),
            x_scale: self.x_scale.clone(),
            ramification: self.ramification,
            series: self
                .series
                .shift(-((self.ramification * k) as i64))
                .scale(&scale),
        }
    }
}

/// The in-flight form of a branch: exact singular part plus a linear slot
/// awaiting the refined tail of `residual`.
#[derive(Clone, Debug)]
pub(crate) struct RawBranch {
    /// Leaf residual in simple-root position at the origin.
    pub residual: BiPoly<AlgebraicNumber>,
    /// Accumulated x-scale; x = lam * t^e.
    pub lam: AlgebraicNumber,
    /// Accumulated ramification.
    pub e: usize,
    /// Exact singular part of the y-series.
    pub sing: Poly<AlgebraicNumber>,
    /// Slot coefficient B in sing + B * t^b * S(t).
    pub slot_coeff: AlgebraicNumber,
    /// Slot exponent b.
    pub slot_exp: usize,
    /// Image of the input field's generator inside the leaf field.
    pub theta_of_input: AlgebraicNumber,
}

impl RawBranch {
    /// Seeds a branch at a leaf residual: x = t, y = S(t).
    pub fn leaf(residual: BiPoly<AlgebraicNumber>) -> Self {
        let field = ambient_field(&residual);
        RawBranch {
            residual,
            lam: AlgebraicNumber::constant_in(Q::one(), Arc::clone(&field)),
            e: 1,
            sing: Poly::new(vec![]),
            slot_coeff: AlgebraicNumber::constant_in(Q::one(), Arc::clone(&field)),
            slot_exp: 0,
            theta_of_input: AlgebraicNumber::generator(field),
        }
    }

    /// Lifts the branch through one edge substitution: the child
    /// parametrization (P1, Q1) becomes P = lam * P1^q, Q = P1^m * (mu + Q1).
    ///
    /// `lam`, `mu` and `gen_image` live in the field the child polynomial
    /// was built over; they are embedded into the leaf field through
    /// `theta_of_input` before composing.
    pub fn compose(
        &self,
        q: usize,
        m: usize,
        lam: &AlgebraicNumber,
        mu: &AlgebraicNumber,
        gen_image: &AlgebraicNumber,
    ) -> Self {
        let lam_leaf = embed(lam, &self.theta_of_input);
        let mu_leaf = embed(mu, &self.theta_of_input);
        let lam_m = self.lam.pow_u(m as u32);
        let rise = m * self.e;
        let center = Poly::monomial(&lam_m * &mu_leaf, rise);
        RawBranch {
            residual: self.residual.clone(),
            lam: lam_leaf * self.lam.pow_u(q as u32),
            e: q * self.e,
            sing: self.sing.shift(rise).scale(&lam_m).add(&center),
            slot_coeff: &lam_m * &self.slot_coeff,
            slot_exp: self.slot_exp + rise,
            theta_of_input: embed(gen_image, &self.theta_of_input),
        }
    }

    /// Refines the leaf tail to degree `order` and fills the slot.
    pub fn finalize(&self, order: usize) -> Result<PuiseuxBranch> {
        let tail = lift(&self.residual, &AlgebraicNumber::from_rational(Q::zero()), order)?;
        let refined = self
            .sing
            .add(&tail.shift(self.slot_exp).scale(&self.slot_coeff));
        Ok(PuiseuxBranch {
            residual: self.residual.clone(),
            x_scale: self.lam.clone(),
            ramification: self.e,
            series: LaurentPoly::from_poly(&refined),
        })
    }
}

/// The number field the coefficients of `f` live in.
pub(crate) fn ambient_field(f: &BiPoly<AlgebraicNumber>) -> Arc<NumberField> {
    for row in f.rows() {
        for c in row.coeffs() {
            if !c.field().is_rationals() {
                return Arc::clone(c.field());
            }
        }
    }
    NumberField::rationals()
}

/// Evaluates the coordinate vector of `a` at `theta` by Horner's rule,
/// rewriting `a` inside the field of `theta`.
pub(crate) fn embed(a: &AlgebraicNumber, theta: &AlgebraicNumber) -> AlgebraicNumber {
    let field = theta.field();
    let mut acc = AlgebraicNumber::constant_in(Q::zero(), Arc::clone(field));
    for c in a.coeffs().iter().rev() {
        acc = acc * theta.clone() + AlgebraicNumber::constant_in(c.clone(), Arc::clone(field));
    }
    acc
}

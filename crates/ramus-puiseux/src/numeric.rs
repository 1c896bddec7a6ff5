//! Floating-point evaluation of exact branch data.
//!
//! An algebraic number has one complex value per conjugate of its field
//! generator. The conjugates are ordered canonically, ascending by real
//! part and then by imaginary part, so a root index addresses the same
//! embedding across every coefficient of a branch. Roots come from the
//! Aberth-Ehrlich iteration, which converges to all roots of the minimal
//! polynomial simultaneously.

use num_complex::Complex64;
use ramus_rings::{AlgebraicNumber, NumberField};

use crate::branch::PuiseuxBranch;

/// Convergence threshold of the root iteration, relative to the root size.
const ROOT_TOL: f64 = 1e-13;

/// Iteration ceiling; simultaneous iteration converges cubically long
/// before this.
const MAX_ROUNDS: usize = 120;

/// Complex values of exact coefficients under a chosen embedding.
pub trait Approximate {
    /// Evaluates under the embedding sending the field generator to its
    /// canonical root number `root_index`, taken modulo the field degree.
    fn approximate(&self, root_index: usize) -> Complex64;
}

impl Approximate for AlgebraicNumber {
    fn approximate(&self, root_index: usize) -> Complex64 {
        let roots = field_roots(self.field());
        let theta = roots[root_index % roots.len()];
        let mut acc = Complex64::new(0.0, 0.0);
        for c in self.coeffs().iter().rev() {
            acc = acc * theta + Complex64::new(c.to_f64(), 0.0);
        }
        acc
    }
}

/// The complex roots of the minimal polynomial of `field`, canonically
/// ordered: real roots ascending, then complex roots by real part and
/// imaginary magnitude, each conjugate pair adjacent with the negative
/// imaginary part first. The rational field reports the single root 0.
#[must_use]
pub fn field_roots(field: &NumberField) -> Vec<Complex64> {
    let coeffs: Vec<Complex64> = field
        .min_poly()
        .iter()
        .map(|c| Complex64::new(c.to_f64(), 0.0))
        .collect();
    let mut roots = aberth_roots(&coeffs);
    for z in &mut roots {
        if z.im.abs() < 1e-10 * (1.0 + z.norm()) {
            z.im = 0.0;
        }
    }
    roots.sort_unstable_by(|a, b| {
        (a.im != 0.0)
            .cmp(&(b.im != 0.0))
            .then(a.re.total_cmp(&b.re))
            .then(a.im.abs().total_cmp(&b.im.abs()))
            .then(a.im.total_cmp(&b.im))
    });
    roots
}

/// All complex roots of the polynomial with coefficients `coeffs`,
/// constant term first. The leading coefficient must be nonzero.
#[must_use]
pub fn aberth_roots(coeffs: &[Complex64]) -> Vec<Complex64> {
    let n = coeffs.len().saturating_sub(1);
    if n == 0 {
        return Vec::new();
    }
    let lead = coeffs[n];
    if n == 1 {
        return vec![-coeffs[0] / lead];
    }

    // Initial guesses on a circle enclosing all roots, with an angular
    // offset that avoids symmetry stalls.
    let radius = 1.0
        + coeffs[..n]
            .iter()
            .map(|c| (c / lead).norm())
            .fold(0.0, f64::max);
    let mut roots: Vec<Complex64> = (0..n)
        .map(|k| {
            let angle = std::f64::consts::TAU * (k as f64 + 0.37) / n as f64;
            Complex64::from_polar(radius, angle)
        })
        .collect();

    for _ in 0..MAX_ROUNDS {
        let mut shift = 0.0f64;
        for k in 0..n {
            let z = roots[k];
            let (p, dp) = horner_with_derivative(coeffs, z);
            if p.norm() == 0.0 {
                continue;
            }
            let newton = if dp.norm() == 0.0 {
                Complex64::new(ROOT_TOL, ROOT_TOL)
            } else {
                p / dp
            };
            let repel: Complex64 = (0..n)
                .filter(|&j| j != k)
                .map(|j| (z - roots[j]).finv())
                .sum();
            let denom = Complex64::new(1.0, 0.0) - newton * repel;
            let delta = if denom.norm() == 0.0 {
                newton
            } else {
                newton / denom
            };
            roots[k] = z - delta;
            shift = shift.max(delta.norm() / (1.0 + z.norm()));
        }
        if shift < ROOT_TOL {
            break;
        }
    }
    roots
}

/// Evaluates the y-series of a branch at the parameter value `t`.
pub(crate) fn branch_value(
    branch: &PuiseuxBranch,
    t: Complex64,
    root_index: usize,
) -> Complex64 {
    branch
        .series
        .terms()
        .map(|(n, c)| c.approximate(root_index) * t.powi(n as i32))
        .sum()
}

fn horner_with_derivative(coeffs: &[Complex64], z: Complex64) -> (Complex64, Complex64) {
    let mut p = Complex64::new(0.0, 0.0);
    let mut dp = Complex64::new(0.0, 0.0);
    for c in coeffs.iter().rev() {
        dp = dp * z + p;
        p = p * z + c;
    }
    (p, dp)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use ramus_poly::BiPoly;
    use ramus_rings::Q;

    use crate::driver::puiseux;

    fn c(re: f64, im: f64) -> Complex64 {
        Complex64::new(re, im)
    }

    #[test]
    fn test_aberth_quadratic() {
        // z^2 - 2
        let roots = aberth_roots(&[c(-2.0, 0.0), c(0.0, 0.0), c(1.0, 0.0)]);
        assert_eq!(roots.len(), 2);
        for z in roots {
            assert!((z * z - c(2.0, 0.0)).norm() < 1e-10);
        }
    }

    #[test]
    fn test_aberth_roots_of_unity() {
        // z^3 - 1
        let coeffs = [c(-1.0, 0.0), c(0.0, 0.0), c(0.0, 0.0), c(1.0, 0.0)];
        let roots = aberth_roots(&coeffs);
        assert_eq!(roots.len(), 3);
        for z in roots {
            assert!((z.powi(3) - c(1.0, 0.0)).norm() < 1e-10);
        }
    }

    #[test]
    fn test_field_roots_are_sorted() {
        let field = NumberField::quadratic(2);
        let roots = field_roots(&field);
        assert!((roots[0].re + 2f64.sqrt()).abs() < 1e-10);
        assert!((roots[1].re - 2f64.sqrt()).abs() < 1e-10);
        assert_eq!(roots[0].im, 0.0);

        assert_eq!(field_roots(&NumberField::rationals()), vec![c(0.0, 0.0)]);
    }

    #[test]
    fn test_field_roots_real_first_conjugates_adjacent() {
        // z^3 - 1: the real root leads, the conjugate pair follows with
        // negative imaginary part first.
        let field = NumberField::new(vec![Q::from(-1), Q::from(0), Q::from(0), Q::from(1)]);
        let roots = field_roots(&field);
        assert!((roots[0] - c(1.0, 0.0)).norm() < 1e-10);
        assert!((roots[1].re + 0.5).abs() < 1e-10);
        assert!(roots[1].im < 0.0);
        assert!((roots[2] - roots[1].conj()).norm() < 1e-10);

        // z^2 + 1: a pure conjugate pair.
        let gauss = field_roots(&NumberField::quadratic(-1));
        assert!((gauss[0] - c(0.0, -1.0)).norm() < 1e-10);
        assert!((gauss[1] - c(0.0, 1.0)).norm() < 1e-10);
    }

    #[test]
    fn test_approximate_rational_ignores_index() {
        let a = AlgebraicNumber::from_rational(Q::new(3, 4));
        assert_eq!(a.approximate(0), c(0.75, 0.0));
        assert_eq!(a.approximate(5), c(0.75, 0.0));
    }

    #[test]
    fn test_approximate_generator_conjugates() {
        let gen = AlgebraicNumber::generator(Arc::new(NumberField::quadratic(2)));
        assert!((gen.approximate(0).re + 2f64.sqrt()).abs() < 1e-10);
        assert!((gen.approximate(1).re - 2f64.sqrt()).abs() < 1e-10);
    }

    #[test]
    fn test_cusp_parametrization_is_exact() {
        // y^3 - x^5 along x = t^3, y = t^5.
        let f = BiPoly::from_terms(vec![
            (3, 0, AlgebraicNumber::from_i64(1)),
            (0, 5, AlgebraicNumber::from_i64(-1)),
        ]);
        let b = &puiseux(&f, 0).unwrap()[0];
        let t = c(0.7, 0.2);
        let x = b.x_scale.approximate(0) * t.powi(b.ramification as i32);
        let y = b.evaluate(t, 0);
        assert!((y.powi(3) - x.powi(5)).norm() < 1e-9);
    }

    #[test]
    fn test_refined_branch_satisfies_curve_in_both_embeddings() {
        // (y^2 - 2)^2 - x at both conjugates of sqrt(2).
        let f = BiPoly::from_terms(vec![
            (4, 0, AlgebraicNumber::from_i64(1)),
            (2, 0, AlgebraicNumber::from_i64(-4)),
            (0, 0, AlgebraicNumber::from_i64(4)),
            (0, 1, AlgebraicNumber::from_i64(-1)),
        ]);
        let b = &puiseux(&f, 4).unwrap()[0];
        let t = c(0.01, 0.0);
        for idx in 0..2 {
            let x = b.x_scale.approximate(idx) * t.powi(b.ramification as i32);
            let y = b.evaluate(t, idx);
            let residual = (y * y - c(2.0, 0.0)).powi(2) - x;
            assert!(residual.norm() < 1e-9);
        }
    }
}

//! Resultants via the Sylvester matrix.
//!
//! The resultant of two polynomials is zero iff they share a common
//! root. It is computed as a Sylvester determinant with the Bareiss
//! fraction-free elimination, so it stays exact over any Euclidean
//! domain, including polynomial coefficient rings.

use ramus_rings::{EuclideanDomain, Ring};

/// Computes the resultant of two univariate polynomials given as
/// ascending coefficient slices.
pub fn resultant<R: EuclideanDomain>(f: &[R], g: &[R]) -> R {
    if f.is_empty() || g.is_empty() {
        return R::zero();
    }

    let deg_f = f.len() - 1;
    let deg_g = g.len() - 1;

    if deg_f == 0 {
        return const_pow(&f[0], deg_g as u32);
    }
    if deg_g == 0 {
        return const_pow(&g[0], deg_f as u32);
    }

    let sylvester = build_sylvester_matrix(f, g);
    determinant(&sylvester)
}

/// Builds the Sylvester matrix: deg(g) shifted copies of f stacked on
/// deg(f) shifted copies of g, coefficients in ascending order.
fn build_sylvester_matrix<R: Ring>(f: &[R], g: &[R]) -> Vec<Vec<R>> {
    let deg_f = f.len() - 1;
    let deg_g = g.len() - 1;
    let size = deg_f + deg_g;

    let mut matrix = vec![vec![R::zero(); size]; size];
    for i in 0..deg_g {
        for (j, coeff) in f.iter().enumerate() {
            matrix[i][i + j] = coeff.clone();
        }
    }
    for i in 0..deg_f {
        for (j, coeff) in g.iter().enumerate() {
            matrix[deg_g + i][i + j] = coeff.clone();
        }
    }

    matrix
}

/// Computes a determinant by Bareiss fraction-free elimination, with
/// direct formulas for sizes up to three.
fn determinant<R: EuclideanDomain>(matrix: &[Vec<R>]) -> R {
    let n = matrix.len();
    if n == 0 {
        return R::one();
    }
    if n == 1 {
        return matrix[0][0].clone();
    }
    if n == 2 {
        let [a, b] = [&matrix[0][0], &matrix[0][1]];
        let [c, d] = [&matrix[1][0], &matrix[1][1]];
        return a.clone() * d.clone() - b.clone() * c.clone();
    }
    if n == 3 {
        let [a, b, c] = [&matrix[0][0], &matrix[0][1], &matrix[0][2]];
        let [d, e, f] = [&matrix[1][0], &matrix[1][1], &matrix[1][2]];
        let [g, h, i] = [&matrix[2][0], &matrix[2][1], &matrix[2][2]];

        let pos = a.clone() * e.clone() * i.clone()
            + b.clone() * f.clone() * g.clone()
            + c.clone() * d.clone() * h.clone();
        let neg = c.clone() * e.clone() * g.clone()
            + b.clone() * d.clone() * i.clone()
            + a.clone() * f.clone() * h.clone();
        return pos - neg;
    }

    let mut m: Vec<Vec<R>> = matrix.to_vec();
    let mut sign_flips = 0usize;

    for k in 0..n - 1 {
        let Some(pivot_row) = (k..n).find(|&i| !m[i][k].is_zero()) else {
            return R::zero();
        };
        if pivot_row != k {
            m.swap(k, pivot_row);
            sign_flips += 1;
        }

        let pivot = m[k][k].clone();
        let prev_pivot = if k > 0 {
            m[k - 1][k - 1].clone()
        } else {
            R::one()
        };

        for i in k + 1..n {
            for j in k + 1..n {
                // Bareiss: m[i][j] = (m[i][j]*pivot - m[i][k]*m[k][j]) / prev_pivot,
                // with the division exact by construction.
                let numerator =
                    m[i][j].clone() * pivot.clone() - m[i][k].clone() * m[k][j].clone();
                m[i][j] = exact_div(&numerator, &prev_pivot);
            }
            m[i][k] = R::zero();
        }
    }

    let det = m[n - 1][n - 1].clone();
    if sign_flips % 2 == 0 {
        det
    } else {
        -det
    }
}

fn exact_div<R: EuclideanDomain>(dividend: &R, divisor: &R) -> R {
    if divisor.is_one() {
        return dividend.clone();
    }
    let (quotient, remainder) = dividend.div_rem(divisor);
    debug_assert!(remainder.is_zero(), "Bareiss division must be exact");
    quotient
}

fn const_pow<R: Ring>(base: &R, mut exp: u32) -> R {
    let mut result = R::one();
    let mut b = base.clone();
    while exp > 0 {
        if exp & 1 == 1 {
            result = result * b.clone();
        }
        b = b.clone() * b;
        exp >>= 1;
    }
    result
}

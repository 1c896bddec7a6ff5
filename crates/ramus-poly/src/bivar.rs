//! Bivariate polynomials in x and y.
//!
//! A polynomial H(x, y) = Σ a_ij x^j y^i is stored as rows of dense
//! univariate polynomials in x, row i holding the coefficient of y^i.
//! This is the working representation for plane algebraic curves: the
//! row view gives direct access to the support needed for Newton
//! polygons, while each row stays a first-class polynomial.

use ramus_rings::Ring;

use crate::dense::Poly;

/// A bivariate polynomial, stored as rows indexed by the power of y.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct BiPoly<R: Ring> {
    /// Row i is the coefficient of y^i, a polynomial in x.
    /// No trailing zero rows, so the zero polynomial has no rows.
    rows: Vec<Poly<R>>,
}

impl<R: Ring> BiPoly<R> {
    /// Creates a bivariate polynomial from rows, trimming zero rows
    /// from the top.
    #[must_use]
    pub fn new(mut rows: Vec<Poly<R>>) -> Self {
        while rows.last().map_or(false, Poly::is_zero) {
            rows.pop();
        }
        Self { rows }
    }

    /// Creates a bivariate polynomial from (y-exponent, x-exponent,
    /// coefficient) triples. Repeated positions are accumulated.
    #[must_use]
    pub fn from_terms(terms: Vec<(usize, usize, R)>) -> Self {
        let row_count = terms.iter().map(|&(i, _, _)| i + 1).max().unwrap_or(0);
        let mut rows: Vec<Vec<R>> = vec![Vec::new(); row_count];
        for (i, j, c) in terms {
            let row = &mut rows[i];
            if row.len() <= j {
                row.resize(j + 1, R::zero());
            }
            row[j] = row[j].clone() + c;
        }
        Self::new(rows.into_iter().map(Poly::new).collect())
    }

    /// Returns true if this is the zero polynomial.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns the rows, row i being the coefficient of y^i.
    #[must_use]
    pub fn rows(&self) -> &[Poly<R>] {
        &self.rows
    }

    /// Returns the coefficient of x^j y^i.
    #[must_use]
    pub fn coeff(&self, i: usize, j: usize) -> R {
        self.rows.get(i).map_or_else(R::zero, |row| row.coeff(j))
    }

    /// Returns the degree in y. The zero polynomial reports 0.
    #[must_use]
    pub fn deg_y(&self) -> usize {
        self.rows.len().saturating_sub(1)
    }

    /// Returns the degree in x. The zero polynomial reports 0.
    #[must_use]
    pub fn deg_x(&self) -> usize {
        self.rows
            .iter()
            .filter(|row| !row.is_zero())
            .map(Poly::degree)
            .max()
            .unwrap_or(0)
    }

    /// Returns the largest power of x dividing every term, 0 for zero.
    #[must_use]
    pub fn ord_x(&self) -> usize {
        self.rows
            .iter()
            .filter(|row| !row.is_zero())
            .map(Poly::ord)
            .min()
            .unwrap_or(0)
    }

    /// Returns the support as (y-exponent, x-exponent) pairs of all
    /// nonzero terms, in row order.
    #[must_use]
    pub fn support(&self) -> Vec<(usize, usize)> {
        let mut points = Vec::new();
        for (i, row) in self.rows.iter().enumerate() {
            for (j, c) in row.coeffs().iter().enumerate() {
                if !c.is_zero() {
                    points.push((i, j));
                }
            }
        }
        points
    }

    /// Evaluates at x = 0, leaving a univariate polynomial in y.
    #[must_use]
    pub fn eval_x0(&self) -> Poly<R> {
        Poly::new(self.rows.iter().map(|row| row.coeff(0)).collect())
    }

    /// Evaluates at y = 0, leaving a univariate polynomial in x.
    #[must_use]
    pub fn eval_y0(&self) -> Poly<R> {
        self.rows.first().cloned().unwrap_or_else(|| Poly::new(Vec::new()))
    }

    /// Returns the constant term, the value at the origin.
    #[must_use]
    pub fn eval_origin(&self) -> R {
        self.coeff(0, 0)
    }

    /// Computes the partial derivative with respect to y.
    #[must_use]
    pub fn deriv_y(&self) -> Self {
        if self.rows.len() <= 1 {
            return Self::new(Vec::new());
        }
        let rows = self
            .rows
            .iter()
            .skip(1)
            .enumerate()
            .map(|(i, row)| row.map(|c| c.mul_by_scalar(i as i64 + 1)))
            .collect();
        Self::new(rows)
    }

    /// Substitutes a power series for y, truncating all products at
    /// degree < prec in x.
    #[must_use]
    pub fn eval_series(&self, y: &Poly<R>, prec: usize) -> Poly<R> {
        let mut acc = Poly::new(Vec::new());
        for row in self.rows.iter().rev() {
            acc = acc.mul(y).truncated(prec).add(&row.truncated(prec));
        }
        acc
    }

    /// Divides out the content x^(ord_x), returning the stripped
    /// polynomial and the exponent removed.
    #[must_use]
    pub fn strip_x_content(&self) -> (Self, usize) {
        let shift = self.ord_x();
        if shift == 0 {
            return (self.clone(), 0);
        }
        let rows = self
            .rows
            .iter()
            .map(|row| row.div_xpow(shift).unwrap_or_else(|| Poly::new(Vec::new())))
            .collect();
        (Self::new(rows), shift)
    }

    /// Multiplies every coefficient by a constant.
    #[must_use]
    pub fn scale(&self, c: &R) -> Self {
        Self::new(self.rows.iter().map(|row| row.scale(c)).collect())
    }

    /// Applies a coefficient map, renormalizing the result.
    #[must_use]
    pub fn map<S: Ring>(&self, f: impl Fn(&R) -> S) -> BiPoly<S> {
        BiPoly::new(self.rows.iter().map(|row| row.map(&f)).collect())
    }
}

impl<R: Ring> std::fmt::Display for BiPoly<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }

        let mut terms = Vec::new();
        for (i, row) in self.rows.iter().enumerate() {
            for (j, c) in row.coeffs().iter().enumerate() {
                if c.is_zero() {
                    continue;
                }
                let mut term = format!("{c:?}");
                if j == 1 {
                    term.push_str("*x");
                } else if j > 1 {
                    term.push_str(&format!("*x^{j}"));
                }
                if i == 1 {
                    term.push_str("*y");
                } else if i > 1 {
                    term.push_str(&format!("*y^{i}"));
                }
                terms.push(term);
            }
        }

        write!(f, "{}", terms.join(" + "))
    }
}

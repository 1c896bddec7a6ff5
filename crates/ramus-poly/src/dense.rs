//! Dense univariate polynomials.
//!
//! Coefficients are stored in ascending degree order with no trailing
//! zeros, so the zero polynomial is the empty coefficient vector.
//! Multiplication switches from schoolbook to Karatsuba by degree.

use num_traits::{One, Zero};
use ramus_rings::{CommutativeRing, EuclideanDomain, Field, IntegralDomain, Ring};
use std::ops::{Add, Mul, Neg, Sub};

use crate::algorithms::gcd::{poly_div_rem, poly_gcd};

/// Degree below which schoolbook multiplication beats Karatsuba.
const KARATSUBA_CUTOFF: usize = 32;

/// A dense univariate polynomial over a ring.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Poly<R: Ring> {
    /// Coefficients in ascending degree order, trailing zeros removed.
    coeffs: Vec<R>,
}

impl<R: Ring> Poly<R> {
    /// Creates a polynomial from coefficients, trimming trailing zeros.
    #[must_use]
    pub fn new(mut coeffs: Vec<R>) -> Self {
        while coeffs.last().map_or(false, |c| c.is_zero()) {
            coeffs.pop();
        }
        Self { coeffs }
    }

    /// Creates a constant polynomial.
    #[must_use]
    pub fn constant(c: R) -> Self {
        Self::new(vec![c])
    }

    /// Creates the polynomial x.
    #[must_use]
    pub fn x() -> Self {
        Self::new(vec![R::zero(), R::one()])
    }

    /// Creates the monomial c * x^n.
    #[must_use]
    pub fn monomial(c: R, n: usize) -> Self {
        if c.is_zero() {
            return Self::new(Vec::new());
        }
        let mut coeffs = vec![R::zero(); n + 1];
        coeffs[n] = c;
        Self { coeffs }
    }

    /// Returns the degree. The zero polynomial reports degree 0.
    #[must_use]
    pub fn degree(&self) -> usize {
        self.coeffs.len().saturating_sub(1)
    }

    /// Returns true if this is the zero polynomial.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.coeffs.is_empty()
    }

    /// Returns the leading coefficient, or `None` for the zero polynomial.
    #[must_use]
    pub fn leading(&self) -> Option<&R> {
        self.coeffs.last()
    }

    /// Returns the coefficient of x^i.
    #[must_use]
    pub fn coeff(&self, i: usize) -> R {
        self.coeffs.get(i).cloned().unwrap_or_else(R::zero)
    }

    /// Returns all coefficients.
    #[must_use]
    pub fn coeffs(&self) -> &[R] {
        &self.coeffs
    }

    /// Returns the order: the exponent of the lowest nonzero term.
    /// The zero polynomial reports order 0.
    #[must_use]
    pub fn ord(&self) -> usize {
        self.coeffs
            .iter()
            .position(|c| !c.is_zero())
            .unwrap_or(0)
    }

    /// Evaluates the polynomial at a point using Horner's method.
    #[must_use]
    pub fn eval(&self, x: &R) -> R {
        let mut result = R::zero();
        for c in self.coeffs.iter().rev() {
            result = result * x.clone() + c.clone();
        }
        result
    }

    /// Adds two polynomials.
    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        let len = self.coeffs.len().max(other.coeffs.len());
        let mut result = Vec::with_capacity(len);
        for i in 0..len {
            let a = self.coeff(i);
            let b = other.coeff(i);
            result.push(a + b);
        }
        Self::new(result)
    }

    /// Negates a polynomial.
    #[must_use]
    pub fn neg(&self) -> Self {
        Self {
            coeffs: self.coeffs.iter().map(|c| -c.clone()).collect(),
        }
    }

    /// Subtracts two polynomials.
    #[must_use]
    pub fn sub(&self, other: &Self) -> Self {
        self.add(&other.neg())
    }

    /// Multiplies two polynomials, selecting the algorithm by degree.
    #[must_use]
    pub fn mul(&self, other: &Self) -> Self {
        if self.is_zero() || other.is_zero() {
            return Self::new(Vec::new());
        }
        if self.degree().max(other.degree()) < KARATSUBA_CUTOFF {
            self.mul_schoolbook(other)
        } else {
            self.mul_karatsuba(other)
        }
    }

    /// Schoolbook multiplication: O(n²).
    fn mul_schoolbook(&self, other: &Self) -> Self {
        if self.is_zero() || other.is_zero() {
            return Self::new(Vec::new());
        }
        let n = self.coeffs.len();
        let m = other.coeffs.len();
        let mut result = vec![R::zero(); n + m - 1];
        for (i, a) in self.coeffs.iter().enumerate() {
            if a.is_zero() {
                continue;
            }
            for (j, b) in other.coeffs.iter().enumerate() {
                result[i + j] = result[i + j].clone() + a.clone() * b.clone();
            }
        }
        Self::new(result)
    }

    /// Karatsuba multiplication: O(n^1.58).
    fn mul_karatsuba(&self, other: &Self) -> Self {
        let n = self.coeffs.len();
        let m = other.coeffs.len();
        if n < KARATSUBA_CUTOFF || m < KARATSUBA_CUTOFF {
            return self.mul_schoolbook(other);
        }

        let size = n.max(m).next_power_of_two();
        let half = size / 2;

        let mut a_coeffs = self.coeffs.clone();
        let mut b_coeffs = other.coeffs.clone();
        a_coeffs.resize(size, R::zero());
        b_coeffs.resize(size, R::zero());

        // a = a0 + a1*x^half, b = b0 + b1*x^half
        let a0 = Self::new(a_coeffs[..half].to_vec());
        let a1 = Self::new(a_coeffs[half..].to_vec());
        let b0 = Self::new(b_coeffs[..half].to_vec());
        let b1 = Self::new(b_coeffs[half..].to_vec());

        // a*b = z2*x^(2*half) + z1*x^half + z0 with
        // z0 = a0*b0, z2 = a1*b1, z1 = (a0+a1)*(b0+b1) - z0 - z2
        let z0 = a0.mul_karatsuba(&b0);
        let z2 = a1.mul_karatsuba(&b1);
        let z1 = Self::sub(
            &Self::sub(&Self::add(&a0, &a1).mul_karatsuba(&Self::add(&b0, &b1)), &z0),
            &z2,
        );

        let mut result = vec![R::zero(); 2 * size - 1];
        for (i, c) in z0.coeffs.iter().enumerate() {
            result[i] = c.clone();
        }
        for (i, c) in z1.coeffs.iter().enumerate() {
            result[i + half] = result[i + half].clone() + c.clone();
        }
        for (i, c) in z2.coeffs.iter().enumerate() {
            result[i + 2 * half] = result[i + 2 * half].clone() + c.clone();
        }
        Self::new(result)
    }

    /// Multiplies by a scalar.
    #[must_use]
    pub fn scale(&self, c: &R) -> Self {
        if c.is_zero() {
            return Self::new(Vec::new());
        }
        Self::new(self.coeffs.iter().map(|x| x.clone() * c.clone()).collect())
    }

    /// Computes the formal derivative.
    #[must_use]
    pub fn derivative(&self) -> Self {
        if self.coeffs.len() <= 1 {
            return Self::new(Vec::new());
        }
        let mut result = Vec::with_capacity(self.coeffs.len() - 1);
        for (i, c) in self.coeffs.iter().skip(1).enumerate() {
            result.push(c.mul_by_scalar(i as i64 + 1));
        }
        Self::new(result)
    }

    /// Multiplies by x^n.
    #[must_use]
    pub fn shift(&self, n: usize) -> Self {
        if self.is_zero() || n == 0 {
            return self.clone();
        }
        let mut coeffs = vec![R::zero(); n];
        coeffs.extend(self.coeffs.iter().cloned());
        Self { coeffs }
    }

    /// Divides by x^n, or `None` when some term of degree < n is nonzero.
    #[must_use]
    pub fn div_xpow(&self, n: usize) -> Option<Self> {
        if self.is_zero() || n == 0 {
            return Some(self.clone());
        }
        if self.ord() < n {
            return None;
        }
        Some(Self {
            coeffs: self.coeffs[n..].to_vec(),
        })
    }

    /// Truncates to the coefficients of degree < len.
    #[must_use]
    pub fn truncated(&self, len: usize) -> Self {
        if self.coeffs.len() <= len {
            return self.clone();
        }
        Self::new(self.coeffs[..len].to_vec())
    }

    /// Raises the polynomial to a non-negative integer power.
    #[must_use]
    pub fn pow(&self, n: u32) -> Self {
        let mut result = Self::constant(R::one());
        let mut base = self.clone();
        let mut exp = n;
        while exp > 0 {
            if exp & 1 == 1 {
                result = Self::mul(&result, &base);
            }
            base = Self::mul(&base, &base);
            exp >>= 1;
        }
        result
    }

    /// Applies a coefficient map, renormalizing the result.
    #[must_use]
    pub fn map<S: Ring>(&self, f: impl Fn(&R) -> S) -> Poly<S> {
        Poly::new(self.coeffs.iter().map(|c| f(c)).collect())
    }
}

impl<R: Ring> std::fmt::Display for Poly<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }

        let mut terms = Vec::new();
        for (i, c) in self.coeffs.iter().enumerate() {
            if c.is_zero() {
                continue;
            }
            let term = match i {
                0 => format!("{c:?}"),
                1 => format!("{c:?}*x"),
                _ => format!("{c:?}*x^{i}"),
            };
            terms.push(term);
        }

        write!(f, "{}", terms.join(" + "))
    }
}

impl<R: Ring> Zero for Poly<R> {
    fn zero() -> Self {
        Self::new(Vec::new())
    }

    fn is_zero(&self) -> bool {
        Poly::is_zero(self)
    }
}

impl<R: Ring> One for Poly<R> {
    fn one() -> Self {
        Self::constant(R::one())
    }
}

impl<R: Ring> Neg for Poly<R> {
    type Output = Poly<R>;

    fn neg(self) -> Poly<R> {
        Poly::neg(&self)
    }
}

impl<R: Ring> Neg for &Poly<R> {
    type Output = Poly<R>;

    fn neg(self) -> Poly<R> {
        Poly::neg(self)
    }
}

impl<R: Ring> Add for Poly<R> {
    type Output = Poly<R>;

    fn add(self, rhs: Poly<R>) -> Poly<R> {
        Poly::add(&self, &rhs)
    }
}

impl<R: Ring> Add for &Poly<R> {
    type Output = Poly<R>;

    fn add(self, rhs: &Poly<R>) -> Poly<R> {
        Poly::add(self, rhs)
    }
}

impl<R: Ring> Sub for Poly<R> {
    type Output = Poly<R>;

    fn sub(self, rhs: Poly<R>) -> Poly<R> {
        Poly::sub(&self, &rhs)
    }
}

impl<R: Ring> Sub for &Poly<R> {
    type Output = Poly<R>;

    fn sub(self, rhs: &Poly<R>) -> Poly<R> {
        Poly::sub(self, rhs)
    }
}

impl<R: Ring> Mul for Poly<R> {
    type Output = Poly<R>;

    fn mul(self, rhs: Poly<R>) -> Poly<R> {
        Poly::mul(&self, &rhs)
    }
}

impl<R: Ring> Mul for &Poly<R> {
    type Output = Poly<R>;

    fn mul(self, rhs: &Poly<R>) -> Poly<R> {
        Poly::mul(self, rhs)
    }
}

impl<R: CommutativeRing> Ring for Poly<R> {}
impl<R: CommutativeRing> CommutativeRing for Poly<R> {}
impl<R: IntegralDomain> IntegralDomain for Poly<R> {}

impl<F: Field> EuclideanDomain for Poly<F> {
    fn div_rem(&self, other: &Self) -> (Self, Self) {
        poly_div_rem(self, other)
    }

    fn gcd(&self, other: &Self) -> Self {
        poly_gcd(self, other)
    }
}

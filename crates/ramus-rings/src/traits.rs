//! The algebraic structure hierarchy.
//!
//! Each trait adds the operations valid at that level of structure, so a
//! generic algorithm can name the weakest assumption it needs: polynomial
//! multiplication wants a [`CommutativeRing`], fraction-free elimination a
//! [`EuclideanDomain`], and polynomial division a [`Field`].

use num_traits::{One, Zero};
use std::fmt::Debug;
use std::ops::{Add, Mul, Neg, Sub};

/// A ring with identity. The operator bounds carry the actual arithmetic;
/// the trait mostly serves as a named capability level.
pub trait Ring:
    Clone
    + Debug
    + PartialEq
    + Zero
    + One
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Neg<Output = Self>
{
    /// Computes the n-fold sum `self + self + ... + self`.
    ///
    /// The default uses binary double-and-add; concrete rings override it
    /// with a direct scalar multiplication.
    #[must_use]
    fn mul_by_scalar(&self, n: i64) -> Self {
        let mut remaining = n.unsigned_abs();
        let mut base = self.clone();
        let mut acc = Self::zero();
        while remaining > 0 {
            if remaining & 1 == 1 {
                acc = acc + base.clone();
            }
            base = base.clone() + base;
            remaining >>= 1;
        }
        if n < 0 {
            -acc
        } else {
            acc
        }
    }
}

/// A ring whose multiplication commutes.
pub trait CommutativeRing: Ring {}

/// A commutative ring without zero divisors.
pub trait IntegralDomain: CommutativeRing {}

/// An integral domain with division-with-remainder, and therefore with a
/// Euclidean gcd.
pub trait EuclideanDomain: IntegralDomain {
    /// Splits `self` into quotient and remainder with respect to `other`.
    ///
    /// # Panics
    ///
    /// Implementations panic when `other` is zero.
    fn div_rem(&self, other: &Self) -> (Self, Self);

    /// Greatest common divisor via the Euclidean algorithm.
    ///
    /// The result is normalized by the implementation (non-negative for
    /// integers, monic for polynomials).
    #[must_use]
    fn gcd(&self, other: &Self) -> Self {
        let mut a = self.clone();
        let mut b = other.clone();
        while !b.is_zero() {
            let (_, r) = a.div_rem(&b);
            a = b;
            b = r;
        }
        a
    }

    /// Least common multiple. Zero when either input is zero.
    #[must_use]
    fn lcm(&self, other: &Self) -> Self {
        if self.is_zero() || other.is_zero() {
            return Self::zero();
        }
        let g = self.gcd(other);
        let (q, _) = self.div_rem(&g);
        q * other.clone()
    }

    /// Extended Euclidean algorithm: returns `(g, s, t)` with
    /// `s * self + t * other = g`.
    #[must_use]
    fn extended_gcd(&self, other: &Self) -> (Self, Self, Self) {
        let (mut r0, mut r1) = (self.clone(), other.clone());
        let (mut s0, mut s1) = (Self::one(), Self::zero());
        let (mut t0, mut t1) = (Self::zero(), Self::one());
        while !r1.is_zero() {
            let (q, r) = r0.div_rem(&r1);
            r0 = std::mem::replace(&mut r1, r);
            let s = s0 - q.clone() * s1.clone();
            s0 = std::mem::replace(&mut s1, s);
            let t = t0 - q * t1.clone();
            t0 = std::mem::replace(&mut t1, t);
        }
        (r0, s0, t0)
    }
}

/// A commutative ring in which every nonzero element is invertible.
pub trait Field: EuclideanDomain {
    /// Multiplicative inverse, or `None` for zero.
    #[must_use]
    fn inv(&self) -> Option<Self>;

    /// Division in the field, or `None` when `other` is zero.
    #[must_use]
    fn field_div(&self, other: &Self) -> Option<Self> {
        other.inv().map(|i| self.clone() * i)
    }
}

//! The ring of integers as a ring element type.

use crate::traits::{CommutativeRing, EuclideanDomain, IntegralDomain, Ring};
use num_traits::{One, Zero};
use ramus_integers::Integer;
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

/// An integer viewed as a ring element.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Z(pub Integer);

impl Z {
    /// Creates an element from a machine word.
    #[must_use]
    pub fn new(value: i64) -> Self {
        Z(Integer::new(value))
    }

    /// Borrows the wrapped integer.
    #[must_use]
    pub fn as_integer(&self) -> &Integer {
        &self.0
    }

    /// Consumes the wrapper.
    #[must_use]
    pub fn into_integer(self) -> Integer {
        self.0
    }

    /// Absolute value.
    #[must_use]
    pub fn abs(&self) -> Self {
        Z(self.0.abs())
    }

    /// Whether the value is strictly negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.0.is_negative()
    }
}

impl fmt::Display for Z {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for Z {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Z({})", self.0)
    }
}

impl From<Integer> for Z {
    fn from(value: Integer) -> Self {
        Z(value)
    }
}

impl From<i64> for Z {
    fn from(value: i64) -> Self {
        Z::new(value)
    }
}

impl Zero for Z {
    fn zero() -> Self {
        Z(Integer::zero())
    }

    fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl One for Z {
    fn one() -> Self {
        Z(Integer::one())
    }
}

impl Neg for Z {
    type Output = Z;

    fn neg(self) -> Z {
        Z(-self.0)
    }
}

impl Neg for &Z {
    type Output = Z;

    fn neg(self) -> Z {
        Z(-&self.0)
    }
}

impl Add for Z {
    type Output = Z;

    fn add(self, rhs: Z) -> Z {
        Z(self.0 + rhs.0)
    }
}

impl Add for &Z {
    type Output = Z;

    fn add(self, rhs: &Z) -> Z {
        Z(&self.0 + &rhs.0)
    }
}

impl Sub for Z {
    type Output = Z;

    fn sub(self, rhs: Z) -> Z {
        Z(self.0 - rhs.0)
    }
}

impl Sub for &Z {
    type Output = Z;

    fn sub(self, rhs: &Z) -> Z {
        Z(&self.0 - &rhs.0)
    }
}

impl Mul for Z {
    type Output = Z;

    fn mul(self, rhs: Z) -> Z {
        Z(self.0 * rhs.0)
    }
}

impl Mul for &Z {
    type Output = Z;

    fn mul(self, rhs: &Z) -> Z {
        Z(&self.0 * &rhs.0)
    }
}

impl Ring for Z {
    fn mul_by_scalar(&self, n: i64) -> Self {
        Z(&self.0 * &Integer::new(n))
    }
}
impl CommutativeRing for Z {}
impl IntegralDomain for Z {}

impl EuclideanDomain for Z {
    fn div_rem(&self, other: &Self) -> (Self, Self) {
        assert!(!other.is_zero(), "division by zero");
        (Z(&self.0 / &other.0), Z(&self.0 % &other.0))
    }

    fn gcd(&self, other: &Self) -> Self {
        Z(self.0.gcd(&other.0))
    }
}

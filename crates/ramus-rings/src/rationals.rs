//! The field of rational numbers as a ring element type.

use crate::traits::{CommutativeRing, EuclideanDomain, Field, IntegralDomain, Ring};
use num_traits::{One, Zero};
use ramus_integers::{Integer, Rational};
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

/// A rational number viewed as a field element.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Q(pub Rational);

impl Q {
    /// Creates the fraction `numerator / denominator`.
    ///
    /// # Panics
    ///
    /// Panics when `denominator` is zero.
    #[must_use]
    pub fn new(numerator: i64, denominator: i64) -> Self {
        Q(Rational::new(
            Integer::new(numerator),
            Integer::new(denominator),
        ))
    }

    /// Borrows the wrapped rational.
    #[must_use]
    pub fn as_rational(&self) -> &Rational {
        &self.0
    }

    /// Consumes the wrapper.
    #[must_use]
    pub fn into_rational(self) -> Rational {
        self.0
    }

    /// The numerator of the reduced fraction.
    #[must_use]
    pub fn numerator(&self) -> Integer {
        self.0.numerator()
    }

    /// The denominator of the reduced fraction, always positive.
    #[must_use]
    pub fn denominator(&self) -> Integer {
        self.0.denominator()
    }

    /// Whether the reduced denominator is one.
    #[must_use]
    pub fn is_integer(&self) -> bool {
        self.0.is_integer()
    }

    /// Whether the value is strictly negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.0.is_negative()
    }

    /// Absolute value.
    #[must_use]
    pub fn abs(&self) -> Self {
        Q(self.0.abs())
    }

    /// Nearest `f64` approximation.
    #[must_use]
    pub fn to_f64(&self) -> f64 {
        self.0.to_f64()
    }
}

impl fmt::Display for Q {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for Q {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Q({})", self.0)
    }
}

impl From<Rational> for Q {
    fn from(value: Rational) -> Self {
        Q(value)
    }
}

impl From<Integer> for Q {
    fn from(value: Integer) -> Self {
        Q(Rational::from_integer(value))
    }
}

impl From<i64> for Q {
    fn from(value: i64) -> Self {
        Q(Rational::from_i64(value))
    }
}

impl Zero for Q {
    fn zero() -> Self {
        Q(Rational::zero())
    }

    fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl One for Q {
    fn one() -> Self {
        Q(Rational::one())
    }
}

impl Neg for Q {
    type Output = Q;

    fn neg(self) -> Q {
        Q(-self.0)
    }
}

impl Neg for &Q {
    type Output = Q;

    fn neg(self) -> Q {
        Q(-&self.0)
    }
}

impl Add for Q {
    type Output = Q;

    fn add(self, rhs: Q) -> Q {
        Q(self.0 + rhs.0)
    }
}

impl Add for &Q {
    type Output = Q;

    fn add(self, rhs: &Q) -> Q {
        Q(&self.0 + &rhs.0)
    }
}

impl Sub for Q {
    type Output = Q;

    fn sub(self, rhs: Q) -> Q {
        Q(self.0 - rhs.0)
    }
}

impl Sub for &Q {
    type Output = Q;

    fn sub(self, rhs: &Q) -> Q {
        Q(&self.0 - &rhs.0)
    }
}

impl Mul for Q {
    type Output = Q;

    fn mul(self, rhs: Q) -> Q {
        Q(self.0 * rhs.0)
    }
}

impl Mul for &Q {
    type Output = Q;

    fn mul(self, rhs: &Q) -> Q {
        Q(&self.0 * &rhs.0)
    }
}

impl Ring for Q {
    fn mul_by_scalar(&self, n: i64) -> Self {
        Q(&self.0 * &Rational::from_i64(n))
    }
}
impl CommutativeRing for Q {}
impl IntegralDomain for Q {}

impl EuclideanDomain for Q {
    fn div_rem(&self, other: &Self) -> (Self, Self) {
        assert!(!other.is_zero(), "division by zero");
        (Q(&self.0 * &other.0.clone().recip()), Q::zero())
    }

    fn gcd(&self, other: &Self) -> Self {
        if self.is_zero() && other.is_zero() {
            Q::zero()
        } else {
            Q::one()
        }
    }
}

impl Field for Q {
    fn inv(&self) -> Option<Self> {
        if self.is_zero() {
            None
        } else {
            Some(Q(self.0.clone().recip()))
        }
    }
}

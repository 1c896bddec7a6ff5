//! Signed integers of unbounded magnitude.

use dashu::base::{Abs, Gcd};
use dashu::integer::IBig;
use num_traits::{One, Zero};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, AddAssign, Div, Mul, MulAssign, Neg, Rem, Sub, SubAssign};

/// An arbitrary-precision signed integer.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Integer(IBig);

impl Integer {
    /// Creates an integer from a machine word.
    #[must_use]
    pub fn new(value: i64) -> Self {
        Integer(IBig::from(value))
    }

    /// Absolute value.
    #[must_use]
    pub fn abs(&self) -> Self {
        Integer(self.0.clone().abs())
    }

    /// Sign of the value as `-1`, `0` or `1`.
    #[must_use]
    pub fn signum(&self) -> i32 {
        match self.0.cmp(&IBig::ZERO) {
            Ordering::Less => -1,
            Ordering::Equal => 0,
            Ordering::Greater => 1,
        }
    }

    /// Whether the value is strictly negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.0 < IBig::ZERO
    }

    /// Greatest common divisor. The result is non-negative, and
    /// `gcd(0, 0)` is defined as `0`.
    #[must_use]
    pub fn gcd(&self, other: &Self) -> Self {
        if self.is_zero() && other.is_zero() {
            return Integer::zero();
        }
        Integer(IBig::from(self.0.clone().gcd(other.0.clone())))
    }

    /// Least common multiple. `lcm(a, 0)` is `0`.
    #[must_use]
    pub fn lcm(&self, other: &Self) -> Self {
        if self.is_zero() || other.is_zero() {
            return Integer::zero();
        }
        let g = self.gcd(other);
        (self.clone() / g * other.clone()).abs()
    }

    /// Raises the value to a non-negative power.
    #[must_use]
    pub fn pow(&self, exp: u32) -> Self {
        Integer(self.0.pow(exp as usize))
    }

    /// Converts to `i64` when the value fits.
    #[must_use]
    pub fn to_i64(&self) -> Option<i64> {
        i64::try_from(&self.0).ok()
    }

    /// Lossy conversion to `f64`. Values outside the representable range
    /// saturate to infinity.
    #[must_use]
    pub fn to_f64(&self) -> f64 {
        match self.to_i64() {
            Some(v) => v as f64,
            None => self.0.to_string().parse().unwrap_or(f64::NAN),
        }
    }

    /// Consumes the wrapper and returns the underlying [`IBig`].
    #[must_use]
    pub fn into_inner(self) -> IBig {
        self.0
    }

    /// Borrows the underlying [`IBig`].
    #[must_use]
    pub fn as_inner(&self) -> &IBig {
        &self.0
    }
}

impl Zero for Integer {
    fn zero() -> Self {
        Integer(IBig::ZERO)
    }

    fn is_zero(&self) -> bool {
        self.0 == IBig::ZERO
    }
}

impl One for Integer {
    fn one() -> Self {
        Integer(IBig::ONE)
    }
}

impl Default for Integer {
    fn default() -> Self {
        Integer::zero()
    }
}

impl fmt::Display for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Integer({})", self.0)
    }
}

impl From<i64> for Integer {
    fn from(value: i64) -> Self {
        Integer(IBig::from(value))
    }
}

impl From<i32> for Integer {
    fn from(value: i32) -> Self {
        Integer(IBig::from(value))
    }
}

impl From<u64> for Integer {
    fn from(value: u64) -> Self {
        Integer(IBig::from(value))
    }
}

impl From<IBig> for Integer {
    fn from(value: IBig) -> Self {
        Integer(value)
    }
}

impl Neg for Integer {
    type Output = Integer;

    fn neg(self) -> Integer {
        Integer(-self.0)
    }
}

impl Neg for &Integer {
    type Output = Integer;

    fn neg(self) -> Integer {
        Integer(-self.0.clone())
    }
}

impl Add for Integer {
    type Output = Integer;

    fn add(self, rhs: Integer) -> Integer {
        Integer(self.0 + rhs.0)
    }
}

impl Add<&Integer> for Integer {
    type Output = Integer;

    fn add(self, rhs: &Integer) -> Integer {
        Integer(self.0 + &rhs.0)
    }
}

impl Add<Integer> for &Integer {
    type Output = Integer;

    fn add(self, rhs: Integer) -> Integer {
        Integer(&self.0 + rhs.0)
    }
}

impl Add for &Integer {
    type Output = Integer;

    fn add(self, rhs: &Integer) -> Integer {
        Integer(&self.0 + &rhs.0)
    }
}

impl Sub for Integer {
    type Output = Integer;

    fn sub(self, rhs: Integer) -> Integer {
        Integer(self.0 - rhs.0)
    }
}

impl Sub<&Integer> for Integer {
    type Output = Integer;

    fn sub(self, rhs: &Integer) -> Integer {
        Integer(self.0 - &rhs.0)
    }
}

impl Sub<Integer> for &Integer {
    type Output = Integer;

    fn sub(self, rhs: Integer) -> Integer {
        Integer(&self.0 - rhs.0)
    }
}

impl Sub for &Integer {
    type Output = Integer;

    fn sub(self, rhs: &Integer) -> Integer {
        Integer(&self.0 - &rhs.0)
    }
}

impl Mul for Integer {
    type Output = Integer;

    fn mul(self, rhs: Integer) -> Integer {
        Integer(self.0 * rhs.0)
    }
}

impl Mul<&Integer> for Integer {
    type Output = Integer;

    fn mul(self, rhs: &Integer) -> Integer {
        Integer(self.0 * &rhs.0)
    }
}

impl Mul<Integer> for &Integer {
    type Output = Integer;

    fn mul(self, rhs: Integer) -> Integer {
        Integer(&self.0 * rhs.0)
    }
}

impl Mul for &Integer {
    type Output = Integer;

    fn mul(self, rhs: &Integer) -> Integer {
        Integer(&self.0 * &rhs.0)
    }
}

impl Div for Integer {
    type Output = Integer;

    /// Truncating division.
    fn div(self, rhs: Integer) -> Integer {
        Integer(self.0 / rhs.0)
    }
}

impl Div for &Integer {
    type Output = Integer;

    fn div(self, rhs: &Integer) -> Integer {
        Integer(&self.0 / &rhs.0)
    }
}

impl Rem for Integer {
    type Output = Integer;

    /// Truncating remainder, matching [`Div`].
    fn rem(self, rhs: Integer) -> Integer {
        Integer(self.0 % rhs.0)
    }
}

impl Rem for &Integer {
    type Output = Integer;

    fn rem(self, rhs: &Integer) -> Integer {
        Integer(&self.0 % &rhs.0)
    }
}

impl AddAssign for Integer {
    fn add_assign(&mut self, rhs: Integer) {
        self.0 += rhs.0;
    }
}

impl AddAssign<&Integer> for Integer {
    fn add_assign(&mut self, rhs: &Integer) {
        self.0 += &rhs.0;
    }
}

impl SubAssign for Integer {
    fn sub_assign(&mut self, rhs: Integer) {
        self.0 -= rhs.0;
    }
}

impl SubAssign<&Integer> for Integer {
    fn sub_assign(&mut self, rhs: &Integer) {
        self.0 -= &rhs.0;
    }
}

impl MulAssign for Integer {
    fn mul_assign(&mut self, rhs: Integer) {
        self.0 *= rhs.0;
    }
}

impl MulAssign<&Integer> for Integer {
    fn mul_assign(&mut self, rhs: &Integer) {
        self.0 *= &rhs.0;
    }
}

//! Exact rational numbers, always reduced to lowest terms.

use crate::Integer;
use dashu::base::{Abs, Inverse, UnsignedAbs};
use dashu::integer::{IBig, UBig};
use dashu::rational::RBig;
use num_traits::{One, Zero};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, AddAssign, Div, Mul, MulAssign, Neg, Sub, SubAssign};

/// An exact rational number.
///
/// The representation is canonical: the fraction is reduced and the sign
/// lives on the numerator, so derived equality and ordering behave as the
/// mathematical ones.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Rational(RBig);

impl Rational {
    /// Creates a rational from a numerator and denominator.
    ///
    /// # Panics
    ///
    /// Panics when `denominator` is zero.
    #[must_use]
    pub fn new(numerator: Integer, denominator: Integer) -> Self {
        assert!(!denominator.is_zero(), "denominator must be nonzero");
        let (numerator, denominator) = if denominator.is_negative() {
            (-numerator, denominator.abs())
        } else {
            (numerator, denominator)
        };
        Rational(RBig::from_parts(
            numerator.into_inner(),
            denominator.into_inner().unsigned_abs(),
        ))
    }

    /// Embeds an integer.
    #[must_use]
    pub fn from_integer(value: Integer) -> Self {
        Rational(RBig::from(value.into_inner()))
    }

    /// Creates a rational from a machine word.
    #[must_use]
    pub fn from_i64(value: i64) -> Self {
        Rational(RBig::from(IBig::from(value)))
    }

    /// The (signed) numerator of the reduced fraction.
    #[must_use]
    pub fn numerator(&self) -> Integer {
        Integer::from(self.0.numerator().clone())
    }

    /// The (positive) denominator of the reduced fraction.
    #[must_use]
    pub fn denominator(&self) -> Integer {
        Integer::from(IBig::from(self.0.denominator().clone()))
    }

    /// Whether the value is an integer.
    #[must_use]
    pub fn is_integer(&self) -> bool {
        *self.0.denominator() == UBig::ONE
    }

    /// Multiplicative inverse.
    ///
    /// # Panics
    ///
    /// Panics when the value is zero.
    #[must_use]
    pub fn recip(&self) -> Self {
        Rational(self.0.clone().inv())
    }

    /// Absolute value.
    #[must_use]
    pub fn abs(&self) -> Self {
        Rational(self.0.clone().abs())
    }

    /// Sign of the value as `-1`, `0` or `1`.
    #[must_use]
    pub fn signum(&self) -> i32 {
        match self.0.cmp(&RBig::ZERO) {
            Ordering::Less => -1,
            Ordering::Equal => 0,
            Ordering::Greater => 1,
        }
    }

    /// Whether the value is strictly negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.0 < RBig::ZERO
    }

    /// Raises the value to a non-negative power.
    #[must_use]
    pub fn pow(&self, exp: u32) -> Self {
        Rational(self.0.pow(exp as usize))
    }

    /// Lossy conversion to `f64`.
    #[must_use]
    pub fn to_f64(&self) -> f64 {
        self.numerator().to_f64() / self.denominator().to_f64()
    }
}

impl Hash for Rational {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.numerator().hash(state);
        self.denominator().hash(state);
    }
}

impl Zero for Rational {
    fn zero() -> Self {
        Rational(RBig::ZERO)
    }

    fn is_zero(&self) -> bool {
        self.0 == RBig::ZERO
    }
}

impl One for Rational {
    fn one() -> Self {
        Rational(RBig::ONE)
    }
}

impl Default for Rational {
    fn default() -> Self {
        Rational::zero()
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_integer() {
            write!(f, "{}", self.numerator())
        } else {
            write!(f, "{}/{}", self.numerator(), self.denominator())
        }
    }
}

impl fmt::Debug for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rational({self})")
    }
}

impl From<Integer> for Rational {
    fn from(value: Integer) -> Self {
        Rational::from_integer(value)
    }
}

impl From<i64> for Rational {
    fn from(value: i64) -> Self {
        Rational::from_i64(value)
    }
}

impl From<i32> for Rational {
    fn from(value: i32) -> Self {
        Rational::from_i64(i64::from(value))
    }
}

impl Neg for Rational {
    type Output = Rational;

    fn neg(self) -> Rational {
        Rational(-self.0)
    }
}

impl Neg for &Rational {
    type Output = Rational;

    fn neg(self) -> Rational {
        Rational(-self.0.clone())
    }
}

impl Add for Rational {
    type Output = Rational;

    fn add(self, rhs: Rational) -> Rational {
        Rational(self.0 + rhs.0)
    }
}

impl Add<&Rational> for Rational {
    type Output = Rational;

    fn add(self, rhs: &Rational) -> Rational {
        Rational(self.0 + &rhs.0)
    }
}

impl Add<Rational> for &Rational {
    type Output = Rational;

    fn add(self, rhs: Rational) -> Rational {
        Rational(&self.0 + rhs.0)
    }
}

impl Add for &Rational {
    type Output = Rational;

    fn add(self, rhs: &Rational) -> Rational {
        Rational(&self.0 + &rhs.0)
    }
}

impl Sub for Rational {
    type Output = Rational;

    fn sub(self, rhs: Rational) -> Rational {
        Rational(self.0 - rhs.0)
    }
}

impl Sub<&Rational> for Rational {
    type Output = Rational;

    fn sub(self, rhs: &Rational) -> Rational {
        Rational(self.0 - &rhs.0)
    }
}

impl Sub<Rational> for &Rational {
    type Output = Rational;

    fn sub(self, rhs: Rational) -> Rational {
        Rational(&self.0 - rhs.0)
    }
}

impl Sub for &Rational {
    type Output = Rational;

    fn sub(self, rhs: &Rational) -> Rational {
        Rational(&self.0 - &rhs.0)
    }
}

impl Mul for Rational {
    type Output = Rational;

    fn mul(self, rhs: Rational) -> Rational {
        Rational(self.0 * rhs.0)
    }
}

impl Mul<&Rational> for Rational {
    type Output = Rational;

    fn mul(self, rhs: &Rational) -> Rational {
        Rational(self.0 * &rhs.0)
    }
}

impl Mul<Rational> for &Rational {
    type Output = Rational;

    fn mul(self, rhs: Rational) -> Rational {
        Rational(&self.0 * rhs.0)
    }
}

impl Mul for &Rational {
    type Output = Rational;

    fn mul(self, rhs: &Rational) -> Rational {
        Rational(&self.0 * &rhs.0)
    }
}

impl Div for Rational {
    type Output = Rational;

    /// # Panics
    ///
    /// Panics when `rhs` is zero.
    fn div(self, rhs: Rational) -> Rational {
        Rational(self.0 / rhs.0)
    }
}

impl Div for &Rational {
    type Output = Rational;

    fn div(self, rhs: &Rational) -> Rational {
        Rational(&self.0 / &rhs.0)
    }
}

impl AddAssign for Rational {
    fn add_assign(&mut self, rhs: Rational) {
        self.0 += rhs.0;
    }
}

impl AddAssign<&Rational> for Rational {
    fn add_assign(&mut self, rhs: &Rational) {
        self.0 += &rhs.0;
    }
}

impl SubAssign for Rational {
    fn sub_assign(&mut self, rhs: Rational) {
        self.0 -= rhs.0;
    }
}

impl SubAssign<&Rational> for Rational {
    fn sub_assign(&mut self, rhs: &Rational) {
        self.0 -= &rhs.0;
    }
}

impl MulAssign for Rational {
    fn mul_assign(&mut self, rhs: Rational) {
        self.0 *= rhs.0;
    }
}

impl MulAssign<&Rational> for Rational {
    fn mul_assign(&mut self, rhs: &Rational) {
        self.0 *= &rhs.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn q(n: i64, d: i64) -> Rational {
        Rational::new(Integer::new(n), Integer::new(d))
    }

    #[test]
    fn reduction_is_automatic() {
        assert_eq!(q(4, 6), q(2, 3));
        assert_eq!(q(-4, 6), q(2, -3));
        assert_eq!(q(0, 5), Rational::zero());
        assert_eq!(q(7, 7), Rational::one());
    }

    #[test]
    fn sign_lives_on_the_numerator() {
        let r = q(1, -2);
        assert_eq!(r.numerator(), Integer::new(-1));
        assert_eq!(r.denominator(), Integer::new(2));
        assert!(r.is_negative());
    }

    #[test]
    fn arithmetic() {
        assert_eq!(q(1, 2) + q(1, 3), q(5, 6));
        assert_eq!(q(1, 2) - q(1, 3), q(1, 6));
        assert_eq!(q(2, 3) * q(3, 4), q(1, 2));
        assert_eq!(q(1, 2) / q(3, 2), q(1, 3));
        assert_eq!(-q(1, 2), q(-1, 2));
    }

    #[test]
    fn recip_and_pow() {
        assert_eq!(q(2, 3).recip(), q(3, 2));
        assert_eq!(q(2, 3).pow(3), q(8, 27));
        assert_eq!(q(2, 3).pow(0), Rational::one());
    }

    #[test]
    fn ordering_is_numeric() {
        assert!(q(1, 3) < q(1, 2));
        assert!(q(-1, 2) < q(1, 3));
        assert_eq!(q(2, 4).cmp(&q(1, 2)), Ordering::Equal);
    }

    #[test]
    fn display_formats() {
        assert_eq!(format!("{}", q(3, 1)), "3");
        assert_eq!(format!("{}", q(2, 3)), "2/3");
        assert_eq!(format!("{}", q(-2, 3)), "-2/3");
    }

    #[test]
    fn float_conversion() {
        assert!((q(1, 4).to_f64() - 0.25).abs() < 1e-15);
    }
}

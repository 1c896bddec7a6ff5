//! Algebraic number fields Q(θ) and their elements.
//!
//! A [`NumberField`] is described by the monic minimal polynomial of its
//! generator θ; elements are polynomials in θ of smaller degree. The
//! rationals themselves are the degree-one field with minimal polynomial z,
//! so code that starts over Q and later extends the coefficient field keeps
//! working with the same element type throughout.
//!
//! Arithmetic between an element and a rational-valued element of another
//! field promotes the rational into the non-trivial field. Arithmetic
//! between two non-rational elements of distinct fields is a logic error
//! and panics; callers that mix fields must embed explicitly first.

use crate::rationals::Q;
use crate::traits::{CommutativeRing, EuclideanDomain, Field, IntegralDomain, Ring};
use num_traits::{One, Zero};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Mul, Neg, Sub};
use std::sync::Arc;

/// An algebraic number field Q(θ).
///
/// Elements are represented as polynomials of degree < n in θ,
/// where n is the degree of the minimal polynomial.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct NumberField {
    /// The monic minimal polynomial of θ.
    /// Stored as coefficients [m_0, m_1, ..., m_n] for m_0 + m_1*z + ... + m_n*z^n.
    min_poly: Vec<Q>,
}

impl NumberField {
    /// Creates a number field from a monic minimal polynomial.
    ///
    /// The polynomial must be monic and irreducible over Q.
    ///
    /// # Panics
    ///
    /// Panics if the polynomial has degree < 1 or is not monic.
    #[must_use]
    pub fn new(min_poly: Vec<Q>) -> Self {
        assert!(
            min_poly.len() >= 2,
            "minimal polynomial must have degree >= 1"
        );
        assert!(
            min_poly.last().map_or(false, |c| c.is_one()),
            "minimal polynomial must be monic"
        );
        Self { min_poly }
    }

    /// The rationals, as the degree-one field with minimal polynomial z.
    #[must_use]
    pub fn rationals() -> Arc<Self> {
        Arc::new(Self::new(vec![Q::zero(), Q::one()]))
    }

    /// Creates the field Q(√d) for a square-free integer d.
    #[must_use]
    pub fn quadratic(d: i64) -> Self {
        Self::new(vec![Q::from(-d), Q::zero(), Q::one()])
    }

    /// Returns the degree of the extension over Q.
    #[must_use]
    pub fn degree(&self) -> usize {
        self.min_poly.len() - 1
    }

    /// Returns the minimal polynomial of θ.
    #[must_use]
    pub fn min_poly(&self) -> &[Q] {
        &self.min_poly
    }

    /// Whether this is the trivial extension, i.e. any field of degree one.
    #[must_use]
    pub fn is_rationals(&self) -> bool {
        self.degree() == 1
    }

    /// Reduces a coefficient vector modulo the minimal polynomial.
    ///
    /// Takes coefficients [a_0, a_1, ...] and reduces in place to degree < n,
    /// trimming trailing zeros so the all-zero element becomes the empty vector.
    pub fn reduce(&self, coeffs: &mut Vec<Q>) {
        let n = self.degree();
        while coeffs.len() > n {
            let Some(top) = coeffs.pop() else { break };
            if top.is_zero() {
                continue;
            }
            // top*z^(len-1) ≡ -top*z^(len-1-n)*(m_0 + m_1*z + ... + m_{n-1}*z^{n-1})
            let base = coeffs.len() - n;
            for (k, m) in self.min_poly.iter().take(n).enumerate() {
                coeffs[base + k] = &coeffs[base + k] - &(&top * m);
            }
        }

        while coeffs.last().map_or(false, |c| c.is_zero()) {
            coeffs.pop();
        }
    }
}

fn same_field(a: &Arc<NumberField>, b: &Arc<NumberField>) -> bool {
    Arc::ptr_eq(a, b) || a.min_poly == b.min_poly
}

/// An element of an algebraic number field.
///
/// Equality and hashing treat rational values uniformly across fields: the
/// element 3 of Q(√2) equals the rational 3. Comparing non-rational elements
/// of distinct fields yields `false` rather than panicking.
#[derive(Clone, Debug)]
pub struct AlgebraicNumber {
    /// Coefficients: a_0 + a_1*θ + ... + a_{n-1}*θ^{n-1}, no trailing zeros.
    coeffs: Vec<Q>,
    /// The field this element belongs to.
    field: Arc<NumberField>,
}

impl AlgebraicNumber {
    /// Creates an element of `field` from a coefficient vector, reducing it.
    #[must_use]
    pub fn new(mut coeffs: Vec<Q>, field: Arc<NumberField>) -> Self {
        field.reduce(&mut coeffs);
        Self { coeffs, field }
    }

    /// Creates a rational constant in the trivial field.
    #[must_use]
    pub fn from_rational(r: Q) -> Self {
        Self::new(vec![r], NumberField::rationals())
    }

    /// Creates an integer constant in the trivial field.
    #[must_use]
    pub fn from_i64(n: i64) -> Self {
        Self::from_rational(Q::from(n))
    }

    /// Creates a rational constant viewed inside `field`.
    #[must_use]
    pub fn constant_in(r: Q, field: Arc<NumberField>) -> Self {
        Self::new(vec![r], field)
    }

    /// Creates the generator θ of `field`.
    #[must_use]
    pub fn generator(field: Arc<NumberField>) -> Self {
        Self::new(vec![Q::zero(), Q::one()], field)
    }

    /// Returns the reduced coefficient vector.
    #[must_use]
    pub fn coeffs(&self) -> &[Q] {
        &self.coeffs
    }

    /// Returns the field this element belongs to.
    #[must_use]
    pub fn field(&self) -> &Arc<NumberField> {
        &self.field
    }

    /// Whether the value lies in Q, regardless of the ambient field.
    #[must_use]
    pub fn is_rational(&self) -> bool {
        self.coeffs.len() <= 1
    }

    /// The value as a rational, when it lies in Q.
    #[must_use]
    pub fn to_rational(&self) -> Option<Q> {
        if self.coeffs.len() > 1 {
            return None;
        }
        Some(self.coeffs.first().cloned().unwrap_or_else(Q::zero))
    }

    /// Raises to a non-negative power by repeated squaring.
    #[must_use]
    pub fn pow_u(&self, mut exp: u32) -> Self {
        let mut base = self.clone();
        let mut acc = Self::constant_in(Q::one(), Arc::clone(&self.field));
        while exp > 0 {
            if exp & 1 == 1 {
                acc = &acc * &base;
            }
            base = &base * &base;
            exp >>= 1;
        }
        acc
    }

    /// Raises to a signed power. `None` when the exponent is negative and
    /// the element is zero.
    #[must_use]
    pub fn pow_i(&self, exp: i64) -> Option<Self> {
        let mag = u32::try_from(exp.unsigned_abs()).ok()?;
        let powed = self.pow_u(mag);
        if exp < 0 {
            powed.inv()
        } else {
            Some(powed)
        }
    }

    /// Rewrites both operands over a common field.
    ///
    /// # Panics
    ///
    /// Panics when both operands are non-rational elements of distinct fields.
    fn unified(self, rhs: Self) -> (Self, Self) {
        if same_field(&self.field, &rhs.field) {
            return (self, rhs);
        }
        if let Some(c) = self.to_rational() {
            let promoted = Self::constant_in(c, Arc::clone(&rhs.field));
            return (promoted, rhs);
        }
        if let Some(c) = rhs.to_rational() {
            let field = Arc::clone(&self.field);
            return (self, Self::constant_in(c, field));
        }
        panic!("arithmetic between elements of distinct number fields");
    }
}

impl PartialEq for AlgebraicNumber {
    fn eq(&self, other: &Self) -> bool {
        match (self.to_rational(), other.to_rational()) {
            (Some(a), Some(b)) => a == b,
            (None, None) => {
                same_field(&self.field, &other.field) && self.coeffs == other.coeffs
            }
            _ => false,
        }
    }
}

impl Eq for AlgebraicNumber {}

impl Hash for AlgebraicNumber {
    fn hash<H: Hasher>(&self, state: &mut H) {
        if let Some(r) = self.to_rational() {
            0u8.hash(state);
            r.hash(state);
        } else {
            1u8.hash(state);
            self.field.min_poly.hash(state);
            self.coeffs.hash(state);
        }
    }
}

impl fmt::Display for AlgebraicNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut terms = Vec::new();

        for (i, c) in self.coeffs.iter().enumerate() {
            if c.is_zero() {
                continue;
            }

            let term = match i {
                0 => format!("{c}"),
                1 => {
                    if c.is_one() {
                        "θ".to_string()
                    } else {
                        format!("{c}*θ")
                    }
                }
                _ => {
                    if c.is_one() {
                        format!("θ^{i}")
                    } else {
                        format!("{c}*θ^{i}")
                    }
                }
            };
            terms.push(term);
        }

        if terms.is_empty() {
            write!(f, "0")
        } else {
            write!(f, "{}", terms.join(" + "))
        }
    }
}

impl Zero for AlgebraicNumber {
    fn zero() -> Self {
        Self::new(Vec::new(), NumberField::rationals())
    }

    fn is_zero(&self) -> bool {
        self.coeffs.is_empty()
    }
}

impl One for AlgebraicNumber {
    fn one() -> Self {
        Self::from_rational(Q::one())
    }
}

impl Neg for AlgebraicNumber {
    type Output = AlgebraicNumber;

    fn neg(self) -> AlgebraicNumber {
        AlgebraicNumber {
            coeffs: self.coeffs.into_iter().map(|c| -c).collect(),
            field: self.field,
        }
    }
}

impl Neg for &AlgebraicNumber {
    type Output = AlgebraicNumber;

    fn neg(self) -> AlgebraicNumber {
        -self.clone()
    }
}

impl Add for AlgebraicNumber {
    type Output = AlgebraicNumber;

    fn add(self, rhs: AlgebraicNumber) -> AlgebraicNumber {
        let (a, b) = self.unified(rhs);
        let len = a.coeffs.len().max(b.coeffs.len());
        let mut out = Vec::with_capacity(len);
        for k in 0..len {
            let x = a.coeffs.get(k).cloned().unwrap_or_else(Q::zero);
            let y = b.coeffs.get(k).cloned().unwrap_or_else(Q::zero);
            out.push(x + y);
        }
        AlgebraicNumber::new(out, a.field)
    }
}

impl Add for &AlgebraicNumber {
    type Output = AlgebraicNumber;

    fn add(self, rhs: &AlgebraicNumber) -> AlgebraicNumber {
        self.clone() + rhs.clone()
    }
}

impl Sub for AlgebraicNumber {
    type Output = AlgebraicNumber;

    fn sub(self, rhs: AlgebraicNumber) -> AlgebraicNumber {
        self + (-rhs)
    }
}

impl Sub for &AlgebraicNumber {
    type Output = AlgebraicNumber;

    fn sub(self, rhs: &AlgebraicNumber) -> AlgebraicNumber {
        self.clone() - rhs.clone()
    }
}

impl Mul for AlgebraicNumber {
    type Output = AlgebraicNumber;

    fn mul(self, rhs: AlgebraicNumber) -> AlgebraicNumber {
        let (a, b) = self.unified(rhs);
        if a.coeffs.is_empty() || b.coeffs.is_empty() {
            return AlgebraicNumber::new(Vec::new(), a.field);
        }
        let mut out = vec![Q::zero(); a.coeffs.len() + b.coeffs.len() - 1];
        for (i, x) in a.coeffs.iter().enumerate() {
            if x.is_zero() {
                continue;
            }
            for (j, y) in b.coeffs.iter().enumerate() {
                out[i + j] = &out[i + j] + &(x * y);
            }
        }
        AlgebraicNumber::new(out, a.field)
    }
}

impl Mul for &AlgebraicNumber {
    type Output = AlgebraicNumber;

    fn mul(self, rhs: &AlgebraicNumber) -> AlgebraicNumber {
        self.clone() * rhs.clone()
    }
}

impl Ring for AlgebraicNumber {
    fn mul_by_scalar(&self, n: i64) -> Self {
        let scalar = Q::from(n);
        AlgebraicNumber::new(
            self.coeffs.iter().map(|c| c * &scalar).collect(),
            Arc::clone(&self.field),
        )
    }
}
impl CommutativeRing for AlgebraicNumber {}
impl IntegralDomain for AlgebraicNumber {}

impl EuclideanDomain for AlgebraicNumber {
    fn div_rem(&self, other: &Self) -> (Self, Self) {
        let Some(inv) = other.inv() else {
            panic!("division by zero");
        };
        (self * &inv, Self::zero())
    }

    fn gcd(&self, other: &Self) -> Self {
        if self.is_zero() && other.is_zero() {
            Self::zero()
        } else {
            Self::one()
        }
    }
}

impl Field for AlgebraicNumber {
    fn inv(&self) -> Option<Self> {
        if self.is_zero() {
            return None;
        }
        if let Some(r) = self.to_rational() {
            return r.inv().map(Self::from_rational);
        }

        // Extended Euclid on (min_poly, coeffs) tracking s with
        // s*self ≡ r (mod min_poly) at every step.
        let mut r0 = self.field.min_poly.clone();
        let mut r1 = self.coeffs.clone();
        let mut s0: Vec<Q> = Vec::new();
        let mut s1 = vec![Q::one()];
        while !vp_is_zero(&r1) {
            let (quot, rem) = vp_div_rem(&r0, &r1);
            let s2 = vp_sub(&s0, &vp_mul(&quot, &s1));
            r0 = std::mem::replace(&mut r1, rem);
            s0 = std::mem::replace(&mut s1, s2);
        }

        // The gcd with an irreducible minimal polynomial is a nonzero
        // constant for any nonzero element.
        if r0.len() != 1 {
            return None;
        }
        let lead = r0[0].inv()?;
        Some(Self::new(
            vp_scale(&s0, &lead),
            Arc::clone(&self.field),
        ))
    }
}

fn vp_trimmed(mut v: Vec<Q>) -> Vec<Q> {
    while v.last().map_or(false, |c| c.is_zero()) {
        v.pop();
    }
    v
}

fn vp_is_zero(v: &[Q]) -> bool {
    v.iter().all(Zero::is_zero)
}

fn vp_mul(a: &[Q], b: &[Q]) -> Vec<Q> {
    if a.is_empty() || b.is_empty() {
        return Vec::new();
    }
    let mut out = vec![Q::zero(); a.len() + b.len() - 1];
    for (i, x) in a.iter().enumerate() {
        if x.is_zero() {
            continue;
        }
        for (j, y) in b.iter().enumerate() {
            out[i + j] = &out[i + j] + &(x * y);
        }
    }
    vp_trimmed(out)
}

fn vp_sub(a: &[Q], b: &[Q]) -> Vec<Q> {
    let len = a.len().max(b.len());
    let mut out = Vec::with_capacity(len);
    for k in 0..len {
        let x = a.get(k).cloned().unwrap_or_else(Q::zero);
        let y = b.get(k).cloned().unwrap_or_else(Q::zero);
        out.push(x - y);
    }
    vp_trimmed(out)
}

fn vp_scale(a: &[Q], c: &Q) -> Vec<Q> {
    vp_trimmed(a.iter().map(|x| x * c).collect())
}

fn vp_div_rem(num: &[Q], den: &[Q]) -> (Vec<Q>, Vec<Q>) {
    let Some(lead_inv) = den.last().and_then(Field::inv) else {
        panic!("division by a zero polynomial");
    };
    let den_deg = den.len() - 1;
    let mut rem = num.to_vec();
    if rem.len() <= den_deg {
        return (Vec::new(), vp_trimmed(rem));
    }
    let mut quot = vec![Q::zero(); rem.len() - den_deg];
    while rem.len() > den_deg {
        let Some(top) = rem.pop() else { break };
        if top.is_zero() {
            continue;
        }
        let q = top * lead_inv.clone();
        let pos = rem.len() - den_deg;
        for (k, c) in den.iter().take(den_deg).enumerate() {
            rem[pos + k] = &rem[pos + k] - &(&q * c);
        }
        quot[pos] = q;
    }
    (vp_trimmed(quot), vp_trimmed(rem))
}

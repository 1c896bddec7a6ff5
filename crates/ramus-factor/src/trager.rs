//! Factorization over algebraic number fields by Trager's method.
//!
//! A squarefree polynomial f over K = Q(&theta;) is pushed down to Q
//! through its norm, the resultant in z of the minimal polynomial m(z)
//! and f with &theta; replaced by z and the variable shifted by s z. For
//! a shift that makes the norm squarefree, the rational factors of the
//! norm pull back to the irreducible factors of f by gcds over K.
//!
//! The same norm machinery turns a tower K(&alpha;) into a simple
//! extension Q(&gamma;) with &gamma; = &alpha; + s &theta;, which is how
//! every field built here stays a plain quotient Q[z]/(m).

use std::sync::Arc;

use num_traits::{One, Zero};
use ramus_poly::algorithms::gcd::{make_monic, poly_gcd};
use ramus_poly::algorithms::resultant::resultant;
use ramus_poly::algorithms::squarefree::{is_squarefree, squarefree_decomposition};
use ramus_poly::Poly;
use ramus_rings::{AlgebraicNumber, NumberField, Ring, Q};

use crate::zassenhaus::{factor_q, Factorization, IrreducibleFactor};

/// Largest generator shift tried before giving up on a squarefree norm.
const MAX_SHIFT: i64 = 64;

/// A simple extension containing a base field and a root of a defining
/// polynomial.
#[derive(Clone, Debug)]
pub struct FieldExtension {
    /// The extension as a fresh simple field Q(&gamma;).
    pub field: Arc<NumberField>,
    /// The image of the base generator &theta; inside the new field.
    pub generator_image: AlgebraicNumber,
    /// A root of the defining polynomial inside the new field.
    pub root: AlgebraicNumber,
}

/// Builds K(&alpha;) as a simple extension of Q, for a root &alpha; of
/// `defining`, a monic polynomial irreducible over K.
///
/// Degree-one defining polynomials stay in the base field. Otherwise the
/// new field is Q(&gamma;) for &gamma; = &alpha; + s &theta; with the
/// smallest shift s whose norm is squarefree; `generator_image` and
/// `root` express &theta; and &alpha; in terms of &gamma;.
///
/// # Panics
///
/// Panics when no shift within the bound yields a squarefree norm, which
/// for an irreducible defining polynomial would require the bound to be
/// exhausted by the finitely many bad shifts.
pub fn extend_field(
    base: &Arc<NumberField>,
    defining: &Poly<AlgebraicNumber>,
) -> FieldExtension {
    assert!(
        defining.leading().map_or(false, One::is_one),
        "defining polynomial must be monic"
    );

    if defining.degree() == 1 {
        return FieldExtension {
            field: Arc::clone(base),
            generator_image: AlgebraicNumber::generator(Arc::clone(base)),
            root: -defining.coeff(0),
        };
    }

    if base.is_rationals() {
        let coeffs: Vec<Q> = defining
            .coeffs()
            .iter()
            .map(|c| c.to_rational().expect("rational coefficients over the rational base"))
            .collect();
        let field = Arc::new(NumberField::new(coeffs));
        return FieldExtension {
            generator_image: AlgebraicNumber::constant_in(Q::zero(), Arc::clone(&field)),
            root: AlgebraicNumber::generator(Arc::clone(&field)),
            field,
        };
    }

    for s in 1..=MAX_SHIFT {
        let norm = shifted_norm(defining, base, s);
        if !is_squarefree(&norm) {
            continue;
        }
        let field = Arc::new(NumberField::new(make_monic(&norm).coeffs().to_vec()));
        let gamma = AlgebraicNumber::generator(Arc::clone(&field));
        let generator_image = recover_generator(defining, base, &gamma, s);
        let root = &gamma - &generator_image.mul_by_scalar(s);
        return FieldExtension {
            field,
            generator_image,
            root,
        };
    }
    panic!("no squarefree norm within the shift bound");
}

/// Factors a polynomial with coefficients in `field` into monic
/// irreducibles over that field times a unit.
///
/// # Panics
///
/// Panics when no shift within the bound yields a squarefree norm for
/// some squarefree part of the input.
pub fn factor_algebraic(
    f: &Poly<AlgebraicNumber>,
    field: &Arc<NumberField>,
) -> Factorization<AlgebraicNumber> {
    if f.is_zero() {
        return Factorization {
            unit: AlgebraicNumber::zero(),
            factors: Vec::new(),
        };
    }
    if f.degree() == 0 {
        return Factorization {
            unit: f.coeff(0),
            factors: Vec::new(),
        };
    }

    if field.is_rationals() {
        let rational = f.map(|c| {
            c.to_rational()
                .expect("rational coefficients over the rational field")
        });
        let result = factor_q(&rational);
        return Factorization {
            unit: AlgebraicNumber::from_rational(result.unit),
            factors: result
                .factors
                .into_iter()
                .map(|part| IrreducibleFactor {
                    factor: part.factor.map(|q| AlgebraicNumber::from_rational(q.clone())),
                    multiplicity: part.multiplicity,
                })
                .collect(),
        };
    }

    let sf = squarefree_decomposition(f);
    let mut factors = Vec::new();
    for part in &sf.factors {
        for factor in factor_squarefree_over_field(&part.factor, field) {
            factors.push(IrreducibleFactor {
                factor,
                multiplicity: part.multiplicity,
            });
        }
    }
    Factorization {
        unit: sf.unit,
        factors,
    }
}

/// Trager's reduction for one monic squarefree polynomial over the field.
fn factor_squarefree_over_field(
    g: &Poly<AlgebraicNumber>,
    field: &Arc<NumberField>,
) -> Vec<Poly<AlgebraicNumber>> {
    if g.degree() <= 1 {
        return vec![g.clone()];
    }

    let mut chosen = None;
    for s in 0..=MAX_SHIFT {
        let norm = shifted_norm(g, field, s);
        if is_squarefree(&norm) {
            chosen = Some((s, norm));
            break;
        }
    }
    let Some((s, norm)) = chosen else {
        panic!("no squarefree norm within the shift bound");
    };

    let norm_factors = factor_q(&make_monic(&norm));
    if norm_factors.factors.len() == 1 {
        return vec![g.clone()];
    }

    let shift = AlgebraicNumber::generator(Arc::clone(field)).mul_by_scalar(s);
    let mut out = Vec::new();
    for part in &norm_factors.factors {
        let lifted = compose_shift(&part.factor, &shift, field);
        let factor = poly_gcd(g, &lifted);
        if factor.degree() > 0 {
            out.push(factor);
        }
    }
    out
}

/// The norm of `f` under the substitution x -> x - s z: the resultant in
/// z of the minimal polynomial of the field and f with &theta; written as
/// z. Computed over Q[x] by treating the bivariate polynomial as a vector
/// of x-polynomials indexed by the z-exponent.
fn shifted_norm(f: &Poly<AlgebraicNumber>, base: &NumberField, s: i64) -> Poly<Q> {
    let mut acc: Vec<Poly<Q>> = Vec::new();
    let mut shift_pow: Vec<Poly<Q>> = vec![Poly::new(vec![Q::one()])];

    for (j, c) in f.coeffs().iter().enumerate() {
        if j > 0 {
            shift_pow = zvec_mul_shift(&shift_pow, s);
        }
        for (zi, q) in c.coeffs().iter().enumerate() {
            if q.is_zero() {
                continue;
            }
            for (zk, xp) in shift_pow.iter().enumerate() {
                let idx = zi + zk;
                if acc.len() <= idx {
                    acc.resize(idx + 1, Poly::new(Vec::new()));
                }
                acc[idx] = acc[idx].add(&xp.scale(q));
            }
        }
    }
    while acc.last().map_or(false, |entry| entry.is_zero()) {
        acc.pop();
    }

    let m: Vec<Poly<Q>> = base
        .min_poly()
        .iter()
        .map(|q| Poly::new(vec![q.clone()]))
        .collect();
    resultant(&m, &acc)
}

/// Multiplies a z-indexed vector of x-polynomials by (x - s z).
fn zvec_mul_shift(v: &[Poly<Q>], s: i64) -> Vec<Poly<Q>> {
    let x = Poly::new(vec![Q::zero(), Q::one()]);
    let neg_s = Q::from(-s);
    let mut out = vec![Poly::new(Vec::new()); v.len() + 1];
    for (i, entry) in v.iter().enumerate() {
        out[i] = out[i].add(&entry.mul(&x));
        out[i + 1] = out[i + 1].add(&entry.scale(&neg_s));
    }
    out
}

/// Expresses the base generator &theta; inside the extension: it is the
/// unique common root of the minimal polynomial of the base and the
/// defining polynomial evaluated at &gamma; - s z.
fn recover_generator(
    defining: &Poly<AlgebraicNumber>,
    base: &NumberField,
    gamma: &AlgebraicNumber,
    s: i64,
) -> AlgebraicNumber {
    let ext = gamma.field();
    let m_lifted: Poly<AlgebraicNumber> = Poly::new(
        base.min_poly()
            .iter()
            .map(|q| AlgebraicNumber::constant_in(q.clone(), Arc::clone(ext)))
            .collect(),
    );

    // B(z) = sum_j c_j(z) (gamma - s z)^j with c_j read inside the
    // extension
    let lin = Poly::new(vec![
        gamma.clone(),
        AlgebraicNumber::constant_in(Q::from(-s), Arc::clone(ext)),
    ]);
    let mut b = Poly::new(Vec::new());
    let mut pow = Poly::new(vec![AlgebraicNumber::constant_in(Q::one(), Arc::clone(ext))]);
    for (j, c) in defining.coeffs().iter().enumerate() {
        if j > 0 {
            pow = pow.mul(&lin);
        }
        let c_in_z = Poly::new(
            c.coeffs()
                .iter()
                .map(|q| AlgebraicNumber::constant_in(q.clone(), Arc::clone(ext)))
                .collect(),
        );
        b = b.add(&c_in_z.mul(&pow));
    }

    let g = poly_gcd(&m_lifted, &b);
    assert_eq!(
        g.degree(),
        1,
        "minimal polynomial shares exactly one root with the shifted defining polynomial"
    );
    -g.coeff(0)
}

/// Evaluates a rational polynomial at w + shift over the field, by Horner
/// on polynomials.
fn compose_shift(
    p: &Poly<Q>,
    shift: &AlgebraicNumber,
    field: &Arc<NumberField>,
) -> Poly<AlgebraicNumber> {
    let lin = Poly::new(vec![
        shift.clone(),
        AlgebraicNumber::constant_in(Q::one(), Arc::clone(field)),
    ]);
    let mut acc = Poly::new(Vec::new());
    for c in p.coeffs().iter().rev() {
        let constant = Poly::new(vec![AlgebraicNumber::constant_in(
            c.clone(),
            Arc::clone(field),
        )]);
        acc = acc.mul(&lin).add(&constant);
    }
    acc
}

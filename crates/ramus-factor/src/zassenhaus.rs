//! Univariate factorization over the rationals.
//!
//! The Zassenhaus pipeline: squarefree decomposition, reduction modulo a
//! prime that keeps the polynomial squarefree, distinct- and equal-degree
//! splitting there, Hensel lifting to a precision controlled by the
//! Mignotte-style coefficient bound, and recombination of lifted factors
//! by trial division over the integers.

use num_traits::Zero;
use ramus_integers::Integer;
use ramus_poly::algorithms::gcd::{make_monic, primitive_part};
use ramus_poly::algorithms::squarefree::squarefree_decomposition;
use ramus_poly::Poly;
use ramus_rings::{Field, Q, Z};
use rayon::prelude::*;

use crate::hensel::{hensel_lift, to_symmetric_rep, zm_inv, zm_mul, zm_reduce};
use crate::modp::{zp_deriv, zp_divmod, zp_gcd, zp_monic, zp_normalize, zp_pow_mod, zp_sub};

/// Primes tried for the modular stage, smallest first.
const PRIMES: [u64; 9] = [
    1009,
    2003,
    10007,
    100003,
    1000003,
    10000019,
    100000007,
    1000000007,
    2147483647,
];

/// A monic irreducible factor together with its multiplicity.
#[derive(Debug, Clone)]
pub struct IrreducibleFactor<F: Field> {
    /// The monic irreducible factor.
    pub factor: Poly<F>,
    /// Its multiplicity in the factored polynomial.
    pub multiplicity: u32,
}

/// A complete factorization: a unit times monic irreducible factors.
#[derive(Debug, Clone)]
pub struct Factorization<F: Field> {
    /// The leading coefficient of the factored polynomial.
    pub unit: F,
    /// Monic irreducible factors with multiplicities.
    pub factors: Vec<IrreducibleFactor<F>>,
}

impl<F: Field> Factorization<F> {
    /// Multiplies the factorization back together.
    pub fn to_polynomial(&self) -> Poly<F> {
        let mut result = Poly::new(vec![self.unit.clone()]);
        for part in &self.factors {
            result = result.mul(&part.factor.pow(part.multiplicity));
        }
        result
    }
}

/// Factors a rational polynomial into monic irreducibles over Q.
///
/// The zero polynomial factors as the unit zero with no factors; constants
/// factor as themselves.
pub fn factor_q(f: &Poly<Q>) -> Factorization<Q> {
    if f.is_zero() {
        return Factorization {
            unit: Q::zero(),
            factors: Vec::new(),
        };
    }
    if f.degree() == 0 {
        return Factorization {
            unit: f.coeff(0),
            factors: Vec::new(),
        };
    }

    let sf = squarefree_decomposition(f);
    let mut factors = Vec::new();
    for part in &sf.factors {
        for factor in factor_squarefree_monic(&part.factor) {
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

/// Factors a batch of rational polynomials in parallel.
pub fn factor_q_batch(polys: &[Poly<Q>]) -> Vec<Factorization<Q>> {
    polys.par_iter().map(factor_q).collect()
}

/// Factors a monic squarefree rational polynomial into monic irreducibles.
fn factor_squarefree_monic(g: &Poly<Q>) -> Vec<Poly<Q>> {
    if g.degree() <= 1 {
        return vec![g.clone()];
    }
    let primitive = clear_denominators(g);
    factor_primitive_squarefree(&primitive)
        .iter()
        .map(|zf| make_monic(&to_q_poly(zf)))
        .collect()
}

/// Factors a primitive squarefree integer polynomial with positive leading
/// coefficient into primitive irreducible integer polynomials.
fn factor_primitive_squarefree(f: &Poly<Z>) -> Vec<Poly<Z>> {
    if f.degree() <= 1 {
        return vec![f.clone()];
    }

    let p = choose_prime(f);
    let mod_factors = modular_factors(f, p);
    if mod_factors.len() == 1 {
        return vec![f.clone()];
    }

    let bound = coefficient_bound(f);
    let precision = lift_precision(p, &bound);
    let modulus = Integer::new(p as i64).pow(precision);

    // Lift the monic image of f; the true leading coefficient is put back
    // during recombination.
    let lead = f.leading().expect("nonzero after degree check");
    let lead_inv = zm_inv(&lead.0, &modulus);
    let monic_image = zm_reduce(&f.map(|c| Z(&c.0 * &lead_inv)), &modulus);

    let lifted = hensel_lift(&monic_image, &mod_factors, &Integer::new(p as i64), precision);
    recombine(f, &lifted.factors, &lifted.modulus)
}

/// Picks a prime that keeps the leading coefficient a unit and the
/// polynomial squarefree modulo p.
///
/// # Panics
///
/// Panics when every prime in the ladder fails, which would require the
/// discriminant to be divisible by all of them.
fn choose_prime(f: &Poly<Z>) -> u64 {
    let lead = f.leading().expect("nonzero polynomial").clone();
    for &p in &PRIMES {
        if (&lead.0 % &Integer::new(p as i64)).is_zero() {
            continue;
        }
        let reduced = zp_normalize(f, p);
        if zp_gcd(&reduced, &zp_deriv(&reduced, p), p).degree() == 0 {
            return p;
        }
    }
    panic!("no suitable prime for modular factorization");
}

/// Monic irreducible factors of `f` modulo p, for squarefree reduction.
fn modular_factors(f: &Poly<Z>, p: u64) -> Vec<Poly<Z>> {
    let monic = zp_monic(&zp_normalize(f, p), p);
    let mut factors = Vec::new();
    for (degree, part) in distinct_degree_split(&monic, p) {
        if part.degree() == degree {
            factors.push(part);
        } else {
            factors.extend(equal_degree_split(&part, degree, p));
        }
    }
    factors
}

/// Distinct-degree splitting: returns (d, product of all irreducible
/// factors of degree d) for each degree that occurs.
fn distinct_degree_split(f: &Poly<Z>, p: u64) -> Vec<(usize, Poly<Z>)> {
    let n = f.degree();
    let mut result = Vec::new();
    let mut h = f.clone();
    let x = Poly::new(vec![Z::new(0), Z::new(1)]);
    let mut x_pow = zp_pow_mod(&x, p, f, p);

    for d in 1..=n / 2 {
        if h.degree() < 2 * d {
            break;
        }
        if d > 1 {
            x_pow = zp_pow_mod(&x_pow, p, &h, p);
        }
        let g = zp_gcd(&h, &zp_sub(&x_pow, &x, p), p);
        if g.degree() > 0 {
            h = zp_divmod(&h, &g, p).0;
            x_pow = zp_divmod(&x_pow, &h, p).1;
            result.push((d, g));
        }
    }
    if h.degree() > 0 {
        result.push((h.degree(), h));
    }
    result
}

/// Equal-degree splitting by Cantor-Zassenhaus with a deterministic
/// linear congruential generator for the random polynomials.
fn equal_degree_split(f: &Poly<Z>, d: usize, p: u64) -> Vec<Poly<Z>> {
    let n = f.degree();
    if n == d {
        return vec![zp_monic(f, p)];
    }

    let target = n / d;
    let mut factors = vec![f.clone()];
    let mut state = 42u64;

    while factors.len() < target {
        let mut next = Vec::new();
        for factor in &factors {
            if factor.degree() == d {
                next.push(factor.clone());
                continue;
            }

            state = state.wrapping_mul(6364136223846793005).wrapping_add(1);
            let a = random_residue_poly(factor.degree(), p, state);
            if a.degree() == 0 {
                next.push(factor.clone());
                continue;
            }

            let a_pow = zp_pow_mod(&a, (p - 1) / 2, factor, p);
            let shifted = zp_sub(&a_pow, &Poly::new(vec![Z::new(1)]), p);
            let g = zp_gcd(factor, &shifted, p);

            if g.degree() > 0 && g.degree() < factor.degree() {
                next.push(zp_divmod(factor, &g, p).0);
                next.push(g);
            } else {
                next.push(factor.clone());
            }
        }
        factors = next;
    }

    factors.iter().map(|g| zp_monic(g, p)).collect()
}

fn random_residue_poly(len: usize, p: u64, seed: u64) -> Poly<Z> {
    let mut state = seed;
    let mut coeffs = Vec::with_capacity(len);
    for _ in 0..len {
        state = state.wrapping_mul(6364136223846793005).wrapping_add(1);
        coeffs.push(Z::new((state % p) as i64));
    }
    Poly::new(coeffs)
}

/// Bound on the coefficients of any factor of `f` scaled by the leading
/// coefficient: 2^deg(f) times the largest coefficient magnitude times
/// the leading coefficient magnitude.
fn coefficient_bound(f: &Poly<Z>) -> Integer {
    let mut max_coeff = Integer::new(0);
    for c in f.coeffs() {
        let abs = c.0.abs();
        if abs > max_coeff {
            max_coeff = abs;
        }
    }
    let lead = f.leading().map_or_else(|| Integer::new(1), |c| c.0.abs());
    Integer::new(2).pow(f.degree() as u32) * max_coeff * lead
}

/// Smallest k with p^k greater than twice the bound, so that symmetric
/// representatives modulo p^k recover true factor coefficients.
fn lift_precision(p: u64, bound: &Integer) -> u32 {
    let prime = Integer::new(p as i64);
    let target = bound * &Integer::new(2);
    let mut modulus = prime.clone();
    let mut k = 1u32;
    while modulus <= target {
        modulus = &modulus * &prime;
        k += 1;
    }
    k
}

/// Recombines lifted modular factors into true integer factors by trying
/// subsets of increasing size and trial-dividing the result into what is
/// left of `f`.
fn recombine(f: &Poly<Z>, lifted: &[Poly<Z>], modulus: &Integer) -> Vec<Poly<Z>> {
    let mut pool: Vec<Poly<Z>> = lifted.to_vec();
    let mut remaining = f.clone();
    let mut found = Vec::new();
    let half = modulus / &Integer::new(2);

    let mut size = 1;
    while 2 * size <= pool.len() && remaining.degree() > 0 {
        let mut indices: Vec<usize> = (0..size).collect();
        let mut removed = false;
        loop {
            if let Some((factor, rest)) = try_subset(&remaining, &pool, &indices, modulus, &half) {
                for &i in indices.iter().rev() {
                    pool.remove(i);
                }
                found.push(factor);
                remaining = rest;
                removed = true;
                break;
            }
            if !next_combination(&mut indices, pool.len()) {
                break;
            }
        }
        if !removed {
            size += 1;
        }
    }

    if remaining.degree() > 0 {
        found.push(remaining);
    }
    found
}

/// Tests one subset: multiplies the chosen lifted factors with the
/// leading coefficient, takes symmetric representatives and the primitive
/// part, and trial-divides. Returns the factor and the cofactor on
/// success.
fn try_subset(
    remaining: &Poly<Z>,
    pool: &[Poly<Z>],
    indices: &[usize],
    modulus: &Integer,
    half: &Integer,
) -> Option<(Poly<Z>, Poly<Z>)> {
    let lead = remaining.leading()?.clone();
    let mut product = zm_reduce(&Poly::new(vec![lead]), modulus);
    for &i in indices {
        product = zm_mul(&product, &pool[i], modulus);
    }

    let candidate = positive_lead(primitive_part(&to_symmetric_rep(&product, modulus, half)));
    if candidate.degree() == 0 || candidate.degree() >= remaining.degree() {
        return None;
    }

    let quotient = z_div_exact(remaining, &candidate)?;
    Some((candidate, quotient))
}

/// Exact division over Z; `None` when any step fails to divide.
fn z_div_exact(a: &Poly<Z>, b: &Poly<Z>) -> Option<Poly<Z>> {
    let lead = b.leading()?;
    let den_deg = b.degree();
    let mut rem: Vec<Z> = a.coeffs().to_vec();
    if rem.len() <= den_deg {
        return None;
    }

    let mut quot = vec![Z::new(0); rem.len() - den_deg];
    while rem.len() > den_deg {
        let Some(top) = rem.pop() else { break };
        if top.is_zero() {
            continue;
        }
        let q = &top.0 / &lead.0;
        if (&q * &lead.0) != top.0 {
            return None;
        }
        let pos = rem.len() - den_deg;
        for (k, c) in b.coeffs().iter().take(den_deg).enumerate() {
            rem[pos + k] = Z(&rem[pos + k].0 - &(&q * &c.0));
        }
        quot[pos] = Z(q);
    }

    if rem.iter().all(Zero::is_zero) {
        Some(Poly::new(quot))
    } else {
        None
    }
}

fn positive_lead(f: Poly<Z>) -> Poly<Z> {
    if f.leading().map_or(false, |c| c.0.is_negative()) {
        f.neg()
    } else {
        f
    }
}

/// Advances `indices` to the next k-combination of {0, .., n-1} in
/// lexicographic order; returns false when exhausted.
fn next_combination(indices: &mut [usize], n: usize) -> bool {
    let k = indices.len();
    let mut i = k;
    while i > 0 {
        i -= 1;
        if indices[i] != i + n - k {
            indices[i] += 1;
            for j in i + 1..k {
                indices[j] = indices[j - 1] + 1;
            }
            return true;
        }
    }
    false
}

/// Scales a rational polynomial to a primitive integer polynomial with
/// positive leading coefficient.
fn clear_denominators(f: &Poly<Q>) -> Poly<Z> {
    let mut lcm = Integer::new(1);
    for c in f.coeffs() {
        lcm = lcm.lcm(&c.denominator());
    }
    let scaled = Poly::new(
        f.coeffs()
            .iter()
            .map(|c| Z(c.numerator() * (&lcm / &c.denominator())))
            .collect(),
    );
    positive_lead(primitive_part(&scaled))
}

fn to_q_poly(f: &Poly<Z>) -> Poly<Q> {
    f.map(|c| Q::from(c.0.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_traits::One;

    fn poly(coeffs: &[i64]) -> Poly<Q> {
        Poly::new(coeffs.iter().map(|&n| Q::from(n)).collect())
    }

    #[test]
    fn test_factor_split_cubic() {
        // z^3 - z = z (z - 1)(z + 1)
        let f = poly(&[0, -1, 0, 1]);
        let result = factor_q(&f);

        assert_eq!(result.factors.len(), 3);
        assert!(result
            .factors
            .iter()
            .all(|part| part.factor.degree() == 1 && part.multiplicity == 1));
        assert_eq!(result.unit, Q::one());
        assert_eq!(result.to_polynomial(), f);
    }

    #[test]
    fn test_factor_irreducible_quartic() {
        // minimal polynomial of sqrt(2) + sqrt(3); it splits modulo every
        // prime but must be recombined to the full quartic
        let f = poly(&[1, 0, -10, 0, 1]);
        let result = factor_q(&f);

        assert_eq!(result.factors.len(), 1);
        assert_eq!(result.factors[0].factor, f);
        assert_eq!(result.factors[0].multiplicity, 1);
    }

    #[test]
    fn test_factor_cyclotomic_product() {
        // z^6 - 1 = (z - 1)(z + 1)(z^2 + z + 1)(z^2 - z + 1)
        let f = poly(&[-1, 0, 0, 0, 0, 0, 1]);
        let result = factor_q(&f);

        assert_eq!(result.factors.len(), 4);
        let quadratics = result
            .factors
            .iter()
            .filter(|part| part.factor.degree() == 2)
            .count();
        assert_eq!(quadratics, 2);
        assert_eq!(result.to_polynomial(), f);
    }

    #[test]
    fn test_factor_multiplicities() {
        // (z - 1)^2 (z + 2)
        let f = poly(&[2, -3, 0, 1]);
        let result = factor_q(&f);

        assert_eq!(result.factors.len(), 2);
        let double = result
            .factors
            .iter()
            .find(|part| part.factor == poly(&[-1, 1]))
            .unwrap();
        assert_eq!(double.multiplicity, 2);
        let single = result
            .factors
            .iter()
            .find(|part| part.factor == poly(&[2, 1]))
            .unwrap();
        assert_eq!(single.multiplicity, 1);
        assert_eq!(result.to_polynomial(), f);
    }

    #[test]
    fn test_factor_unit_and_denominators() {
        // 6z^2 - 6 = 6 (z - 1)(z + 1)
        let f = poly(&[-6, 0, 6]);
        let result = factor_q(&f);
        assert_eq!(result.unit, Q::from(6));
        assert_eq!(result.factors.len(), 2);
        assert_eq!(result.to_polynomial(), f);

        // z^2 - 1/4 = (z - 1/2)(z + 1/2)
        let g = Poly::new(vec![Q::new(-1, 4), Q::zero(), Q::one()]);
        let result = factor_q(&g);
        assert_eq!(result.factors.len(), 2);
        assert!(result.factors.iter().any(|part| {
            part.factor == Poly::new(vec![Q::new(-1, 2), Q::one()])
        }));
        assert_eq!(result.to_polynomial(), g);
    }

    #[test]
    fn test_factor_non_monic() {
        // 2z^2 + 3z + 1 = 2 (z + 1/2)(z + 1)
        let f = poly(&[1, 3, 2]);
        let result = factor_q(&f);

        assert_eq!(result.unit, Q::from(2));
        assert_eq!(result.factors.len(), 2);
        assert_eq!(result.to_polynomial(), f);
    }

    #[test]
    fn test_factor_constants_and_zero() {
        let zero = factor_q(&poly(&[]));
        assert_eq!(zero.unit, Q::zero());
        assert!(zero.factors.is_empty());

        let constant = factor_q(&poly(&[7]));
        assert_eq!(constant.unit, Q::from(7));
        assert!(constant.factors.is_empty());
    }

    #[test]
    fn test_factor_batch() {
        let inputs = [poly(&[0, -1, 0, 1]), poly(&[1, 0, -10, 0, 1])];
        let results = factor_q_batch(&inputs);

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].factors.len(), 3);
        assert_eq!(results[1].factors.len(), 1);
    }

    #[test]
    fn test_next_combination() {
        let mut indices = vec![0, 1];
        let mut seen = vec![indices.clone()];
        while next_combination(&mut indices, 4) {
            seen.push(indices.clone());
        }
        assert_eq!(
            seen,
            vec![
                vec![0, 1],
                vec![0, 2],
                vec![0, 3],
                vec![1, 2],
                vec![1, 3],
                vec![2, 3]
            ]
        );
    }

    #[test]
    fn test_z_div_exact() {
        let a = Poly::new(vec![Z::new(-2), Z::new(1), Z::new(1)]);
        let b = Poly::new(vec![Z::new(2), Z::new(1)]);
        assert_eq!(
            z_div_exact(&a, &b),
            Some(Poly::new(vec![Z::new(-1), Z::new(1)]))
        );
        assert_eq!(z_div_exact(&b, &a), None);

        let c = Poly::new(vec![Z::new(1), Z::new(1)]);
        assert_eq!(z_div_exact(&a, &c), None);
    }
}

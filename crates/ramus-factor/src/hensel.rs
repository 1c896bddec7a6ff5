//! Hensel lifting of modular factorizations.
//!
//! Given `f` congruent to a product of pairwise coprime factors modulo a
//! prime p, the lift climbs to p^k by quadratic steps. The Bezout
//! cofactors of each factor pair are lifted alongside the factors, so
//! every step works entirely modulo the current power of p; the only
//! polynomial inversion happens once, modulo the prime itself.

use num_traits::Zero;
use ramus_integers::Integer;
use ramus_poly::Poly;
use ramus_rings::Z;

use crate::modp::{mod_inv, zp_divmod, zp_mul, zp_scale, zp_sub};

/// Result of a Hensel lift.
#[derive(Clone, Debug)]
pub struct HenselLiftResult {
    /// Lifted factors in symmetric representation modulo `modulus`.
    pub factors: Vec<Poly<Z>>,
    /// The prime the input factorization was given at.
    pub prime: Integer,
    /// The final modulus p^k.
    pub modulus: Integer,
    /// Number of quadratic lifting steps performed.
    pub steps: usize,
}

/// Lifts a factorization of `f` modulo `p` to a factorization modulo
/// `p^target_k`.
///
/// The factors must be pairwise coprime modulo p and their product must
/// be congruent to `f` modulo p. When `f` is not monic its leading
/// coefficient rides along in the leftmost factor, which is the layout
/// the recursive splitting preserves.
pub fn hensel_lift(
    f: &Poly<Z>,
    factors_mod_p: &[Poly<Z>],
    p: &Integer,
    target_k: u32,
) -> HenselLiftResult {
    if factors_mod_p.is_empty() {
        return HenselLiftResult {
            factors: Vec::new(),
            prime: p.clone(),
            modulus: p.clone(),
            steps: 0,
        };
    }

    let modulus = p.pow(target_k);
    if factors_mod_p.len() == 1 {
        return HenselLiftResult {
            factors: vec![zm_reduce(f, &modulus)],
            prime: p.clone(),
            modulus,
            steps: 0,
        };
    }

    let mut steps = 0;
    let lifted = lift_split(f, factors_mod_p, p, target_k, &mut steps);

    let half = &modulus / &Integer::new(2);
    let factors = lifted
        .iter()
        .map(|g| to_symmetric_rep(g, &modulus, &half))
        .collect();

    HenselLiftResult {
        factors,
        prime: p.clone(),
        modulus,
        steps,
    }
}

/// Splits the factor list in two, lifts the pair of block products to the
/// target power, then recurses into each block.
fn lift_split(
    f: &Poly<Z>,
    factors: &[Poly<Z>],
    p: &Integer,
    target_k: u32,
    steps: &mut usize,
) -> Vec<Poly<Z>> {
    if factors.len() == 1 {
        return vec![zm_reduce(f, &p.pow(target_k))];
    }

    let p_word = p.to_i64().expect("prime fits a machine word") as u64;
    let mid = factors.len() / 2;
    let mut g = product_mod(&factors[..mid], p);
    let mut h = product_mod(&factors[mid..], p);
    let (mut s, mut t) = bezout_mod_p(&g, &h, p_word);

    let mut k = 1u32;
    while k < target_k {
        let next_k = (k * 2).min(target_k);
        let m = p.pow(next_k);
        let (g2, h2, s2, t2) = lift_pair(f, &g, &h, &s, &t, &m);
        g = g2;
        h = h2;
        s = s2;
        t = t2;
        k = next_k;
        *steps += 1;
    }

    let mut out = lift_split(&g, &factors[..mid], p, target_k, steps);
    out.extend(lift_split(&h, &factors[mid..], p, target_k, steps));
    out
}

/// One quadratic step: from f = g h and s g + t h = 1 modulo some power
/// of p, produces the same data modulo `m`, the square of that power.
/// `h` must be monic; it stays monic through the step.
fn lift_pair(
    f: &Poly<Z>,
    g: &Poly<Z>,
    h: &Poly<Z>,
    s: &Poly<Z>,
    t: &Poly<Z>,
    m: &Integer,
) -> (Poly<Z>, Poly<Z>, Poly<Z>, Poly<Z>) {
    let e = zm_sub(f, &zm_mul(g, h, m), m);
    let (q, r) = zm_divmod(&zm_mul(s, &e, m), h, m);
    let g_new = zm_add(&zm_add(g, &zm_mul(t, &e, m), m), &zm_mul(&q, g, m), m);
    let h_new = zm_add(h, &r, m);

    let b = zm_sub(
        &zm_add(&zm_mul(s, &g_new, m), &zm_mul(t, &h_new, m), m),
        &Poly::new(vec![Z::new(1)]),
        m,
    );
    let (c, d) = zm_divmod(&zm_mul(s, &b, m), &h_new, m);
    let s_new = zm_sub(s, &d, m);
    let t_new = zm_sub(&zm_sub(t, &zm_mul(t, &b, m), m), &zm_mul(&c, &g_new, m), m);

    (g_new, h_new, s_new, t_new)
}

/// Extended Euclid in (Z/p)[z]: returns (s, t) with s g + t h = 1.
///
/// # Panics
///
/// Panics when `g` and `h` are not coprime modulo p.
fn bezout_mod_p(g: &Poly<Z>, h: &Poly<Z>, p: u64) -> (Poly<Z>, Poly<Z>) {
    let mut r0 = g.clone();
    let mut r1 = h.clone();
    let mut s0 = Poly::new(vec![Z::new(1)]);
    let mut s1 = Poly::new(Vec::new());
    let mut t0 = Poly::new(Vec::new());
    let mut t1 = Poly::new(vec![Z::new(1)]);

    while !r1.is_zero() {
        let (q, r2) = zp_divmod(&r0, &r1, p);
        let s2 = zp_sub(&s0, &zp_mul(&q, &s1, p), p);
        let t2 = zp_sub(&t0, &zp_mul(&q, &t1, p), p);
        r0 = std::mem::replace(&mut r1, r2);
        s0 = std::mem::replace(&mut s1, s2);
        t0 = std::mem::replace(&mut t1, t2);
    }

    assert!(
        !r0.is_zero() && r0.degree() == 0,
        "factor blocks must be coprime modulo p"
    );
    let c = r0.coeff(0).0.to_i64().expect("reduced residue fits a machine word") as u64;
    let inv = mod_inv(c % p, p);
    (zp_scale(&s0, inv, p), zp_scale(&t0, inv, p))
}

fn product_mod(factors: &[Poly<Z>], m: &Integer) -> Poly<Z> {
    let mut result = Poly::new(vec![Z::new(1)]);
    for f in factors {
        result = zm_mul(&result, f, m);
    }
    result
}

pub(crate) fn zm_reduce(f: &Poly<Z>, m: &Integer) -> Poly<Z> {
    Poly::new(
        f.coeffs()
            .iter()
            .map(|c| {
                let r = &c.0 % m;
                if r.is_negative() {
                    Z(r + m)
                } else {
                    Z(r)
                }
            })
            .collect(),
    )
}

fn zm_add(a: &Poly<Z>, b: &Poly<Z>, m: &Integer) -> Poly<Z> {
    let len = a.coeffs().len().max(b.coeffs().len());
    let mut out = Vec::with_capacity(len);
    for i in 0..len {
        let v = a.coeff(i).0 + b.coeff(i).0;
        let r = &v % m;
        out.push(if r.is_negative() { Z(r + m) } else { Z(r) });
    }
    Poly::new(out)
}

fn zm_sub(a: &Poly<Z>, b: &Poly<Z>, m: &Integer) -> Poly<Z> {
    let len = a.coeffs().len().max(b.coeffs().len());
    let mut out = Vec::with_capacity(len);
    for i in 0..len {
        let v = a.coeff(i).0 - b.coeff(i).0;
        let r = &v % m;
        out.push(if r.is_negative() { Z(r + m) } else { Z(r) });
    }
    Poly::new(out)
}

pub(crate) fn zm_mul(a: &Poly<Z>, b: &Poly<Z>, m: &Integer) -> Poly<Z> {
    if a.is_zero() || b.is_zero() {
        return Poly::new(Vec::new());
    }
    let mut out = vec![Integer::new(0); a.coeffs().len() + b.coeffs().len() - 1];
    for (i, x) in a.coeffs().iter().enumerate() {
        if x.is_zero() {
            continue;
        }
        for (j, y) in b.coeffs().iter().enumerate() {
            out[i + j] = &out[i + j] + &(&x.0 * &y.0);
        }
    }
    Poly::new(
        out.into_iter()
            .map(|v| {
                let r = &v % m;
                if r.is_negative() {
                    Z(r + m)
                } else {
                    Z(r)
                }
            })
            .collect(),
    )
}

/// Division by a polynomial whose leading coefficient is a unit modulo
/// `m`; in practice the divisor is monic.
fn zm_divmod(a: &Poly<Z>, b: &Poly<Z>, m: &Integer) -> (Poly<Z>, Poly<Z>) {
    let Some(lead) = b.leading() else {
        panic!("division by zero polynomial");
    };
    let lead_inv = zm_inv(&lead.0, m);
    let den_deg = b.degree();

    let mut rem: Vec<Z> = zm_reduce(a, m).coeffs().to_vec();
    if rem.len() <= den_deg {
        return (Poly::new(Vec::new()), Poly::new(rem));
    }

    let mut quot = vec![Z::new(0); rem.len() - den_deg];
    while rem.len() > den_deg {
        let Some(top) = rem.pop() else { break };
        if top.is_zero() {
            continue;
        }
        let q = &(&top.0 * &lead_inv) % m;
        let pos = rem.len() - den_deg;
        for (k, c) in b.coeffs().iter().take(den_deg).enumerate() {
            let v = &rem[pos + k].0 - &(&q * &c.0);
            let r = &v % m;
            rem[pos + k] = if r.is_negative() { Z(r + m) } else { Z(r) };
        }
        quot[pos] = Z(q);
    }

    (Poly::new(quot), Poly::new(rem))
}

/// Inverse of `a` modulo `m` by the extended Euclidean algorithm; `a`
/// must be a unit modulo `m`.
pub(crate) fn zm_inv(a: &Integer, m: &Integer) -> Integer {
    let mut old_r = a.clone();
    let mut r = m.clone();
    let mut old_s = Integer::new(1);
    let mut s = Integer::new(0);

    while !r.is_zero() {
        let q = &old_r / &r;
        let new_r = &old_r - &(&q * &r);
        old_r = std::mem::replace(&mut r, new_r);
        let new_s = &old_s - &(&q * &s);
        old_s = std::mem::replace(&mut s, new_s);
    }

    let inv = &old_s % m;
    if inv.is_negative() {
        inv + m
    } else {
        inv
    }
}

/// Maps coefficients from [0, m) into (-m/2, m/2].
pub(crate) fn to_symmetric_rep(f: &Poly<Z>, modulus: &Integer, half: &Integer) -> Poly<Z> {
    Poly::new(
        f.coeffs()
            .iter()
            .map(|c| {
                let mut r = &c.0 % modulus;
                if r.is_negative() {
                    r = r + modulus;
                }
                if r > *half {
                    Z(r - modulus)
                } else {
                    Z(r)
                }
            })
            .collect(),
    )
}

//! Polynomial arithmetic in (Z/p)[z] for a word-sized prime p.
//!
//! Polynomials are represented as `Poly<Z>` with coefficients kept in
//! [0, p). Inputs with arbitrary integer coefficients should be passed
//! through [`zp_normalize`] once; after that every operation here keeps
//! coefficients reduced.

use num_traits::Zero;
use ramus_integers::Integer;
use ramus_poly::Poly;
use ramus_rings::Z;

fn residue(c: &Z, p: u64) -> u64 {
    let v = c.0.to_i64().expect("modular coefficient out of machine range");
    v.rem_euclid(p as i64) as u64
}

fn to_residues(f: &Poly<Z>, p: u64) -> Vec<u64> {
    f.coeffs().iter().map(|c| residue(c, p)).collect()
}

fn from_residues(v: Vec<u64>) -> Poly<Z> {
    Poly::new(v.into_iter().map(|r| Z::new(r as i64)).collect())
}

fn add_p(a: u64, b: u64, p: u64) -> u64 {
    (a + b) % p
}

fn sub_p(a: u64, b: u64, p: u64) -> u64 {
    (a + p - b) % p
}

fn mul_p(a: u64, b: u64, p: u64) -> u64 {
    (a as u128 * b as u128 % p as u128) as u64
}

/// Computes the inverse of `a` modulo `m` by the extended Euclidean
/// algorithm. `a` must be a unit modulo `m`.
pub fn mod_inv(a: u64, m: u64) -> u64 {
    let mut old_r = a as i128;
    let mut r = m as i128;
    let mut old_s: i128 = 1;
    let mut s: i128 = 0;

    while r != 0 {
        let q = old_r / r;
        let new_r = old_r - q * r;
        old_r = r;
        r = new_r;
        let new_s = old_s - q * s;
        old_s = s;
        s = new_s;
    }

    ((old_s % m as i128 + m as i128) % m as i128) as u64
}

/// Reduces every coefficient into [0, p). Accepts coefficients of any
/// size.
pub fn zp_normalize(f: &Poly<Z>, p: u64) -> Poly<Z> {
    let modulus = Integer::new(p as i64);
    Poly::new(
        f.coeffs()
            .iter()
            .map(|c| {
                let r = &c.0 % &modulus;
                if r.is_negative() {
                    Z(r + &modulus)
                } else {
                    Z(r)
                }
            })
            .collect(),
    )
}

pub fn zp_add(a: &Poly<Z>, b: &Poly<Z>, p: u64) -> Poly<Z> {
    let av = to_residues(a, p);
    let bv = to_residues(b, p);
    let mut out = vec![0u64; av.len().max(bv.len())];
    for (i, &c) in av.iter().enumerate() {
        out[i] = c;
    }
    for (i, &c) in bv.iter().enumerate() {
        out[i] = add_p(out[i], c, p);
    }
    from_residues(out)
}

pub fn zp_sub(a: &Poly<Z>, b: &Poly<Z>, p: u64) -> Poly<Z> {
    let av = to_residues(a, p);
    let bv = to_residues(b, p);
    let mut out = vec![0u64; av.len().max(bv.len())];
    for (i, &c) in av.iter().enumerate() {
        out[i] = c;
    }
    for (i, &c) in bv.iter().enumerate() {
        out[i] = sub_p(out[i], c, p);
    }
    from_residues(out)
}

pub fn zp_mul(a: &Poly<Z>, b: &Poly<Z>, p: u64) -> Poly<Z> {
    let av = to_residues(a, p);
    let bv = to_residues(b, p);
    if av.is_empty() || bv.is_empty() {
        return Poly::new(Vec::new());
    }
    let mut out = vec![0u64; av.len() + bv.len() - 1];
    for (i, &x) in av.iter().enumerate() {
        if x == 0 {
            continue;
        }
        for (j, &y) in bv.iter().enumerate() {
            out[i + j] = add_p(out[i + j], mul_p(x, y, p), p);
        }
    }
    from_residues(out)
}

pub fn zp_scale(f: &Poly<Z>, c: u64, p: u64) -> Poly<Z> {
    let out = to_residues(f, p)
        .into_iter()
        .map(|x| mul_p(x, c % p, p))
        .collect();
    from_residues(out)
}

pub fn zp_deriv(f: &Poly<Z>, p: u64) -> Poly<Z> {
    let coeffs = to_residues(f, p);
    if coeffs.len() <= 1 {
        return Poly::new(Vec::new());
    }
    let out = coeffs
        .iter()
        .enumerate()
        .skip(1)
        .map(|(i, &c)| mul_p(c, i as u64 % p, p))
        .collect();
    from_residues(out)
}

/// Euclidean division in (Z/p)[z].
///
/// # Panics
///
/// Panics when `b` vanishes modulo p.
pub fn zp_divmod(a: &Poly<Z>, b: &Poly<Z>, p: u64) -> (Poly<Z>, Poly<Z>) {
    let den = to_residues(b, p);
    let lead = match den.last() {
        Some(&l) if l != 0 => l,
        _ => panic!("division by zero polynomial"),
    };
    let lead_inv = mod_inv(lead, p);
    let den_deg = den.len() - 1;

    let mut rem = to_residues(a, p);
    if rem.len() <= den_deg {
        return (Poly::new(Vec::new()), from_residues(rem));
    }

    let mut quot = vec![0u64; rem.len() - den_deg];
    while rem.len() > den_deg {
        let Some(top) = rem.pop() else { break };
        if top == 0 {
            continue;
        }
        let q = mul_p(top, lead_inv, p);
        let pos = rem.len() - den_deg;
        for (k, &c) in den.iter().take(den_deg).enumerate() {
            rem[pos + k] = sub_p(rem[pos + k], mul_p(q, c, p), p);
        }
        quot[pos] = q;
    }

    (from_residues(quot), from_residues(rem))
}

/// Scales `f` so its leading coefficient becomes one.
pub fn zp_monic(f: &Poly<Z>, p: u64) -> Poly<Z> {
    match f.leading() {
        Some(lead) => {
            let inv = mod_inv(residue(lead, p), p);
            zp_scale(f, inv, p)
        }
        None => f.clone(),
    }
}

/// Monic greatest common divisor in (Z/p)[z]. Accepts coefficients of
/// any size.
pub fn zp_gcd(a: &Poly<Z>, b: &Poly<Z>, p: u64) -> Poly<Z> {
    let mut f = zp_normalize(a, p);
    let mut g = zp_normalize(b, p);
    while !g.is_zero() {
        let r = zp_divmod(&f, &g, p).1;
        f = g;
        g = r;
    }
    zp_monic(&f, p)
}

/// Computes `a^exp` modulo the polynomial `f` by square and multiply.
pub fn zp_pow_mod(a: &Poly<Z>, exp: u64, f: &Poly<Z>, p: u64) -> Poly<Z> {
    let mut result = Poly::new(vec![Z::new(1)]);
    let mut base = zp_divmod(a, f, p).1;
    let mut e = exp;

    while e > 0 {
        if e & 1 == 1 {
            result = zp_divmod(&zp_mul(&result, &base, p), f, p).1;
        }
        base = zp_divmod(&zp_mul(&base, &base, p), f, p).1;
        e >>= 1;
    }

    result
}

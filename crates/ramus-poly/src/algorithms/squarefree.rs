//! Squarefree decomposition via Yun's algorithm.
//!
//! A polynomial is squarefree if it has no repeated factors. The
//! decomposition writes f = unit * f₁ * f₂² * f₃³ * ... with each fᵢ
//! monic, squarefree, and coprime to the others. Yun's algorithm works
//! over any field of characteristic 0.

use ramus_rings::Field;

use crate::algorithms::gcd::{make_monic, poly_div_rem, poly_gcd};
use crate::dense::Poly;

/// A factor with its multiplicity in the squarefree decomposition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SquarefreeFactor<F: Field> {
    /// The squarefree monic factor.
    pub factor: Poly<F>,
    /// The multiplicity of this factor.
    pub multiplicity: u32,
}

/// Result of squarefree decomposition.
#[derive(Clone, Debug)]
pub struct SquarefreeDecomposition<F: Field> {
    /// The leading coefficient of the input.
    pub unit: F,
    /// The squarefree factors with multiplicities.
    pub factors: Vec<SquarefreeFactor<F>>,
}

impl<F: Field> SquarefreeDecomposition<F> {
    /// Reconstructs the original polynomial from the decomposition.
    #[must_use]
    pub fn to_polynomial(&self) -> Poly<F> {
        let mut result = Poly::constant(self.unit.clone());
        for sf in &self.factors {
            result = result.mul(&sf.factor.pow(sf.multiplicity));
        }
        result
    }

    /// Returns true when all multiplicities are one.
    #[must_use]
    pub fn is_squarefree(&self) -> bool {
        self.factors.iter().all(|f| f.multiplicity == 1)
    }
}

/// Computes the squarefree decomposition of a polynomial using Yun's
/// algorithm, returning f = unit * f₁ * f₂² * f₃³ * ...
pub fn squarefree_decomposition<F: Field>(f: &Poly<F>) -> SquarefreeDecomposition<F> {
    if f.degree() == 0 {
        return SquarefreeDecomposition {
            unit: f.coeff(0),
            factors: Vec::new(),
        };
    }

    let unit = f.leading().cloned().unwrap_or_else(F::zero);
    let f_monic = make_monic(f);
    let f_prime = f_monic.derivative();

    let g = poly_gcd(&f_monic, &f_prime);
    if g.degree() == 0 {
        return SquarefreeDecomposition {
            unit,
            factors: vec![SquarefreeFactor {
                factor: f_monic,
                multiplicity: 1,
            }],
        };
    }

    let (mut a, _) = poly_div_rem(&f_monic, &g);
    let (mut b, _) = poly_div_rem(&f_prime, &g);

    let mut factors = Vec::new();
    let mut multiplicity = 1u32;

    loop {
        // c = b - a'
        let c = b.sub(&a.derivative());

        if c.is_zero() {
            if a.degree() > 0 {
                factors.push(SquarefreeFactor {
                    factor: a,
                    multiplicity,
                });
            }
            break;
        }

        let d = poly_gcd(&a, &c);
        if d.degree() > 0 {
            factors.push(SquarefreeFactor {
                factor: d.clone(),
                multiplicity,
            });
        }

        let (new_a, _) = poly_div_rem(&a, &d);
        let (new_b, _) = poly_div_rem(&c, &d);
        if new_a.degree() == 0 {
            break;
        }

        a = new_a;
        b = new_b;
        multiplicity += 1;
    }

    SquarefreeDecomposition { unit, factors }
}

/// Checks whether gcd(f, f') is constant.
pub fn is_squarefree<F: Field>(f: &Poly<F>) -> bool {
    if f.degree() == 0 {
        return true;
    }
    poly_gcd(f, &f.derivative()).degree() == 0
}

//! Top-level Newton-Puiseux expansion of plane algebraic curves.
//!
//! `puiseux` parametrizes every branch of F(x, y) = 0 above x = 0 as
//! x = c * t^e, y = series(t). The expansion recurses over Newton polygon
//! edges: each edge direction (q, m) and each irreducible factor of its
//! characteristic polynomial yields a substitution that raises the y-order
//! of the residual, until the residual is in simple-root position and power
//! series refinement takes over. Centers at finite nonzero y are reached
//! through the exceptional edge; centers at irrational y stay exact through
//! a primitive-element field extension, one branch per conjugacy class.

use std::sync::Arc;

use num_traits::Zero;
use ramus_factor::{extend_field, factor_algebraic};
use ramus_poly::{BiPoly, Poly};
use ramus_rings::{AlgebraicNumber, NumberField};
use rayon::prelude::*;

use crate::branch::{ambient_field, embed, PuiseuxBranch, RawBranch};
use crate::cache::PuiseuxContext;
use crate::error::{PuiseuxError, Result};
use crate::monicize::almost_monicize;
use crate::polygon::{newton_data, newton_data_exceptional, EdgeData};
use crate::transform::{edge_scalars, transform};

/// Expands the curve `f` into its Puiseux branches above x = 0.
///
/// `order` bounds the refinement degree of the regular tail; the singular
/// part of every branch is emitted whole regardless. Branches at a pole of
/// the curve carry negative series exponents.
///
/// # Errors
///
/// `InvalidPolynomial` when `f` is zero, free of y, or has a repeated
/// factor in y.
pub fn puiseux(f: &BiPoly<AlgebraicNumber>, order: usize) -> Result<Vec<PuiseuxBranch>> {
    puiseux_with(&PuiseuxContext::default(), f, order)
}

/// [`puiseux`] against a caller-held context, memoizing whole expansions.
///
/// # Errors
///
/// As for [`puiseux`].
pub fn puiseux_with(
    ctx: &PuiseuxContext,
    f: &BiPoly<AlgebraicNumber>,
    order: usize,
) -> Result<Vec<PuiseuxBranch>> {
    let (reduced, _) = f.strip_x_content();
    let monic = almost_monicize(&reduced)?;
    let branches = expanded(ctx, &monic.poly, order)?;
    Ok(branches.iter().map(|b| b.rescaled(monic.shift)).collect())
}

/// The unramified branches of `f`: integer-power parametrizations x = c * t,
/// expanded at the minimal order that distinguishes branches.
///
/// # Errors
///
/// As for [`puiseux`].
pub fn puiseux_rational(f: &BiPoly<AlgebraicNumber>) -> Result<Vec<PuiseuxBranch>> {
    Ok(puiseux(f, 0)?
        .into_iter()
        .filter(|b| b.ramification == 1)
        .collect())
}

/// Expands a family of curves in parallel against one shared cache.
#[must_use]
pub fn puiseux_batch(
    curves: &[BiPoly<AlgebraicNumber>],
    order: usize,
) -> Vec<Result<Vec<PuiseuxBranch>>> {
    let ctx = PuiseuxContext::default();
    curves
        .par_iter()
        .map(|f| puiseux_with(&ctx, f, order))
        .collect()
}

/// Cache-aware expansion of a monicized polynomial: ordinary and exceptional
/// parts, refined to `order` and deduplicated.
fn expanded(
    ctx: &PuiseuxContext,
    h: &BiPoly<AlgebraicNumber>,
    order: usize,
) -> Result<Arc<[PuiseuxBranch]>> {
    let key = (h.clone(), order);
    if let Some(hit) = ctx.lookup(&key) {
        return Ok(hit);
    }

    let mut raw = expand(ctx, h, 0)?;
    raw.extend(exceptional(ctx, h)?);

    let mut branches: Vec<PuiseuxBranch> = Vec::with_capacity(raw.len());
    for seed in &raw {
        let branch = seed.finalize(order)?;
        if !branches.contains(&branch) {
            branches.push(branch);
        }
    }
    let shared: Arc<[PuiseuxBranch]> = Arc::from(branches);
    ctx.store(key, Arc::clone(&shared));
    Ok(shared)
}

/// Branches through finite nonzero centers at x = 0: the multiple roots of
/// H(0, z). Simple roots are regular points of the curve and contribute
/// nothing.
fn exceptional(ctx: &PuiseuxContext, h: &BiPoly<AlgebraicNumber>) -> Result<Vec<RawBranch>> {
    let edge = newton_data_exceptional(h)?;
    let field = ambient_field(h);
    let mut out = Vec::new();
    for irr in factor_algebraic(&edge.phi, &field).factors {
        if irr.multiplicity < 2 || is_zero_root(&irr.factor) {
            continue;
        }
        out.extend(factor_step(ctx, h, &edge, &irr.factor, &field, 0)?);
    }
    Ok(out)
}

/// Recursive expansion over the Newton polygon of `h`.
///
/// Entry invariant below the top level: H(0, 0) = 0. A residual in
/// simple-root position becomes a leaf; otherwise every (edge, factor)
/// pair spawns an independent subproblem.
fn expand(
    ctx: &PuiseuxContext,
    h: &BiPoly<AlgebraicNumber>,
    depth: usize,
) -> Result<Vec<RawBranch>> {
    if depth > ctx.max_depth {
        return Err(PuiseuxError::InvalidPolynomial(
            "expansion exceeded its depth budget; the input is not squarefree in y".into(),
        ));
    }
    let restriction = h.eval_x0();
    if !restriction.is_zero() && restriction.ord() == 1 {
        return Ok(vec![RawBranch::leaf(h.clone())]);
    }
    if h.deg_x() == 0 && restriction.ord() >= 2 {
        return Err(PuiseuxError::InvalidPolynomial(
            "input has a repeated factor in y".into(),
        ));
    }

    let field = ambient_field(h);
    let mut work: Vec<(EdgeData<AlgebraicNumber>, Poly<AlgebraicNumber>)> = Vec::new();
    for edge in newton_data(h)? {
        for irr in factor_algebraic(&edge.phi, &field).factors {
            work.push((edge.clone(), irr.factor));
        }
    }
    let nested = work
        .par_iter()
        .map(|(edge, psi)| factor_step(ctx, h, edge, psi, &field, depth))
        .collect::<Result<Vec<_>>>()?;
    Ok(nested.into_iter().flatten().collect())
}

/// One expansion step for an irreducible factor `psi` of an edge
/// characteristic polynomial: move the root to the origin, expand the
/// transformed residual, and compose the substitution into every branch
/// that comes back.
fn factor_step(
    ctx: &PuiseuxContext,
    h: &BiPoly<AlgebraicNumber>,
    edge: &EdgeData<AlgebraicNumber>,
    psi: &Poly<AlgebraicNumber>,
    field: &Arc<NumberField>,
    depth: usize,
) -> Result<Vec<RawBranch>> {
    let ext = extend_field(field, psi);
    let lifted;
    let current = if psi.degree() >= 2 {
        lifted = h.map(|c| embed(c, &ext.generator_image));
        &lifted
    } else {
        h
    };
    let (lam, mu) = edge_scalars(edge.q, edge.m, &ext.root);
    let child = transform(current, edge, &ext.root)?;
    let subs = expand(ctx, &child, depth + 1)?;
    Ok(subs
        .iter()
        .map(|seed| seed.compose(edge.q, edge.m, &lam, &mu, &ext.generator_image))
        .collect())
}

/// Whether a monic irreducible factor is z itself, the root at the origin.
fn is_zero_root(psi: &Poly<AlgebraicNumber>) -> bool {
    psi.degree() == 1 && psi.coeff(0).is_zero()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ramus_poly::LaurentPoly;
    use ramus_rings::Q;

    fn bp(terms: &[(usize, usize, i64)]) -> BiPoly<AlgebraicNumber> {
        BiPoly::from_terms(
            terms
                .iter()
                .map(|&(i, j, c)| (i, j, AlgebraicNumber::from_i64(c)))
                .collect(),
        )
    }

    fn an(n: i64, d: i64) -> AlgebraicNumber {
        AlgebraicNumber::from_rational(Q::new(n, d))
    }

    fn expect_branch(
        ramification: usize,
        x_scale: AlgebraicNumber,
        series: &[(i64, AlgebraicNumber)],
    ) -> PuiseuxBranch {
        PuiseuxBranch {
            residual: bp(&[(1, 0, 1)]),
            x_scale,
            ramification,
            series: LaurentPoly::new(series.to_vec()),
        }
    }

    #[test]
    fn test_tangent_pair_with_shared_singular_part() {
        // (x^2 - x + 1) y^2 - 2 x^2 y + x^4: one place of ramification two,
        // singular part t^4 + t^5 over x = t^2.
        let f = bp(&[(2, 0, 1), (2, 1, -1), (2, 2, 1), (1, 2, -2), (0, 4, 1)]);
        let bs = puiseux(&f, 0).unwrap();
        assert_eq!(bs.len(), 1);
        assert_eq!(
            bs[0],
            expect_branch(2, an(1, 1), &[(4, an(1, 1)), (5, an(1, 1))])
        );
    }

    #[test]
    fn test_order_refines_the_slot_tail() {
        let f = bp(&[(2, 0, 1), (2, 1, -1), (2, 2, 1), (1, 2, -2), (0, 4, 1)]);
        let bs = puiseux(&f, 2).unwrap();
        assert_eq!(bs.len(), 1);
        assert_eq!(
            bs[0].series,
            LaurentPoly::new(vec![
                (4, an(1, 1)),
                (5, an(1, 1)),
                (6, an(1, 1)),
                (7, an(1, 2)),
            ])
        );
    }

    #[test]
    fn test_cubic_with_unramified_and_ramified_branches() {
        // -x^7 + 2 x^3 y + y^3 splits into a smooth sheet and a pair
        // parametrized over x = -t^2/2.
        let f = bp(&[(0, 7, -1), (1, 3, 2), (3, 0, 1)]);
        let bs = puiseux(&f, 0).unwrap();
        assert_eq!(bs.len(), 2);
        assert!(bs.contains(&expect_branch(1, an(1, 1), &[])));
        assert!(bs.contains(&expect_branch(2, an(-1, 2), &[(3, an(-1, 2))])));
    }

    #[test]
    fn test_nodal_cubic_splits_in_two() {
        // y^2 + x^3 - x^2 has two transverse sheets at the origin.
        let f = bp(&[(2, 0, 1), (0, 3, 1), (0, 2, -1)]);
        let bs = puiseux(&f, 0).unwrap();
        assert_eq!(bs.len(), 2);
        assert!(bs.contains(&expect_branch(1, an(1, 1), &[(1, an(1, 1))])));
        assert!(bs.contains(&expect_branch(1, an(1, 1), &[(1, an(-1, 1))])));
    }

    #[test]
    fn test_all_centers_regular_yields_no_branches() {
        // y^3 - (x^3 + y)^2 + 1 meets x = 0 in simple points only.
        let f = bp(&[(3, 0, 1), (2, 0, -1), (1, 3, -2), (0, 6, -1), (0, 0, 1)]);
        assert_eq!(puiseux(&f, 0).unwrap(), vec![]);
    }

    #[test]
    fn test_cusp_is_one_ramified_branch() {
        let f = bp(&[(3, 0, 1), (0, 5, -1)]);
        let bs = puiseux(&f, 0).unwrap();
        assert_eq!(bs.len(), 1);
        assert_eq!(bs[0], expect_branch(3, an(1, 1), &[(5, an(1, 1))]));
    }

    #[test]
    fn test_exceptional_center_separates_tangent_sheets() {
        // (y - 1 - 2x - x^2)(y - 1 - 2x - x^7): both sheets pass through
        // y = 1, agree to first order, and separate at t^2.
        let f = bp(&[
            (2, 0, 1),
            (1, 0, -2),
            (1, 1, -4),
            (1, 2, -1),
            (1, 7, -1),
            (0, 0, 1),
            (0, 1, 4),
            (0, 2, 5),
            (0, 3, 2),
            (0, 7, 1),
            (0, 8, 2),
            (0, 9, 1),
        ]);
        let bs = puiseux(&f, 0).unwrap();
        assert_eq!(bs.len(), 2);
        assert!(bs.contains(&expect_branch(1, an(1, 1), &[(0, an(1, 1)), (1, an(2, 1))])));
        assert!(bs.contains(&expect_branch(
            1,
            an(1, 1),
            &[(0, an(1, 1)), (1, an(2, 1)), (2, an(1, 1))]
        )));
    }

    #[test]
    fn test_sextic_with_exact_quadratic_coefficient() {
        // (y^2 - 2x^3)(y^2 - 2x^2)(y^3 - 2x): the slope-one pair keeps
        // sqrt(2) exact as the generator of Q[z]/(z^2 - 2).
        let f = bp(&[
            (7, 0, 1),
            (4, 1, -2),
            (5, 2, -2),
            (2, 3, 4),
            (5, 3, -2),
            (2, 4, 4),
            (3, 5, 4),
            (0, 6, -8),
        ]);
        let bs = puiseux(&f, 0).unwrap();
        let sqrt2 = AlgebraicNumber::generator(Arc::new(NumberField::quadratic(2)));
        assert_eq!(bs.len(), 3);
        assert!(bs.contains(&expect_branch(1, an(1, 1), &[(1, sqrt2)])));
        assert!(bs.contains(&expect_branch(2, an(1, 2), &[(3, an(1, 2))])));
        assert!(bs.contains(&expect_branch(3, an(1, 2), &[(1, an(1, 1))])));
    }

    #[test]
    fn test_irrational_center_expands_in_its_extension() {
        // (y^2 - 2)^2 - x is singular over the center y = sqrt(2).
        let f = bp(&[(4, 0, 1), (2, 0, -4), (0, 0, 4), (0, 1, -1)]);
        let bs = puiseux(&f, 0).unwrap();
        let sqrt2 = AlgebraicNumber::generator(Arc::new(NumberField::quadratic(2)));
        assert_eq!(bs.len(), 1);
        assert_eq!(
            bs[0],
            expect_branch(2, an(8, 1), &[(0, sqrt2), (1, an(1, 1))])
        );
    }

    #[test]
    fn test_conjugate_pair_as_single_scaled_branch() {
        // y^2 + x: both square roots of -x ride one branch over x = -t^2.
        let f = bp(&[(2, 0, 1), (0, 1, 1)]);
        let bs = puiseux(&f, 0).unwrap();
        assert_eq!(bs.len(), 1);
        assert_eq!(bs[0], expect_branch(2, an(-1, 1), &[(1, an(1, 1))]));
    }

    #[test]
    fn test_monicize_undo_emits_pole() {
        // x^6 y^2 - x: y^2 = x^-5, a branch with a pole at the origin.
        let f = bp(&[(2, 6, 1), (0, 1, -1)]);
        let bs = puiseux(&f, 0).unwrap();
        assert_eq!(bs.len(), 1);
        assert_eq!(bs[0], expect_branch(2, an(1, 1), &[(-5, an(1, 1))]));
    }

    #[test]
    fn test_line_pair_through_origin() {
        // y (y - x): the component y = 0 is itself a branch.
        let f = bp(&[(2, 0, 1), (1, 1, -1)]);
        let bs = puiseux(&f, 1).unwrap();
        assert_eq!(bs.len(), 2);
        assert!(bs.contains(&expect_branch(1, an(1, 1), &[])));
        assert!(bs.contains(&expect_branch(1, an(1, 1), &[(1, an(1, 1))])));
    }

    #[test]
    fn test_rejects_zero_and_y_free_input() {
        assert!(matches!(
            puiseux(&BiPoly::<AlgebraicNumber>::new(vec![]), 0),
            Err(PuiseuxError::InvalidPolynomial(_))
        ));
        assert!(matches!(
            puiseux(&bp(&[(0, 2, 1), (0, 0, 1)]), 0),
            Err(PuiseuxError::InvalidPolynomial(_))
        ));
    }

    #[test]
    fn test_rejects_repeated_factor() {
        // (y - x)^2 collapses to an x-independent residual of order two.
        let f = bp(&[(2, 0, 1), (1, 1, -2), (0, 2, 1)]);
        assert!(matches!(
            puiseux(&f, 0),
            Err(PuiseuxError::InvalidPolynomial(_))
        ));
    }

    #[test]
    fn test_rational_subset_drops_ramified_branches() {
        let cusp = bp(&[(3, 0, 1), (0, 5, -1)]);
        assert_eq!(puiseux_rational(&cusp).unwrap(), vec![]);

        let node = bp(&[(2, 0, 1), (0, 3, 1), (0, 2, -1)]);
        assert_eq!(puiseux_rational(&node).unwrap().len(), 2);
    }

    #[test]
    fn test_context_memoizes_whole_expansions() {
        let ctx = PuiseuxContext::default();
        let f = bp(&[(2, 0, 1), (0, 3, 1), (0, 2, -1)]);
        let first = puiseux_with(&ctx, &f, 0).unwrap();
        let second = puiseux_with(&ctx, &f, 0).unwrap();
        assert_eq!(first, second);
        assert_eq!(ctx.len(), 1);
    }

    #[test]
    fn test_batch_matches_individual_calls() {
        let node = bp(&[(2, 0, 1), (0, 3, 1), (0, 2, -1)]);
        let cusp = bp(&[(3, 0, 1), (0, 5, -1)]);
        let batch = puiseux_batch(&[node.clone(), cusp.clone()], 0);
        assert_eq!(batch.len(), 2);
        assert_eq!(batch[0].as_ref().unwrap(), &puiseux(&node, 0).unwrap());
        assert_eq!(batch[1].as_ref().unwrap(), &puiseux(&cusp, 0).unwrap());
    }

    #[test]
    fn test_branch_residuals_vanish_at_the_origin() {
        // Every emitted residual is in simple-root position.
        let f = bp(&[(0, 7, -1), (1, 3, 2), (3, 0, 1)]);
        for b in puiseux(&f, 0).unwrap() {
            assert!(b.residual.eval_origin().is_zero());
        }
    }
}

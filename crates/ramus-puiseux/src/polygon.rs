//! Newton polygon construction and edge data extraction.
//!
//! The polygon of F(x, y) = sum a_ij y^i x^j is the lower-left hull of the
//! support {(i, j) : a_ij != 0} together with the artificial corner (0, c),
//! c = min(i + j) over the support, which clips every slope at -1. Each edge
//! carries the data driving the expansion: the primitive direction (q, m)
//! with q*j + m*i = l along the edge, and the characteristic polynomial phi
//! whose nonzero roots are the admissible leading coefficients of branches
//! through the origin.

use std::cmp::Ordering;

use num_traits::Zero;
use ramus_poly::{BiPoly, Poly};
use ramus_rings::Ring;
use smallvec::SmallVec;

use crate::error::{PuiseuxError, Result};

/// A lattice point (y-exponent, x-exponent) of the support.
pub type Point = (u32, u32);

/// The expansion data carried by one polygon edge.
///
/// The edge lies on the line q*j + m*i = l with gcd(q, m) = 1 and q > 0.
/// Every support point (i, j) satisfies q*j + m*i >= l, with equality
/// exactly on the edge line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EdgeData<R: Ring> {
    /// Denominator of the edge slope; the ramification contributed in x.
    pub q: usize,
    /// Numerator of the edge slope.
    pub m: usize,
    /// Level of the edge line.
    pub l: usize,
    /// Characteristic polynomial of the edge.
    pub phi: Poly<R>,
}

/// Computes the generalized Newton polygon of `f`.
///
/// Edges are ordered steepest first; each edge lists its lattice points
/// ascending in the y-exponent, retaining collinear interior support points.
/// The artificial corner (0, c) opens the first edge even when it is not a
/// support point. A support lying entirely on the i-axis yields an empty
/// polygon.
///
/// # Errors
///
/// `InvalidPolynomial` when `f` is zero or free of `y`.
pub fn newton_polygon<R: Ring>(f: &BiPoly<R>) -> Result<Vec<Vec<Point>>> {
    let support = validated_support(f)?;
    Ok(march(&support))
}

/// The degenerate edge [(0,0), (d,0)] covering branches whose center at
/// x = 0 is a finite nonzero y-value.
///
/// # Errors
///
/// `InvalidPolynomial` when `f` is zero or free of `y`.
pub fn newton_polygon_exceptional<R: Ring>(f: &BiPoly<R>) -> Result<Vec<Vec<Point>>> {
    validated_support(f)?;
    Ok(vec![vec![(0, 0), (f.deg_y() as u32, 0)]])
}

/// Extracts `(q, m, l, phi)` for every polygon edge, steepest first.
///
/// # Errors
///
/// `InvalidPolynomial` on invalid input; `DegenerateEdge` when an edge
/// collapses to a constant characteristic polynomial.
pub fn newton_data<R: Ring>(f: &BiPoly<R>) -> Result<Vec<EdgeData<R>>> {
    let edges = newton_polygon(f)?;
    edges.iter().map(|edge| edge_data(f, edge)).collect()
}

/// Edge data of the exceptional edge: the identity direction with
/// characteristic polynomial F(0, z).
///
/// # Errors
///
/// `InvalidPolynomial` when `f` is zero or free of `y`.
pub fn newton_data_exceptional<R: Ring>(f: &BiPoly<R>) -> Result<EdgeData<R>> {
    validated_support(f)?;
    Ok(EdgeData {
        q: 1,
        m: 0,
        l: 0,
        phi: f.eval_x0(),
    })
}

fn validated_support<R: Ring>(f: &BiPoly<R>) -> Result<Vec<Point>> {
    if f.is_zero() {
        return Err(PuiseuxError::InvalidPolynomial("zero polynomial".into()));
    }
    if f.deg_y() == 0 {
        return Err(PuiseuxError::InvalidPolynomial(
            "no dependence on y".into(),
        ));
    }
    Ok(f.support()
        .into_iter()
        .map(|(i, j)| (i as u32, j as u32))
        .collect())
}

/// Walks the lower-left hull from the artificial corner down to the i-axis.
fn march(support: &[Point]) -> Vec<Vec<Point>> {
    let corner = support.iter().map(|&(i, j)| i + j).min().unwrap_or(0);
    let mut edges = Vec::new();
    let mut cur: Point = (0, corner);
    loop {
        let mut best: Option<Point> = None;
        for &p in support {
            if p.0 <= cur.0 || p.1 >= cur.1 {
                continue;
            }
            best = Some(match best {
                None => p,
                Some(b) => pick(cur, b, p),
            });
        }
        let Some(end) = best else { break };
        let mut edge: SmallVec<[Point; 4]> = SmallVec::new();
        edge.push(cur);
        for &p in support {
            if p.0 > cur.0 && p.0 < end.0 && on_segment(cur, end, p) {
                edge.push(p);
            }
        }
        edge.push(end);
        edge.sort_unstable_by_key(|&(i, _)| i);
        edges.push(edge.into_vec());
        cur = end;
    }
    edges
}

/// Rise in i and drop in j from `from` to `to`, both positive for a
/// candidate step.
fn delta(from: Point, to: Point) -> (i64, i64) {
    (
        i64::from(to.0) - i64::from(from.0),
        i64::from(from.1) - i64::from(to.1),
    )
}

/// Chooses the steeper of two candidate steps; on equal slope the farther.
fn pick(from: Point, a: Point, b: Point) -> Point {
    let (ai, aj) = delta(from, a);
    let (bi, bj) = delta(from, b);
    match (aj * bi).cmp(&(bj * ai)) {
        Ordering::Greater => a,
        Ordering::Less => b,
        Ordering::Equal => {
            if ai >= bi {
                a
            } else {
                b
            }
        }
    }
}

fn on_segment(from: Point, end: Point, p: Point) -> bool {
    let (ei, ej) = delta(from, end);
    let (pi, pj) = delta(from, p);
    pj * ei == ej * pi
}

fn edge_data<R: Ring>(f: &BiPoly<R>, edge: &[Point]) -> Result<EdgeData<R>> {
    let first = edge[0];
    let last = edge[edge.len() - 1];
    let di = (last.0 - first.0) as usize;
    let dj = (first.1 - last.1) as usize;
    let g = gcd(di, dj);
    let q = di / g;
    let m = dj / g;
    let l = q * first.1 as usize + m * first.0 as usize;
    let i0 = first.0 as usize;

    let mut coeffs = vec![R::zero(); di / q + 1];
    for (i, j) in f.support() {
        if q * j + m * i == l {
            coeffs[(i - i0) / q] = f.coeff(i, j);
        }
    }
    let phi = Poly::new(coeffs);
    if phi.degree() < 1 {
        return Err(PuiseuxError::DegenerateEdge {
            edge: format!("{edge:?}"),
        });
    }
    Ok(EdgeData { q, m, l, phi })
}

fn gcd(mut a: usize, mut b: usize) -> usize {
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

#[cfg(test)]
mod tests {
    use super::*;
    use ramus_rings::Q;

    fn bp(terms: &[(usize, usize, i64)]) -> BiPoly<Q> {
        BiPoly::from_terms(terms.iter().map(|&(i, j, c)| (i, j, Q::from(c))).collect())
    }

    fn zpoly(coeffs: &[i64]) -> Poly<Q> {
        Poly::new(coeffs.iter().map(|&c| Q::from(c)).collect())
    }

    #[test]
    fn test_polygon_line() {
        // y + x
        let f = bp(&[(1, 0, 1), (0, 1, 1)]);
        assert_eq!(newton_polygon(&f).unwrap(), vec![vec![(0, 1), (1, 0)]]);
    }

    #[test]
    fn test_polygon_circle_and_quartic() {
        // y^2 + x^2
        let f = bp(&[(2, 0, 1), (0, 2, 1)]);
        assert_eq!(newton_polygon(&f).unwrap(), vec![vec![(0, 2), (2, 0)]]);
        // y^2 + x^4: the corner (0, 2) is artificial
        let f = bp(&[(2, 0, 1), (0, 4, 1)]);
        assert_eq!(newton_polygon(&f).unwrap(), vec![vec![(0, 2), (2, 0)]]);
    }

    #[test]
    fn test_polygon_collinear_interior_point() {
        // x^4 + x^2 y^2 + y^4
        let f = bp(&[(0, 4, 1), (2, 2, 1), (4, 0, 1)]);
        assert_eq!(
            newton_polygon(&f).unwrap(),
            vec![vec![(0, 4), (2, 2), (4, 0)]]
        );
        // x^5 + x^2 y^2 + y^4 keeps the same hull
        let f = bp(&[(0, 5, 1), (2, 2, 1), (4, 0, 1)]);
        assert_eq!(
            newton_polygon(&f).unwrap(),
            vec![vec![(0, 4), (2, 2), (4, 0)]]
        );
    }

    #[test]
    fn test_polygon_two_edges() {
        // 2x^2 + 3xy + 5y^3
        let f = bp(&[(0, 2, 2), (1, 1, 3), (3, 0, 5)]);
        assert_eq!(
            newton_polygon(&f).unwrap(),
            vec![vec![(0, 2), (1, 1)], vec![(1, 1), (3, 0)]]
        );
    }

    #[test]
    fn test_polygon_support_on_axis_is_empty() {
        // y^2 + 1 has no hull below slope -1
        let f = bp(&[(2, 0, 1), (0, 0, 1)]);
        assert_eq!(newton_polygon(&f).unwrap(), Vec::<Vec<Point>>::new());
    }

    #[test]
    fn test_polygon_pure_y_root() {
        // y^2 + y still carries one edge down to the axis
        let f = bp(&[(2, 0, 1), (1, 0, 1)]);
        assert_eq!(newton_polygon(&f).unwrap(), vec![vec![(0, 1), (1, 0)]]);
    }

    #[test]
    fn test_polygon_rejects_zero_and_y_free() {
        let zero = BiPoly::<Q>::from_terms(vec![]);
        assert!(matches!(
            newton_polygon(&zero),
            Err(PuiseuxError::InvalidPolynomial(_))
        ));
        let xonly = bp(&[(0, 3, 1), (0, 0, 2)]);
        assert!(matches!(
            newton_polygon(&xonly),
            Err(PuiseuxError::InvalidPolynomial(_))
        ));
    }

    #[test]
    fn test_exceptional_edge() {
        let f = bp(&[(3, 0, 1), (0, 1, 2)]);
        assert_eq!(
            newton_polygon_exceptional(&f).unwrap(),
            vec![vec![(0, 0), (3, 0)]]
        );
    }

    #[test]
    fn test_edge_data_single_edges() {
        // 2x + 3y -> (1,1,1, 3z+2)
        let data = newton_data(&bp(&[(0, 1, 2), (1, 0, 3)])).unwrap();
        assert_eq!(data.len(), 1);
        assert_eq!((data[0].q, data[0].m, data[0].l), (1, 1, 1));
        assert_eq!(data[0].phi, zpoly(&[2, 3]));

        // 2x^2 + 3y^3 -> (3,2,6, 3z+2)
        let data = newton_data(&bp(&[(0, 2, 2), (3, 0, 3)])).unwrap();
        assert_eq!((data[0].q, data[0].m, data[0].l), (3, 2, 6));
        assert_eq!(data[0].phi, zpoly(&[2, 3]));

        // 2x^2 + 3y^4 -> (2,1,4, 3z^2+2)
        let data = newton_data(&bp(&[(0, 2, 2), (4, 0, 3)])).unwrap();
        assert_eq!((data[0].q, data[0].m, data[0].l), (2, 1, 4));
        assert_eq!(data[0].phi, zpoly(&[2, 0, 3]));

        // x^5 + y^3 -> (1,1,3, z^3): an artificial corner and a pure z power
        let data = newton_data(&bp(&[(0, 5, 1), (3, 0, 1)])).unwrap();
        assert_eq!((data[0].q, data[0].m, data[0].l), (1, 1, 3));
        assert_eq!(data[0].phi, zpoly(&[0, 0, 0, 1]));
    }

    #[test]
    fn test_edge_data_two_edges() {
        // 2x^2 + 3xy + 5y^3 -> [(1,1,2, 3z+2), (2,1,3, 5z+3)]
        let data = newton_data(&bp(&[(0, 2, 2), (1, 1, 3), (3, 0, 5)])).unwrap();
        assert_eq!(data.len(), 2);
        assert_eq!((data[0].q, data[0].m, data[0].l), (1, 1, 2));
        assert_eq!(data[0].phi, zpoly(&[2, 3]));
        assert_eq!((data[1].q, data[1].m, data[1].l), (2, 1, 3));
        assert_eq!(data[1].phi, zpoly(&[3, 5]));

        // 2x^5 + 3x^3y + 5x^2y^2 + 7y^6 -> [(1,1,4, 5z^2+3z), (2,1,6, 7z^2+5)]
        let data =
            newton_data(&bp(&[(0, 5, 2), (1, 3, 3), (2, 2, 5), (6, 0, 7)])).unwrap();
        assert_eq!(data.len(), 2);
        assert_eq!((data[0].q, data[0].m, data[0].l), (1, 1, 4));
        assert_eq!(data[0].phi, zpoly(&[0, 3, 5]));
        assert_eq!((data[1].q, data[1].m, data[1].l), (2, 1, 6));
        assert_eq!(data[1].phi, zpoly(&[5, 0, 7]));
    }

    #[test]
    fn test_edge_data_mixed_zero_and_unit_roots() {
        // 2x^5 + 3x^2y^2 + 5y^4 -> (1,1,4, 5z^4+3z^2)
        let data = newton_data(&bp(&[(0, 5, 2), (2, 2, 3), (4, 0, 5)])).unwrap();
        assert_eq!(data.len(), 1);
        assert_eq!((data[0].q, data[0].m, data[0].l), (1, 1, 4));
        assert_eq!(data[0].phi, zpoly(&[0, 0, 3, 0, 5]));
    }

    #[test]
    fn test_edge_data_exceptional() {
        let f = bp(&[(2, 0, 1), (1, 2, 3), (0, 0, -4)]);
        let data = newton_data_exceptional(&f).unwrap();
        assert_eq!((data.q, data.m, data.l), (1, 0, 0));
        assert_eq!(data.phi, zpoly(&[-4, 0, 1]));
    }

    #[test]
    fn test_root_count_invariant_on_anchor_family() {
        // For almost-monic F the edge degrees weighted by q account for
        // every y-root of F(0, y) at the origin.
        let cases: Vec<BiPoly<Q>> = vec![
            bp(&[(0, 1, 2), (1, 0, 3)]),
            bp(&[(0, 2, 2), (3, 0, 3)]),
            bp(&[(0, 2, 2), (4, 0, 3)]),
            bp(&[(0, 5, 1), (3, 0, 1)]),
            bp(&[(0, 2, 2), (1, 1, 3), (3, 0, 5)]),
            bp(&[(0, 5, 2), (2, 2, 3), (4, 0, 5)]),
            bp(&[(0, 5, 2), (1, 3, 3), (2, 2, 5), (6, 0, 7)]),
            bp(&[(2, 0, 1), (1, 0, 1)]),
        ];
        for f in cases {
            let counted: usize = newton_data(&f)
                .unwrap()
                .iter()
                .map(|d| d.q * d.phi.degree())
                .sum();
            let at_zero = f.eval_x0();
            assert!(!at_zero.is_zero());
            assert_eq!(counted, at_zero.ord());
        }
    }
}

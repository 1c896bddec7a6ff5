//! # ramus-puiseux
//!
//! Puiseux series expansion of plane algebraic curves F(x, y) = 0 at x = 0.
//!
//! Every branch of the curve above the origin is parametrized as
//! x = c * t^e, y = S(t) with S a Laurent series whose coefficients are
//! exact algebraic numbers. The crate provides:
//!
//! - **Newton polygons**: the generalized polygon with slopes clipped at -1,
//!   plus the exceptional edge covering nonzero expansion centers
//! - **Edge transforms**: the substitutions that move a polygon edge into
//!   expansion position, one recursion step per irreducible characteristic
//!   factor
//! - **Series refinement**: quadratically convergent lifting of a branch in
//!   simple-root position to any requested degree
//! - **The expansion driver**: [`puiseux`] and friends, assembling exact
//!   singular parts, refined tails and rescale corrections into
//!   [`PuiseuxBranch`] values
//! - **Numeric evaluation**: complex-embedding evaluation of branches
//!   through canonical roots of the coefficient field
//!
//! Expansion work is value-cached in a [`PuiseuxContext`] and batches of
//! curves are expanded in parallel with rayon.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod branch;
pub mod cache;
pub mod driver;
pub mod error;
pub mod monicize;
pub mod numeric;
pub mod polygon;
pub mod refine;
pub mod transform;

#[cfg(test)]
mod proptests;

pub use branch::PuiseuxBranch;
pub use cache::{PuiseuxContext, DEFAULT_MAX_DEPTH};
pub use driver::{puiseux, puiseux_batch, puiseux_rational, puiseux_with};
pub use error::{PuiseuxError, Result};
pub use monicize::{almost_monicize, Monicized};
pub use numeric::{aberth_roots, field_roots, Approximate};
pub use polygon::{
    newton_data, newton_data_exceptional, newton_polygon, newton_polygon_exceptional, EdgeData,
};
pub use refine::newton_iteration;
pub use transform::transform;

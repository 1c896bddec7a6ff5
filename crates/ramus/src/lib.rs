//! # Ramus
//!
//! Puiseux series expansion of plane algebraic curves F(x, y) = 0.
//!
//! Each branch of the curve above x = 0 comes back as an exact
//! parametrization x = c * t^e, y = S(t), with coefficients in an
//! algebraic number field that grows only as far as the curve demands.
//!
//! ## Quick Start
//!
//! ```rust
//! use ramus::prelude::*;
//!
//! // The nodal cubic y^2 + x^3 - x^2 has two sheets through the origin.
//! let f = BiPoly::from_terms(vec![
//!     (2, 0, AlgebraicNumber::from_i64(1)),
//!     (0, 3, AlgebraicNumber::from_i64(1)),
//!     (0, 2, AlgebraicNumber::from_i64(-1)),
//! ]);
//! let branches = puiseux(&f, 3).unwrap();
//! assert_eq!(branches.len(), 2);
//! assert!(branches.iter().all(|b| b.ramification == 1));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use ramus_factor as factor;
pub use ramus_integers as integers;
pub use ramus_poly as poly;
pub use ramus_puiseux as puiseux;
pub use ramus_rings as rings;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use ramus_factor::{factor_algebraic, factor_q};
    pub use ramus_integers::{Integer, Rational};
    pub use ramus_poly::{BiPoly, LaurentPoly, Poly};
    pub use ramus_puiseux::{
        puiseux, puiseux_batch, puiseux_rational, PuiseuxBranch, PuiseuxContext,
    };
    pub use ramus_rings::{AlgebraicNumber, Field, NumberField, Ring, Q, Z};
}

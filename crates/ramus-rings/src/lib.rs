//! Algebraic structures for the `ramus` workspace.
//!
//! The trait hierarchy ([`Ring`] through [`Field`]) describes what generic
//! code may assume about a coefficient type. Three concrete element types
//! live here:
//!
//! - [`Z`]: the ring of integers.
//! - [`Q`]: the field of rationals.
//! - [`AlgebraicNumber`]: elements of a number field Q(θ), with the field
//!   itself described by [`NumberField`].
//!
//! `AlgebraicNumber` is the coefficient type the Puiseux machinery runs on:
//! rationals are the degree-one special case, so extending the coefficient
//! field never changes the Rust type flowing through the algorithms.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod integers;
mod numberfield;
mod rationals;
mod traits;

pub use integers::Z;
pub use numberfield::{AlgebraicNumber, NumberField};
pub use rationals::Q;
pub use traits::{CommutativeRing, EuclideanDomain, Field, IntegralDomain, Ring};

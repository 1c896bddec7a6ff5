//! # ramus-poly
//!
//! Polynomial arithmetic for the `ramus` workspace.
//!
//! This crate provides:
//! - Dense univariate polynomials with Karatsuba multiplication
//! - Bivariate polynomials stored as rows of univariate ones
//! - Laurent polynomials with negative exponents
//! - Division, gcd, squarefree decomposition and resultants

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod algorithms;
pub mod bivar;
pub mod dense;
pub mod laurent;

#[cfg(test)]
mod proptests;

pub use bivar::BiPoly;
pub use dense::Poly;
pub use laurent::LaurentPoly;

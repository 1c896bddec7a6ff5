//! Polynomial factorization for the ramus computer algebra crates.
//!
//! This crate provides:
//! - **Modular factorization**: distinct-degree and equal-degree splitting
//!   of squarefree polynomials modulo a word-sized prime
//! - **Hensel lifting**: lifts a coprime factorization modulo p to an
//!   arbitrary power p^k by quadratic steps
//! - **Zassenhaus**: complete factorization over the rationals via
//!   squarefree decomposition, modular factorization, lifting and
//!   recombination
//! - **Trager**: factorization over an algebraic number field Q(&theta;)
//!   through norms, plus primitive-element construction for field towers
//!
//! # Parallelism
//!
//! The batch entry points use rayon to factor independent polynomials in
//! parallel.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod hensel;
pub mod modp;
pub mod trager;
pub mod zassenhaus;

// Re-exports
pub use hensel::{hensel_lift, HenselLiftResult};
pub use trager::{extend_field, factor_algebraic, FieldExtension};
pub use zassenhaus::{factor_q, factor_q_batch, Factorization, IrreducibleFactor};

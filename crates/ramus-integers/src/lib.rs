//! Arbitrary-precision arithmetic primitives for the `ramus` workspace.
//!
//! Two newtypes over [`dashu`]'s big-number kernel:
//!
//! - [`Integer`]: signed integers of unbounded magnitude.
//! - [`Rational`]: exact fractions, always kept in lowest terms.
//!
//! Both implement the [`num_traits::Zero`]/[`num_traits::One`] pair and the
//! full set of arithmetic operators for owned and borrowed operands, so they
//! can be used as coefficient types by the polynomial and ring layers.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod integer;
mod rational;

pub use integer::Integer;
pub use rational::Rational;

#[cfg(test)]
mod proptests;

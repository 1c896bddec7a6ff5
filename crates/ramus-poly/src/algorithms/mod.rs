//! Polynomial algorithms.

pub mod gcd;
pub mod resultant;
pub mod squarefree;

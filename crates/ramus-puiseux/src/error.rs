//! Error type shared by every stage of the expansion pipeline.

use thiserror::Error;

/// Errors that can occur during Puiseux expansion.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum PuiseuxError {
    /// The input polynomial is zero, has no `y` dependence, or carries a
    /// repeated factor in `y`.
    #[error("invalid polynomial: {0}")]
    InvalidPolynomial(String),

    /// A polygon edge violated the hull invariants it was built under.
    #[error("degenerate polygon edge: {edge}")]
    DegenerateEdge {
        /// The offending edge, rendered as its lattice points.
        edge: String,
    },

    /// The monicizing rescale loop exceeded its budget.
    #[error("leading coefficient cannot be cleared by rescaling")]
    NotMonicizable,

    /// Series refinement was applied outside its simple-root precondition.
    #[error("refinement requires a simple root at the expansion center")]
    NotSimpleRoot,
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, PuiseuxError>;

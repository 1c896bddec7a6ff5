//! Expansion context: memo cache and recursion budget.
//!
//! Expansions of the same monicized polynomial at the same order are
//! value-keyed and reused across calls. Cached branches carry the series
//! before any monicize undo, so one entry serves every rescaling of the
//! same curve.

use std::sync::Arc;

use parking_lot::RwLock;
use ramus_poly::BiPoly;
use ramus_rings::AlgebraicNumber;
use rustc_hash::FxHashMap;

use crate::branch::PuiseuxBranch;

/// Recursion depth ceiling of the expansion; a genuinely squarefree input
/// stays far below it.
pub const DEFAULT_MAX_DEPTH: usize = 64;

type CacheKey = (BiPoly<AlgebraicNumber>, usize);

/// Shared state for a family of expansion calls.
///
/// Holding one context across calls memoizes whole expansions; the free
/// functions in [`crate::driver`] construct a fresh one per call.
pub struct PuiseuxContext {
    /// Recursion depth budget for the edge expansion.
    pub max_depth: usize,
    memo: RwLock<FxHashMap<CacheKey, Arc<[PuiseuxBranch]>>>,
}

impl Default for PuiseuxContext {
    fn default() -> Self {
        Self::with_max_depth(DEFAULT_MAX_DEPTH)
    }
}

impl PuiseuxContext {
    /// Creates a context with a custom recursion budget.
    #[must_use]
    pub fn with_max_depth(max_depth: usize) -> Self {
        PuiseuxContext {
            max_depth,
            memo: RwLock::new(FxHashMap::default()),
        }
    }

    /// Number of memoized expansions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.memo.read().len()
    }

    /// Whether the cache is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.memo.read().is_empty()
    }

    pub(crate) fn lookup(&self, key: &CacheKey) -> Option<Arc<[PuiseuxBranch]>> {
        self.memo.read().get(key).cloned()
    }

    pub(crate) fn store(&self, key: CacheKey, branches: Arc<[PuiseuxBranch]>) {
        self.memo.write().insert(key, branches);
    }
}

//! # Small Cancellation
//!
//! Decide whether a finite set of cyclically reduced relators satisfies a
//! small cancellation condition that certifies the presented group is
//! hyperbolic.
//!
//! ## Pipeline
//!
//! ```text
//! RelatorSet (validated: non-empty, cyclically reduced)
//!     │
//!     ├──> Pieces ──┬──> C′   largest piece/relator length ratio
//!     │             └──> C    fewest pieces tiling a cyclic rotation
//!     │
//!     ├──> Whitehead graph ──> T   girth
//!     │
//!     └──> Decision
//!            ├─ C′ < 1/6
//!            ├─ ⌈1/C′⌉ with T: C(5)-T(4), C(4)-T(5), C(3)-T(7)
//!            └─ exact C (capped at 7): C(7), or the same C-T pairs
//! ```
//!
//! A `false` answer means no certificate was found, not that the group is
//! not hyperbolic.
//!
//! ## Example
//!
//! ```rust
//! use smallcancel_core::smallcancellation;
//! use smallcancel_words::RelatorSet;
//!
//! let surface = RelatorSet::normalize(["abABcdCD"]).unwrap();
//! assert!(smallcancellation(&surface, None).unwrap());
//!
//! let commutator = RelatorSet::normalize([vec![1, 2, -1, -2]]).unwrap();
//! assert!(!smallcancellation(&commutator, None).unwrap());
//! ```

mod analyzer;
mod config;
mod decision;
mod error;
mod girth;
mod piece_count;
mod pieces;
mod ratio;

pub use analyzer::Analyzer;
pub use config::AnalysisConfig;
pub use decision::{Certificate, Condition, Evidence, Verdict, DECISION_PIECE_CAP};
pub use error::{CancellationError, Result};
pub use piece_count::{min_piece_count_with, PieceCount};
pub use pieces::PieceSet;
pub use ratio::PieceRatio;
pub use smallcancel_graph::Girth;

use smallcancel_words::RelatorSet;

/// Pieces of the relator set, closed under inversion
pub fn pieces(relators: &RelatorSet) -> PieceSet {
    pieces::find_pieces(relators)
}

/// Largest piece ratio, or exactly 1 once a ratio reaches `1/lambda`
pub fn cprime(relators: &RelatorSet, lambda: u32) -> Result<PieceRatio> {
    ratio::cprime_bound(relators, lambda)
}

/// Girth of the reduced Whitehead graph
pub fn girth(relators: &RelatorSet) -> Girth {
    girth::whitehead_girth(relators)
}

/// `min(fewest pieces tiling a cyclic rotation of a relator, quit_at)`
pub fn min_piece_count(relators: &RelatorSet, quit_at: PieceCount) -> Result<PieceCount> {
    piece_count::min_piece_count(relators, quit_at, &AnalysisConfig::default())
}

/// Full decision with the default configuration
pub fn decide(relators: &RelatorSet, precomputed_cprime: Option<PieceRatio>) -> Result<Verdict> {
    decision::decide(relators, precomputed_cprime, &AnalysisConfig::default())
}

/// Whether a known sufficient condition for hyperbolicity holds
pub fn smallcancellation(
    relators: &RelatorSet,
    precomputed_cprime: Option<PieceRatio>,
) -> Result<bool> {
    Ok(decide(relators, precomputed_cprime)?.is_hyperbolic())
}

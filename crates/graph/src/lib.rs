//! # Small Cancellation Graph
//!
//! Reduced Whitehead graphs of relator sets, and their girth.
//!
//! ## Architecture
//!
//! ```text
//! RelatorSet
//!     │
//!     ├──> Whitehead Builder
//!     │      ├─ Vertices x, x⁻¹ for each generator that occurs
//!     │      └─ Edge {x, y⁻¹} for each cyclic subword xy
//!     │
//!     ├──> Whitehead Graph (petgraph)
//!     │      ├─ Simple: parallel edges merged, multiplicity kept as weight
//!     │      └─ Letter -> NodeIndex lookup
//!     │
//!     └──> Girth
//!            ├─ Drop one edge, shortest path between its endpoints
//!            └─ Minimum over all edges of (path length + 1)
//! ```

mod builder;
mod graph;
mod types;

pub use builder::WhiteheadBuilder;
pub use types::{ExtendedCount, Girth, WhiteheadEdge, WhiteheadGraph};

//! Graph search over cairn lattices.
//!
//! Two searches, both synchronous and run-to-completion, both gated by
//! a caller-supplied traversability predicate:
//!
//! - [`range_search`]: uniform-cost frontier exploration producing the
//!   minimal-cost map of every cell reachable within a budget
//! - [`path_search`]: A* least-cost path between two cells, using the
//!   lattice distance as its admissible heuristic
//!
//! Both are deterministic: the [`frontier::Frontier`] breaks ties
//! between equal-priority entries by insertion order, so repeated
//! queries over the same state return identical results.
//!
//! The searches never inspect occupancy themselves — composing
//! terrain, occupancy, and caller overrides into the predicate is the
//! board facade's job (`cairn-board`).

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod frontier;
pub mod path;
pub mod range;

pub use frontier::Frontier;
pub use path::path_search;
pub use range::{range_search, CostMap};

/// Cost of traversing one lattice edge.
///
/// All moves are unweighted grid steps; the searches accumulate this
/// per edge and the range budget is expressed in the same unit.
pub const STEP_COST: f64 = 1.0;

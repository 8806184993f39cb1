//! cairn: a grid topology and search engine for turn-based tactical
//! games.
//!
//! This is the top-level facade crate that re-exports the public API
//! from all cairn sub-crates. For most users, adding `cairn` as a
//! single dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use cairn::prelude::*;
//!
//! let units = Layer::new("units");
//!
//! // An 8x8 hex board where the bottom row is water.
//! let mut board = Board::new(Topology::Hexagonal, 8, 8, |cell: Cell| {
//!     cell.y != 7
//! })
//! .unwrap();
//!
//! // Spawn two units.
//! assert!(board.registry_mut().add(&units, OccupantId(1), Cell::at(1, 1)));
//! assert!(board.registry_mut().add(&units, OccupantId(2), Cell::at(4, 1)));
//!
//! // Where can unit 1 move with 3 movement points?
//! let reach = board.range(Cell::at(1, 1), 3.0, &units);
//! assert!(!reach.contains_key(&Cell::at(4, 1))); // blocked by unit 2
//!
//! // Walk unit 1 next to unit 2 and commit the move.
//! let path = board.path(Cell::at(1, 1), Cell::at(3, 1), &units).unwrap();
//! assert_eq!(path.last(), Some(&Cell::at(3, 1)));
//! assert!(board.registry_mut().relocate(&units, OccupantId(1), Cell::at(3, 1)));
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in
//! the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `cairn-core` | `Cell`, `OccupantId`, `Layer` |
//! | [`space`] | `cairn-space` | `Topology`, `Lattice` trait, rect/hex backends, hex coordinate systems |
//! | [`search`] | `cairn-search` | range search, path search, the priority frontier |
//! | [`board`] | `cairn-board` | `OccupantRegistry` and the `Board` facade |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core value types (`cairn-core`).
///
/// The [`types::Cell`] coordinate triple and the opaque
/// [`types::OccupantId`] / [`types::Layer`] identifiers.
pub use cairn_core as types;

/// Topologies and lattice backends (`cairn-space`).
///
/// Provides the [`space::Lattice`] trait, the [`space::Topology`] tag,
/// the [`space::RectLattice`] and [`space::HexLattice`] backends, and
/// the hex coordinate conversions in [`space::coords`].
pub use cairn_space as space;

/// Range and path searches (`cairn-search`).
///
/// [`search::range_search`] for cost-bounded reachability,
/// [`search::path_search`] for optimal routes.
pub use cairn_search as search;

/// Occupancy and composed queries (`cairn-board`).
///
/// [`board::OccupantRegistry`] for the bijective cell↔occupant index,
/// [`board::Board`] for the occupant-aware query facade.
pub use cairn_board as board;

/// Common imports for typical cairn usage.
///
/// ```rust
/// use cairn::prelude::*;
/// ```
pub mod prelude {
    pub use cairn_board::{Board, OccupantRegistry, Terrain};
    pub use cairn_core::{Cell, Layer, OccupantId};
    pub use cairn_search::{path_search, range_search, CostMap};
    pub use cairn_space::{build_lattice, HexLattice, Lattice, LatticeError, RectLattice, Topology};
}

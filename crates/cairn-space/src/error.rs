//! Error types for lattice construction and topology dispatch.

use crate::topology::Topology;
use std::fmt;

/// Errors arising from lattice construction.
///
/// Queries against a constructed lattice never fail — out-of-bounds
/// cells are simply not traversable — so everything that can go wrong
/// goes wrong up front, here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LatticeError {
    /// The requested topology has no backend.
    ///
    /// Raised for the reserved isometric variants. Distinct from an
    /// empty query result so callers can tell "no topology support"
    /// apart from "no cells found".
    UnsupportedTopology {
        /// The topology that was requested.
        topology: Topology,
    },
    /// Attempted to construct a lattice with zero cells.
    EmptyLattice,
    /// A dimension exceeds the addressable coordinate range.
    DimensionTooLarge {
        /// Which dimension ("rows" or "cols").
        name: &'static str,
        /// The requested value.
        value: u32,
        /// The largest accepted value.
        max: u32,
    },
}

impl fmt::Display for LatticeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedTopology { topology } => {
                write!(f, "topology {topology} has no lattice backend")
            }
            Self::EmptyLattice => write!(f, "lattice must have at least one cell"),
            Self::DimensionTooLarge { name, value, max } => {
                write!(f, "{name} = {value} exceeds maximum {max}")
            }
        }
    }
}

impl std::error::Error for LatticeError {}

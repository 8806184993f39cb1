//! The `Topology` tag and lattice construction dispatch.

use crate::error::LatticeError;
use crate::hex::HexLattice;
use crate::lattice::Lattice;
use crate::rect::RectLattice;
use std::fmt;

/// The adjacency and metric rule set governing a grid.
///
/// The two isometric variants are reserved: they exist so that grid
/// descriptions authored against them keep their meaning, but no
/// backend implements them. [`build_lattice`] reports them as
/// [`LatticeError::UnsupportedTopology`] — an explicit failure rather
/// than an empty result, so callers can distinguish "no topology
/// support" from "no cells found". The enum is closed: a future
/// isometric backend turns every `match` on it into a compile-time
/// checklist.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Topology {
    /// 4-connected square grid, Manhattan metric.
    Rectangular,
    /// Pointy-top hexagonal grid in odd-row offset coordinates, cube
    /// metric.
    Hexagonal,
    /// Reserved; no backend.
    IsometricDiamond,
    /// Reserved; no backend.
    IsometricStaggered,
}

impl Topology {
    /// Whether a lattice backend exists for this topology.
    pub fn is_supported(self) -> bool {
        match self {
            Self::Rectangular | Self::Hexagonal => true,
            Self::IsometricDiamond | Self::IsometricStaggered => false,
        }
    }
}

impl fmt::Display for Topology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Rectangular => "rectangular",
            Self::Hexagonal => "hexagonal",
            Self::IsometricDiamond => "isometric-diamond",
            Self::IsometricStaggered => "isometric-staggered",
        };
        f.write_str(name)
    }
}

/// Construct the lattice backend for a topology tag.
///
/// # Errors
///
/// [`LatticeError::UnsupportedTopology`] for the reserved isometric
/// variants, plus whatever the backend constructor rejects (zero or
/// oversized dimensions).
///
/// # Examples
///
/// ```
/// use cairn_space::{build_lattice, LatticeError, Topology};
///
/// let hex = build_lattice(Topology::Hexagonal, 8, 8).unwrap();
/// assert_eq!(hex.cell_count(), 64);
///
/// let iso = build_lattice(Topology::IsometricDiamond, 8, 8);
/// assert!(matches!(
///     iso,
///     Err(LatticeError::UnsupportedTopology { .. })
/// ));
/// ```
pub fn build_lattice(
    topology: Topology,
    rows: u32,
    cols: u32,
) -> Result<Box<dyn Lattice>, LatticeError> {
    match topology {
        Topology::Rectangular => Ok(Box::new(RectLattice::new(rows, cols)?)),
        Topology::Hexagonal => Ok(Box::new(HexLattice::new(rows, cols)?)),
        Topology::IsometricDiamond | Topology::IsometricStaggered => {
            Err(LatticeError::UnsupportedTopology { topology })
        }
    }
}

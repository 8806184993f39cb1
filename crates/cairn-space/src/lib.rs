//! Grid topologies for the cairn grid engine.
//!
//! This crate defines the [`Lattice`] trait — the spatial abstraction
//! through which all range and path queries flow — along with the two
//! concrete backends and the hex coordinate systems their math rests on.
//!
//! # Backends
//!
//! - [`RectLattice`]: 4-connected square grid, Manhattan metric
//! - [`HexLattice`]: pointy-top hex grid addressed in odd-row offset
//!   coordinates, cube-distance metric
//!
//! Backends are normally constructed through [`build_lattice`], which
//! dispatches on a [`Topology`] tag and reports reserved topologies as
//! [`LatticeError::UnsupportedTopology`] instead of silently returning
//! nothing.
//!
//! # Hex coordinates
//!
//! The [`coords`] module keeps the offset, cube, and axial hex
//! representations as distinct types so a coordinate in one system
//! cannot be fed to a function expecting another without an explicit
//! conversion.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod coords;
pub mod error;
pub mod hex;
pub mod lattice;
pub mod rect;
pub mod topology;

#[cfg(test)]
pub(crate) mod compliance;

pub use error::LatticeError;
pub use hex::HexLattice;
pub use lattice::Lattice;
pub use rect::RectLattice;
pub use topology::{build_lattice, Topology};

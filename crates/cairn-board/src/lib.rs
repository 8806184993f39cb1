//! Board-level composition for the cairn grid engine.
//!
//! [`OccupantRegistry`] keeps a bijective cell↔occupant index per
//! [`Layer`](cairn_core::Layer); [`Board`] owns a lattice, a terrain
//! predicate, and a registry, and composes them into the occupant-aware
//! range and path queries gameplay code consumes.
//!
//! Mutation and querying are separated by borrow: queries take
//! `&self`, registry mutation goes through
//! [`Board::registry_mut`], so the borrow checker enforces the
//! no-mutation-during-query discipline the searches assume.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod board;
pub mod registry;

pub use board::{Board, Terrain};
pub use registry::OccupantRegistry;

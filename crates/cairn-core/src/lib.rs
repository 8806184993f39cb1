//! Core types for the cairn grid engine.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the fundamental value types shared by every cairn crate: the
//! [`Cell`] coordinate triple and the opaque [`OccupantId`] and
//! [`Layer`] identifiers used by the occupant registry.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod cell;
mod id;

pub use cell::Cell;
pub use id::{Layer, OccupantId};

//! The core `Lattice` trait and `dyn Lattice` downcast support.

use crate::topology::Topology;
use cairn_core::Cell;
use smallvec::SmallVec;
use std::any::Any;

/// Central spatial abstraction for cairn grids.
///
/// All range and path queries flow through this trait. Concrete
/// backends ([`RectLattice`](crate::RectLattice),
/// [`HexLattice`](crate::HexLattice)) implement it to define their
/// adjacency and metric rules over a bounded `rows x cols` extent.
///
/// # Object safety
///
/// The trait is designed for use as `dyn Lattice`: a board owns a
/// `Box<dyn Lattice>` chosen at construction time from a [`Topology`]
/// tag. `downcast_ref` allows opt-in specialization on concrete
/// backends.
///
/// # Contract
///
/// Implementations must keep `neighbours` symmetric (if `b` is a
/// neighbour of `a` then `a` is a neighbour of `b`), return neighbours
/// in a fixed deterministic order, and keep `distance` a metric that
/// never overestimates the step count between two cells — searches use
/// it as an admissible heuristic.
pub trait Lattice: Any + Send + Sync + 'static {
    /// The topology tag this backend implements.
    fn topology(&self) -> Topology;

    /// Number of rows in the extent.
    fn rows(&self) -> u32;

    /// Number of columns in the extent.
    fn cols(&self) -> u32;

    /// Total number of cells in the extent.
    fn cell_count(&self) -> usize {
        (self.rows() as usize) * (self.cols() as usize)
    }

    /// Whether `cell` lies within the declared extent.
    fn contains(&self, cell: Cell) -> bool;

    /// Enumerate the in-bounds neighbours of a cell.
    ///
    /// Out-of-bounds candidates are omitted, so boundary cells have
    /// fewer neighbours. The order is deterministic and backend
    /// defined. The inline capacity of 6 covers both backends without
    /// heap allocation.
    fn neighbours(&self, cell: Cell) -> SmallVec<[Cell; 6]>;

    /// Grid distance between two cells: the number of single-cell
    /// steps an unobstructed walk between them needs.
    fn distance(&self, a: Cell, b: Cell) -> f64;

    /// All cells in deterministic row-major order.
    ///
    /// Two calls on the same lattice return the same sequence. Used by
    /// compliance tests and by callers that paint or inspect a whole
    /// board.
    fn canonical_ordering(&self) -> Vec<Cell>;
}

impl dyn Lattice {
    /// Attempt to downcast a trait object to a concrete lattice type.
    ///
    /// Code holding a `&dyn Lattice` can check for a known backend and
    /// use type-specific fast paths (say, direct index arithmetic on a
    /// rectangular grid).
    pub fn downcast_ref<T: Lattice>(&self) -> Option<&T> {
        (self as &dyn Any).downcast_ref::<T>()
    }
}

//! 4-connected rectangular lattice with Manhattan metric.

use crate::error::LatticeError;
use crate::lattice::Lattice;
use crate::topology::Topology;
use cairn_core::Cell;
use smallvec::SmallVec;

/// Cardinal step offsets in `(dx, dy)` order: E, S, W, N (clockwise
/// from "right").
const RECT_OFFSETS: [(i32, i32); 4] = [(1, 0), (0, 1), (-1, 0), (0, -1)];

/// A bounded rectangular grid with 4-connected neighbourhood.
///
/// Cells are addressed as `(x, y, 0)` with `0 <= x < cols` and
/// `0 <= y < rows`. Neighbours are the four cardinal directions;
/// boundary cells have fewer (out-of-bounds candidates are omitted).
/// Distance is Manhattan (`|dx| + |dy|`), which equals the graph
/// geodesic for 4-connectivity.
///
/// # Examples
///
/// ```
/// use cairn_core::Cell;
/// use cairn_space::{Lattice, RectLattice};
///
/// let grid = RectLattice::new(5, 5).unwrap();
/// assert_eq!(grid.cell_count(), 25);
/// assert_eq!(grid.neighbours(Cell::at(2, 2)).len(), 4);
/// assert_eq!(grid.neighbours(Cell::at(0, 0)).len(), 2);
/// assert_eq!(grid.distance(Cell::at(0, 0), Cell::at(3, 4)), 7.0);
/// ```
#[derive(Debug, Clone)]
pub struct RectLattice {
    rows: u32,
    cols: u32,
}

impl RectLattice {
    /// Maximum dimension size: coordinates use `i32`, so each axis
    /// must fit.
    pub const MAX_DIM: u32 = i32::MAX as u32;

    /// Create a rectangular lattice with `rows * cols` cells.
    ///
    /// # Errors
    ///
    /// [`LatticeError::EmptyLattice`] if either dimension is 0,
    /// [`LatticeError::DimensionTooLarge`] if either exceeds
    /// [`MAX_DIM`](Self::MAX_DIM).
    pub fn new(rows: u32, cols: u32) -> Result<Self, LatticeError> {
        check_extent(rows, cols)?;
        Ok(Self { rows, cols })
    }
}

/// Shared extent validation for both backends.
pub(crate) fn check_extent(rows: u32, cols: u32) -> Result<(), LatticeError> {
    if rows == 0 || cols == 0 {
        return Err(LatticeError::EmptyLattice);
    }
    if rows > RectLattice::MAX_DIM {
        return Err(LatticeError::DimensionTooLarge {
            name: "rows",
            value: rows,
            max: RectLattice::MAX_DIM,
        });
    }
    if cols > RectLattice::MAX_DIM {
        return Err(LatticeError::DimensionTooLarge {
            name: "cols",
            value: cols,
            max: RectLattice::MAX_DIM,
        });
    }
    Ok(())
}

impl Lattice for RectLattice {
    fn topology(&self) -> Topology {
        Topology::Rectangular
    }

    fn rows(&self) -> u32 {
        self.rows
    }

    fn cols(&self) -> u32 {
        self.cols
    }

    fn contains(&self, cell: Cell) -> bool {
        cell.z == 0
            && cell.x >= 0
            && cell.x < self.cols as i32
            && cell.y >= 0
            && cell.y < self.rows as i32
    }

    fn neighbours(&self, cell: Cell) -> SmallVec<[Cell; 6]> {
        let mut result = SmallVec::new();
        for (dx, dy) in RECT_OFFSETS {
            let candidate = Cell::at(cell.x + dx, cell.y + dy);
            if self.contains(candidate) {
                result.push(candidate);
            }
        }
        result
    }

    fn distance(&self, a: Cell, b: Cell) -> f64 {
        ((a.x - b.x).abs() + (a.y - b.y).abs()) as f64
    }

    fn canonical_ordering(&self) -> Vec<Cell> {
        let mut out = Vec::with_capacity(self.cell_count());
        for y in 0..self.rows as i32 {
            for x in 0..self.cols as i32 {
                out.push(Cell::at(x, y));
            }
        }
        out
    }
}

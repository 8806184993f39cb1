//! Pointy-top hexagonal lattice in odd-row offset coordinates.

use crate::coords::Offset;
use crate::error::LatticeError;
use crate::lattice::Lattice;
use crate::rect::check_extent;
use crate::topology::Topology;
use cairn_core::Cell;
use smallvec::SmallVec;

/// Step offsets `(dcol, drow)` for even rows, clockwise from "right":
/// E, SE, SW, W, NW, NE.
const HEX_EVEN_ROW: [(i32, i32); 6] = [(1, 0), (0, 1), (-1, 1), (-1, 0), (-1, -1), (0, -1)];

/// Step offsets `(dcol, drow)` for odd rows (shifted half a cell to
/// the right), same direction order.
const HEX_ODD_ROW: [(i32, i32); 6] = [(1, 0), (1, 1), (0, 1), (-1, 0), (0, -1), (1, -1)];

/// A bounded pointy-top hexagonal lattice.
///
/// Cells are addressed in odd-row offset coordinates `(col, row, 0)`
/// with `0 <= col < cols` and `0 <= row < rows`; odd rows sit half a
/// cell to the right. Interior cells have six neighbours, selected
/// from a parity-indexed offset table; boundary candidates outside the
/// extent are omitted.
///
/// Distance converts both endpoints to cube coordinates and takes the
/// cube distance `(|dx| + |dy| + |dz|) / 2` — the exact unobstructed
/// step count, and therefore an admissible search heuristic.
///
/// # Examples
///
/// ```
/// use cairn_core::Cell;
/// use cairn_space::{HexLattice, Lattice};
///
/// let hex = HexLattice::new(5, 5).unwrap();
/// assert_eq!(hex.neighbours(Cell::at(2, 2)).len(), 6);
/// assert_eq!(hex.neighbours(Cell::at(0, 0)).len(), 2);
/// assert_eq!(hex.distance(Cell::at(0, 0), Cell::at(4, 4)), 6.0);
/// ```
#[derive(Debug, Clone)]
pub struct HexLattice {
    rows: u32,
    cols: u32,
}

impl HexLattice {
    /// Create a hex lattice with `rows * cols` cells.
    ///
    /// # Errors
    ///
    /// [`LatticeError::EmptyLattice`] if either dimension is 0,
    /// [`LatticeError::DimensionTooLarge`] if either exceeds
    /// [`RectLattice::MAX_DIM`](crate::RectLattice::MAX_DIM).
    pub fn new(rows: u32, cols: u32) -> Result<Self, LatticeError> {
        check_extent(rows, cols)?;
        Ok(Self { rows, cols })
    }

    /// The six raw neighbour candidates of `(col, row)`, before bounds
    /// filtering, in clockwise order starting at "right".
    fn candidates(col: i32, row: i32) -> [(i32, i32); 6] {
        let table = if row & 1 == 1 {
            HEX_ODD_ROW
        } else {
            HEX_EVEN_ROW
        };
        table.map(|(dc, dr)| (col + dc, row + dr))
    }
}

impl Lattice for HexLattice {
    fn topology(&self) -> Topology {
        Topology::Hexagonal
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
        for (col, row) in Self::candidates(cell.x, cell.y) {
            let candidate = Cell::at(col, row);
            if self.contains(candidate) {
                result.push(candidate);
            }
        }
        result
    }

    fn distance(&self, a: Cell, b: Cell) -> f64 {
        let a = Offset::new(a.x, a.y).to_cube();
        let b = Offset::new(b.x, b.y).to_cube();
        a.distance(b) as f64
    }

    fn canonical_ordering(&self) -> Vec<Cell> {
        let mut out = Vec::with_capacity(self.cell_count());
        for row in 0..self.rows as i32 {
            for col in 0..self.cols as i32 {
                out.push(Cell::at(col, row));
            }
        }
        out
    }
}

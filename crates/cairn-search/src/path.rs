//! Optimal path search.

use crate::frontier::Frontier;
use crate::STEP_COST;
use cairn_core::Cell;
use cairn_space::Lattice;
use indexmap::{IndexMap, IndexSet};

/// Find a least-cost path from `origin` to `target`, inclusive of
/// both.
///
/// A* with the lattice's own distance function as the heuristic —
/// both backends' metrics equal the unobstructed step count, so the
/// heuristic never overestimates and the returned path is optimal.
/// Step cost is [`STEP_COST`](crate::STEP_COST) per edge.
///
/// `traversable` gates only intermediate expansion: `origin` and
/// `target` are exempt, so a unit can path out of its own cell and
/// into a destination the general predicate would reject (the caller
/// decides what arrival means). Returns `None` when no route exists —
/// an expected outcome, not an error.
///
/// Results are deterministic: equal-priority frontier entries pop in
/// insertion order.
///
/// # Examples
///
/// ```
/// use cairn_core::Cell;
/// use cairn_search::path_search;
/// use cairn_space::RectLattice;
///
/// let grid = RectLattice::new(5, 5).unwrap();
/// let path = path_search(&grid, Cell::at(0, 0), Cell::at(3, 0), |_| true).unwrap();
/// assert_eq!(path.len(), 4);
/// assert_eq!(path[0], Cell::at(0, 0));
/// assert_eq!(path[3], Cell::at(3, 0));
/// ```
pub fn path_search(
    lattice: &dyn Lattice,
    origin: Cell,
    target: Cell,
    traversable: impl Fn(Cell) -> bool,
) -> Option<Vec<Cell>> {
    if origin == target {
        return Some(vec![origin]);
    }

    let mut g_score: IndexMap<Cell, f64> = IndexMap::new();
    g_score.insert(origin, 0.0);
    let mut came_from: IndexMap<Cell, Cell> = IndexMap::new();
    let mut closed: IndexSet<Cell> = IndexSet::new();

    let mut frontier = Frontier::new();
    frontier.push(origin, lattice.distance(origin, target));

    while let Some((cell, _)) = frontier.pop() {
        // Lazy deletion: the first pop of a cell is its best route.
        if !closed.insert(cell) {
            continue;
        }
        if cell == target {
            return Some(reconstruct(&came_from, origin, target));
        }
        let Some(&g) = g_score.get(&cell) else {
            continue;
        };
        for neighbour in lattice.neighbours(cell) {
            if closed.contains(&neighbour) {
                continue;
            }
            if neighbour != target && !traversable(neighbour) {
                continue;
            }
            let tentative = g + STEP_COST;
            if g_score
                .get(&neighbour)
                .is_some_and(|&known| known <= tentative)
            {
                continue;
            }
            g_score.insert(neighbour, tentative);
            came_from.insert(neighbour, cell);
            frontier.push(neighbour, tentative + lattice.distance(neighbour, target));
        }
    }

    None
}

/// Walk predecessor links back from `target` and reverse.
fn reconstruct(came_from: &IndexMap<Cell, Cell>, origin: Cell, target: Cell) -> Vec<Cell> {
    let mut cells = vec![target];
    let mut current = target;
    while current != origin {
        match came_from.get(&current) {
            Some(&previous) => {
                cells.push(previous);
                current = previous;
            }
            None => break,
        }
    }
    cells.reverse();
    debug_assert_eq!(cells.first(), Some(&origin));
    cells
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::range_search;
    use cairn_space::{HexLattice, RectLattice};

    fn assert_valid_path(lattice: &dyn Lattice, path: &[Cell], origin: Cell, target: Cell) {
        assert_eq!(path.first(), Some(&origin));
        assert_eq!(path.last(), Some(&target));
        for pair in path.windows(2) {
            assert!(
                lattice.neighbours(pair[0]).contains(&pair[1]),
                "{} and {} are not neighbours",
                pair[0],
                pair[1],
            );
        }
    }

    // ── Basic routes ────────────────────────────────────────────

    #[test]
    fn straight_line_on_open_grid() {
        let grid = RectLattice::new(5, 5).unwrap();
        let path = path_search(&grid, Cell::at(0, 2), Cell::at(4, 2), |_| true).unwrap();
        assert_eq!(path.len(), 5);
        assert_valid_path(&grid, &path, Cell::at(0, 2), Cell::at(4, 2));
    }

    #[test]
    fn origin_equals_target() {
        let grid = RectLattice::new(5, 5).unwrap();
        let path = path_search(&grid, Cell::at(2, 2), Cell::at(2, 2), |_| true).unwrap();
        assert_eq!(path, vec![Cell::at(2, 2)]);
    }

    #[test]
    fn hex_path_length_matches_cube_distance() {
        let grid = HexLattice::new(7, 7).unwrap();
        let origin = Cell::at(1, 1);
        let target = Cell::at(5, 4);
        let path = path_search(&grid, origin, target, |_| true).unwrap();
        assert_valid_path(&grid, &path, origin, target);
        assert_eq!(path.len() as f64 - 1.0, grid.distance(origin, target));
    }

    // ── Obstacles ───────────────────────────────────────────────

    #[test]
    fn routes_around_walls() {
        // Wall at x = 2 with a gap at (2, 4), as in the range tests.
        let grid = RectLattice::new(5, 5).unwrap();
        let wall = |cell: Cell| cell.x == 2 && cell.y != 4;
        let origin = Cell::at(1, 2);
        let target = Cell::at(3, 2);
        let path = path_search(&grid, origin, target, |c| !wall(c)).unwrap();

        assert_valid_path(&grid, &path, origin, target);
        assert_eq!(path.len(), 7); // 6 edges through the gap
        assert!(path.contains(&Cell::at(2, 4)));
        assert!(path.iter().all(|&c| !wall(c)));
    }

    #[test]
    fn walled_off_target_is_unreachable() {
        // Box in the target at (4, 4) on a grid whose corner it sits
        // in: blocking (3, 4) and (4, 3) seals it completely.
        let grid = RectLattice::new(5, 5).unwrap();
        let sealed = |cell: Cell| cell == Cell::at(3, 4) || cell == Cell::at(4, 3);
        let path = path_search(&grid, Cell::at(0, 0), Cell::at(4, 4), |c| !sealed(c));
        assert_eq!(path, None);
    }

    #[test]
    fn endpoints_are_exempt_from_the_predicate() {
        let grid = RectLattice::new(5, 5).unwrap();
        let origin = Cell::at(0, 0);
        let target = Cell::at(3, 0);
        // The predicate rejects both endpoints; the route must still
        // leave the origin and arrive at the target.
        let blocked = |cell: Cell| cell == origin || cell == target;
        let path = path_search(&grid, origin, target, |c| !blocked(c)).unwrap();
        assert_valid_path(&grid, &path, origin, target);
        assert_eq!(path.len(), 4);
    }

    // ── Optimality ──────────────────────────────────────────────

    #[test]
    fn path_cost_matches_range_search_cost() {
        let grid = RectLattice::new(7, 7).unwrap();
        let traversable = |cell: Cell| (cell.x * 5 + cell.y * 3) % 4 != 0;
        let origin = Cell::at(0, 1);

        let reach = range_search(&grid, origin, f64::INFINITY, traversable);
        for (&target, &cost) in &reach {
            let path = path_search(&grid, origin, target, traversable)
                .unwrap_or_else(|| panic!("{target} reachable by range but not path"));
            assert_eq!(
                (path.len() - 1) as f64,
                cost,
                "suboptimal path to {target}"
            );
        }
    }

    #[test]
    fn hex_optimality_against_range_search() {
        let grid = HexLattice::new(6, 6).unwrap();
        let traversable = |cell: Cell| (cell.x + cell.y) % 5 != 2;
        let origin = Cell::at(0, 0);

        let reach = range_search(&grid, origin, f64::INFINITY, traversable);
        for (&target, &cost) in &reach {
            let path = path_search(&grid, origin, target, traversable)
                .unwrap_or_else(|| panic!("{target} reachable by range but not path"));
            assert_eq!((path.len() - 1) as f64, cost);
        }
    }

    // ── Determinism ─────────────────────────────────────────────

    #[test]
    fn repeated_queries_return_the_same_path() {
        let grid = RectLattice::new(8, 8).unwrap();
        let traversable = |cell: Cell| cell.x != 3 || cell.y == 6;
        let first = path_search(&grid, Cell::at(0, 0), Cell::at(7, 2), traversable);
        for _ in 0..5 {
            let again = path_search(&grid, Cell::at(0, 0), Cell::at(7, 2), traversable);
            assert_eq!(first, again);
        }
    }
}

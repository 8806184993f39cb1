//! Cost-bounded range search.

use crate::frontier::Frontier;
use crate::STEP_COST;
use cairn_core::Cell;
use cairn_space::Lattice;
use indexmap::IndexMap;

/// Minimal accumulated cost per reached cell, keyed by cell.
///
/// Insertion order is discovery order, so iterating a `CostMap` walks
/// cells from cheap to expensive — convenient for painting movement
/// overlays outward from the origin.
pub type CostMap = IndexMap<Cell, f64>;

/// Compute every cell reachable from `origin` within `max_cost`.
///
/// Uniform-cost frontier search with a step cost of
/// [`STEP_COST`](crate::STEP_COST) per edge. A neighbour is entered
/// only if `traversable` allows it; the origin itself is never tested
/// (you may always stand where you start). Each reached cell is mapped
/// to the minimal cost of reaching it; the origin is always present at
/// cost 0.
///
/// A cell whose cost has reached `max_cost` is included but not
/// expanded, so no entry in the result exceeds the budget.
///
/// # Edge cases
///
/// - `max_cost = 0` → `{origin: 0}`
/// - origin with no traversable neighbours → `{origin: 0}`
///
/// # Examples
///
/// ```
/// use cairn_core::Cell;
/// use cairn_search::range_search;
/// use cairn_space::RectLattice;
///
/// let grid = RectLattice::new(5, 5).unwrap();
/// let reach = range_search(&grid, Cell::at(2, 2), 2.0, |_| true);
/// // The Manhattan diamond of radius 2: 13 cells.
/// assert_eq!(reach.len(), 13);
/// assert_eq!(reach[&Cell::at(2, 2)], 0.0);
/// assert_eq!(reach[&Cell::at(4, 2)], 2.0);
/// ```
pub fn range_search(
    lattice: &dyn Lattice,
    origin: Cell,
    max_cost: f64,
    traversable: impl Fn(Cell) -> bool,
) -> CostMap {
    let mut best = CostMap::new();
    best.insert(origin, 0.0);

    let mut frontier = Frontier::new();
    frontier.push(origin, 0.0);

    while let Some((cell, cost)) = frontier.pop() {
        // Stale entry: a cheaper route to this cell was found after
        // this one was pushed.
        if best.get(&cell).is_some_and(|&known| cost > known) {
            continue;
        }
        // Budget reached: the cell stays in the result but is not
        // expanded further.
        if cost >= max_cost {
            continue;
        }
        for neighbour in lattice.neighbours(cell) {
            if !traversable(neighbour) {
                continue;
            }
            let candidate = cost + STEP_COST;
            if candidate > max_cost {
                continue;
            }
            match best.get(&neighbour) {
                Some(&known) if known <= candidate => {}
                _ => {
                    best.insert(neighbour, candidate);
                    frontier.push(neighbour, candidate);
                }
            }
        }
    }

    best
}

//! The composed board query facade.

use crate::registry::OccupantRegistry;
use cairn_core::{Cell, Layer};
use cairn_search::{path_search, range_search, CostMap};
use cairn_space::{build_lattice, Lattice, LatticeError, Topology};
use tracing::warn;

/// Terrain traversability, supplied per cell by the owning map.
///
/// The seam between cairn and whatever produces tiles: a tile set, a
/// procedural generator, a test closure. Blanket-implemented for
/// plain functions, so `Board::new(.., |cell| ...)` works directly.
pub trait Terrain: Send + Sync {
    /// Whether terrain alone permits entering `cell`.
    fn traversable(&self, cell: Cell) -> bool;
}

impl<F> Terrain for F
where
    F: Fn(Cell) -> bool + Send + Sync,
{
    fn traversable(&self, cell: Cell) -> bool {
        self(cell)
    }
}

/// A grid instance: lattice, terrain, and occupant registry composed
/// into the query surface gameplay code consumes.
///
/// Traversability for queries is the conjunction of four tests:
/// in-bounds, terrain, cell vacant on the query's layer, and the
/// caller's per-query override (`*_with` variants). Cells outside the
/// extent are simply not traversable — never an error.
///
/// There is no global board: construct one per grid and pass it by
/// reference to whoever needs queries. Queries take `&self`; registry
/// mutation borrows `&mut self` through [`registry_mut`](Self::registry_mut),
/// so a query result can never observe a half-applied mutation.
///
/// # Examples
///
/// ```
/// use cairn_board::Board;
/// use cairn_core::{Cell, Layer, OccupantId};
/// use cairn_space::Topology;
///
/// let units = Layer::new("units");
/// let mut board = Board::new(Topology::Rectangular, 8, 8, |_: Cell| true).unwrap();
/// board.registry_mut().add(&units, OccupantId(1), Cell::at(3, 3));
///
/// // The occupied cell blocks movement but its surroundings remain
/// // reachable.
/// let reach = board.range(Cell::at(1, 3), 4.0, &units);
/// assert!(!reach.contains_key(&Cell::at(3, 3)));
/// assert!(reach.contains_key(&Cell::at(2, 3)));
/// ```
pub struct Board {
    lattice: Box<dyn Lattice>,
    terrain: Box<dyn Terrain>,
    registry: OccupantRegistry,
}

impl Board {
    /// Build a board for `topology` with a `rows x cols` extent.
    ///
    /// # Errors
    ///
    /// Whatever [`build_lattice`] reports: unsupported (isometric)
    /// topologies and invalid extents.
    pub fn new(
        topology: Topology,
        rows: u32,
        cols: u32,
        terrain: impl Terrain + 'static,
    ) -> Result<Self, LatticeError> {
        Ok(Self::with_lattice(
            build_lattice(topology, rows, cols)?,
            terrain,
        ))
    }

    /// Build a board around an existing lattice backend.
    pub fn with_lattice(lattice: Box<dyn Lattice>, terrain: impl Terrain + 'static) -> Self {
        Self {
            lattice,
            terrain: Box::new(terrain),
            registry: OccupantRegistry::new(),
        }
    }

    /// The underlying lattice.
    pub fn lattice(&self) -> &dyn Lattice {
        self.lattice.as_ref()
    }

    /// The board's topology tag.
    pub fn topology(&self) -> Topology {
        self.lattice.topology()
    }

    /// Read access to the occupant registry.
    pub fn registry(&self) -> &OccupantRegistry {
        &self.registry
    }

    /// Mutable access to the occupant registry (spawn, despawn, and
    /// movement commit).
    pub fn registry_mut(&mut self) -> &mut OccupantRegistry {
        &mut self.registry
    }

    /// Whether `cell` lies within the board's extent, independent of
    /// occupancy and terrain.
    pub fn contains(&self, cell: Cell) -> bool {
        self.lattice.contains(cell)
    }

    /// The composed traversability test for `layer`: in-bounds,
    /// terrain-passable, and vacant on that layer.
    pub fn traversable(&self, cell: Cell, layer: &Layer) -> bool {
        self.lattice.contains(cell)
            && self.terrain.traversable(cell)
            && self.registry.occupant_at(layer, cell).is_none()
    }

    /// All cells reachable from `center` within `max_cost` steps,
    /// mapped to their minimal cost.
    ///
    /// The center is always present at cost 0 even when occupied or
    /// blocked — you may stand where you start. An in-bounds center
    /// with no reachable surroundings produces a center-only result
    /// (logged as a warning; "no targets" is the caller's call, not a
    /// failure).
    pub fn range(&self, center: Cell, max_cost: f64, layer: &Layer) -> CostMap {
        self.range_with(center, max_cost, layer, |_| true)
    }

    /// [`range`](Self::range) with a per-query override predicate.
    ///
    /// The override is ANDed into the composed traversability test —
    /// unit-specific rules such as a flier ignoring ground hazards
    /// pass a closure that consults their own rules.
    pub fn range_with(
        &self,
        center: Cell,
        max_cost: f64,
        layer: &Layer,
        allow: impl Fn(Cell) -> bool,
    ) -> CostMap {
        if !self.lattice.contains(center) {
            warn!("range query from out-of-bounds center {center}");
            let mut only_center = CostMap::new();
            only_center.insert(center, 0.0);
            return only_center;
        }
        let reach = range_search(self.lattice.as_ref(), center, max_cost, |cell| {
            self.traversable(cell, layer) && allow(cell)
        });
        if reach.len() <= 1 && max_cost >= 1.0 {
            warn!("range query from {center} reached no cells besides the center");
        }
        reach
    }

    /// Ring-shaped range: cells with `min_cost <= cost <= max_cost`.
    ///
    /// Post-filters [`range`](Self::range), so costs still measure the
    /// true walking distance; any `min_cost > 0` drops the center.
    /// Used for "donut" targeting such as a ranged attack that cannot
    /// hit adjacent cells.
    pub fn annulus(&self, center: Cell, min_cost: f64, max_cost: f64, layer: &Layer) -> CostMap {
        self.annulus_with(center, min_cost, max_cost, layer, |_| true)
    }

    /// [`annulus`](Self::annulus) with a per-query override predicate.
    pub fn annulus_with(
        &self,
        center: Cell,
        min_cost: f64,
        max_cost: f64,
        layer: &Layer,
        allow: impl Fn(Cell) -> bool,
    ) -> CostMap {
        let mut reach = self.range_with(center, max_cost, layer, allow);
        reach.retain(|_, cost| *cost >= min_cost);
        reach
    }

    /// Least-cost path from `origin` to `target`, inclusive, or `None`
    /// when no route exists.
    ///
    /// The endpoints are exempt from the traversability test: a unit
    /// paths out of its own (occupied) cell, and into a target cell
    /// whatever occupies it — melee against an occupied cell resolves
    /// arrival, not this query.
    pub fn path(&self, origin: Cell, target: Cell, layer: &Layer) -> Option<Vec<Cell>> {
        self.path_with(origin, target, layer, |_| true)
    }

    /// [`path`](Self::path) with a per-query override predicate.
    pub fn path_with(
        &self,
        origin: Cell,
        target: Cell,
        layer: &Layer,
        allow: impl Fn(Cell) -> bool,
    ) -> Option<Vec<Cell>> {
        if !self.lattice.contains(origin) || !self.lattice.contains(target) {
            warn!("path query with out-of-bounds endpoint ({origin} -> {target})");
            return None;
        }
        path_search(self.lattice.as_ref(), origin, target, |cell| {
            self.traversable(cell, layer) && allow(cell)
        })
    }
}

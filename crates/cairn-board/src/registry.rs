//! Per-layer bijective occupant index.

use cairn_core::{Cell, Layer, OccupantId};
use indexmap::IndexMap;
use tracing::debug;

/// One occupancy plane: two maps that are kept in lockstep.
///
/// Private to the registry — exposing either map raw would let callers
/// break the bijection.
#[derive(Debug, Default, Clone)]
struct Plane {
    by_cell: IndexMap<Cell, OccupantId>,
    by_occupant: IndexMap<OccupantId, Cell>,
}

impl Plane {
    fn consistent(&self) -> bool {
        self.by_cell.len() == self.by_occupant.len()
            && self
                .by_cell
                .iter()
                .all(|(cell, occupant)| self.by_occupant.get(occupant) == Some(cell))
    }
}

/// A bijective index between cells and occupants, partitioned by
/// [`Layer`].
///
/// Within one layer no two occupants share a cell and no occupant is
/// recorded twice; layers are fully independent, so a cell can be
/// occupied on `"units"` and `"hazards"` at once. Every mutating
/// operation either upholds the bijection or fails without touching
/// state — failures are reported as `false`, an expected and
/// recoverable outcome the caller checks.
///
/// The registry indexes occupants; it does not own them. Despawn
/// cleanup in the surrounding gameplay layer is the caller's job
/// before (or after) unbinding here.
///
/// # Examples
///
/// ```
/// use cairn_board::OccupantRegistry;
/// use cairn_core::{Cell, Layer, OccupantId};
///
/// let units = Layer::new("units");
/// let mut registry = OccupantRegistry::new();
///
/// assert!(registry.add(&units, OccupantId(1), Cell::at(2, 2)));
/// // The cell is taken on this layer now.
/// assert!(!registry.add(&units, OccupantId(2), Cell::at(2, 2)));
/// assert_eq!(registry.occupant_at(&units, Cell::at(2, 2)), Some(OccupantId(1)));
/// ```
#[derive(Debug, Default, Clone)]
pub struct OccupantRegistry {
    planes: IndexMap<Layer, Plane>,
}

impl OccupantRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `occupant` to `cell` on `layer`.
    ///
    /// Fails without mutating if the occupant is already bound in the
    /// layer or the cell is already occupied there.
    pub fn add(&mut self, layer: &Layer, occupant: OccupantId, cell: Cell) -> bool {
        let plane = self.planes.entry(layer.clone()).or_default();
        if plane.by_occupant.contains_key(&occupant) {
            debug!("add rejected: occupant {occupant} already bound in layer '{layer}'");
            return false;
        }
        if plane.by_cell.contains_key(&cell) {
            debug!("add rejected: cell {cell} already occupied in layer '{layer}'");
            return false;
        }
        plane.by_cell.insert(cell, occupant);
        plane.by_occupant.insert(occupant, cell);
        debug_assert!(plane.consistent());
        true
    }

    /// Unbind `occupant` from `layer`. Fails if it is not bound there.
    pub fn remove(&mut self, layer: &Layer, occupant: OccupantId) -> bool {
        let Some(plane) = self.planes.get_mut(layer) else {
            return false;
        };
        match plane.by_occupant.shift_remove(&occupant) {
            Some(cell) => {
                plane.by_cell.shift_remove(&cell);
                debug_assert!(plane.consistent());
                true
            }
            None => false,
        }
    }

    /// Unbind whatever occupies `cell` on `layer`. Fails if the cell
    /// is vacant.
    pub fn remove_at(&mut self, layer: &Layer, cell: Cell) -> bool {
        let Some(plane) = self.planes.get_mut(layer) else {
            return false;
        };
        match plane.by_cell.shift_remove(&cell) {
            Some(occupant) => {
                plane.by_occupant.shift_remove(&occupant);
                debug_assert!(plane.consistent());
                true
            }
            None => false,
        }
    }

    /// Rebind `occupant` to `destination` in one step.
    ///
    /// Fails without mutating if the occupant is not bound in the
    /// layer or the destination is occupied by someone else; a move
    /// onto the occupant's own cell succeeds as a no-op. On success the
    /// old binding is gone and the new one present — no intermediate
    /// state is ever observable.
    pub fn relocate(&mut self, layer: &Layer, occupant: OccupantId, destination: Cell) -> bool {
        let Some(plane) = self.planes.get_mut(layer) else {
            return false;
        };
        let Some(&current) = plane.by_occupant.get(&occupant) else {
            debug!("relocate rejected: occupant {occupant} not bound in layer '{layer}'");
            return false;
        };
        match plane.by_cell.get(&destination) {
            Some(&resident) if resident == occupant => return true,
            Some(_) => {
                debug!("relocate rejected: cell {destination} already occupied in layer '{layer}'");
                return false;
            }
            None => {}
        }
        plane.by_cell.shift_remove(&current);
        plane.by_cell.insert(destination, occupant);
        plane.by_occupant.insert(occupant, destination);
        debug_assert!(plane.consistent());
        true
    }

    /// The occupant bound to `cell` on `layer`, if any.
    pub fn occupant_at(&self, layer: &Layer, cell: Cell) -> Option<OccupantId> {
        self.planes.get(layer)?.by_cell.get(&cell).copied()
    }

    /// The cell `occupant` is bound to on `layer`, if any.
    pub fn cell_of(&self, layer: &Layer, occupant: OccupantId) -> Option<Cell> {
        self.planes.get(layer)?.by_occupant.get(&occupant).copied()
    }

    /// Number of bindings on `layer`.
    pub fn len(&self, layer: &Layer) -> usize {
        self.planes.get(layer).map_or(0, |p| p.by_occupant.len())
    }

    /// Whether `layer` has no bindings.
    pub fn is_empty(&self, layer: &Layer) -> bool {
        self.len(layer) == 0
    }

    /// Iterate the `(occupant, cell)` bindings of `layer` in binding
    /// order.
    pub fn iter(&self, layer: &Layer) -> impl Iterator<Item = (OccupantId, Cell)> + '_ {
        self.planes
            .get(layer)
            .into_iter()
            .flat_map(|plane| plane.by_occupant.iter().map(|(&o, &c)| (o, c)))
    }

    /// Drop every binding on `layer`. Other layers are untouched.
    pub fn clear(&mut self, layer: &Layer) {
        if let Some(plane) = self.planes.get_mut(layer) {
            debug!("clearing {} binding(s) from layer '{layer}'", plane.by_occupant.len());
            plane.by_cell.clear();
            plane.by_occupant.clear();
        }
    }

    /// Drop every binding on every layer.
    pub fn clear_all(&mut self) {
        self.planes.clear();
    }
}

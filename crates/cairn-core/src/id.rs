//! Opaque identifiers for occupants and registry layers.

use std::fmt;

/// Identifies an occupant bound to a cell within a registry layer.
///
/// The id is an opaque handle owned by the surrounding gameplay layer
/// (a unit, an obstacle, a spawn marker). cairn never allocates these;
/// it only indexes them. Two occupants with the same id are the same
/// occupant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OccupantId(pub u64);

impl fmt::Display for OccupantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for OccupantId {
    fn from(v: u64) -> Self {
        Self(v)
    }
}

/// Names an independent occupancy plane within a single grid.
///
/// A cell may be occupied on several layers at once (say, `"units"`
/// and `"hazards"`); within one layer the occupant registry enforces a
/// strict bijection between cells and occupants. The string content is
/// opaque to cairn — equal strings name the same layer.
///
/// # Examples
///
/// ```
/// use cairn_core::Layer;
///
/// let units = Layer::new("units");
/// assert_eq!(units.as_str(), "units");
/// assert_eq!(units, Layer::from("units"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Layer(String);

impl Layer {
    /// Create a layer id from any string-like value.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The layer name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Layer {
    fn from(name: &str) -> Self {
        Self(name.to_owned())
    }
}

impl From<String> for Layer {
    fn from(name: String) -> Self {
        Self(name)
    }
}

//! Lattice trait compliance test helpers.
//!
//! These functions verify that a backend satisfies the invariants the
//! [`Lattice`] contract promises to the search crates. Reused across
//! the backend test modules (RectLattice, HexLattice).

use crate::lattice::Lattice;
use cairn_core::Cell;
use indexmap::IndexSet;

/// Assert that `distance(a, a) == 0.0` for all cells.
pub fn assert_distance_reflexive(lattice: &dyn Lattice) {
    for cell in lattice.canonical_ordering() {
        let d = lattice.distance(cell, cell);
        assert_eq!(d, 0.0, "distance({cell}, {cell}) = {d}, expected 0.0");
    }
}

/// Assert that `distance(a, b) == distance(b, a)` for all cell pairs.
pub fn assert_distance_symmetric(lattice: &dyn Lattice) {
    let cells = lattice.canonical_ordering();
    for &a in &cells {
        for &b in &cells {
            let dab = lattice.distance(a, b);
            let dba = lattice.distance(b, a);
            assert_eq!(dab, dba, "distance({a}, {b}) = {dab} != {dba}");
        }
    }
}

/// Assert triangle inequality: `d(a, c) <= d(a, b) + d(b, c)`.
pub fn assert_distance_triangle_inequality(lattice: &dyn Lattice) {
    let cells = lattice.canonical_ordering();
    for &a in &cells {
        for &b in &cells {
            for &c in &cells {
                let dac = lattice.distance(a, c);
                let dab = lattice.distance(a, b);
                let dbc = lattice.distance(b, c);
                assert!(
                    dac <= dab + dbc,
                    "triangle inequality violated: d({a},{c})={dac} > d({a},{b})={dab} + d({b},{c})={dbc}"
                );
            }
        }
    }
}

/// Assert that `b in neighbours(a)` implies `a in neighbours(b)`.
pub fn assert_neighbours_symmetric(lattice: &dyn Lattice) {
    for cell in lattice.canonical_ordering() {
        for nb in lattice.neighbours(cell) {
            assert!(
                lattice.neighbours(nb).contains(&cell),
                "neighbour symmetry violated: {nb} in N({cell}) but {cell} not in N({nb})"
            );
        }
    }
}

/// Assert that every neighbour is in-bounds, distinct, at distance
/// exactly 1, and that no cell exceeds the 6-neighbour ceiling.
pub fn assert_neighbours_well_formed(lattice: &dyn Lattice) {
    for cell in lattice.canonical_ordering() {
        let neighbours = lattice.neighbours(cell);
        assert!(neighbours.len() <= 6, "{cell} has {} neighbours", neighbours.len());
        let unique: IndexSet<_> = neighbours.iter().collect();
        assert_eq!(unique.len(), neighbours.len(), "duplicate neighbours of {cell}");
        for &nb in &neighbours {
            assert!(lattice.contains(nb), "out-of-bounds neighbour {nb} of {cell}");
            assert_eq!(
                lattice.distance(cell, nb),
                1.0,
                "neighbour {nb} of {cell} not at distance 1"
            );
        }
    }
}

/// Assert that two calls to `canonical_ordering` return the same
/// sequence.
pub fn assert_canonical_ordering_deterministic(lattice: &dyn Lattice) {
    let a = lattice.canonical_ordering();
    let b = lattice.canonical_ordering();
    assert_eq!(a, b, "canonical_ordering is non-deterministic");
}

/// Assert that `canonical_ordering` returns exactly `cell_count`
/// unique, in-bounds cells.
pub fn assert_canonical_ordering_complete(lattice: &dyn Lattice) {
    let ordering = lattice.canonical_ordering();
    assert_eq!(
        ordering.len(),
        lattice.cell_count(),
        "canonical_ordering length ({}) != cell_count ({})",
        ordering.len(),
        lattice.cell_count()
    );
    let unique: IndexSet<_> = ordering.iter().collect();
    assert_eq!(
        unique.len(),
        lattice.cell_count(),
        "canonical_ordering has duplicates"
    );
    for cell in ordering {
        assert!(lattice.contains(cell), "canonical cell {cell} out of bounds");
    }
}

/// Assert that `contains` rejects cells just outside the extent.
pub fn assert_contains_rejects_outside(lattice: &dyn Lattice) {
    let rows = lattice.rows() as i32;
    let cols = lattice.cols() as i32;
    for cell in [
        Cell::at(-1, 0),
        Cell::at(0, -1),
        Cell::at(cols, 0),
        Cell::at(0, rows),
        Cell::new(0, 0, 1),
    ] {
        assert!(!lattice.contains(cell), "{cell} should be out of bounds");
    }
}

/// Run all compliance checks on a lattice.
pub fn run_full_compliance(lattice: &dyn Lattice) {
    assert_distance_reflexive(lattice);
    assert_distance_symmetric(lattice);
    assert_distance_triangle_inequality(lattice);
    assert_neighbours_symmetric(lattice);
    assert_neighbours_well_formed(lattice);
    assert_canonical_ordering_deterministic(lattice);
    assert_canonical_ordering_complete(lattice);
    assert_contains_rejects_outside(lattice);
}

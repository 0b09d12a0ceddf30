//! Topology trait compliance test helpers.
//!
//! These functions verify that a `Topology` implementation satisfies the
//! invariants required by the trait contract. Reused across every
//! `IvmGrid` configuration in the backend test module.
//!
//! Neighbour symmetry is not checked: raw IVM offsets are all
//! non-negative, so `b ∈ N(a)` only implies `a ∈ N(b)` up to a uniform
//! offset.

use crate::topology::Topology;
use indexmap::IndexSet;

/// Assert that `distance(a, a) == 0.0` for all cells.
pub fn assert_distance_reflexive(space: &dyn Topology) {
    for cell in space.canonical_ordering() {
        let d = space.distance(&cell, &cell);
        assert!(
            d.abs() < f64::EPSILON,
            "distance({cell}, {cell}) = {d}, expected 0.0"
        );
    }
}

/// Assert that `distance(a, b) == distance(b, a)` for all cell pairs.
pub fn assert_distance_symmetric(space: &dyn Topology) {
    let cells = space.canonical_ordering();
    for a in &cells {
        for b in &cells {
            let dab = space.distance(a, b);
            let dba = space.distance(b, a);
            assert!(
                (dab - dba).abs() < 1e-12,
                "distance({a}, {b}) = {dab} != distance({b}, {a}) = {dba}"
            );
        }
    }
}

/// Assert triangle inequality: `d(a, c) <= d(a, b) + d(b, c)` for all triples.
pub fn assert_distance_triangle_inequality(space: &dyn Topology) {
    let cells = space.canonical_ordering();
    for a in &cells {
        for b in &cells {
            let dab = space.distance(a, b);
            for c in &cells {
                let dac = space.distance(a, c);
                let dbc = space.distance(b, c);
                assert!(
                    dac <= dab + dbc + 1e-9,
                    "triangle inequality violated: d({a},{c})={dac} > d({a},{b})={dab} + d({b},{c})={dbc}"
                );
            }
        }
    }
}

/// Assert that every neighbour is itself a cell, and there are at most 12.
pub fn assert_neighbours_contained(space: &dyn Topology) {
    for cell in space.canonical_ordering() {
        let n = space.neighbours(&cell);
        assert!(n.len() <= 12, "{cell} has {} neighbours", n.len());
        for nb in n {
            assert!(space.contains(&nb), "neighbour {nb} of {cell} is not a cell");
        }
    }
}

/// Assert that `min_steps` never exceeds 1 for a single neighbour step.
pub fn assert_min_steps_admissible(space: &dyn Topology) {
    for cell in space.canonical_ordering() {
        assert_eq!(space.min_steps(&cell, &cell), 0, "min_steps({cell}, {cell})");
        for nb in space.neighbours(&cell) {
            let est = space.min_steps(&cell, &nb);
            assert!(est <= 1, "min_steps({cell}, {nb}) = {est} for a neighbour");
        }
    }
}

/// Assert that two calls to `canonical_ordering` return the same result.
pub fn assert_canonical_ordering_deterministic(space: &dyn Topology) {
    let a = space.canonical_ordering();
    let b = space.canonical_ordering();
    assert_eq!(a, b, "canonical_ordering is non-deterministic");
}

/// Assert that `canonical_ordering` returns exactly `cell_count` unique cells.
pub fn assert_canonical_ordering_complete(space: &dyn Topology) {
    let ordering = space.canonical_ordering();
    assert_eq!(
        ordering.len(),
        space.cell_count(),
        "canonical_ordering length ({}) != cell_count ({})",
        ordering.len(),
        space.cell_count()
    );
    let unique: IndexSet<[i32; 4]> = ordering.iter().filter_map(|c| c.to_cell()).collect();
    assert_eq!(
        unique.len(),
        space.cell_count(),
        "canonical_ordering has duplicates or non-integral cells"
    );
}

/// Assert that `canonical_rank` inverts `canonical_ordering`.
pub fn assert_canonical_rank_consistent(space: &dyn Topology) {
    for (i, cell) in space.canonical_ordering().iter().enumerate() {
        assert_eq!(space.canonical_rank(cell), Some(i), "rank({cell})");
        assert!(space.contains(cell), "{cell} in ordering but not contained");
    }
}

/// Run all 8 compliance checks on a topology.
pub fn run_full_compliance(space: &dyn Topology) {
    assert_distance_reflexive(space);
    assert_distance_symmetric(space);
    assert_distance_triangle_inequality(space);
    assert_neighbours_contained(space);
    assert_min_steps_admissible(space);
    assert_canonical_ordering_deterministic(space);
    assert_canonical_ordering_complete(space);
    assert_canonical_rank_consistent(space);
}

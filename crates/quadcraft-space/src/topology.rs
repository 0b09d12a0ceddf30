//! The `Topology` trait: the adjacency seam pathfinding is generic over.

use crate::grid::Neighbours;
use quadcraft_core::Quadray;

/// A finite set of grid cells with a fixed neighbour relation.
///
/// Pathfinding, flood fill and board adjacency queries all take a
/// `&impl Topology`, so a game can swap edge behaviour without touching
/// its search code. [`IvmGrid`](crate::IvmGrid) is the provided backend.
///
/// Cells are integral quadrays. Implementations decide whether aliases
/// (coordinates differing by a uniform offset) are distinct cells; callers
/// that key by [`QuadKey`](quadcraft_core::QuadKey) see them as one.
pub trait Topology {
    /// Edge length of the bounding box; every cell component is in `[0, size)`.
    fn size(&self) -> u32;

    /// Total number of cells.
    fn cell_count(&self) -> usize;

    /// Whether `cell` is one of this topology's cells.
    fn contains(&self, cell: &Quadray) -> bool;

    /// Neighbours of `cell`, in a deterministic backend-defined order.
    ///
    /// At most 12 entries. Cells outside the topology have no neighbours.
    fn neighbours(&self, cell: &Quadray) -> Neighbours;

    /// Largest neighbour count of any cell.
    ///
    /// The default scans every cell; backends should override.
    fn max_neighbour_degree(&self) -> usize {
        self.canonical_ordering()
            .iter()
            .map(|c| self.neighbours(c).len())
            .max()
            .unwrap_or(0)
    }

    /// Distance between two cells. Must be a metric over the cells.
    fn distance(&self, a: &Quadray, b: &Quadray) -> f64;

    /// Lower bound on the number of neighbour steps from `from` to `to`.
    ///
    /// Used as the A* heuristic, so it must never overestimate. The default
    /// of 0 is always admissible.
    fn min_steps(&self, from: &Quadray, to: &Quadray) -> u32 {
        let _ = (from, to);
        0
    }

    /// All cells in deterministic canonical order.
    ///
    /// Two calls on the same instance return the same sequence.
    fn canonical_ordering(&self) -> Vec<Quadray>;

    /// Position of `cell` in [`canonical_ordering`](Self::canonical_ordering).
    ///
    /// The default performs a linear search; backends should override with
    /// O(1) arithmetic.
    fn canonical_rank(&self, cell: &Quadray) -> Option<usize> {
        self.canonical_ordering().iter().position(|c| c == cell)
    }
}

//! Bounded IVM grid with 12-connected neighbourhood.
//!
//! The grid is the box of integer quadrays with every component in
//! `[0, size)`: `size⁴` raw cells, stored and ranked without normalization.
//! Coordinates that differ by a uniform offset (e.g. `(0,0,0,0)` and
//! `(1,1,1,1)`) are separate raw cells but the same physical point; the
//! `size⁴ − (size − 1)⁴` normalized ones are returned by
//! [`IvmGrid::distinct_points`].
//!
//! # Edge Behavior
//!
//! - **Absorb**: offsets that leave the box are dropped, giving
//!   [`bounded_neighbors`](crate::bounded_neighbors).
//! - **Wrap**: each component is taken modulo `size` (4-torus). For
//!   `size < 3` distinct offsets can land on the same cell.

use crate::directions::DIRECTIONS;
use crate::edge::EdgeBehavior;
use crate::error::GridError;
use crate::grid::{bounded_neighbors, generate_grid, ivm_hops, Neighbours};
use crate::topology::Topology;
use quadcraft_core::Quadray;
use std::collections::VecDeque;

/// A validated `size⁴` IVM grid.
///
/// Canonical ordering is `a`-major lexicographic, matching
/// [`generate_grid`], so [`canonical_rank`](Topology::canonical_rank) is
/// O(1) arithmetic.
///
/// Distance is the quadray length of the difference of the two normalized
/// cells (aliases are 0 apart) under Absorb, and the toroidal per-component
/// length under Wrap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IvmGrid {
    /// Edge length. Valid components: `0..size`.
    size: u32,
    /// Precomputed `size⁴`.
    cell_count: usize,
    edge: EdgeBehavior,
}

impl IvmGrid {
    /// Largest supported edge length.
    pub const MAX_SIZE: u32 = 256;

    /// Create a grid with edge length `size`.
    ///
    /// Returns `Err(GridError::EmptyGrid)` if `size` is 0 and
    /// `Err(GridError::SizeTooLarge)` if it exceeds [`MAX_SIZE`](Self::MAX_SIZE)
    /// or `size⁴` does not fit `usize`.
    pub fn new(size: u32, edge: EdgeBehavior) -> Result<Self, GridError> {
        if size == 0 {
            return Err(GridError::EmptyGrid);
        }
        let too_large = GridError::SizeTooLarge {
            size,
            max: Self::MAX_SIZE,
        };
        if size > Self::MAX_SIZE {
            return Err(too_large);
        }
        let cell_count = (size as usize).checked_pow(4).ok_or(too_large)?;
        Ok(Self {
            size,
            cell_count,
            edge,
        })
    }

    /// Edge behavior.
    pub fn edge_behavior(&self) -> EdgeBehavior {
        self.edge
    }

    /// Always returns `false`: construction rejects empty grids.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Check that `cell` is integral and inside the box; return its components.
    pub fn check_bounds(&self, cell: &Quadray) -> Result<[i32; 4], GridError> {
        let out_of_bounds = || GridError::CellOutOfBounds {
            cell: *cell,
            bounds: format!("integer components in [0, {})", self.size),
        };
        let parts = cell.to_cell().ok_or_else(out_of_bounds)?;
        if parts.iter().all(|&v| v >= 0 && (v as u32) < self.size) {
            Ok(parts)
        } else {
            Err(out_of_bounds())
        }
    }

    /// Inverse of [`canonical_rank`](Topology::canonical_rank).
    pub fn cell_at(&self, rank: usize) -> Option<Quadray> {
        if rank >= self.cell_count {
            return None;
        }
        let s = self.size as usize;
        let d = rank % s;
        let c = (rank / s) % s;
        let b = (rank / (s * s)) % s;
        let a = rank / (s * s * s);
        Some(Quadray::new(a as f64, b as f64, c as f64, d as f64))
    }

    /// The normalized cells (minimum component zero), in canonical order.
    ///
    /// These are the distinct physical points of the grid:
    /// `size⁴ − (size − 1)⁴` of them.
    pub fn distinct_points(&self) -> Vec<Quadray> {
        self.canonical_ordering()
            .into_iter()
            .filter(Quadray::is_normalized)
            .collect()
    }

    /// Every cell reachable from `center` in at most `radius` steps.
    ///
    /// Cells are normalized before being visited, so the ball holds distinct
    /// points only. The result is sorted by canonical rank and includes the
    /// (normalized) centre.
    pub fn disk(&self, center: &Quadray, radius: u32) -> Result<Vec<Quadray>, GridError> {
        self.check_bounds(center)?;
        let mut visited = vec![false; self.cell_count];
        let mut queue = VecDeque::new();
        let mut ranks = Vec::new();

        let start = center.normalized();
        if let Some(rank) = self.canonical_rank(&start) {
            visited[rank] = true;
            ranks.push(rank);
            queue.push_back((start, 0u32));
        }

        while let Some((here, dist)) = queue.pop_front() {
            if dist >= radius {
                continue;
            }
            for n in self.neighbours(&here) {
                let n = n.normalized();
                if let Some(rank) = self.canonical_rank(&n) {
                    if !visited[rank] {
                        visited[rank] = true;
                        ranks.push(rank);
                        queue.push_back((n, dist + 1));
                    }
                }
            }
        }

        ranks.sort_unstable();
        Ok(ranks.into_iter().filter_map(|r| self.cell_at(r)).collect())
    }
}

impl Topology for IvmGrid {
    fn size(&self) -> u32 {
        self.size
    }

    fn cell_count(&self) -> usize {
        self.cell_count
    }

    fn contains(&self, cell: &Quadray) -> bool {
        self.check_bounds(cell).is_ok()
    }

    fn neighbours(&self, cell: &Quadray) -> Neighbours {
        let Ok([a, b, c, d]) = self.check_bounds(cell) else {
            return Neighbours::new();
        };
        match self.edge {
            EdgeBehavior::Absorb => bounded_neighbors(a, b, c, d, self.size),
            EdgeBehavior::Wrap => {
                let n = self.size as i32;
                DIRECTIONS
                    .iter()
                    .map(|dir| {
                        Quadray::from_cell([
                            (a + dir[0]).rem_euclid(n),
                            (b + dir[1]).rem_euclid(n),
                            (c + dir[2]).rem_euclid(n),
                            (d + dir[3]).rem_euclid(n),
                        ])
                    })
                    .collect()
            }
        }
    }

    fn max_neighbour_degree(&self) -> usize {
        match self.edge {
            EdgeBehavior::Wrap => DIRECTIONS.len(),
            // Every offset has a component of 2, so interior cells need size >= 3.
            EdgeBehavior::Absorb if self.size >= 3 => DIRECTIONS.len(),
            EdgeBehavior::Absorb => 0,
        }
    }

    fn distance(&self, a: &Quadray, b: &Quadray) -> f64 {
        match self.edge {
            EdgeBehavior::Absorb => a.normalized().distance(&b.normalized()),
            EdgeBehavior::Wrap => {
                let len = f64::from(self.size);
                let sum: f64 = a
                    .components()
                    .iter()
                    .zip(b.components())
                    .map(|(x, y)| {
                        let diff = (x - y).abs();
                        let wrapped = diff.min(len - diff);
                        wrapped * wrapped
                    })
                    .sum();
                (sum / 2.0).sqrt()
            }
        }
    }

    fn min_steps(&self, from: &Quadray, to: &Quadray) -> u32 {
        match self.edge {
            // Wrap-around can beat the unbounded lattice distance.
            EdgeBehavior::Wrap => 0,
            EdgeBehavior::Absorb => ivm_hops(from, to).unwrap_or(0),
        }
    }

    fn canonical_ordering(&self) -> Vec<Quadray> {
        let out = generate_grid(self.size);
        debug_assert_eq!(out.len(), self.cell_count);
        out
    }

    fn canonical_rank(&self, cell: &Quadray) -> Option<usize> {
        let [a, b, c, d] = self.check_bounds(cell).ok()?;
        let s = self.size as usize;
        let [a, b, c, d] = [a, b, c, d].map(|v| v as usize);
        Some(((a * s + b) * s + c) * s + d)
    }
}

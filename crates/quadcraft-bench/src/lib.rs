//! Benchmark fixtures for the QuadCraft grid engine.
//!
//! - [`bench_grid`]: a validated Absorb grid of the given size
//! - [`scattered_walls`]: deterministic obstacle placement via seed
//! - [`cell_pairs`]: deterministic start/goal pairs via seed

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use quadcraft_core::{QuadKey, Quadray};
use quadcraft_space::{random_cell, EdgeBehavior, GridError, IvmGrid};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::collections::HashSet;

/// Absorb grid with edge length `size`.
pub fn bench_grid(size: u32) -> Result<IvmGrid, GridError> {
    IvmGrid::new(size, EdgeBehavior::Absorb)
}

/// Block roughly `density` of the grid's raw cells, never the origin.
///
/// Same `seed` gives the same walls.
pub fn scattered_walls(size: u32, density: f64, seed: u64) -> HashSet<QuadKey> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let target = (f64::from(size).powi(4) * density.clamp(0.0, 1.0)) as usize;
    let origin = Quadray::ORIGIN.to_key();
    (0..target)
        .filter_map(|_| random_cell(size, &mut rng))
        .map(|c| c.to_key())
        .filter(|k| *k != origin)
        .collect()
}

/// `count` deterministic `(start, goal)` pairs inside a `size` grid.
pub fn cell_pairs(size: u32, count: usize, seed: u64) -> Vec<(Quadray, Quadray)> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count)
        .filter_map(|_| Some((random_cell(size, &mut rng)?, random_cell(size, &mut rng)?)))
        .collect()
}

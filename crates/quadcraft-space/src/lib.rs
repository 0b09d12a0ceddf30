//! Grid topology for the QuadCraft tetrahedral grid engine.
//!
//! Every per-game adjacency query (capture rules, flood fill, liberties,
//! mine counting) routes through this crate so that "adjacent" means the
//! same thing everywhere: the twelve [`DIRECTIONS`] of the Isotropic Vector
//! Matrix.
//!
//! # Layers
//!
//! - Free functions over integer components ([`generate_grid`],
//!   [`neighbors`], [`bounded_neighbors`], [`cell_type`], [`key`], ...)
//!   for callers that only hold a grid size.
//! - The [`Topology`] trait and its [`IvmGrid`] backend, a validated grid
//!   with O(1) canonical ranking that pathfinding is generic over.
//! - [`shuffle`] / [`shuffle_with`], the engine's only use of randomness.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod directions;
pub mod edge;
pub mod error;
pub mod grid;
pub mod ivm_grid;
pub mod shuffle;
pub mod topology;

#[cfg(test)]
pub(crate) mod compliance;

pub use directions::{CellType, DIRECTIONS};
pub use edge::EdgeBehavior;
pub use error::GridError;
pub use grid::{
    bounded_neighbors, cell_type, generate_grid, in_bounds, is_interior, ivm_hops, key, neighbors,
    random_cell, Neighbours,
};
pub use ivm_grid::IvmGrid;
pub use shuffle::{shuffle, shuffle_with};
pub use topology::Topology;

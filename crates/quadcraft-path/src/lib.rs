//! Pathfinding over the QuadCraft IVM adjacency graph.
//!
//! Every search here walks the neighbour relation of a
//! [`Topology`](quadcraft_space::Topology) and prunes it with a
//! caller-supplied walkability predicate (`FnMut(&Quadray) -> bool`).
//!
//! # Conventions
//!
//! - Cells are normalized before they are keyed, enqueued or returned, so
//!   aliases such as `(0,0,0,0)` and `(1,1,1,1)` are one node.
//! - The start cell is never tested against the predicate: it is the
//!   mover's own cell. Every other cell, the goal included, is.
//! - A start or goal outside the topology yields `None` (or an empty
//!   result), never an error.
//! - Each cell is tested against the predicate at most once per search.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod astar;
pub mod bfs;
pub mod flood;
pub mod sight;

pub use astar::astar;
pub use bfs::{bfs, bfs_in};
pub use flood::{flood_fill, reachable_within};
pub use sight::line_of_sight;

use quadcraft_core::{QuadKey, Quadray};
use std::collections::HashMap;

/// Walk `came_from` back from `goal` to `start` and return the path in
/// travel order.
pub(crate) fn reconstruct(
    came_from: &HashMap<QuadKey, QuadKey>,
    start: QuadKey,
    goal: QuadKey,
) -> Vec<Quadray> {
    let mut path = vec![goal.to_quadray()];
    let mut here = goal;
    while here != start {
        match came_from.get(&here) {
            Some(&prev) => {
                path.push(prev.to_quadray());
                here = prev;
            }
            None => break,
        }
    }
    path.reverse();
    path
}

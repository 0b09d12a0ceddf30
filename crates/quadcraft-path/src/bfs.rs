//! Unweighted shortest path by breadth-first search.

use crate::reconstruct;
use quadcraft_core::{QuadKey, Quadray};
use quadcraft_space::{EdgeBehavior, IvmGrid, Topology};
use std::collections::{HashMap, HashSet, VecDeque};

/// Shortest walkable path on the bounded `size⁴` grid.
///
/// Edges are [`bounded_neighbors`](quadcraft_space::bounded_neighbors).
/// Returns the path from `start` to `goal` inclusive, with the minimum
/// number of steps, or `None` if the goal is unreachable, either endpoint
/// is out of bounds, or `size` is not a valid grid size.
///
/// # Examples
///
/// ```
/// use quadcraft_core::Quadray;
/// use quadcraft_path::bfs;
///
/// let start = Quadray::ORIGIN;
/// let goal = Quadray::new(0.0, 0.0, 2.0, 2.0);
/// let path = bfs(&start, &goal, |_| true, 4).unwrap();
/// assert_eq!(path.len(), 3);
/// assert_eq!(bfs(&start, &start, |_| true, 4), Some(vec![start]));
/// assert_eq!(bfs(&start, &goal, |_| false, 4), None);
/// ```
pub fn bfs<F>(start: &Quadray, goal: &Quadray, is_walkable: F, size: u32) -> Option<Vec<Quadray>>
where
    F: FnMut(&Quadray) -> bool,
{
    let grid = IvmGrid::new(size, EdgeBehavior::Absorb).ok()?;
    bfs_in(&grid, start, goal, is_walkable)
}

/// Shortest walkable path over any [`Topology`].
///
/// Visits each cell at most once (visited set keyed by [`QuadKey`]), so it
/// terminates after at most `cell_count` expansions.
pub fn bfs_in<T, F>(
    topology: &T,
    start: &Quadray,
    goal: &Quadray,
    mut is_walkable: F,
) -> Option<Vec<Quadray>>
where
    T: Topology + ?Sized,
    F: FnMut(&Quadray) -> bool,
{
    if !topology.contains(start) || !topology.contains(goal) {
        return None;
    }
    let start = start.normalized();
    let start_key = start.to_key();
    let goal_key = goal.to_key();
    if start_key == goal_key {
        return Some(vec![start]);
    }

    let mut visited: HashSet<QuadKey> = HashSet::from([start_key]);
    let mut came_from: HashMap<QuadKey, QuadKey> = HashMap::new();
    let mut queue = VecDeque::from([start]);

    while let Some(here) = queue.pop_front() {
        let here_key = here.to_key();
        for next in topology.neighbours(&here) {
            let next = next.normalized();
            let next_key = next.to_key();
            if !visited.insert(next_key) || !is_walkable(&next) {
                continue;
            }
            came_from.insert(next_key, here_key);
            if next_key == goal_key {
                return Some(reconstruct(&came_from, start_key, goal_key));
            }
            queue.push_back(next);
        }
    }
    None
}

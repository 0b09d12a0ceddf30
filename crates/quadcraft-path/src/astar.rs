//! A* search guided by the topology's step lower bound.

use crate::reconstruct;
use quadcraft_core::{QuadKey, Quadray};
use quadcraft_space::Topology;
use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap, HashSet};

/// Shortest walkable path using A*.
///
/// Same contract as [`bfs_in`](crate::bfs_in) and always returns a path of
/// the same length; the heuristic is
/// [`Topology::min_steps`], which for an Absorb
/// [`IvmGrid`](quadcraft_space::IvmGrid) is the closed-form lattice hop
/// count. With an admissible and consistent heuristic each cell is expanded
/// at most once.
pub fn astar<T, F>(
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
    let goal = goal.normalized();
    let start_key = start.to_key();
    let goal_key = goal.to_key();

    let mut open = BinaryHeap::new();
    let mut best: HashMap<QuadKey, u32> = HashMap::from([(start_key, 0)]);
    let mut came_from: HashMap<QuadKey, QuadKey> = HashMap::new();
    let mut closed: HashSet<QuadKey> = HashSet::new();
    let mut blocked: HashSet<QuadKey> = HashSet::new();

    // Ties on f are broken by lower g, then by key, for a deterministic order.
    open.push(Reverse((topology.min_steps(&start, &goal), 0u32, start_key)));

    while let Some(Reverse((_, cost, key))) = open.pop() {
        if key == goal_key {
            return Some(reconstruct(&came_from, start_key, goal_key));
        }
        if !closed.insert(key) {
            continue;
        }
        let here = key.to_quadray();
        for next in topology.neighbours(&here) {
            let next = next.normalized();
            let next_key = next.to_key();
            if closed.contains(&next_key) || blocked.contains(&next_key) {
                continue;
            }
            if !best.contains_key(&next_key) && !is_walkable(&next) {
                blocked.insert(next_key);
                continue;
            }
            let tentative = cost + 1;
            if best.get(&next_key).is_none_or(|&known| tentative < known) {
                best.insert(next_key, tentative);
                came_from.insert(next_key, key);
                let f = tentative + topology.min_steps(&next, &goal);
                open.push(Reverse((f, tentative, next_key)));
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bfs_in;
    use quadcraft_space::{EdgeBehavior, IvmGrid};

    fn q(a: i32, b: i32, c: i32, d: i32) -> Quadray {
        Quadray::from_cell([a, b, c, d])
    }

    fn grid(size: u32) -> IvmGrid {
        IvmGrid::new(size, EdgeBehavior::Absorb).unwrap()
    }

    #[test]
    fn trivial_and_blocked() {
        let g = grid(4);
        assert_eq!(astar(&g, &q(0, 0, 0, 0), &q(1, 1, 1, 1), |_| false), Some(vec![q(0, 0, 0, 0)]));
        assert_eq!(astar(&g, &q(0, 0, 0, 0), &q(0, 1, 1, 2), |_| false), None);
        assert_eq!(astar(&g, &q(0, 0, 0, 0), &q(0, 0, 0, 4), |_| true), None);
    }

    #[test]
    fn matches_known_two_step_path_length() {
        let g = grid(4);
        let path = astar(&g, &q(0, 0, 0, 0), &q(0, 0, 2, 2), |_| true).unwrap();
        assert_eq!(path.len(), 3);
        assert_eq!(path[0], q(0, 0, 0, 0));
        assert_eq!(path[2], q(0, 0, 2, 2));
    }

    #[test]
    fn detour_matches_bfs() {
        let wall = [q(0, 1, 1, 2), q(0, 1, 2, 1), q(1, 0, 1, 2), q(1, 0, 2, 1)];
        let g = grid(5);
        let open = |c: &Quadray| !wall.contains(c);
        let a = astar(&g, &q(0, 0, 0, 0), &q(0, 0, 2, 2), open).unwrap();
        let b = bfs_in(&g, &q(0, 0, 0, 0), &q(0, 0, 2, 2), open).unwrap();
        assert_eq!(a.len(), b.len());
        assert_eq!(a.len(), 5);
        assert!(a.iter().all(|c| open(c)));
    }

    #[test]
    fn works_without_heuristic() {
        // Wrap grids report a zero lower bound; A* degrades to uniform cost.
        let g = IvmGrid::new(3, EdgeBehavior::Wrap).unwrap();
        let a = astar(&g, &q(0, 0, 0, 2), &q(0, 1, 1, 1), |_| true).unwrap();
        assert_eq!(a.len(), 2);
    }
}

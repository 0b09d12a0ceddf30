//! Connected-region exploration.

use quadcraft_core::{QuadKey, Quadray};
use quadcraft_space::Topology;
use std::collections::{HashSet, VecDeque};

/// Every cell connected to `start` through walkable cells, in BFS order.
///
/// Includes the (normalized) start. Empty when `start` is outside the
/// topology.
pub fn flood_fill<T, F>(topology: &T, start: &Quadray, is_walkable: F) -> Vec<Quadray>
where
    T: Topology + ?Sized,
    F: FnMut(&Quadray) -> bool,
{
    explore(topology, start, None, is_walkable)
        .into_iter()
        .map(|(cell, _)| cell)
        .collect()
}

/// Cells reachable from `start` in at most `max_steps` steps, with their
/// step counts, in BFS order (so counts are non-decreasing).
///
/// `max_steps == 0` yields only the start.
pub fn reachable_within<T, F>(
    topology: &T,
    start: &Quadray,
    max_steps: u32,
    is_walkable: F,
) -> Vec<(Quadray, u32)>
where
    T: Topology + ?Sized,
    F: FnMut(&Quadray) -> bool,
{
    explore(topology, start, Some(max_steps), is_walkable)
}

fn explore<T, F>(
    topology: &T,
    start: &Quadray,
    limit: Option<u32>,
    mut is_walkable: F,
) -> Vec<(Quadray, u32)>
where
    T: Topology + ?Sized,
    F: FnMut(&Quadray) -> bool,
{
    if !topology.contains(start) {
        return Vec::new();
    }
    let start = start.normalized();
    let mut visited: HashSet<QuadKey> = HashSet::from([start.to_key()]);
    let mut queue = VecDeque::from([(start, 0u32)]);
    let mut out = vec![(start, 0)];

    while let Some((here, steps)) = queue.pop_front() {
        if limit.is_some_and(|max| steps >= max) {
            continue;
        }
        for next in topology.neighbours(&here) {
            let next = next.normalized();
            if !visited.insert(next.to_key()) || !is_walkable(&next) {
                continue;
            }
            out.push((next, steps + 1));
            queue.push_back((next, steps + 1));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use quadcraft_space::{EdgeBehavior, IvmGrid};

    fn q(a: i32, b: i32, c: i32, d: i32) -> Quadray {
        Quadray::from_cell([a, b, c, d])
    }

    #[test]
    fn flood_covers_component() {
        let g = IvmGrid::new(4, EdgeBehavior::Absorb).unwrap();
        let region = flood_fill(&g, &q(0, 0, 0, 0), |_| true);
        assert_eq!(region.len(), 31);
        assert_eq!(region[0], q(0, 0, 0, 0));

        let flooded: HashSet<QuadKey> = region.iter().map(Quadray::to_key).collect();
        let disk = g.disk(&q(0, 0, 0, 0), u32::MAX).unwrap();
        let ball: HashSet<QuadKey> = disk.iter().map(Quadray::to_key).collect();
        assert_eq!(flooded, ball);
    }

    #[test]
    fn flood_blocked_is_start_only() {
        let g = IvmGrid::new(4, EdgeBehavior::Absorb).unwrap();
        assert_eq!(flood_fill(&g, &q(1, 1, 1, 1), |_| false), vec![q(0, 0, 0, 0)]);
        assert!(flood_fill(&g, &q(4, 0, 0, 0), |_| true).is_empty());
    }

    #[test]
    fn reachable_within_counts_steps() {
        let g = IvmGrid::new(4, EdgeBehavior::Absorb).unwrap();
        assert_eq!(reachable_within(&g, &q(0, 0, 0, 0), 0, |_| true), vec![(q(0, 0, 0, 0), 0)]);

        let one = reachable_within(&g, &q(0, 0, 0, 0), 1, |_| true);
        assert_eq!(one.len(), 13);
        assert!(one[1..].iter().all(|&(_, s)| s == 1));

        let all = reachable_within(&g, &q(0, 0, 0, 0), u32::MAX, |_| true);
        assert_eq!(all.len(), 31);
        assert!(all.windows(2).all(|w| w[0].1 <= w[1].1));
    }
}

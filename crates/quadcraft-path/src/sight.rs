//! Line of sight by sampling the straight segment between two cells.

use quadcraft_core::Quadray;
use quadcraft_space::ivm_hops;

/// Whether every cell strictly between `from` and `to` is transparent.
///
/// The segment is sampled at `ivm_hops(from, to)` evenly spaced points
/// (falling back to the rounded-up quadray distance when the endpoints are
/// not lattice-connected), each rounded to the nearest integral quadray.
/// Samples that round onto either endpoint are skipped, so the endpoints
/// themselves are never tested. Adjacent and identical cells always see
/// each other.
///
/// # Examples
///
/// ```
/// use quadcraft_core::Quadray;
/// use quadcraft_path::line_of_sight;
///
/// let from = Quadray::ORIGIN;
/// let to = Quadray::new(0.0, 0.0, 2.0, 2.0);
/// let pillar = Quadray::new(0.0, 0.0, 1.0, 1.0);
/// assert!(line_of_sight(&from, &to, |_| true));
/// assert!(!line_of_sight(&from, &to, |c| *c != pillar));
/// ```
pub fn line_of_sight<F>(from: &Quadray, to: &Quadray, mut is_transparent: F) -> bool
where
    F: FnMut(&Quadray) -> bool,
{
    let from = from.normalized();
    let to = to.normalized();
    let (from_key, to_key) = (from.to_key(), to.to_key());
    let steps = ivm_hops(&from, &to).unwrap_or_else(|| from.distance(&to).ceil() as u32);
    if steps < 2 {
        return true;
    }

    let delta = to - from;
    for i in 1..steps {
        let t = f64::from(i) / f64::from(steps);
        let point = from + delta * t;
        let sample = Quadray::from_components(point.components().map(f64::round)).normalized();
        let key = sample.to_key();
        if key == from_key || key == to_key {
            continue;
        }
        if !is_transparent(&sample) {
            return false;
        }
    }
    true
}

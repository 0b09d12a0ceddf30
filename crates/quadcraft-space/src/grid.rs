//! Free-function grid topology over integer components.
//!
//! These mirror the per-game utility surface: callers that only know a grid
//! `size` can enumerate cells, neighbours and keys without building an
//! [`IvmGrid`](crate::IvmGrid). A cell is *in bounds* when every raw
//! component lies in `[0, size)`.

use crate::directions::{CellType, DIRECTIONS};
use quadcraft_core::{QuadKey, Quadray};
use rand::Rng;
use smallvec::SmallVec;

/// Neighbour list returned by bounded queries. Never exceeds 12 entries, so
/// it stays on the stack.
pub type Neighbours = SmallVec<[Quadray; 12]>;

/// Every integer cell with all four components in `[0, size)`.
///
/// Order is lexicographic with `a` most significant:
/// `(0,0,0,0), (0,0,0,1), ..., (size−1, size−1, size−1, size−1)`.
/// Cardinality is `size⁴`; `generate_grid(0)` is empty.
///
/// # Examples
///
/// ```
/// use quadcraft_space::generate_grid;
///
/// let cells = generate_grid(3);
/// assert_eq!(cells.len(), 81);
/// ```
pub fn generate_grid(size: u32) -> Vec<Quadray> {
    let n = size as usize;
    let mut out = Vec::with_capacity(n.saturating_mul(n).saturating_mul(n).saturating_mul(n));
    for a in 0..size {
        for b in 0..size {
            for c in 0..size {
                for d in 0..size {
                    out.push(Quadray::new(
                        f64::from(a),
                        f64::from(b),
                        f64::from(c),
                        f64::from(d),
                    ));
                }
            }
        }
    }
    out
}

/// The cell plus each of the 12 [`DIRECTIONS`], unfiltered.
///
/// Results are not normalized and may fall outside any grid.
pub fn neighbors(a: i32, b: i32, c: i32, d: i32) -> [Quadray; 12] {
    let base = [a, b, c, d].map(f64::from);
    DIRECTIONS.map(|dir| {
        Quadray::new(
            base[0] + f64::from(dir[0]),
            base[1] + f64::from(dir[1]),
            base[2] + f64::from(dir[2]),
            base[3] + f64::from(dir[3]),
        )
    })
}

/// [`neighbors`] restricted to cells with every component in `[0, size)`.
///
/// Boundary cells get fewer than 12; [`is_interior`] cells get exactly 12.
/// Order follows [`DIRECTIONS`].
pub fn bounded_neighbors(a: i32, b: i32, c: i32, d: i32, size: u32) -> Neighbours {
    let limit = i64::from(size);
    let base = [a, b, c, d].map(i64::from);
    let mut out = Neighbours::new();
    for dir in DIRECTIONS {
        let cell = [
            base[0] + i64::from(dir[0]),
            base[1] + i64::from(dir[1]),
            base[2] + i64::from(dir[2]),
            base[3] + i64::from(dir[3]),
        ];
        if cell.iter().all(|&v| (0..limit).contains(&v)) {
            out.push(Quadray::new(
                cell[0] as f64,
                cell[1] as f64,
                cell[2] as f64,
                cell[3] as f64,
            ));
        }
    }
    out
}

/// Whether every component lies in `[0, size)`.
pub fn in_bounds(a: i32, b: i32, c: i32, d: i32, size: u32) -> bool {
    [a, b, c, d]
        .iter()
        .all(|&v| v >= 0 && (v as u32) < size)
}

/// Whether all 12 neighbours stay in bounds: every component in
/// `[0, size − 2)`.
pub fn is_interior(a: i32, b: i32, c: i32, d: i32, size: u32) -> bool {
    [a, b, c, d]
        .iter()
        .all(|&v| v >= 0 && u64::from(v as u32) + 2 < u64::from(size))
}

/// Sublattice classification by component-sum parity.
pub fn cell_type(a: i32, b: i32, c: i32, d: i32) -> CellType {
    CellType::of(a, b, c, d)
}

/// Canonical key of an integer cell; identical to [`Quadray::to_key`].
pub fn key(a: i32, b: i32, c: i32, d: i32) -> QuadKey {
    Quadray::from_cell([a, b, c, d]).to_key()
}

/// A uniformly random in-bounds cell, or `None` when `size` is 0.
pub fn random_cell<R: Rng>(size: u32, rng: &mut R) -> Option<Quadray> {
    if size == 0 {
        return None;
    }
    let mut draw = || f64::from(rng.random_range(0..size));
    Some(Quadray::new(draw(), draw(), draw(), draw()))
}

/// Closed-form hop count between two integral quadrays on the unbounded
/// lattice.
///
/// Returns `None` if either point is not integral or if the two points lie
/// in different connectivity classes (no sequence of [`DIRECTIONS`] steps
/// joins them). Uniform offsets are ignored, so aliases are 0 hops apart.
///
/// In Cartesian half-units every step is an FCC move `(±1, ±1, 0)`, so the
/// count is `max(|x|, |y|, |z|, (|x| + |y| + |z|) / 2)`.
///
/// # Examples
///
/// ```
/// use quadcraft_core::Quadray;
/// use quadcraft_space::ivm_hops;
///
/// let origin = Quadray::ORIGIN;
/// assert_eq!(ivm_hops(&origin, &Quadray::new(0.0, 1.0, 1.0, 2.0)), Some(1));
/// assert_eq!(ivm_hops(&origin, &Quadray::new(0.0, 0.0, 2.0, 2.0)), Some(2));
/// assert_eq!(ivm_hops(&origin, &Quadray::new(1.0, 1.0, 0.0, 0.0)), None);
/// ```
pub fn ivm_hops(p: &Quadray, q: &Quadray) -> Option<u32> {
    let p = p.to_cell()?;
    let q = q.to_cell()?;
    let [da, db, dc, dd] = [0, 1, 2, 3].map(|i| i64::from(p[i]) - i64::from(q[i]));

    // Cartesian displacement scaled by √2.
    let x2 = da - db - dc + dd;
    let y2 = da - db + dc - dd;
    let z2 = da + db - dc - dd;
    if x2 % 2 != 0 || y2 % 2 != 0 || z2 % 2 != 0 {
        return None;
    }
    let (x, y, z) = (x2 / 2, y2 / 2, z2 / 2);
    // FCC sites have even coordinate sum.
    if (x + y + z) % 2 != 0 {
        return None;
    }
    let (x, y, z) = (x.unsigned_abs(), y.unsigned_abs(), z.unsigned_abs());
    let hops = x.max(y).max(z).max((x + y + z) / 2);
    u32::try_from(hops).ok()
}

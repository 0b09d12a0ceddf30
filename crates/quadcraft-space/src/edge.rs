//! Grid edge (boundary) behavior.

use serde::{Deserialize, Serialize};

/// How an [`IvmGrid`](crate::IvmGrid) handles neighbours past its edges.
///
/// There is no clamp mode: clamping one component of a `{0,1,1,2}` offset
/// produces a cell that is not one lattice step away.
///
/// # Examples
///
/// ```
/// use quadcraft_core::Quadray;
/// use quadcraft_space::{EdgeBehavior, IvmGrid, Topology};
///
/// // Absorb: a corner keeps only the offsets that stay inside.
/// let absorb = IvmGrid::new(3, EdgeBehavior::Absorb).unwrap();
/// let corner = Quadray::new(2.0, 2.0, 2.0, 0.0);
/// assert_eq!(absorb.neighbours(&corner).len(), 0);
///
/// // Wrap: every cell has all 12 neighbours (4-torus).
/// let wrap = IvmGrid::new(3, EdgeBehavior::Wrap).unwrap();
/// assert_eq!(wrap.neighbours(&corner).len(), 12);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EdgeBehavior {
    /// Out-of-range neighbours are omitted (fewer neighbours at edges).
    #[default]
    Absorb,
    /// Each component wraps modulo the grid size (periodic).
    Wrap,
}

//! The twelve IVM neighbour directions and the two-sublattice cell classification.

use serde::{Deserialize, Serialize};

/// All 12 neighbour offsets: the permutations of `{0, 1, 1, 2}`, in
/// lexicographic order.
///
/// Each offset is a unit lattice step `(−1, 0, 0, 1)`-style displacement
/// shifted by `(1, 1, 1, 1)` so that every component is non-negative. The
/// uniform shift names the same physical displacement, so adding an offset
/// to a cell moves it exactly one sphere-diameter in Cartesian space.
pub const DIRECTIONS: [[i32; 4]; 12] = [
    [0, 1, 1, 2],
    [0, 1, 2, 1],
    [0, 2, 1, 1],
    [1, 0, 1, 2],
    [1, 0, 2, 1],
    [1, 1, 0, 2],
    [1, 1, 2, 0],
    [1, 2, 0, 1],
    [1, 2, 1, 0],
    [2, 0, 1, 1],
    [2, 1, 0, 1],
    [2, 1, 1, 0],
];

/// Sublattice of a grid cell, by the parity of its component sum.
///
/// The two classes interleave: [`Tetra`](Self::Tetra) cells have an even
/// component sum, [`Octa`](Self::Octa) cells an odd one. Games use this to
/// vary piece shape or behaviour by cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellType {
    /// Even `a + b + c + d`.
    Tetra,
    /// Odd `a + b + c + d`.
    Octa,
}

impl CellType {
    /// Classify a cell by the parity of its component sum.
    pub fn of(a: i32, b: i32, c: i32, d: i32) -> Self {
        let sum = i64::from(a) + i64::from(b) + i64::from(c) + i64::from(d);
        if sum.rem_euclid(2) == 0 {
            Self::Tetra
        } else {
            Self::Octa
        }
    }

    /// The other class.
    pub fn opposite(self) -> Self {
        match self {
            Self::Tetra => Self::Octa,
            Self::Octa => Self::Tetra,
        }
    }
}

//! Error types for grid construction.

use quadcraft_core::Quadray;
use std::fmt;

/// Errors arising from grid construction or bounds-checked lookups.
///
/// Neighbour and key operations never fail; out-of-range cells there are
/// ordinary control flow (`Option` / `bool`). Only constructors and the
/// explicit [`IvmGrid::check_bounds`](crate::IvmGrid::check_bounds) return
/// this type.
#[derive(Clone, Debug, PartialEq)]
pub enum GridError {
    /// A cell is outside the grid or not an integral coordinate.
    CellOutOfBounds {
        /// The offending cell.
        cell: Quadray,
        /// Human-readable description of the valid range.
        bounds: String,
    },
    /// Attempted to construct a grid with zero cells.
    EmptyGrid,
    /// The grid edge is too large (`size⁴` must fit the cell index).
    SizeTooLarge {
        /// The requested edge length.
        size: u32,
        /// The largest supported edge length.
        max: u32,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CellOutOfBounds { cell, bounds } => {
                write!(f, "cell {cell} out of bounds: {bounds}")
            }
            Self::EmptyGrid => write!(f, "grid must have at least one cell"),
            Self::SizeTooLarge { size, max } => {
                write!(f, "grid size {size} exceeds maximum {max}")
            }
        }
    }
}

impl std::error::Error for GridError {}

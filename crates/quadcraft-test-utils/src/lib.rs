//! Test fixtures for QuadCraft development.
//!
//! Provides walkability predicates ([`always_walkable`],
//! [`never_walkable`], [`Walls`]), grid shorthands, and a reference
//! [`TokenBoard`] implementing the [`Board`](quadcraft_board::Board)
//! contract for integration tests.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{Token, TokenBoard, TokenMetadata};

use std::collections::HashSet;

use quadcraft_core::{QuadKey, Quadray};
use quadcraft_space::{EdgeBehavior, IvmGrid};

/// Predicate that accepts every cell.
pub fn always_walkable(_: &Quadray) -> bool {
    true
}

/// Predicate that rejects every cell.
pub fn never_walkable(_: &Quadray) -> bool {
    false
}

/// Absorb-edged grid of the given size.
///
/// Panics on an invalid size; fixtures only.
pub fn absorb_grid(size: u32) -> IvmGrid {
    IvmGrid::new(size, EdgeBehavior::Absorb).expect("fixture grid size must be valid")
}

/// Wrap-edged grid of the given size.
pub fn wrap_grid(size: u32) -> IvmGrid {
    IvmGrid::new(size, EdgeBehavior::Wrap).expect("fixture grid size must be valid")
}

/// A set of blocked cells, keyed canonically.
///
/// Use [`is_open`](Walls::is_open) as a walkability predicate:
/// `|c| walls.is_open(c)`.
#[derive(Clone, Debug, Default)]
pub struct Walls {
    blocked: HashSet<QuadKey>,
}

impl Walls {
    pub fn new(cells: impl IntoIterator<Item = Quadray>) -> Self {
        Self {
            blocked: cells.into_iter().map(|c| c.to_key()).collect(),
        }
    }

    pub fn block(&mut self, cell: &Quadray) {
        self.blocked.insert(cell.to_key());
    }

    pub fn contains(&self, cell: &Quadray) -> bool {
        self.blocked.contains(&cell.to_key())
    }

    pub fn is_open(&self, cell: &Quadray) -> bool {
        !self.contains(cell)
    }

    pub fn len(&self) -> usize {
        self.blocked.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocked.is_empty()
    }
}

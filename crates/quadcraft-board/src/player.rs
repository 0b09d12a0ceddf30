//! Player identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies a player seat at the board.
///
/// Seats are numbered from 0 in turn order. Games with richer player
/// identities (colours, names) can use their own type with
/// [`TurnManager`](crate::TurnManager) instead.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u32);

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for PlayerId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

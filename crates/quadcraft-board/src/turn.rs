//! Cyclic turn rotation with undo/redo.

use crate::player::PlayerId;
use std::collections::VecDeque;
use std::error::Error;
use std::fmt;

/// Errors from turn manager construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TurnError {
    /// The player list was empty.
    NoPlayers,
}

impl fmt::Display for TurnError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoPlayers => write!(f, "turn order needs at least one player"),
        }
    }
}

impl Error for TurnError {}

/// Ordered player rotation.
///
/// # State machine
///
/// States are the cursor positions `0..N`; the initial state is 0 and
/// [`next_turn`](Self::next_turn) moves to `(i + 1) % N`. There is no
/// terminal state: ending a game is the board's game-over flag, not the
/// turn manager's concern. The cursor is always a valid index.
///
/// Every advance is recorded, so [`undo`](Self::undo) steps back to the
/// previous seat and [`redo`](Self::redo) replays an undone advance. A
/// fresh `next_turn` discards the redo history. Only the most recent
/// [`HISTORY_LIMIT`](Self::HISTORY_LIMIT) advances can be undone.
///
/// # Examples
///
/// ```
/// use quadcraft_board::{PlayerId, TurnManager};
///
/// let mut turns = TurnManager::new(vec![PlayerId(0), PlayerId(1)]).unwrap();
/// assert_eq!(*turns.next_turn(), PlayerId(1));
/// assert_eq!(*turns.next_turn(), PlayerId(0));
/// assert!(turns.undo());
/// assert_eq!(*turns.current_player(), PlayerId(1));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TurnManager<P = PlayerId> {
    players: Vec<P>,
    current: usize,
    /// Advances since construction or the last reset, net of undos.
    turn: u64,
    /// Cursor positions before each advance, most recent last.
    undo_stack: VecDeque<usize>,
    /// Cursor positions undone, most recent last.
    redo_stack: Vec<usize>,
}

impl<P> TurnManager<P> {
    /// Number of advances kept for undo.
    pub const HISTORY_LIMIT: usize = 256;

    /// Create a rotation over `players`, starting with the first.
    pub fn new(players: Vec<P>) -> Result<Self, TurnError> {
        if players.is_empty() {
            return Err(TurnError::NoPlayers);
        }
        Ok(Self {
            players,
            current: 0,
            turn: 0,
            undo_stack: VecDeque::new(),
            redo_stack: Vec::new(),
        })
    }

    /// The player whose turn it is.
    pub fn current_player(&self) -> &P {
        &self.players[self.current]
    }

    /// Cursor position in `0..player_count()`.
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// All players in turn order.
    pub fn players(&self) -> &[P] {
        &self.players
    }

    /// Number of players (never zero).
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Number of advances since construction or [`reset`](Self::reset).
    pub fn turn_number(&self) -> u64 {
        self.turn
    }

    /// Advance to the next player, cyclically. Returns the new current player.
    pub fn next_turn(&mut self) -> &P {
        self.push_undo(self.current);
        self.redo_stack.clear();
        self.current = (self.current + 1) % self.players.len();
        self.turn += 1;
        self.current_player()
    }

    /// Whether there is an advance to undo.
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Whether there is an undone advance to replay.
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Step back to the previous player. Returns `false` if there is nothing
    /// to undo.
    pub fn undo(&mut self) -> bool {
        let Some(prev) = self.undo_stack.pop_back() else {
            return false;
        };
        self.redo_stack.push(self.current);
        self.current = prev;
        self.turn -= 1;
        true
    }

    /// Replay the most recently undone advance. Returns `false` if there is
    /// nothing to redo.
    pub fn redo(&mut self) -> bool {
        let Some(next) = self.redo_stack.pop() else {
            return false;
        };
        self.push_undo(self.current);
        self.current = next;
        self.turn += 1;
        true
    }

    fn push_undo(&mut self, index: usize) {
        if self.undo_stack.len() == Self::HISTORY_LIMIT {
            self.undo_stack.pop_front();
        }
        self.undo_stack.push_back(index);
    }

    /// Back to the first player with no history.
    pub fn reset(&mut self) {
        self.current = 0;
        self.turn = 0;
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}

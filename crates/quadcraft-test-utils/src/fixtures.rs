//! A reference board built on the shared board contract.
//!
//! [`TokenBoard`] is the smallest useful game: players take turns placing
//! tokens on empty cells, a few cells start out blocked, and the game ends
//! when a configurable number of tokens is on the board. It exercises every
//! provided [`Board`] method and gives integration tests a concrete board.

use quadcraft_board::{Board, BoardConfig, BoardMetadata, ConfigError, GridState, PlayerId};
use quadcraft_core::Quadray;
use quadcraft_space::Topology;

/// Contents of a [`TokenBoard`] cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Token {
    /// Placed by a player.
    Stone(PlayerId),
    /// Part of the initial layout; never playable.
    Blocker,
}

/// [`TokenBoard`] metadata: the shared snapshot plus the stone count.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TokenMetadata {
    pub base: BoardMetadata,
    pub stones: usize,
    pub limit: usize,
}

/// Turn-based token placement on an IVM grid.
pub struct TokenBoard {
    state: GridState<Token>,
    blockers: Vec<Quadray>,
    stones: usize,
    limit: usize,
}

impl TokenBoard {
    /// Build a board, place `blockers`, and end the game after `limit` stones.
    pub fn new(
        config: &BoardConfig,
        blockers: impl IntoIterator<Item = Quadray>,
        limit: usize,
    ) -> Result<Self, ConfigError> {
        let mut board = Self {
            state: GridState::new(config)?,
            blockers: blockers.into_iter().collect(),
            stones: 0,
            limit,
        };
        board.reset();
        Ok(board)
    }

    /// Place the current player's stone at `pos` and pass the turn.
    ///
    /// Returns `false` when the game is over, there is no turn manager, or
    /// `pos` is occupied or outside the grid.
    pub fn place(&mut self, pos: &Quadray) -> bool {
        if self.is_game_over() || self.get_cell(pos).is_some() {
            return false;
        }
        let Some(player) = self.current_player().copied() else {
            return false;
        };
        if !self.set_cell(pos, Token::Stone(player)) {
            return false;
        }
        self.stones += 1;
        if self.stones >= self.limit {
            self.state.set_game_over(true);
        } else {
            self.end_turn();
        }
        true
    }

    /// Empty in-grid neighbours of `pos`.
    pub fn liberties(&self, pos: &Quadray) -> usize {
        self.state
            .neighbours_of(pos)
            .iter()
            .filter(|n| self.state.get_cell(n).is_none())
            .count()
    }

    /// Stones owned by `player`, in placement order.
    pub fn stones_of(&self, player: PlayerId) -> Vec<Quadray> {
        self.state
            .occupied()
            .filter(|(_, t)| **t == Token::Stone(player))
            .map(|(cell, _)| cell)
            .collect()
    }

    /// Whether `pos` is inside the grid.
    pub fn contains(&self, pos: &Quadray) -> bool {
        self.state.grid().contains(pos)
    }
}

impl Board for TokenBoard {
    type Cell = Token;
    type Player = PlayerId;
    type Metadata = TokenMetadata;

    fn state(&self) -> &GridState<Token> {
        &self.state
    }

    fn state_mut(&mut self) -> &mut GridState<Token> {
        &mut self.state
    }

    fn reset(&mut self) {
        self.state.clear();
        self.stones = 0;
        for cell in &self.blockers {
            self.state.set_cell(cell, Token::Blocker);
        }
    }

    fn metadata(&self) -> TokenMetadata {
        TokenMetadata {
            base: self.base_metadata(),
            stones: self.stones,
            limit: self.limit,
        }
    }
}

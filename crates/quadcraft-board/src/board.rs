//! The `Board` trait: the contract per-game boards implement.

use crate::state::{BoardMetadata, GridState};
use crate::turn::TurnManager;
use quadcraft_core::Quadray;

/// A game board built by composition around a [`GridState`].
///
/// Implementors supply access to their embedded state, the initial
/// layout ([`reset`](Self::reset)), and a game-specific metadata type
/// that typically embeds [`base_metadata`](Self::base_metadata). Cell
/// access, game-over queries and turn advancement are provided.
///
/// # Examples
///
/// ```
/// use quadcraft_board::{Board, BoardConfig, BoardMetadata, ConfigError, GridState, PlayerId};
/// use quadcraft_core::Quadray;
///
/// struct Stones {
///     state: GridState<PlayerId>,
/// }
///
/// impl Board for Stones {
///     type Cell = PlayerId;
///     type Player = PlayerId;
///     type Metadata = BoardMetadata;
///
///     fn state(&self) -> &GridState<PlayerId> { &self.state }
///     fn state_mut(&mut self) -> &mut GridState<PlayerId> { &mut self.state }
///     fn reset(&mut self) { self.state.clear(); }
///     fn metadata(&self) -> BoardMetadata { self.base_metadata() }
/// }
///
/// let config = BoardConfig { players: 2, ..BoardConfig::default() };
/// let mut board = Stones { state: GridState::new(&config)? };
/// let mover = board.current_player().copied().unwrap_or(PlayerId(0));
/// board.set_cell(&Quadray::ORIGIN, mover);
/// board.end_turn();
/// assert_eq!(board.metadata().current_player, Some(PlayerId(1)));
/// # Ok::<(), ConfigError>(())
/// ```
pub trait Board {
    /// Value stored in a cell.
    type Cell;
    /// Player identifier used by the turn manager.
    type Player: Clone;
    /// Game-specific metadata snapshot.
    type Metadata;

    /// The embedded state.
    fn state(&self) -> &GridState<Self::Cell, Self::Player>;

    /// The embedded state, mutably.
    fn state_mut(&mut self) -> &mut GridState<Self::Cell, Self::Player>;

    /// Restore the initial layout, game-over flag and turn order.
    fn reset(&mut self);

    /// Snapshot for HUDs and persistence.
    fn metadata(&self) -> Self::Metadata;

    /// Value at `pos`, or `None` if empty or outside the grid.
    fn get_cell(&self, pos: &Quadray) -> Option<&Self::Cell> {
        self.state().get_cell(pos)
    }

    /// Store `value` at `pos`; `false` when `pos` is outside the grid.
    fn set_cell(&mut self, pos: &Quadray, value: Self::Cell) -> bool {
        self.state_mut().set_cell(pos, value)
    }

    /// The shared part of every metadata snapshot.
    fn base_metadata(&self) -> BoardMetadata<Self::Player> {
        self.state().base_metadata()
    }

    /// Whether the game has ended.
    fn is_game_over(&self) -> bool {
        self.state().is_game_over()
    }

    /// Player to move, if the board has a turn manager.
    fn current_player(&self) -> Option<&Self::Player> {
        self.state().current_player()
    }

    /// Advance to the next player and return them.
    ///
    /// Returns `None` without advancing when the game is over or the board
    /// has no turn manager.
    fn end_turn(&mut self) -> Option<&Self::Player> {
        if self.is_game_over() {
            return None;
        }
        self.state_mut().turns_mut().map(TurnManager::next_turn)
    }
}

//! The embeddable board state: cell map, game-over flag, turn manager.

use crate::config::{check_geometry, BoardConfig, ConfigError, VerifyPolicy};
use crate::player::PlayerId;
use crate::turn::TurnManager;
use indexmap::IndexMap;
use quadcraft_core::{QuadKey, Quadray};
use quadcraft_space::{IvmGrid, Neighbours, Topology};
use quadcraft_verify::verify_geometric_identities;
use serde::{Deserialize, Serialize};

/// Minimal snapshot every game's metadata extends.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardMetadata<P = PlayerId> {
    /// Grid edge length.
    pub size: u32,
    /// Whether the game has ended.
    pub game_over: bool,
    /// Number of occupied cells.
    pub occupied: usize,
    /// Player to move, if the board has a turn manager.
    pub current_player: Option<P>,
    /// Turns taken since the last reset.
    pub turn: u64,
}

/// Cell values on an [`IvmGrid`], plus the shared game bookkeeping.
///
/// Every read and write routes through [`QuadKey`], so coordinates that
/// differ by a uniform offset address the same slot. Writes outside the
/// grid are rejected rather than stored.
///
/// # Examples
///
/// ```
/// use quadcraft_board::{BoardConfig, GridState};
/// use quadcraft_core::Quadray;
///
/// let mut state: GridState<char> = GridState::new(&BoardConfig::default()).unwrap();
/// let pos = Quadray::new(0.0, 1.0, 1.0, 2.0);
/// assert!(state.set_cell(&pos, 'x'));
/// assert_eq!(state.get_cell(&pos), Some(&'x'));
/// assert!(!state.set_cell(&Quadray::new(9.0, 0.0, 0.0, 0.0), 'y'));
/// ```
#[derive(Clone, Debug)]
pub struct GridState<V, P = PlayerId> {
    grid: IvmGrid,
    cells: IndexMap<QuadKey, V>,
    game_over: bool,
    turns: Option<TurnManager<P>>,
}

impl<V, P: From<u32>> GridState<V, P> {
    /// Build from a config, seating `config.players` players numbered from 0.
    ///
    /// Validates the config, applies the verification gate per
    /// `config.verification`, and constructs the grid.
    pub fn new(config: &BoardConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let count = u32::try_from(config.players).map_err(|_| ConfigError::TooManyPlayers {
            players: config.players,
            max: BoardConfig::MAX_PLAYERS,
        })?;
        let players = match count {
            0 => None,
            n => Some((0..n).map(P::from).collect()),
        };
        Self::build(config, players)
    }
}

impl<V, P> GridState<V, P> {
    /// Build from a config with an explicit turn order.
    ///
    /// `config.players` is ignored. An empty `players` list is
    /// [`ConfigError::NoPlayers`].
    pub fn with_players(config: &BoardConfig, players: Vec<P>) -> Result<Self, ConfigError> {
        Self::build(config, Some(players))
    }

    fn build(config: &BoardConfig, players: Option<Vec<P>>) -> Result<Self, ConfigError> {
        config.validate()?;
        if config.verification != VerifyPolicy::Skip {
            check_geometry(config.verification, &verify_geometric_identities())?;
        }
        let grid = IvmGrid::new(config.size, config.edge)?;
        let turns = players.map(TurnManager::new).transpose()?;
        log::debug!(
            "board ready: size {}, {:?} edges, {} players",
            config.size,
            config.edge,
            turns.as_ref().map_or(0, TurnManager::player_count)
        );
        Ok(Self {
            grid,
            cells: IndexMap::new(),
            game_over: false,
            turns,
        })
    }

    /// Grid edge length.
    pub fn size(&self) -> u32 {
        self.grid.size()
    }

    /// The underlying grid, for pathfinding and rendering.
    pub fn grid(&self) -> &IvmGrid {
        &self.grid
    }

    /// Value at `pos`, or `None` if empty or outside the grid.
    pub fn get_cell(&self, pos: &Quadray) -> Option<&V> {
        if !self.grid.contains(pos) {
            return None;
        }
        self.cells.get(&pos.to_key())
    }

    /// Store `value` at `pos`. Returns `false` and stores nothing when
    /// `pos` is outside the grid.
    pub fn set_cell(&mut self, pos: &Quadray, value: V) -> bool {
        if !self.grid.contains(pos) {
            return false;
        }
        self.cells.insert(pos.to_key(), value);
        true
    }

    /// Remove and return the value at `pos`. Does nothing outside the grid.
    pub fn clear_cell(&mut self, pos: &Quadray) -> Option<V> {
        if !self.grid.contains(pos) {
            return None;
        }
        self.cells.shift_remove(&pos.to_key())
    }

    /// Whether `pos` holds a value.
    pub fn is_occupied(&self, pos: &Quadray) -> bool {
        self.get_cell(pos).is_some()
    }

    /// Occupied cells in first-insertion order. Cells are normalized.
    pub fn occupied(&self) -> impl Iterator<Item = (Quadray, &V)> {
        self.cells.iter().map(|(k, v)| (k.to_quadray(), v))
    }

    /// Number of occupied cells.
    pub fn occupied_count(&self) -> usize {
        self.cells.len()
    }

    /// In-grid neighbours of the slot at `pos` under the configured edge
    /// behaviour.
    ///
    /// The slot is expanded from its normalized cell, so every alias of one
    /// slot has the same neighbours, matching pathfinding. Empty outside the
    /// grid.
    pub fn neighbours_of(&self, pos: &Quadray) -> Neighbours {
        if !self.grid.contains(pos) {
            return Neighbours::new();
        }
        self.grid.neighbours(&pos.normalized())
    }

    /// Whether the game has ended.
    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// Mark the game ended (or resumed).
    pub fn set_game_over(&mut self, over: bool) {
        self.game_over = over;
    }

    /// The turn manager, if the board has one.
    pub fn turns(&self) -> Option<&TurnManager<P>> {
        self.turns.as_ref()
    }

    /// Mutable turn manager, if the board has one.
    pub fn turns_mut(&mut self) -> Option<&mut TurnManager<P>> {
        self.turns.as_mut()
    }

    /// Player to move, if the board has a turn manager.
    pub fn current_player(&self) -> Option<&P> {
        self.turns.as_ref().map(TurnManager::current_player)
    }

    /// Empty every cell, clear game over, and rewind the turn manager.
    pub fn clear(&mut self) {
        self.cells.clear();
        self.game_over = false;
        if let Some(turns) = &mut self.turns {
            turns.reset();
        }
    }
}

impl<V, P: Clone> GridState<V, P> {
    /// Snapshot of the shared bookkeeping.
    pub fn base_metadata(&self) -> BoardMetadata<P> {
        BoardMetadata {
            size: self.size(),
            game_over: self.game_over,
            occupied: self.cells.len(),
            current_player: self.current_player().cloned(),
            turn: self.turns.as_ref().map_or(0, TurnManager::turn_number),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quadcraft_space::EdgeBehavior;

    fn q(a: f64, b: f64, c: f64, d: f64) -> Quadray {
        Quadray::new(a, b, c, d)
    }

    fn state(players: usize) -> GridState<u8> {
        let config = BoardConfig {
            players,
            ..BoardConfig::default()
        };
        GridState::new(&config).unwrap()
    }

    #[test]
    fn invalid_config_is_rejected() {
        let err = GridState::<u8, PlayerId>::new(&BoardConfig::with_size(0)).unwrap_err();
        assert_eq!(err, ConfigError::ZeroSize);
        let err = GridState::<u8, PlayerId>::with_players(&BoardConfig::default(), vec![]).unwrap_err();
        assert_eq!(err, ConfigError::NoPlayers);
    }

    #[test]
    fn fatal_policy_builds_on_sound_geometry() {
        let config = BoardConfig {
            verification: VerifyPolicy::Fatal,
            ..BoardConfig::default()
        };
        assert!(GridState::<u8, PlayerId>::new(&config).is_ok());
    }

    #[test]
    fn reads_and_writes_route_through_key() {
        let mut s = state(0);
        assert!(s.set_cell(&q(1.0, 1.0, 1.0, 1.0), 7));
        assert_eq!(s.get_cell(&Quadray::ORIGIN), Some(&7));
        assert_eq!(s.occupied_count(), 1);
        assert!(s.is_occupied(&Quadray::ORIGIN));
    }

    #[test]
    fn out_of_bounds_is_ordinary_control_flow() {
        let mut s = state(0);
        let outside = q(4.0, 0.0, 0.0, 0.0);
        assert!(!s.set_cell(&outside, 1));
        assert_eq!(s.get_cell(&outside), None);
        assert_eq!(s.clear_cell(&outside), None);
        assert_eq!(s.occupied_count(), 0);
        assert!(s.neighbours_of(&outside).is_empty());
    }

    #[test]
    fn out_of_bounds_alias_leaves_slot_alone() {
        let mut s: GridState<u8> = GridState::new(&BoardConfig::with_size(3)).unwrap();
        assert!(s.set_cell(&Quadray::ORIGIN, 7));
        let alias = q(5.0, 5.0, 5.0, 5.0);
        assert_eq!(s.clear_cell(&alias), None);
        assert_eq!(s.get_cell(&alias), None);
        assert!(!s.set_cell(&alias, 9));
        assert!(s.neighbours_of(&alias).is_empty());
        assert_eq!(s.get_cell(&Quadray::ORIGIN), Some(&7));
    }

    #[test]
    fn aliases_share_neighbours() {
        let s: GridState<u8> = GridState::new(&BoardConfig::with_size(3)).unwrap();
        let far = q(2.0, 2.0, 2.0, 2.0);
        assert_eq!(s.neighbours_of(&far).len(), 12);
        assert_eq!(s.neighbours_of(&far), s.neighbours_of(&Quadray::ORIGIN));
    }

    #[test]
    fn too_many_players_is_rejected() {
        let config = BoardConfig {
            players: BoardConfig::MAX_PLAYERS + 1,
            ..BoardConfig::default()
        };
        assert_eq!(
            GridState::<u8, PlayerId>::new(&config).unwrap_err(),
            ConfigError::TooManyPlayers {
                players: BoardConfig::MAX_PLAYERS + 1,
                max: BoardConfig::MAX_PLAYERS
            }
        );
        let at_limit = BoardConfig {
            players: BoardConfig::MAX_PLAYERS,
            verification: VerifyPolicy::Skip,
            ..BoardConfig::default()
        };
        let s = GridState::<u8, PlayerId>::new(&at_limit).unwrap();
        assert_eq!(s.turns().map(TurnManager::player_count), Some(BoardConfig::MAX_PLAYERS));
    }

    #[test]
    fn occupied_keeps_insertion_order() {
        let mut s = state(0);
        s.set_cell(&q(0.0, 1.0, 1.0, 2.0), 1);
        s.set_cell(&q(2.0, 1.0, 0.0, 1.0), 2);
        s.set_cell(&q(0.0, 0.0, 1.0, 0.0), 3);
        assert_eq!(s.clear_cell(&q(2.0, 1.0, 0.0, 1.0)), Some(2));
        let values: Vec<u8> = s.occupied().map(|(_, v)| *v).collect();
        assert_eq!(values, vec![1, 3]);
        let first = s.occupied().next().map(|(cell, _)| cell);
        assert_eq!(first, Some(q(0.0, 1.0, 1.0, 2.0)));
    }

    #[test]
    fn neighbours_follow_edge_behaviour() {
        let corner = q(2.0, 2.0, 2.0, 0.0);
        let absorb: GridState<u8> = GridState::new(&BoardConfig::with_size(3)).unwrap();
        assert!(absorb.neighbours_of(&corner).is_empty());
        let wrap: GridState<u8> = GridState::new(&BoardConfig {
            size: 3,
            edge: EdgeBehavior::Wrap,
            ..BoardConfig::default()
        })
        .unwrap();
        assert_eq!(wrap.neighbours_of(&corner).len(), 12);
    }

    #[test]
    fn seats_players_from_config() {
        let s = state(3);
        let turns = s.turns().unwrap();
        assert_eq!(turns.players(), &[PlayerId(0), PlayerId(1), PlayerId(2)]);
        assert_eq!(s.current_player(), Some(&PlayerId(0)));
        assert!(state(0).turns().is_none());
    }

    #[test]
    fn base_metadata_snapshot() {
        let mut s = state(2);
        s.set_cell(&Quadray::ORIGIN, 1);
        s.turns_mut().unwrap().next_turn();
        s.set_game_over(true);
        assert_eq!(
            s.base_metadata(),
            BoardMetadata {
                size: 4,
                game_over: true,
                occupied: 1,
                current_player: Some(PlayerId(1)),
                turn: 1,
            }
        );
    }

    #[test]
    fn clear_restores_initial_state() {
        let mut s = state(2);
        s.set_cell(&Quadray::ORIGIN, 1);
        s.turns_mut().unwrap().next_turn();
        s.set_game_over(true);
        s.clear();
        assert_eq!(s.occupied_count(), 0);
        assert!(!s.is_game_over());
        assert_eq!(s.current_player(), Some(&PlayerId(0)));
        assert_eq!(s.base_metadata().turn, 0);
        assert!(!s.turns().unwrap().can_undo());
    }

    #[test]
    fn custom_player_type() {
        let s: GridState<u8, &str> =
            GridState::with_players(&BoardConfig::default(), vec!["red", "blue"]).unwrap();
        assert_eq!(s.current_player(), Some(&"red"));
    }
}

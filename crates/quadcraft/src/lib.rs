//! QuadCraft: a tetrahedral grid engine for turn-based board games.
//!
//! This is the top-level facade crate that re-exports the public API from all
//! QuadCraft sub-crates. For most users, adding `quadcraft` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use quadcraft::prelude::*;
//!
//! // Every interior cell has twelve neighbours.
//! let grid = IvmGrid::new(5, EdgeBehavior::Absorb).unwrap();
//! let centre = Quadray::new(1.0, 1.0, 1.0, 1.0);
//! assert_eq!(grid.neighbours(&centre).len(), 12);
//!
//! // Shortest walkable path, one edge per step.
//! let goal = Quadray::new(0.0, 0.0, 2.0, 2.0);
//! let path = bfs(&Quadray::ORIGIN, &goal, |_| true, 5).unwrap();
//! assert_eq!(path.len(), 3);
//!
//! // The shared geometry is sound.
//! assert!(verify_geometric_identities().all_passed());
//!
//! // A board with two players, gated on that verification.
//! let config = BoardConfig { players: 2, verification: VerifyPolicy::Fatal, ..Default::default() };
//! let mut state: GridState<char> = GridState::new(&config).unwrap();
//! assert!(state.set_cell(&centre, 'x'));
//! assert_eq!(state.get_cell(&Quadray::ORIGIN), Some(&'x'));
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for items not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`coord`] | `quadcraft-core` | `Quadray`, `QuadKey`, IVM constants |
//! | [`space`] | `quadcraft-space` | Directions, grid functions, `IvmGrid`, `Topology`, shuffle |
//! | [`verify`] | `quadcraft-verify` | Geometric verification suite and reports |
//! | [`path`] | `quadcraft-path` | BFS, A*, flood fill, line of sight |
//! | [`board`] | `quadcraft-board` | `GridState`, `Board`, `TurnManager`, board config |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Coordinates, canonical keys and IVM constants (`quadcraft-core`).
pub use quadcraft_core as coord;

/// Grid topology (`quadcraft-space`).
///
/// The twelve [`space::DIRECTIONS`], free functions over integer cells,
/// and the [`space::IvmGrid`] backend of the [`space::Topology`] trait.
pub use quadcraft_space as space;

/// Geometric verification (`quadcraft-verify`).
///
/// [`verify::verify_geometric_identities`] runs the fixed battery of eight
/// checks that boards can gate construction on.
pub use quadcraft_verify as verify;

/// Pathfinding (`quadcraft-path`).
pub use quadcraft_path as path;

/// Board state and turn rotation (`quadcraft-board`).
///
/// Per-game boards embed a [`board::GridState`] and implement
/// [`board::Board`].
pub use quadcraft_board as board;

/// Common imports for typical QuadCraft usage.
///
/// ```rust
/// use quadcraft::prelude::*;
/// ```
pub mod prelude {
    // Coordinates
    pub use quadcraft_core::{QuadKey, Quadray};

    // Space
    pub use quadcraft_space::{
        bounded_neighbors, generate_grid, neighbors, CellType, EdgeBehavior, GridError, IvmGrid,
        Topology, DIRECTIONS,
    };

    // Verification
    pub use quadcraft_verify::{verify_geometric_identities, verify_round_trip, VerificationReport};

    // Pathfinding
    pub use quadcraft_path::{astar, bfs, bfs_in, flood_fill, line_of_sight};

    // Board
    pub use quadcraft_board::{
        Board, BoardConfig, BoardMetadata, ConfigError, GridState, PlayerId, TurnManager,
        VerifyPolicy,
    };
}

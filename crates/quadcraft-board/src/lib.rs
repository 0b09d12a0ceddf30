//! Generic board state and turn rotation for QuadCraft games.
//!
//! Per-game boards do not inherit from a base class. Each game embeds a
//! [`GridState`] in its own struct and implements the [`Board`] trait,
//! which supplies the shared accessor contract (`get_cell`, `set_cell`,
//! `base_metadata`, turn advancement) on top of two required accessors.
//!
//! Construction goes through a [`BoardConfig`], validated once, which can
//! run the geometric verification suite as a start-up gate
//! ([`VerifyPolicy`]).

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod board;
pub mod config;
pub mod player;
pub mod state;
pub mod turn;

pub use board::Board;
pub use config::{check_geometry, BoardConfig, ConfigError, VerifyPolicy};
pub use player::PlayerId;
pub use state::{BoardMetadata, GridState};
pub use turn::{TurnError, TurnManager};

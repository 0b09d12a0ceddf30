//! Board configuration, validation, and the geometric verification gate.

use crate::turn::TurnError;
use quadcraft_space::{EdgeBehavior, GridError, IvmGrid};
use quadcraft_verify::VerificationReport;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected while building a board.
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// `size` is zero.
    ZeroSize,
    /// `size` exceeds the grid maximum.
    SizeTooLarge {
        /// The configured size.
        size: u32,
        /// The largest supported size.
        max: u32,
    },
    /// An explicit player list was empty.
    NoPlayers,
    /// `players` exceeds [`BoardConfig::MAX_PLAYERS`].
    TooManyPlayers {
        /// The configured player count.
        players: usize,
        /// The largest supported count.
        max: usize,
    },
    /// Grid construction failed.
    Grid(GridError),
    /// Geometric verification failed under [`VerifyPolicy::Fatal`].
    GeometryRegressed {
        /// Names of the failing checks.
        failed: Vec<String>,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroSize => write!(f, "board size must be at least 1"),
            Self::SizeTooLarge { size, max } => {
                write!(f, "board size {size} exceeds maximum {max}")
            }
            Self::NoPlayers => write!(f, "player list is empty"),
            Self::TooManyPlayers { players, max } => {
                write!(f, "{players} players exceeds maximum {max}")
            }
            Self::Grid(e) => write!(f, "grid: {e}"),
            Self::GeometryRegressed { failed } => {
                write!(f, "geometric verification failed: {}", failed.join(", "))
            }
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GridError> for ConfigError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

impl From<TurnError> for ConfigError {
    fn from(e: TurnError) -> Self {
        match e {
            TurnError::NoPlayers => Self::NoPlayers,
        }
    }
}

// ── VerifyPolicy ───────────────────────────────────────────────────

/// Whether board construction runs the geometric verification suite, and
/// what a failure does.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VerifyPolicy {
    /// Do not run the suite.
    Skip,
    /// Run it; log each failure at `warn` and continue.
    #[default]
    Warn,
    /// Run it; log at `error` and refuse to build the board on failure.
    Fatal,
}

/// Apply `policy` to a verification report.
///
/// `Skip` and passing reports are always `Ok`. A failing report logs and
/// returns `Ok` under `Warn`, and logs and returns
/// [`ConfigError::GeometryRegressed`] under `Fatal`.
pub fn check_geometry(policy: VerifyPolicy, report: &VerificationReport) -> Result<(), ConfigError> {
    if policy == VerifyPolicy::Skip || report.all_passed() {
        return Ok(());
    }
    let failed: Vec<String> = report.failed().map(|c| c.name.clone()).collect();
    match policy {
        VerifyPolicy::Skip => Ok(()),
        VerifyPolicy::Warn => {
            log::warn!(
                "geometric verification: {}/{} checks passed, continuing (failed: {})",
                report.pass_count(),
                report.checks.len(),
                failed.join(", ")
            );
            Ok(())
        }
        VerifyPolicy::Fatal => {
            log::error!(
                "geometric verification: {}/{} checks passed, refusing to build board (failed: {})",
                report.pass_count(),
                report.checks.len(),
                failed.join(", ")
            );
            Err(ConfigError::GeometryRegressed { failed })
        }
    }
}

// ── BoardConfig ────────────────────────────────────────────────────

/// Construction parameters for a [`GridState`](crate::GridState).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Grid edge length; cells have components in `[0, size)`.
    pub size: u32,
    /// Neighbour behaviour at the grid edge.
    pub edge: EdgeBehavior,
    /// Start-up geometric verification policy.
    pub verification: VerifyPolicy,
    /// Number of seats for the turn manager. 0 means no turn manager.
    pub players: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            size: 4,
            edge: EdgeBehavior::Absorb,
            verification: VerifyPolicy::Warn,
            players: 0,
        }
    }
}

impl BoardConfig {
    /// Largest supported `players` count.
    pub const MAX_PLAYERS: usize = 1024;

    /// Config with the given size and defaults elsewhere.
    pub fn with_size(size: u32) -> Self {
        Self {
            size,
            ..Self::default()
        }
    }

    /// Validate structural invariants. Does not run verification.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.size == 0 {
            return Err(ConfigError::ZeroSize);
        }
        if self.size > IvmGrid::MAX_SIZE {
            return Err(ConfigError::SizeTooLarge {
                size: self.size,
                max: IvmGrid::MAX_SIZE,
            });
        }
        if self.players > Self::MAX_PLAYERS {
            return Err(ConfigError::TooManyPlayers {
                players: self.players,
                max: Self::MAX_PLAYERS,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quadcraft_verify::{verify_geometric_identities, CheckResult};

    fn failing_report() -> VerificationReport {
        let mut report = VerificationReport::new();
        report.checks.push(CheckResult {
            name: "Origin Identity".into(),
            description: "origin maps to origin".into(),
            expected: "(0, 0, 0)".into(),
            actual: "(1, 0, 0)".into(),
            passed: false,
        });
        report
    }

    #[test]
    fn default_config_is_valid() {
        let c = BoardConfig::default();
        assert_eq!(c.size, 4);
        assert_eq!(c.edge, EdgeBehavior::Absorb);
        assert_eq!(c.verification, VerifyPolicy::Warn);
        assert_eq!(c.players, 0);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn rejects_bad_sizes() {
        assert_eq!(BoardConfig::with_size(0).validate(), Err(ConfigError::ZeroSize));
        assert_eq!(
            BoardConfig::with_size(IvmGrid::MAX_SIZE + 1).validate(),
            Err(ConfigError::SizeTooLarge {
                size: IvmGrid::MAX_SIZE + 1,
                max: IvmGrid::MAX_SIZE
            })
        );
    }

    #[test]
    fn rejects_too_many_players() {
        let config = BoardConfig {
            players: usize::MAX,
            ..BoardConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::TooManyPlayers {
                players: usize::MAX,
                max: BoardConfig::MAX_PLAYERS
            })
        );
        assert_eq!(
            ConfigError::TooManyPlayers { players: 2000, max: 1024 }.to_string(),
            "2000 players exceeds maximum 1024"
        );
    }

    #[test]
    fn passing_report_passes_every_policy() {
        let report = verify_geometric_identities();
        for policy in [VerifyPolicy::Skip, VerifyPolicy::Warn, VerifyPolicy::Fatal] {
            assert!(check_geometry(policy, &report).is_ok());
        }
    }

    #[test]
    fn failing_report_by_policy() {
        let report = failing_report();
        assert!(check_geometry(VerifyPolicy::Skip, &report).is_ok());
        assert!(check_geometry(VerifyPolicy::Warn, &report).is_ok());
        assert_eq!(
            check_geometry(VerifyPolicy::Fatal, &report),
            Err(ConfigError::GeometryRegressed {
                failed: vec!["Origin Identity".to_string()]
            })
        );
    }

    #[test]
    fn error_display_and_source() {
        let e = ConfigError::from(GridError::EmptyGrid);
        assert_eq!(e.to_string(), "grid: grid must have at least one cell");
        assert!(e.source().is_some());
        assert!(ConfigError::ZeroSize.source().is_none());
        assert_eq!(ConfigError::from(TurnError::NoPlayers), ConfigError::NoPlayers);
        let regressed = ConfigError::GeometryRegressed {
            failed: vec!["A".into(), "B".into()],
        };
        assert_eq!(regressed.to_string(), "geometric verification failed: A, B");
    }
}

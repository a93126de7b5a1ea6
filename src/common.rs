//! Common types: shot results and the engine's error enum.

use crate::board::Coordinate;
use crate::ship::{Ship, ShipKind};

/// Classification of a single shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ShotResult {
    /// Shot struck a ship segment.
    Hit,
    /// Shot landed in open water.
    Miss,
    /// Cell was already resolved; nothing changed.
    Duplicate,
}

/// Everything the shooter learns from one shot.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct ShotOutcome {
    pub result: ShotResult,
    /// The ship this shot sank, if any.
    pub sunk: Option<Ship>,
    /// `true` once every ship of the fleet is sunk.
    pub all_sunk: bool,
}

impl ShotOutcome {
    pub(crate) fn miss() -> Self {
        Self {
            result: ShotResult::Miss,
            sunk: None,
            all_sunk: false,
        }
    }

    pub(crate) fn duplicate() -> Self {
        Self {
            result: ShotResult::Duplicate,
            sunk: None,
            all_sunk: false,
        }
    }

    pub fn is_hit(&self) -> bool {
        self.result == ShotResult::Hit
    }

    pub fn is_duplicate(&self) -> bool {
        self.result == ShotResult::Duplicate
    }
}

/// Errors returned by engine operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Coordinate lies outside the board.
    OutOfBounds(Coordinate),
    /// Text could not be read as a board coordinate.
    InvalidCoordinate,
    /// Ship would leave the board or touch another ship.
    InvalidPlacement,
    /// Ship kind is not part of the fleet manifest.
    ShipNotInManifest(ShipKind),
    /// Every ship of this kind is already on the board.
    ShipAlreadyPlaced(ShipKind),
    /// The fleet does not match the manifest yet.
    FleetIncomplete,
    /// Operation is not allowed in the current game phase.
    WrongPhase,
    /// A ship cell has no matching ship in the fleet.
    UnknownShip(Coordinate),
    /// The random generator could not fit the fleet on the board.
    FleetDoesNotFit { restarts: usize },
    /// No unresolved cell is left to shoot at.
    NoTargetAvailable,
    /// Interactive input ended before a decision was made.
    InputClosed,
}

impl core::fmt::Display for GameError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            GameError::OutOfBounds(c) => write!(f, "Coordinate ({}, {}) is off the board", c.row, c.col),
            GameError::InvalidCoordinate => write!(f, "Not a board coordinate"),
            GameError::InvalidPlacement => {
                write!(f, "Ship placement leaves the board or breaks the 1-cell spacing rule")
            }
            GameError::ShipNotInManifest(kind) => write!(f, "{} is not part of the fleet", kind),
            GameError::ShipAlreadyPlaced(kind) => write!(f, "{} is already placed", kind),
            GameError::FleetIncomplete => write!(f, "Fleet is not complete"),
            GameError::WrongPhase => write!(f, "Operation not allowed in the current phase"),
            GameError::UnknownShip(c) => write!(f, "Ship cell {} has no ship in the fleet", c),
            GameError::FleetDoesNotFit { restarts } => {
                write!(f, "Fleet does not fit on the board after {} restarts", restarts)
            }
            GameError::NoTargetAvailable => write!(f, "No unresolved cell left to target"),
            GameError::InputClosed => write!(f, "Input closed"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GameError {}

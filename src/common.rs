//! Shot outcomes and board errors.

use serde::Serialize;
use thiserror::Error;

/// Result of a shot that the board accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ShotOutcome {
    /// No ship at the target.
    Miss,
    /// A ship was hit and still floats.
    Hit,
    /// The hit took the ship's last point.
    Sunk,
}

impl ShotOutcome {
    /// Hits and sinks let the shooter fire again.
    pub fn grants_extra_turn(self) -> bool {
        !matches!(self, ShotOutcome::Miss)
    }
}

/// Errors returned by [`Board`](crate::Board) operations and fleet placement.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// Shot target lies off the board.
    #[error("cell is off the board")]
    OutOfBounds,
    /// Shot target was already shot at or ringed around a sunk ship.
    #[error("that cell was already shot")]
    AlreadyTargeted,
    /// Ship would leave the board, overlap, or touch another ship.
    #[error("ship cannot be placed there")]
    InvalidPlacement,
    /// The shared attempt budget ran out before the fleet was placed.
    #[error("gave up placing the fleet after {attempts} attempts")]
    PlacementExhausted { attempts: usize },
}

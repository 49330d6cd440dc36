//! Commonly used types and utilities for ease of import.

pub use crate::{
    random_board, Board, BoardError, Coordinate, Game, GameEvent, GameStatus, MoveSource,
    Orientation, Ship, ShotOutcome, Side,
};
pub use crate::ui::{describe_event, print_player_view, BoardView};

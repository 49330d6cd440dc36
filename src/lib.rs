//! Sea battle on a 6×6 board: a human against a computer that fires at random.
//!
//! The crate holds the board model, random fleet placement and the turn
//! engine. Rendering and console input live alongside as thin collaborators.

mod bitboard;
mod board;
mod common;
mod config;
mod coordinate;
mod game;
mod logging;
pub mod placement;
mod player;
mod player_ai;
mod player_cli;
pub mod prelude;
mod ship;
pub mod ui;

pub use bitboard::BitBoard;
pub use board::*;
pub use common::*;
pub use config::*;
pub use coordinate::Coordinate;
pub use game::*;
pub use logging::{init_logging, level_from_env};
pub use placement::{random_board, try_board, try_board_within};
pub use player::MoveSource;
pub use player_ai::RandomTargeter;
pub use player_cli::{parse_target, ConsoleInput, InputError};
pub use ship::{Orientation, Ship};

//! Random fleet placement.
//!
//! Ships are dropped at random anchors in fleet order. Failed drops are retried
//! from a budget shared by the whole fleet; once the budget is spent the board
//! is thrown away and generation starts over on an empty one.

use log::{debug, trace};
use rand::Rng;

use crate::board::Board;
use crate::common::BoardError;
use crate::config::{BOARD_SIZE, FLEET, PLACEMENT_ATTEMPT_LIMIT};
use crate::coordinate::Coordinate;
use crate::ship::{Orientation, Ship};

/// A ship of `length` at a uniformly random anchor and orientation.
pub fn random_ship<R: Rng>(rng: &mut R, length: usize) -> Ship {
    let anchor = Coordinate::new(
        rng.random_range(0..BOARD_SIZE as i32),
        rng.random_range(0..BOARD_SIZE as i32),
    );
    let orientation = if rng.random() {
        Orientation::Horizontal
    } else {
        Orientation::Vertical
    };
    Ship::new(anchor, length, orientation)
}

/// One attempt at placing the whole fleet on a fresh board, within
/// [`PLACEMENT_ATTEMPT_LIMIT`] drops. On success placement is finished and the
/// board is ready to be shot at.
pub fn try_board<R: Rng>(rng: &mut R) -> Result<Board, BoardError> {
    try_board_within(rng, PLACEMENT_ATTEMPT_LIMIT)
}

/// [`try_board`] with an explicit drop budget. Fails with
/// [`BoardError::PlacementExhausted`] carrying the number of drops made once
/// `limit` is spent.
pub fn try_board_within<R: Rng>(rng: &mut R, limit: usize) -> Result<Board, BoardError> {
    let mut board = Board::new();
    let mut attempts = 0;
    for &length in FLEET.iter() {
        loop {
            if attempts >= limit {
                return Err(BoardError::PlacementExhausted { attempts });
            }
            attempts += 1;
            let ship = random_ship(rng, length);
            match board.place_ship(ship) {
                Ok(()) => break,
                Err(e) => trace!("attempt {attempts}: {ship:?} rejected: {e}"),
            }
        }
    }
    board.finish_placement();
    Ok(board)
}

/// Generate boards until one holds the whole fleet.
pub fn random_board<R: Rng>(rng: &mut R) -> Board {
    let mut restarts = 0usize;
    loop {
        match try_board(rng) {
            Ok(board) => {
                debug!("fleet placed after {restarts} restarts");
                return board;
            }
            Err(e) => {
                restarts += 1;
                debug!("discarding board: {e}");
            }
        }
    }
}

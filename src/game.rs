//! Turn engine: alternates shots between the two sides until one fleet is gone.

use std::io;

use log::{debug, info};
use rand::Rng;
use serde::Serialize;

use crate::board::Board;
use crate::common::{BoardError, ShotOutcome};
use crate::config::WIN_THRESHOLD;
use crate::coordinate::Coordinate;
use crate::placement::random_board;
use crate::player::MoveSource;

/// One of the two players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    User,
    Opponent,
}

impl Side {
    pub fn other(self) -> Side {
        match self {
            Side::User => Side::Opponent,
            Side::Opponent => Side::User,
        }
    }

    fn index(self) -> usize {
        match self {
            Side::User => 0,
            Side::Opponent => 1,
        }
    }
}

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    UserTurn,
    OpponentTurn,
    UserWon,
    OpponentWon,
}

impl GameStatus {
    fn turn_of(side: Side) -> Self {
        match side {
            Side::User => GameStatus::UserTurn,
            Side::Opponent => GameStatus::OpponentTurn,
        }
    }

    fn won_by(side: Side) -> Self {
        match side {
            Side::User => GameStatus::UserWon,
            Side::Opponent => GameStatus::OpponentWon,
        }
    }

    /// Side to move, or `None` once the game is over.
    pub fn to_move(self) -> Option<Side> {
        match self {
            GameStatus::UserTurn => Some(Side::User),
            GameStatus::OpponentTurn => Some(Side::Opponent),
            _ => None,
        }
    }

    /// Winning side, once there is one.
    pub fn winner(self) -> Option<Side> {
        match self {
            GameStatus::UserWon => Some(Side::User),
            GameStatus::OpponentWon => Some(Side::Opponent),
            _ => None,
        }
    }

    pub fn is_over(self) -> bool {
        self.winner().is_some()
    }
}

/// What happened during one call to [`Game::take_turn`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// The board refused the shot; the same side is asked again.
    Rejected {
        side: Side,
        target: Coordinate,
        error: BoardError,
    },
    /// The shot landed.
    Resolved {
        side: Side,
        target: Coordinate,
        outcome: ShotOutcome,
    },
    /// The game is over; returned for every call once a side has won.
    Finished { winner: Side },
}

/// Per-side shot counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ShotTally {
    pub shots: usize,
    pub hits: usize,
    pub ships_sunk: usize,
}

/// Summary of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GameReport {
    pub winner: Option<Side>,
    /// Shots that landed, both sides together.
    pub shots: usize,
    pub user: ShotTally,
    pub opponent: ShotTally,
}

/// A game between the user and the computer.
pub struct Game {
    boards: [Board; 2],
    sources: [MoveSource; 2],
    tallies: [ShotTally; 2],
    status: GameStatus,
}

impl Game {
    /// Start a game on the given boards with the user to move.
    pub fn new(
        user_board: Board,
        opponent_board: Board,
        user: MoveSource,
        opponent: MoveSource,
    ) -> Self {
        Game {
            boards: [user_board, opponent_board],
            sources: [user, opponent],
            tallies: [ShotTally::default(); 2],
            status: GameStatus::UserTurn,
        }
    }

    /// Start a game with both fleets placed at random from `rng`.
    pub fn with_random_boards<R: Rng>(rng: &mut R, user: MoveSource, opponent: MoveSource) -> Self {
        let user_board = random_board(rng);
        let opponent_board = random_board(rng);
        Self::new(user_board, opponent_board, user, opponent)
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// The board holding `side`'s own fleet.
    pub fn board(&self, side: Side) -> &Board {
        &self.boards[side.index()]
    }

    pub fn source(&self, side: Side) -> &MoveSource {
        &self.sources[side.index()]
    }

    pub fn tally(&self, side: Side) -> ShotTally {
        self.tallies[side.index()]
    }

    /// Ask the side to move for a target and fire it at the other side's board.
    pub fn take_turn(&mut self) -> io::Result<GameEvent> {
        let side = match self.status {
            GameStatus::UserTurn => Side::User,
            GameStatus::OpponentTurn => Side::Opponent,
            GameStatus::UserWon => return Ok(GameEvent::Finished { winner: Side::User }),
            GameStatus::OpponentWon => {
                return Ok(GameEvent::Finished {
                    winner: Side::Opponent,
                })
            }
        };

        let target = self.sources[side.index()].request_target()?;
        let outcome = match self.boards[side.other().index()].shoot(target) {
            Ok(outcome) => outcome,
            Err(error) => {
                debug!("{side:?} shot at {target} rejected: {error}");
                return Ok(GameEvent::Rejected {
                    side,
                    target,
                    error,
                });
            }
        };
        debug!("{side:?} fired at {target}: {outcome:?}");

        let tally = &mut self.tallies[side.index()];
        tally.shots += 1;
        if outcome.grants_extra_turn() {
            tally.hits += 1;
        }
        if outcome == ShotOutcome::Sunk {
            tally.ships_sunk += 1;
        }

        self.status = if let Some(winner) = self.winner_on_boards() {
            info!("{winner:?} sank the whole fleet");
            GameStatus::won_by(winner)
        } else if outcome.grants_extra_turn() {
            GameStatus::turn_of(side)
        } else {
            GameStatus::turn_of(side.other())
        };

        Ok(GameEvent::Resolved {
            side,
            target,
            outcome,
        })
    }

    fn winner_on_boards(&self) -> Option<Side> {
        if self.board(Side::Opponent).sunk_count() >= WIN_THRESHOLD {
            Some(Side::User)
        } else if self.board(Side::User).sunk_count() >= WIN_THRESHOLD {
            Some(Side::Opponent)
        } else {
            None
        }
    }

    /// Run turns until a side wins, handing every event to `on_event`.
    pub fn play<F>(&mut self, mut on_event: F) -> io::Result<Side>
    where
        F: FnMut(&Game, &GameEvent),
    {
        loop {
            let event = self.take_turn()?;
            on_event(self, &event);
            if let GameEvent::Finished { winner } = event {
                return Ok(winner);
            }
        }
    }

    pub fn report(&self) -> GameReport {
        let user = self.tally(Side::User);
        let opponent = self.tally(Side::Opponent);
        GameReport {
            winner: self.status.winner(),
            shots: user.shots + opponent.shots,
            user,
            opponent,
        }
    }
}

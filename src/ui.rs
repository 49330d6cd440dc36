//! Text rendering of boards.

use core::fmt;

use crate::board::{Board, Cell};
use crate::common::ShotOutcome;
use crate::config::BOARD_SIZE;
use crate::game::{Game, GameEvent, Side};

/// Printable view of a board, optionally hiding ships that were not hit.
pub struct BoardView<'a> {
    board: &'a Board,
    hide_ships: bool,
}

impl<'a> BoardView<'a> {
    pub fn new(board: &'a Board, hide_ships: bool) -> Self {
        Self { board, hide_ships }
    }

    fn glyph(&self, cell: Cell) -> char {
        match cell {
            Cell::Ship if !self.hide_ships => 'S',
            Cell::Ship | Cell::Empty => '.',
            Cell::Hit => 'X',
            Cell::Miss => 'o',
            Cell::Contour => '-',
        }
    }
}

impl fmt::Display for BoardView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "  ")?;
        for c in 1..=BOARD_SIZE {
            write!(f, " {c}")?;
        }
        for (r, row) in self.board.rows().enumerate() {
            write!(f, "\n{:2}", r + 1)?;
            for &cell in row {
                write!(f, " {}", self.glyph(cell))?;
            }
        }
        Ok(())
    }
}

/// Both boards as the user sees them: own fleet in full, enemy ships hidden
/// unless `reveal` is set.
pub fn print_player_view(game: &Game, reveal: bool) {
    println!("{}", "-".repeat(20));
    println!("Your board:");
    println!("{}", BoardView::new(game.board(Side::User), false));
    println!("{}", "-".repeat(20));
    println!("Computer's board:");
    println!("{}", BoardView::new(game.board(Side::Opponent), !reveal));
    println!("{}", "-".repeat(20));
}

/// Status line for an event. A human is told why the shot was refused; the
/// computer's refused draws are echoed like any other move.
pub fn describe_event(game: &Game, event: &GameEvent) -> String {
    match *event {
        GameEvent::Rejected {
            side,
            target,
            error,
        } => {
            let reason = capitalize(&error.to_string());
            if game.source(side).is_automated() {
                format!("{} fires at {target}: {reason}!", side_name(side))
            } else {
                format!("{reason}!")
            }
        }
        GameEvent::Resolved {
            side,
            target,
            outcome,
        } => {
            let result = match outcome {
                ShotOutcome::Miss => "Miss!",
                ShotOutcome::Hit => "Ship hit!",
                ShotOutcome::Sunk => "Ship sunk!",
            };
            format!("{} fires at {target}: {result}", side_name(side))
        }
        GameEvent::Finished { winner } => format!("{} wins!", side_name(winner)),
    }
}

fn side_name(side: Side) -> &'static str {
    match side {
        Side::User => "Player",
        Side::Opponent => "Computer",
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

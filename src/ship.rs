//! Ships: straight runs of cells derived from an anchor.

use core::fmt;

use crate::coordinate::Coordinate;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Row fixed, column grows.
    Horizontal,
    /// Column fixed, row grows.
    Vertical,
}

/// A ship anchored at its first cell.
///
/// Occupied cells are not stored; they are derived from anchor, length and
/// orientation whenever they are needed.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Ship {
    anchor: Coordinate,
    length: usize,
    orientation: Orientation,
    lives: usize,
}

impl Ship {
    /// A fresh, undamaged ship.
    pub fn new(anchor: Coordinate, length: usize, orientation: Orientation) -> Self {
        Ship {
            anchor,
            length,
            orientation,
            lives: length,
        }
    }

    pub fn anchor(&self) -> Coordinate {
        self.anchor
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Remaining hit points.
    pub fn lives(&self) -> usize {
        self.lives
    }

    pub fn is_sunk(&self) -> bool {
        self.lives == 0
    }

    /// Occupied cells, starting at the anchor.
    pub fn cells(&self) -> impl Iterator<Item = Coordinate> + Clone {
        let Ship {
            anchor,
            orientation,
            ..
        } = *self;
        (0..self.length as i32).map(move |i| match orientation {
            Orientation::Horizontal => anchor.offset(0, i),
            Orientation::Vertical => anchor.offset(i, 0),
        })
    }

    /// Returns `true` if `coord` is one of the ship's cells.
    pub fn is_hit_by(&self, coord: Coordinate) -> bool {
        self.cells().any(|c| c == coord)
    }

    /// Takes one point of damage. Returns `true` if that sank the ship.
    pub(crate) fn take_hit(&mut self) -> bool {
        self.lives = self.lives.saturating_sub(1);
        self.is_sunk()
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ anchor: ({}, {}), length: {}, orientation: {:?}, lives: {} }}",
            self.anchor.row, self.anchor.col, self.length, self.orientation, self.lives
        )
    }
}

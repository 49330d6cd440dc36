//! Board state: cell grid, owned ships and the exclusion set.

use core::fmt;

use log::debug;

use crate::bitboard::BitBoard;
use crate::common::{BoardError, ShotOutcome};
use crate::config::BOARD_SIZE;
use crate::coordinate::Coordinate;
use crate::ship::Ship;

/// Cell set sized for the board.
pub type CellSet = BitBoard<u64, BOARD_SIZE>;

/// Visible state of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cell {
    #[default]
    Empty,
    /// Occupied by a ship that has not been hit there.
    Ship,
    Miss,
    Hit,
    /// Ring cell around a sunk ship, known to be empty.
    Contour,
}

/// One side's board.
///
/// The exclusion set (`busy`) serves three purposes at once: during placement
/// it holds occupied cells and their safety margins, during play it holds
/// every cell already shot, and it also receives the ring around each sunk
/// ship. [`Board::finish_placement`] empties it once between the two phases.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    grid: [[Cell; BOARD_SIZE]; BOARD_SIZE],
    ships: Vec<Ship>,
    busy: CellSet,
    sunk: usize,
    placing: bool,
}

impl Board {
    /// An empty board in the placement phase.
    pub fn new() -> Self {
        Board {
            grid: [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE],
            ships: Vec::new(),
            busy: CellSet::new(),
            sunk: 0,
            placing: true,
        }
    }

    /// Returns `true` if either component of `coord` lies outside the grid.
    pub fn is_out_of_bounds(&self, coord: Coordinate) -> bool {
        coord.grid_index(BOARD_SIZE).is_none()
    }

    /// State of the cell at `coord`, or `None` off the board.
    pub fn cell(&self, coord: Coordinate) -> Option<Cell> {
        coord.grid_index(BOARD_SIZE).map(|(r, c)| self.grid[r][c])
    }

    /// Rows of cells, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell; BOARD_SIZE]> {
        self.grid.iter()
    }

    /// Ships in placement order.
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// Number of ships sunk so far.
    pub fn sunk_count(&self) -> usize {
        self.sunk
    }

    /// Returns `true` if `coord` is in the exclusion set.
    pub fn is_excluded(&self, coord: Coordinate) -> bool {
        self.busy.contains(coord)
    }

    /// The exclusion set.
    pub fn excluded(&self) -> CellSet {
        self.busy
    }

    /// Every cell occupied by a ship, sunk or not.
    pub fn ship_cells(&self) -> CellSet {
        self.ships.iter().flat_map(|s| s.cells()).collect()
    }

    /// `false` once [`Board::finish_placement`] has run.
    pub fn is_placing(&self) -> bool {
        self.placing
    }

    /// Adds every on-board, not yet excluded cell of the 3×3 neighbourhood of
    /// each of the ship's cells to the exclusion set. With `mark`, such cells that
    /// are not part of a ship are also painted as [`Cell::Contour`].
    fn mark_contour(&mut self, ship: &Ship, mark: bool) {
        for cell in ship.cells() {
            for near in cell.neighbourhood() {
                let Some((r, c)) = near.grid_index(BOARD_SIZE) else {
                    continue;
                };
                if !self.busy.insert(near) {
                    continue;
                }
                if mark && matches!(self.grid[r][c], Cell::Empty) {
                    self.grid[r][c] = Cell::Contour;
                }
            }
        }
    }

    /// Place `ship`, keeping a one-cell margin clear around it.
    ///
    /// Fails with [`BoardError::InvalidPlacement`] if any of its cells is off the
    /// board or excluded; the board is untouched in that case.
    pub fn place_ship(&mut self, ship: Ship) -> Result<(), BoardError> {
        if ship
            .cells()
            .any(|c| self.is_out_of_bounds(c) || self.busy.contains(c))
        {
            return Err(BoardError::InvalidPlacement);
        }
        for cell in ship.cells() {
            if let Some((r, c)) = cell.grid_index(BOARD_SIZE) {
                self.grid[r][c] = Cell::Ship;
            }
            self.busy.insert(cell);
        }
        self.ships.push(ship);
        self.mark_contour(&ship, false);
        Ok(())
    }

    /// Empty the exclusion set left behind by placement so that every cell can be
    /// shot. Only the first call has an effect; later calls would also erase shot
    /// history and sunk rings.
    pub fn finish_placement(&mut self) {
        if !self.placing {
            debug!("placement already finished, exclusions kept");
            return;
        }
        self.busy.clear();
        self.placing = false;
    }

    /// Fire at `coord`.
    pub fn shoot(&mut self, coord: Coordinate) -> Result<ShotOutcome, BoardError> {
        let (r, c) = coord
            .grid_index(BOARD_SIZE)
            .ok_or(BoardError::OutOfBounds)?;
        if !self.busy.insert(coord) {
            return Err(BoardError::AlreadyTargeted);
        }

        let Some(idx) = self
            .ships
            .iter()
            .position(|s| !s.is_sunk() && s.is_hit_by(coord))
        else {
            self.grid[r][c] = Cell::Miss;
            return Ok(ShotOutcome::Miss);
        };

        self.grid[r][c] = Cell::Hit;
        if !self.ships[idx].take_hit() {
            return Ok(ShotOutcome::Hit);
        }
        self.sunk += 1;
        let ship = self.ships[idx];
        self.mark_contour(&ship, true);
        debug!("ship {:?} sunk, {} down", ship, self.sunk);
        Ok(ShotOutcome::Sunk)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Board")
            .field("ships", &self.ships)
            .field("sunk", &self.sunk)
            .field("placing", &self.placing)
            .field("busy", &self.busy)
            .finish()
    }
}

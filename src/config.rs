/// Side length of the square board.
pub const BOARD_SIZE: usize = 6;

/// Ship lengths of the fleet, in placement order.
pub const FLEET: [usize; 7] = [3, 2, 2, 1, 1, 1, 1];

/// Placement attempts a single board may spend across the whole fleet before it is
/// abandoned and generated again from scratch.
pub const PLACEMENT_ATTEMPT_LIMIT: usize = 2000;

/// Sunk ships needed to win: the whole fleet.
pub const WIN_THRESHOLD: usize = FLEET.len();

/// Total number of cells covered by the fleet.
pub const FLEET_CELLS: usize = 3 + 2 + 2 + 1 + 1 + 1 + 1;

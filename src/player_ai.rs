use log::debug;
use rand::rngs::SmallRng;
use rand::Rng;

use crate::config::BOARD_SIZE;
use crate::coordinate::Coordinate;

/// Computer opponent: fires at uniformly random cells, repeats included.
pub struct RandomTargeter {
    rng: SmallRng,
}

impl RandomTargeter {
    pub fn new(rng: SmallRng) -> Self {
        Self { rng }
    }

    /// Draw a target; always on the board.
    pub fn next_target(&mut self) -> Coordinate {
        let target = Coordinate::new(
            self.rng.random_range(0..BOARD_SIZE as i32),
            self.rng.random_range(0..BOARD_SIZE as i32),
        );
        debug!("random target {target}");
        target
    }
}

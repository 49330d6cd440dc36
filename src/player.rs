//! Where each side's shots come from.

use std::io;

use rand::rngs::SmallRng;

use crate::coordinate::Coordinate;
use crate::player_ai::RandomTargeter;
use crate::player_cli::ConsoleInput;

/// Source of targets for one side, chosen when the game is built.
pub enum MoveSource {
    /// A human typing at a console.
    Console(ConsoleInput),
    /// The computer, firing uniformly at random.
    Random(RandomTargeter),
}

impl MoveSource {
    /// Human at the process's terminal.
    pub fn stdio() -> Self {
        MoveSource::Console(ConsoleInput::stdio())
    }

    /// Human reading from `input` and prompting on `output`.
    pub fn console(input: impl io::BufRead + 'static, output: impl io::Write + 'static) -> Self {
        MoveSource::Console(ConsoleInput::new(input, output))
    }

    /// Computer player drawing from `rng`.
    pub fn random(rng: SmallRng) -> Self {
        MoveSource::Random(RandomTargeter::new(rng))
    }

    /// Next cell to fire at. Only console input can fail, when it is closed.
    pub fn request_target(&mut self) -> io::Result<Coordinate> {
        match self {
            MoveSource::Console(console) => console.read_target(),
            MoveSource::Random(targeter) => Ok(targeter.next_target()),
        }
    }

    /// Returns `true` for the computer.
    pub fn is_automated(&self) -> bool {
        matches!(self, MoveSource::Random(_))
    }
}

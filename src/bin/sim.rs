//! Headless computer-vs-computer game printing a JSON summary.

use clap::Parser;
use rand::{rngs::SmallRng, SeedableRng};
use serde_json::json;

use seabattle::{init_logging, Game, MoveSource};

#[derive(Parser)]
#[command(about = "Simulate one computer-vs-computer game")]
struct Args {
    #[arg(long, help = "Fix RNG seed for a reproducible game")]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let args = Args::parse();
    let seed = args.seed.unwrap_or_else(rand::random);

    let mut placement = SmallRng::seed_from_u64(seed);
    let mut game = Game::with_random_boards(
        &mut placement,
        MoveSource::random(SmallRng::seed_from_u64(seed.wrapping_add(2))),
        MoveSource::random(SmallRng::seed_from_u64(seed.wrapping_add(1))),
    );
    game.play(|_, _| {})?;

    let result = json!({
        "seed": seed,
        "report": game.report(),
    });
    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}

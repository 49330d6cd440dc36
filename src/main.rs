use clap::{Parser, Subcommand};
use log::info;
use rand::rngs::SmallRng;
use rand::SeedableRng;

use seabattle::prelude::*;
use seabattle::init_logging;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play against the computer (the default).
    Play {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
    /// Watch the computer play against itself.
    Watch {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
}

/// Generator for stream `offset` of a game: seeded from `seed + offset` when a
/// seed is given, from the thread generator otherwise.
fn game_rng(seed: Option<u64>, offset: u64) -> SmallRng {
    match seed {
        Some(s) => SmallRng::seed_from_u64(s.wrapping_add(offset)),
        None => SmallRng::from_rng(&mut rand::rng()),
    }
}

fn greet() {
    println!("-------------------");
    println!("  Sea battle");
    println!("-------------------");
    println!(" Shoot by typing: row col, each in 1..6");
    println!(" row - row number");
    println!(" col - column number");
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let (seed, user) = match cli.command.unwrap_or(Commands::Play { seed: None }) {
        Commands::Play { seed } => (seed, MoveSource::stdio()),
        Commands::Watch { seed } => (seed, MoveSource::random(game_rng(seed, 2))),
    };
    if let Some(s) = seed {
        println!("Using fixed seed: {} (game will be reproducible)", s);
    }

    let mut placement_rng = game_rng(seed, 0);
    let opponent = MoveSource::random(game_rng(seed, 1));
    let mut game = Game::with_random_boards(&mut placement_rng, user, opponent);

    greet();
    print_player_view(&game, false);
    let winner = game.play(|game, event| {
        println!("{}", describe_event(game, event));
        match event {
            GameEvent::Resolved { .. } if !game.status().is_over() => {
                print_player_view(game, false)
            }
            GameEvent::Finished { .. } => print_player_view(game, true),
            _ => {}
        }
    })?;

    info!("game over: {:?}", game.report());
    if winner == Side::User {
        println!("Every enemy ship is at the bottom of the sea.");
    } else {
        println!("Your whole fleet has been sunk.");
    }
    Ok(())
}

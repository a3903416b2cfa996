use std::path::PathBuf;

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use referee::{Game, GameConfig, Recorder};
use tracing::debug;
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser)]
struct Args {
    /// Subdivision depth of the board (2 to 5)
    #[arg(short = 'd', long, default_value_t = 4)]
    max_depth: u8,

    /// How many random players take part
    #[arg(short, long, default_value_t = 1)]
    random_players: usize,

    /// Difficulty of a smart player; repeat the flag for more than one
    #[arg(short, long)]
    smart_player: Vec<usize>,

    /// How many turns each player gets per game
    #[arg(short, long, default_value_t = 10)]
    turns: usize,

    /// How many games to play
    #[arg(short, long, default_value_t = 1)]
    num_games: usize,

    /// RNG seed
    #[arg(long)]
    seed: Option<u64>,

    /// Record the games as JSON files into this directory
    #[arg(long)]
    record_games_to_directory: Option<PathBuf>,

    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, default_value = "info")]
    log_level: LevelFilter,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(Targets::new().with_default(args.log_level))
        .init();

    let config = GameConfig {
        max_depth: args.max_depth,
        num_random_players: args.random_players,
        smart_player_difficulties: args.smart_player,
    };

    let seed = args.seed.unwrap_or_else(rand::random);
    debug!(seed);
    let mut rng = StdRng::seed_from_u64(seed);

    let mut recorder = match args.record_games_to_directory {
        Some(dir) => Some(Recorder::new(dir)?),
        None => None,
    };

    let mut wins = vec![0_usize; config.num_players()];
    for game_idx in 0..args.num_games {
        let mut game = Game::new(&config, &mut rng)?;
        let outcome = game.run(args.turns, &mut rng, &mut recorder)?;
        for (idx, score) in outcome.scores.iter().enumerate() {
            println!("Game {}: player {} scored {}", game_idx + 1, idx + 1, score);
        }
        println!(
            "Game {}: WINNER is player {}",
            game_idx + 1,
            outcome.winner_idx + 1
        );
        wins[outcome.winner_idx] += 1;
    }

    if args.num_games > 1 {
        println!("\nWins per player:");
        for (idx, count) in wins.iter().enumerate() {
            println!("- player {}: {}", idx + 1, count);
        }
    }
    Ok(())
}

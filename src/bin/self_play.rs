//! Seeded random-vs-random self-play, or a divide perft from the start.
//!
//! Run with:
//! `cargo run --release --bin self_play -- --seed 42 --verbose`
//! `cargo run --release --bin self_play -- --perft 4`

use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use chess_rules::engines::engine_random::RandomEngine;
use chess_rules::errors::ChessResult;
use chess_rules::game_state::game_state::GameState;
use chess_rules::move_generation::legal_move_generator::LegalMoveGenerator;
use chess_rules::move_generation::perft::perft_divide;
use chess_rules::utils::engine_match_harness::{play_engine_match, MatchConfig};
use chess_rules::utils::render_game_state::render_game_state;

#[derive(Parser, Debug)]
#[command(name = "self_play", about = "Play a seeded engine-vs-engine game or run perft")]
struct Cli {
    /// Seed for the opening prefix and both random engines.
    #[arg(long, default_value_t = 0)]
    seed: u64,

    #[arg(long, default_value_t = 300)]
    max_plies: u16,

    /// Random plies played before the engines take over.
    #[arg(long = "opening-plies", default_value_t = 4)]
    opening_plies: u8,

    /// Print the board after the game.
    #[arg(short, long)]
    verbose: bool,

    /// Run a divide perft to this depth from the initial position instead.
    #[arg(long, value_name = "DEPTH")]
    perft: Option<u8>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    let result = match cli.perft {
        Some(depth) => {
            run_perft(depth);
            Ok(())
        }
        None => run_self_play(&cli),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, "self play failed");
            ExitCode::FAILURE
        }
    }
}

fn run_perft(depth: u8) {
    let mut game = GameState::new_game();
    let started = Instant::now();
    let divided = perft_divide(&LegalMoveGenerator, &mut game, depth);
    let mut total = 0usize;
    for (mv, nodes) in &divided {
        println!("{}: {nodes}", mv.coordinate_notation());
        total += nodes;
    }
    println!();
    println!("Nodes searched: {total}");
    info!(depth, nodes = total, elapsed_ms = started.elapsed().as_millis() as u64, "perft done");
}

fn run_self_play(cli: &Cli) -> ChessResult<()> {
    let config = MatchConfig {
        max_plies: cli.max_plies,
        seed: cli.seed,
        opening_random_plies: cli.opening_plies,
    };
    let mut white = RandomEngine::new(cli.seed.wrapping_add(1));
    let mut black = RandomEngine::new(cli.seed.wrapping_add(2));

    let result = play_engine_match(&mut white, &mut black, &config)?;

    println!("opening: {}", result.opening_moves.join(" "));
    println!("moves:   {}", result.played_moves.join(" "));
    if cli.verbose {
        println!("{}", render_game_state(&result.final_state));
    }
    println!("{}", result.outcome);
    Ok(())
}

//! Selfplay command - batch of random games
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: run() - orchestration
//! - Level 2: play_games(), report_results()
//! - Level 3: play_single_game(), compute_statistics()
//! - Level 4: formatting utilities

use anyhow::Result;
use clap::Args;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;
use serde::Serialize;

use hexy_core::{Game, Player, RandomPlayer};

use crate::board_args::BoardArgs;

// ============================================================================
// COMMAND ARGUMENTS (Level 4 - Configuration)
// ============================================================================

#[derive(Args)]
pub struct SelfplayArgs {
    #[command(flatten)]
    pub board: BoardArgs,

    /// Number of games to play
    #[arg(long, default_value = "100")]
    pub games: usize,

    /// Play games one after another instead of in parallel
    #[arg(long)]
    pub sequential: bool,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

/// Result of a single game
#[derive(Clone, Debug, Serialize)]
pub struct GameRecord {
    pub game_number: usize,
    pub seed: u64,
    pub winner: Option<Player>,
    pub moves: usize,
}

/// Aggregated results
#[derive(Clone, Debug, Serialize)]
pub struct SelfplayResults {
    pub size: usize,
    pub total_games: usize,
    pub a_wins: usize,
    pub b_wins: usize,
    pub avg_moves: f32,
    pub games: Vec<GameRecord>,
}

// ============================================================================
// LEVEL 1 - ORCHESTRATION
// ============================================================================

/// Run selfplay command
///
/// 1. Resolve board settings and base seed
/// 2. Play the games
/// 3. Report results
pub fn run(args: SelfplayArgs, seed: Option<u64>) -> Result<()> {
    let config = args.board.resolve()?;
    let base_seed = create_rng(seed).gen::<u64>();

    tracing::info!(
        "Starting selfplay: {} games on {}x{} (base seed {})",
        args.games,
        config.size,
        config.size,
        base_seed
    );

    let results = play_games(config.size, args.games, base_seed, !args.sequential)?;

    report_results(&results, args.json)
}

// ============================================================================
// LEVEL 2 - PHASES
// ============================================================================

/// Play all games, seeding game `n` with `base_seed + n`
pub fn play_games(size: usize, games: usize, base_seed: u64, parallel: bool) -> Result<SelfplayResults> {
    let play = |index: usize| play_single_game(size, index, base_seed.wrapping_add(index as u64));

    let records: Vec<GameRecord> = if parallel {
        (0..games).into_par_iter().map(play).collect::<Result<_>>()?
    } else {
        (0..games).map(play).collect::<Result<_>>()?
    };

    for record in &records {
        tracing::debug!(
            "Game {}: winner {:?} in {} moves",
            record.game_number,
            record.winner,
            record.moves
        );
    }

    Ok(compute_statistics(size, records))
}

fn report_results(results: &SelfplayResults, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(results)?);
    } else {
        print_text_results(results);
    }
    Ok(())
}

// ============================================================================
// LEVEL 3 - STEPS
// ============================================================================

fn play_single_game(size: usize, index: usize, seed: u64) -> Result<GameRecord> {
    let mut game = Game::new(size)?;
    let winner = RandomPlayer::new(seed).play_game(&mut game);

    Ok(GameRecord {
        game_number: index + 1,
        seed,
        winner,
        moves: game.history().len(),
    })
}

fn compute_statistics(size: usize, games: Vec<GameRecord>) -> SelfplayResults {
    let a_wins = games.iter().filter(|g| g.winner == Some(Player::A)).count();
    let b_wins = games.iter().filter(|g| g.winner == Some(Player::B)).count();

    let total_moves: usize = games.iter().map(|g| g.moves).sum();
    let avg_moves = if games.is_empty() {
        0.0
    } else {
        total_moves as f32 / games.len() as f32
    };

    SelfplayResults {
        size,
        total_games: games.len(),
        a_wins,
        b_wins,
        avg_moves,
        games,
    }
}

// ============================================================================
// LEVEL 4 - UTILITIES
// ============================================================================

/// Create RNG from seed or random
fn create_rng(seed: Option<u64>) -> ChaCha8Rng {
    match seed {
        Some(s) => ChaCha8Rng::seed_from_u64(s),
        None => ChaCha8Rng::from_entropy(),
    }
}

fn percent(count: usize, total: usize) -> f32 {
    if total > 0 {
        count as f32 / total as f32 * 100.0
    } else {
        0.0
    }
}

fn print_text_results(results: &SelfplayResults) {
    let total = results.total_games;

    println!("\n=== Selfplay Results ({}x{}) ===", results.size, results.size);
    println!("Total games: {}", total);
    println!("A wins:      {} ({:.1}%)", results.a_wins, percent(results.a_wins, total));
    println!("B wins:      {} ({:.1}%)", results.b_wins, percent(results.b_wins, total));
    println!("Avg moves:   {:.1}", results.avg_moves);
}

// ============================================================================
// TESTS
// ============================================================================

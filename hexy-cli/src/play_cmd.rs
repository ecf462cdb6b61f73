//! Play command - interactive two-player game in the terminal
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: run() - orchestration
//! - Level 2: run_session() - input loop
//! - Level 3: handle_command() - one line of input
//! - Level 4: parse_command(), messages

use std::io::{self, BufRead, Write};

use anyhow::{bail, Result};
use clap::Args;

use hexy_core::{ClickOutcome, Coord, Game, MoveResult, Rejection, Scores};

use crate::board_args::BoardArgs;
use crate::render::render_game;

// ============================================================================
// COMMAND ARGUMENTS (Level 4 - Configuration)
// ============================================================================

#[derive(Args)]
pub struct PlayArgs {
    #[command(flatten)]
    pub board: BoardArgs,
}

/// One line of player input
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Command {
    /// `i j`: click a cell
    Click(Coord),
    /// `h i j`: hover a cell
    Hover(Coord),
    Reset,
    Help,
    Quit,
}

const HELP: &str = "\
Commands:
  i j     place a stone at column i, row j
  h i j   highlight a cell
  r       reset the board (scores are kept)
  ?       show this help
  q       quit
Player A joins the top and bottom rows, player B the left and right columns.
Corners (*) count for both players.";

// ============================================================================
// LEVEL 1 - ORCHESTRATION
// ============================================================================

/// Run play command
///
/// 1. Resolve board settings
/// 2. Run the input loop on stdin/stdout
/// 3. Report the final scores
pub fn run(args: PlayArgs) -> Result<()> {
    let config = args.board.resolve()?;
    let mut game = Game::from_config(&config)?;

    tracing::info!("Starting interactive game on a {}x{} board", config.size, config.size);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let scores = run_session(&mut game, stdin.lock(), stdout.lock())?;

    println!("Final score: A {} - {} B", scores.a, scores.b);
    Ok(())
}

// ============================================================================
// LEVEL 2 - INPUT LOOP
// ============================================================================

/// Drive a game from line-based input until quit or end of input
pub fn run_session<R: BufRead, W: Write>(game: &mut Game, input: R, mut output: W) -> Result<Scores> {
    writeln!(output, "{}", HELP)?;
    write!(output, "{}", render_game(game))?;

    for line in input.lines() {
        let line = line?;
        let line = line.trim();

        // After a win any input starts the next game, as a click would
        if game.is_game_over() && !is_quit(line) {
            game.click(None);
            write!(output, "{}", render_game(game))?;
            continue;
        }

        if line.is_empty() {
            continue;
        }

        let command = match parse_command(line) {
            Ok(command) => command,
            Err(e) => {
                tracing::warn!("Bad input {:?}: {}", line, e);
                writeln!(output, "{} (type ? for help)", e)?;
                continue;
            }
        };

        if command == Command::Quit {
            break;
        }

        let message = handle_command(game, command);
        if let Some(message) = message {
            writeln!(output, "{}", message)?;
        }
        write!(output, "{}", render_game(game))?;
    }

    Ok(game.scores())
}

// ============================================================================
// LEVEL 3 - STEPS
// ============================================================================

/// Apply one command, returning a message for the player if any
fn handle_command(game: &mut Game, command: Command) -> Option<String> {
    match command {
        Command::Click(c) => match game.click(Some(c)) {
            ClickOutcome::Reset => Some("New game".to_string()),
            ClickOutcome::Move(result) => describe_move(c, result),
        },
        Command::Hover(c) => {
            game.hover(Some(c));
            None
        }
        Command::Reset => {
            game.reset();
            Some("Board reset".to_string())
        }
        Command::Help => Some(HELP.to_string()),
        Command::Quit => None,
    }
}

fn describe_move(c: Coord, result: MoveResult) -> Option<String> {
    match result {
        MoveResult::Applied { .. } => None,
        MoveResult::GameWon { winner } => Some(format!("Player {} connects and wins!", winner)),
        MoveResult::Rejected(reason) => {
            tracing::warn!("Move at {} rejected: {:?}", c, reason);
            Some(match reason {
                Rejection::Occupied => format!("Cell {} is already taken", c),
                Rejection::OffBoard => format!("Cell {} is not on the board", c),
                Rejection::GameOver => "The game is over".to_string(),
            })
        }
    }
}

// ============================================================================
// LEVEL 4 - UTILITIES
// ============================================================================

fn is_quit(line: &str) -> bool {
    matches!(line, "q" | "quit" | "exit")
}

fn parse_command(line: &str) -> Result<Command> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    match parts.as_slice() {
        ["q"] | ["quit"] | ["exit"] => Ok(Command::Quit),
        ["r"] | ["reset"] => Ok(Command::Reset),
        ["?"] | ["help"] => Ok(Command::Help),
        ["h", i, j] | ["hover", i, j] => Ok(Command::Hover(parse_coord(i, j)?)),
        [i, j] => Ok(Command::Click(parse_coord(i, j)?)),
        _ => bail!("Unrecognized input"),
    }
}

fn parse_coord(i: &str, j: &str) -> Result<Coord> {
    match (i.parse::<usize>(), j.parse::<usize>()) {
        (Ok(i), Ok(j)) => Ok(Coord::new(i, j)),
        _ => bail!("Coordinates must be non-negative integers"),
    }
}

// ============================================================================
// TESTS
// ============================================================================

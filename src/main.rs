//! Strictly Opponent - CLI
//!
//! Answers a tic-tac-toe position with the computer's best move.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command, parse_moves};
use strictly_minimax::{Board, ComputerPlayer, GameConfig, Minimax, Player};
use tracing::{debug, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => GameConfig::from_file(path)?,
        None => GameConfig::default(),
    };
    debug!(?config, "Using game config");

    match cli.command {
        Command::BestMove { moves } => run_best_move(config, &moves),
        Command::Evaluate { board, to_move } => run_evaluate(config, &board, to_move),
        Command::Show { moves } => run_show(config, &moves),
    }
}

/// Print the computer's reply
#[instrument(skip(config))]
fn run_best_move(config: GameConfig, moves: &[String]) -> Result<()> {
    let moves = parse_moves(moves)?;
    let cell = ComputerPlayer::new(config)
        .best_move(&moves)
        .context("Failed to compute best move")?;
    println!("{}", cell);
    Ok(())
}

/// Print the best cell and score for a compact board
#[instrument(skip(config))]
fn run_evaluate(config: GameConfig, board: &str, to_move: Player) -> Result<()> {
    let mut board: Board = board.parse().context("Failed to parse board")?;
    let best = Minimax::new(config.roles()).evaluate(&mut board, to_move);
    let cell = best
        .index
        .map(|index| config.coordinates().index_to_identifier(index))
        .unwrap_or_else(|| "-".to_string());
    println!("{} {}", cell, best.score);
    Ok(())
}

/// Print the board built from the moves
#[instrument(skip(config))]
fn run_show(config: GameConfig, moves: &[String]) -> Result<()> {
    let moves = parse_moves(moves)?;
    let coordinates = config.coordinates();
    let normalized = coordinates.normalize(&moves)?;
    let board = coordinates.materialize(&normalized, *config.board_size())?;
    println!("{}", board);
    Ok(())
}

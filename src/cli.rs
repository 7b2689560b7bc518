//! Command-line interface for strictly_opponent.

use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand};
use strictly_minimax::{MoveSet, Player};

/// Strictly Opponent - tic-tac-toe computer player driven by minimax
#[derive(Parser, Debug)]
#[command(name = "strictly_opponent")]
#[command(about = "Computes the computer's best tic-tac-toe move", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML game config (board size, cell prefix, computer mark)
    #[arg(short, long, global = true)]
    pub config: Option<std::path::PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the computer's best reply to the given moves
    BestMove {
        /// Moves made so far as <cell>=<mark>, e.g. c1=o c5=x
        moves: Vec<String>,
    },

    /// Evaluate a board in compact notation, e.g. "oox .x. ..."
    Evaluate {
        /// Board cells: x, o, and . (or a digit) for empty
        board: String,

        /// Mark to move
        #[arg(long, default_value = "o")]
        to_move: Player,
    },

    /// Print the board built from the given moves
    Show {
        /// Moves made so far as <cell>=<mark>
        moves: Vec<String>,
    },
}

/// Parses `<cell>=<mark>` arguments into a move set.
pub fn parse_moves(args: &[String]) -> Result<MoveSet> {
    args.iter()
        .map(|arg| {
            let (cell, mark) = arg
                .split_once('=')
                .ok_or_else(|| anyhow!("Expected <cell>=<mark>, got {:?}", arg))?;
            let player = mark
                .trim()
                .parse::<Player>()
                .with_context(|| format!("Unknown mark in {:?}", arg))?;
            Ok((cell.trim().to_string(), player))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_parse_moves() {
        let moves = parse_moves(&args(&["c1=o", "c5=X"])).unwrap();
        assert_eq!(moves.get("c1"), Some(&Player::O));
        assert_eq!(moves.get("c5"), Some(&Player::X));
    }

    #[test]
    fn test_parse_moves_rejects_missing_separator() {
        assert!(parse_moves(&args(&["c1o"])).is_err());
    }

    #[test]
    fn test_parse_moves_rejects_unknown_mark() {
        assert!(parse_moves(&args(&["c1=z"])).is_err());
    }

    #[test]
    fn test_cli_parses_best_move() {
        let cli = Cli::try_parse_from(["strictly_opponent", "best-move", "c1=o", "c5=x"]).unwrap();
        match cli.command {
            Command::BestMove { moves } => assert_eq!(moves, args(&["c1=o", "c5=x"])),
            other => panic!("Unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_cli_parses_evaluate_mark() {
        let cli = Cli::try_parse_from(["strictly_opponent", "evaluate", "--to-move", "x", "........."])
            .unwrap();
        match cli.command {
            Command::Evaluate { to_move, .. } => assert_eq!(to_move, Player::X),
            other => panic!("Unexpected command: {:?}", other),
        }
    }
}

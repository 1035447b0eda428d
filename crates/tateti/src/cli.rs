//! Command-line interface for tateti.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Tateti - two-player tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "tateti")]
#[command(about = "Two-player tic-tac-toe with persistent scores", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Config file (defaults to ./tateti.toml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Store file holding scores and preferences (overrides config)
    #[arg(long, global = true)]
    pub store: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Play in the terminal UI
    Play,

    /// Print the persisted score
    Score,

    /// Clear the persisted score
    Reset,

    /// Show, set or clear the accent color
    Color {
        /// New accent color (e.g. "#1e90ff" or "magenta")
        value: Option<String>,

        /// Restore the default accent color
        #[arg(long, conflicts_with = "value")]
        clear: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_global_store_after_subcommand() {
        let cli = Cli::try_parse_from(["tateti", "score", "--store", "s.json"]).unwrap();
        assert_eq!(cli.command, Command::Score);
        assert_eq!(cli.store, Some(PathBuf::from("s.json")));
    }

    #[test]
    fn test_color_value_conflicts_with_clear() {
        assert!(Cli::try_parse_from(["tateti", "color", "red", "--clear"]).is_err());
        let cli = Cli::try_parse_from(["tateti", "color", "--clear"]).unwrap();
        assert_eq!(
            cli.command,
            Command::Color {
                value: None,
                clear: true
            }
        );
    }

    #[test]
    fn test_subcommand_required() {
        assert!(Cli::try_parse_from(["tateti"]).is_err());
    }
}

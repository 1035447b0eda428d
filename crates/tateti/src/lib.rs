//! Tateti - two-player tic-tac-toe in the terminal.
//!
//! This crate is the presentation layer around [`tateti_engine`]: a
//! ratatui front end, a JSON key-value file standing in for browser
//! storage, TOML configuration and the command line.
//!
//! # Architecture
//!
//! - **Engine**: pure game logic, re-exported from `tateti_engine`
//! - **Store**: scores and preferences in one JSON file
//! - **TUI**: keyboard-driven board with undo and score tracking
//! - **Commands**: inspect or reset persisted data without playing

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod commands;
mod config;
mod logging;
mod store;
mod theme;
mod tui;

// Crate-level exports - Command line
pub use cli::{Cli, Command};
pub use commands::{accent, reset_score, show_score};

// Crate-level exports - Configuration
pub use config::{Config, ConfigError, DEFAULT_CONFIG_PATH, STORE_ENV};

// Crate-level exports - Logging
pub use logging::{init_file, init_stderr};

// Crate-level exports - Persistence
pub use store::{ACCENT_KEY, FileStore, PreferenceStore, SCORE_KEY, StoreError};

// Crate-level exports - Presentation
pub use theme::{DEFAULT_ACCENT, PALETTE, accent_or_default, next_accent, parse_accent};
pub use tui::{Action, App, Direction, draw, map_key, move_cursor, run, status_line};

// Crate-level exports - Game types
pub use tateti_engine::{GameEngine, GameState, Player, Position, Score, Status};

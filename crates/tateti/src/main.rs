//! Tateti - unified CLI.

use anyhow::{Context, Result};
use clap::Parser;
use tateti::{Cli, Command, Config, FileStore};
use tracing::{debug, info};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(store) = cli.store {
        config = config.with_store_path(store);
    }

    match cli.command {
        Command::Play => play(&config),
        command => run_command(&config, command),
    }
}

/// Run the terminal UI, logging to the configured file.
fn play(config: &Config) -> Result<()> {
    tateti::init_file(config.log_file(), config.log_filter())
        .with_context(|| format!("Failed to create log file {}", config.log_file().display()))?;
    tateti::run(config)
}

/// Run a one-shot command and print its result.
fn run_command(config: &Config, command: Command) -> Result<()> {
    tateti::init_stderr(config.log_filter());
    debug!(?config, ?command, "Running command");

    let mut store = FileStore::new(config.store_path());
    let output = match command {
        Command::Play => return play(config),
        Command::Score => tateti::show_score(store),
        Command::Reset => tateti::reset_score(store),
        Command::Color { value, clear } => tateti::accent(&mut store, value.as_deref(), clear)?,
    };

    info!("Command finished");
    println!("{}", output);
    Ok(())
}

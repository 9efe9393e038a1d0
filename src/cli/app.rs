//! Main CLI application structure

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::Parser;

use super::config::Config;
use super::menu;
use super::output::{Output, OutputFormat};
use super::prompt::Console;
use crate::storage::TaskStore;

#[derive(Parser)]
#[command(name = "taskboard")]
#[command(author, version, about = "Interactive in-memory task manager")]
pub struct Cli {
    /// Output format for reports
    #[arg(long, short = 'f', default_value = "text")]
    pub format: OutputFormat,

    /// Enable verbose output for debugging
    #[arg(long, short = 'v')]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Do not wait for Enter after each action
    #[arg(long)]
    pub no_pause: bool,
}

/// Runs one interactive session over `input` and `out`.
///
/// Returns the store as it was when the session ended.
pub fn run_session<R: BufRead, W: Write>(config: &Config, input: R, out: W) -> Result<TaskStore> {
    let output = Output::new(out, config.format, config.verbose, config.color);
    let mut console = Console::new(input, output).with_pause(config.pause);
    let mut store = TaskStore::new();

    console.out().verbose_ctx("session", &format!("Starting with {:?}", config));
    menu::run(&mut console, &mut store).context("Interactive session failed")?;
    console.out().verbose_ctx(
        "session",
        &format!("Discarding {} tasks on exit", store.len()),
    );

    Ok(store)
}

/// Main entry point for the CLI
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::from(&cli);

    let stdin = io::stdin();
    let stdout = io::stdout();
    run_session(&config, stdin.lock(), stdout.lock())?;
    Ok(())
}

//! Session configuration
//!
//! The program reads no configuration files and no environment variables;
//! every setting comes from a command-line flag.

use super::app::Cli;
use super::output::OutputFormat;

/// Settings for one interactive session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// How reports are written
    pub format: OutputFormat,

    /// Diagnostic lines on stderr
    pub verbose: bool,

    /// ANSI colors in text output
    pub color: bool,

    /// Wait for Enter after each menu action
    pub pause: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            verbose: false,
            color: true,
            pause: true,
        }
    }
}

impl From<&Cli> for Config {
    fn from(cli: &Cli) -> Self {
        Self {
            format: cli.format,
            verbose: cli.verbose,
            color: !cli.no_color,
            pause: !cli.no_pause,
        }
    }
}

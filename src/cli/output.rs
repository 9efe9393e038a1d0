//! Output formatting for the interactive session
//!
//! Two kinds of text leave the program: the dialogue itself (menus, prompts,
//! headings) and reports (results of an action). In text mode both go to the
//! session writer. In JSON mode reports become one JSON document per line on
//! the session writer and the dialogue moves to stderr.

use std::fmt::Display;
use std::io::{self, Write};

use crossterm::style::{Color, Stylize};
use serde::Serialize;

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Output helper for consistent formatting
pub struct Output<W: Write> {
    out: W,
    format: OutputFormat,
    verbose: bool,
    color: bool,
}

impl<W: Write> Output<W> {
    pub fn new(out: W, format: OutputFormat, verbose: bool, color: bool) -> Self {
        Self {
            out,
            format,
            verbose,
            color,
        }
    }

    /// Consumes the helper and returns the underlying writer
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Wraps `text` in a terminal color when colors are enabled
    pub fn paint(&self, text: impl Display, color: Color) -> String {
        if self.color {
            text.to_string().with(color).to_string()
        } else {
            text.to_string()
        }
    }

    /// Prints a line of dialogue (menus, headings, option lists)
    pub fn chrome(&mut self, text: &str) -> io::Result<()> {
        match self.format {
            OutputFormat::Text => writeln!(self.out, "{}", text),
            OutputFormat::Json => writeln!(io::stderr(), "{}", text),
        }
    }

    /// Prints a prompt without a trailing newline
    pub fn prompt(&mut self, text: &str) -> io::Result<()> {
        match self.format {
            OutputFormat::Text => {
                write!(self.out, "{}", text)?;
                self.out.flush()
            }
            OutputFormat::Json => {
                let mut err = io::stderr();
                write!(err, "{}", text)?;
                err.flush()
            }
        }
    }

    /// Prints a line of rendered content (text only, ignored in JSON mode)
    pub fn line(&mut self, text: &str) -> io::Result<()> {
        if self.format == OutputFormat::Text {
            writeln!(self.out, "{}", text)?;
        }
        Ok(())
    }

    /// Prints a blank line (text only)
    pub fn blank(&mut self) -> io::Result<()> {
        self.line("")
    }

    /// Prints a success message
    pub fn success(&mut self, message: &str) -> io::Result<()> {
        match self.format {
            OutputFormat::Text => {
                let text = self.paint(message, Color::Green);
                writeln!(self.out, "{}", text)
            }
            OutputFormat::Json => self.json_line(&serde_json::json!({
                "success": true,
                "message": message
            })),
        }
    }

    /// Prints a warning: the action was valid but changed nothing
    pub fn warning(&mut self, message: &str) -> io::Result<()> {
        match self.format {
            OutputFormat::Text => {
                let text = self.paint(message, Color::Yellow);
                writeln!(self.out, "{}", text)
            }
            OutputFormat::Json => self.json_line(&serde_json::json!({
                "success": false,
                "warning": message
            })),
        }
    }

    /// Prints an error message
    ///
    /// Errors stay on the session writer in text mode; they are part of the
    /// dialogue the user is reading.
    pub fn error(&mut self, message: &str) -> io::Result<()> {
        match self.format {
            OutputFormat::Text => {
                let text = self.paint(format!("Error: {}", message), Color::Red);
                writeln!(self.out, "{}", text)
            }
            OutputFormat::Json => self.json_line(&serde_json::json!({
                "success": false,
                "error": message
            })),
        }
    }

    /// Prints a neutral status message ("nothing found", "cancelled")
    pub fn info(&mut self, message: &str) -> io::Result<()> {
        match self.format {
            OutputFormat::Text => writeln!(self.out, "{}", message),
            OutputFormat::Json => self.json_line(&serde_json::json!({ "message": message })),
        }
    }

    /// Prints structured data
    pub fn data<T: Serialize>(&mut self, data: &T) -> io::Result<()> {
        match self.format {
            OutputFormat::Text => {
                // Callers render text themselves; this is a readable fallback
                let json = serde_json::to_string_pretty(data).map_err(io::Error::other)?;
                writeln!(self.out, "{}", json)
            }
            OutputFormat::Json => self.json_line(data),
        }
    }

    fn json_line<T: Serialize>(&mut self, value: &T) -> io::Result<()> {
        let json = serde_json::to_string(value).map_err(io::Error::other)?;
        writeln!(self.out, "{}", json)
    }

    /// Returns true if using JSON format
    pub fn is_json(&self) -> bool {
        self.format == OutputFormat::Json
    }

    /// Prints a verbose debug message (only when --verbose is set)
    pub fn verbose(&self, message: &str) {
        if self.verbose {
            eprintln!("[verbose] {}", message);
        }
    }

    /// Prints a verbose debug message with context (only when --verbose is set)
    pub fn verbose_ctx(&self, context: &str, message: &str) {
        if self.verbose {
            eprintln!("[verbose:{}] {}", context, message);
        }
    }
}

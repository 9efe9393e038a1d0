//! The root menu loop

use std::fmt;
use std::io::{BufRead, Write};
use std::str::FromStr;

use thiserror::Error;

use super::prompt::{Console, PromptError};
use super::render;
use super::{query, task};
use crate::storage::TaskStore;

#[derive(Debug, Error, PartialEq)]
pub enum MenuError {
    #[error("Invalid input. Choose 0-7.")]
    InvalidChoice(String),
}

/// A root menu entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCommand {
    List,
    Create,
    Complete,
    Edit,
    Delete,
    Search,
    Stats,
    Exit,
}

impl MenuCommand {
    pub fn from_number(n: u8) -> Option<Self> {
        match n {
            1 => Some(MenuCommand::List),
            2 => Some(MenuCommand::Create),
            3 => Some(MenuCommand::Complete),
            4 => Some(MenuCommand::Edit),
            5 => Some(MenuCommand::Delete),
            6 => Some(MenuCommand::Search),
            7 => Some(MenuCommand::Stats),
            0 => Some(MenuCommand::Exit),
            _ => None,
        }
    }

    fn name(&self) -> &'static str {
        match self {
            MenuCommand::List => "list",
            MenuCommand::Create => "create",
            MenuCommand::Complete => "complete",
            MenuCommand::Edit => "edit",
            MenuCommand::Delete => "delete",
            MenuCommand::Search => "search",
            MenuCommand::Stats => "stats",
            MenuCommand::Exit => "exit",
        }
    }
}

impl fmt::Display for MenuCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MenuCommand {
    type Err = MenuError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u8>()
            .ok()
            .and_then(Self::from_number)
            .ok_or_else(|| MenuError::InvalidChoice(s.to_string()))
    }
}

fn dispatch<R: BufRead, W: Write>(
    command: MenuCommand,
    console: &mut Console<R, W>,
    store: &mut TaskStore,
) -> Result<(), PromptError> {
    match command {
        MenuCommand::List => query::list(console, store),
        MenuCommand::Create => task::create(console, store),
        MenuCommand::Complete => task::complete(console, store),
        MenuCommand::Edit => task::edit(console, store),
        MenuCommand::Delete => task::delete(console, store),
        MenuCommand::Search => query::search(console, store),
        MenuCommand::Stats => query::stats(console, store),
        MenuCommand::Exit => Ok(()),
    }
}

/// Runs the menu until the user exits or input ends.
///
/// End of input anywhere, including mid-flow, ends the session normally.
/// Only I/O failures are returned as errors.
pub fn run<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    store: &mut TaskStore,
) -> Result<(), PromptError> {
    loop {
        render::menu(console.out())?;

        let answer = match console.ask("Choose an action (0-7): ") {
            Ok(answer) => answer,
            Err(PromptError::EndOfInput) => break,
            Err(e) => return Err(e),
        };

        let command = match answer.parse::<MenuCommand>() {
            Ok(command) => command,
            Err(e) => {
                console.out().error(&e.to_string())?;
                continue;
            }
        };
        if command == MenuCommand::Exit {
            break;
        }

        console
            .out()
            .verbose_ctx("menu", &format!("Running {} with {} tasks", command, store.len()));

        let outcome = match dispatch(command, console, store) {
            Ok(()) => console.pause(),
            Err(e) => Err(e),
        };
        match outcome {
            Ok(()) => {}
            Err(PromptError::EndOfInput) => break,
            Err(e) => return Err(e),
        }
    }

    console.out().verbose("Leaving menu");
    Ok(())
}

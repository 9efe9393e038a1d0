//! Line-oriented input with validation
//!
//! [`Console`] pairs a line source with an [`Output`]. Every "ask until the
//! answer is valid" loop in the program runs through [`Console::ask_until`],
//! so flows never touch stdin directly and can be driven from a buffer in
//! tests.

use std::fmt::Display;
use std::io::{self, BufRead, Write};
use std::ops::RangeInclusive;

use thiserror::Error;

use super::output::Output;

/// Answers accepted as "yes" by [`Console::confirm`], compared lowercased
pub const AFFIRMATIVE: [&str; 3] = ["y", "yes", "д"];

#[derive(Debug, Error)]
pub enum PromptError {
    #[error("End of input")]
    EndOfInput,

    #[error("Terminal I/O failed: {0}")]
    Io(#[from] io::Error),
}

impl PromptError {
    pub fn is_end_of_input(&self) -> bool {
        matches!(self, PromptError::EndOfInput)
    }
}

/// States of a validating prompt
enum PromptState<T> {
    Prompting,
    Validating(String),
    Accepted(T),
    Aborted,
}

/// Returns true for a "yes" answer
pub fn is_affirmative(answer: &str) -> bool {
    let answer = answer.trim().to_lowercase();
    AFFIRMATIVE.contains(&answer.as_str())
}

/// Interactive console over any line source and writer
pub struct Console<R, W: Write> {
    input: R,
    output: Output<W>,
    pause: bool,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: Output<W>) -> Self {
        Self {
            input,
            output,
            pause: false,
        }
    }

    /// Enables the "press Enter" pause after each menu action
    pub fn with_pause(mut self, pause: bool) -> Self {
        self.pause = pause;
        self
    }

    pub fn out(&mut self) -> &mut Output<W> {
        &mut self.output
    }

    pub fn into_output(self) -> Output<W> {
        self.output
    }

    /// Reads one trimmed line
    ///
    /// Bytes that are not UTF-8 become replacement characters, so a garbled
    /// line fails validation like any other bad answer.
    pub fn read_line(&mut self) -> Result<String, PromptError> {
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Err(PromptError::EndOfInput);
        }
        Ok(String::from_utf8_lossy(&buf).trim().to_string())
    }

    /// Prints `prompt` and reads the answer
    pub fn ask(&mut self, prompt: &str) -> Result<String, PromptError> {
        self.output.prompt(prompt)?;
        self.read_line()
    }

    /// Asks until `validate` accepts the answer.
    ///
    /// A rejected answer prints the validator's message and asks again. End
    /// of input aborts with [`PromptError::EndOfInput`].
    pub fn ask_until<T, F>(&mut self, prompt: &str, mut validate: F) -> Result<T, PromptError>
    where
        F: FnMut(&str) -> Result<T, String>,
    {
        let mut state = PromptState::Prompting;
        loop {
            state = match state {
                PromptState::Prompting => match self.ask(prompt) {
                    Ok(answer) => PromptState::Validating(answer),
                    Err(PromptError::EndOfInput) => PromptState::Aborted,
                    Err(e) => return Err(e),
                },
                PromptState::Validating(answer) => match validate(&answer) {
                    Ok(value) => PromptState::Accepted(value),
                    Err(message) => {
                        self.output.error(&message)?;
                        PromptState::Prompting
                    }
                },
                PromptState::Accepted(value) => return Ok(value),
                PromptState::Aborted => return Err(PromptError::EndOfInput),
            };
        }
    }

    /// Asks until the answer is non-blank
    pub fn ask_non_empty(&mut self, prompt: &str, message: &str) -> Result<String, PromptError> {
        self.ask_until(prompt, |answer| {
            if answer.is_empty() {
                Err(message.to_string())
            } else {
                Ok(answer.to_string())
            }
        })
    }

    /// Asks for a number within `range`
    pub fn read_number(
        &mut self,
        prompt: &str,
        range: RangeInclusive<usize>,
    ) -> Result<usize, PromptError> {
        self.ask_until(prompt, |answer| parse_in_range(answer, &range))
    }

    /// Asks for a number within `range`; a blank answer gives `None`
    pub fn read_optional_number(
        &mut self,
        prompt: &str,
        range: RangeInclusive<usize>,
    ) -> Result<Option<usize>, PromptError> {
        self.ask_until(prompt, |answer| {
            if answer.is_empty() {
                Ok(None)
            } else {
                parse_in_range(answer, &range).map(Some)
            }
        })
    }

    /// Shows a numbered list and returns the chosen option.
    ///
    /// `options` must not be empty.
    pub fn select<'a, T: Display>(
        &mut self,
        title: &str,
        options: &'a [T],
    ) -> Result<&'a T, PromptError> {
        self.list_options(title, options)?;
        let prompt = format!("Your choice (1-{}): ", options.len());
        let choice = self.read_number(&prompt, 1..=options.len())?;
        Ok(&options[choice - 1])
    }

    /// Like [`Console::select`], but a blank answer skips the choice
    pub fn select_optional<'a, T: Display>(
        &mut self,
        title: &str,
        options: &'a [T],
    ) -> Result<Option<&'a T>, PromptError> {
        self.list_options(title, options)?;
        let prompt = format!("Your choice (1-{}) or Enter to skip: ", options.len());
        let choice = self.read_optional_number(&prompt, 1..=options.len())?;
        Ok(choice.map(|c| &options[c - 1]))
    }

    fn list_options<T: Display>(&mut self, title: &str, options: &[T]) -> io::Result<()> {
        self.output.chrome(title)?;
        for (i, option) in options.iter().enumerate() {
            self.output.chrome(&format!("{}. {}", i + 1, option))?;
        }
        Ok(())
    }

    /// Asks a yes/no question; anything but an affirmative answer is "no"
    pub fn confirm(&mut self, question: &str) -> Result<bool, PromptError> {
        let answer = self.ask(question)?;
        Ok(is_affirmative(&answer))
    }

    /// Waits for Enter when pausing is enabled
    pub fn pause(&mut self) -> Result<(), PromptError> {
        if self.pause {
            self.output.chrome("\nPress Enter to continue...")?;
            self.read_line()?;
        }
        Ok(())
    }
}

fn parse_in_range(answer: &str, range: &RangeInclusive<usize>) -> Result<usize, String> {
    match answer.parse::<usize>() {
        Ok(n) if range.contains(&n) => Ok(n),
        _ => Err(format!(
            "Enter a number from {} to {}",
            range.start(),
            range.end()
        )),
    }
}

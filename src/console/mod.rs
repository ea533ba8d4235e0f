//! Console helper shared by every app
//!
//! Wraps a [`LineSource`] and an output sink and provides the
//! read-validate-loop prompts the apps are built from: numbered menus,
//! range-checked numbers, free text and the yes/no repeat question.

pub mod display;
pub mod input;

use crossterm::{
    cursor, execute,
    terminal::{Clear, ClearType},
};
use std::fmt::Display;
use std::io::{self, Stdout, Write};

use crate::errors::{AppError, Result};
pub use crate::console::input::{InputHandler, LineSource, ScriptedInput};

const CHOICE_PROMPT: &str = "\tPlease input choice > ";
const REPEAT_PROMPT: &str = "\n\tWould you like to go again? (y/n) > ";

/// Prompting front end over a line source and an output sink
pub struct Console<S: LineSource, W: Write> {
    source: S,
    out: W,
    author: Option<String>,
}

impl<S: LineSource> Console<S, Stdout> {
    /// Console writing to stdout
    pub fn stdout(source: S) -> Self {
        Console::new(source, io::stdout())
    }
}

impl<S: LineSource, W: Write> Console<S, W> {
    pub fn new(source: S, out: W) -> Self {
        Console {
            source,
            out,
            author: None,
        }
    }

    /// Author credited under every heading
    pub fn with_author(mut self, author: Option<String>) -> Self {
        self.author = author.filter(|a| !a.trim().is_empty());
        self
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn output(&self) -> &W {
        &self.out
    }

    /// Consume the console, returning its parts
    pub fn into_parts(self) -> (S, W) {
        (self.source, self.out)
    }

    /// Write one line of output
    pub fn say(&mut self, line: impl Display) -> Result<()> {
        writeln!(self.out, "{}", line)?;
        Ok(())
    }

    /// Write a blank line
    pub fn blank(&mut self) -> Result<()> {
        self.say("")
    }

    /// Write a result line in the result color
    pub fn show_result(&mut self, message: &str) -> Result<()> {
        let line = display::result(message);
        self.say(line)
    }

    /// Write a validation error in the error color
    pub fn show_error(&mut self, message: &str) -> Result<()> {
        let line = display::error(message);
        self.say(line)
    }

    pub fn output_heading(&mut self, heading: &str) -> Result<()> {
        let text = display::heading(heading, self.author.as_deref());
        self.say(text)
    }

    pub fn output_title(&mut self, title: &str) -> Result<()> {
        let text = display::title(title);
        self.say(text)
    }

    pub fn display_choices(&mut self, choices: &[&str]) -> Result<()> {
        let text = display::choices(choices);
        self.say(text)
    }

    pub fn clear_screen(&mut self) -> Result<()> {
        execute!(self.out, Clear(ClearType::All), cursor::MoveTo(0, 0))?;
        Ok(())
    }

    /// Read one line; a closed source is an error
    pub fn input_text(&mut self, prompt: &str) -> Result<String> {
        self.out.flush()?;
        self.source
            .read_line(prompt)?
            .map(|line| line.trim().to_string())
            .ok_or(AppError::InputClosed)
    }

    /// Read until the line parses as a finite number
    pub fn input_number(&mut self, prompt: &str) -> Result<f64> {
        loop {
            let line = self.input_text(prompt)?;
            match parse_number(&line) {
                Some(number) => return Ok(number),
                None => self.show_error("Invalid number.\n")?,
            }
        }
    }

    /// Read until the number lies within `min..=max`
    pub fn input_number_in_range(&mut self, prompt: &str, min: f64, max: f64) -> Result<f64> {
        loop {
            let number = self.input_number(prompt)?;
            if (min..=max).contains(&number) {
                return Ok(number);
            }
            self.show_error(&format!("The number must be in the range {}-{}", min, max))?;
        }
    }

    /// Read until the line is a whole number within `min..=max`
    pub fn input_integer_in_range(&mut self, prompt: &str, min: i64, max: i64) -> Result<i64> {
        loop {
            let line = self.input_text(prompt)?;
            match line.parse::<i64>() {
                Ok(number) if (min..=max).contains(&number) => return Ok(number),
                Ok(_) => {
                    self.show_error(&format!("The number must be in the range {}-{}", min, max))?
                }
                Err(_) => self.show_error("Invalid number.\n")?,
            }
        }
    }

    /// Show the numbered choices and return the 1-based selection
    pub fn select_choice(&mut self, choices: &[&str]) -> Result<usize> {
        self.display_choices(choices)?;
        let last = choices.len() as i64;
        let choice = self.input_integer_in_range(CHOICE_PROMPT, 1, last)?;
        tracing::debug!(choice, "menu selection");
        Ok(choice as usize)
    }

    /// Ask whether to run the app again; only `y` or `n` are accepted
    pub fn ask_to_repeat(&mut self) -> Result<bool> {
        loop {
            let answer = self.input_text(REPEAT_PROMPT)?;
            match answer.to_lowercase().as_str() {
                "y" => return Ok(true),
                "n" => return Ok(false),
                _ => self.show_error("Invalid input. Please try again.")?,
            }
        }
    }
}

/// Parse a finite number, ignoring surrounding whitespace
pub fn parse_number(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().filter(|n| n.is_finite())
}

//! Input layer shared by the tools.
//!
//! Two modes, mirroring the shell's interactive and scripted paths:
//! `Interactive` renders dialoguer prompts on a terminal, `Script` consumes
//! plain stdin lines so flows can be driven from a pipe. Validation
//! re-prompt loops live here; the stores only ever see checked primitives.

use std::io::{self, BufRead, IsTerminal};

use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};

use super::output;
use crate::errors::{CoreError, CoreResult};

/// Environment switch forcing script mode, alongside non-tty detection.
pub const SCRIPT_MODE_ENV: &str = "CAMPUS_CORE_CLI_SCRIPT";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptMode {
    Interactive,
    Script,
}

pub struct Prompter {
    mode: PromptMode,
    theme: ColorfulTheme,
}

impl Prompter {
    pub fn from_env() -> Self {
        let scripted =
            std::env::var_os(SCRIPT_MODE_ENV).is_some() || !io::stdin().is_terminal();
        Self::new(if scripted {
            PromptMode::Script
        } else {
            PromptMode::Interactive
        })
    }

    pub fn new(mode: PromptMode) -> Self {
        Self {
            mode,
            theme: ColorfulTheme::default(),
        }
    }

    pub fn mode(&self) -> PromptMode {
        self.mode
    }

    /// Reads one raw answer. `None` means the input source is exhausted
    /// and the calling flow should wind down.
    fn read_raw(&self, label: &str) -> CoreResult<Option<String>> {
        match self.mode {
            PromptMode::Interactive => {
                let value = Input::<String>::with_theme(&self.theme)
                    .with_prompt(label)
                    .allow_empty(true)
                    .interact_text()
                    .map_err(dialoguer_failure)?;
                Ok(Some(value))
            }
            PromptMode::Script => {
                let mut line = String::new();
                if io::stdin().lock().read_line(&mut line)? == 0 {
                    Ok(None)
                } else {
                    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
                }
            }
        }
    }

    /// Re-prompts until a non-blank value arrives.
    pub fn nonempty_text(&self, label: &str) -> CoreResult<Option<String>> {
        loop {
            let Some(raw) = self.read_raw(label)? else {
                return Ok(None);
            };
            let value = raw.trim();
            if !value.is_empty() {
                return Ok(Some(value.to_string()));
            }
            output::warning("Please enter a value.");
        }
    }

    /// Any finite number, re-prompting on parse failures.
    pub fn number(&self, label: &str) -> CoreResult<Option<f64>> {
        loop {
            let Some(raw) = self.read_raw(label)? else {
                return Ok(None);
            };
            match raw.trim().parse::<f64>() {
                Ok(value) if value.is_finite() => return Ok(Some(value)),
                _ => output::warning("Please enter a valid number."),
            }
        }
    }

    /// Strictly positive amount, re-prompting otherwise.
    pub fn positive_amount(&self, label: &str) -> CoreResult<Option<f64>> {
        loop {
            let Some(value) = self.number(label)? else {
                return Ok(None);
            };
            if value > 0.0 {
                return Ok(Some(value));
            }
            output::warning("Amount must be greater than 0.");
        }
    }

    /// Finite number within `low..=high`, re-prompting otherwise.
    pub fn number_in_range(&self, label: &str, low: f64, high: f64) -> CoreResult<Option<f64>> {
        loop {
            let Some(value) = self.number(label)? else {
                return Ok(None);
            };
            if (low..=high).contains(&value) {
                return Ok(Some(value));
            }
            output::warning(format!("Value must be between {} and {}.", low, high));
        }
    }

    /// Whole number, re-prompting on parse failures.
    pub fn integer(&self, label: &str) -> CoreResult<Option<u32>> {
        loop {
            let Some(raw) = self.read_raw(label)? else {
                return Ok(None);
            };
            match raw.trim().parse::<u32>() {
                Ok(value) => return Ok(Some(value)),
                Err(_) => output::warning("Please enter a valid number."),
            }
        }
    }

    /// Whole number within `low..=high`, re-prompting otherwise.
    pub fn integer_in_range(&self, label: &str, low: u32, high: u32) -> CoreResult<Option<u32>> {
        loop {
            let Some(value) = self.integer(label)? else {
                return Ok(None);
            };
            if (low..=high).contains(&value) {
                return Ok(Some(value));
            }
            output::warning(format!("Value must be between {} and {}.", low, high));
        }
    }

    /// Shows a menu and returns the selected index. Interactive mode uses
    /// an arrow-key selector; script mode prints the numbered options and
    /// reads a 1-based choice.
    pub fn menu(&self, title: &str, options: &[&str]) -> CoreResult<Option<usize>> {
        match self.mode {
            PromptMode::Interactive => {
                let choice = Select::with_theme(&self.theme)
                    .with_prompt(title)
                    .items(options)
                    .default(0)
                    .interact_opt()
                    .map_err(dialoguer_failure)?;
                Ok(choice)
            }
            PromptMode::Script => {
                output::blank_line();
                output::info(format!("{}:", title));
                for (index, option) in options.iter().enumerate() {
                    output::info(format!("{}. {}", index + 1, option));
                }
                let label = format!("Enter your choice (1-{})", options.len());
                let Some(choice) = self.integer_in_range(&label, 1, options.len() as u32)?
                else {
                    return Ok(None);
                };
                Ok(Some(choice as usize - 1))
            }
        }
    }

    /// Yes/no question; defaults to no in interactive mode, and anything
    /// other than `y`/`yes` means no in script mode.
    pub fn confirm(&self, label: &str) -> CoreResult<Option<bool>> {
        match self.mode {
            PromptMode::Interactive => {
                let answer = Confirm::with_theme(&self.theme)
                    .with_prompt(label)
                    .default(false)
                    .interact()
                    .map_err(dialoguer_failure)?;
                Ok(Some(answer))
            }
            PromptMode::Script => {
                let Some(raw) = self.read_raw(label)? else {
                    return Ok(None);
                };
                let answer = matches!(raw.trim().to_lowercase().as_str(), "y" | "yes");
                Ok(Some(answer))
            }
        }
    }
}

fn dialoguer_failure(err: dialoguer::Error) -> CoreError {
    CoreError::Io(io::Error::new(io::ErrorKind::Other, err))
}

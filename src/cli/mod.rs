//! Console front-ends for the campus tools: menu loops, prompts, and
//! rendering. Everything here is glue; record invariants live in the
//! stores and services.

pub mod bank;
pub mod calc;
pub mod grades;
pub mod output;
pub mod prompt;
pub mod todo;

use crate::config::Profile;
use crate::errors::CoreResult;
use prompt::Prompter;

/// Closing banner shared by every tool.
pub(crate) fn farewell(profile: &Profile, tool: &str) {
    output::blank_line();
    output::info(format!("Thank you for using the {}!", tool));
    output::info(format!("Developed by: {}", profile.name));
    output::info(format!("Roll Number: {}", profile.roll_number));
    output::info(format!("College: {}", profile.college));
}

/// The post-operation "keep going?" question. Exhausted input counts as no.
pub(crate) fn another_operation(prompter: &Prompter) -> CoreResult<bool> {
    output::separator();
    Ok(prompter
        .confirm("Do you want to perform another operation?")?
        .unwrap_or(false))
}

//! ui::prompts
//!
//! Interactive prompts.
//!
//! # Design
//!
//! Prompts must never hang or crash a non-interactive invocation. A
//! confirmation that cannot be asked resolves to its default; text and
//! password input without a terminal fail with a user-facing error
//! telling the caller to pass the value explicitly.

use dialoguer::{Confirm, Input};

use crate::core::{CommandError, CommandResult};

/// Ask a yes/no question. Any prompt failure resolves to `default`.
pub fn confirm(message: &str, default: bool) -> bool {
    Confirm::new()
        .with_prompt(message)
        .default(default)
        .interact()
        .unwrap_or(default)
}

/// Ask for a line of text.
pub fn input(message: &str) -> CommandResult<String> {
    Input::<String>::new()
        .with_prompt(message)
        .interact_text()
        .map_err(|_| no_terminal(message))
}

/// Ask for a secret without echoing it.
pub fn password(message: &str) -> CommandResult<String> {
    rpassword::prompt_password(format!("{message}: ")).map_err(|_| no_terminal(message))
}

fn no_terminal(message: &str) -> CommandError {
    CommandError::user(format!(
        "cannot prompt for '{message}' without a terminal; pass the value via command options"
    ))
}

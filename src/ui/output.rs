//! ui::output
//!
//! Output formatting and display.
//!
//! Errors and advisories go to stderr so they survive piping of normal
//! command output; everything else goes to stdout.

use std::fmt::Display;

use colored::Colorize;

/// Print an error message (red, stderr).
pub fn error(message: impl Display) {
    eprintln!("{}", message.to_string().red());
}

/// Print an advisory notice (yellow, stderr, padded with blank lines).
pub fn advisory(message: impl Display) {
    eprintln!();
    eprintln!("{}", message.to_string().yellow());
    eprintln!();
}

/// Print a success message (green, stdout).
pub fn success(message: impl Display) {
    println!("{}", message.to_string().green());
}

/// Print an informational message (stdout).
pub fn info(message: impl Display) {
    println!("{}", message);
}

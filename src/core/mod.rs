//! core
//!
//! Foundation types shared across the CLI:
//!
//! - [`errors`] - The error taxonomy with explicit classification
//! - [`paths`] - Centralized routing for on-disk state

pub mod errors;
pub mod paths;

pub use errors::{CommandError, CommandResult, ErrorKind};
pub use paths::AirliftPaths;

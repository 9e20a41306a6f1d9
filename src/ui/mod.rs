//! ui
//!
//! User interaction utilities.
//!
//! - [`output`] - Colorized, stream-aware message formatting
//! - [`prompts`] - Interactive confirmations and input
//!
//! All terminal output and prompting goes through this module so that
//! errors land on stderr in red, advisories in yellow, and prompts
//! degrade safely when there is no terminal to talk to.

pub mod output;
pub mod prompts;

//! core::errors
//!
//! The error taxonomy for command handlers.
//!
//! # Design
//!
//! Every domain error carries its classification from the moment it is
//! constructed: either it is a known, user-facing condition (bad input,
//! missing login, unsupported artifact) or it is an unexpected failure
//! worth filing a bug about. The reporter in [`crate::report`] reads the
//! tag; it never inspects error types or message text to decide.
//!
//! Router-level errors (unknown command, malformed option value) are
//! handled by clap before any handler runs and never reach this type.

use thiserror::Error;

/// Classification of a command failure.
///
/// Decided at the construction site of the error, not inferred later.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A known condition the user can act on. Displayed, never offered as
    /// a bug report.
    UserFacing,
    /// Anything unexpected. Displayed, then offered as a bug report when
    /// running interactively outside CI.
    Reportable,
}

/// An error raised by a command handler.
///
/// The message is what the user sees; the detail blob (source error debug
/// output, response bodies) only appears in the body of a bug report.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct CommandError {
    message: String,
    kind: ErrorKind,
    detail: Option<String>,
}

/// Result alias used by command handlers.
pub type CommandResult<T = ()> = Result<T, CommandError>;

impl CommandError {
    /// A known, user-facing condition. Not a bug.
    pub fn user(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: ErrorKind::UserFacing,
            detail: None,
        }
    }

    /// An unexpected failure, eligible for bug reporting.
    pub fn bug(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: ErrorKind::Reportable,
            detail: None,
        }
    }

    /// Attach a detail blob for the bug-report body.
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn is_user_facing(&self) -> bool {
        self.kind == ErrorKind::UserFacing
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn detail(&self) -> Option<&str> {
        self.detail.as_deref()
    }
}

impl From<std::io::Error> for CommandError {
    fn from(err: std::io::Error) -> Self {
        CommandError::bug(format!("IO error: {err}")).with_detail(format!("{err:?}"))
    }
}

impl From<reqwest::Error> for CommandError {
    fn from(err: reqwest::Error) -> Self {
        CommandError::bug(format!("network error: {err}")).with_detail(format!("{err:?}"))
    }
}

impl From<serde_json::Error> for CommandError {
    fn from(err: serde_json::Error) -> Self {
        CommandError::bug(format!("malformed data: {err}")).with_detail(format!("{err:?}"))
    }
}

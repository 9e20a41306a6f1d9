//! cli
//!
//! Command-line interface layer: the process-entry orchestrator plus
//! argument definitions and command handlers.
//!
//! # Startup sequence
//!
//! 1. Trap the interrupt signal: print a blank line, exit 0 (a
//!    user-initiated cancellation is not an error).
//! 2. Reachability preflight against the service base URL; failure is
//!    fatal before any command runs.
//! 3. Update advisory (best-effort, never blocks dispatch).
//! 4. Parse the argument vector and dispatch, with every handler
//!    wrapped by the failure reporter.

pub mod args;
pub mod commands;

pub use args::{Cli, Command};

use semver::Version;

use crate::api::ApiClient;
use crate::config::CacheVersionStore;
use crate::core::{AirliftPaths, CommandError, CommandResult};
use crate::report::{ci_suppressed, Reporter, SystemBrowser, TerminalPrompt};
use crate::update::{CratesIoSource, UpdateChecker, UpdateNotice};
use crate::{net, ui};

/// Shared state handed to every command handler.
pub struct Context {
    pub paths: AirliftPaths,
    pub api: ApiClient,
}

/// Run the CLI application.
///
/// This is the main entry point called from `main.rs`. The returned
/// error has already been displayed (and possibly offered as a bug
/// report); the caller only maps it to a non-zero exit code.
pub fn run() -> CommandResult {
    ctrlc::set_handler(|| {
        println!();
        std::process::exit(0);
    })
    .map_err(|err| fatal(CommandError::bug(format!("failed to install signal handler: {err}"))))?;

    if !net::probe(net::SERVICE_BASE_URL, net::PROBE_TIMEOUT) {
        ui::output::error(
            "Cannot reach the AirLift service. Check your internet connection and try again.",
        );
        return Err(CommandError::user("no internet connection"));
    }

    let paths = AirliftPaths::resolve().map_err(|err| fatal(CommandError::bug(err.to_string())))?;

    if let Some(notice) = check_for_update(&paths) {
        ui::output::advisory(notice);
    }

    let cli = Cli::parse_args();
    let api = ApiClient::new(net::SERVICE_BASE_URL).map_err(|err| fatal(err.into()))?;
    let ctx = Context { paths, api };
    let reporter = Reporter::new(&TerminalPrompt, &SystemBrowser, ci_suppressed());
    commands::dispatch(cli.command, &ctx, &reporter)
}

/// Display a startup failure that happens before the reporter is
/// wired, then pass it through unchanged.
///
/// Dispatch failures are displayed by the reporter; everything earlier
/// in the startup sequence goes through here so no error ever reaches
/// `main` undisplayed.
fn fatal(error: CommandError) -> CommandError {
    ui::output::error(format!("error: {error}"));
    error
}

/// Best-effort update advisory; any failure degrades to silence.
fn check_for_update(paths: &AirliftPaths) -> Option<UpdateNotice> {
    let store = CacheVersionStore::new(paths);
    let source = CratesIoSource::new().ok()?;
    let current = Version::parse(crate::VERSION).ok()?;
    UpdateChecker::new(&store, &source, current).check()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ErrorKind;

    #[test]
    fn fatal_passes_the_error_through_unchanged() {
        let err = fatal(CommandError::bug("no home").with_detail("trace"));
        assert_eq!(err.to_string(), "no home");
        assert_eq!(err.kind(), ErrorKind::Reportable);
        assert_eq!(err.detail(), Some("trace"));
    }
}

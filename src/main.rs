//! Airlift CLI entry point.
//!
//! All real work happens in [`airlift::cli::run`]; this binary only maps
//! the result onto a process exit code. Error display is handled inside
//! the CLI layer (the failure reporter prints before the error propagates
//! here), so a failure exits non-zero without printing a second time.

use std::process::ExitCode;

fn main() -> ExitCode {
    match airlift::cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(_) => ExitCode::FAILURE,
    }
}

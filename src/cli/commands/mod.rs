//! cli::commands
//!
//! Command dispatch and handlers.
//!
//! Exactly one handler runs per invocation, synchronously, wrapped by
//! the failure reporter: handlers never do their own top-level error
//! display or reporting, they only return classified
//! [`CommandError`](crate::core::CommandError)s.

mod add_devices;
mod config_cmd;
mod deploy;
mod login;
mod logout;

pub use add_devices::add_devices;
pub use config_cmd::config;
pub use deploy::deploy;
pub use login::login;
pub use logout::logout;

use super::args::Command;
use super::Context;
use crate::config::{Credential, CredentialStore};
use crate::core::{CommandError, CommandResult};
use crate::report::{self, Reporter};

/// Dispatch a parsed command to its handler, wrapped by the reporter.
pub fn dispatch(command: Command, ctx: &Context, reporter: &Reporter<'_>) -> CommandResult {
    let name = command.name();
    let result = match command {
        Command::Login(args) => login(ctx, &args),
        Command::Logout => logout(ctx),
        Command::Deploy(args) => deploy(ctx, &args),
        Command::AddDevices(args) => add_devices(ctx, &args),
        Command::Config(args) => config(ctx, &args),
    };
    report::guard(reporter, name, result)
}

/// Load the stored credential or fail with a user-facing error.
fn require_login(ctx: &Context) -> CommandResult<Credential> {
    CredentialStore::new(&ctx.paths)
        .load()?
        .ok_or_else(|| CommandError::user("not logged in; run `airlift login` first"))
}

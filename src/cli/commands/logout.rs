//! cli::commands::logout
//!
//! Drop the stored session. The service-side invalidation is
//! best-effort; the local credential is removed regardless.

use crate::cli::Context;
use crate::config::CredentialStore;
use crate::core::CommandResult;
use crate::ui;

pub fn logout(ctx: &Context) -> CommandResult {
    let store = CredentialStore::new(&ctx.paths);
    match store.load()? {
        None => {
            ui::output::info("Not logged in.");
            Ok(())
        }
        Some(credential) => {
            // A token the service no longer recognizes is still worth
            // deleting locally.
            let _ = ctx.api.logout(&credential.token);
            store.delete()?;
            ui::output::success("Logged out.");
            Ok(())
        }
    }
}

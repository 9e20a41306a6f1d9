//! cli::commands::login
//!
//! Store a session for later commands.
//!
//! Two flows:
//! - default: open the account's API-token page in the browser, then
//!   prompt for the token and validate it against the service;
//! - `--terminal`: email + password on the terminal, no browser.
//!
//! # Security
//!
//! Neither flow ever echoes the token or password.

use crate::api::ApiClient;
use crate::cli::args::LoginArgs;
use crate::cli::Context;
use crate::config::{Credential, CredentialStore};
use crate::core::CommandResult;
use crate::ui;

pub fn login(ctx: &Context, args: &LoginArgs) -> CommandResult {
    let store = CredentialStore::new(&ctx.paths);
    let credential = if args.terminal {
        terminal_login(&ctx.api)?
    } else {
        browser_login(&ctx.api)?
    };
    store.save(&credential)?;
    ui::output::success(format!("Logged in as {}.", credential.name));
    Ok(())
}

fn terminal_login(api: &ApiClient) -> CommandResult<Credential> {
    let email = ui::prompts::input("Email")?;
    let password = ui::prompts::password("Password")?;
    let session = api.login(&email, &password)?;
    Ok(Credential {
        name: session.name,
        token: session.token,
    })
}

fn browser_login(api: &ApiClient) -> CommandResult<Credential> {
    let token_page = format!("{}/settings/token", api.base_url());
    ui::output::info(format!("Opening {token_page} to fetch your API token."));
    if open::that(&token_page).is_err() {
        ui::output::info("Could not open a browser; visit the URL above manually.");
    }
    let token = ui::prompts::password("API token")?;
    let user = api.user(&token)?;
    Ok(Credential {
        name: user.name,
        token,
    })
}

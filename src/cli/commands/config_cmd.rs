//! cli::commands::config_cmd
//!
//! Show or update the stored configuration.
//!
//! `--name` / `--token` write individual fields (useful on CI, where
//! the interactive login flow is unavailable); `--json` prints the full
//! record for scripting. Without `--json` the token is masked.

use crate::cli::args::ConfigArgs;
use crate::cli::Context;
use crate::config::{Credential, CredentialStore};
use crate::core::{CommandError, CommandResult};
use crate::ui;

pub fn config(ctx: &Context, args: &ConfigArgs) -> CommandResult {
    let store = CredentialStore::new(&ctx.paths);

    if args.name.is_some() || args.token.is_some() {
        let mut credential = store.load()?.unwrap_or(Credential {
            name: String::new(),
            token: String::new(),
        });
        if let Some(name) = &args.name {
            credential.name = name.clone();
        }
        if let Some(token) = &args.token {
            credential.token = token.clone();
        }
        store.save(&credential)?;
        ui::output::success("Configuration updated.");
        return Ok(());
    }

    let credential = store.load()?.ok_or_else(|| {
        CommandError::user("no configuration saved; run `airlift login` or set --name/--token")
    })?;

    if args.json {
        ui::output::info(serde_json::to_string_pretty(&credential)?);
    } else {
        ui::output::info(format!("name:  {}", credential.name));
        ui::output::info(format!("token: {}", mask(&credential.token)));
    }
    Ok(())
}

/// Keep only a short prefix of the token visible.
///
/// Counted in characters, not bytes: tokens are user-supplied and may
/// contain multi-byte UTF-8.
fn mask(token: &str) -> String {
    if token.chars().count() <= 4 {
        return "****".to_string();
    }
    let prefix: String = token.chars().take(4).collect();
    format!("{prefix}****")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_tokens_are_fully_masked() {
        assert_eq!(mask("abc"), "****");
        assert_eq!(mask(""), "****");
    }

    #[test]
    fn long_tokens_keep_a_prefix() {
        assert_eq!(mask("tok_1234567890"), "tok_****");
    }

    #[test]
    fn multibyte_tokens_mask_without_panicking() {
        // Two chars, six bytes: must take the short-token branch.
        assert_eq!(mask("日本"), "****");
        // Five chars, all multi-byte: prefix cut on char boundaries.
        assert_eq!(mask("日本語彙集"), "日本語彙****");
        assert_eq!(mask("tok_日本語"), "tok_****");
    }
}

//! cli::commands::deploy
//!
//! Upload a prebuilt artifact to the service.
//!
//! Building from source is not supported by this client: pointing
//! deploy at a project directory is a known, user-facing condition, not
//! a bug.

use std::path::Path;

use crate::cli::args::DeployArgs;
use crate::cli::Context;
use crate::api::PushOptions;
use crate::core::{CommandError, CommandResult};
use crate::ui;

use super::require_login;

const SUPPORTED_EXTENSIONS: [&str; 2] = ["ipa", "apk"];

pub fn deploy(ctx: &Context, args: &DeployArgs) -> CommandResult {
    let credential = require_login(ctx)?;
    validate_artifact(&args.path)?;
    if args.configuration.is_some() {
        ui::output::info("Note: --configuration only applies to source builds and is ignored.");
    }

    let owner = args.user.clone().unwrap_or_else(|| credential.name.clone());
    let options = PushOptions {
        message: args.message.clone(),
        distribution_key: args.distribution_key.clone(),
        disable_notify: args.disable_notify,
    };
    ui::output::info(format!("Uploading {} ...", args.path.display()));
    let result = ctx
        .api
        .push(&credential.token, &owner, &args.path, &options)?;

    ui::output::success(format!("Upload complete: {}", result.web_url));
    if args.open {
        // Best-effort; the upload already succeeded.
        let _ = open::that(&result.web_url);
    }
    Ok(())
}

fn validate_artifact(path: &Path) -> CommandResult {
    if path.is_dir() {
        return Err(CommandError::user(format!(
            "'{}' is a directory; building from source is not supported, pass a built .ipa or .apk",
            path.display()
        )));
    }
    if !path.exists() {
        return Err(CommandError::user(format!(
            "no such file: '{}'",
            path.display()
        )));
    }
    let supported = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| SUPPORTED_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
        .unwrap_or(false);
    if !supported {
        return Err(CommandError::user(format!(
            "'{}' is not a supported artifact; expected one of: {}",
            path.display(),
            SUPPORTED_EXTENSIONS.join(", ")
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn directories_are_rejected_as_user_facing() {
        let tmp = TempDir::new().unwrap();
        let err = validate_artifact(tmp.path()).unwrap_err();
        assert!(err.is_user_facing());
        assert!(err.to_string().contains("not supported"));
    }

    #[test]
    fn missing_files_are_rejected_as_user_facing() {
        let err = validate_artifact(Path::new("/no/such/app.ipa")).unwrap_err();
        assert!(err.is_user_facing());
    }

    #[test]
    fn unsupported_extensions_are_rejected() {
        let tmp = TempDir::new().unwrap();
        let exe = tmp.path().join("app.exe");
        std::fs::write(&exe, b"MZ").unwrap();
        let err = validate_artifact(&exe).unwrap_err();
        assert!(err.is_user_facing());
        assert!(err.to_string().contains("ipa"));
    }

    #[test]
    fn ipa_and_apk_pass_validation() {
        let tmp = TempDir::new().unwrap();
        for name in ["app.ipa", "app.apk", "APP.APK"] {
            let path = tmp.path().join(name);
            std::fs::write(&path, b"zip").unwrap();
            validate_artifact(&path).unwrap();
        }
    }
}

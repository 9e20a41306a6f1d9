//! cli::commands::add_devices
//!
//! Register tester devices.
//!
//! With `--udid` and `--device-name` the device is registered directly.
//! With `--server` the web registration page for the distribution is
//! opened instead, which lets testers register from their own devices.

use crate::cli::args::AddDevicesArgs;
use crate::cli::Context;
use crate::core::{CommandError, CommandResult};
use crate::ui;

use super::require_login;

pub fn add_devices(ctx: &Context, args: &AddDevicesArgs) -> CommandResult {
    let credential = require_login(ctx)?;
    if args.configuration.is_some() {
        ui::output::info("Note: --configuration only applies to source builds and is ignored.");
    }

    if args.server {
        let key = args.distribution_key.as_deref().ok_or_else(|| {
            CommandError::user("--server requires --distribution-key to pick the distribution")
        })?;
        let page = format!("{}/distributions/{}/devices", ctx.api.base_url(), key);
        ui::output::info(format!("Device registration page: {page}"));
        if open::that(&page).is_err() {
            ui::output::info("Could not open a browser; share the URL above with your testers.");
        }
        return Ok(());
    }

    let udid = args.udid.as_deref().ok_or_else(|| {
        CommandError::user(
            "--udid is required (find it in Finder or Xcode's device window), \
             or use --server to register from a browser",
        )
    })?;
    let device_name = args
        .device_name
        .as_deref()
        .ok_or_else(|| CommandError::user("--device-name is required"))?;

    let owner = args.user.clone().unwrap_or_else(|| credential.name.clone());
    ctx.api
        .add_device(&credential.token, &owner, udid, device_name)?;
    ui::output::success(format!("Registered device '{device_name}' ({udid})."));
    Ok(())
}

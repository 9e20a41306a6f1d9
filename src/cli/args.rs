//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Design
//!
//! Each subcommand declares its option schema statically; clap resolves
//! defaults and types before the handler ever sees them, so handlers
//! work with fully typed, fully defaulted values. Unknown subcommands
//! and malformed option values are rejected by clap with usage output
//! and a non-zero exit; they never enter the bug-report flow.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Airlift - upload mobile app builds to the AirLift distribution service
#[derive(Parser, Debug)]
#[command(name = "airlift")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Parse the process argument vector.
    pub fn parse_args() -> Self {
        Parser::parse()
    }
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Log in to the AirLift service
    Login(LoginArgs),

    /// Remove the stored session
    Logout,

    /// Upload an app binary (.ipa or .apk)
    #[command(alias = "push")]
    Deploy(DeployArgs),

    /// Register tester devices for a distribution
    #[command(name = "add-devices")]
    AddDevices(AddDevicesArgs),

    /// Show or update the stored configuration
    Config(ConfigArgs),
}

impl Command {
    /// Stable name used to key bug-report titles.
    ///
    /// The `push` alias resolves to `deploy`.
    pub fn name(&self) -> &'static str {
        match self {
            Command::Login(_) => "login",
            Command::Logout => "logout",
            Command::Deploy(_) => "deploy",
            Command::AddDevices(_) => "add-devices",
            Command::Config(_) => "config",
        }
    }
}

#[derive(Args, Debug)]
pub struct LoginArgs {
    /// Authenticate with email and password on the terminal instead of
    /// the browser flow
    #[arg(long)]
    pub terminal: bool,
}

#[derive(Args, Debug)]
pub struct DeployArgs {
    /// Path to the built .ipa or .apk to upload
    #[arg(value_name = "PATH", default_value = ".")]
    pub path: PathBuf,

    /// Short message attached to the build
    #[arg(long, default_value = "")]
    pub message: String,

    /// Account to upload to (defaults to the logged-in user)
    #[arg(long)]
    pub user: Option<String>,

    /// Distribution key to update with this build
    #[arg(long = "distribution-key")]
    pub distribution_key: Option<String>,

    /// Build configuration name (only meaningful when building from
    /// source; ignored for prebuilt artifacts)
    #[arg(long)]
    pub configuration: Option<String>,

    /// Open the app page in a browser after the upload
    #[arg(long)]
    pub open: bool,

    /// Do not notify testers about this build
    #[arg(long = "disable_notify")]
    pub disable_notify: bool,
}

#[derive(Args, Debug)]
pub struct AddDevicesArgs {
    /// Account owning the distribution (defaults to the logged-in user)
    #[arg(long)]
    pub user: Option<String>,

    /// UDID of the device to register
    #[arg(long)]
    pub udid: Option<String>,

    /// Display name for the device
    #[arg(long = "device-name")]
    pub device_name: Option<String>,

    /// Distribution key the device belongs to
    #[arg(long = "distribution-key")]
    pub distribution_key: Option<String>,

    /// Build configuration name (only meaningful when building from
    /// source; ignored for prebuilt artifacts)
    #[arg(long)]
    pub configuration: Option<String>,

    /// Open the web registration page instead of registering directly
    #[arg(long)]
    pub server: bool,
}

#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// Print the stored configuration as JSON
    #[arg(long)]
    pub json: bool,

    /// Set the stored account name
    #[arg(long)]
    pub name: Option<String>,

    /// Set the stored API token
    #[arg(long)]
    pub token: Option<String>,
}

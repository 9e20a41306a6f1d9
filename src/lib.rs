//! Airlift - CLI client for the AirLift app distribution service
//!
//! Airlift is a single-binary tool that authenticates a user, uploads
//! prebuilt mobile application artifacts (`.ipa` / `.apk`), and manages
//! tester devices on the AirLift distribution service.
//!
//! # Architecture
//!
//! The codebase follows a layered architecture:
//!
//! - [`cli`] - Command-line interface layer (orchestrates preflight, update
//!   advisory, and dispatch; delegates to command handlers)
//! - [`core`] - Error taxonomy and storage path routing
//! - [`api`] - HTTP client for the AirLift service
//! - [`config`] - Persisted state (credentials, version-check cache)
//! - [`update`] - Update advisory policy over the version-check cache
//! - [`net`] - Internet-reachability preflight probe
//! - [`report`] - Failure classification and bug-report submission flow
//! - [`ui`] - User interaction utilities
//!
//! # Operational Invariants
//!
//! 1. No command handler runs without a successful reachability preflight
//! 2. Update checks are advisory and never fail the invoking command
//! 3. Every error carries its classification from the point of construction
//! 4. Bug-report prompts are suppressed in CI and for user-facing errors

pub mod api;
pub mod cli;
pub mod config;
pub mod core;
pub mod net;
pub mod report;
pub mod ui;
pub mod update;

/// The version of this crate, as reported in update checks and bug reports.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

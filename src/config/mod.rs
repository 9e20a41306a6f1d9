//! config
//!
//! Persisted state shared across invocations:
//!
//! - [`credential`] - the stored session (account name + API token)
//! - [`cache_version`] - the version-check cache record
//!
//! Both are single JSON files under the airlift home directory, each
//! read at most once and written at most once per process. Concurrent
//! CLI invocations are last-writer-wins; no locking.

pub mod cache_version;
pub mod credential;

pub use cache_version::{CacheVersionStore, VersionCacheRecord};
pub use credential::{Credential, CredentialStore};

use std::path::PathBuf;

use thiserror::Error;

/// Errors from persisted-state access.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read '{path}': {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse '{path}': {message}")]
    Parse { path: PathBuf, message: String },

    #[error("failed to write '{path}': {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl From<ConfigError> for crate::core::CommandError {
    fn from(err: ConfigError) -> Self {
        crate::core::CommandError::bug(err.to_string()).with_detail(format!("{err:?}"))
    }
}

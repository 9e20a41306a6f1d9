//! core::paths
//!
//! Centralized path routing for airlift's on-disk state.
//!
//! All persisted state lives under a single home directory:
//! - `credentials.json` - stored session (name + API token)
//! - `cache_version.json` - version-check cache record
//!
//! The home directory is `~/.airlift`, overridable with `AIRLIFT_HOME`
//! (used by tests and scripting). No code outside this module should
//! compute paths into the airlift home.

use std::env;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Environment variable overriding the airlift home directory.
pub const HOME_ENV: &str = "AIRLIFT_HOME";

/// Errors from path resolution.
#[derive(Debug, Error)]
pub enum PathsError {
    #[error("home directory not found")]
    NoHomeDir,
}

/// Routing for airlift storage locations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AirliftPaths {
    home: PathBuf,
}

impl AirliftPaths {
    /// Resolve the storage home from the environment.
    ///
    /// `AIRLIFT_HOME` wins when set; otherwise `~/.airlift`.
    pub fn resolve() -> Result<Self, PathsError> {
        if let Some(dir) = env::var_os(HOME_ENV) {
            return Ok(Self { home: dir.into() });
        }
        let home = dirs::home_dir().ok_or(PathsError::NoHomeDir)?;
        Ok(Self {
            home: home.join(".airlift"),
        })
    }

    /// Use an explicit directory as the storage home.
    pub fn from_dir(dir: impl Into<PathBuf>) -> Self {
        Self { home: dir.into() }
    }

    pub fn home(&self) -> &Path {
        &self.home
    }

    /// Path of the stored credential file.
    pub fn credentials_path(&self) -> PathBuf {
        self.home.join("credentials.json")
    }

    /// Path of the version-check cache record.
    pub fn cache_version_path(&self) -> PathBuf {
        self.home.join("cache_version.json")
    }

    /// Create the home directory if it does not exist yet.
    pub fn ensure_home(&self) -> io::Result<()> {
        std::fs::create_dir_all(&self.home)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_hang_off_the_home_dir() {
        let paths = AirliftPaths::from_dir("/tmp/airlift-home");
        assert_eq!(
            paths.credentials_path(),
            PathBuf::from("/tmp/airlift-home/credentials.json")
        );
        assert_eq!(
            paths.cache_version_path(),
            PathBuf::from("/tmp/airlift-home/cache_version.json")
        );
    }

    #[test]
    fn ensure_home_creates_nested_dirs() {
        let tmp = tempfile::TempDir::new().unwrap();
        let paths = AirliftPaths::from_dir(tmp.path().join("a").join("b"));
        paths.ensure_home().unwrap();
        assert!(paths.home().is_dir());
    }
}

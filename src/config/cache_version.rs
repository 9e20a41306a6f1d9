//! config::cache_version
//!
//! Storage for the version-check cache record.
//!
//! A single record `{latest_version, check_date}` is kept per
//! installation and overwritten on every refresh; there is no history.
//! This module is pure data access - the freshness policy lives in
//! [`crate::update`].

use std::fs;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ConfigError;
use crate::core::AirliftPaths;

/// The persisted version-check record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionCacheRecord {
    /// Latest published version seen at `check_date`.
    pub latest_version: String,
    /// When the remote version source was last queried.
    pub check_date: DateTime<Utc>,
}

/// File-backed store for the version-check record.
#[derive(Debug, Clone)]
pub struct CacheVersionStore {
    path: std::path::PathBuf,
    home: AirliftPaths,
}

impl CacheVersionStore {
    pub fn new(paths: &AirliftPaths) -> Self {
        Self {
            path: paths.cache_version_path(),
            home: paths.clone(),
        }
    }

    /// Whether a record has been persisted.
    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    /// Read the persisted record.
    pub fn read(&self) -> Result<VersionCacheRecord, ConfigError> {
        let content = fs::read_to_string(&self.path).map_err(|source| ConfigError::Read {
            path: self.path.clone(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|err| ConfigError::Parse {
            path: self.path.clone(),
            message: err.to_string(),
        })
    }

    /// Overwrite the record.
    pub fn write(&self, record: &VersionCacheRecord) -> Result<(), ConfigError> {
        self.home
            .ensure_home()
            .map_err(|source| ConfigError::Write {
                path: self.path.clone(),
                source,
            })?;
        let content = serde_json::to_string_pretty(record).map_err(|err| ConfigError::Parse {
            path: self.path.clone(),
            message: err.to_string(),
        })?;
        fs::write(&self.path, content).map_err(|source| ConfigError::Write {
            path: self.path.clone(),
            source,
        })
    }
}

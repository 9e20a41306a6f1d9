//! update
//!
//! Update advisory policy over the version-check cache.
//!
//! # Policy
//!
//! The cache record is trusted for a rolling 24-hour window from its
//! `check_date`. While trusted, no network access happens: the cached
//! latest version is compared against the running version and a notice
//! is produced when it is newer. Once the record is stale, absent, or
//! unreadable, the remote source is queried and the record is
//! overwritten with a fresh `check_date` regardless of the comparison
//! outcome.
//!
//! # Failure policy
//!
//! Everything here is advisory. A failing source, an unparsable version
//! string, or an unwritable cache all degrade to "no notice"; the
//! invoking command is never affected.

pub mod registry;

pub use registry::CratesIoSource;

use std::fmt;

use chrono::{Duration, Utc};
use semver::Version;
use thiserror::Error;

use crate::config::{CacheVersionStore, VersionCacheRecord};

/// How long a cache record is trusted without revalidation.
const CACHE_TTL_HOURS: i64 = 24;

/// Errors from a remote version source.
#[derive(Debug, Error)]
pub enum VersionSourceError {
    #[error("network error: {0}")]
    Network(String),

    #[error("unexpected response from version source: {0}")]
    Malformed(String),
}

/// A source of "latest published version" information.
///
/// The real implementation queries the package registry; tests inject
/// counting fakes.
pub trait VersionSource {
    fn latest_version(&self) -> Result<String, VersionSourceError>;
}

/// An advisory "update available" notice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateNotice {
    pub latest: String,
    pub current: String,
}

impl fmt::Display for UpdateNotice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "A new version of airlift is available: {} (you are running {}).\n\
             Run `cargo install airlift` to update.",
            self.latest, self.current
        )
    }
}

/// The update policy engine.
pub struct UpdateChecker<'a> {
    store: &'a CacheVersionStore,
    source: &'a dyn VersionSource,
    current: Version,
}

impl<'a> UpdateChecker<'a> {
    pub fn new(
        store: &'a CacheVersionStore,
        source: &'a dyn VersionSource,
        current: Version,
    ) -> Self {
        Self {
            store,
            source,
            current,
        }
    }

    /// Run the check and return a notice when an update is available.
    ///
    /// Never fails; see the module documentation for the degradation
    /// rules.
    pub fn check(&self) -> Option<UpdateNotice> {
        if self.store.exists() {
            if let Ok(record) = self.store.read() {
                if Utc::now() - record.check_date < Duration::hours(CACHE_TTL_HOURS) {
                    return self.notice_for(&record.latest_version);
                }
            }
            // Unreadable records fall through to a refresh.
        }
        self.refresh()
    }

    /// Query the source and overwrite the cache record.
    ///
    /// The record is rewritten with a fresh `check_date` even when no
    /// notice is produced; a failed query leaves the cache untouched.
    fn refresh(&self) -> Option<UpdateNotice> {
        let latest = self.source.latest_version().ok()?;
        let notice = self.notice_for(&latest);
        let _ = self.store.write(&VersionCacheRecord {
            latest_version: latest,
            check_date: Utc::now(),
        });
        notice
    }

    fn notice_for(&self, latest: &str) -> Option<UpdateNotice> {
        let latest_version = Version::parse(latest).ok()?;
        (latest_version > self.current).then(|| UpdateNotice {
            latest: latest.to_string(),
            current: self.current.to_string(),
        })
    }
}

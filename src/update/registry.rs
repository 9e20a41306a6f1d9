//! update::registry
//!
//! Remote version source backed by the crates.io API.
//!
//! The registry mandates a User-Agent, and the call is bounded by a
//! short timeout so a slow registry cannot hold up command startup.

use std::time::Duration;

use serde::Deserialize;

use super::{VersionSource, VersionSourceError};

const REGISTRY_URL: &str = "https://crates.io/api/v1/crates/airlift";
const LOOKUP_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Deserialize)]
struct CrateResponse {
    #[serde(rename = "crate")]
    krate: CrateInfo,
}

#[derive(Debug, Deserialize)]
struct CrateInfo {
    max_version: String,
}

/// Version source querying crates.io for the latest published airlift.
pub struct CratesIoSource {
    client: reqwest::blocking::Client,
    url: String,
}

impl CratesIoSource {
    pub fn new() -> Result<Self, VersionSourceError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(LOOKUP_TIMEOUT)
            .user_agent(concat!("airlift/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|err| VersionSourceError::Network(err.to_string()))?;
        Ok(Self {
            client,
            url: REGISTRY_URL.to_string(),
        })
    }

    #[cfg(test)]
    fn with_url(url: &str) -> Self {
        let mut source = Self::new().unwrap();
        source.url = url.to_string();
        source
    }
}

impl VersionSource for CratesIoSource {
    fn latest_version(&self) -> Result<String, VersionSourceError> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .map_err(|err| VersionSourceError::Network(err.to_string()))?;
        let status = response.status();
        if !status.is_success() {
            return Err(VersionSourceError::Malformed(format!(
                "registry returned HTTP {status}"
            )));
        }
        let body: CrateResponse = response
            .json()
            .map_err(|err| VersionSourceError::Malformed(err.to_string()))?;
        Ok(body.krate.max_version)
    }
}

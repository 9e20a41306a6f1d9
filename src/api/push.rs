//! api::push
//!
//! Artifact upload. The only long-running request in the client, so it
//! carries its own generous per-request timeout.

use std::path::Path;
use std::time::Duration;

use reqwest::blocking::multipart;
use serde::Deserialize;

use super::{ApiClient, ApiError};

const UPLOAD_TIMEOUT: Duration = Duration::from_secs(300);

/// Options attached to an upload.
#[derive(Debug, Clone, Default)]
pub struct PushOptions {
    /// Short message shown alongside the build.
    pub message: String,
    /// Distribution to update with this build, if any.
    pub distribution_key: Option<String>,
    /// Skip notifying testers about the new build.
    pub disable_notify: bool,
}

#[derive(Debug, Deserialize)]
struct PushResults {
    /// Service-relative path of the uploaded app's page.
    path: String,
}

/// Outcome of a successful upload.
#[derive(Debug, Clone)]
pub struct PushResult {
    /// Absolute URL of the uploaded app's page.
    pub web_url: String,
}

impl ApiClient {
    /// Upload an artifact to `owner`'s account.
    pub fn push(
        &self,
        token: &str,
        owner: &str,
        artifact: &Path,
        options: &PushOptions,
    ) -> Result<PushResult, ApiError> {
        let mut form = multipart::Form::new()
            .file("file", artifact)
            .map_err(|err| ApiError::Io(err.to_string()))?
            .text("message", options.message.clone())
            .text("disable_notify", options.disable_notify.to_string());
        if let Some(key) = &options.distribution_key {
            form = form.text("distribution_key", key.clone());
        }

        let response = self
            .http
            .post(self.endpoint(&format!("/api/users/{owner}/apps")))
            .bearer_auth(token)
            .multipart(form)
            .timeout(UPLOAD_TIMEOUT)
            .send()?;
        let results: PushResults = Self::parse(response)?;
        Ok(PushResult {
            web_url: format!("{}{}", self.base_url(), results.path),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_artifact_is_an_io_error() {
        let client = ApiClient::new("https://airlift.app").unwrap();
        let err = client
            .push(
                "tok",
                "tester",
                Path::new("/does/not/exist.ipa"),
                &PushOptions::default(),
            )
            .unwrap_err();
        assert!(matches!(err, ApiError::Io(_)));
    }
}

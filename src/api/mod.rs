//! api
//!
//! HTTP client for the AirLift service.
//!
//! # Design
//!
//! Thin collaborator: every method is a single synchronous request with
//! a bounded timeout, returning typed results parsed out of the
//! service's `{error, message, results}` envelope. Classification into
//! user-facing vs reportable happens once, in the [`ApiError`] to
//! [`CommandError`](crate::core::CommandError) conversion: 4xx responses
//! are conditions the user can act on, everything else is a bug.
//!
//! # Endpoints
//!
//! - `POST /api/sessions` - terminal login (email + password)
//! - `DELETE /api/sessions` - logout
//! - `GET /api/user` - validate a token, resolve the account name
//! - `POST /api/users/{owner}/apps` - multipart artifact upload
//! - `POST /api/users/{owner}/devices` - register a tester device

mod devices;
mod push;
mod session;

pub use push::{PushOptions, PushResult};
pub use session::{Session, UserInfo};

use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use thiserror::Error;

use crate::core::CommandError;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Errors from the AirLift service client.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),

    /// The service answered with an error envelope or failure status.
    #[error("{message}")]
    Service { status: u16, message: String },

    #[error("unexpected response from server: {0}")]
    Malformed(String),

    #[error("cannot read artifact: {0}")]
    Io(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Network(err.to_string())
    }
}

impl From<ApiError> for CommandError {
    fn from(err: ApiError) -> Self {
        match err {
            // Client-side response codes are known service conditions
            // (bad credentials, expired session, validation failures).
            ApiError::Service { status, message } if (400..500).contains(&status) => {
                CommandError::user(message)
            }
            ApiError::Service { status, message } => {
                CommandError::bug(format!("server error (HTTP {status}): {message}"))
                    .with_detail(format!("status={status} message={message}"))
            }
            other => CommandError::bug(other.to_string()).with_detail(format!("{other:?}")),
        }
    }
}

/// The service's standard response envelope.
#[derive(Debug, Deserialize)]
struct Envelope<T> {
    #[serde(default)]
    error: bool,
    message: Option<String>,
    results: Option<T>,
}

/// Client for the AirLift HTTP API.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base: String,
    http: reqwest::blocking::Client,
}

impl ApiClient {
    /// Build a client against the given base URL.
    pub fn new(base: &str) -> Result<Self, ApiError> {
        let http = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(concat!("airlift/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            base: base.trim_end_matches('/').to_string(),
            http,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    /// Unwrap the service envelope, turning error envelopes and failure
    /// statuses into [`ApiError::Service`].
    fn parse<T: DeserializeOwned>(
        response: reqwest::blocking::Response,
    ) -> Result<T, ApiError> {
        let status = response.status();
        let envelope: Envelope<T> = response
            .json()
            .map_err(|err| ApiError::Malformed(err.to_string()))?;
        if envelope.error || !status.is_success() {
            return Err(ApiError::Service {
                status: status.as_u16(),
                message: envelope
                    .message
                    .unwrap_or_else(|| format!("request failed with HTTP {status}")),
            });
        }
        envelope
            .results
            .ok_or_else(|| ApiError::Malformed("missing results".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ErrorKind;

    #[test]
    fn base_url_is_normalized() {
        let client = ApiClient::new("https://airlift.app/").unwrap();
        assert_eq!(client.base_url(), "https://airlift.app");
        assert_eq!(client.endpoint("/api/user"), "https://airlift.app/api/user");
    }

    #[test]
    fn client_side_service_errors_are_user_facing() {
        let err: CommandError = ApiError::Service {
            status: 401,
            message: "authentication failed".to_string(),
        }
        .into();
        assert_eq!(err.kind(), ErrorKind::UserFacing);
        assert_eq!(err.to_string(), "authentication failed");
    }

    #[test]
    fn server_side_service_errors_are_reportable() {
        let err: CommandError = ApiError::Service {
            status: 502,
            message: "bad gateway".to_string(),
        }
        .into();
        assert_eq!(err.kind(), ErrorKind::Reportable);
        assert!(err.detail().is_some());
    }

    #[test]
    fn network_errors_are_reportable() {
        let err: CommandError = ApiError::Network("connection refused".to_string()).into();
        assert_eq!(err.kind(), ErrorKind::Reportable);
    }

    #[test]
    fn envelope_error_flag_defaults_to_false() {
        let body = r#"{"results": {"name": "tester"}}"#;
        let envelope: Envelope<serde_json::Value> = serde_json::from_str(body).unwrap();
        assert!(!envelope.error);
        assert!(envelope.results.is_some());
    }
}

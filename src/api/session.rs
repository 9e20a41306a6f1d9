//! api::session
//!
//! Session endpoints: terminal login, logout, and token validation.

use serde::Deserialize;

use super::{ApiClient, ApiError};

/// A freshly created session.
#[derive(Debug, Clone, Deserialize)]
pub struct Session {
    pub name: String,
    pub token: String,
}

/// The account behind a token.
#[derive(Debug, Clone, Deserialize)]
pub struct UserInfo {
    pub name: String,
}

impl ApiClient {
    /// Exchange email and password for a session token.
    pub fn login(&self, email: &str, password: &str) -> Result<Session, ApiError> {
        let response = self
            .http
            .post(self.endpoint("/api/sessions"))
            .json(&serde_json::json!({ "email": email, "password": password }))
            .send()?;
        Self::parse(response)
    }

    /// Invalidate a session token on the service side.
    pub fn logout(&self, token: &str) -> Result<(), ApiError> {
        let response = self
            .http
            .delete(self.endpoint("/api/sessions"))
            .bearer_auth(token)
            .send()?;
        Self::parse::<serde_json::Value>(response)?;
        Ok(())
    }

    /// Validate a token and resolve the account it belongs to.
    pub fn user(&self, token: &str) -> Result<UserInfo, ApiError> {
        let response = self
            .http
            .get(self.endpoint("/api/user"))
            .bearer_auth(token)
            .send()?;
        Self::parse(response)
    }
}

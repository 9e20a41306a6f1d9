//! api::devices
//!
//! Tester device registration.

use super::{ApiClient, ApiError};

impl ApiClient {
    /// Register a device UDID under `owner`'s account.
    pub fn add_device(
        &self,
        token: &str,
        owner: &str,
        udid: &str,
        device_name: &str,
    ) -> Result<(), ApiError> {
        let response = self
            .http
            .post(self.endpoint(&format!("/api/users/{owner}/devices")))
            .bearer_auth(token)
            .json(&serde_json::json!({
                "udid": udid,
                "device_name": device_name,
            }))
            .send()?;
        Self::parse::<serde_json::Value>(response)?;
        Ok(())
    }
}

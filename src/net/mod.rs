//! net
//!
//! Internet-reachability preflight.
//!
//! A single bounded-time GET against the service base URL. The probe
//! never errors and never retries; retry policy, if any, belongs to the
//! caller. The orchestrator treats a `false` result as fatal - no
//! command runs without connectivity.

use std::time::Duration;

/// Public base URL of the AirLift service.
pub const SERVICE_BASE_URL: &str = "https://airlift.app";

/// Upper bound on the probe round trip.
pub const PROBE_TIMEOUT: Duration = Duration::from_secs(5);

/// Check whether the given endpoint is reachable within `timeout`.
///
/// Any failure - DNS, connect, TLS, timeout, or a client that cannot be
/// built - yields `false`. The HTTP status is irrelevant; a response of
/// any kind proves reachability.
pub fn probe(url: &str, timeout: Duration) -> bool {
    let client = match reqwest::blocking::Client::builder().timeout(timeout).build() {
        Ok(client) => client,
        Err(_) => return false,
    };
    client.get(url).send().is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unroutable_endpoint_is_unreachable() {
        // Port 1 on localhost refuses immediately; no network needed.
        assert!(!probe("http://127.0.0.1:1", Duration::from_millis(500)));
    }

    #[test]
    fn malformed_url_is_unreachable() {
        assert!(!probe("not a url", Duration::from_millis(500)));
    }

    #[test]
    fn probe_never_panics_on_empty_url() {
        assert!(!probe("", Duration::from_millis(500)));
    }
}

//! HTTP helper for the contact form relay.
//!
//! Browser (csr): real HTTP calls via `gloo-net`.
//! Native: stub returning an error, since submission is only meaningful in
//! the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get a `Result` with a short cause string instead of panics; the
//! cause is for diagnostics only and is never shown verbatim to the user.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;

/// Form-relay endpoint receiving contact submissions.
// TODO: point this at the production form id before deploying.
pub const CONTACT_ENDPOINT: &str = "https://formspree.io/forms";

/// JSON body for a contact submission.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ContactPayload {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[cfg(any(test, feature = "csr"))]
fn submit_failed_message(status: u16) -> String {
    format!("contact submit failed: {status}")
}

/// Submit the contact form payload as JSON to `endpoint`.
///
/// # Errors
///
/// Returns an error string when the request cannot be sent or the endpoint
/// responds with a non-2xx status.
pub async fn submit_contact(endpoint: &str, payload: &ContactPayload) -> Result<(), String> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::post(endpoint)
            .header("Accept", "application/json")
            .json(payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(submit_failed_message(resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (endpoint, payload);
        Err("not available outside the browser".to_owned())
    }
}

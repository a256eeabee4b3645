//! Error types for the client library.
//!
//! This module defines all errors the client can surface and the split
//! between the two halves of the taxonomy:
//!
//! - **Validation errors**: field-scoped, produced synchronously before any
//!   network traffic, and block submission entirely.
//! - **Request errors**: reported by the backend (or the transport) after a
//!   request was attempted, surfaced as a single human-readable message.
//!   They are terminal for that attempt; the caller must resubmit manually.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

/// Field-name → error-message mapping produced by a validation pass.
///
/// Absence of a key means the field is valid. A non-empty map blocks
/// submission; no network call is made while any entry is present.
///
/// Backed by a `BTreeMap` so iteration order is stable for display and
/// assertions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FieldErrors(BTreeMap<&'static str, &'static str>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a failing field. A later insert for the same field wins.
    pub fn insert(&mut self, field: &'static str, message: &'static str) {
        self.0.insert(field, message);
    }

    /// Error message for a field, if it failed.
    pub fn get(&self, field: &str) -> Option<&'static str> {
        self.0.get(field).copied()
    }

    /// True when every field passed and submission may proceed.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
        self.0.iter().map(|(k, v)| (*k, *v))
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, message) in self.iter() {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{field}: {message}")?;
            first = false;
        }
        Ok(())
    }
}

/// Client-wide error type.
///
/// # Error Categories
///
/// - `Validation`: input failed the client-side rules; nothing was sent.
/// - `Request`: the backend rejected the request or the transport failed.
///   The message is the backend's `msg` field, else its `error` field, else
///   a per-endpoint fallback.
/// - `SubmissionInFlight`: a second submit was attempted while one was
///   already outstanding on the same latch.
/// - `NotAuthenticated`: an authenticated call was made with no token in
///   the session store.
/// - `AlreadyDecided`: an approve/deny was attempted on a record whose
///   status is terminal.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// One or more fields failed validation. Submission was blocked before
    /// any network call.
    #[error("validation failed: {0}")]
    Validation(FieldErrors),

    /// The backend reported a failure, or the request never completed.
    ///
    /// Carries exactly the message a user would be shown.
    #[error("{message}")]
    Request {
        message: String,
        /// HTTP status, when a response was received at all.
        status: Option<u16>,
    },

    /// A submission is already outstanding on this latch.
    #[error("a submission is already in flight")]
    SubmissionInFlight,

    /// No bearer token in the session store.
    #[error("not logged in")]
    NotAuthenticated,

    /// The record's status is terminal; no further transition is legal.
    #[error("payment is already {0}")]
    AlreadyDecided(crate::models::payment::PaymentStatus),

    /// The configured base URL (or a path joined onto it) is not a valid URL.
    #[error("invalid endpoint URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The HTTP client itself could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),
}

impl Error {
    /// Build a `Request` error the way the forms do: backend `msg` wins,
    /// then `error`, then the endpoint's generic fallback.
    pub fn request(status: Option<u16>, body: Option<&serde_json::Value>, fallback: &str) -> Self {
        let message = body
            .and_then(|b| {
                b.get("msg")
                    .or_else(|| b.get("error"))
                    .and_then(|v| v.as_str())
            })
            .unwrap_or(fallback)
            .to_string();
        Error::Request { message, status }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn request_message_prefers_msg_over_error() {
        let body = json!({ "msg": "Token invalid", "error": "other" });
        let err = Error::request(Some(401), Some(&body), "Payment creation failed");
        assert_eq!(err.to_string(), "Token invalid");
    }

    #[test]
    fn request_message_falls_back_to_error_field() {
        let body = json!({ "error": "Amount too large" });
        let err = Error::request(Some(400), Some(&body), "Payment creation failed");
        assert_eq!(err.to_string(), "Amount too large");
    }

    #[test]
    fn request_message_generic_fallback() {
        let err = Error::request(None, None, "Payment creation failed");
        assert_eq!(err.to_string(), "Payment creation failed");

        // A body without string msg/error fields also falls through.
        let body = json!({ "detail": 42 });
        let err = Error::request(Some(500), Some(&body), "Login failed");
        assert_eq!(err.to_string(), "Login failed");
    }

    #[test]
    fn field_errors_display_is_ordered() {
        let mut errors = FieldErrors::new();
        errors.insert("swiftCode", "bad code");
        errors.insert("amount", "bad amount");
        assert_eq!(errors.to_string(), "amount: bad amount; swiftCode: bad code");
    }
}

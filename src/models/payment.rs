//! Payment data models and API request/response types.
//!
//! This module defines:
//! - `PaymentInput`: raw form fields as the user typed them
//! - `NewPayment`: the vetted wire payload sent to POST /payments
//! - `PaymentRecord`: a payment as returned by the backend
//! - `PaymentStatus` / `Decision`: the review lifecycle state machine

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::Error;
use crate::sanitize::strip_html;

/// Raw payment form fields, exactly as entered.
///
/// Every field is a string at this point; nothing is trimmed or normalized
/// until the input has passed validation.
#[derive(Debug, Clone, Default)]
pub struct PaymentInput {
    pub amount: String,
    pub currency: String,
    pub provider: String,
    pub recipient_account: String,
    pub swift_code: String,
}

impl PaymentInput {
    /// Build the wire payload from validated input.
    ///
    /// The amount is parsed to a number from the raw string (its decimal
    /// point must survive, so it skips the sanitizers); the four string
    /// fields get the HTML-stripping pass.
    ///
    /// Returns `None` if the amount does not parse, which validation rules
    /// out beforehand.
    pub fn to_payload(&self) -> Option<NewPayment> {
        let amount: f64 = self.amount.parse().ok()?;
        Some(NewPayment {
            amount,
            currency: strip_html(&self.currency),
            provider: strip_html(&self.provider),
            recipient_account: strip_html(&self.recipient_account),
            swift_code: strip_html(&self.swift_code),
        })
    }
}

/// Wire payload for POST /payments.
///
/// # JSON Example
///
/// ```json
/// {
///   "amount": 100.5,
///   "currency": "usd",
///   "provider": "swift",
///   "recipientAccount": "12345",
///   "swiftCode": "abcdus33xxx"
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPayment {
    pub amount: f64,
    pub currency: String,
    pub provider: String,
    pub recipient_account: String,
    pub swift_code: String,
}

/// A payment as returned by the backend.
///
/// Customer-facing lists carry the five payment fields; the employee review
/// and history views additionally carry the payer's account number and, once
/// processed, who processed it. Fields absent from a given endpoint's
/// response default to empty/`None`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRecord {
    #[serde(rename = "_id")]
    pub id: String,

    /// Payer's account number (employee-facing endpoints only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_number: Option<String>,

    pub amount: f64,

    #[serde(default)]
    pub currency: String,

    #[serde(default)]
    pub provider: String,

    #[serde(default)]
    pub recipient_account: String,

    #[serde(default)]
    pub swift_code: String,

    /// Review state; records created before the status field existed are
    /// treated as pending.
    #[serde(default)]
    pub status: PaymentStatus,

    /// Reviewer who processed the payment, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub processed_by: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl PaymentRecord {
    /// Run every string field through the HTML-stripping pass.
    ///
    /// Fetched records are display data; they get the same treatment the
    /// outgoing fields got.
    pub fn sanitized(mut self) -> Self {
        self.id = strip_html(&self.id);
        self.account_number = self.account_number.map(|v| strip_html(&v));
        self.currency = strip_html(&self.currency);
        self.provider = strip_html(&self.provider);
        self.recipient_account = strip_html(&self.recipient_account);
        self.swift_code = strip_html(&self.swift_code);
        self.processed_by = self.processed_by.map(|v| strip_html(&v));
        self
    }
}

/// Lifecycle state of a submitted payment.
///
/// `Pending` is the only non-terminal state. The legal transitions are
/// Pending → Approved and Pending → Denied; nothing transitions away from
/// Approved or Denied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentStatus {
    #[default]
    Pending,
    Approved,
    Denied,
}

impl PaymentStatus {
    /// True once the record can no longer change state.
    pub fn is_terminal(self) -> bool {
        !matches!(self, PaymentStatus::Pending)
    }

    /// Apply a reviewer's decision.
    ///
    /// # Errors
    ///
    /// `Error::AlreadyDecided` if the current state is terminal. The check
    /// runs before any network call, so an approve/deny on a processed
    /// record never reaches the backend.
    pub fn decide(self, decision: Decision) -> Result<PaymentStatus, Error> {
        match self {
            PaymentStatus::Pending => Ok(decision.target()),
            terminal => Err(Error::AlreadyDecided(terminal)),
        }
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PaymentStatus::Pending => "Pending",
            PaymentStatus::Approved => "Approved",
            PaymentStatus::Denied => "Denied",
        };
        f.write_str(s)
    }
}

/// A reviewer's choice on a pending payment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Approve,
    Deny,
}

impl Decision {
    /// The status this decision moves a pending payment into.
    pub fn target(self) -> PaymentStatus {
        match self {
            Decision::Approve => PaymentStatus::Approved,
            Decision::Deny => PaymentStatus::Denied,
        }
    }
}

/// Wire payload for PUT /employee/payments/:id.
#[derive(Debug, Clone, Serialize)]
pub struct StatusUpdate {
    pub status: PaymentStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pending_accepts_exactly_approve_and_deny() {
        assert_eq!(
            PaymentStatus::Pending.decide(Decision::Approve).unwrap(),
            PaymentStatus::Approved
        );
        assert_eq!(
            PaymentStatus::Pending.decide(Decision::Deny).unwrap(),
            PaymentStatus::Denied
        );
    }

    #[test]
    fn terminal_states_reject_decisions() {
        for terminal in [PaymentStatus::Approved, PaymentStatus::Denied] {
            for decision in [Decision::Approve, Decision::Deny] {
                assert!(matches!(
                    terminal.decide(decision),
                    Err(Error::AlreadyDecided(s)) if s == terminal
                ));
            }
        }
    }

    #[test]
    fn status_serializes_as_title_case() {
        assert_eq!(
            serde_json::to_string(&StatusUpdate {
                status: PaymentStatus::Approved
            })
            .unwrap(),
            r#"{"status":"Approved"}"#
        );
    }

    #[test]
    fn missing_status_defaults_to_pending() {
        let record: PaymentRecord = serde_json::from_value(serde_json::json!({
            "_id": "abc123",
            "amount": 100.5,
            "currency": "USD",
            "provider": "SWIFT",
            "recipientAccount": "12345",
            "swiftCode": "ABCDUS33XXX"
        }))
        .unwrap();
        assert_eq!(record.status, PaymentStatus::Pending);
    }

    #[test]
    fn payload_keeps_decimal_point_and_strips_markup() {
        let input = PaymentInput {
            amount: "100.50".to_string(),
            currency: "usd".to_string(),
            provider: "<b>swift</b>".to_string(),
            recipient_account: "12345".to_string(),
            swift_code: "abcdus33xxx".to_string(),
        };
        let payload = input.to_payload().unwrap();
        assert_eq!(payload.amount, 100.50);
        assert_eq!(payload.provider, "swift");
    }

    #[test]
    fn record_sanitization_strips_injected_markup() {
        let record = PaymentRecord {
            id: "abc".to_string(),
            account_number: Some("<i>99</i>".to_string()),
            amount: 10.0,
            currency: "USD<script>alert(1)</script>".to_string(),
            provider: "SWIFT".to_string(),
            recipient_account: "123".to_string(),
            swift_code: "ABCDUS33".to_string(),
            status: PaymentStatus::Pending,
            processed_by: None,
            created_at: None,
        }
        .sanitized();
        assert_eq!(record.currency, "USD");
        assert_eq!(record.account_number.as_deref(), Some("99"));
    }
}

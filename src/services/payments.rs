//! Customer payment submission and history.

use crate::client::ApiClient;
use crate::error::{Error, FieldErrors};
use crate::latch::{FetchSequence, SubmitLatch};
use crate::models::payment::{PaymentInput, PaymentRecord};
use crate::validation::validate_payment;

/// Submit an international payment.
///
/// # Flow
///
/// 1. Validate all five fields; any failure blocks submission with no
///    network call.
/// 2. Take the submission latch; a second submit while one is outstanding
///    is rejected with `Error::SubmissionInFlight`.
/// 3. Parse the amount, strip markup from the string fields, POST
///    /payments with the bearer token.
///
/// The latch is released when this function returns, whatever the outcome.
///
/// # Errors
///
/// - `Error::Validation` with the failing fields
/// - `Error::SubmissionInFlight` if a submit is already outstanding
/// - `Error::NotAuthenticated` if no token is in the session
/// - `Error::Request` with the backend's `msg`/`error` or
///   "Payment creation failed"
pub async fn submit(
    client: &ApiClient,
    latch: &SubmitLatch,
    input: &PaymentInput,
) -> Result<PaymentRecord, Error> {
    let errors = validate_payment(input);
    if !errors.is_empty() {
        return Err(Error::Validation(errors));
    }

    let _guard = latch.try_acquire().ok_or(Error::SubmissionInFlight)?;

    // Validation guarantees the amount parses; keep the failure path typed
    // anyway rather than panicking on a rule drifting out of sync.
    let Some(payload) = input.to_payload() else {
        let mut errors = FieldErrors::new();
        errors.insert("amount", "Enter a valid amount");
        return Err(Error::Validation(errors));
    };

    client
        .post_auth("/payments", &payload, "Payment creation failed")
        .await
}

/// Fetch the caller's payment history.
///
/// Takes a ticket from `seq` before the request and commits it after;
/// returns `Ok(None)` when a newer fetch was issued meanwhile and this
/// response must be discarded. Record fields are HTML-stripped before they
/// reach the caller.
pub async fn list(
    client: &ApiClient,
    seq: &FetchSequence,
) -> Result<Option<Vec<PaymentRecord>>, Error> {
    let ticket = seq.begin();
    let records: Vec<PaymentRecord> = client
        .get_auth("/payments", "Could not fetch payments")
        .await?;

    if !seq.commit(ticket) {
        tracing::debug!("discarding stale payment list response");
        return Ok(None);
    }

    Ok(Some(
        records.into_iter().map(PaymentRecord::sanitized).collect(),
    ))
}

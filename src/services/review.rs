//! Employee review surface: pending queue, decisions, processed history.

use crate::client::ApiClient;
use crate::error::Error;
use crate::latch::FetchSequence;
use crate::models::payment::{Decision, PaymentRecord, StatusUpdate};

/// Fetch payments awaiting review.
///
/// `Ok(None)` means a newer fetch was issued while this one was in flight
/// and its response was discarded.
pub async fn pending(
    client: &ApiClient,
    seq: &FetchSequence,
) -> Result<Option<Vec<PaymentRecord>>, Error> {
    fetch_list(client, seq, "/employee/payments/pending", "Failed to fetch payments").await
}

/// Fetch processed payments.
pub async fn history(
    client: &ApiClient,
    seq: &FetchSequence,
) -> Result<Option<Vec<PaymentRecord>>, Error> {
    fetch_list(
        client,
        seq,
        "/employee/payments/history",
        "Failed to fetch payment history",
    )
    .await
}

async fn fetch_list(
    client: &ApiClient,
    seq: &FetchSequence,
    path: &str,
    fallback: &str,
) -> Result<Option<Vec<PaymentRecord>>, Error> {
    let ticket = seq.begin();
    let records: Vec<PaymentRecord> = client.get_auth(path, fallback).await?;

    if !seq.commit(ticket) {
        tracing::debug!("discarding stale {path} response");
        return Ok(None);
    }
    Ok(Some(records))
}

/// Apply a reviewer's decision to a payment.
///
/// The status state machine is enforced locally first: only a pending
/// record accepts a decision, and a decision on an already-processed record
/// fails with `Error::AlreadyDecided` before any network call. The PUT
/// carries the target status (`Approved` or `Denied`).
pub async fn decide(
    client: &ApiClient,
    payment: &PaymentRecord,
    decision: Decision,
) -> Result<PaymentRecord, Error> {
    let status = payment.status.decide(decision)?;

    let updated: PaymentRecord = client
        .put_auth(
            &format!("/employee/payments/{}", payment.id),
            &StatusUpdate { status },
            "Failed to update payment",
        )
        .await?;

    tracing::info!(payment = %payment.id, %status, "payment processed");
    Ok(updated)
}

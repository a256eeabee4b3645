//! Re-entry and staleness guards around network calls.
//!
//! - [`SubmitLatch`]: at most one submission in flight per form. A second
//!   submit while one is outstanding is rejected without a network call.
//!   The latch is released when the guard drops, on every exit path.
//! - [`FetchSequence`]: list refreshes take a monotonically increasing
//!   ticket; a response is committed only if its ticket is still the latest
//!   issued. "Last request wins" becomes an explicit guarantee instead of
//!   an accident of timing.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

/// In-flight guard for form submission.
#[derive(Debug, Default)]
pub struct SubmitLatch {
    in_flight: AtomicBool,
}

impl SubmitLatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the latch, or `None` if a submission is already outstanding.
    pub fn try_acquire(&self) -> Option<SubmitGuard<'_>> {
        self.in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| SubmitGuard { latch: self })
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }
}

/// Holds the latch for the duration of one submission.
#[derive(Debug)]
pub struct SubmitGuard<'a> {
    latch: &'a SubmitLatch,
}

impl Drop for SubmitGuard<'_> {
    fn drop(&mut self) {
        self.latch.in_flight.store(false, Ordering::Release);
    }
}

/// Monotonic ticket counter for list refreshes.
#[derive(Debug, Default)]
pub struct FetchSequence {
    issued: AtomicU64,
    committed: AtomicU64,
}

/// Ticket for one fetch, handed back at commit time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket(u64);

impl FetchSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a ticket for a fetch about to start.
    pub fn begin(&self) -> FetchTicket {
        FetchTicket(self.issued.fetch_add(1, Ordering::AcqRel) + 1)
    }

    /// Try to commit a completed fetch.
    ///
    /// Returns `false` when a newer fetch was issued in the meantime; the
    /// caller must discard the response.
    pub fn commit(&self, ticket: FetchTicket) -> bool {
        if ticket.0 == self.issued.load(Ordering::Acquire) {
            self.committed.store(ticket.0, Ordering::Release);
            true
        } else {
            false
        }
    }

    /// Ticket of the last committed fetch, if any.
    pub fn last_committed(&self) -> Option<FetchTicket> {
        match self.committed.load(Ordering::Acquire) {
            0 => None,
            n => Some(FetchTicket(n)),
        }
    }
}

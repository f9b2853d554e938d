//! Request/response bridge
//!
//! One centralized pending-request table keyed by correlation token,
//! replacing ad hoc listener-per-call correlation. Each entry resolves at
//! most once: either a matching reply arrives and [`Bridge::resolve`]
//! hands back the stored continuation, or the timeout window elapses and
//! [`Bridge::expire`] removes the entry. A late reply for an expired or
//! already-resolved token matches nothing and is silently discarded.
//!
//! Expiry is the sole cancellation mechanism: there is no explicit cancel
//! call, and callers must treat a timed-out request exactly like a
//! declined one.

use avs_types::{RequestToken, Tick};
use std::collections::HashMap;

/// Reply timeout window, in ticks
pub const REPLY_TIMEOUT_TICKS: u64 = 15;

/// One in-flight request awaiting a correlated reply
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingRequest<K> {
    /// Correlation token, never reused
    pub token: RequestToken,
    /// Tick at which the request was opened
    pub issued_at: Tick,
    /// Caller continuation: what to do when the reply lands
    pub kind: K,
}

/// Pending-request table with tick-based expiry
#[derive(Debug)]
pub struct Bridge<K> {
    pending: HashMap<RequestToken, PendingRequest<K>>,
    timeout_ticks: u64,
}

impl<K> Bridge<K> {
    /// Creates a bridge with the standard timeout window
    pub fn new() -> Self {
        Self::with_timeout(REPLY_TIMEOUT_TICKS)
    }

    /// Creates a bridge with a custom timeout window
    pub fn with_timeout(timeout_ticks: u64) -> Self {
        Self {
            pending: HashMap::new(),
            timeout_ticks,
        }
    }

    /// Opens a new request and returns its fresh correlation token
    pub fn open(&mut self, kind: K, now: Tick) -> RequestToken {
        let token = RequestToken::new();
        self.pending.insert(
            token,
            PendingRequest {
                token,
                issued_at: now,
                kind,
            },
        );
        token
    }

    /// Resolves a pending request by token
    ///
    /// Returns the stored continuation exactly once; `None` for unknown,
    /// already-resolved, or expired tokens (the idempotent discard path).
    pub fn resolve(&mut self, token: RequestToken) -> Option<K> {
        self.pending.remove(&token).map(|entry| entry.kind)
    }

    /// Removes and returns every request whose window has elapsed
    ///
    /// A request expires once `now - issued_at >= timeout`. Expired
    /// entries are returned oldest-first so the caller can run its
    /// cancellation path for each.
    pub fn expire(&mut self, now: Tick) -> Vec<PendingRequest<K>> {
        let timeout = self.timeout_ticks;
        let expired: Vec<RequestToken> = self
            .pending
            .values()
            .filter(|entry| now.elapsed_since(entry.issued_at) >= timeout)
            .map(|entry| entry.token)
            .collect();

        let mut removed: Vec<PendingRequest<K>> = expired
            .into_iter()
            .filter_map(|token| self.pending.remove(&token))
            .collect();
        removed.sort_by_key(|entry| entry.issued_at);
        removed
    }

    /// Returns true if the token has an unresolved entry
    pub fn is_pending(&self, token: RequestToken) -> bool {
        self.pending.contains_key(&token)
    }

    /// Returns the number of unresolved requests
    pub fn in_flight(&self) -> usize {
        self.pending.len()
    }
}

impl<K> Default for Bridge<K> {
    fn default() -> Self {
        Self::new()
    }
}

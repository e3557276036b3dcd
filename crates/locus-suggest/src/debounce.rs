//! Stale-response guard for debounced requests.

use std::sync::atomic::{AtomicU64, Ordering};

/// Identifies one request issued through a [`RequestGuard`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTicket(u64);

impl RequestTicket {
    pub fn generation(self) -> u64 {
        self.0
    }
}

/// Monotonic request generation counter. Only the ticket of the most
/// recently begun request is current.
#[derive(Debug, Default)]
pub struct RequestGuard {
    generation: AtomicU64,
}

impl RequestGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a request, superseding every earlier ticket.
    pub fn begin(&self) -> RequestTicket {
        RequestTicket(self.generation.fetch_add(1, Ordering::SeqCst) + 1)
    }

    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        self.generation.load(Ordering::SeqCst) == ticket.0
    }

    /// Generation of the latest request, 0 before the first.
    pub fn current(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }
}

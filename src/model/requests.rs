//! Request Tracking
//!
//! Every outgoing API request gets a sequence number from a single
//! monotonic counter. Each slot remembers the newest number it issued, and
//! a response is applied only if it carries that number. A slow response to
//! an older page request can therefore never overwrite a newer page.

use std::collections::HashMap;

/// Independent request streams; a new request supersedes older ones in the same slot
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RequestSlot {
    Page,
    Detail,
    Index,
    Search,
    Reciters,
    Timings,
    Riwayat,
    Stats,
}

#[derive(Clone, Debug, Default)]
pub struct RequestTracker {
    next_seq: u64,
    latest: HashMap<RequestSlot, u64>,
}

impl RequestTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a sequence number, superseding anything in flight for `slot`
    pub fn issue(&mut self, slot: RequestSlot) -> u64 {
        self.next_seq += 1;
        self.latest.insert(slot, self.next_seq);
        self.next_seq
    }

    /// Whether `seq` is the newest request issued for `slot`
    pub fn is_current(&self, slot: RequestSlot, seq: u64) -> bool {
        self.latest.get(&slot) == Some(&seq)
    }

    /// Drop interest in a slot (e.g. the panel was closed)
    pub fn cancel(&mut self, slot: RequestSlot) {
        self.latest.remove(&slot);
    }

    /// Whether a response is still awaited for `slot`
    pub fn is_pending(&self, slot: RequestSlot) -> bool {
        self.latest.contains_key(&slot)
    }

    /// Mark the slot as answered
    pub fn complete(&mut self, slot: RequestSlot, seq: u64) {
        if self.is_current(slot, seq) {
            self.latest.remove(&slot);
        }
    }
}

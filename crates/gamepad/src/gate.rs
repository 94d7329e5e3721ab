//! Read-interval gate
//!
//! A gate remembers when its domain was last sampled and refuses a new sample
//! until the shared interval has elapsed. Elapsed time is computed with
//! `wrapping_sub`, so a clock rolling over `u32::MAX` does not stall reads.

/// Last-sample timestamp of one input domain (digital or analog).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReadGate {
    last_ms: Option<u32>,
}

impl ReadGate {
    /// A gate that has never sampled; the first check always opens.
    pub const fn new() -> Self {
        Self { last_ms: None }
    }

    /// `true` while fewer than `interval_ms` milliseconds have passed since
    /// the last recorded sample. Does not modify the gate.
    pub fn is_closed(&self, now_ms: u32, interval_ms: u16) -> bool {
        match self.last_ms {
            Some(last) => now_ms.wrapping_sub(last) < u32::from(interval_ms),
            None => false,
        }
    }

    /// Record a sample taken at `now_ms`.
    pub fn record(&mut self, now_ms: u32) {
        self.last_ms = Some(now_ms);
    }

    /// If the gate is open, record `now_ms` and return `true`.
    pub fn try_open(&mut self, now_ms: u32, interval_ms: u16) -> bool {
        if self.is_closed(now_ms, interval_ms) {
            return false;
        }
        self.record(now_ms);
        true
    }

    /// Timestamp of the last recorded sample.
    pub fn last_sample_ms(&self) -> Option<u32> {
        self.last_ms
    }
}

/*
[INPUT]:  Wall clock readings
[OUTPUT]: Strictly increasing request nonces
[POS]:    Auth layer - replay protection for signed requests
[UPDATE]: When the exchange changes its nonce resolution
*/

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::Utc;

/// Nonce units per second (100 ns resolution)
pub const NONCE_UNITS_PER_SECOND: u64 = 10_000_000;

/// Current wall-clock time in nonce units
pub fn clock_nonce() -> u64 {
    Utc::now()
        .timestamp_nanos_opt()
        .map_or(0, |nanos| u64::try_from(nanos / 100).unwrap_or(0))
}

/// Issues nonces that never repeat or decrease
///
/// Each nonce is the clock reading, bumped past the last issued value when
/// the clock has not advanced. The high-water mark is updated with a single
/// atomic read-modify-write, so concurrent callers sharing one generator
/// always receive distinct values.
#[derive(Debug, Default)]
pub struct NonceGenerator {
    last: AtomicU64,
}

impl NonceGenerator {
    pub const fn new() -> Self {
        Self {
            last: AtomicU64::new(0),
        }
    }

    pub fn next(&self) -> u64 {
        self.next_at(clock_nonce())
    }

    /// Issue a nonce for the given clock reading
    pub fn next_at(&self, clock: u64) -> u64 {
        let advance = |last: u64| clock.max(last.saturating_add(1));
        let previous = self
            .last
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| Some(advance(last)))
            .unwrap_or_else(|last| last);
        advance(previous)
    }

    /// Highest nonce issued so far, 0 if none
    pub fn last_issued(&self) -> u64 {
        self.last.load(Ordering::SeqCst)
    }
}

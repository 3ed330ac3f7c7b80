/*
[INPUT]:  Wall clock and the last nonce issued in this process
[OUTPUT]: Strictly increasing nonces for private requests
[POS]:    Auth layer - replay protection for authenticated calls
[UPDATE]: When nonce format or uniqueness scope changes
*/

use std::fmt::Debug;
use std::sync::atomic::{AtomicU64, Ordering};

use chrono::Utc;

/// Source of nonces for private requests.
pub trait NonceProvider: Send + Sync + Debug {
    /// Return a value greater than every value previously returned.
    fn next_nonce(&self) -> u64;
}

/// Last nonce handed out by any [`IncreasingNonce`] in this process.
static LAST_NONCE: AtomicU64 = AtomicU64::new(0);

/// Microsecond-clock nonce, shared process-wide.
///
/// Yields `max(now_us, last + 1)`, so two clients holding the same key never
/// collide and a clock stepping backwards cannot reissue a value.
#[derive(Debug, Clone, Copy, Default)]
pub struct IncreasingNonce;

impl IncreasingNonce {
    pub fn new() -> Self {
        Self
    }
}

impl NonceProvider for IncreasingNonce {
    fn next_nonce(&self) -> u64 {
        let now = Utc::now().timestamp_micros().max(0) as u64;
        let mut last = LAST_NONCE.load(Ordering::Relaxed);
        loop {
            let next = now.max(last + 1);
            match LAST_NONCE.compare_exchange_weak(last, next, Ordering::AcqRel, Ordering::Relaxed)
            {
                Ok(_) => return next,
                Err(current) => last = current,
            }
        }
    }
}

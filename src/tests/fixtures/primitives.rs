// Deterministic capabilities for tests.

use crate::shared::core::primitives::{Clock, IdGenerator};
use chrono::{DateTime, TimeZone, Utc};
use std::sync::atomic::{AtomicU64, Ordering};

/// Yields `{prefix}-0001`, `{prefix}-0002`, ...
pub struct SequentialIdGenerator {
    prefix: &'static str,
    next: AtomicU64,
}

impl SequentialIdGenerator {
    pub fn new(prefix: &'static str) -> Self {
        Self {
            prefix,
            next: AtomicU64::new(1),
        }
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&self) -> String {
        let n = self.next.fetch_add(1, Ordering::Relaxed);
        format!("{}-{n:04}", self.prefix)
    }
}

pub struct FixedClock(pub DateTime<Utc>);

impl FixedClock {
    pub fn epoch() -> Self {
        Self(Utc.timestamp_millis_opt(1_700_000_000_000).unwrap())
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

// Capabilities the stores need from the outside world.
//
// Purpose
// - IdGenerator: hand out opaque, unique identifiers for new records.
// - Clock: tell the current time for creation timestamps.
//
// Testing guidance
// - Inject deterministic implementations (see tests::fixtures::primitives).

use chrono::{DateTime, Utc};
use uuid::Uuid;

pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> String;
}

pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Time-ordered UUIDs, rendered in their hyphenated form.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidV7Generator;

impl IdGenerator for UuidV7Generator {
    fn next_id(&self) -> String {
        Uuid::now_v7().to_string()
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

//! Shared clock test doubles for deterministic timestamps.

use chrono::{DateTime, Duration, Local, TimeZone, Utc};
use mockable::Clock;
use std::sync::atomic::{AtomicI64, Ordering};

fn base_timestamp() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 8, 6, 12, 0, 0)
        .single()
        .expect("valid base timestamp")
}

/// Clock advancing one second per reading, so every write operation
/// lands on a distinct, strictly increasing timestamp.
#[derive(Debug)]
pub(crate) struct SteppingClock {
    base: DateTime<Utc>,
    ticks: AtomicI64,
}

impl SteppingClock {
    pub(crate) fn new() -> Self {
        Self {
            base: base_timestamp(),
            ticks: AtomicI64::new(0),
        }
    }
}

impl Clock for SteppingClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        let tick = self.ticks.fetch_add(1, Ordering::SeqCst);
        self.base + Duration::seconds(tick)
    }
}

/// Clock frozen at a fixed instant, for provoking creation-time ties.
#[derive(Debug)]
pub(crate) struct FixedClock(DateTime<Utc>);

impl FixedClock {
    pub(crate) fn new() -> Self {
        Self(base_timestamp())
    }
}

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        self.0.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.0
    }
}

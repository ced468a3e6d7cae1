// tests/support/mocks/time.rs
use chrono::{DateTime, Duration, Utc};
use nikwetu_core::application::ports::time::Clock;
use once_cell::sync::Lazy;
use std::sync::atomic::{AtomicI64, Ordering};

static FIXED_NOW: Lazy<DateTime<Utc>> = Lazy::new(|| {
    DateTime::parse_from_rfc3339("2025-03-01T08:00:00Z")
        .expect("invalid RFC3339 in tests/support/mocks/time.rs")
        .with_timezone(&Utc)
});

pub fn fixed_now() -> DateTime<Utc> {
    *FIXED_NOW
}

/// Starts at [`fixed_now`] and moves one second forward on every reading, so
/// consecutive posts get strictly increasing timestamps.
#[derive(Default)]
pub struct TickingClock {
    ticks: AtomicI64,
}

impl TickingClock {
    /// Jump ahead without consuming a reading.
    pub fn advance(&self, by: Duration) {
        self.ticks.fetch_add(by.num_seconds(), Ordering::SeqCst);
    }

    /// The next value `now()` will return.
    pub fn peek(&self) -> DateTime<Utc> {
        fixed_now() + Duration::seconds(self.ticks.load(Ordering::SeqCst))
    }
}

impl Clock for TickingClock {
    fn now(&self) -> DateTime<Utc> {
        let tick = self.ticks.fetch_add(1, Ordering::SeqCst);
        fixed_now() + Duration::seconds(tick)
    }
}

//! Time sources for message creation.

use std::cell::Cell;

use time::{Duration, OffsetDateTime};

/// Source of "now" for new messages.
pub trait Clock {
    fn now(&self) -> OffsetDateTime;
}

/// Wall clock in UTC.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> OffsetDateTime {
        OffsetDateTime::now_utc()
    }
}

impl<F> Clock for F
where
    F: Fn() -> OffsetDateTime,
{
    fn now(&self) -> OffsetDateTime {
        self()
    }
}

/// Deterministic clock that advances by a fixed step on every read.
///
/// Each call returns the current instant and then moves forward, so
/// consecutive messages get distinct ids.
#[derive(Debug)]
pub struct SteppingClock {
    next: Cell<OffsetDateTime>,
    step: Duration,
}

impl SteppingClock {
    #[must_use]
    pub fn new(start: OffsetDateTime, step: Duration) -> Self {
        Self { next: Cell::new(start), step }
    }

    /// Starts at the Unix epoch and steps one millisecond per read.
    #[must_use]
    pub fn millis_from_epoch() -> Self {
        Self::new(OffsetDateTime::UNIX_EPOCH, Duration::milliseconds(1))
    }
}

impl Clock for SteppingClock {
    fn now(&self) -> OffsetDateTime {
        let current = self.next.get();
        self.next.set(current + self.step);
        current
    }
}

use std::time::Duration;
use chrono::{DateTime, TimeDelta, Utc};
use tracing::debug;

/// Simulated time used to stamp authorship. Never reads the wall clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct LogicalClock {
    now: DateTime<Utc>,
}

impl LogicalClock {
    pub fn starting_at(now: DateTime<Utc>) -> Self {
        Self { now }
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.now
    }

    /// Move forward by `by`. Saturates at the largest representable time.
    pub fn advance(&mut self, by: Duration) {
        let delta = TimeDelta::from_std(by).unwrap_or(TimeDelta::MAX);
        self.now = self.now.checked_add_signed(delta).unwrap_or(DateTime::<Utc>::MAX_UTC);
        debug!("Logical clock advanced by {:?} to {}", by, self.now);
    }
}

impl Default for LogicalClock {
    fn default() -> Self {
        Self::starting_at(DateTime::<Utc>::UNIX_EPOCH)
    }
}

use std::sync::atomic::{AtomicU32, Ordering};

/// SOA serial source: the current Unix time, never lower than a serial
/// already handed out by this process.
#[derive(Debug, Default)]
pub struct SerialClock {
    last: AtomicU32,
}

impl SerialClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next(&self) -> u32 {
        self.observe(unix_now())
    }

    /// Records `now` and returns the serial to publish.
    pub fn observe(&self, now: u32) -> u32 {
        let previous = self.last.fetch_max(now, Ordering::AcqRel);
        previous.max(now)
    }
}

fn unix_now() -> u32 {
    chrono::Utc::now().timestamp().clamp(0, u32::MAX as i64) as u32
}

use chrono::Utc;
use std::sync::atomic::{AtomicI64, Ordering};

/// Source of the current time. Booking expiry, booking rules and the
/// background jobs all depend on it, so tests can pin and move the clock.
pub trait ISys: Send + Sync {
    /// The current timestamp in millis
    fn get_timestamp_millis(&self) -> i64;
}

/// System that gets the real time and is used when not testing
pub struct RealSys {}
impl ISys for RealSys {
    fn get_timestamp_millis(&self) -> i64 {
        Utc::now().timestamp_millis()
    }
}

/// Clock that only moves when told to
pub struct FixedSys {
    now: AtomicI64,
}

impl FixedSys {
    pub fn new(timestamp_millis: i64) -> Self {
        Self {
            now: AtomicI64::new(timestamp_millis),
        }
    }

    pub fn set(&self, timestamp_millis: i64) {
        self.now.store(timestamp_millis, Ordering::SeqCst);
    }

    pub fn advance(&self, millis: i64) {
        self.now.fetch_add(millis, Ordering::SeqCst);
    }
}

impl ISys for FixedSys {
    fn get_timestamp_millis(&self) -> i64 {
        self.now.load(Ordering::SeqCst)
    }
}

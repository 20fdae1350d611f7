use chrono::Utc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Hands out IDs based on the current epoch milliseconds.
///
/// Two requests in the same millisecond would collide on a raw timestamp, so
/// each new ID is bumped to at least one past the previous one. Clones share
/// the same sequence.
#[derive(Debug, Clone, Default)]
pub struct TimestampIdGenerator {
    last: Arc<AtomicU64>,
}

impl TimestampIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Next ID using the wall clock
    pub fn next_id(&self) -> u64 {
        self.next_id_at(Utc::now().timestamp_millis().max(0) as u64)
    }

    /// Next ID for a given clock reading
    pub fn next_id_at(&self, now_millis: u64) -> u64 {
        let mut previous = self.last.load(Ordering::Relaxed);
        loop {
            let candidate = now_millis.max(previous + 1);
            match self.last.compare_exchange_weak(previous, candidate, Ordering::Relaxed, Ordering::Relaxed) {
                Ok(_) => return candidate,
                Err(actual) => previous = actual,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_follow_the_clock() {
        let ids = TimestampIdGenerator::new();
        assert_eq!(ids.next_id_at(1_000), 1_000);
        assert_eq!(ids.next_id_at(2_000), 2_000);
    }

    #[test]
    fn test_same_millisecond_does_not_collide() {
        let ids = TimestampIdGenerator::new();
        let first = ids.next_id_at(5_000);
        let second = ids.next_id_at(5_000);
        let third = ids.next_id_at(4_000);
        assert_eq!(first, 5_000);
        assert_eq!(second, 5_001);
        assert_eq!(third, 5_002);
    }

    #[test]
    fn test_clones_share_sequence() {
        let ids = TimestampIdGenerator::new();
        let other = ids.clone();
        assert_eq!(ids.next_id_at(10), 10);
        assert_eq!(other.next_id_at(10), 11);
    }
}

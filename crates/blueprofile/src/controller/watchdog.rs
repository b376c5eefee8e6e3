//! Single-shot watchdog bounding one profile attempt

use std::time::{Duration, Instant};

/// Timer the controller arms before every attempt.
///
/// Expiry is observed by polling; the controller checks `has_expired`
/// whenever it is driven.
pub trait Watchdog: Send {
    /// Start (or restart) the timer
    fn arm(&mut self, timeout: Duration);

    /// Stop the timer if it is running
    fn disarm(&mut self);

    fn is_armed(&self) -> bool;

    /// Armed and past its deadline
    fn has_expired(&self) -> bool;

    /// Time left before expiry, `None` when disarmed or without a deadline
    fn remaining(&self) -> Option<Duration>;
}

/// Watchdog backed by a monotonic deadline
#[derive(Debug, Default)]
pub struct DeadlineWatchdog {
    armed: bool,
    /// `None` while armed means the timeout is too large to represent and never fires
    deadline: Option<Instant>,
}

impl DeadlineWatchdog {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Watchdog for DeadlineWatchdog {
    fn arm(&mut self, timeout: Duration) {
        self.armed = true;
        self.deadline = Instant::now().checked_add(timeout);
    }

    fn disarm(&mut self) {
        self.armed = false;
        self.deadline = None;
    }

    fn is_armed(&self) -> bool {
        self.armed
    }

    fn has_expired(&self) -> bool {
        self.armed
            && self
                .deadline
                .map(|deadline| Instant::now() >= deadline)
                .unwrap_or(false)
    }

    fn remaining(&self) -> Option<Duration> {
        if !self.armed {
            return None;
        }
        self.deadline
            .map(|deadline| deadline.saturating_duration_since(Instant::now()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deadline_watchdog() {
        let mut watchdog = DeadlineWatchdog::new();
        assert!(!watchdog.is_armed());
        assert!(!watchdog.has_expired());
        assert_eq!(watchdog.remaining(), None);

        watchdog.arm(Duration::ZERO);
        assert!(watchdog.is_armed());
        assert!(watchdog.has_expired());
        assert_eq!(watchdog.remaining(), Some(Duration::ZERO));

        watchdog.arm(Duration::from_secs(3600));
        assert!(!watchdog.has_expired());
        assert!(watchdog.remaining().unwrap() <= Duration::from_secs(3600));

        watchdog.disarm();
        assert!(!watchdog.is_armed());
        assert!(!watchdog.has_expired());
    }

    #[test]
    fn test_unrepresentable_deadline_never_expires() {
        let mut watchdog = DeadlineWatchdog::new();
        watchdog.arm(Duration::MAX);
        assert!(watchdog.is_armed());
        assert!(!watchdog.has_expired());
        assert_eq!(watchdog.remaining(), None);

        watchdog.disarm();
        assert!(!watchdog.is_armed());
    }
}

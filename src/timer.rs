//! Deadline timers polled from the event loop.
//!
//! A `Timer` belongs to the screen that armed it. Nothing runs in the
//! background: the owner asks `fire` on every tick, and dropping the owner
//! drops whatever was pending.

use std::time::{Duration, Instant};

/// Login spinner before redirecting to the survey
pub const LOGIN_REDIRECT_DELAY: Duration = Duration::from_millis(1500);
/// Welcome splash shown once per survey mount
pub const WELCOME_DURATION: Duration = Duration::from_millis(2000);
/// Highlight pulse on the category that was just rated
pub const HIGHLIGHT_DURATION: Duration = Duration::from_millis(700);
/// Confetti after an Excellent rating
pub const CONFETTI_DURATION: Duration = Duration::from_millis(3000);

/// A single-shot deadline
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Timer {
    deadline: Option<Instant>,
}

impl Timer {
    /// Arm (or re-arm) the timer to expire `delay` after `now`
    pub fn arm(&mut self, now: Instant, delay: Duration) {
        self.deadline = Some(now + delay);
    }

    /// Returns true exactly once, on the first poll at or after the deadline
    pub fn fire(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unarmed_never_fires() {
        let mut timer = Timer::default();
        assert!(!timer.fire(Instant::now() + Duration::from_secs(60)));
    }

    #[test]
    fn test_fires_once_at_deadline() {
        let start = Instant::now();
        let mut timer = Timer::default();
        timer.arm(start, Duration::from_millis(700));

        assert!(!timer.fire(start + Duration::from_millis(699)));
        assert!(timer.fire(start + Duration::from_millis(700)));
        assert!(!timer.fire(start + Duration::from_millis(800)));
    }

    #[test]
    fn test_rearm_restarts() {
        let start = Instant::now();
        let mut timer = Timer::default();
        timer.arm(start, Duration::from_millis(700));
        timer.arm(start + Duration::from_millis(500), Duration::from_millis(700));

        assert!(!timer.fire(start + Duration::from_millis(700)));
        assert!(timer.fire(start + Duration::from_millis(1200)));
    }
}

//! Fixed-rate frame pacing
//!
//! Each frame sleeps for whatever is left of its budget. Frames that overrun
//! are not compensated: the next one simply starts late.

use std::thread;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FramePacer {
    budget: Duration,
}

impl FramePacer {
    pub fn new(budget: Duration) -> Self {
        Self { budget }
    }

    /// Pacer for `hz` frames per second
    pub fn from_hz(hz: u32) -> Self {
        Self::new(Duration::from_secs(1) / hz.max(1))
    }

    pub fn budget(&self) -> Duration {
        self.budget
    }

    /// Time left in the budget after `elapsed`; zero once overrun
    pub fn remaining(&self, elapsed: Duration) -> Duration {
        self.budget.saturating_sub(elapsed)
    }

    /// Sleep out the rest of the frame that began at `frame_start`.
    /// Returns how long it slept.
    pub fn wait(&self, frame_start: Instant) -> Duration {
        let remaining = self.remaining(frame_start.elapsed());
        if !remaining.is_zero() {
            thread::sleep(remaining);
        }
        remaining
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_budget_from_hz() {
        assert_eq!(FramePacer::from_hz(50).budget(), Duration::from_millis(20));
        assert_eq!(FramePacer::from_hz(0).budget(), Duration::from_secs(1));
    }

    #[test]
    fn test_remaining_never_negative() {
        let pacer = FramePacer::from_hz(100);
        assert_eq!(pacer.remaining(Duration::from_millis(4)), Duration::from_millis(6));
        assert_eq!(pacer.remaining(Duration::from_millis(10)), Duration::ZERO);
        assert_eq!(pacer.remaining(Duration::from_millis(45)), Duration::ZERO);
    }

    #[test]
    fn test_wait_fills_the_frame() {
        let pacer = FramePacer::new(Duration::from_millis(15));
        let start = Instant::now();
        pacer.wait(start);
        assert!(start.elapsed() >= Duration::from_millis(15));
    }

    #[test]
    fn test_wait_after_overrun_returns_immediately() {
        let pacer = FramePacer::new(Duration::from_millis(1));
        let start = Instant::now();
        thread::sleep(Duration::from_millis(5));
        assert_eq!(pacer.wait(start), Duration::ZERO);
    }
}

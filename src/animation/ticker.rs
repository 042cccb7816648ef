//! Tick source for the animation
//!
//! egui repaints at whatever rate the display allows, but the animation moves
//! in fixed ticks. The ticker turns the wall time between two frames into a
//! whole number of ticks and carries the remainder into the next frame.

use std::time::{Duration, Instant};

/// Upper bound on ticks delivered in one frame
///
/// Time beyond this is dropped so a stalled window (minimized, dragged)
/// resumes where it left off instead of racing ahead.
pub const MAX_TICKS_PER_FRAME: u32 = 64;

/// Converts elapsed frame time into animation ticks
#[derive(Debug, Default)]
pub struct Ticker {
    last: Option<Instant>,
    pending: Duration,
}

impl Ticker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of ticks that fell due since the previous call
    ///
    /// # Arguments
    /// * `now` - Time of the current frame
    /// * `interval` - Delay between ticks; a new value applies from this call on
    ///
    /// The first call after construction or [`reset`](Self::reset) only
    /// records `now` and returns 0.
    pub fn due_ticks(&mut self, now: Instant, interval: Duration) -> u32 {
        let Some(last) = self.last.replace(now) else {
            self.pending = Duration::ZERO;
            return 0;
        };

        if interval.is_zero() {
            return 0;
        }

        self.pending += now.saturating_duration_since(last);

        let due = self.pending.as_nanos() / interval.as_nanos();
        if due >= MAX_TICKS_PER_FRAME as u128 {
            self.pending = Duration::ZERO;
            return MAX_TICKS_PER_FRAME;
        }

        // due < MAX_TICKS_PER_FRAME, so the cast is lossless
        let due = due as u32;
        self.pending -= interval * due;
        due
    }

    /// Forget the previous frame time
    pub fn reset(&mut self) {
        self.last = None;
        self.pending = Duration::ZERO;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INTERVAL: Duration = Duration::from_millis(20);

    #[test]
    fn test_first_call_primes() {
        let mut ticker = Ticker::new();
        assert_eq!(ticker.due_ticks(Instant::now(), INTERVAL), 0);
    }

    #[test]
    fn test_carries_remainder() {
        let mut ticker = Ticker::new();
        let start = Instant::now();
        ticker.due_ticks(start, INTERVAL);

        // 16 ms: not yet a tick
        assert_eq!(ticker.due_ticks(start + Duration::from_millis(16), INTERVAL), 0);
        // 32 ms total: one tick, 12 ms carried
        assert_eq!(ticker.due_ticks(start + Duration::from_millis(32), INTERVAL), 1);
        // 48 ms total: 28 ms pending, one more tick
        assert_eq!(ticker.due_ticks(start + Duration::from_millis(48), INTERVAL), 1);
        // 100 ms total: 60 ms pending, three ticks
        assert_eq!(ticker.due_ticks(start + Duration::from_millis(100), INTERVAL), 3);
    }

    #[test]
    fn test_interval_change_applies_to_next_call() {
        let mut ticker = Ticker::new();
        let start = Instant::now();
        ticker.due_ticks(start, INTERVAL);

        let fast = Duration::from_millis(1);
        assert_eq!(ticker.due_ticks(start + Duration::from_millis(10), fast), 10);
        assert_eq!(ticker.due_ticks(start + Duration::from_millis(30), INTERVAL), 1);
    }

    #[test]
    fn test_burst_is_capped() {
        let mut ticker = Ticker::new();
        let start = Instant::now();
        ticker.due_ticks(start, INTERVAL);

        let ticks = ticker.due_ticks(start + Duration::from_secs(60), INTERVAL);
        assert_eq!(ticks, MAX_TICKS_PER_FRAME);

        // Surplus time was dropped
        assert_eq!(ticker.due_ticks(start + Duration::from_secs(60) + Duration::from_millis(5), INTERVAL), 0);
    }

    #[test]
    fn test_reset_skips_paused_time() {
        let mut ticker = Ticker::new();
        let start = Instant::now();
        ticker.due_ticks(start, INTERVAL);
        ticker.reset();

        assert_eq!(ticker.due_ticks(start + Duration::from_secs(5), INTERVAL), 0);
        assert_eq!(ticker.due_ticks(start + Duration::from_millis(5020), INTERVAL), 1);
    }
}

//! Fixed-rate update scheduling and frame-rate tracking.

use std::time::{Duration, Instant};

/// Schedules fixed-rate update ticks on the event-loop thread.
///
/// The schedule advances one interval per paid-out tick; after a stall
/// longer than a few intervals the backlog is dropped instead of replayed.
pub struct UpdateClock {
    interval: Duration,
    next_tick: Instant,
    rate: u32,
}

impl UpdateClock {
    /// Ticks owed after a stall beyond this many intervals are dropped.
    const MAX_BACKLOG: u32 = 4;

    /// A clock targeting `rate` ticks per second. The first tick is due
    /// immediately.
    #[must_use]
    pub fn new(rate: u32) -> Self {
        let rate = rate.max(1);
        Self {
            interval: Duration::from_secs_f64(1.0 / f64::from(rate)),
            next_tick: Instant::now(),
            rate,
        }
    }

    /// True when an update tick is due; advances the schedule by one tick.
    /// Call in a loop to drain all due ticks.
    pub fn tick_due(&mut self) -> bool {
        let now = Instant::now();
        if now < self.next_tick {
            return false;
        }
        self.next_tick += self.interval;
        if now > self.next_tick + self.interval * Self::MAX_BACKLOG {
            self.next_tick = now + self.interval;
        }
        true
    }

    /// Nominal tick duration in seconds.
    #[must_use]
    pub fn dt(&self) -> f32 {
        1.0 / self.rate as f32
    }
}

/// Smoothed frames-per-second estimate (exponential moving average).
pub struct FpsCounter {
    last_frame: Instant,
    smoothed: f32,
    smoothing: f32,
}

impl Default for FpsCounter {
    fn default() -> Self {
        Self::new()
    }
}

impl FpsCounter {
    /// A counter primed with a plausible starting estimate.
    #[must_use]
    pub fn new() -> Self {
        Self {
            last_frame: Instant::now(),
            smoothed: 60.0,
            smoothing: 0.05,
        }
    }

    /// Record a completed frame.
    pub fn frame(&mut self) {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_frame).as_secs_f32();
        self.last_frame = now;
        if elapsed > 0.0 {
            let instant_fps = 1.0 / elapsed;
            self.smoothed =
                self.smoothed * (1.0 - self.smoothing) + instant_fps * self.smoothing;
        }
    }

    /// The current smoothed estimate.
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.smoothed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_tick_is_due_immediately() {
        let mut clock = UpdateClock::new(30);
        assert!(clock.tick_due());
    }

    #[test]
    fn draining_stops_within_the_backlog_cap() {
        let mut clock = UpdateClock::new(30);
        let mut ticks = 0;
        while clock.tick_due() {
            ticks += 1;
            assert!(ticks < 10, "clock never stopped paying out ticks");
        }
        assert!(ticks >= 1);
    }

    #[test]
    fn nominal_dt_matches_the_rate() {
        let clock = UpdateClock::new(30);
        assert!((clock.dt() - 1.0 / 30.0).abs() < 1e-6);
    }
}

/// Frame clock for the fine (per-frame) loop.
///
/// Converts host timestamps in milliseconds into a clamped dt in seconds.
/// The first frame after a (re)start yields dt = 0 so a loop that sat idle
/// never integrates the idle gap.
#[derive(Debug, Clone)]
pub struct FrameClock {
    /// Timestamp of the previous frame, `None` until the first frame after a start.
    last_ms: Option<f64>,
    /// Samples above this are treated as a stall.
    max_dt: f64,
    /// Replacement dt used for stalled samples.
    nominal_dt: f64,
}

impl FrameClock {
    pub fn new(max_dt: f64, nominal_dt: f64) -> Self {
        Self {
            last_ms: None,
            max_dt,
            nominal_dt,
        }
    }

    /// Forget the previous timestamp. Call when the frame loop is (re)started.
    pub fn reset(&mut self) {
        self.last_ms = None;
    }

    /// Record a frame at `now_ms` and return the clamped dt in seconds.
    pub fn advance(&mut self, now_ms: f64) -> f64 {
        let raw = match self.last_ms {
            Some(last) => (now_ms - last) / 1000.0,
            None => 0.0,
        };
        self.last_ms = Some(now_ms);

        if raw > self.max_dt {
            log::warn!("frame stall of {:.0} ms clamped to {:.0} ms", raw * 1000.0, self.nominal_dt * 1000.0);
            self.nominal_dt
        } else {
            raw.max(0.0)
        }
    }

    /// Timestamp of the most recent frame.
    pub fn last_ms(&self) -> Option<f64> {
        self.last_ms
    }
}

/// Fixed-interval accumulator for the coarse (speed) loop.
///
/// Hosts without a native interval timer feed it elapsed time and run the
/// returned number of coarse ticks.
#[derive(Debug, Clone)]
pub struct TickAccumulator {
    /// The fixed interval per tick, in seconds.
    interval: f64,
    /// Accumulated time not yet consumed by a tick.
    accumulator: f64,
}

impl TickAccumulator {
    pub fn new(interval: f64) -> Self {
        Self {
            interval,
            accumulator: 0.0,
        }
    }

    /// Add elapsed time in seconds. Returns the number of ticks that are due.
    pub fn accumulate(&mut self, elapsed: f64) -> u32 {
        self.accumulator += elapsed.max(0.0);
        // Cap to prevent a burst after a long stall (max 10 ticks per call)
        self.accumulator = self.accumulator.min(self.interval * 10.0);
        // The epsilon keeps 0.1 + 0.1 + ... from landing a hair under a tick.
        let ticks = ((self.accumulator + 1e-9) / self.interval) as u32;
        self.accumulator = (self.accumulator - ticks as f64 * self.interval).max(0.0);
        ticks
    }

    /// Drop any partial interval, as when the timer is stopped and rearmed.
    pub fn reset(&mut self) {
        self.accumulator = 0.0;
    }

    /// The fixed interval in seconds.
    pub fn interval(&self) -> f64 {
        self.interval
    }
}

use crate::config::MAX_FPS;
use std::time::Duration;
use web_time::Instant;

/// Limits how often frames are rendered regardless of how often the host calls back.
#[derive(Debug)]
pub(crate) struct FrameThrottle {
    interval: Duration,
    /// The reference time of the last rendered frame
    then: Instant,
}

impl FrameThrottle {
    pub(crate) fn new(fps: u32, now: Instant) -> Self {
        Self { interval: Self::interval_for(fps), then: now }
    }

    pub(crate) fn set_fps(&mut self, fps: u32) {
        self.interval = Self::interval_for(fps);
    }

    pub(crate) fn interval(&self) -> Duration {
        self.interval
    }

    /// Restart counting from `now`, e.g. when the animation is resumed.
    pub(crate) fn reset(&mut self, now: Instant) {
        self.then = now;
    }

    /// Returns whether a frame should be rendered at `now`.
    ///
    /// A frame is due once strictly more than one interval has passed. The leftover time past
    /// the interval is carried into the next reference time so the rate doesn't drift.
    pub(crate) fn poll(&mut self, now: Instant) -> bool {
        let delta = now.saturating_duration_since(self.then);
        if delta <= self.interval {
            return false;
        }
        let remainder = Duration::from_nanos((delta.as_nanos() % self.interval.as_nanos()) as u64);
        self.then = now.checked_sub(remainder).unwrap_or(now);
        true
    }

    /// The time between frames, with `fps` clamped into `1..=MAX_FPS` so the interval is never zero.
    fn interval_for(fps: u32) -> Duration {
        Duration::from_secs(1) / fps.clamp(1, MAX_FPS)
    }
}

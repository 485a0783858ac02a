use super::{Clock, RandomSource};
use web_time::Instant;

/// The host's real clock.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// An unseeded random source so every frame flickers differently.
#[derive(Debug)]
pub struct FastRandSource(fastrand::Rng);

impl Default for FastRandSource {
    fn default() -> Self {
        Self(fastrand::Rng::new())
    }
}

impl RandomSource for FastRandSource {
    fn next_f64(&mut self) -> f64 {
        self.0.f64()
    }
}

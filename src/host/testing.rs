use super::{Clock, FrameHandle, FrameScheduler, RandomSource};
use std::{cell::Cell, rc::Rc, time::Duration};
use web_time::Instant;

/// Always returns the same value.
pub(crate) struct ConstantRandom(pub f64);

impl RandomSource for ConstantRandom {
    fn next_f64(&mut self) -> f64 {
        self.0
    }
}

/// Cycles through a fixed list of values.
pub(crate) struct SequenceRandom {
    values: Vec<f64>,
    next: usize,
}

impl SequenceRandom {
    pub(crate) fn new(values: Vec<f64>) -> Self {
        Self { values, next: 0 }
    }
}

impl RandomSource for SequenceRandom {
    fn next_f64(&mut self) -> f64 {
        let value = self.values[self.next % self.values.len()];
        self.next += 1;
        value
    }
}

/// A clock that only moves when told to.
#[derive(Clone)]
pub(crate) struct ManualClock(Rc<Cell<Instant>>);

impl ManualClock {
    pub(crate) fn new() -> Self {
        Self(Rc::new(Cell::new(Instant::now())))
    }

    pub(crate) fn advance(&self, duration: Duration) {
        self.0.set(self.0.get() + duration);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.0.get()
    }
}

/// A scheduler that only accepts a limited number of requests and refuses the rest.
#[derive(Clone)]
pub(crate) struct FailingScheduler {
    remaining: Rc<Cell<usize>>,
    requested: Rc<Cell<usize>>,
}

impl FailingScheduler {
    pub(crate) fn new(accepted: usize) -> Self {
        Self { remaining: Rc::new(Cell::new(accepted)), requested: Default::default() }
    }

    /// Accept `count` more requests.
    pub(crate) fn allow(&self, count: usize) {
        self.remaining.set(self.remaining.get() + count);
    }

    pub(crate) fn requested(&self) -> usize {
        self.requested.get()
    }
}

impl FrameScheduler for FailingScheduler {
    fn request_frame(&mut self) -> Option<FrameHandle> {
        self.requested.set(self.requested.get() + 1);
        let remaining = self.remaining.get();
        if remaining == 0 {
            return None;
        }
        self.remaining.set(remaining - 1);
        Some(FrameHandle::new(self.requested.get() as u64))
    }

    fn cancel_frame(&mut self, _handle: FrameHandle) {}
}

//! The primitives a bolt needs from whatever is hosting it.
//!
//! A browser provides these through the DOM (see the `web` module on wasm32 targets); tests and
//! the preview binary use the in-process implementations in [manual].

use crate::bolt::geometry::Dimensions;
use web_time::Instant;

pub mod manual;
pub mod system;

#[cfg(target_arch = "wasm32")]
pub mod web;

#[cfg(test)]
pub(crate) mod testing;

/// The element a bolt is laid out in.
pub trait Container {
    /// The element's current size.
    fn size(&self) -> Dimensions;
}

/// One or more path elements that all get the same path data.
///
/// A bolt is usually drawn as several stacked strokes, e.g. a blurred glow under a thin core.
pub trait DrawTarget {
    fn path_count(&self) -> usize;

    /// Set the `d` attribute of the path at `index`.
    fn set_path_data(&mut self, index: usize, data: &str);
}

/// An opaque id for a frame callback registration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FrameHandle(u64);

impl FrameHandle {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn id(&self) -> u64 {
        self.0
    }
}

/// Schedules a single callback before the host's next repaint.
///
/// Registrations are one shot: whoever receives the callback must request another frame to keep
/// animating.
pub trait FrameScheduler {
    /// Register a callback for the next frame, or `None` if the host couldn't.
    fn request_frame(&mut self) -> Option<FrameHandle>;

    fn cancel_frame(&mut self, handle: FrameHandle);
}

/// Wall clock time.
pub trait Clock {
    fn now(&self) -> Instant;
}

/// Uniformly distributed values in `[0, 1)`.
pub trait RandomSource {
    fn next_f64(&mut self) -> f64;
}

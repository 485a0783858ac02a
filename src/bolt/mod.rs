mod animator;
pub mod geometry;
pub mod path;
mod throttle;

pub use animator::{BoltAnimator, FrameOutcome, DEFAULT_FPS};
pub use geometry::{BoltGeometry, Dimensions, Orientation, Point};

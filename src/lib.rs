//! An animated electricity bolt for SVG paths.
//!
//! [BoltAnimator] draws a polyline between two fixed ends of a container and jitters every point in
//! between on each frame, so that the line flickers like an arcing current. Everything it needs
//! from its environment (the container's size, the paths to draw on, frame scheduling, time and
//! randomness) comes in through the traits in [host].

pub mod bolt;
pub mod config;
pub mod error;
pub mod host;

pub use bolt::{BoltAnimator, FrameOutcome, Orientation};
pub use config::BoltConfig;
pub use error::BoltError;

#[cfg(target_arch = "wasm32")]
pub use host::web::VoltageControl;

use super::{
    geometry::{BoltGeometry, BoltShape, Dimensions, Orientation, Point},
    path::{generate_path, to_path_data},
    throttle::FrameThrottle,
};
use crate::{
    config::{BoltConfig, MAX_FPS},
    host::{
        system::{FastRandSource, SystemClock},
        Clock, Container, DrawTarget, FrameHandle, FrameScheduler, RandomSource,
    },
};
use tracing::{debug, trace, warn};

/// The default number of bolts drawn per second.
pub const DEFAULT_FPS: u32 = 25;

/// What happened when a frame callback fired
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameOutcome {
    /// A new bolt was drawn
    Rendered,

    /// Not enough time passed since the last bolt; the next frame is still scheduled
    Skipped,

    /// The animation isn't running and nothing was scheduled
    Idle,
}

/// Draws a flickering electricity bolt across a container.
///
/// The animator never drives itself: the host calls [BoltAnimator::on_frame] whenever a frame
/// requested through its [FrameScheduler] fires, and forwards UI changes through the setters.
pub struct BoltAnimator {
    target: Box<dyn DrawTarget>,
    container: Box<dyn Container>,
    scheduler: Box<dyn FrameScheduler>,
    clock: Box<dyn Clock>,
    random: Box<dyn RandomSource>,
    dimensions: Dimensions,
    shape: BoltShape,
    geometry: BoltGeometry,
    throttle: FrameThrottle,
    animation_handle: Option<FrameHandle>,
}

impl BoltAnimator {
    pub fn new(
        target: Box<dyn DrawTarget>,
        container: Box<dyn Container>,
        scheduler: Box<dyn FrameScheduler>,
    ) -> Self {
        let clock: Box<dyn Clock> = Box::new(SystemClock);
        let dimensions = container.size();
        let shape = BoltShape::default();
        let geometry = BoltGeometry::compute(dimensions, &shape);
        let throttle = FrameThrottle::new(DEFAULT_FPS, clock.now());
        Self {
            target,
            container,
            scheduler,
            clock,
            random: Box::new(FastRandSource::default()),
            dimensions,
            shape,
            geometry,
            throttle,
            animation_handle: None,
        }
    }

    /// Construct an animator using the parameters in a config.
    pub fn from_config(
        config: &BoltConfig,
        target: Box<dyn DrawTarget>,
        container: Box<dyn Container>,
        scheduler: Box<dyn FrameScheduler>,
    ) -> Self {
        let mut animator = Self::new(target, container, scheduler);
        animator.shape = BoltShape {
            orientation: config.orientation,
            branch_points: config.branch_points.max(1),
            spread_fraction: config.spread_percent.clamp(0.0, 100.0) / 100.0,
        };
        animator.throttle.set_fps(config.fps);
        animator.recompute_geometry();
        animator
    }

    /// Use a different clock to pace frames.
    pub fn with_clock(mut self, clock: Box<dyn Clock>) -> Self {
        self.throttle.reset(clock.now());
        self.clock = clock;
        self
    }

    /// Use a different source of randomness to jitter branch points.
    pub fn with_random(mut self, random: Box<dyn RandomSource>) -> Self {
        self.random = random;
        self
    }

    pub fn geometry(&self) -> &BoltGeometry {
        &self.geometry
    }

    pub fn orientation(&self) -> Orientation {
        self.shape.orientation
    }

    pub fn branch_points(&self) -> u32 {
        self.shape.branch_points
    }

    pub fn spread_fraction(&self) -> f64 {
        self.shape.spread_fraction
    }

    pub fn is_running(&self) -> bool {
        self.animation_handle.is_some()
    }

    /// The frame registration currently pending, only present while running.
    pub fn animation_handle(&self) -> Option<FrameHandle> {
        self.animation_handle
    }

    /// Generate a freshly jittered bolt.
    pub fn generate_path(&mut self) -> Vec<Point> {
        generate_path(&self.geometry, self.random.as_mut())
    }

    /// Draw a freshly jittered bolt on every path of the target.
    pub fn render(&mut self) {
        let points = self.generate_path();
        self.draw(&to_path_data(&points));
    }

    /// Draw a straight line between both ends, the bolt's resting state.
    pub fn draw_rest_path(&mut self) {
        let data = to_path_data(&[self.geometry.start, self.geometry.end]);
        self.draw(&data);
    }

    /// Start animating. Does nothing if the animation is already running.
    pub fn start(&mut self) {
        if self.is_running() {
            return;
        }
        self.recompute_geometry();
        self.throttle.reset(self.clock.now());
        self.animation_handle = self.scheduler.request_frame();
        if self.is_running() {
            debug!(interval = ?self.throttle.interval(), "bolt animation started");
        } else {
            warn!("bolt animation not started, the host could not schedule a frame");
        }
    }

    /// Stop animating. Does nothing if the animation isn't running.
    pub fn stop(&mut self) {
        if let Some(handle) = self.animation_handle.take() {
            self.scheduler.cancel_frame(handle);
            debug!("bolt animation stopped");
        }
    }

    /// The frame callback: schedules the next frame and renders if one is due.
    pub fn on_frame(&mut self) -> FrameOutcome {
        if !self.is_running() {
            return FrameOutcome::Idle;
        }
        self.animation_handle = self.scheduler.request_frame();
        if !self.is_running() {
            warn!("bolt animation stopped, the host could not schedule the next frame");
        }
        if self.throttle.poll(self.clock.now()) {
            self.render();
            trace!("bolt frame rendered");
            FrameOutcome::Rendered
        } else {
            FrameOutcome::Skipped
        }
    }

    /// Pick up the container's current size.
    pub fn resize(&mut self) {
        self.dimensions = self.container.size();
        self.recompute_geometry();
    }

    pub fn set_orientation(&mut self, orientation: Orientation) {
        self.shape.orientation = orientation;
        self.recompute_geometry();
    }

    /// Set the number of jittered points between both ends. Values below 1 are raised to 1.
    pub fn set_branch_points(&mut self, branch_points: u32) {
        if branch_points == 0 {
            warn!("branch point count must be at least 1, using 1");
        }
        self.shape.branch_points = branch_points.max(1);
        self.recompute_geometry();
    }

    /// Set how much of the cross axis, in percent, the bolt may spread over.
    ///
    /// Values outside `[0, 100]` are clamped; non finite values are ignored.
    pub fn set_spread_percent(&mut self, percent: f64) {
        if !percent.is_finite() {
            warn!("ignoring non finite spread {percent}");
            return;
        }
        let clamped = percent.clamp(0.0, 100.0);
        if clamped != percent {
            warn!("spread {percent}% out of range, using {clamped}%");
        }
        self.shape.spread_fraction = clamped / 100.0;
        self.recompute_geometry();
    }

    /// Set how many bolts are drawn per second. Values outside `1..=MAX_FPS` are clamped.
    pub fn set_fps(&mut self, fps: u32) {
        if !(1..=MAX_FPS).contains(&fps) {
            warn!("fps {fps} out of range, using {}", fps.clamp(1, MAX_FPS));
        }
        self.throttle.set_fps(fps);
    }

    fn recompute_geometry(&mut self) {
        self.geometry = BoltGeometry::compute(self.dimensions, &self.shape);
        debug!(
            orientation = %self.geometry.orientation,
            branch_points = self.geometry.branch_points,
            segment_spacing = self.geometry.segment_spacing,
            jitter_amplitude = self.geometry.jitter_amplitude,
            "bolt geometry updated"
        );
    }

    fn draw(&mut self, data: &str) {
        for index in 0..self.target.path_count() {
            self.target.set_path_data(index, data);
        }
    }
}

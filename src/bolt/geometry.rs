use serde::{Deserialize, Serialize};

/// The axis the bolt travels along
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, strum::Display, strum::EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Orientation {
    /// Travel along x, jitter along y
    #[default]
    Horizontal,

    /// Travel along y, jitter along x
    Vertical,
}

impl Orientation {
    pub fn from_horizontal(horizontal: bool) -> Self {
        if horizontal { Self::Horizontal } else { Self::Vertical }
    }
}

/// A point in the SVG's user space
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Size of the element the bolt is drawn in, in device independent pixels
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Dimensions {
    pub width: f64,
    pub height: f64,
}

impl Dimensions {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// The dimension along the travel axis
    pub fn travel(&self, orientation: Orientation) -> f64 {
        match orientation {
            Orientation::Horizontal => self.width,
            Orientation::Vertical => self.height,
        }
    }

    /// The dimension along the cross axis
    pub fn cross(&self, orientation: Orientation) -> f64 {
        match orientation {
            Orientation::Horizontal => self.height,
            Orientation::Vertical => self.width,
        }
    }
}

/// The user controlled parameters that shape a bolt
#[derive(Clone, Debug, PartialEq)]
pub struct BoltShape {
    pub orientation: Orientation,
    pub branch_points: u32,
    pub spread_fraction: f64,
}

impl Default for BoltShape {
    fn default() -> Self {
        Self { orientation: Orientation::Horizontal, branch_points: 10, spread_fraction: 0.35 }
    }
}

/// Layout derived from the container dimensions and a [BoltShape].
#[derive(Clone, Debug, PartialEq)]
pub struct BoltGeometry {
    pub orientation: Orientation,
    pub branch_points: u32,
    /// Distance between consecutive branch points along the travel axis
    pub segment_spacing: f64,
    /// Full width of the band branch points may land in along the cross axis
    pub jitter_amplitude: f64,
    /// Midline of the cross axis
    pub baseline: f64,
    pub start: Point,
    pub end: Point,
}

impl BoltGeometry {
    pub fn compute(dimensions: Dimensions, shape: &BoltShape) -> Self {
        let orientation = shape.orientation;
        let travel = dimensions.travel(orientation);
        let cross = dimensions.cross(orientation);
        let baseline = cross / 2.0;
        let (start, end) = match orientation {
            Orientation::Horizontal => (Point::new(0.0, baseline), Point::new(dimensions.width, baseline)),
            Orientation::Vertical => (Point::new(baseline, 0.0), Point::new(baseline, dimensions.height)),
        };
        Self {
            orientation,
            branch_points: shape.branch_points,
            segment_spacing: travel / shape.branch_points as f64,
            jitter_amplitude: cross * shape.spread_fraction,
            baseline,
            start,
            end,
        }
    }
}

use super::geometry::{BoltGeometry, Orientation, Point};
use crate::host::RandomSource;
use itertools::Itertools;

/// Generate the points of a single bolt frame.
///
/// The result always starts at the geometry's start point, ends at its end point and has one
/// jittered branch point per configured branch in between. Every call draws fresh values from
/// `random`.
pub fn generate_path(geometry: &BoltGeometry, random: &mut dyn RandomSource) -> Vec<Point> {
    let mut points = Vec::with_capacity(geometry.branch_points as usize + 2);
    points.push(geometry.start);
    for index in 0..geometry.branch_points {
        let travel = travel_position(geometry, index);
        let cross = plot_in_range(geometry, random);
        let point = match geometry.orientation {
            Orientation::Horizontal => Point::new(travel, cross),
            Orientation::Vertical => Point::new(cross, travel),
        };
        points.push(point);
    }
    points.push(geometry.end);
    points
}

/// The travel axis coordinate of a branch point.
///
/// The cosine of the integer index skews the otherwise even spacing so the bolt doesn't look
/// like a comb.
pub(crate) fn travel_position(geometry: &BoltGeometry, index: u32) -> f64 {
    let index = index as f64;
    geometry.segment_spacing * index + index.cos() * geometry.segment_spacing
}

fn plot_in_range(geometry: &BoltGeometry, random: &mut dyn RandomSource) -> f64 {
    let magnitude = random.next_f64() * geometry.jitter_amplitude / 2.0;
    let sign = if random.next_f64() < 0.5 { 1.0 } else { -1.0 };
    magnitude * sign + geometry.baseline
}

/// Serialize points into an SVG `d` attribute: a single moveto followed by a flat list of
/// comma separated coordinates.
pub fn to_path_data(points: &[Point]) -> String {
    let coordinates = points.iter().flat_map(|point| [format_number(point.x), format_number(point.y)]).join(",");
    format!("M{coordinates}")
}

/// Plain decimal form, never exponent notation, so huge or tiny values are written out in full.
fn format_number(value: f64) -> String {
    // avoid emitting "-0"
    if value == 0.0 { "0".to_string() } else { value.to_string() }
}

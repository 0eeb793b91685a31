//! Geometry for the radar chart.
//!
//! Months sit on evenly spaced spokes, starting at 12 o'clock and running
//! clockwise. Radii are normalised so the largest value touches the outer ring.

use std::f64::consts::{FRAC_PI_2, TAU};

/// Angle of spoke `index` out of `count`, in radians, counter-clockwise from +x.
pub fn spoke_angle(index: usize, count: usize) -> f64 {
    FRAC_PI_2 - index as f64 * TAU / count as f64
}

pub fn point(radius: f64, index: usize, count: usize) -> (f64, f64) {
    let angle = spoke_angle(index, count);
    (radius * angle.cos(), radius * angle.sin())
}

/// Vertices of a closed series polygon, one per value.
pub fn polygon(values: &[f64], max: f64) -> Vec<(f64, f64)> {
    let count = values.len();
    values
        .iter()
        .enumerate()
        .map(|(i, v)| {
            let radius = if max > 0.0 { v / max } else { 0.0 };
            point(radius, i, count)
        })
        .collect()
}

/// Guide ring at `fraction` of the outer radius.
pub fn ring(fraction: f64, count: usize) -> Vec<(f64, f64)> {
    (0..count).map(|i| point(fraction, i, count)).collect()
}

/// Edges of a closed polygon, last vertex joined back to the first.
pub fn edges(vertices: &[(f64, f64)]) -> Vec<((f64, f64), (f64, f64))> {
    vertices
        .iter()
        .zip(vertices.iter().cycle().skip(1))
        .map(|(a, b)| (*a, *b))
        .collect()
}

/// Segments from the centre to points spread along each edge, `steps` per edge.
/// Drawn in the series colour they fill the polygon on a canvas.
pub fn fill_segments(vertices: &[(f64, f64)], steps: usize) -> Vec<((f64, f64), (f64, f64))> {
    edges(vertices)
        .into_iter()
        .flat_map(|((x1, y1), (x2, y2))| {
            (0..steps).map(move |s| {
                let t = s as f64 / steps as f64;
                ((0.0, 0.0), (x1 + (x2 - x1) * t, y1 + (y2 - y1) * t))
            })
        })
        .collect()
}

//! Geometry helpers independent of the node model.
//!
//! Callers use these to compute coordinates before constructing elements;
//! nothing here depends on the markup layer.

use std::f64::consts::{PI, TAU};

/// A 2D point in the coordinate system.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Width and height of a rectangular extent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Convert degrees to radians.
pub fn deg_to_rad(degrees: f64) -> f64 {
    degrees * PI / 180.0
}

/// Convert radians to degrees.
pub fn rad_to_deg(radians: f64) -> f64 {
    radians * 180.0 / PI
}

/// Euclidean distance between two points.
pub fn distance(a: Point, b: Point) -> f64 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    (dx * dx + dy * dy).sqrt()
}

/// Rotate `point` around `center` by `angle` radians.
pub fn rotate_point(point: Point, center: Point, angle: f64) -> Point {
    let (sin, cos) = angle.sin_cos();
    let dx = point.x - center.x;
    let dy = point.y - center.y;
    Point {
        x: center.x + dx * cos - dy * sin,
        y: center.y + dx * sin + dy * cos,
    }
}

/// Clamp `value` into `[min, max]`.
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    value.max(min).min(max)
}

/// Linear interpolation between `start` and `end` at parameter `t`.
pub fn lerp(start: f64, end: f64, t: f64) -> f64 {
    start + (end - start) * t
}

/// Vertices of a regular polygon with `sides` corners.
///
/// Points are spaced at angle step `2*pi/sides` starting at `rotation`
/// radians, walking counter-clockwise in the mathematical convention.
pub fn regular_polygon(center: Point, radius: f64, sides: usize, rotation: f64) -> Vec<Point> {
    let step = TAU / sides as f64;
    (0..sides)
        .map(|i| {
            let angle = step * i as f64 + rotation;
            Point {
                x: center.x + angle.cos() * radius,
                y: center.y + angle.sin() * radius,
            }
        })
        .collect()
}

/// Vertices of an `points`-pointed star.
///
/// Produces `2 * points` vertices alternating between the outer and inner
/// radius at angle step `pi/points`, starting at `rotation` radians.
pub fn star(
    center: Point,
    outer_radius: f64,
    inner_radius: f64,
    points: usize,
    rotation: f64,
) -> Vec<Point> {
    let step = PI / points as f64;
    (0..points * 2)
        .map(|i| {
            let angle = step * i as f64 + rotation;
            let radius = if i % 2 == 0 { outer_radius } else { inner_radius };
            Point {
                x: center.x + angle.cos() * radius,
                y: center.y + angle.sin() * radius,
            }
        })
        .collect()
}

//! Points and SVG path builders

use serde::Serialize;

/// 2D point with f64 coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn distance(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Linear interpolation from `self` toward `other`.
    ///
    /// `ratio` is not clamped: values outside `[0, 1]` extrapolate along the
    /// line through both points.
    #[inline]
    pub fn lerp(&self, other: &Point, ratio: f64) -> Point {
        Point::new(
            self.x + (other.x - self.x) * ratio,
            self.y + (other.y - self.y) * ratio,
        )
    }

    /// Arithmetic mean of three points
    #[inline]
    pub fn mean3(a: Point, b: Point, c: Point) -> Point {
        Point::new((a.x + b.x + c.x) / 3.0, (a.y + b.y + c.y) / 3.0)
    }
}

/// Path for a straight line: `M x,y L x,y`
pub fn line_path(start: Point, end: Point) -> String {
    format!("M {},{} L {},{}", start.x, start.y, end.x, end.y)
}

/// Closed path through three points
pub fn triangle_path(p1: Point, p2: Point, p3: Point) -> String {
    format!(
        "M {},{} L {},{} L {},{} Z",
        p1.x, p1.y, p2.x, p2.y, p3.x, p3.y
    )
}

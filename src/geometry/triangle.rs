//! Vertex geometry for grid cells
//!
//! Every cell carries two triangles: the `visible` one actually painted in
//! the cell, and the `full` equilateral triangle it is a part of. For full
//! cells they coincide. For edge halves the visible triangle is a right
//! triangle whose right angle sits on the seam, and `full` extends across
//! the seam so motifs can derive interior structure from the whole shape.

use serde::Serialize;

use super::clip::KeepSide;
use super::point::{triangle_path, Point};
use crate::errors::{KumikoError, Result};

/// `√3 / 2`, the height of an equilateral triangle with unit side
pub const HEIGHT_RATIO: f64 = 0.866_025_403_784_438_6;

/// Height of an equilateral triangle with the given side length
#[inline]
pub fn triangle_height(side_length: f64) -> f64 {
    side_length * HEIGHT_RATIO
}

/// Which part of a logical triangle a cell shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ShapeKind {
    Full,
    /// Left edge closure: the right half of a triangle cut at its apex column
    HalfLeft,
    /// Right edge closure: the left half of a triangle cut at its apex column
    HalfRight,
}

/// Apex direction of a triangle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Orientation {
    Up,
    Down,
}

impl Orientation {
    /// Orientation for grid position `(row + column)`; even sums point down
    #[inline]
    pub fn for_position(row: usize, column: usize) -> Self {
        if (row + column) % 2 == 0 {
            Orientation::Down
        } else {
            Orientation::Up
        }
    }

    #[inline]
    pub fn flipped(self) -> Self {
        match self {
            Orientation::Up => Orientation::Down,
            Orientation::Down => Orientation::Up,
        }
    }
}

/// Three vertices in drawing order
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Triangle {
    pub p1: Point,
    pub p2: Point,
    pub p3: Point,
}

impl Triangle {
    pub const fn new(p1: Point, p2: Point, p3: Point) -> Self {
        Self { p1, p2, p3 }
    }

    pub fn centroid(&self) -> Point {
        Point::mean3(self.p1, self.p2, self.p3)
    }

    pub fn vertices(&self) -> [Point; 3] {
        [self.p1, self.p2, self.p3]
    }

    /// Closed outline path
    pub fn outline_path(&self) -> String {
        triangle_path(self.p1, self.p2, self.p3)
    }

    /// Move the apex vertex onto the column `x`
    fn with_apex_x(mut self, orientation: Orientation, x: f64) -> Self {
        match orientation {
            Orientation::Up => self.p1.x = x,
            Orientation::Down => self.p3.x = x,
        }
        self
    }

    /// Equilateral triangle of side `s` anchored at `(x, y)`.
    ///
    /// Up: apex at `(x + s/2, y)`. Down: flat top edge from `(x, y)`.
    fn equilateral(orientation: Orientation, x: f64, y: f64, s: f64) -> Self {
        let h = triangle_height(s);
        match orientation {
            Orientation::Up => Triangle::new(
                Point::new(x + s / 2.0, y),
                Point::new(x, y + h),
                Point::new(x + s, y + h),
            ),
            Orientation::Down => Triangle::new(
                Point::new(x, y),
                Point::new(x + s, y),
                Point::new(x + s / 2.0, y + h),
            ),
        }
    }
}

/// Vertical cut line bounding a half cell
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ClipBoundary {
    pub x: f64,
    pub keep: KeepSide,
}

/// Geometry of one rendered cell
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TriangleGeometry {
    /// Triangle actually shown in the cell
    pub visible: Triangle,
    /// Mean of the visible vertices
    pub centroid: Point,
    /// Equilateral triangle the cell belongs to
    pub full: Triangle,
    pub full_centroid: Point,
    pub part_shape: ShapeKind,
    /// Present iff `part_shape` is not `Full`
    pub clip_boundary: Option<ClipBoundary>,
}

impl TriangleGeometry {
    #[inline]
    pub fn p1(&self) -> Point {
        self.visible.p1
    }

    #[inline]
    pub fn p2(&self) -> Point {
        self.visible.p2
    }

    #[inline]
    pub fn p3(&self) -> Point {
        self.visible.p3
    }

    pub fn is_half(&self) -> bool {
        self.part_shape != ShapeKind::Full
    }

    /// Compute the geometry of a cell anchored at `(x, y)`.
    ///
    /// For half shapes `orientation` is that of the full triangle the half
    /// belongs to. `HalfLeft` is cut at `x` and keeps the right side;
    /// `HalfRight` is cut at `x + s/2` and keeps the left side.
    pub fn calculate(
        shape: ShapeKind,
        orientation: Orientation,
        x: f64,
        y: f64,
        side_length: f64,
    ) -> Result<Self> {
        // Written as a negation so NaN is rejected too
        if !(side_length > 0.0) {
            return Err(KumikoError::InvalidGeometry { side_length });
        }

        let s = side_length;
        let half = s / 2.0;
        let h = triangle_height(s);

        let (visible, full, clip_boundary) = match shape {
            ShapeKind::Full => {
                let tri = Triangle::equilateral(orientation, x, y, s);
                (tri, tri, None)
            }
            ShapeKind::HalfLeft => {
                let full =
                    Triangle::equilateral(orientation, x - half, y, s).with_apex_x(orientation, x);
                let visible = match orientation {
                    Orientation::Up => Triangle::new(
                        Point::new(x, y),
                        Point::new(x, y + h),
                        Point::new(x + half, y + h),
                    ),
                    Orientation::Down => Triangle::new(
                        Point::new(x, y),
                        Point::new(x + half, y),
                        Point::new(x, y + h),
                    ),
                };
                let boundary = ClipBoundary {
                    x,
                    keep: KeepSide::Right,
                };
                (visible, full, Some(boundary))
            }
            ShapeKind::HalfRight => {
                let cut = x + half;
                let full = Triangle::equilateral(orientation, x, y, s).with_apex_x(orientation, cut);
                let visible = match orientation {
                    Orientation::Up => Triangle::new(
                        Point::new(cut, y),
                        Point::new(x, y + h),
                        Point::new(cut, y + h),
                    ),
                    Orientation::Down => Triangle::new(
                        Point::new(x, y),
                        Point::new(cut, y),
                        Point::new(cut, y + h),
                    ),
                };
                let boundary = ClipBoundary {
                    x: cut,
                    keep: KeepSide::Left,
                };
                (visible, full, Some(boundary))
            }
        };

        // The seam bisects the full triangle, so its centroid lies exactly on
        // the cut. Rounding in the vertex mean must not push it off.
        let full_centroid = match clip_boundary {
            Some(boundary) => Point::new(boundary.x, full.centroid().y),
            None => full.centroid(),
        };

        Ok(Self {
            visible,
            centroid: visible.centroid(),
            full,
            full_centroid,
            part_shape: shape,
            clip_boundary,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn side_lengths(t: &Triangle) -> [f64; 3] {
        [
            t.p1.distance(&t.p2),
            t.p2.distance(&t.p3),
            t.p3.distance(&t.p1),
        ]
    }

    #[test]
    fn test_full_triangles_are_equilateral() {
        for orientation in [Orientation::Up, Orientation::Down] {
            let geom = TriangleGeometry::calculate(ShapeKind::Full, orientation, 12.0, 7.0, 80.0)
                .unwrap();
            for side in side_lengths(&geom.visible) {
                assert!((side - 80.0).abs() < EPS);
            }
            assert_eq!(geom.visible, geom.full);
            assert!(geom.clip_boundary.is_none());
        }
    }

    #[test]
    fn test_full_centroid_height() {
        let h = triangle_height(100.0);
        let up = TriangleGeometry::calculate(ShapeKind::Full, Orientation::Up, 0.0, 0.0, 100.0)
            .unwrap();
        assert!((up.centroid.y - 2.0 / 3.0 * h).abs() < EPS);
        assert!((up.centroid.x - 50.0).abs() < EPS);

        let down =
            TriangleGeometry::calculate(ShapeKind::Full, Orientation::Down, 0.0, 0.0, 100.0)
                .unwrap();
        assert!((down.centroid.y - h / 3.0).abs() < EPS);
    }

    #[test]
    fn test_centroid_is_vertex_mean_for_every_shape() {
        for shape in [ShapeKind::Full, ShapeKind::HalfLeft, ShapeKind::HalfRight] {
            for orientation in [Orientation::Up, Orientation::Down] {
                let geom =
                    TriangleGeometry::calculate(shape, orientation, 33.0, -4.0, 60.0).unwrap();
                let mean = Point::mean3(geom.p1(), geom.p2(), geom.p3());
                assert!((geom.centroid.x - mean.x).abs() < EPS);
                assert!((geom.centroid.y - mean.y).abs() < EPS);
            }
        }
    }

    #[test]
    fn test_half_clip_boundary_matches_seam_vertices() {
        for shape in [ShapeKind::HalfLeft, ShapeKind::HalfRight] {
            for orientation in [Orientation::Up, Orientation::Down] {
                let geom =
                    TriangleGeometry::calculate(shape, orientation, 100.0, 0.0, 100.0).unwrap();
                let boundary = geom.clip_boundary.unwrap();
                let on_seam = geom
                    .visible
                    .vertices()
                    .iter()
                    .filter(|p| (p.x - boundary.x).abs() < EPS)
                    .count();
                assert_eq!(on_seam, 2, "{shape:?} {orientation:?}");
            }
        }
    }

    #[test]
    fn test_half_is_inside_full() {
        let geom =
            TriangleGeometry::calculate(ShapeKind::HalfLeft, Orientation::Up, 0.0, 0.0, 100.0)
                .unwrap();
        // apex of the full triangle sits on the seam
        assert_eq!(geom.full.p1, Point::new(0.0, 0.0));
        assert_eq!(geom.full.p2.x, -50.0);
        assert_eq!(geom.full.p3.x, 50.0);
        assert_eq!(geom.full_centroid.x, 0.0);
        assert_eq!(geom.clip_boundary.unwrap().keep, KeepSide::Right);

        let right =
            TriangleGeometry::calculate(ShapeKind::HalfRight, Orientation::Down, 100.0, 0.0, 100.0)
                .unwrap();
        assert_eq!(right.full.p1, Point::new(100.0, 0.0));
        assert_eq!(right.full.p2, Point::new(200.0, 0.0));
        let boundary = right.clip_boundary.unwrap();
        assert_eq!(boundary.x, 150.0);
        assert_eq!(boundary.keep, KeepSide::Left);
    }

    #[test]
    fn test_half_apex_and_centroid_sit_exactly_on_cut() {
        let side = 33.3;
        for shape in [ShapeKind::HalfLeft, ShapeKind::HalfRight] {
            for orientation in [Orientation::Up, Orientation::Down] {
                for step in 0..80 {
                    let x = f64::from(step) * side / 2.0;
                    let geom = TriangleGeometry::calculate(shape, orientation, x, 0.0, side).unwrap();
                    let cut = geom.clip_boundary.unwrap().x;
                    let apex = match orientation {
                        Orientation::Up => geom.full.p1,
                        Orientation::Down => geom.full.p3,
                    };
                    assert_eq!(apex.x, cut, "{shape:?} {orientation:?} x={x}");
                    assert_eq!(geom.full_centroid.x, cut, "{shape:?} {orientation:?} x={x}");
                }
            }
        }
    }

    #[test]
    fn test_non_positive_side_rejected() {
        for side in [0.0, -1.0, f64::NAN] {
            let err = TriangleGeometry::calculate(ShapeKind::Full, Orientation::Up, 0.0, 0.0, side);
            assert!(matches!(err, Err(KumikoError::InvalidGeometry { .. })));
        }
    }

    #[test]
    fn test_orientation_alternates() {
        assert_eq!(Orientation::for_position(0, 0), Orientation::Down);
        assert_eq!(Orientation::for_position(0, 1), Orientation::Up);
        assert_eq!(Orientation::for_position(1, 0), Orientation::Up);
        assert_eq!(Orientation::Up.flipped(), Orientation::Down);
    }
}

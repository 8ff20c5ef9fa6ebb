//! Line intersection and half-plane clipping

use super::Point;

/// Cross-product denominators below this are treated as parallel
pub const PARALLEL_EPSILON: f64 = 1e-10;

/// Which side of a vertical cut stays visible
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum KeepSide {
    Left,
    Right,
}

impl KeepSide {
    #[inline]
    fn keeps(self, x: f64, cut_x: f64) -> bool {
        match self {
            KeepSide::Left => x <= cut_x,
            KeepSide::Right => x >= cut_x,
        }
    }
}

/// Intersect the infinite line through `line_p1`/`line_p2` with the segment
/// `seg_p1`-`seg_p2`.
///
/// Returns `None` when the two are parallel or the crossing falls outside the
/// segment.
pub fn line_segment_intersection(
    line_p1: Point,
    line_p2: Point,
    seg_p1: Point,
    seg_p2: Point,
) -> Option<Point> {
    let (x1, y1) = (line_p1.x, line_p1.y);
    let (x2, y2) = (line_p2.x, line_p2.y);
    let (x3, y3) = (seg_p1.x, seg_p1.y);
    let (x4, y4) = (seg_p2.x, seg_p2.y);

    let denom = (x1 - x2) * (y3 - y4) - (y1 - y2) * (x3 - x4);
    if denom.abs() < PARALLEL_EPSILON {
        return None;
    }

    let t = ((x1 - x3) * (y3 - y4) - (y1 - y3) * (x3 - x4)) / denom;
    let u = -((x1 - x2) * (y1 - y3) - (y1 - y2) * (x1 - x3)) / denom;

    if (0.0..=1.0).contains(&u) {
        Some(Point::new(x1 + t * (x2 - x1), y1 + t * (y2 - y1)))
    } else {
        None
    }
}

/// Keep the part of `p1`-`p2` that lies on `keep` side of `x = cut_x`.
///
/// Endpoint order is preserved. A straddling segment gets its outside
/// endpoint replaced by the crossing point.
pub fn clip_segment_to_halfplane(
    p1: Point,
    p2: Point,
    cut_x: f64,
    keep: KeepSide,
) -> Option<(Point, Point)> {
    let keep1 = keep.keeps(p1.x, cut_x);
    let keep2 = keep.keeps(p2.x, cut_x);

    match (keep1, keep2) {
        (true, true) => Some((p1, p2)),
        (false, false) => None,
        _ => {
            let dx = p2.x - p1.x;
            // Unreachable for a true straddle, but a vertical segment must never be split
            if dx.abs() < PARALLEL_EPSILON {
                return None;
            }
            let t = (cut_x - p1.x) / dx;
            let crossing = Point::new(cut_x, p1.y + t * (p2.y - p1.y));
            if keep1 {
                Some((p1, crossing))
            } else {
                Some((crossing, p2))
            }
        }
    }
}

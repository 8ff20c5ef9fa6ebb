//! Geometry primitives for the triangular grid
//!
//! - [`point`]: points, interpolation and SVG path builders
//! - [`triangle`]: per-cell vertex geometry (visible and full triangles)
//! - [`clip`]: line/segment intersection and vertical half-plane clipping

pub mod clip;
pub mod point;
pub mod triangle;

pub use clip::{clip_segment_to_halfplane, line_segment_intersection, KeepSide};
pub use point::{line_path, triangle_path, Point};
pub use triangle::{
    triangle_height, ClipBoundary, Orientation, ShapeKind, Triangle, TriangleGeometry,
};

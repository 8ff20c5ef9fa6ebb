//! # Kumiko Lattice
//!
//! Tessellation and motif-rendering engine for triangular kumiko patterns.
//! A grid of motif symbols is laid out as alternating up/down triangles,
//! each cell is drawn by its bound motif, and the resulting strokes are
//! deduplicated into a small set of style classes and clip regions.
//!
//! ```text
//!   rows ──▶ layout ──▶ geometry ──▶ motif ──▶ style ──▶ output
//!            (cells)    (vertices)   (paths)   (keys)    (groups)
//! ```
//!
//! [`render`] is the single entry point; [`grid`] and [`svg`] sit on either
//! side of it for callers that start from text and want markup back.

pub mod config;
pub mod errors;
pub mod geometry;
pub mod grid;
pub mod layout;
pub mod motif;
pub mod output;
pub mod session;
pub mod style;
pub mod svg;

pub use config::{KumikoConfig, MotifBinding, MotifConfig};
pub use errors::{KumikoError, Result};
pub use geometry::{Orientation, Point, ShapeKind, TriangleGeometry};
pub use motif::{Motif, MotifKind, MotifOptions, MotifRegistry, MotifRenderer};
pub use output::{ClipRegion, RenderOutput, StrokeGroup, StyleClass};
pub use session::{render, RenderSession};

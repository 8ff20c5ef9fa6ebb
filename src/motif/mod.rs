//! Motif renderers
//!
//! A motif turns one cell's [`TriangleGeometry`] into skeleton and leaf
//! paths. The set of motifs is closed: [`Motif`] has one variant per
//! built-in kind and dispatches to the [`MotifRenderer`] implementation of
//! that variant. [`MotifRegistry`] binds grid symbols to configured motifs.

mod asanoha;
mod blank;
mod goma;
mod kaku;
mod registry;
mod sakura;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::geometry::{
    clip_segment_to_halfplane, line_path, line_segment_intersection, ClipBoundary, Point,
    Triangle, TriangleGeometry,
};
use crate::style::StyleSpec;

pub use asanoha::Asanoha;
pub use blank::Blank;
pub use goma::Goma;
pub use kaku::Kaku;
pub use registry::MotifRegistry;
pub use sakura::Sakura;

/// Leaves shorter than this after clipping are dropped
const MIN_STROKE_LENGTH: f64 = 1e-9;

/// Built-in motif identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MotifKind {
    Asanoha,
    Goma,
    Kaku,
    Sakura,
    Blank,
}

impl MotifKind {
    pub const ALL: [MotifKind; 5] = [
        MotifKind::Asanoha,
        MotifKind::Goma,
        MotifKind::Kaku,
        MotifKind::Sakura,
        MotifKind::Blank,
    ];

    /// Identifier used in configuration files
    pub fn id(self) -> &'static str {
        match self {
            MotifKind::Asanoha => "asanoha",
            MotifKind::Goma => "goma",
            MotifKind::Kaku => "kaku",
            MotifKind::Sakura => "sakura",
            MotifKind::Blank => "blank",
        }
    }

    /// Human readable name
    pub fn name(self) -> &'static str {
        match self {
            MotifKind::Asanoha => "Asanoha (Hemp Leaf)",
            MotifKind::Goma => "Goma (Sesame)",
            MotifKind::Kaku => "Kaku-Asanoha (Angular Hemp Leaf)",
            MotifKind::Sakura => "Sakura (Cherry Blossom)",
            MotifKind::Blank => "Blank",
        }
    }
}

impl fmt::Display for MotifKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Error for an unrecognised motif identifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownMotif(pub String);

impl FromStr for MotifKind {
    type Err = UnknownMotif;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MotifKind::ALL
            .into_iter()
            .find(|kind| kind.id() == s)
            .ok_or_else(|| UnknownMotif(s.to_string()))
    }
}

/// Per-character motif options, all optional
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MotifOptions {
    /// Kaku: how far inner vertices sit from the centroid toward each vertex
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ratio: Option<f64>,
    /// Goma/Sakura: inset of the inner triangle
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inset: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skeleton_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub leaf_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skeleton_thickness: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub leaf_thickness: Option<f64>,
    /// Sakura petal color
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flower_color: Option<String>,
    /// Sakura petal thickness (doubled when drawn)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flower_thickness: Option<f64>,
}

/// Motif-level style defaults
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MotifStyles {
    pub skeleton: StyleSpec,
    pub leaf: StyleSpec,
}

impl From<&MotifOptions> for MotifStyles {
    fn from(options: &MotifOptions) -> Self {
        Self {
            skeleton: StyleSpec::new(options.skeleton_color.clone(), options.skeleton_thickness),
            leaf: StyleSpec::new(options.leaf_color.clone(), options.leaf_thickness),
        }
    }
}

/// One leaf stroke with an optional style override
#[derive(Debug, Clone, PartialEq)]
pub struct LeafPath {
    pub path: String,
    pub style: StyleSpec,
}

impl LeafPath {
    /// Leaf drawn in the motif's default leaf style
    pub fn plain(path: String) -> Self {
        Self {
            path,
            style: StyleSpec::default(),
        }
    }

    pub fn styled(path: String, style: StyleSpec) -> Self {
        Self { path, style }
    }
}

impl From<String> for LeafPath {
    fn from(path: String) -> Self {
        LeafPath::plain(path)
    }
}

/// Output of one motif for one cell
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MotifRenderResult {
    pub skeleton: Vec<String>,
    pub leaves: Vec<LeafPath>,
    pub skeleton_style: StyleSpec,
    pub leaf_style: StyleSpec,
    /// Visual clip region applied to this cell's leaves
    pub clip_path: Option<String>,
}

impl MotifRenderResult {
    pub fn is_empty(&self) -> bool {
        self.skeleton.is_empty() && self.leaves.is_empty()
    }
}

/// Capability shared by every motif
pub trait MotifRenderer {
    fn render(&self, geom: &TriangleGeometry) -> MotifRenderResult;
}

/// A configured motif
#[derive(Debug, Clone, PartialEq)]
pub enum Motif {
    Asanoha(Asanoha),
    Goma(Goma),
    Kaku(Kaku),
    Sakura(Sakura),
    Blank(Blank),
}

impl Motif {
    /// Build a motif of `kind` from its options
    pub fn build(kind: MotifKind, options: &MotifOptions) -> Self {
        match kind {
            MotifKind::Asanoha => Motif::Asanoha(Asanoha::new(options)),
            MotifKind::Goma => Motif::Goma(Goma::new(options)),
            MotifKind::Kaku => Motif::Kaku(Kaku::new(options)),
            MotifKind::Sakura => Motif::Sakura(Sakura::new(options)),
            MotifKind::Blank => Motif::Blank(Blank::new(options)),
        }
    }

    pub fn kind(&self) -> MotifKind {
        match self {
            Motif::Asanoha(_) => MotifKind::Asanoha,
            Motif::Goma(_) => MotifKind::Goma,
            Motif::Kaku(_) => MotifKind::Kaku,
            Motif::Sakura(_) => MotifKind::Sakura,
            Motif::Blank(_) => MotifKind::Blank,
        }
    }
}

impl MotifRenderer for Motif {
    fn render(&self, geom: &TriangleGeometry) -> MotifRenderResult {
        match self {
            Motif::Asanoha(m) => m.render(geom),
            Motif::Goma(m) => m.render(geom),
            Motif::Kaku(m) => m.render(geom),
            Motif::Sakura(m) => m.render(geom),
            Motif::Blank(m) => m.render(geom),
        }
    }
}

/// Chords cut from `outer` by the extended edges of `inner`.
///
/// Edge `i1-i2` meets `p2-p3` and `p3-p1`, `i2-i3` meets `p3-p1` and `p1-p2`,
/// `i3-i1` meets `p1-p2` and `p2-p3`. An edge missing either crossing yields
/// no chord.
fn extended_chords(outer: &Triangle, inner: [Point; 3]) -> Vec<(Point, Point)> {
    let [p1, p2, p3] = outer.vertices();
    let [i1, i2, i3] = inner;
    let edges = [
        (i1, i2, (p2, p3), (p3, p1)),
        (i2, i3, (p3, p1), (p1, p2)),
        (i3, i1, (p1, p2), (p2, p3)),
    ];

    edges
        .into_iter()
        .filter_map(|(a, b, first, second)| {
            let start = line_segment_intersection(a, b, first.0, first.1)?;
            let end = line_segment_intersection(a, b, second.0, second.1)?;
            Some((start, end))
        })
        .collect()
}

/// Line path truncated to the visible side of `boundary`, if any part remains
fn clipped_line(start: Point, end: Point, boundary: Option<ClipBoundary>) -> Option<String> {
    let (start, end) = match boundary {
        Some(b) => clip_segment_to_halfplane(start, end, b.x, b.keep)?,
        None => (start, end),
    };
    if start.distance(&end) < MIN_STROKE_LENGTH {
        return None;
    }
    Some(line_path(start, end))
}

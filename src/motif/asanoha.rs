//! Asanoha (hemp leaf): three spokes from the centroid to each vertex

use super::{LeafPath, MotifOptions, MotifRenderResult, MotifRenderer, MotifStyles};
use crate::geometry::{line_path, TriangleGeometry};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Asanoha {
    styles: MotifStyles,
}

impl Asanoha {
    pub fn new(options: &MotifOptions) -> Self {
        Self {
            styles: MotifStyles::from(options),
        }
    }
}

impl MotifRenderer for Asanoha {
    // Built from the visible triangle, so half cells need no clipping
    fn render(&self, geom: &TriangleGeometry) -> MotifRenderResult {
        let center = geom.centroid;
        let leaves = geom
            .visible
            .vertices()
            .into_iter()
            .map(|vertex| LeafPath::plain(line_path(center, vertex)))
            .collect();

        MotifRenderResult {
            skeleton: vec![geom.visible.outline_path()],
            leaves,
            skeleton_style: self.styles.skeleton.clone(),
            leaf_style: self.styles.leaf.clone(),
            clip_path: None,
        }
    }
}

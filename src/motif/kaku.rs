//! Kaku-asanoha (angular hemp leaf): inner triangle bridged to the outline

use super::{LeafPath, MotifOptions, MotifRenderResult, MotifRenderer, MotifStyles};
use crate::geometry::{line_path, triangle_path, TriangleGeometry};

pub const DEFAULT_RATIO: f64 = 0.65;

#[derive(Debug, Clone, PartialEq)]
pub struct Kaku {
    styles: MotifStyles,
    ratio: f64,
}

impl Default for Kaku {
    fn default() -> Self {
        Self::new(&MotifOptions::default())
    }
}

impl Kaku {
    pub fn new(options: &MotifOptions) -> Self {
        Self {
            styles: MotifStyles::from(options),
            ratio: options.ratio.unwrap_or(DEFAULT_RATIO),
        }
    }
}

impl MotifRenderer for Kaku {
    fn render(&self, geom: &TriangleGeometry) -> MotifRenderResult {
        let center = geom.centroid;
        let outer = geom.visible.vertices();
        let [i1, i2, i3] = outer.map(|p| center.lerp(&p, self.ratio));

        let mut skeleton = Vec::with_capacity(5);
        skeleton.push(geom.visible.outline_path());
        skeleton.push(triangle_path(i1, i2, i3));
        for (vertex, inner) in outer.into_iter().zip([i1, i2, i3]) {
            skeleton.push(line_path(vertex, inner));
        }

        let leaves = [i1, i2, i3]
            .into_iter()
            .map(|inner| LeafPath::plain(line_path(center, inner)))
            .collect();

        MotifRenderResult {
            skeleton,
            leaves,
            skeleton_style: self.styles.skeleton.clone(),
            leaf_style: self.styles.leaf.clone(),
            clip_path: None,
        }
    }
}

//! Goma (sesame): chords along the extended edges of an inset triangle

use super::{
    clipped_line, extended_chords, LeafPath, MotifOptions, MotifRenderResult, MotifRenderer,
    MotifStyles,
};
use crate::geometry::TriangleGeometry;

pub const DEFAULT_INSET: f64 = 0.3;

#[derive(Debug, Clone, PartialEq)]
pub struct Goma {
    styles: MotifStyles,
    inset: f64,
}

impl Default for Goma {
    fn default() -> Self {
        Self::new(&MotifOptions::default())
    }
}

impl Goma {
    pub fn new(options: &MotifOptions) -> Self {
        Self {
            styles: MotifStyles::from(options),
            inset: options.inset.unwrap_or(DEFAULT_INSET),
        }
    }
}

impl MotifRenderer for Goma {
    /// Chords come from the full triangle so they line up across a seam;
    /// half cells truncate them at the cut and attach their outline as a clip.
    fn render(&self, geom: &TriangleGeometry) -> MotifRenderResult {
        let center = geom.full_centroid;
        let inner = geom.full.vertices().map(|p| p.lerp(&center, self.inset));

        let leaves = extended_chords(&geom.full, inner)
            .into_iter()
            .filter_map(|(start, end)| clipped_line(start, end, geom.clip_boundary))
            .map(LeafPath::plain)
            .collect();

        MotifRenderResult {
            skeleton: vec![geom.visible.outline_path()],
            leaves,
            skeleton_style: self.styles.skeleton.clone(),
            leaf_style: self.styles.leaf.clone(),
            clip_path: geom.is_half().then(|| geom.visible.outline_path()),
        }
    }
}

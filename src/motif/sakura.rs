//! Sakura (cherry blossom): thin spokes plus heavy petal chords

use super::{
    clipped_line, extended_chords, LeafPath, MotifOptions, MotifRenderResult, MotifRenderer,
    MotifStyles,
};
use crate::geometry::TriangleGeometry;
use crate::style::StyleSpec;

pub const DEFAULT_INSET: f64 = 0.3;
pub const DEFAULT_FLOWER_COLOR: &str = "#FFB7C5";
pub const DEFAULT_FLOWER_THICKNESS: f64 = 2.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Sakura {
    styles: MotifStyles,
    inset: f64,
    petal_style: StyleSpec,
}

impl Default for Sakura {
    fn default() -> Self {
        Self::new(&MotifOptions::default())
    }
}

impl Sakura {
    pub fn new(options: &MotifOptions) -> Self {
        let flower_color = options
            .flower_color
            .clone()
            .unwrap_or_else(|| DEFAULT_FLOWER_COLOR.to_string());
        let flower_thickness = options.flower_thickness.unwrap_or(DEFAULT_FLOWER_THICKNESS);
        Self {
            styles: MotifStyles::from(options),
            inset: options.inset.unwrap_or(DEFAULT_INSET),
            petal_style: StyleSpec::new(Some(flower_color), Some(flower_thickness * 2.0)),
        }
    }
}

impl MotifRenderer for Sakura {
    fn render(&self, geom: &TriangleGeometry) -> MotifRenderResult {
        let center = geom.full_centroid;
        let vertices = geom.full.vertices();
        let boundary = geom.clip_boundary;
        let reach = 1.0 - self.inset;

        let spokes = vertices
            .map(|p| center.lerp(&p, reach))
            .into_iter()
            .filter_map(|tip| clipped_line(center, tip, boundary))
            .map(LeafPath::plain);

        // Inset points mirrored past the centroid widen the chords into petals
        let mirrored = vertices.map(|p| center.lerp(&p, -2.0 * reach));
        let petals = extended_chords(&geom.full, mirrored)
            .into_iter()
            .filter_map(|(start, end)| clipped_line(start, end, boundary))
            .map(|path| LeafPath::styled(path, self.petal_style.clone()));

        MotifRenderResult {
            skeleton: vec![geom.visible.outline_path()],
            leaves: spokes.chain(petals).collect(),
            skeleton_style: self.styles.skeleton.clone(),
            leaf_style: self.styles.leaf.clone(),
            clip_path: None,
        }
    }
}

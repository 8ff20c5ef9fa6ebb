//! Blank: reserves grid space without drawing

use super::{MotifOptions, MotifRenderResult, MotifRenderer, MotifStyles};
use crate::geometry::TriangleGeometry;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Blank {
    styles: MotifStyles,
}

impl Blank {
    pub fn new(options: &MotifOptions) -> Self {
        Self {
            styles: MotifStyles::from(options),
        }
    }
}

impl MotifRenderer for Blank {
    fn render(&self, _geom: &TriangleGeometry) -> MotifRenderResult {
        MotifRenderResult {
            skeleton_style: self.styles.skeleton.clone(),
            leaf_style: self.styles.leaf.clone(),
            ..MotifRenderResult::default()
        }
    }
}

//! Pass-wide stroke accumulator
//!
//! Strokes are grouped by resolved style (and, for leaves, by clip region)
//! in first-seen order. Paths inside a group keep cell-visitation order.

use std::collections::HashMap;

use serde::Serialize;

use crate::motif::MotifRenderResult;
use crate::style::{
    clip_registry, resolve_leaf_style, resolve_skeleton_style, style_registry, ClipRegistry,
    StyleRegistry, StyleSpec,
};

/// A reusable stroke style
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StyleClass {
    pub id: String,
    pub color: String,
    pub thickness: f64,
}

/// Paths sharing one style and clip region
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StrokeGroup {
    pub style_id: String,
    pub color: String,
    pub thickness: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clip_id: Option<String>,
    pub paths: Vec<String>,
}

/// A visual clip region referenced by leaf groups
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClipRegion {
    pub id: String,
    pub path: String,
}

/// Final drawing instructions for one render pass
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderOutput {
    pub canvas_width: f64,
    pub canvas_height: f64,
    /// Number of cells visited, edge halves included
    pub cell_count: usize,
    pub styles: Vec<StyleClass>,
    pub skeleton_groups: Vec<StrokeGroup>,
    pub leaf_groups: Vec<StrokeGroup>,
    pub clip_regions: Vec<ClipRegion>,
}

impl RenderOutput {
    pub fn skeleton_path_count(&self) -> usize {
        self.skeleton_groups.iter().map(|g| g.paths.len()).sum()
    }

    pub fn leaf_path_count(&self) -> usize {
        self.leaf_groups.iter().map(|g| g.paths.len()).sum()
    }

    pub fn style(&self, id: &str) -> Option<&StyleClass> {
        self.styles.iter().find(|style| style.id == id)
    }
}

type LeafKey = (usize, Option<usize>);

/// Collects motif results and interns their styles and clip regions
#[derive(Debug)]
pub struct OutputAssembler {
    styles: StyleRegistry,
    clips: ClipRegistry,
    skeleton: Vec<(usize, Vec<String>)>,
    skeleton_index: HashMap<usize, usize>,
    leaves: Vec<(LeafKey, Vec<String>)>,
    leaf_index: HashMap<LeafKey, usize>,
    cells: usize,
}

impl Default for OutputAssembler {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputAssembler {
    pub fn new() -> Self {
        Self {
            styles: style_registry(),
            clips: clip_registry(),
            skeleton: Vec::new(),
            skeleton_index: HashMap::new(),
            leaves: Vec::new(),
            leaf_index: HashMap::new(),
            cells: 0,
        }
    }

    /// Merge one cell's motif output.
    ///
    /// Leaves are interned before the skeleton, matching draw order.
    pub fn add_cell(
        &mut self,
        result: MotifRenderResult,
        global_skeleton: &StyleSpec,
        global_leaf: &StyleSpec,
    ) {
        self.cells += 1;

        let MotifRenderResult {
            skeleton,
            leaves,
            skeleton_style,
            leaf_style,
            clip_path,
        } = result;

        if !leaves.is_empty() {
            let clip_slot = clip_path.map(|path| {
                let key = path.clone();
                self.clips.intern(&key, || path)
            });

            for leaf in leaves {
                let resolved = resolve_leaf_style(&leaf.style, &leaf_style, global_leaf);
                let key = resolved.key();
                let style_slot = self.styles.intern(&key, || resolved);
                let group_key = (style_slot, clip_slot);
                let group = *self.leaf_index.entry(group_key).or_insert_with(|| {
                    self.leaves.push((group_key, Vec::new()));
                    self.leaves.len() - 1
                });
                self.leaves[group].1.push(leaf.path);
            }
        }

        if !skeleton.is_empty() {
            let resolved = resolve_skeleton_style(&skeleton_style, global_skeleton);
            let key = resolved.key();
            let style_slot = self.styles.intern(&key, || resolved);
            let group = *self.skeleton_index.entry(style_slot).or_insert_with(|| {
                self.skeleton.push((style_slot, Vec::new()));
                self.skeleton.len() - 1
            });
            self.skeleton[group].1.extend(skeleton);
        }
    }

    pub fn cell_count(&self) -> usize {
        self.cells
    }

    pub fn style_count(&self) -> usize {
        self.styles.len()
    }

    pub fn clip_count(&self) -> usize {
        self.clips.len()
    }

    /// Freeze the accumulated strokes into a [`RenderOutput`]
    pub fn finish(self, canvas_width: f64, canvas_height: f64) -> RenderOutput {
        let group = |style_slot: usize, clip_id: Option<String>, paths: Vec<String>| {
            let style = self.styles.value(style_slot);
            StrokeGroup {
                style_id: self.styles.id(style_slot).to_string(),
                color: style.color.clone(),
                thickness: style.thickness,
                clip_id,
                paths,
            }
        };

        let leaf_groups = self
            .leaves
            .into_iter()
            .map(|((style_slot, clip_slot), paths)| {
                let clip_id = clip_slot.map(|slot| self.clips.id(slot).to_string());
                group(style_slot, clip_id, paths)
            })
            .collect();

        let skeleton_groups = self
            .skeleton
            .into_iter()
            .map(|(style_slot, paths)| group(style_slot, None, paths))
            .collect();

        let styles = self
            .styles
            .iter()
            .map(|(id, style)| StyleClass {
                id: id.to_string(),
                color: style.color.clone(),
                thickness: style.thickness,
            })
            .collect();

        let clip_regions = self
            .clips
            .iter()
            .map(|(id, path)| ClipRegion {
                id: id.to_string(),
                path: path.clone(),
            })
            .collect();

        RenderOutput {
            canvas_width,
            canvas_height,
            cell_count: self.cells,
            styles,
            skeleton_groups,
            leaf_groups,
            clip_regions,
        }
    }
}

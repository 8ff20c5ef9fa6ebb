//! One render pass from grid rows to [`RenderOutput`]

use std::collections::HashSet;

use crate::config::{KumikoConfig, MotifConfig};
use crate::errors::Result;
use crate::layout::GridLayout;
use crate::motif::{MotifRegistry, MotifRenderer};
use crate::output::{OutputAssembler, RenderOutput};
use crate::style::StyleSpec;

/// State scoped to a single pass: validated motifs, grid metrics, and the
/// style/clip registries inside the assembler.
#[derive(Debug)]
pub struct RenderSession {
    layout: GridLayout,
    registry: MotifRegistry,
    global_skeleton: StyleSpec,
    global_leaf: StyleSpec,
    assembler: OutputAssembler,
    reported_unknown: HashSet<String>,
}

impl RenderSession {
    /// Validate the configuration and build the motif registry.
    ///
    /// Fails before any cell is rendered.
    pub fn new(config: &KumikoConfig, motifs: &MotifConfig) -> Result<Self> {
        let layout = GridLayout::new(config.side_length)?;
        let registry = MotifRegistry::build(motifs)?;
        tracing::debug!(
            side_length = config.side_length,
            bindings = registry.len(),
            "render session ready"
        );

        Ok(Self {
            layout,
            registry,
            global_skeleton: config.skeleton_style(),
            global_leaf: config.leaf_style(),
            assembler: OutputAssembler::new(),
            reported_unknown: HashSet::new(),
        })
    }

    /// Lay out and render every row, consuming the session
    pub fn run<S: AsRef<str>>(mut self, rows: &[S]) -> Result<RenderOutput> {
        let (canvas_width, canvas_height) = self.layout.canvas_size(rows);
        tracing::debug!(
            rows = rows.len(),
            canvas_width,
            canvas_height,
            "rendering grid"
        );

        for cell in self.layout.placements(rows) {
            if !self.registry.contains(cell.symbol)
                && self.reported_unknown.insert(cell.symbol.to_string())
            {
                tracing::warn!(
                    symbol = cell.symbol,
                    "unbound symbol, using fallback motif"
                );
            }

            let geom = self.layout.geometry(&cell)?;
            tracing::trace!(
                row = cell.row,
                symbol = cell.symbol,
                shape = ?cell.shape,
                orientation = ?cell.orientation,
                x = cell.x,
                "cell"
            );

            let result = self.registry.resolve(cell.symbol).render(&geom);
            self.assembler
                .add_cell(result, &self.global_skeleton, &self.global_leaf);
        }

        tracing::debug!(
            cells = self.assembler.cell_count(),
            styles = self.assembler.style_count(),
            clips = self.assembler.clip_count(),
            "render complete"
        );

        Ok(self.assembler.finish(canvas_width, canvas_height))
    }
}

/// Render a parsed grid.
///
/// `motifs` defaults to [`MotifConfig::default`]. Output depends only on
/// the arguments; repeated calls yield identical results.
pub fn render<S: AsRef<str>>(
    grid: &[S],
    config: &KumikoConfig,
    motifs: Option<&MotifConfig>,
) -> Result<RenderOutput> {
    match motifs {
        Some(motifs) => RenderSession::new(config, motifs)?.run(grid),
        None => RenderSession::new(config, &MotifConfig::default())?.run(grid),
    }
}

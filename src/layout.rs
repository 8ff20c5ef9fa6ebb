//! Grid layout: cell orientation, shape and position
//!
//! A row is a `|`-separated list of segments and each segment holds
//! whitespace-separated symbols. Orientation alternates along a segment and
//! restarts at every `|`. Each segment is closed by a half cell on both
//! ends, so `n` symbols in a segment produce `n + 2` cells and occupy
//! `(n + 1) × side / 2` of width.

use crate::errors::{KumikoError, Result};
use crate::geometry::{triangle_height, Orientation, ShapeKind, TriangleGeometry};

/// Separator between wall segments
pub const SEAM: char = '|';

/// Where and how one cell is drawn
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellPlacement<'a> {
    pub row: usize,
    pub segment: usize,
    /// Index of the symbol within its segment
    pub column: usize,
    pub symbol: &'a str,
    pub shape: ShapeKind,
    /// For half cells, the orientation of the full triangle they complete
    pub orientation: Orientation,
    pub x: f64,
    pub y: f64,
}

/// Non-empty segments of a row, each as its list of symbols
pub fn segments(row: &str) -> Vec<Vec<&str>> {
    row.split(SEAM)
        .map(|segment| segment.split_whitespace().collect::<Vec<_>>())
        .filter(|symbols| !symbols.is_empty())
        .collect()
}

/// Grid metrics for a fixed side length
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLayout {
    side_length: f64,
    half_side: f64,
    triangle_height: f64,
}

impl GridLayout {
    pub fn new(side_length: f64) -> Result<Self> {
        if !(side_length > 0.0) {
            return Err(KumikoError::InvalidGeometry { side_length });
        }
        Ok(Self {
            side_length,
            half_side: side_length / 2.0,
            triangle_height: triangle_height(side_length),
        })
    }

    pub fn triangle_height(&self) -> f64 {
        self.triangle_height
    }

    /// Width of one row; empty rows are zero wide
    pub fn row_width(&self, row: &str) -> f64 {
        segments(row)
            .iter()
            .map(|symbols| symbols.len() as f64 * self.half_side + self.half_side)
            .sum()
    }

    /// `(width, height)` of the canvas; every row counts toward the height
    pub fn canvas_size<S: AsRef<str>>(&self, rows: &[S]) -> (f64, f64) {
        let width = rows
            .iter()
            .map(|row| self.row_width(row.as_ref()))
            .fold(0.0, f64::max);
        let height = rows.len() as f64 * self.triangle_height;
        (width, height)
    }

    /// Every cell of the grid in drawing order.
    ///
    /// Per symbol: left edge half (first in segment), the full cell, right
    /// edge half (last in segment).
    pub fn placements<'a, S: AsRef<str>>(&self, rows: &'a [S]) -> Vec<CellPlacement<'a>> {
        let mut cells = Vec::new();

        for (row_index, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            let y = row_index as f64 * self.triangle_height;
            let mut x = 0.0;

            let row_segments = segments(row);
            if row_segments.is_empty() {
                tracing::debug!(row = row_index, "row has no symbols");
            }

            for (segment_index, symbols) in row_segments.into_iter().enumerate() {
                let last = symbols.len() - 1;

                for (column, symbol) in symbols.into_iter().enumerate() {
                    let orientation = Orientation::for_position(row_index, column);
                    let place = |shape, orientation, x| CellPlacement {
                        row: row_index,
                        segment: segment_index,
                        column,
                        symbol,
                        shape,
                        orientation,
                        x,
                        y,
                    };

                    if column == 0 {
                        cells.push(place(ShapeKind::HalfLeft, orientation.flipped(), x));
                    }

                    cells.push(place(ShapeKind::Full, orientation, x));

                    if column == last {
                        cells.push(place(
                            ShapeKind::HalfRight,
                            orientation.flipped(),
                            x + self.half_side,
                        ));
                        x += self.half_side;
                    }

                    x += self.half_side;
                }
            }
        }

        cells
    }

    /// Vertex geometry of a placed cell
    pub fn geometry(&self, cell: &CellPlacement<'_>) -> Result<TriangleGeometry> {
        TriangleGeometry::calculate(
            cell.shape,
            cell.orientation,
            cell.x,
            cell.y,
            self.side_length,
        )
    }
}

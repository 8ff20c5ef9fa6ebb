//! SVG serialization of a [`RenderOutput`]
//!
//! Leaf groups are written before skeleton groups so outlines sit on top.

use std::fmt::{self, Write};

use crate::output::{RenderOutput, StrokeGroup};

/// Build a standalone SVG document.
///
/// Formatting into a `String` never fails, so the `fmt::Result` of
/// [`write_svg`] carries no information here and is dropped.
pub fn to_svg(output: &RenderOutput, background: &str) -> String {
    let mut svg = String::new();
    let _ = write_svg(&mut svg, output, background);
    svg
}

/// Write a standalone SVG document into any formatter sink
pub fn write_svg<W: Write>(svg: &mut W, output: &RenderOutput, background: &str) -> fmt::Result {
    let (width, height) = (output.canvas_width, output.canvas_height);
    writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {width} {height}" width="{width}" height="{height}" style="background-color:{}">"#,
        escape(background)
    )?;

    writeln!(svg, "  <defs>")?;
    writeln!(svg, "    <style>")?;
    for style in &output.styles {
        writeln!(
            svg,
            "      .{} {{ stroke: {}; stroke-width: {}; fill: none; stroke-linecap: round; stroke-linejoin: round; }}",
            style.id,
            escape(&style.color),
            style.thickness
        )?;
    }
    writeln!(svg, "    </style>")?;
    for region in &output.clip_regions {
        writeln!(
            svg,
            r#"    <clipPath id="{}"><path d="{}" /></clipPath>"#,
            region.id,
            escape(&region.path)
        )?;
    }
    writeln!(svg, "  </defs>")?;

    write_layer(svg, "leaves", &output.leaf_groups)?;
    write_layer(svg, "skeleton", &output.skeleton_groups)?;

    writeln!(svg, "</svg>")
}

fn write_layer<W: Write>(svg: &mut W, name: &str, groups: &[StrokeGroup]) -> fmt::Result {
    if groups.is_empty() {
        return Ok(());
    }
    writeln!(svg, r#"  <g class="{name}">"#)?;
    for group in groups {
        let clip = group
            .clip_id
            .as_ref()
            .map(|id| format!(r#" clip-path="url(#{id})""#))
            .unwrap_or_default();
        writeln!(
            svg,
            r#"    <path class="{}" d="{}"{} />"#,
            group.style_id,
            escape(&group.paths.join(" ")),
            clip
        )?;
    }
    writeln!(svg, "  </g>")
}

/// Escape text for use inside an XML attribute
fn escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

//! SVG renderer for the 2D layout canvas
//! Renders blocks and split lines as SVG path data and complete documents.
//! Features:
//! - Compartment outlines filled with the material finish
//! - Selection highlight
//! - Live drag candidate drawn over the committed line

use drawerkit_core::{Block, SplitLine};

use crate::renderer::RenderInput;

const DEFAULT_FILL: &str = "#d9c5a0";
const OUTLINE_COLOR: &str = "#4a3b2a";
const SELECTION_COLOR: &str = "#2e86de";
const DRAG_COLOR: &str = "#e67e22";

fn block_path(block: &Block, scale: f64) -> String {
    format!(
        "M {} {} h {} v {} h {} Z ",
        block.x * scale,
        block.y * scale,
        block.width * scale,
        block.height * scale,
        -block.width * scale
    )
}

fn line_path(line: &SplitLine, scale: f64) -> String {
    format!(
        "M {} {} L {} {} ",
        line.x1 * scale,
        line.y1 * scale,
        line.x2 * scale,
        line.y2 * scale
    )
}

/// Render every block outline as one SVG path
pub fn render_blocks(input: &RenderInput<'_>, scale: f64) -> String {
    input
        .blocks
        .iter()
        .map(|b| block_path(b, scale))
        .collect::<String>()
        .trim_end()
        .to_string()
}

/// Render split lines as SVG path commands
pub fn render_split_lines(input: &RenderInput<'_>, scale: f64) -> String {
    input
        .split_lines
        .iter()
        .map(|l| line_path(l, scale))
        .collect::<String>()
        .trim_end()
        .to_string()
}

/// Render the selected block outline, empty when nothing is selected
pub fn render_selection(input: &RenderInput<'_>, scale: f64) -> String {
    input
        .selected
        .and_then(|id| input.blocks.iter().find(|b| b.id == id))
        .map(|b| block_path(b, scale).trim_end().to_string())
        .unwrap_or_default()
}

/// Render a complete SVG document for the layout.
///
/// `scale` is pixels per internal unit.
pub fn render_layout(input: &RenderInput<'_>, scale: f64) -> String {
    let width = input.width * scale;
    let height = input.depth * scale;
    let fill = input
        .material
        .map(|m| m.finish_color.as_str())
        .unwrap_or(DEFAULT_FILL);

    let mut svg = format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\n",
        w = width,
        h = height
    );
    svg.push_str(&format!(
        "  <path class=\"blocks\" d=\"{}\" fill=\"{}\" stroke=\"{}\" stroke-width=\"1\"/>\n",
        render_blocks(input, scale),
        fill,
        OUTLINE_COLOR
    ));

    let lines = render_split_lines(input, scale);
    if !lines.is_empty() {
        svg.push_str(&format!(
            "  <path class=\"split-lines\" d=\"{}\" stroke=\"{}\" stroke-width=\"3\"/>\n",
            lines, OUTLINE_COLOR
        ));
    }

    let selection = render_selection(input, scale);
    if !selection.is_empty() {
        svg.push_str(&format!(
            "  <path class=\"selection\" d=\"{}\" fill=\"none\" stroke=\"{}\" stroke-width=\"2\"/>\n",
            selection, SELECTION_COLOR
        ));
    }

    if let Some(line) = &input.drag_preview {
        svg.push_str(&format!(
            "  <path class=\"drag-preview\" d=\"{}\" stroke=\"{}\" stroke-width=\"3\" stroke-dasharray=\"6 4\"/>\n",
            line_path(line, scale).trim_end(),
            DRAG_COLOR
        ));
    }

    svg.push_str("</svg>\n");
    svg
}

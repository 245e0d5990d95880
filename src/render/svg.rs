//! Standalone SVG plot
//!
//! Edges first (translucent), then team-colored nodes, then name labels.
//! Sizes are given in points and converted at 100 px per inch, so the
//! default 14in canvas comes out 1400px square.

use super::layout::{Layout, Point};
use super::style::EdgeStyle;
use crate::graph::PassNetwork;
use anyhow::Result;
use std::fmt::Write as _;

const CANVAS_PX: f64 = 1400.0;
const MARGIN_PX: f64 = 50.0;
const PX_PER_PT: f64 = 100.0 / 72.0;
const NODE_AREA_PT2: f64 = 50.0;
const LABEL_FONT_PT: f64 = 4.0;
const EDGE_ALPHA: f64 = 0.4;

/// Render the network as an SVG document.
///
/// `styles` must line up with [`PassNetwork::edges`].
pub fn render(network: &PassNetwork, layout: &Layout, styles: &[EdgeStyle]) -> Result<String> {
    let mut svg = String::new();

    writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{CANVAS_PX}" height="{CANVAS_PX}" viewBox="0 0 {CANVAS_PX} {CANVAS_PX}">"#
    )?;
    writeln!(
        svg,
        "  <title>Passing network: {} players, {} connections</title>",
        network.node_count(),
        network.edge_count()
    )?;
    svg.push_str("  <rect width=\"100%\" height=\"100%\" fill=\"white\" />\n");

    svg.push_str(&format!("  <g id=\"edges\" stroke-opacity=\"{EDGE_ALPHA}\" stroke-linecap=\"round\">\n"));
    for ((a, b, _), style) in network.edge_indices().zip(styles) {
        let (Some(pa), Some(pb)) = (layout.get(a), layout.get(b)) else {
            continue;
        };
        let (x1, y1) = to_canvas(pa);
        let (x2, y2) = to_canvas(pb);
        writeln!(
            svg,
            r#"    <line x1="{x1:.2}" y1="{y1:.2}" x2="{x2:.2}" y2="{y2:.2}" stroke="{}" stroke-width="{:.3}" />"#,
            style.color(),
            style.width * PX_PER_PT
        )?;
    }
    svg.push_str("  </g>\n");

    let radius = (NODE_AREA_PT2 / std::f64::consts::PI).sqrt() * PX_PER_PT;
    svg.push_str("  <g id=\"nodes\">\n");
    for (i, node) in network.nodes().enumerate() {
        let Some(p) = layout.get(i) else { continue };
        let (cx, cy) = to_canvas(p);
        writeln!(
            svg,
            r#"    <circle cx="{cx:.2}" cy="{cy:.2}" r="{radius:.2}" fill="{}" />"#,
            node.color().hex()
        )?;
    }
    svg.push_str("  </g>\n");

    let font = LABEL_FONT_PT * PX_PER_PT;
    writeln!(
        svg,
        r#"  <g id="labels" font-family="sans-serif" font-size="{font:.2}" fill="black" text-anchor="middle" dominant-baseline="central">"#
    )?;
    for (i, node) in network.nodes().enumerate() {
        let Some(p) = layout.get(i) else { continue };
        let (x, y) = to_canvas(p);
        writeln!(svg, r#"    <text x="{x:.2}" y="{y:.2}">{}</text>"#, svg_escape(&node.name))?;
    }
    svg.push_str("  </g>\n</svg>\n");

    Ok(svg)
}

/// Map layout coordinates in [-1, 1] onto the canvas (y grows downward)
fn to_canvas(p: Point) -> (f64, f64) {
    let span = CANVAS_PX - 2.0 * MARGIN_PX;
    let x = MARGIN_PX + (p.x + 1.0) / 2.0 * span;
    let y = MARGIN_PX + (1.0 - p.y) / 2.0 * span;
    (x, y)
}

fn svg_escape(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            '&' => "&amp;".to_string(),
            '<' => "&lt;".to_string(),
            '>' => "&gt;".to_string(),
            '"' => "&quot;".to_string(),
            c if (c as u32) < 0x20 => " ".to_string(),
            c => c.to_string(),
        })
        .collect()
}

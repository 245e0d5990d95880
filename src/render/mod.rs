//! Static plot rendering
//!
//! Lays the network out with a seeded spring layout, styles edges by weight
//! and highlight, and writes a standalone SVG.

mod layout;
mod style;
mod svg;

pub use layout::{spring_layout, Layout, LayoutConfig, Point};
pub use style::{edge_styles, EdgeStyle, Highlight, HIGHLIGHT_COLOR, PLAIN_COLOR};

use crate::graph::PassNetwork;
use anyhow::{Context, Result};
use std::path::Path;
use tracing::info;

/// Options for a plot
#[derive(Debug, Clone, Default)]
pub struct PlotOptions {
    /// Player-name substring whose edges are highlighted
    pub highlight: Option<String>,
    pub layout: LayoutConfig,
}

/// Render an already laid out network as a standalone SVG document
pub fn render_svg(network: &PassNetwork, layout: &Layout, highlight: Option<&Highlight>) -> Result<String> {
    let styles = edge_styles(network, highlight);
    svg::render(network, layout, &styles)
}

/// Lay out and render the plot to an SVG string
pub fn render_plot(network: &PassNetwork, options: &PlotOptions) -> Result<String> {
    let layout = spring_layout(network, &options.layout);
    let highlight = options.highlight.as_deref().and_then(Highlight::new);
    render_svg(network, &layout, highlight.as_ref())
}

/// Render the plot and write it to `path`
pub fn write_plot(network: &PassNetwork, path: &Path, options: &PlotOptions) -> Result<()> {
    let svg = render_plot(network, options)?;
    std::fs::write(path, svg).with_context(|| format!("Failed to write plot to {}", path.display()))?;
    info!("Plot written to {}", path.display());
    Ok(())
}

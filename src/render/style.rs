//! Edge styling
//!
//! Widths scale with weight relative to the heaviest edge. Edges touching the
//! highlighted player are drawn green at triple width.

use crate::graph::{EdgeView, PassNetwork};

const BASE_WIDTH: f64 = 0.1;
const WIDTH_RANGE: f64 = 1.5;
const HIGHLIGHT_FACTOR: f64 = 3.0;

pub const HIGHLIGHT_COLOR: &str = "green";
pub const PLAIN_COLOR: &str = "gray";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeStyle {
    pub width: f64,
    pub highlighted: bool,
}

impl EdgeStyle {
    pub fn color(&self) -> &'static str {
        if self.highlighted {
            HIGHLIGHT_COLOR
        } else {
            PLAIN_COLOR
        }
    }
}

/// Case-insensitive substring matcher for the highlighted player
#[derive(Debug, Clone)]
pub struct Highlight {
    needle: String,
}

impl Highlight {
    /// `None` for an empty pattern
    pub fn new(pattern: &str) -> Option<Self> {
        if pattern.is_empty() {
            return None;
        }
        Some(Self {
            needle: pattern.to_lowercase(),
        })
    }

    pub fn matches_name(&self, name: &str) -> bool {
        name.to_lowercase().contains(&self.needle)
    }

    pub fn matches(&self, edge: &EdgeView<'_>) -> bool {
        self.matches_name(&edge.source.name) || self.matches_name(&edge.target.name)
    }
}

/// Style for each edge, in [`PassNetwork::edges`] order
pub fn edge_styles(network: &PassNetwork, highlight: Option<&Highlight>) -> Vec<EdgeStyle> {
    let max_weight = f64::from(network.max_weight().unwrap_or(1));

    network
        .edges()
        .map(|edge| {
            let base = BASE_WIDTH + WIDTH_RANGE * (f64::from(edge.weight) / max_weight);
            let highlighted = highlight.is_some_and(|h| h.matches(&edge));
            EdgeStyle {
                width: if highlighted { base * HIGHLIGHT_FACTOR } else { base },
                highlighted,
            }
        })
        .collect()
}

//! Graph exporters
//!
//! Supports:
//! - `gexf` - GEXF 1.2 for Gephi (default)
//! - `json` - node-link JSON

mod gexf;
mod json;

pub use gexf::render_dated as render_gexf_dated;

use crate::graph::PassNetwork;
use anyhow::{anyhow, Context, Result};
use serde::Deserialize;
use std::path::Path;
use std::str::FromStr;
use tracing::info;

/// Supported export formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Gexf,
    Json,
}

impl FromStr for ExportFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "gexf" => Ok(ExportFormat::Gexf),
            "json" => Ok(ExportFormat::Json),
            _ => Err(anyhow!("Unknown export format '{}'. Valid formats: gexf, json", s)),
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportFormat::Gexf => write!(f, "gexf"),
            ExportFormat::Json => write!(f, "json"),
        }
    }
}

/// Recommended file extension for a format
pub fn file_extension(format: ExportFormat) -> &'static str {
    match format {
        ExportFormat::Gexf => "gexf",
        ExportFormat::Json => "json",
    }
}

/// Render the network in the given format
pub fn render(network: &PassNetwork, format: ExportFormat) -> Result<String> {
    match format {
        ExportFormat::Gexf => gexf::render(network),
        ExportFormat::Json => json::render(network),
    }
}

/// Write the network to `path`
pub fn write_export(network: &PassNetwork, path: &Path, format: ExportFormat) -> Result<()> {
    let content = render(network, format)?;
    std::fs::write(path, content)
        .with_context(|| format!("Failed to write {} export to {}", format, path.display()))?;
    info!(
        "Exported {} nodes / {} edges as {} to {}",
        network.node_count(),
        network.edge_count(),
        format,
        path.display()
    );
    Ok(())
}

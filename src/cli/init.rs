//! Init command - write a config template

use anyhow::{Context, Result};
use console::style;
use std::path::Path;

use crate::config::CONFIG_TEMPLATE;

/// Write `passnet.toml` into `dir`; an existing file is left untouched
pub fn run(dir: &Path) -> Result<()> {
    let config_path = dir.join("passnet.toml");
    if config_path.exists() {
        anyhow::bail!(
            "{} already exists; remove it first to regenerate the template",
            config_path.display()
        );
    }

    std::fs::write(&config_path, CONFIG_TEMPLATE)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;

    println!("{} Created {}", style("✓").green(), style(config_path.display()).cyan());
    Ok(())
}

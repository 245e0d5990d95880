//! Run command - full pipeline

use anyhow::Result;
use console::style;

use crate::config::PipelineConfig;
use crate::pipeline::Pipeline;

/// Run the pipeline and print what was written
pub fn run(config: PipelineConfig) -> Result<()> {
    println!("\n{} Building passing network\n", style("⚽").bold());
    println!("  Events:  {}", style(config.data.events.display()).dim());
    println!("  Players: {}", style(config.data.players.display()).dim());
    println!("  Teams:   {}", style(config.data.teams.display()).dim());

    let summary = Pipeline::new(config).run()?;

    println!(
        "\n  {} {} qualifying passes in {} events ({} skipped: unknown player)",
        style("[OK]").green(),
        style(summary.scan.qualifying).cyan(),
        style(summary.events).cyan(),
        style(summary.scan.unresolved).yellow()
    );

    if summary.nodes == 0 {
        println!(
            "  {} Network is empty; lower --min-weight to keep more connections",
            style("[--]").yellow()
        );
    } else {
        println!(
            "  {} {} players, {} connections, {} teams",
            style("[OK]").green(),
            style(summary.nodes).cyan(),
            style(summary.edges).cyan(),
            style(summary.teams).cyan()
        );
    }

    println!(
        "  {} Exported {} to {}",
        style("[OK]").green(),
        summary.export_format,
        style(summary.export_path.display()).cyan()
    );
    match &summary.plot_path {
        Some(path) => println!("  {} Plot written to {}", style("[OK]").green(), style(path.display()).cyan()),
        None => println!("  {} Plot skipped", style("[--]").dim()),
    }
    println!();

    Ok(())
}

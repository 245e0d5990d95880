//! Stats command - summarize the network without writing files

use anyhow::Result;
use console::style;

use crate::config::PipelineConfig;
use crate::pipeline::Pipeline;

pub fn run(config: PipelineConfig, top: usize) -> Result<()> {
    let min_weight = config.network.min_weight;
    let built = Pipeline::new(config).build_network()?;
    let network = &built.network;

    println!("\n{} Passing network (min weight {})\n", style("📊").bold(), min_weight);
    println!("  Events:          {}", style(built.events).cyan());
    println!("  Qualifying:      {}", style(built.scan.qualifying).cyan());
    println!("  Unresolved:      {}", style(built.scan.unresolved).yellow());
    println!("  Malformed names: {}", style(built.scan.malformed_names).yellow());
    println!("  Players:         {}", style(network.node_count()).cyan());
    println!("  Connections:     {}", style(network.edge_count()).cyan());

    let teams = network.teams();
    println!("\n{} Teams ({})\n", style("📊").bold(), teams.len());
    for team in &teams {
        println!(
            "  {} {} ({} players)",
            style(team.color.hex()).dim(),
            style(&team.name).cyan(),
            team.players
        );
    }

    let strongest = network.strongest_edges(top);
    println!("\n{} Strongest connections ({})\n", style("📊").bold(), strongest.len());
    for edge in &strongest {
        println!(
            "  {:>4}  {} - {}",
            style(edge.weight).bold(),
            style(&edge.source.name).cyan(),
            style(&edge.target.name).green()
        );
    }
    if network.edge_count() > strongest.len() {
        println!("  ... and {} more", network.edge_count() - strongest.len());
    }
    println!();

    Ok(())
}

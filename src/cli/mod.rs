//! CLI command definitions and handlers

mod init;
mod run;
mod stats;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};

use crate::config::{load_config, PipelineConfig};
use crate::export::ExportFormat;

/// passnet - soccer passing networks
///
/// Builds a weighted graph of accurate passes between players from match
/// event logs, exports it for Gephi and renders a team-colored plot.
#[derive(Parser, Debug)]
#[command(name = "passnet")]
#[command(
    version,
    about = "Build soccer passing networks from match event logs",
    after_help = "\
Examples:
  passnet                              Run with passnet.toml or defaults
  passnet run --min-weight 6           Keep connections with 6+ passes
  passnet run --format json --export network.json
  passnet stats --top 20               Show the strongest connections
  passnet init                         Write a passnet.toml template"
)]
pub struct Cli {
    /// Config file (default: passnet.toml or .passnetrc.json in the working directory)
    #[arg(long, short = 'c', global = true, env = "PASSNET_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "info", value_parser = ["error", "warn", "info", "debug", "trace"])]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build the network, export it and render the plot (default)
    Run(RunArgs),

    /// Build the network and print a summary without writing files
    Stats {
        /// Number of strongest connections to list
        #[arg(long, default_value = "10")]
        top: usize,

        #[command(flatten)]
        inputs: InputArgs,
    },

    /// Write a passnet.toml template in the working directory
    Init,
}

/// Input and threshold overrides shared by `run` and `stats`
#[derive(Args, Debug, Default, Clone)]
pub struct InputArgs {
    /// Event log JSON
    #[arg(long)]
    pub events: Option<PathBuf>,

    /// Player table JSON
    #[arg(long)]
    pub players: Option<PathBuf>,

    /// Team table JSON
    #[arg(long)]
    pub teams: Option<PathBuf>,

    /// Minimum pass count for a connection
    #[arg(long)]
    pub min_weight: Option<u32>,

    /// Ignore pass/receiver pairs that cross a match boundary
    #[arg(long)]
    pub same_match_only: bool,
}

impl InputArgs {
    fn apply(&self, config: &mut PipelineConfig) {
        if let Some(events) = &self.events {
            config.data.events = events.clone();
        }
        if let Some(players) = &self.players {
            config.data.players = players.clone();
        }
        if let Some(teams) = &self.teams {
            config.data.teams = teams.clone();
        }
        if let Some(min_weight) = self.min_weight {
            config.network.min_weight = min_weight;
        }
        if self.same_match_only {
            config.network.same_match_only = true;
        }
    }
}

/// Flags for `run`; each overrides the matching config value
#[derive(Args, Debug, Default, Clone)]
pub struct RunArgs {
    #[command(flatten)]
    pub inputs: InputArgs,

    /// Player-name substring to highlight ("" disables)
    #[arg(long)]
    pub highlight: Option<String>,

    /// Graph export path
    #[arg(long, short = 'o')]
    pub export: Option<PathBuf>,

    /// Export format: gexf, json
    #[arg(long, short = 'f', value_parser = ["gexf", "json"])]
    pub format: Option<String>,

    /// SVG plot path
    #[arg(long, conflicts_with = "no_plot")]
    pub plot: Option<PathBuf>,

    /// Skip rendering the plot
    #[arg(long)]
    pub no_plot: bool,

    /// Layout seed
    #[arg(long)]
    pub seed: Option<u64>,
}

impl RunArgs {
    fn apply(&self, config: &mut PipelineConfig) -> Result<()> {
        self.inputs.apply(config);
        if let Some(highlight) = &self.highlight {
            config.render.highlight = highlight.clone();
        }
        if let Some(export) = &self.export {
            config.output.export = export.clone();
        }
        if let Some(format) = &self.format {
            config.output.format = format.parse::<ExportFormat>()?;
        }
        if let Some(plot) = &self.plot {
            config.output.plot = plot.clone();
            config.output.render_plot = true;
        }
        if self.no_plot {
            config.output.render_plot = false;
        }
        if let Some(seed) = self.seed {
            config.layout.seed = seed;
        }
        Ok(())
    }
}

fn load(cli_config: Option<&Path>) -> Result<PipelineConfig> {
    let config = load_config(cli_config, Path::new("."))
        .context("Failed to load configuration")?;
    Ok(config)
}

/// Run the CLI
pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Some(Commands::Init) => init::run(Path::new(".")),

        Some(Commands::Stats { top, inputs }) => {
            let mut config = load(cli.config.as_deref())?;
            inputs.apply(&mut config);
            stats::run(config, top)
        }

        Some(Commands::Run(args)) => {
            let mut config = load(cli.config.as_deref())?;
            args.apply(&mut config)?;
            run::run(config)
        }

        None => run::run(load(cli.config.as_deref())?),
    }
}

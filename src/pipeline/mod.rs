//! Passing-network pipeline
//!
//! Orchestrates a full run:
//! 1. Load events, players and teams
//! 2. Scan qualifying passes (attribution + tally)
//! 3. Build the thresholded graph
//! 4. Export it
//! 5. Render the plot (if enabled)

use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing::{info, warn};

use crate::config::PipelineConfig;
use crate::data::Dataset;
use crate::export::{write_export, ExportFormat};
use crate::graph::PassNetwork;
use crate::passes::{scan_events, MatchBoundary, ScanStats};
use crate::render::{write_plot, PlotOptions};

/// Graph built from a dataset, with the scan counters that produced it
#[derive(Debug)]
pub struct BuiltNetwork {
    pub network: PassNetwork,
    pub scan: ScanStats,
    pub events: usize,
}

/// What a run produced
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub events: usize,
    pub scan: ScanStats,
    pub nodes: usize,
    pub edges: usize,
    pub teams: usize,
    pub export_path: PathBuf,
    pub export_format: ExportFormat,
    pub plot_path: Option<PathBuf>,
}

/// Full pipeline driven by a [`PipelineConfig`]
pub struct Pipeline {
    config: PipelineConfig,
}

impl Pipeline {
    pub fn new(config: PipelineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Load the inputs and build the network without writing anything
    pub fn build_network(&self) -> Result<BuiltNetwork> {
        let data = &self.config.data;
        let dataset = Dataset::load(&data.events, &data.players, &data.teams)
            .context("Failed to load input data")?;
        info!(
            "Loaded {} events, {} players, {} teams",
            dataset.events.len(),
            dataset.players.len(),
            dataset.teams.len()
        );
        Ok(self.build_from(&dataset))
    }

    /// Build the network from an already loaded dataset
    pub fn build_from(&self, dataset: &Dataset) -> BuiltNetwork {
        let network_config = &self.config.network;
        let boundary = MatchBoundary::from_flag(network_config.same_match_only);
        let scan = scan_events(&dataset.events, &dataset.players, boundary);

        let network = PassNetwork::build(
            &scan.tally,
            &scan.attribution,
            &dataset.teams,
            network_config.min_weight,
        );

        if network.is_empty() {
            warn!(
                "Passing network is empty (min weight {}); outputs will contain no players",
                network_config.min_weight
            );
        } else {
            info!(
                "Passing network: {} players, {} connections",
                network.node_count(),
                network.edge_count()
            );
        }

        BuiltNetwork {
            network,
            scan: scan.stats,
            events: dataset.events.len(),
        }
    }

    /// Run every stage and write the configured outputs
    pub fn run(&self) -> Result<RunSummary> {
        let built = self.build_network()?;
        self.write_outputs(built)
    }

    fn write_outputs(&self, built: BuiltNetwork) -> Result<RunSummary> {
        let output = &self.config.output;
        write_export(&built.network, &output.export, output.format)?;

        let plot_path = if output.render_plot {
            let options = PlotOptions {
                highlight: self.config.render.highlight().map(str::to_string),
                layout: self.config.layout,
            };
            write_plot(&built.network, &output.plot, &options)?;
            Some(output.plot.clone())
        } else {
            None
        };

        Ok(RunSummary {
            events: built.events,
            scan: built.scan,
            nodes: built.network.node_count(),
            edges: built.network.edge_count(),
            teams: built.network.teams().len(),
            export_path: output.export.clone(),
            export_format: output.format,
            plot_path,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::index_by_id;
    use crate::models::{Event, PlayerRecord, Tag, TeamRecord, ACCURATE_PASS_TAG};

    fn pass(player: i64, team: i64) -> Event {
        Event {
            event_name: Some("Pass".into()),
            player_id: Some(player),
            team_id: Some(team),
            tags: vec![Tag::new(ACCURATE_PASS_TAG)],
            ..Default::default()
        }
    }

    fn dataset() -> Dataset {
        Dataset {
            events: vec![pass(1, 10), pass(2, 10), pass(1, 10), pass(3, 20)],
            players: index_by_id(vec![
                PlayerRecord { wy_id: 1, last_name: Some("Pavard".into()) },
                PlayerRecord { wy_id: 2, last_name: Some("Varane".into()) },
                PlayerRecord { wy_id: 3, last_name: Some("Modric".into()) },
            ]),
            teams: index_by_id(vec![TeamRecord { wy_id: 10, name: Some("France".into()) }]),
        }
    }

    #[test]
    fn test_build_from_dataset() {
        let built = Pipeline::new(PipelineConfig::default()).build_from(&dataset());
        assert_eq!(built.events, 4);
        assert_eq!(built.scan.qualifying, 3);
        assert_eq!(built.network.weight("Pavard", "Varane"), Some(2));
        assert_eq!(built.network.weight("Pavard", "Modric"), Some(1));
        assert_eq!(built.network.node("Varane").and_then(|n| n.team_name()), Some("France"));
    }

    #[test]
    fn test_threshold_from_config() {
        let mut config = PipelineConfig::default();
        config.network.min_weight = 2;
        let built = Pipeline::new(config).build_from(&dataset());
        assert_eq!(built.network.edge_count(), 1);
        assert!(built.network.node("Modric").is_none());

        let mut config = PipelineConfig::default();
        config.network.min_weight = 3;
        let built = Pipeline::new(config).build_from(&dataset());
        assert!(built.network.is_empty());
    }

    #[test]
    fn test_missing_input_names_path() {
        let mut config = PipelineConfig::default();
        config.data.events = PathBuf::from("/nonexistent/passnet/events.json");
        let err = Pipeline::new(config).build_network().unwrap_err();
        let message = format!("{:#}", err);
        assert!(message.contains("Failed to load input data"));
        assert!(message.contains("/nonexistent/passnet/events.json"));
    }
}

//! Pipeline configuration
//!
//! Loads run settings from `passnet.toml` or `.passnetrc.json` in the
//! working directory, or from an explicit `--config` path.
//!
//! # Configuration Format
//!
//! ```toml
//! # passnet.toml
//!
//! [data]
//! events = "Soccer_Data/events/events_World_Cup.json"
//! players = "Soccer_Data/players.json"
//! teams = "Soccer_Data/teams.json"
//!
//! [network]
//! min_weight = 1          # try 4, 6, 8, 10
//! same_match_only = false
//!
//! [output]
//! export = "soccer_network.gexf"
//! format = "gexf"         # gexf or json
//! plot = "soccer_network.svg"
//!
//! [render]
//! highlight = "Pavard"
//!
//! [layout]
//! seed = 42
//! k = 1.0
//! iterations = 50
//! ```

use crate::export::ExportFormat;
use crate::graph::DEFAULT_MIN_WEIGHT;
use crate::render::LayoutConfig;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

/// Config file names searched in the working directory, in order
pub const CONFIG_FILE_NAMES: &[&str] = &["passnet.toml", ".passnetrc.json"];

/// Errors raised while loading a config file
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid TOML in {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Full run configuration
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
pub struct PipelineConfig {
    /// Input file locations
    #[serde(default)]
    pub data: DataPaths,

    /// Graph construction settings
    #[serde(default)]
    pub network: NetworkConfig,

    /// Output locations and format
    #[serde(default)]
    pub output: OutputConfig,

    /// Plot styling
    #[serde(default)]
    pub render: RenderConfig,

    /// Spring layout parameters
    #[serde(default)]
    pub layout: LayoutConfig,
}

/// Input file locations
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct DataPaths {
    /// Event log (default: Soccer_Data/events/events_World_Cup.json)
    #[serde(default = "default_events_path")]
    pub events: PathBuf,

    /// Player reference table (default: Soccer_Data/players.json)
    #[serde(default = "default_players_path")]
    pub players: PathBuf,

    /// Team reference table (default: Soccer_Data/teams.json)
    #[serde(default = "default_teams_path")]
    pub teams: PathBuf,
}

impl Default for DataPaths {
    fn default() -> Self {
        Self {
            events: default_events_path(),
            players: default_players_path(),
            teams: default_teams_path(),
        }
    }
}

fn default_events_path() -> PathBuf {
    PathBuf::from("Soccer_Data/events/events_World_Cup.json")
}
fn default_players_path() -> PathBuf {
    PathBuf::from("Soccer_Data/players.json")
}
fn default_teams_path() -> PathBuf {
    PathBuf::from("Soccer_Data/teams.json")
}

/// Graph construction settings
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct NetworkConfig {
    /// Minimum pass count for an edge (default: 1)
    #[serde(default = "default_min_weight")]
    pub min_weight: u32,

    /// Skip pass/receiver pairs that straddle two matches (default: false)
    #[serde(default)]
    pub same_match_only: bool,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            min_weight: default_min_weight(),
            same_match_only: false,
        }
    }
}

fn default_min_weight() -> u32 {
    DEFAULT_MIN_WEIGHT
}

/// Output locations and format
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct OutputConfig {
    /// Graph export file (default: soccer_network.gexf)
    #[serde(default = "default_export_path")]
    pub export: PathBuf,

    /// Export format (default: gexf)
    #[serde(default)]
    pub format: ExportFormat,

    /// SVG plot file (default: soccer_network.svg)
    #[serde(default = "default_plot_path")]
    pub plot: PathBuf,

    /// Whether to render the plot at all (default: true)
    #[serde(default = "default_true")]
    pub render_plot: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            export: default_export_path(),
            format: ExportFormat::default(),
            plot: default_plot_path(),
            render_plot: true,
        }
    }
}

fn default_export_path() -> PathBuf {
    PathBuf::from("soccer_network.gexf")
}
fn default_plot_path() -> PathBuf {
    PathBuf::from("soccer_network.svg")
}
fn default_true() -> bool {
    true
}

/// Plot styling
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct RenderConfig {
    /// Player-name substring to highlight, case-insensitive (default: "Pavard").
    /// An empty string disables highlighting.
    #[serde(default = "default_highlight")]
    pub highlight: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            highlight: default_highlight(),
        }
    }
}

fn default_highlight() -> String {
    "Pavard".to_string()
}

impl RenderConfig {
    /// Highlight pattern, `None` when disabled
    pub fn highlight(&self) -> Option<&str> {
        if self.highlight.is_empty() {
            None
        } else {
            Some(self.highlight.as_str())
        }
    }
}

/// Load configuration.
///
/// An explicit path must exist and parse. Otherwise the files in
/// [`CONFIG_FILE_NAMES`] are tried in `dir`; a discovered file that fails to
/// parse is logged and skipped. Defaults apply when nothing is found.
pub fn load_config(explicit: Option<&Path>, dir: &Path) -> Result<PipelineConfig, ConfigError> {
    if let Some(path) = explicit {
        let config = load_config_file(path)?;
        debug!("Loaded config from {}", path.display());
        return Ok(config);
    }

    for name in CONFIG_FILE_NAMES {
        let path = dir.join(name);
        if !path.exists() {
            continue;
        }
        match load_config_file(&path) {
            Ok(config) => {
                debug!("Loaded config from {}", path.display());
                return Ok(config);
            }
            Err(e) => {
                warn!("Failed to load {}: {}", path.display(), e);
            }
        }
    }

    debug!("No config file found, using defaults");
    Ok(PipelineConfig::default())
}

/// Load a single config file; `.json` files are parsed as JSON, anything else as TOML
pub fn load_config_file(path: &Path) -> Result<PipelineConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    if is_json {
        serde_json::from_str(&content).map_err(|source| ConfigError::Json {
            path: path.to_path_buf(),
            source,
        })
    } else {
        toml::from_str(&content).map_err(|source| ConfigError::Toml {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Commented template written by `passnet init`
pub const CONFIG_TEMPLATE: &str = r#"# passnet configuration

[data]
# Event log (array of events with eventName, playerId, teamId, tags)
events = "Soccer_Data/events/events_World_Cup.json"
# Player reference table (array of records with wyId, lastName)
players = "Soccer_Data/players.json"
# Team reference table (array of records with wyId, name)
teams = "Soccer_Data/teams.json"

[network]
# Minimum number of accurate passes for a connection to be drawn (try 4, 6, 8, 10)
min_weight = 1
# Ignore pass/receiver pairs whose events belong to different matches
same_match_only = false

[output]
# Graph export for Gephi (gexf) or web tooling (json)
export = "soccer_network.gexf"
format = "gexf"
# Static plot
plot = "soccer_network.svg"
render_plot = true

[render]
# Highlight connections of players whose name contains this text ("" = none)
highlight = "Pavard"

[layout]
seed = 42
k = 1.0
iterations = 50
"#;

//! Configuration module for passnet
//!
//! This module handles:
//! - Input file locations
//! - Network thresholds
//! - Output paths and formats
//! - Plot styling and layout parameters

mod project_config;

pub use project_config::{
    load_config,
    load_config_file,
    ConfigError,
    DataPaths,
    NetworkConfig,
    OutputConfig,
    PipelineConfig,
    RenderConfig,
    CONFIG_FILE_NAMES,
    CONFIG_TEMPLATE,
};

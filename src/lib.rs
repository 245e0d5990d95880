//! passnet - soccer passing networks
//!
//! Turns match event logs into an undirected weighted graph of accurate
//! passes between players, exports it for Gephi and renders a static plot
//! with team-colored nodes.

pub mod cli;
pub mod config;
pub mod data;
pub mod export;
pub mod graph;
pub mod models;
pub mod names;
pub mod passes;
pub mod pipeline;
pub mod render;

pub use config::PipelineConfig;
pub use graph::PassNetwork;
pub use pipeline::{Pipeline, RunSummary};

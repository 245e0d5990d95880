//! JSON node-link exporter
//!
//! Same shape as the common node-link graph format: `nodes` with an `id`
//! plus optional team fields, `links` with `source`, `target` and `weight`.
//! Useful for d3-style web viewers or further scripting.

use crate::graph::PassNetwork;
use anyhow::Result;
use serde::Serialize;

#[derive(Serialize)]
struct NodeLink<'a> {
    directed: bool,
    multigraph: bool,
    nodes: Vec<NodeEntry<'a>>,
    links: Vec<LinkEntry<'a>>,
}

#[derive(Serialize)]
struct NodeEntry<'a> {
    id: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    team_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    team_name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    color: Option<String>,
}

#[derive(Serialize)]
struct LinkEntry<'a> {
    source: &'a str,
    target: &'a str,
    weight: u32,
}

/// Render the network as pretty-printed node-link JSON
pub fn render(network: &PassNetwork) -> Result<String> {
    let doc = NodeLink {
        directed: false,
        multigraph: false,
        nodes: network
            .nodes()
            .map(|n| NodeEntry {
                id: &n.name,
                team_id: n.team_id(),
                team_name: n.team_name(),
                color: n.team.as_ref().map(|t| t.color.hex()),
            })
            .collect(),
        links: network
            .edges()
            .map(|e| LinkEntry {
                source: &e.source.name,
                target: &e.target.name,
                weight: e.weight,
            })
            .collect(),
    };
    Ok(serde_json::to_string_pretty(&doc)?)
}

//! Passing network
//!
//! Undirected weighted graph of player names built from a [`PassTally`].
//! Edge weight is the number of accurate passes between the two players.
//! Nodes carry the team they were attributed to, plus a team color.

mod palette;

pub use palette::{spread, Rgb, CATEGORICAL_20, NEUTRAL};

use crate::data::TeamIndex;
use crate::models::fallback_team_name;
use crate::passes::{PassTally, TeamAttribution};
use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;
use rustc_hash::FxHashMap;
use serde::Serialize;
use std::collections::BTreeSet;
use tracing::debug;

/// Default minimum edge weight
pub const DEFAULT_MIN_WEIGHT: u32 = 1;

/// Team a player node is attributed to
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamTag {
    pub id: i64,
    pub name: String,
    pub color: Rgb,
}

/// A player in the network
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerNode {
    pub name: String,
    pub team: Option<TeamTag>,
}

impl PlayerNode {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            team: None,
        }
    }

    pub fn team_id(&self) -> Option<i64> {
        self.team.as_ref().map(|t| t.id)
    }

    pub fn team_name(&self) -> Option<&str> {
        self.team.as_ref().map(|t| t.name.as_str())
    }

    /// Team color, or the neutral fill when unattributed
    pub fn color(&self) -> Rgb {
        self.team.as_ref().map_or(NEUTRAL, |t| t.color)
    }
}

/// Edge payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PassEdge {
    pub weight: u32,
}

/// Borrowed view of one edge
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeView<'a> {
    pub source: &'a PlayerNode,
    pub target: &'a PlayerNode,
    pub weight: u32,
}

impl EdgeView<'_> {
    pub fn touches(&self, name: &str) -> bool {
        self.source.name == name || self.target.name == name
    }
}

/// Team present in the network, with its assigned color
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamSummary {
    pub id: i64,
    pub name: String,
    pub color: Rgb,
    pub players: usize,
}

#[derive(Debug, Clone, Default)]
pub struct PassNetwork {
    graph: UnGraph<PlayerNode, PassEdge>,
    index: FxHashMap<String, NodeIndex>,
}

impl PassNetwork {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the network from a tally.
    ///
    /// An edge is added for each pair of distinct, non-empty names whose
    /// count is at least `min_weight`. Nodes exist only as edge endpoints.
    pub fn build(
        tally: &PassTally,
        attribution: &TeamAttribution,
        teams: &TeamIndex,
        min_weight: u32,
    ) -> Self {
        let mut network = Self::new();
        let mut dropped = 0usize;

        for (pair, weight) in tally.iter() {
            if pair.has_empty_name() || pair.is_self_pair() || weight < min_weight {
                dropped += 1;
                continue;
            }
            network.add_edge(pair.first(), pair.second(), weight);
        }

        network.assign_teams(attribution, teams);

        debug!(
            "Built network: {} nodes, {} edges ({} pairs dropped, min weight {})",
            network.node_count(),
            network.edge_count(),
            dropped,
            min_weight
        );

        network
    }

    fn node_index(&mut self, name: &str) -> NodeIndex {
        if let Some(&idx) = self.index.get(name) {
            return idx;
        }
        let idx = self.graph.add_node(PlayerNode::new(name));
        self.index.insert(name.to_string(), idx);
        idx
    }

    /// Add an edge, or overwrite the weight of an existing one
    pub fn add_edge(&mut self, a: &str, b: &str, weight: u32) {
        let ia = self.node_index(a);
        let ib = self.node_index(b);
        self.graph.update_edge(ia, ib, PassEdge { weight });
    }

    /// Tag nodes with their attributed team and a per-team color.
    ///
    /// Colors go to the distinct attributed team ids in ascending order, so
    /// players of one team always share a color.
    fn assign_teams(&mut self, attribution: &TeamAttribution, teams: &TeamIndex) {
        let team_ids: BTreeSet<i64> = self
            .graph
            .node_weights()
            .filter_map(|n| attribution.team_of(&n.name))
            .collect();

        let colors: FxHashMap<i64, Rgb> = team_ids
            .iter()
            .copied()
            .zip(spread(team_ids.len()))
            .collect();

        for node in self.graph.node_weights_mut() {
            let Some(team_id) = attribution.team_of(&node.name) else {
                continue;
            };
            let Some(&color) = colors.get(&team_id) else {
                continue;
            };
            let name = teams
                .get(&team_id)
                .map(|t| t.display_name())
                .unwrap_or_else(|| fallback_team_name(team_id));
            node.team = Some(TeamTag { id: team_id, name, color });
        }
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    /// Nodes in insertion order
    pub fn nodes(&self) -> impl Iterator<Item = &PlayerNode> {
        self.graph.node_weights()
    }

    pub fn node(&self, name: &str) -> Option<&PlayerNode> {
        self.index.get(name).and_then(|&idx| self.graph.node_weight(idx))
    }

    /// Position of a node in [`nodes`](Self::nodes) order
    pub fn position_of(&self, name: &str) -> Option<usize> {
        self.index.get(name).map(|idx| idx.index())
    }

    /// Edges in insertion order
    pub fn edges(&self) -> impl Iterator<Item = EdgeView<'_>> {
        self.graph.edge_references().map(move |e| EdgeView {
            source: &self.graph[e.source()],
            target: &self.graph[e.target()],
            weight: e.weight().weight,
        })
    }

    /// Endpoint positions and weight of each edge, in insertion order
    pub fn edge_indices(&self) -> impl Iterator<Item = (usize, usize, u32)> + '_ {
        self.graph
            .edge_references()
            .map(|e| (e.source().index(), e.target().index(), e.weight().weight))
    }

    pub fn weight(&self, a: &str, b: &str) -> Option<u32> {
        let ia = *self.index.get(a)?;
        let ib = *self.index.get(b)?;
        let edge = self.graph.find_edge(ia, ib)?;
        self.graph.edge_weight(edge).map(|e| e.weight)
    }

    pub fn max_weight(&self) -> Option<u32> {
        self.graph.edge_weights().map(|e| e.weight).max()
    }

    pub fn degree(&self, name: &str) -> usize {
        self.index
            .get(name)
            .map_or(0, |&idx| self.graph.edges(idx).count())
    }

    /// Heaviest edges first; ties broken by endpoint names
    pub fn strongest_edges(&self, limit: usize) -> Vec<EdgeView<'_>> {
        let mut edges: Vec<_> = self.edges().collect();
        edges.sort_by(|a, b| {
            b.weight
                .cmp(&a.weight)
                .then_with(|| a.source.name.cmp(&b.source.name))
                .then_with(|| a.target.name.cmp(&b.target.name))
        });
        edges.truncate(limit);
        edges
    }

    /// Teams present in the network, ordered by id
    pub fn teams(&self) -> Vec<TeamSummary> {
        let mut summaries: Vec<TeamSummary> = Vec::new();
        for team in self.graph.node_weights().filter_map(|n| n.team.as_ref()) {
            match summaries.iter_mut().find(|s| s.id == team.id) {
                Some(summary) => summary.players += 1,
                None => summaries.push(TeamSummary {
                    id: team.id,
                    name: team.name.clone(),
                    color: team.color,
                    players: 1,
                }),
            }
        }
        summaries.sort_by_key(|s| s.id);
        summaries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::index_by_id;
    use crate::models::TeamRecord;

    fn teams() -> TeamIndex {
        index_by_id(vec![
            TeamRecord { wy_id: 4418, name: Some("France".into()) },
            TeamRecord { wy_id: 9598, name: Some("Croatia".into()) },
        ])
    }

    fn tally(pairs: &[(&str, &str, u32)]) -> PassTally {
        let mut tally = PassTally::new();
        for &(a, b, n) in pairs {
            for _ in 0..n {
                tally.record(a, b);
            }
        }
        tally
    }

    fn attribution(entries: &[(&str, i64)]) -> TeamAttribution {
        let mut attribution = TeamAttribution::new();
        for &(name, team) in entries {
            attribution.observe(name, team);
        }
        attribution
    }

    #[test]
    fn test_threshold_and_self_loops_filtered() {
        let tally = tally(&[
            ("Pogba", "Kanté", 5),
            ("Lloris", "Varane", 1),
            ("Giroud", "Giroud", 4),
            ("", "Mbappé", 3),
        ]);
        let network = PassNetwork::build(&tally, &TeamAttribution::new(), &teams(), 2);

        assert_eq!(network.edge_count(), 1);
        assert_eq!(network.node_count(), 2);
        assert_eq!(network.weight("Kanté", "Pogba"), Some(5));
        assert_eq!(network.weight("Pogba", "Kanté"), Some(5));
        assert!(network.node("Giroud").is_none());
        assert!(network.node("Lloris").is_none());
        for edge in network.edges() {
            assert_ne!(edge.source.name, edge.target.name);
            assert!(edge.weight >= 2);
        }
    }

    #[test]
    fn test_threshold_above_max_gives_empty_graph() {
        let tally = tally(&[("Pogba", "Kanté", 5), ("Lloris", "Varane", 2)]);
        let network = PassNetwork::build(&tally, &TeamAttribution::new(), &teams(), 6);
        assert!(network.is_empty());
        assert_eq!(network.edge_count(), 0);
        assert_eq!(network.max_weight(), None);
    }

    #[test]
    fn test_shared_team_shares_color() {
        let tally = tally(&[("Pogba", "Kanté", 3), ("Modrić", "Rakitić", 2), ("Kanté", "Modrić", 1)]);
        let attribution = attribution(&[("Pogba", 4418), ("Kanté", 4418), ("Modrić", 9598), ("Rakitić", 9598)]);
        let network = PassNetwork::build(&tally, &attribution, &teams(), 1);

        let pogba = network.node("Pogba").unwrap();
        let kante = network.node("Kanté").unwrap();
        let modric = network.node("Modrić").unwrap();
        assert_eq!(pogba.color(), kante.color());
        assert_ne!(pogba.color(), modric.color());
        assert_eq!(pogba.team_name(), Some("France"));
        assert_eq!(modric.team_id(), Some(9598));

        // Sorted team ids take palette positions in order
        assert_eq!(pogba.color(), CATEGORICAL_20[0]);
        assert_eq!(modric.color(), CATEGORICAL_20[19]);
    }

    #[test]
    fn test_unknown_team_gets_fallback_name() {
        let tally = tally(&[("Messi", "Agüero", 2)]);
        let attribution = attribution(&[("Messi", 12274)]);
        let network = PassNetwork::build(&tally, &attribution, &teams(), 1);

        assert_eq!(network.node("Messi").unwrap().team_name(), Some("Team 12274"));
        let aguero = network.node("Agüero").unwrap();
        assert!(aguero.team.is_none());
        assert_eq!(aguero.color(), NEUTRAL);
    }

    #[test]
    fn test_attribution_outside_graph_does_not_consume_colors() {
        let tally = tally(&[("Pogba", "Kanté", 2)]);
        let attribution = attribution(&[("Pogba", 4418), ("Modrić", 1)]);
        let network = PassNetwork::build(&tally, &attribution, &teams(), 1);
        assert_eq!(network.teams().len(), 1);
        assert_eq!(network.node("Pogba").unwrap().color(), CATEGORICAL_20[0]);
    }

    #[test]
    fn test_queries() {
        let tally = tally(&[("A", "B", 3), ("A", "C", 7), ("B", "C", 3)]);
        let network = PassNetwork::build(&tally, &TeamAttribution::new(), &teams(), 1);

        assert_eq!(network.max_weight(), Some(7));
        assert_eq!(network.degree("A"), 2);
        assert_eq!(network.degree("missing"), 0);
        let strongest = network.strongest_edges(2);
        assert_eq!(strongest[0].weight, 7);
        assert_eq!((strongest[1].source.name.as_str(), strongest[1].target.name.as_str()), ("A", "B"));
        assert_eq!(network.position_of("A"), Some(0));
        assert!(strongest[0].touches("C"));
    }

    #[test]
    fn test_build_is_deterministic() {
        let tally = tally(&[("Pogba", "Kanté", 3), ("Modrić", "Rakitić", 2), ("Kanté", "Modrić", 1)]);
        let attribution = attribution(&[("Pogba", 4418), ("Modrić", 9598)]);
        let a = PassNetwork::build(&tally, &attribution, &teams(), 1);
        let b = PassNetwork::build(&tally, &attribution, &teams(), 1);

        let nodes_a: Vec<_> = a.nodes().cloned().collect();
        let nodes_b: Vec<_> = b.nodes().cloned().collect();
        assert_eq!(nodes_a, nodes_b);
        let edges_a: Vec<_> = a.edge_indices().collect();
        let edges_b: Vec<_> = b.edge_indices().collect();
        assert_eq!(edges_a, edges_b);
    }
}

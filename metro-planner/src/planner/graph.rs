//! Station graph built from network data.
//!
//! Every station record gets a node in an arena, addressed by a
//! `NodeIndex` assigned at build time. A side map resolves station ids to
//! indices. Edges join consecutive stations on each line in both
//! directions.

use std::collections::HashMap;

use tracing::{debug, warn};

use super::config::{EdgePolicy, PlannerConfig};
use crate::domain::{Line, LineId, Station};
use crate::network::{IntegrityWarning, check_integrity};

/// Position of a node in the graph arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeIndex(pub usize);

/// Position of a line in the graph's line table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LineIndex(pub usize);

/// Error from building a graph in strict mode.
#[derive(Debug, Clone, thiserror::Error)]
pub enum GraphError {
    /// The network data failed integrity checks
    #[error("network data failed integrity checks: {} problem(s)", .warnings.len())]
    Integrity { warnings: Vec<IntegrityWarning> },
}

/// A directed edge to an adjacent station.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub to: NodeIndex,
    /// Travel time (minutes).
    pub minutes: f64,
    pub line: LineIndex,
}

/// A station and its outgoing edges.
#[derive(Debug, Clone)]
pub struct Node<'a> {
    pub station: &'a Station,
    edges: Vec<Edge>,
}

impl Node<'_> {
    /// Returns the outgoing edges in insertion order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }
}

/// Adjacency structure over the network, rebuilt for every query.
#[derive(Debug, Clone)]
pub struct Graph<'a> {
    nodes: Vec<Node<'a>>,
    lines: Vec<&'a Line>,
    station_index: HashMap<&'a str, NodeIndex>,
    line_index: HashMap<&'a str, LineIndex>,
    config: &'a PlannerConfig,
    warnings: Vec<IntegrityWarning>,
}

impl<'a> Graph<'a> {
    /// Build the graph, logging and recording integrity problems.
    ///
    /// A line reference to an unknown station skips the edges touching
    /// it. A duplicated station id resolves to its first record; later
    /// records keep their own nodes but cannot be reached by id.
    pub fn build(stations: &'a [Station], lines: &'a [Line], config: &'a PlannerConfig) -> Self {
        let warnings = check_integrity(stations, lines);

        let mut nodes = Vec::with_capacity(stations.len());
        let mut station_index = HashMap::with_capacity(stations.len());
        for (idx, station) in stations.iter().enumerate() {
            nodes.push(Node {
                station,
                edges: Vec::new(),
            });
            station_index
                .entry(station.id.as_str())
                .or_insert(NodeIndex(idx));
        }

        let mut graph = Graph {
            nodes,
            lines: Vec::with_capacity(lines.len()),
            station_index,
            line_index: HashMap::with_capacity(lines.len()),
            config,
            warnings: Vec::new(),
        };

        for line in lines {
            let line_idx = LineIndex(graph.lines.len());
            graph.lines.push(line);
            graph
                .line_index
                .entry(line.id.as_str())
                .or_insert(line_idx);

            for (from, to) in line.adjacent_pairs() {
                let from_idx = graph.node_index(from.as_str());
                let to_idx = graph.node_index(to.as_str());

                let (Some(from_idx), Some(to_idx)) = (from_idx, to_idx) else {
                    continue;
                };

                if from_idx == to_idx {
                    continue;
                }

                graph.connect(from_idx, to_idx, line_idx);
                graph.connect(to_idx, from_idx, line_idx);
            }
        }

        for warning in &warnings {
            warn!(%warning, "network data integrity problem");
        }
        graph.warnings = warnings;

        debug!(
            nodes = graph.nodes.len(),
            edges = graph.edge_count(),
            lines = graph.lines.len(),
            warnings = graph.warnings.len(),
            "built station graph"
        );

        graph
    }

    /// Build the graph, failing if the data has any integrity problem.
    pub fn build_strict(
        stations: &'a [Station],
        lines: &'a [Line],
        config: &'a PlannerConfig,
    ) -> Result<Self, GraphError> {
        let graph = Self::build(stations, lines, config);
        if graph.warnings.is_empty() {
            Ok(graph)
        } else {
            Err(GraphError::Integrity {
                warnings: graph.warnings,
            })
        }
    }

    /// Insert or overwrite the directed edge `from -> to` on `line`.
    fn connect(&mut self, from: NodeIndex, to: NodeIndex, line: LineIndex) {
        let minutes = self.config.edge_minutes;
        let policy = self.config.edge_policy;
        let edges = &mut self.nodes[from.0].edges;

        let existing = match policy {
            EdgePolicy::LastLineWins => edges.iter_mut().find(|e| e.to == to),
            EdgePolicy::KeepParallel => edges.iter_mut().find(|e| e.to == to && e.line == line),
        };

        match existing {
            Some(edge) => {
                edge.line = line;
                edge.minutes = minutes;
            }
            None => edges.push(Edge { to, minutes, line }),
        }
    }

    /// Resolve a station id to its node.
    pub fn node_index(&self, id: &str) -> Option<NodeIndex> {
        self.station_index.get(id).copied()
    }

    /// Returns the node at `idx`.
    ///
    /// # Panics
    ///
    /// Panics if `idx` did not come from this graph.
    pub fn node(&self, idx: NodeIndex) -> &Node<'a> {
        &self.nodes[idx.0]
    }

    /// Returns the station at `idx`.
    pub fn station(&self, idx: NodeIndex) -> &'a Station {
        self.nodes[idx.0].station
    }

    /// Returns the outgoing edges of `idx`.
    pub fn edges(&self, idx: NodeIndex) -> &[Edge] {
        &self.nodes[idx.0].edges
    }

    /// Returns the line at `idx`.
    pub fn line(&self, idx: LineIndex) -> &'a Line {
        self.lines[idx.0]
    }

    /// Look up a line by id.
    pub fn line_by_id(&self, id: &LineId) -> Option<&'a Line> {
        self.line_index.get(id.as_str()).map(|idx| self.lines[idx.0])
    }

    pub fn config(&self) -> &'a PlannerConfig {
        self.config
    }

    /// Integrity problems found while building.
    pub fn warnings(&self) -> &[IntegrityWarning] {
        &self.warnings
    }

    /// Number of nodes, including unreachable duplicates.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of directed edges.
    pub fn edge_count(&self) -> usize {
        self.nodes.iter().map(|n| n.edges.len()).sum()
    }
}

//! Query entry points: primary route plus optional alternate.

use tracing::debug;

use super::alternate::{AlternateStrategy, AvoidFirstTransfer};
use super::config::PlannerConfig;
use super::graph::{Graph, GraphError};
use super::search::shortest_path;
use crate::domain::{Line, Route, Station};
use crate::network::Network;

/// Route planner over network data.
///
/// Builds a fresh graph for every query, runs the primary search, and
/// asks the alternate strategy for a second route when the primary
/// involves a transfer.
pub struct Planner<'a, S = AvoidFirstTransfer> {
    config: &'a PlannerConfig,
    strategy: S,
}

impl<'a> Planner<'a> {
    /// Create a planner with the default alternate strategy.
    pub fn new(config: &'a PlannerConfig) -> Self {
        Self {
            config,
            strategy: AvoidFirstTransfer,
        }
    }
}

impl<'a, S: AlternateStrategy> Planner<'a, S> {
    /// Create a planner with a custom alternate strategy.
    pub fn with_strategy(config: &'a PlannerConfig, strategy: S) -> Self {
        Self { config, strategy }
    }

    /// Plan routes over a loaded network.
    pub fn plan(
        &self,
        network: &Network,
        origin: &str,
        destination: &str,
    ) -> Result<Vec<Route>, GraphError> {
        self.plan_over(&network.stations, &network.lines, origin, destination)
    }

    /// Plan routes over raw station and line records.
    ///
    /// Returns `[primary]` or `[primary, alternate]`, or an empty list if
    /// no route exists. Only a strict config can make this fail.
    pub fn plan_over(
        &self,
        stations: &[Station],
        lines: &[Line],
        origin: &str,
        destination: &str,
    ) -> Result<Vec<Route>, GraphError> {
        let graph = if self.config.strict_integrity {
            Graph::build_strict(stations, lines, self.config)?
        } else {
            Graph::build(stations, lines, self.config)
        };

        Ok(self.routes_in(&graph, origin, destination))
    }

    /// Plan routes over an already built graph.
    pub fn routes_in(&self, graph: &Graph<'_>, origin: &str, destination: &str) -> Vec<Route> {
        let Some(primary) = shortest_path(graph, origin, destination) else {
            debug!(origin, destination, "no route found");
            return Vec::new();
        };

        let alternate = if primary.transfers() > 0 {
            self.strategy
                .alternate(graph, origin, destination, &primary)
        } else {
            None
        };

        debug!(
            origin,
            destination,
            stops = primary.total_stops(),
            transfers = primary.transfers(),
            alternate = alternate.is_some(),
            "planned routes"
        );

        let mut routes = vec![primary];
        routes.extend(alternate);
        routes
    }
}

/// Find routes between two stations with the default configuration.
///
/// Returns `[primary]`, `[primary, alternate]`, or an empty list when no
/// route exists. Integrity problems in the data are logged, not fatal.
pub fn find_routes(
    stations: &[Station],
    lines: &[Line],
    origin: &str,
    destination: &str,
) -> Vec<Route> {
    let config = PlannerConfig::default();
    let graph = Graph::build(stations, lines, &config);
    Planner::new(&config).routes_in(&graph, origin, destination)
}

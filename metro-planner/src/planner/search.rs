//! Transfer-aware shortest-path search.
//!
//! Dijkstra over the augmented state `(station, line arrived on)`. Riding
//! an edge on a different line from the one used to reach the current
//! station costs an extra `transfer_penalty_mins`, which biases the search
//! towards fewer changes. Because the penalty is part of the state rather
//! than the edge, this is an ordinary Dijkstra over a larger graph.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};

use ordered_float::OrderedFloat;
use tracing::{debug, trace, warn};

use super::assemble::RouteAssembler;
use super::graph::{Graph, LineIndex, NodeIndex};
use crate::domain::{PathStep, Route};

/// A search state: a station and the line used to arrive there.
///
/// The origin state has no arrival line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
struct SearchState {
    node: NodeIndex,
    arrived_on: Option<LineIndex>,
}

/// Priority-queue entry ordered so `BinaryHeap` pops the cheapest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct QueueEntry {
    cost: OrderedFloat<f64>,
    state: SearchState,
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed on cost for a min-heap; state breaks ties so that Ord
        // agrees with Eq.
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| self.state.cmp(&other.state))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Shortest-path search over a built graph.
pub struct PathSearch<'g, 'a> {
    graph: &'g Graph<'a>,
}

impl<'g, 'a> PathSearch<'g, 'a> {
    /// Create a search over `graph`.
    pub fn new(graph: &'g Graph<'a>) -> Self {
        Self { graph }
    }

    /// Find the cheapest path from `origin` to `destination`.
    ///
    /// Stations in `avoid` are never entered, except the origin and
    /// destination themselves. Returns `None` if either id is unknown,
    /// they are the same station, or no path exists.
    pub fn find_path(
        &self,
        origin: &str,
        destination: &str,
        avoid: &HashSet<NodeIndex>,
    ) -> Option<Vec<PathStep>> {
        let origin_idx = self.graph.node_index(origin)?;
        let destination_idx = self.graph.node_index(destination)?;
        if origin_idx == destination_idx {
            return None;
        }

        let penalty = self.graph.config().transfer_penalty_mins;

        let start = SearchState {
            node: origin_idx,
            arrived_on: None,
        };

        let mut dist: HashMap<SearchState, f64> = HashMap::new();
        let mut previous: HashMap<SearchState, SearchState> = HashMap::new();
        let mut settled: HashSet<SearchState> = HashSet::new();
        let mut queue = BinaryHeap::new();

        dist.insert(start, 0.0);
        queue.push(QueueEntry {
            cost: OrderedFloat(0.0),
            state: start,
        });

        let mut reached = None;

        while let Some(QueueEntry { cost, state }) = queue.pop() {
            if !settled.insert(state) {
                continue;
            }

            if state.node == destination_idx {
                reached = Some((state, cost.0));
                break;
            }

            for edge in self.graph.node(state.node).edges() {
                if avoid.contains(&edge.to) && edge.to != destination_idx && edge.to != origin_idx
                {
                    continue;
                }

                let next = SearchState {
                    node: edge.to,
                    arrived_on: Some(edge.line),
                };
                if settled.contains(&next) {
                    continue;
                }

                let transfer = match state.arrived_on {
                    Some(line) if line != edge.line => penalty,
                    _ => 0.0,
                };
                let candidate = cost.0 + edge.minutes + transfer;

                if candidate < dist.get(&next).copied().unwrap_or(f64::INFINITY) {
                    dist.insert(next, candidate);
                    previous.insert(next, state);
                    queue.push(QueueEntry {
                        cost: OrderedFloat(candidate),
                        state: next,
                    });
                }
            }
        }

        let Some((end, cost)) = reached else {
            debug!(
                origin,
                destination,
                settled = settled.len(),
                avoided = avoid.len(),
                "no path found"
            );
            return None;
        };

        trace!(origin, destination, cost, settled = settled.len(), "path found");

        Some(self.trace_back(end, &previous))
    }

    /// Walk the predecessor trace back from `end` to the origin.
    fn trace_back(
        &self,
        end: SearchState,
        previous: &HashMap<SearchState, SearchState>,
    ) -> Vec<PathStep> {
        let mut states = vec![end];
        let mut current = end;
        while let Some(&prev) = previous.get(&current) {
            states.push(prev);
            current = prev;
        }
        states.reverse();

        let first_line = states.iter().find_map(|s| s.arrived_on);

        states
            .iter()
            .filter_map(|s| {
                let line = s.arrived_on.or(first_line)?;
                Some(PathStep::new(
                    self.graph.station(s.node).id.clone(),
                    self.graph.line(line).id.clone(),
                ))
            })
            .collect()
    }
}

/// Find the primary route from `origin` to `destination`.
///
/// Returns `None` when the destination cannot be reached, including when
/// either station is unknown.
pub fn shortest_path(graph: &Graph<'_>, origin: &str, destination: &str) -> Option<Route> {
    route_avoiding(graph, origin, destination, &HashSet::new())
}

/// Search with an exclusion set, then assemble the path into a route.
pub(crate) fn route_avoiding(
    graph: &Graph<'_>,
    origin: &str,
    destination: &str,
    avoid: &HashSet<NodeIndex>,
) -> Option<Route> {
    let steps = PathSearch::new(graph).find_path(origin, destination, avoid)?;

    match RouteAssembler::new(graph).assemble(&steps) {
        Ok(route) => Some(route),
        Err(e) => {
            warn!(origin, destination, error = %e, "failed to assemble route");
            None
        }
    }
}

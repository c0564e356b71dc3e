//! Route planner for a fixed-topology metro network.
//!
//! Builds a station graph from line data, finds the cheapest route with a
//! transfer-aware Dijkstra search, optionally finds one alternate, and
//! assembles each path into fare-priced line segments.

mod alternate;
mod assemble;
mod config;
mod graph;
mod plan;
mod search;


pub use alternate::{AlternateStrategy, AvoidFirstTransfer, alternate_path};
pub use assemble::RouteAssembler;
pub use config::{EdgePolicy, PlannerConfig};
pub use graph::{Edge, Graph, GraphError, LineIndex, Node, NodeIndex};
pub use plan::{Planner, find_routes};
pub use search::{PathSearch, shortest_path};

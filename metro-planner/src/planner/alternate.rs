//! Alternate-route search.
//!
//! An alternate is a second itinerary offered next to the primary route.
//! Strategies implement [`AlternateStrategy`]; the planner is generic over
//! it so another strategy (e.g. a k-shortest-paths search) can replace
//! the default without touching route assembly.

use std::collections::HashSet;

use tracing::debug;

use super::graph::Graph;
use super::search::route_avoiding;
use crate::domain::Route;

/// Strategy for finding a second route given the primary one.
pub trait AlternateStrategy {
    /// Find an alternate route, or `None` if this strategy has nothing to
    /// offer. A missing alternate is not an error.
    fn alternate(
        &self,
        graph: &Graph<'_>,
        origin: &str,
        destination: &str,
        primary: &Route,
    ) -> Option<Route>;
}

/// Re-run the search without the primary route's first transfer station.
///
/// Direct primary routes get no alternate. At most one alternate is
/// produced.
#[derive(Debug, Clone, Copy, Default)]
pub struct AvoidFirstTransfer;

impl AlternateStrategy for AvoidFirstTransfer {
    fn alternate(
        &self,
        graph: &Graph<'_>,
        origin: &str,
        destination: &str,
        primary: &Route,
    ) -> Option<Route> {
        let transfer = primary.first_transfer()?;
        let avoid = HashSet::from([graph.node_index(transfer.as_str())?]);

        let route = route_avoiding(graph, origin, destination, &avoid);

        debug!(
            origin,
            destination,
            avoided = %transfer,
            found = route.is_some(),
            "alternate route search"
        );

        route
    }
}

/// Find an alternate to `primary` using [`AvoidFirstTransfer`].
pub fn alternate_path(
    graph: &Graph<'_>,
    origin: &str,
    destination: &str,
    primary: &Route,
) -> Option<Route> {
    AvoidFirstTransfer.alternate(graph, origin, destination, primary)
}

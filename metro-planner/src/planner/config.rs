//! Planner configuration.

use crate::domain::FareTable;

/// How the graph treats a station pair served by more than one line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EdgePolicy {
    /// Keep one edge per neighbor: the most recently processed line wins.
    #[default]
    LastLineWins,

    /// Keep one edge per (neighbor, line), so the search may ride any line
    /// serving the pair.
    KeepParallel,
}

/// Configuration parameters for route planning.
#[derive(Debug, Clone)]
pub struct PlannerConfig {
    /// Travel time between adjacent stations (minutes).
    pub edge_minutes: f64,

    /// Cost added by the search whenever a path changes line (minutes).
    pub transfer_penalty_mins: f64,

    /// Walking time charged per transfer (minutes).
    pub transfer_walk_mins: u32,

    /// Stop-count fare policy.
    pub fares: FareTable,

    /// Treatment of station pairs served by several lines.
    pub edge_policy: EdgePolicy,

    /// Refuse to plan over data with integrity problems instead of
    /// logging them and routing over what could be built.
    pub strict_integrity: bool,
}

impl PlannerConfig {
    /// Create a new configuration with the given timing parameters and
    /// defaults for everything else.
    pub fn new(edge_minutes: f64, transfer_penalty_mins: f64, transfer_walk_mins: u32) -> Self {
        Self {
            edge_minutes,
            transfer_penalty_mins,
            transfer_walk_mins,
            ..Self::default()
        }
    }

    /// Set the fare table.
    pub fn with_fares(mut self, fares: FareTable) -> Self {
        self.fares = fares;
        self
    }

    /// Set the parallel-edge policy.
    pub fn with_edge_policy(mut self, edge_policy: EdgePolicy) -> Self {
        self.edge_policy = edge_policy;
        self
    }

    /// Fail on integrity problems instead of degrading.
    pub fn strict(mut self) -> Self {
        self.strict_integrity = true;
        self
    }

    /// Estimated journey time in whole minutes.
    ///
    /// Rounds up, so 3 stops with no transfer (7.5 minutes) is 8.
    pub fn journey_minutes(&self, stops: usize, transfers: usize) -> u32 {
        let minutes =
            stops as f64 * self.edge_minutes + transfers as f64 * self.transfer_penalty_mins;
        minutes.ceil() as u32
    }

    /// Walking time for the given number of transfers.
    pub fn walking_minutes(&self, transfers: usize) -> u32 {
        transfers as u32 * self.transfer_walk_mins
    }
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            edge_minutes: 2.5,
            transfer_penalty_mins: 3.0,
            transfer_walk_mins: 3,
            fares: FareTable::default(),
            edge_policy: EdgePolicy::LastLineWins,
            strict_integrity: false,
        }
    }
}

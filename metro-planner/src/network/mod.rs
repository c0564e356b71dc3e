//! Network data: stations and lines.
//!
//! Provides the `Network` container supplied to the planner, lookups and
//! name search over it, integrity checks, and a process-wide store that
//! loads the data file once and replaces it only on explicit reload.

mod error;
mod integrity;
mod loader;

pub use error::NetworkError;
pub use integrity::{
    DuplicateReport, DuplicateStation, IntegrityWarning, check_integrity,
    find_dangling_references, find_duplicate_stations,
};
pub use loader::{NetworkStore, load_network, parse_network};

use serde::{Deserialize, Serialize};

use crate::domain::{Language, Line, Station};

/// Default number of results returned by [`Network::search_stations`].
pub const DEFAULT_SEARCH_LIMIT: usize = 10;

/// The full set of stations and lines.
///
/// Treated as immutable input: the planner reads it but never changes it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Network {
    pub stations: Vec<Station>,
    pub lines: Vec<Line>,
}

impl Network {
    /// Create a network from station and line records.
    pub fn new(stations: Vec<Station>, lines: Vec<Line>) -> Self {
        Self { stations, lines }
    }

    /// Look up a station by id.
    ///
    /// With duplicate ids the first record wins.
    pub fn station(&self, id: &str) -> Option<&Station> {
        self.stations.iter().find(|s| s.id.as_str() == id)
    }

    /// Look up a line by id.
    pub fn line(&self, id: &str) -> Option<&Line> {
        self.lines.iter().find(|l| l.id.as_str() == id)
    }

    /// Search stations by name.
    ///
    /// Matches case-insensitive substrings of the English name, and also
    /// of the Hindi name when `language` is Hindi. Returns at most `limit`
    /// stations in data order.
    ///
    /// The query is trimmed first, and a blank query matches nothing
    /// rather than every station.
    pub fn search_stations(&self, query: &str, language: Language, limit: usize) -> Vec<&Station> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return Vec::new();
        }

        self.stations
            .iter()
            .filter(|station| {
                let name_match = station.name.to_lowercase().contains(&query);
                let name_hi_match =
                    language == Language::Hi && station.name_hi.to_lowercase().contains(&query);
                name_match || name_hi_match
            })
            .take(limit)
            .collect()
    }

    /// Run every integrity check over this network.
    pub fn integrity_warnings(&self) -> Vec<IntegrityWarning> {
        check_integrity(&self.stations, &self.lines)
    }
}

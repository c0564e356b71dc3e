//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::{Language, Line, Route, RouteSegment, Station, StationId};
use crate::network::Network;

/// Request to search stations by name.
#[derive(Debug, Deserialize)]
pub struct StationSearchRequest {
    /// Search query (substring of the station name)
    pub q: String,

    /// Language code, `en` or `hi` (defaults to English)
    pub lang: Option<String>,

    /// Maximum number of results
    pub limit: Option<usize>,
}

/// Language selection for lookups that only need a display language.
#[derive(Debug, Default, Deserialize)]
pub struct LanguageQuery {
    pub lang: Option<String>,
}

impl LanguageQuery {
    pub fn language(&self) -> Language {
        language_of(self.lang.as_deref())
    }
}

/// Request to plan routes between two stations.
#[derive(Debug, Deserialize)]
pub struct RouteRequest {
    /// Origin station id
    pub from: String,

    /// Destination station id
    pub to: String,

    /// Language code for station and line names
    pub lang: Option<String>,
}

impl RouteRequest {
    pub fn language(&self) -> Language {
        language_of(self.lang.as_deref())
    }
}

fn language_of(code: Option<&str>) -> Language {
    code.map(Language::from_code).unwrap_or_default()
}

/// A station in search results and line listings.
#[derive(Debug, Serialize)]
pub struct StationResult {
    pub id: String,

    /// Name in the requested language
    pub name: String,

    /// Line ids serving this station
    pub lines: Vec<String>,

    pub is_interchange: bool,
}

impl StationResult {
    pub fn from_station(station: &Station, language: Language) -> Self {
        Self {
            id: station.id.to_string(),
            name: station.display_name(language).to_string(),
            lines: station.lines.iter().map(|l| l.to_string()).collect(),
            is_interchange: station.is_interchange,
        }
    }
}

/// Response for station search.
#[derive(Debug, Serialize)]
pub struct StationSearchResponse {
    pub stations: Vec<StationResult>,
}

/// A line with its stations in track order.
#[derive(Debug, Serialize)]
pub struct LineResult {
    pub id: String,
    pub name: String,
    pub color: String,
    pub stations: Vec<StopResult>,
}

impl LineResult {
    pub fn from_line(line: &Line, network: &Network, language: Language) -> Self {
        Self {
            id: line.id.to_string(),
            name: line.display_name(language).to_string(),
            color: line.color.clone(),
            stations: line
                .stations
                .iter()
                .map(|id| StopResult::resolve(id, network, language))
                .collect(),
        }
    }
}

/// Response listing every line.
#[derive(Debug, Serialize)]
pub struct LinesResponse {
    pub lines: Vec<LineResult>,
}

/// A station reference with its display name.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StopResult {
    pub id: String,

    /// Display name, or the id when the station has no record
    pub name: String,
}

impl StopResult {
    pub fn resolve(id: &StationId, network: &Network, language: Language) -> Self {
        let name = network
            .station(id.as_str())
            .map_or(id.as_str(), |s| s.display_name(language));

        Self {
            id: id.to_string(),
            name: name.to_string(),
        }
    }
}

/// A single-line leg of a route.
#[derive(Debug, Serialize)]
pub struct SegmentResult {
    /// Line id
    pub line: String,

    /// Line name in the requested language
    pub line_name: String,

    pub color: String,

    /// Stations ridden on this line, in travel order
    pub stations: Vec<StopResult>,
}

impl SegmentResult {
    pub fn from_segment(segment: &RouteSegment, network: &Network, language: Language) -> Self {
        let line_name = network
            .line(segment.line.as_str())
            .map_or(segment.line.as_str(), |l| l.display_name(language));

        Self {
            line: segment.line.to_string(),
            line_name: line_name.to_string(),
            color: segment.color.clone(),
            stations: segment
                .stations
                .iter()
                .map(|id| StopResult::resolve(id, network, language))
                .collect(),
        }
    }
}

/// A priced route option.
#[derive(Debug, Serialize)]
pub struct RouteResult {
    pub segments: Vec<SegmentResult>,

    /// Stations passed, not counting the origin
    pub total_stops: usize,

    /// Estimated journey time in minutes
    pub total_time: u32,

    /// Number of line changes
    pub transfers: usize,

    /// Fare in rupees
    pub fare: u32,

    /// Walking time at interchanges in minutes
    pub walking_time: u32,

    /// Stations where the passenger changes line
    pub transfer_stations: Vec<StopResult>,
}

impl RouteResult {
    pub fn from_route(route: &Route, network: &Network, language: Language) -> Self {
        Self {
            segments: route
                .segments()
                .iter()
                .map(|s| SegmentResult::from_segment(s, network, language))
                .collect(),
            total_stops: route.total_stops(),
            total_time: route.total_time(),
            transfers: route.transfers(),
            fare: route.fare(),
            walking_time: route.walking_time(),
            transfer_stations: route
                .transfer_stations()
                .into_iter()
                .map(|id| StopResult::resolve(id, network, language))
                .collect(),
        }
    }
}

/// Response for route planning.
///
/// `routes` is empty when the destination cannot be reached.
#[derive(Debug, Serialize)]
pub struct RoutesResponse {
    pub from: StopResult,
    pub to: StopResult,
    pub routes: Vec<RouteResult>,
}

/// Response after reloading the network data.
#[derive(Debug, Serialize)]
pub struct ReloadResponse {
    pub stations: usize,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

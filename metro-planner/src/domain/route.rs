//! Route types.
//!
//! A `Route` is the rider-facing result of a query: the line segments to
//! ride, with stop count, time, transfers, fare and walking time derived
//! from them.

use super::{DomainError, LineId, StationId};

/// One step of a path: a station and the line used to arrive there.
///
/// The first step of a path (the origin) was not arrived at by any line;
/// it carries the line of the step after it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PathStep {
    pub station: StationId,
    pub line: LineId,
}

impl PathStep {
    /// Creates a new path step.
    pub fn new(station: StationId, line: LineId) -> Self {
        Self { station, line }
    }
}

/// A maximal run of a route on a single line.
///
/// A transfer station is the last station of the segment being left; the
/// next segment starts at the first station reached on the new line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteSegment {
    pub line: LineId,
    pub stations: Vec<StationId>,
    /// Display color of the line.
    pub color: String,
}

impl RouteSegment {
    /// Returns the first station of the segment.
    pub fn first_station(&self) -> Option<&StationId> {
        self.stations.first()
    }

    /// Returns the last station of the segment.
    pub fn last_station(&self) -> Option<&StationId> {
        self.stations.last()
    }
}

/// A complete route from origin to destination.
///
/// # Invariants
///
/// - At least one segment, and no segment is empty
/// - `transfers == segments.len() - 1`
/// - `total_stops` is the number of stations on the route minus one
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    segments: Vec<RouteSegment>,
    total_stops: usize,
    total_time: u32,
    transfers: usize,
    fare: u32,
    walking_time: u32,
}

impl Route {
    /// Constructs a route from segments and the priced scalars.
    ///
    /// Stop and transfer counts are derived from the segments.
    ///
    /// # Errors
    ///
    /// Returns `Err` if there are no segments or any segment is empty.
    pub fn new(
        segments: Vec<RouteSegment>,
        total_time: u32,
        fare: u32,
        walking_time: u32,
    ) -> Result<Self, DomainError> {
        if segments.is_empty() {
            return Err(DomainError::EmptyRoute);
        }
        if let Some(empty) = segments.iter().find(|s| s.stations.is_empty()) {
            return Err(DomainError::EmptySegment(empty.line.clone()));
        }

        let station_count: usize = segments.iter().map(|s| s.stations.len()).sum();

        Ok(Route {
            total_stops: station_count - 1,
            transfers: segments.len() - 1,
            segments,
            total_time,
            fare,
            walking_time,
        })
    }

    /// Returns all segments in order.
    pub fn segments(&self) -> &[RouteSegment] {
        &self.segments
    }

    /// Number of stops travelled (stations on the route minus one).
    pub fn total_stops(&self) -> usize {
        self.total_stops
    }

    /// Estimated journey time in whole minutes, including transfers.
    pub fn total_time(&self) -> u32 {
        self.total_time
    }

    /// Number of line changes.
    pub fn transfers(&self) -> usize {
        self.transfers
    }

    pub fn fare(&self) -> u32 {
        self.fare
    }

    /// Minutes spent walking between platforms at transfers.
    pub fn walking_time(&self) -> u32 {
        self.walking_time
    }

    /// Returns true if the route stays on one line.
    pub fn is_direct(&self) -> bool {
        self.transfers == 0
    }

    /// Returns the origin station.
    pub fn origin(&self) -> &StationId {
        // Safe: validated non-empty at construction
        &self.segments[0].stations[0]
    }

    /// Returns the destination station.
    pub fn destination(&self) -> &StationId {
        // Safe: validated non-empty at construction
        let last = &self.segments[self.segments.len() - 1];
        &last.stations[last.stations.len() - 1]
    }

    /// Iterate every station on the route in travel order.
    pub fn stations(&self) -> impl Iterator<Item = &StationId> {
        self.segments.iter().flat_map(|s| s.stations.iter())
    }

    /// Returns the stations where the rider changes line, in order.
    pub fn transfer_stations(&self) -> Vec<&StationId> {
        let Some((_, leaving)) = self.segments.split_last() else {
            return Vec::new();
        };
        leaving.iter().filter_map(|s| s.last_station()).collect()
    }

    /// Returns the first transfer station, if any.
    pub fn first_transfer(&self) -> Option<&StationId> {
        if self.is_direct() {
            return None;
        }
        self.segments[0].last_station()
    }

    /// Returns the lines ridden, in order.
    pub fn lines(&self) -> impl Iterator<Item = &LineId> {
        self.segments.iter().map(|s| &s.line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segment(line: &str, stations: &[&str]) -> RouteSegment {
        RouteSegment {
            line: LineId::from(line),
            stations: stations.iter().map(|s| StationId::from(*s)).collect(),
            color: format!("{}-color", line),
        }
    }

    #[test]
    fn direct_route() {
        let route = Route::new(vec![segment("Red", &["a", "b", "c"])], 5, 10, 0).unwrap();

        assert_eq!(route.total_stops(), 2);
        assert_eq!(route.transfers(), 0);
        assert!(route.is_direct());
        assert_eq!(route.origin().as_str(), "a");
        assert_eq!(route.destination().as_str(), "c");
        assert!(route.transfer_stations().is_empty());
        assert!(route.first_transfer().is_none());
    }

    #[test]
    fn route_with_transfer() {
        let route = Route::new(
            vec![segment("Red", &["a", "b", "x"]), segment("Blue", &["y", "z"])],
            14,
            20,
            3,
        )
        .unwrap();

        assert_eq!(route.total_stops(), 4);
        assert_eq!(route.transfers(), 1);
        assert!(!route.is_direct());
        assert_eq!(route.destination().as_str(), "z");
        assert_eq!(route.first_transfer().map(|s| s.as_str()), Some("x"));

        let transfers: Vec<_> = route.transfer_stations().iter().map(|s| s.as_str()).collect();
        assert_eq!(transfers, vec!["x"]);

        let stations: Vec<_> = route.stations().map(|s| s.as_str()).collect();
        assert_eq!(stations, vec!["a", "b", "x", "y", "z"]);

        let lines: Vec<_> = route.lines().map(|l| l.as_str()).collect();
        assert_eq!(lines, vec!["Red", "Blue"]);
    }

    #[test]
    fn empty_route_rejected() {
        assert!(matches!(
            Route::new(Vec::new(), 0, 0, 0),
            Err(DomainError::EmptyRoute)
        ));
    }

    #[test]
    fn empty_segment_rejected() {
        let result = Route::new(vec![segment("Red", &["a"]), segment("Blue", &[])], 0, 0, 0);
        assert!(matches!(result, Err(DomainError::EmptySegment(line)) if line.as_str() == "Blue"));
    }

    #[test]
    fn single_station_route_has_zero_stops() {
        let route = Route::new(vec![segment("Red", &["a"])], 0, 10, 0).unwrap();
        assert_eq!(route.total_stops(), 0);
        assert_eq!(route.origin(), route.destination());
    }
}

//! Turning a raw path into a priced route.

use super::graph::Graph;
use crate::domain::{DomainError, PathStep, Route, RouteSegment};

/// Color used for a segment whose line has no record.
const FALLBACK_COLOR: &str = "primary";

/// Groups path steps into line segments and prices the result.
pub struct RouteAssembler<'g, 'a> {
    graph: &'g Graph<'a>,
}

impl<'g, 'a> RouteAssembler<'g, 'a> {
    pub fn new(graph: &'g Graph<'a>) -> Self {
        Self { graph }
    }

    /// Assemble a route from path steps ordered origin to destination.
    ///
    /// A new segment starts whenever the line changes, so a transfer
    /// station ends the segment being left. Time, walking time and fare
    /// come from the graph's planner config.
    ///
    /// # Errors
    ///
    /// Returns `Err` if `steps` is empty.
    pub fn assemble(&self, steps: &[PathStep]) -> Result<Route, DomainError> {
        let mut segments: Vec<RouteSegment> = Vec::new();

        for step in steps {
            match segments.last_mut() {
                Some(segment) if segment.line == step.line => {
                    segment.stations.push(step.station.clone());
                }
                _ => segments.push(RouteSegment {
                    line: step.line.clone(),
                    stations: vec![step.station.clone()],
                    color: self.color_of(step),
                }),
            }
        }

        let config = self.graph.config();
        let total_stops = steps.len().saturating_sub(1);
        let transfers = segments.len().saturating_sub(1);

        Route::new(
            segments,
            config.journey_minutes(total_stops, transfers),
            config.fares.fare_for(total_stops),
            config.walking_minutes(transfers),
        )
    }

    fn color_of(&self, step: &PathStep) -> String {
        self.graph
            .line_by_id(&step.line)
            .map(|line| line.color.as_str())
            .filter(|color| !color.is_empty())
            .unwrap_or(FALLBACK_COLOR)
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Line, LineId, Station, StationId};
    use crate::planner::PlannerConfig;

    fn steps(path: &[(&str, &str)]) -> Vec<PathStep> {
        path.iter()
            .map(|(station, line)| PathStep::new(StationId::from(*station), LineId::from(*line)))
            .collect()
    }

    fn fixture() -> (Vec<Station>, Vec<Line>) {
        let stations = ["a", "b", "c", "d", "e", "f"]
            .iter()
            .map(|id| Station::new(*id, id.to_uppercase(), &[]))
            .collect();
        let lines = vec![
            Line::new("Red", "#e53935", &["a", "b", "c"]),
            Line::new("Blue", "#1e88e5", &["c", "d", "e"]),
            Line::new("Green", "", &["e", "f"]),
        ];
        (stations, lines)
    }

    #[test]
    fn single_line_path_is_one_segment() {
        let (stations, lines) = fixture();
        let config = PlannerConfig::default();
        let graph = Graph::build(&stations, &lines, &config);

        let route = RouteAssembler::new(&graph)
            .assemble(&steps(&[("a", "Red"), ("b", "Red"), ("c", "Red")]))
            .unwrap();

        assert_eq!(route.segments().len(), 1);
        assert_eq!(route.segments()[0].color, "#e53935");
        assert_eq!(route.total_stops(), 2);
        assert_eq!(route.transfers(), 0);
        assert_eq!(route.total_time(), 5);
        assert_eq!(route.walking_time(), 0);
        assert_eq!(route.fare(), 10);
    }

    #[test]
    fn transfer_station_ends_the_segment_being_left() {
        let (stations, lines) = fixture();
        let config = PlannerConfig::default();
        let graph = Graph::build(&stations, &lines, &config);

        let path = steps(&[
            ("a", "Red"),
            ("b", "Red"),
            ("c", "Red"),
            ("d", "Blue"),
            ("e", "Blue"),
        ]);
        let route = RouteAssembler::new(&graph).assemble(&path).unwrap();

        let segments: Vec<Vec<&str>> = route
            .segments()
            .iter()
            .map(|s| s.stations.iter().map(|id| id.as_str()).collect())
            .collect();
        assert_eq!(segments, vec![vec!["a", "b", "c"], vec!["d", "e"]]);

        assert_eq!(route.total_stops(), 4);
        assert_eq!(route.transfers(), 1);
        assert_eq!(route.total_time(), 13); // 4 * 2.5 + 3
        assert_eq!(route.walking_time(), 3);
        assert_eq!(route.fare(), 20);
        assert_eq!(route.first_transfer().map(|s| s.as_str()), Some("c"));
    }

    #[test]
    fn segments_reproduce_the_input_path() {
        let (stations, lines) = fixture();
        let config = PlannerConfig::default();
        let graph = Graph::build(&stations, &lines, &config);

        let path = steps(&[
            ("a", "Red"),
            ("b", "Red"),
            ("c", "Red"),
            ("d", "Blue"),
            ("e", "Blue"),
            ("f", "Green"),
        ]);
        let route = RouteAssembler::new(&graph).assemble(&path).unwrap();

        let flattened: Vec<&StationId> = route.stations().collect();
        let expected: Vec<&StationId> = path.iter().map(|s| &s.station).collect();
        assert_eq!(flattened, expected);
        assert_eq!(route.transfers(), route.segments().len() - 1);
    }

    #[test]
    fn missing_color_falls_back() {
        let (stations, lines) = fixture();
        let config = PlannerConfig::default();
        let graph = Graph::build(&stations, &lines, &config);

        let route = RouteAssembler::new(&graph)
            .assemble(&steps(&[("e", "Green"), ("f", "Green")]))
            .unwrap();
        assert_eq!(route.segments()[0].color, FALLBACK_COLOR);

        let route = RouteAssembler::new(&graph)
            .assemble(&steps(&[("e", "Pink"), ("f", "Pink")]))
            .unwrap();
        assert_eq!(route.segments()[0].color, FALLBACK_COLOR);
    }

    #[test]
    fn fare_follows_stop_count() {
        let stations: Vec<Station> = (0..30)
            .map(|i| Station::new(format!("s{i}"), format!("S{i}"), &[]))
            .collect();
        let lines = vec![Line::new("Red", "#f00", &[])];
        let config = PlannerConfig::default();
        let graph = Graph::build(&stations, &lines, &config);
        let assembler = RouteAssembler::new(&graph);

        let fare_for_stops = |stops: usize| {
            let path: Vec<PathStep> = (0..=stops)
                .map(|i| PathStep::new(StationId::new(format!("s{i}")), LineId::from("Red")))
                .collect();
            assembler.assemble(&path).unwrap().fare()
        };

        assert_eq!(fare_for_stops(2), 10);
        assert_eq!(fare_for_stops(3), 20);
        assert_eq!(fare_for_stops(12), 30);
        assert_eq!(fare_for_stops(13), 40);
        assert_eq!(fare_for_stops(22), 50);
    }

    #[test]
    fn empty_path_is_an_error() {
        let (stations, lines) = fixture();
        let config = PlannerConfig::default();
        let graph = Graph::build(&stations, &lines, &config);

        assert!(matches!(
            RouteAssembler::new(&graph).assemble(&[]),
            Err(DomainError::EmptyRoute)
        ));
    }
}

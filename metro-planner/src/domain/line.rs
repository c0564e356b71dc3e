//! Line records.

use serde::{Deserialize, Serialize};

use super::{Language, LineId, StationId};

/// A physical rail line.
///
/// `stations` is in track order: only consecutive entries are adjacent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Line {
    pub id: LineId,
    pub name: String,
    #[serde(default)]
    pub name_hi: String,
    /// Display color, as supplied by the data file.
    #[serde(default)]
    pub color: String,
    pub stations: Vec<StationId>,
}

impl Line {
    /// Create a line over the given station ids.
    pub fn new(id: impl Into<String>, color: impl Into<String>, stations: &[&str]) -> Self {
        let id = LineId::new(id);
        Self {
            name: format!("{} Line", id),
            id,
            name_hi: String::new(),
            color: color.into(),
            stations: stations.iter().map(|s| StationId::from(*s)).collect(),
        }
    }

    /// Returns the name to show for the given language.
    pub fn display_name(&self, language: Language) -> &str {
        match language {
            Language::Hi if !self.name_hi.is_empty() => &self.name_hi,
            _ => &self.name,
        }
    }

    /// Iterate adjacent station pairs in track order.
    pub fn adjacent_pairs(&self) -> impl Iterator<Item = (&StationId, &StationId)> {
        self.stations.windows(2).map(|pair| (&pair[0], &pair[1]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adjacent_pairs_follow_track_order() {
        let line = Line::new("Red", "#e53935", &["a", "b", "c"]);
        let pairs: Vec<_> = line
            .adjacent_pairs()
            .map(|(a, b)| (a.as_str(), b.as_str()))
            .collect();
        assert_eq!(pairs, vec![("a", "b"), ("b", "c")]);
    }

    #[test]
    fn single_station_line_has_no_pairs() {
        let line = Line::new("Stub", "#000", &["a"]);
        assert_eq!(line.adjacent_pairs().count(), 0);
    }

    #[test]
    fn deserializes_record() {
        let json = r##"{"id": "Blue", "name": "Blue Line", "nameHi": "ब्लू लाइन", "color": "#1e88e5", "stations": ["a", "b"]}"##;
        let line: Line = serde_json::from_str(json).unwrap();
        assert_eq!(line.id, LineId::from("Blue"));
        assert_eq!(line.display_name(Language::Hi), "ब्लू लाइन");
        assert_eq!(line.stations.len(), 2);
    }
}

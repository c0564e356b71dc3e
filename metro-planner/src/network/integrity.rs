//! Data integrity checks for network data.
//!
//! Route planning assumes station ids are unique and that every station a
//! line references exists. Neither is guaranteed by the data file, so
//! these checks report problems without refusing the data.

use std::collections::{HashMap, HashSet};
use std::fmt;

use crate::domain::{Line, LineId, Station, StationId};

/// Two station records sharing one id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateStation {
    pub id: StationId,
    pub first_index: usize,
    pub first_name: String,
    pub second_index: usize,
    pub second_name: String,
}

impl fmt::Display for DuplicateStation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: records {} ({}) and {} ({})",
            self.id, self.first_index, self.first_name, self.second_index, self.second_name
        )
    }
}

/// Result of scanning station records for duplicate ids.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DuplicateReport {
    pub duplicates: Vec<DuplicateStation>,
    /// Number of station records scanned.
    pub total: usize,
    /// Number of distinct ids among them.
    pub unique: usize,
}

impl DuplicateReport {
    /// Returns true if no id appears twice.
    pub fn is_clean(&self) -> bool {
        self.duplicates.is_empty()
    }
}

/// A problem in the network data that does not stop route planning.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IntegrityWarning {
    /// Two station records share one id; the id resolves to the first
    #[error("duplicate station id {0}")]
    DuplicateStation(DuplicateStation),

    /// A line lists a station id that no station record has
    #[error("line {line} references unknown station {station}")]
    DanglingReference { line: LineId, station: StationId },
}

/// Scan station records for ids used more than once.
///
/// Each repeat is reported against the first record that used the id.
pub fn find_duplicate_stations(stations: &[Station]) -> DuplicateReport {
    let mut first_seen: HashMap<&StationId, usize> = HashMap::new();
    let mut duplicates = Vec::new();

    for (index, station) in stations.iter().enumerate() {
        match first_seen.get(&station.id) {
            Some(&first_index) => duplicates.push(DuplicateStation {
                id: station.id.clone(),
                first_index,
                first_name: stations[first_index].name.clone(),
                second_index: index,
                second_name: station.name.clone(),
            }),
            None => {
                first_seen.insert(&station.id, index);
            }
        }
    }

    DuplicateReport {
        duplicates,
        total: stations.len(),
        unique: first_seen.len(),
    }
}

/// Find line references to station ids that have no record.
///
/// Each (line, station) pair is reported once even if the line lists the
/// station several times.
pub fn find_dangling_references(stations: &[Station], lines: &[Line]) -> Vec<IntegrityWarning> {
    let known: HashSet<&StationId> = stations.iter().map(|s| &s.id).collect();
    let mut reported: HashSet<(&LineId, &StationId)> = HashSet::new();
    let mut warnings = Vec::new();

    for line in lines {
        for station in &line.stations {
            if !known.contains(station) && reported.insert((&line.id, station)) {
                warnings.push(IntegrityWarning::DanglingReference {
                    line: line.id.clone(),
                    station: station.clone(),
                });
            }
        }
    }

    warnings
}

/// Run every integrity check over the network data.
pub fn check_integrity(stations: &[Station], lines: &[Line]) -> Vec<IntegrityWarning> {
    let report = find_duplicate_stations(stations);
    let mut warnings: Vec<IntegrityWarning> = report
        .duplicates
        .into_iter()
        .map(IntegrityWarning::DuplicateStation)
        .collect();
    warnings.extend(find_dangling_references(stations, lines));
    warnings
}

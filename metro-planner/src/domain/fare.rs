//! Stop-count fare policy.

/// Error returned when building an invalid fare table.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FareError {
    /// Band limits must strictly increase.
    #[error("fare band limits must strictly increase (got {previous} then {next})")]
    UnorderedBands { previous: usize, next: usize },

    /// A later band (or the overflow fare) is cheaper than an earlier one.
    #[error("fares must not decrease with distance (got {previous} then {next})")]
    DecreasingFare { previous: u32, next: u32 },
}

/// One band of the fare table: journeys of at most `max_stops` cost `fare`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FareBand {
    pub max_stops: usize,
    pub fare: u32,
}

/// A monotonic step function from stop count to fare.
///
/// The table is a policy, not derived from distance. Fares are in whole
/// currency units.
///
/// # Examples
///
/// ```
/// use metro_planner::domain::FareTable;
///
/// let table = FareTable::default();
/// assert_eq!(table.fare_for(2), 10);
/// assert_eq!(table.fare_for(3), 20);
/// assert_eq!(table.fare_for(40), 50);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FareTable {
    bands: Vec<FareBand>,
    beyond: u32,
}

impl FareTable {
    /// Build a fare table from bands in ascending order plus the fare
    /// charged beyond the last band.
    pub fn new(bands: Vec<FareBand>, beyond: u32) -> Result<Self, FareError> {
        for pair in bands.windows(2) {
            if pair[1].max_stops <= pair[0].max_stops {
                return Err(FareError::UnorderedBands {
                    previous: pair[0].max_stops,
                    next: pair[1].max_stops,
                });
            }
            if pair[1].fare < pair[0].fare {
                return Err(FareError::DecreasingFare {
                    previous: pair[0].fare,
                    next: pair[1].fare,
                });
            }
        }
        if let Some(last) = bands.last()
            && beyond < last.fare
        {
            return Err(FareError::DecreasingFare {
                previous: last.fare,
                next: beyond,
            });
        }

        Ok(Self { bands, beyond })
    }

    /// Returns the fare for a journey of `stops` stops.
    pub fn fare_for(&self, stops: usize) -> u32 {
        self.bands
            .iter()
            .find(|band| stops <= band.max_stops)
            .map(|band| band.fare)
            .unwrap_or(self.beyond)
    }

    /// Returns the bands in ascending order.
    pub fn bands(&self) -> &[FareBand] {
        &self.bands
    }
}

impl Default for FareTable {
    fn default() -> Self {
        let band = |max_stops, fare| FareBand { max_stops, fare };
        Self {
            bands: vec![band(2, 10), band(5, 20), band(12, 30), band(21, 40)],
            beyond: 50,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_breakpoints() {
        let table = FareTable::default();
        assert_eq!(table.fare_for(0), 10);
        assert_eq!(table.fare_for(2), 10);
        assert_eq!(table.fare_for(3), 20);
        assert_eq!(table.fare_for(5), 20);
        assert_eq!(table.fare_for(6), 30);
        assert_eq!(table.fare_for(12), 30);
        assert_eq!(table.fare_for(13), 40);
        assert_eq!(table.fare_for(21), 40);
        assert_eq!(table.fare_for(22), 50);
        assert_eq!(table.fare_for(500), 50);
    }

    #[test]
    fn rejects_unordered_bands() {
        let bands = vec![
            FareBand { max_stops: 5, fare: 10 },
            FareBand { max_stops: 5, fare: 20 },
        ];
        assert_eq!(
            FareTable::new(bands, 30),
            Err(FareError::UnorderedBands { previous: 5, next: 5 })
        );
    }

    #[test]
    fn rejects_decreasing_fares() {
        let bands = vec![
            FareBand { max_stops: 2, fare: 20 },
            FareBand { max_stops: 4, fare: 10 },
        ];
        assert!(matches!(
            FareTable::new(bands, 30),
            Err(FareError::DecreasingFare { previous: 20, next: 10 })
        ));

        let bands = vec![FareBand { max_stops: 2, fare: 20 }];
        assert!(FareTable::new(bands, 5).is_err());
    }

    #[test]
    fn empty_table_charges_flat_fare() {
        let table = FareTable::new(Vec::new(), 15).unwrap();
        assert_eq!(table.fare_for(0), 15);
        assert_eq!(table.fare_for(99), 15);
    }

    #[test]
    fn error_display() {
        let err = FareError::UnorderedBands { previous: 5, next: 3 };
        assert_eq!(
            err.to_string(),
            "fare band limits must strictly increase (got 5 then 3)"
        );
    }
}

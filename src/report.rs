// 📋 Report Formatter - Fixed `{min, max}` shape for the award-interval query

use crate::error::Result;
use crate::intervals::{compute_extremes, IntervalExtremes, IntervalRecord};
use crate::store::RecordStore;
use crate::wins::qualifying_win_sequences;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Wire form of one interval record; the individual is exposed as `producer`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProducerInterval {
    pub producer: String,
    pub interval: i64,
    pub previous_win: i32,
    pub following_win: i32,
}

/// Response body of the award-interval query. Both arrays are always present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AwardIntervalReport {
    pub min: Vec<ProducerInterval>,
    pub max: Vec<ProducerInterval>,
}

impl From<IntervalRecord> for ProducerInterval {
    fn from(record: IntervalRecord) -> Self {
        Self {
            producer: record.individual,
            interval: record.interval,
            previous_win: record.previous_win,
            following_win: record.following_win,
        }
    }
}

impl From<IntervalExtremes> for AwardIntervalReport {
    fn from(extremes: IntervalExtremes) -> Self {
        Self {
            min: extremes.min.into_iter().map(Into::into).collect(),
            max: extremes.max.into_iter().map(Into::into).collect(),
        }
    }
}

/// Compute producer award intervals over a loaded store.
///
/// Individuals are visited in first-encounter order and gaps in ascending
/// year order, so repeated calls return identical reports.
pub fn producer_award_intervals(store: &RecordStore) -> Result<AwardIntervalReport> {
    let sequences = qualifying_win_sequences(store)?;
    let report = AwardIntervalReport::from(compute_extremes(&sequences));

    debug!(
        qualifying = sequences.len(),
        min = report.min.len(),
        max = report.max.len(),
        "Computed award intervals"
    );

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::IndividualId;

    #[test]
    fn test_empty_report_serializes_both_arrays() {
        let json = serde_json::to_value(AwardIntervalReport::default()).unwrap();

        assert_eq!(json, serde_json::json!({ "min": [], "max": [] }));
    }

    #[test]
    fn test_field_names_on_the_wire() {
        let report = AwardIntervalReport::from(IntervalExtremes {
            min: vec![],
            max: vec![IntervalRecord {
                individual_id: IndividualId(1),
                individual: "Matthew Vaughn".to_string(),
                interval: 13,
                previous_win: 2002,
                following_win: 2015,
            }],
        });

        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "min": [],
                "max": [{
                    "producer": "Matthew Vaughn",
                    "interval": 13,
                    "previousWin": 2002,
                    "followingWin": 2015
                }]
            })
        );
    }

    #[test]
    fn test_report_over_store() {
        let mut store = RecordStore::new();
        for (year, name) in [(1980, "John"), (1990, "John"), (2002, "Quick"), (2003, "Quick")] {
            let id = store.add_work(year, "Movie", "Studio", true);
            store.credit_individual(id, name).unwrap();
        }

        let report = producer_award_intervals(&store).unwrap();

        assert_eq!(report.min.len(), 1);
        assert_eq!(report.min[0].producer, "Quick");
        assert_eq!(report.min[0].interval, 1);
        assert_eq!(report.max.len(), 1);
        assert_eq!(report.max[0].producer, "John");
        assert_eq!(report.max[0].interval, 10);
    }
}

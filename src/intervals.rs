// 📏 Interval Aggregator - Global min/max gaps between consecutive wins
//
// Every consecutive pair of win years becomes a candidate record. Candidates
// are folded into running min and max sets; ties accumulate, a strictly
// better value resets the set. Membership of the result does not depend on
// the order candidates arrive in, so partial folds can be merged.

use crate::store::IndividualId;
use crate::wins::WinSequence;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

// ============================================================================
// CANDIDATE RECORD
// ============================================================================

/// Gap between two consecutive wins of one individual
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntervalRecord {
    pub individual_id: IndividualId,
    pub individual: String,
    pub interval: i64,
    pub previous_win: i32,
    pub following_win: i32,
}

/// Candidate records for one win sequence, ordered by right endpoint
pub fn candidate_intervals(sequence: &WinSequence<'_>) -> Vec<IntervalRecord> {
    sequence
        .years
        .windows(2)
        .map(|pair| IntervalRecord {
            individual_id: sequence.individual.id,
            individual: sequence.individual.name.clone(),
            interval: i64::from(pair[1]) - i64::from(pair[0]),
            previous_win: pair[0],
            following_win: pair[1],
        })
        .collect()
}

// ============================================================================
// EXTREMUM
// ============================================================================

/// A value plus every record tied at it
#[derive(Debug, Clone, PartialEq)]
struct Extremum {
    value: i64,
    records: Vec<IntervalRecord>,
}

impl Extremum {
    fn single(record: IntervalRecord) -> Self {
        Extremum {
            value: record.interval,
            records: vec![record],
        }
    }

    /// Fold one record in; `better` is the ordering that replaces the value
    fn offer(slot: &mut Option<Extremum>, record: &IntervalRecord, better: Ordering) {
        match slot {
            None => *slot = Some(Extremum::single(record.clone())),
            Some(current) => match record.interval.cmp(&current.value) {
                o if o == better => *current = Extremum::single(record.clone()),
                Ordering::Equal => current.records.push(record.clone()),
                _ => {}
            },
        }
    }

    fn combine(left: Option<Extremum>, right: Option<Extremum>, better: Ordering) -> Option<Extremum> {
        match (left, right) {
            (None, other) | (other, None) => other,
            (Some(mut l), Some(r)) => match r.value.cmp(&l.value) {
                o if o == better => Some(r),
                Ordering::Equal => {
                    l.records.extend(r.records);
                    Some(l)
                }
                _ => Some(l),
            },
        }
    }
}

// ============================================================================
// AGGREGATOR
// ============================================================================

/// Running fold over candidate records
#[derive(Debug, Clone, Default)]
pub struct IntervalAggregator {
    min: Option<Extremum>,
    max: Option<Extremum>,
}

/// Finished result: every record tied at the global minimum and maximum
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IntervalExtremes {
    pub min: Vec<IntervalRecord>,
    pub max: Vec<IntervalRecord>,
}

impl IntervalAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Both checks always run; a record lands in both sets only when
    /// it ties the minimum and the maximum at once
    pub fn push(&mut self, record: IntervalRecord) {
        Extremum::offer(&mut self.max, &record, Ordering::Greater);
        Extremum::offer(&mut self.min, &record, Ordering::Less);
    }

    /// Fold every gap of a win sequence
    pub fn push_sequence(&mut self, sequence: &WinSequence<'_>) {
        for record in candidate_intervals(sequence) {
            self.push(record);
        }
    }

    /// Combine two partial folds (ties from `self` come first)
    pub fn merge(self, other: IntervalAggregator) -> IntervalAggregator {
        IntervalAggregator {
            min: Extremum::combine(self.min, other.min, Ordering::Less),
            max: Extremum::combine(self.max, other.max, Ordering::Greater),
        }
    }

    pub fn min_value(&self) -> Option<i64> {
        self.min.as_ref().map(|e| e.value)
    }

    pub fn max_value(&self) -> Option<i64> {
        self.max.as_ref().map(|e| e.value)
    }

    pub fn finish(self) -> IntervalExtremes {
        IntervalExtremes {
            min: self.min.map(|e| e.records).unwrap_or_default(),
            max: self.max.map(|e| e.records).unwrap_or_default(),
        }
    }
}

/// Fold all sequences in the order given
pub fn compute_extremes(sequences: &[WinSequence<'_>]) -> IntervalExtremes {
    let mut aggregator = IntervalAggregator::new();
    for sequence in sequences {
        aggregator.push_sequence(sequence);
    }
    aggregator.finish()
}

// ============================================================================
// TESTS
// ============================================================================

// Award Intervals - Core Library
// Exposes all modules for use in CLI, API server, and tests

pub mod error;
pub mod store;
pub mod parser;
pub mod wins;
pub mod intervals;
pub mod report;

#[cfg(feature = "server")]
pub mod api;

// Re-export commonly used types
pub use error::{AwardsError, Result};
pub use store::{Individual, IndividualId, RecordStore, Work, WorkId};
pub use parser::{load_csv, load_reader, parse_winner, split_names, RawRecord, ParsedRecord};
pub use wins::{qualifying_win_sequences, win_years_for, WinSequence};
pub use intervals::{
    candidate_intervals, compute_extremes, IntervalAggregator, IntervalExtremes, IntervalRecord,
};
pub use report::{producer_award_intervals, AwardIntervalReport, ProducerInterval};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

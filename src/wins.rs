// 🏆 Win Extractor - Ascending win years per individual

use crate::error::Result;
use crate::store::{Individual, RecordStore};

/// Minimum number of wins needed to produce an interval
pub const MIN_WINS_FOR_INTERVAL: usize = 2;

/// Win years of one individual, ascending
#[derive(Debug, Clone, PartialEq)]
pub struct WinSequence<'a> {
    pub individual: &'a Individual,
    pub years: Vec<i32>,
}

/// One entry per winning work credited to the individual, sorted by year.
///
/// Equal years are kept (two wins in one year give a zero gap). The sort is
/// stable, so equal years stay in insertion order.
pub fn win_years_for(store: &RecordStore, individual: &Individual) -> Result<Vec<i32>> {
    let mut years: Vec<i32> = store
        .winning_works_credited_to(individual.id)?
        .iter()
        .map(|work| work.year)
        .collect();
    years.sort();
    Ok(years)
}

/// Win sequences for every individual with at least two wins,
/// in first-encounter order
pub fn qualifying_win_sequences(store: &RecordStore) -> Result<Vec<WinSequence<'_>>> {
    store
        .individuals_with_at_least_n_wins(MIN_WINS_FOR_INTERVAL)
        .into_iter()
        .map(|individual| {
            Ok(WinSequence {
                individual,
                years: win_years_for(store, individual)?,
            })
        })
        .collect()
}

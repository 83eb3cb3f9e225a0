// 📂 Record Parser - `;`-delimited award list → RecordStore
//
// Two passes over each row: index the work, then index its credits.
// Any malformed row aborts the whole load; there is no partial store.

use crate::error::{AwardsError, Result};
use crate::store::RecordStore;
use csv::{ReaderBuilder, StringRecord, Trim};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

/// Field delimiter of the record file
pub const DELIMITER: u8 = b';';

/// Header columns every record file must carry
pub const REQUIRED_COLUMNS: [&str; 5] = ["year", "title", "studios", "producers", "winner"];

// ============================================================================
// RAW RECORD
// ============================================================================

/// One row exactly as it appears in the file, before validation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawRecord {
    pub year: String,
    pub title: String,
    pub studios: String,
    pub producers: String,
    pub winner: String,
}

/// Validated row, ready to be inserted
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedRecord {
    pub year: i32,
    pub title: String,
    pub distributor: String,
    pub producers: Vec<String>,
    pub is_winner: bool,
}

impl RawRecord {
    /// Validate required fields; `line` is used for error reporting only
    pub fn validate(self, line: u64) -> Result<ParsedRecord> {
        let year_str = self.year.trim();
        if year_str.is_empty() {
            return Err(AwardsError::MissingField { line, field: "year" });
        }
        let year = year_str.parse::<i32>().map_err(|_| AwardsError::InvalidYear {
            line,
            value: self.year.clone(),
        })?;

        if self.title.trim().is_empty() {
            return Err(AwardsError::MissingField { line, field: "title" });
        }

        Ok(ParsedRecord {
            year,
            is_winner: parse_winner(&self.winner),
            producers: split_names(&self.producers),
            title: self.title,
            distributor: self.studios,
        })
    }
}

/// Only the case-insensitive literal "yes" is a win; anything else,
/// including an empty field, is not
pub fn parse_winner(raw: &str) -> bool {
    raw.to_lowercase() == "yes"
}

/// Split a comma-separated name list, trimming each name and dropping blanks
pub fn split_names(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(String::from)
        .collect()
}

// ============================================================================
// LOADERS
// ============================================================================

/// Build a fresh store from a record file on disk
pub fn load_csv(csv_path: &Path) -> Result<RecordStore> {
    let file = File::open(csv_path)?;
    let store = load_reader(file)?;

    info!(
        path = %csv_path.display(),
        works = store.work_count(),
        producers = store.individual_count(),
        credits = store.credit_count(),
        "Loaded award records"
    );

    Ok(store)
}

/// Build a fresh store from any reader carrying record-file content
pub fn load_reader<R: Read>(reader: R) -> Result<RecordStore> {
    let mut rdr = ReaderBuilder::new()
        .delimiter(DELIMITER)
        .has_headers(true)
        .trim(Trim::Headers)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    check_headers(&headers)?;

    let mut store = RecordStore::new();

    for result in rdr.records() {
        let record = result?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);

        let raw: RawRecord = record.deserialize(Some(&headers))?;
        let parsed = raw.validate(line)?;

        let work_id = store.add_work(parsed.year, &parsed.title, &parsed.distributor, parsed.is_winner);
        for name in &parsed.producers {
            store.credit_individual(work_id, name)?;
        }

        debug!(line, work = %work_id, credits = parsed.producers.len(), "Indexed record");
    }

    Ok(store)
}

fn check_headers(headers: &StringRecord) -> Result<()> {
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(AwardsError::MissingColumn { column });
        }
    }
    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "year;title;studios;producers;winner
1980;Can't Stop the Music;Associated Film Distribution;Allan Carr;yes
1980;Cruising;Lorimar Productions, United Artists;Jerry Weintraub;
1984;Bolero;Cannon Films;Bo Derek;yes
1986;Under the Cherry Moon;Warner Bros.;Bob Cavallo, Joe Ruffalo and Steve Fargnoli;Yes
";

    #[test]
    fn test_parse_winner_coercion() {
        assert!(parse_winner("yes"));
        assert!(parse_winner("YES"));
        assert!(parse_winner("Yes"));
        assert!(!parse_winner(""));
        assert!(!parse_winner("no"));
        assert!(!parse_winner("true"));
        assert!(!parse_winner(" yes"));
    }

    #[test]
    fn test_split_names() {
        assert_eq!(
            split_names(" Jane Doe ,John Roe,, , Quick Producer"),
            vec!["Jane Doe", "John Roe", "Quick Producer"]
        );
        assert!(split_names("").is_empty());
        assert!(split_names(" , ").is_empty());
    }

    #[test]
    fn test_load_reader_sample() {
        let store = load_reader(SAMPLE.as_bytes()).unwrap();

        assert_eq!(store.work_count(), 4);
        assert_eq!(store.individual_count(), 5);
        assert!(store.individual_by_name("Bob Cavallo").is_some());
        assert!(store.individual_by_name("Joe Ruffalo and Steve Fargnoli").is_some());

        let works = store.works();
        assert!(works[0].is_winner);
        assert!(!works[1].is_winner);
        assert!(works[3].is_winner);
        assert_eq!(works[1].distributor, "Lorimar Productions, United Artists");
        assert_eq!(works[0].title, "Can't Stop the Music");
    }

    #[test]
    fn test_duplicate_name_in_row_yields_single_credit() {
        let data = "year;title;studios;producers;winner\n2000;Movie;Studio;Ann, Ann ,Bob;yes\n";
        let store = load_reader(data.as_bytes()).unwrap();

        assert_eq!(store.individual_count(), 2);
        assert_eq!(store.credit_count(), 2);
    }

    #[test]
    fn test_missing_column_fails() {
        let data = "year;title;studios;producers\n1980;Movie;Studio;Ann\n";
        let err = load_reader(data.as_bytes()).unwrap_err();

        assert!(matches!(err, AwardsError::MissingColumn { column: "winner" }));
    }

    #[test]
    fn test_invalid_year_fails() {
        let data = "year;title;studios;producers;winner\n1980;Good;Studio;Ann;yes\nnineteen;Bad;Studio;Ann;yes\n";
        let err = load_reader(data.as_bytes()).unwrap_err();

        match err {
            AwardsError::InvalidYear { line, value } => {
                assert_eq!(line, 3);
                assert_eq!(value, "nineteen");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_blank_year_and_title_fail() {
        let blank_year = "year;title;studios;producers;winner\n;Movie;Studio;Ann;yes\n";
        assert!(matches!(
            load_reader(blank_year.as_bytes()).unwrap_err(),
            AwardsError::MissingField { field: "year", .. }
        ));

        let blank_title = "year;title;studios;producers;winner\n1980; ;Studio;Ann;yes\n";
        assert!(matches!(
            load_reader(blank_title.as_bytes()).unwrap_err(),
            AwardsError::MissingField { field: "title", .. }
        ));
    }

    #[test]
    fn test_short_row_fails() {
        let data = "year;title;studios;producers;winner\n1980;Movie;Studio\n";
        let err = load_reader(data.as_bytes()).unwrap_err();

        assert!(matches!(err, AwardsError::Csv(_)));
        assert!(err.is_format_error());
    }

    #[test]
    fn test_year_is_trimmed() {
        let data = "year;title;studios;producers;winner\n 1999 ;Movie;Studio;Ann;yes\n";
        let store = load_reader(data.as_bytes()).unwrap();

        assert_eq!(store.works()[0].year, 1999);
    }
}

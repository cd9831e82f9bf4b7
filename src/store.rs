// src/store.rs
//
// In-memory dataset, built once at process start and read-only afterwards.
// No disk cache: every start recomputes from the source.

use serde::Serialize;

use crate::aggregate;
use crate::config::options::Source;
use crate::error::IngestError;
use crate::ingest;

/// One normalized tournament final. All three fields are non-empty by
/// construction; rows that can't satisfy that never become records.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MatchRecord {
    pub year: String,
    pub winner: String,
    pub runner_up: String,
}

/// Aggregate wins for one country. Derived from the records, never stored
/// independently.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct WinCount {
    pub entity: String,
    pub wins: u32,
}

/// The canonical dataset: normalized records in source order plus the
/// derived win counts.
#[derive(Clone, Debug)]
pub struct Dataset {
    records: Vec<MatchRecord>,
    win_counts: Vec<WinCount>,
}

impl Dataset {
    /// One-shot initialization: read → normalize → aggregate.
    /// Fatal on `Fetch`/`SourceFormat`; there is no partial success.
    pub fn load(source: &Source) -> Result<Self, IngestError> {
        let records = ingest::collect(source)?;
        Ok(Self::from_records(records))
    }

    pub fn from_records(records: Vec<MatchRecord>) -> Self {
        let win_counts = aggregate::win_counts(&records);
        Self { records, win_counts }
    }

    /// All records, source order.
    pub fn records(&self) -> &[MatchRecord] {
        &self.records
    }

    /// Records for one year; empty when the year is absent (the UI renders
    /// that as "Data unavailable.", not as an error).
    pub fn records_for_year(&self, year: &str) -> Vec<&MatchRecord> {
        self.records.iter().filter(|r| r.year == year).collect()
    }

    /// Win counts, most wins first (ties in first-appearance order).
    pub fn win_counts(&self) -> &[WinCount] {
        &self.win_counts
    }

    /// Total wins for one country; 0 if it never won.
    pub fn wins_for(&self, entity: &str) -> u32 {
        self.win_counts
            .iter()
            .find(|w| w.entity == entity)
            .map_or(0, |w| w.wins)
    }

    /// Distinct years, source order. Feeds the year dropdown.
    pub fn years(&self) -> Vec<&str> {
        let mut years: Vec<&str> = Vec::new();
        for r in &self.records {
            if !years.contains(&r.year.as_str()) {
                years.push(&r.year);
            }
        }
        years
    }

    /// Winning countries in win-count order. Feeds the country dropdown.
    pub fn winners(&self) -> Vec<&str> {
        self.win_counts.iter().map(|w| w.entity.as_str()).collect()
    }

    /// The dashboard's summary sentence for one year, or None when the
    /// year is absent.
    pub fn final_summary(&self, year: &str) -> Option<String> {
        let rec = self.records.iter().find(|r| r.year == year)?;
        Some(format!(
            "In {}, {} won the FIFA World Cup, defeating {}.",
            rec.year, rec.winner, rec.runner_up
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Dataset {
        Dataset::from_records(vec![
            MatchRecord { year: s!("2018"), winner: s!("France"), runner_up: s!("Croatia") },
            MatchRecord { year: s!("2022"), winner: s!("Argentina"), runner_up: s!("France") },
        ])
    }

    #[test]
    fn year_queries() {
        let ds = sample();
        let hit = ds.records_for_year("2022");
        assert_eq!(hit.len(), 1);
        assert_eq!(hit[0].winner, "Argentina");
        assert!(ds.records_for_year("1999").is_empty());
    }

    #[test]
    fn summary_sentence() {
        let ds = sample();
        assert_eq!(
            ds.final_summary("2022").as_deref(),
            Some("In 2022, Argentina won the FIFA World Cup, defeating France.")
        );
        assert_eq!(ds.final_summary("1999"), None);
    }

    #[test]
    fn wins_for_absent_entity_is_zero() {
        let ds = sample();
        assert_eq!(ds.wins_for("France"), 1);
        assert_eq!(ds.wins_for("Brazil"), 0);
    }

    #[test]
    fn win_total_matches_record_count() {
        let ds = sample();
        let total: u32 = ds.win_counts().iter().map(|w| w.wins).sum();
        assert_eq!(total as usize, ds.records().len());
    }
}

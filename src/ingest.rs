// src/ingest.rs
//
// The normalizer front door: one source in, ordered MatchRecords out.
// Runs exactly once at startup; both paths are pure transformations after
// the single blocking read.

use std::fs;
use std::path::Path;

use crate::config::consts::{HDR_RUNNERS_UP, HDR_WINNERS, HDR_YEAR};
use crate::config::options::Source;
use crate::csv;
use crate::error::IngestError;
use crate::specs::finals;
use crate::store::MatchRecord;

/// Produce the ordered record sequence from either source kind.
pub fn collect(source: &Source) -> Result<Vec<MatchRecord>, IngestError> {
    match source {
        Source::Url(url) => finals::fetch(url),
        Source::File(path) => from_csv_file(path),
    }
}

fn from_csv_file(path: &Path) -> Result<Vec<MatchRecord>, IngestError> {
    let text = fs::read_to_string(path)
        .map_err(|e| IngestError::fetch(format!("read {}: {e}", path.display())))?;
    let records = map_csv(csv::parse_rows(&text, ','))?;
    logf!("Loaded {} finals from {}", records.len(), path.display());
    Ok(records)
}

/// Header-row lookup is by exact, case-sensitive name. Rows missing any of
/// the three retained fields are dropped entirely; order is preserved.
fn map_csv(mut rows: Vec<Vec<String>>) -> Result<Vec<MatchRecord>, IngestError> {
    if rows.is_empty() {
        return Err(IngestError::format(s!("empty file, expected a header row")));
    }
    let header = rows.remove(0);
    let col = |name: &str| -> Result<usize, IngestError> {
        header
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| IngestError::format(format!("missing required column: {name}")))
    };
    let year_col = col(HDR_YEAR)?;
    let winner_col = col(HDR_WINNERS)?;
    let runner_up_col = col(HDR_RUNNERS_UP)?;

    let mut records = Vec::with_capacity(rows.len());
    let mut dropped = 0usize;
    for row in rows {
        let cell = |i: usize| row.get(i).map(|c| c.trim()).unwrap_or("");
        let (year, winner, runner_up) = (cell(year_col), cell(winner_col), cell(runner_up_col));
        if year.is_empty() || winner.is_empty() || runner_up.is_empty() {
            dropped += 1;
            continue;
        }
        records.push(MatchRecord {
            year: s!(year),
            winner: s!(winner),
            runner_up: s!(runner_up),
        });
    }
    if dropped > 0 {
        logd!("Dropped {dropped} incomplete rows");
    }
    Ok(records)
}

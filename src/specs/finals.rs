// src/specs/finals.rs
//! Scraping spec for the World Cup finals results table.
//!
//! Ground truth: the first `<table>` (document order) whose first row has
//! at least `MIN_COLUMNS` cells. No scoring, no disambiguation beyond
//! "first match". The table's first 8 columns are reinterpreted
//! positionally as year / winner / score / runner-up / venue / location /
//! attendance / reference, regardless of what the page's headers say; only
//! year, winner and runner-up survive. If the page's schema drifts (columns
//! added, removed or reordered) the mapping misassigns fields — that is the
//! documented contract of the source, not something detected at runtime.

use crate::config::consts::{COL_RUNNER_UP, COL_WINNER, COL_YEAR, MIN_COLUMNS};
use crate::core::html::{next_tag_block_ci, strip_tags, tag_inner};
use crate::core::net;
use crate::core::sanitize::{normalize_entities, normalize_ws, strip_footnotes};
use crate::error::IngestError;
use crate::store::MatchRecord;

/// Retained columns: (label, source index). Everything else is discarded
/// after mapping.
const RETAINED: [(&str, usize); 3] = [
    ("year", COL_YEAR),
    ("winner", COL_WINNER),
    ("runner-up", COL_RUNNER_UP),
];

/// Fetch the page and extract the normalized finals records.
pub fn fetch(url: &str) -> Result<Vec<MatchRecord>, IngestError> {
    let (host, port, path) = net::split_url(url)?;
    logf!("Fetching finals table from {host}{path}");
    let doc = net::http_get(&host, port, &path)?;
    extract_records(&doc)
}

/// Pure extraction: select the table, validate the mapping, shape rows.
/// Deterministic for a given document; preserves source row order.
pub fn extract_records(doc: &str) -> Result<Vec<MatchRecord>, IngestError> {
    let (table, width) = select_table(doc)?;
    validate_mapping(width)?;

    let mut records = Vec::new();
    let mut dropped = 0usize;

    let mut pos = 0usize;
    while let Some((tr_s, tr_e)) = next_tag_block_ci(table, "<tr", "</tr>", pos) {
        let tr = &table[tr_s..tr_e];
        pos = tr_e;

        let (cells, td_count) = row_cells(tr);
        if td_count == 0 {
            continue; // all-<th> rows are header furniture
        }
        match map_row(&cells) {
            Some(rec) => records.push(rec),
            None => dropped += 1,
        }
    }

    logf!(
        "Selected table width {width}: {} records kept, {dropped} incomplete rows dropped",
        records.len()
    );
    Ok(records)
}

/* ---------------- helpers ---------------- */

/// First table whose first row has >= MIN_COLUMNS cells, plus that width.
fn select_table(doc: &str) -> Result<(&str, usize), IngestError> {
    let mut pos = 0usize;
    while let Some((tb_s, tb_e)) = next_tag_block_ci(doc, "<table", "</table>", pos) {
        let table = &doc[tb_s..tb_e];
        pos = tb_e;

        let width = first_row_width(table);
        if width >= MIN_COLUMNS {
            return Ok((table, width));
        }
    }
    Err(IngestError::format(format!(
        "no table with at least {MIN_COLUMNS} columns"
    )))
}

fn first_row_width(table: &str) -> usize {
    match next_tag_block_ci(table, "<tr", "</tr>", 0) {
        Some((s, e)) => row_cells(&table[s..e]).0.len(),
        None => 0,
    }
}

/// Every retained column must sit inside the selected table.
fn validate_mapping(width: usize) -> Result<(), IngestError> {
    for (label, idx) in RETAINED {
        if idx >= width {
            return Err(IngestError::format(format!(
                "schema mapping: {label} column {idx} out of range for table width {width}"
            )));
        }
    }
    Ok(())
}

/// Cells of one row, `<th>` and `<td>` in document order, cleaned.
/// Also reports how many were `<td>`, so callers can spot header rows.
fn row_cells(tr: &str) -> (Vec<String>, usize) {
    let mut cells = Vec::new();
    let mut td_count = 0usize;

    let mut pos = 0usize;
    loop {
        let th = next_tag_block_ci(tr, "<th", "</th>", pos);
        let td = next_tag_block_ci(tr, "<td", "</td>", pos);
        let (s, e, is_td) = match (th, td) {
            (Some((hs, he)), Some((ds, de))) => {
                if ds < hs {
                    (ds, de, true)
                } else {
                    (hs, he, false)
                }
            }
            (Some((hs, he)), None) => (hs, he, false),
            (None, Some((ds, de))) => (ds, de, true),
            (None, None) => break,
        };

        cells.push(clean_cell(&tr[s..e]));
        if is_td {
            td_count += 1;
        }
        pos = e;
    }

    (cells, td_count)
}

fn clean_cell(block: &str) -> String {
    let text = strip_tags(normalize_entities(tag_inner(block)));
    normalize_ws(&strip_footnotes(&text))
}

/// Apply the positional mapping; None if any retained cell is missing or
/// empty (the row is dropped entirely — no partial records).
fn map_row(cells: &[String]) -> Option<MatchRecord> {
    let year = cells.get(COL_YEAR)?;
    let winner = cells.get(COL_WINNER)?;
    let runner_up = cells.get(COL_RUNNER_UP)?;
    if year.is_empty() || winner.is_empty() || runner_up.is_empty() {
        return None;
    }
    Some(MatchRecord {
        year: year.clone(),
        winner: winner.clone(),
        runner_up: runner_up.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(width: usize, rows: &[&str]) -> String {
        let header: String = (0..width).map(|i| format!("<th>H{i}</th>")).collect();
        format!(
            "<table class=\"wikitable\"><tr>{header}</tr>{}</table>",
            rows.concat()
        )
    }

    #[test]
    fn first_wide_enough_table_wins() {
        // widths 3, 4, 7, 9 — the width-7 table is the first with >= 5
        let doc = format!(
            "{}{}{}{}",
            table(3, &[]),
            table(4, &[]),
            table(7, &["<tr><td>1930</td><td>Uruguay</td><td>4-2</td><td>Argentina</td><td>Estadio Centenario</td><td>Montevideo</td><td>68,346</td></tr>"]),
            table(9, &[]),
        );
        let records = extract_records(&doc).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].winner, "Uruguay");
    }

    #[test]
    fn no_qualifying_table_is_a_format_error() {
        let doc = format!("{}{}", table(2, &[]), table(4, &[]));
        let err = extract_records(&doc).unwrap_err();
        assert!(matches!(err, IngestError::SourceFormat(_)));
    }

    #[test]
    fn incomplete_rows_are_dropped() {
        let doc = table(
            5,
            &[
                "<tr><td>1950</td><td></td><td></td><td>Brazil</td><td></td></tr>",
                "<tr><td>1950</td><td>Uruguay</td><td>2-1</td><td>Brazil</td><td>Maracana</td></tr>",
            ],
        );
        let records = extract_records(&doc).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(
            records[0],
            MatchRecord {
                year: s!("1950"),
                winner: s!("Uruguay"),
                runner_up: s!("Brazil"),
            }
        );
    }

    #[test]
    fn th_year_cells_and_footnotes_are_handled() {
        // Year as a row-scope <th>, footnote markers on cells
        let doc = table(
            5,
            &["<tr><th scope=\"row\">1966[n 5]</th><td><a href=\"/wiki/England\">England</a>[12]</td><td>4-2</td><td>West&nbsp;Germany</td><td>Wembley</td></tr>"],
        );
        let records = extract_records(&doc).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].year, "1966");
        assert_eq!(records[0].winner, "England");
        assert_eq!(records[0].runner_up, "West Germany");
    }

    #[test]
    fn all_th_rows_are_skipped_entirely() {
        let doc = table(
            6,
            &["<tr><th>1930</th><th>Uruguay</th><th>4-2</th><th>Argentina</th><th>x</th><th>y</th></tr>"],
        );
        assert_eq!(extract_records(&doc).unwrap().len(), 0);
    }

    #[test]
    fn extraction_is_deterministic() {
        let doc = table(
            5,
            &[
                "<tr><td>2018</td><td>France</td><td>4-2</td><td>Croatia</td><td>Luzhniki</td></tr>",
                "<tr><td>2022</td><td>Argentina</td><td>3-3</td><td>France</td><td>Lusail</td></tr>",
            ],
        );
        let a = extract_records(&doc).unwrap();
        let b = extract_records(&doc).unwrap();
        assert_eq!(a, b);
        assert_eq!(a[0].year, "2018"); // source order preserved
        assert_eq!(a[1].year, "2022");
    }
}

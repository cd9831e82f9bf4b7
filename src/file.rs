// src/file.rs

use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::config::consts::{HDR_RUNNERS_UP, HDR_WINNERS, HDR_YEAR};
use crate::config::options::{ExportFormat, ExportOptions};
use crate::csv;
use crate::store::{Dataset, MatchRecord, WinCount};

/// JSON bundle shape the external dashboard consumes.
#[derive(Serialize)]
struct JsonExport<'a> {
    records: &'a [MatchRecord],
    win_counts: &'a [WinCount],
}

/// Write the dataset to a single file per the export options (path,
/// format, headers policy). Returns the path written to.
pub fn write_export(export: &ExportOptions, ds: &Dataset) -> Result<PathBuf, Box<dyn Error>> {
    let path = export.out_path();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }

    let contents = match export.format {
        ExportFormat::Json => {
            let bundle = JsonExport {
                records: ds.records(),
                win_counts: ds.win_counts(),
            };
            let mut text = serde_json::to_string_pretty(&bundle)?;
            text.push('\n');
            text
        }
        ExportFormat::Csv | ExportFormat::Tsv => {
            let sep = export.format.delim().unwrap_or(',');
            let headers = export.include_headers.then(record_headers);
            csv::rows_to_string(headers.as_deref(), &record_rows(ds), sep)
        }
    };

    fs::write(&path, contents)?;
    Ok(path)
}

fn record_headers() -> Vec<String> {
    vec![s!(HDR_YEAR), s!(HDR_WINNERS), s!(HDR_RUNNERS_UP)]
}

fn record_rows(ds: &Dataset) -> Vec<Vec<String>> {
    ds.records()
        .iter()
        .map(|r| vec![r.year.clone(), r.winner.clone(), r.runner_up.clone()])
        .collect()
}

pub fn ensure_directory(dir: &Path) -> Result<(), Box<dyn Error>> {
    if dir.exists() && !dir.is_dir() {
        return Err(format!("Path exists but is not a directory: {}", dir.display()).into());
    }
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }
    Ok(())
}

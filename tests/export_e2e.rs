// tests/export_e2e.rs
use std::fs;
use std::path::PathBuf;

use wc_finals::config::options::{ExportFormat, ExportOptions};
use wc_finals::file::write_export;
use wc_finals::{Dataset, MatchRecord};

fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("wcf_e2e_{}", name));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}

fn sample() -> Dataset {
    Dataset::from_records(vec![
        MatchRecord {
            year: "1930".into(),
            winner: "Uruguay".into(),
            runner_up: "Argentina".into(),
        },
        MatchRecord {
            year: "1950".into(),
            winner: "Uruguay".into(),
            runner_up: "Brazil".into(),
        },
        MatchRecord {
            year: "1966".into(),
            winner: "England".into(),
            runner_up: "West Germany".into(),
        },
    ])
}

#[test]
fn csv_with_headers_round_trips() {
    let dir = tmp_dir("csv");
    let mut export = ExportOptions::default();
    export.format = ExportFormat::Csv;
    export.include_headers = true;
    export.set_path(dir.join("finals.csv").to_str().unwrap());

    let written = write_export(&export, &sample()).unwrap();
    let text = fs::read_to_string(&written).unwrap();
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines[0], "Year,Winners,Runners-up");
    assert_eq!(lines[1], "1930,Uruguay,Argentina");
    assert_eq!(lines.len(), 4);
}

#[test]
fn tsv_without_headers() {
    let dir = tmp_dir("tsv");
    let mut export = ExportOptions::default();
    export.format = ExportFormat::Tsv;
    export.set_path(dir.join("finals.tsv").to_str().unwrap());

    let written = write_export(&export, &sample()).unwrap();
    assert!(written.to_string_lossy().ends_with("finals.tsv"));
    let text = fs::read_to_string(&written).unwrap();

    assert!(!text.starts_with("Year"));
    assert_eq!(text.lines().count(), 3);
    assert_eq!(text.lines().nth(2).unwrap(), "1966\tEngland\tWest Germany");
}

#[test]
fn json_bundle_has_records_and_counts() {
    let dir = tmp_dir("json");
    let mut export = ExportOptions::default();
    export.format = ExportFormat::Json;
    export.set_path(dir.join("finals.json").to_str().unwrap());

    let written = write_export(&export, &sample()).unwrap();
    let value: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&written).unwrap()).unwrap();

    let records = value["records"].as_array().unwrap();
    assert_eq!(records.len(), 3);
    assert_eq!(records[0]["winner"], "Uruguay");
    assert_eq!(records[0]["runner_up"], "Argentina");

    let counts = value["win_counts"].as_array().unwrap();
    assert_eq!(counts[0]["entity"], "Uruguay");
    assert_eq!(counts[0]["wins"], 2);
    let total: u64 = counts.iter().map(|w| w["wins"].as_u64().unwrap()).sum();
    assert_eq!(total as usize, records.len());
}

#[test]
fn export_creates_missing_directories() {
    let dir = tmp_dir("mkdirs");
    let mut export = ExportOptions::default();
    export.set_path(dir.join("nested/deeper/out.csv").to_str().unwrap());

    let written = write_export(&export, &sample()).unwrap();
    assert!(written.exists());
}

// src/cli.rs

use std::env;
use std::path::PathBuf;

use color_eyre::eyre::{Result, eyre};

use crate::config::options::{ExportFormat, ExportOptions, Source};
use crate::file;
use crate::store::Dataset;

pub struct Params {
    pub source: Source,
    pub year: Option<String>,
    pub winner: Option<String>,
    pub list_years: bool,
    pub list_winners: bool,
    pub out: Option<String>,
    pub format: ExportFormat,
    pub include_headers: bool,
}

impl Params {
    fn new() -> Self {
        Self {
            source: Source::default(),
            year: None,
            winner: None,
            list_years: false,
            list_winners: false,
            out: None,
            format: ExportFormat::Csv,
            include_headers: false,
        }
    }
}

pub fn run() -> Result<()> {
    let params = parse_cli()?;
    let dataset = Dataset::load(&params.source)?;

    let mut acted = false;

    if params.list_years {
        for year in dataset.years() {
            println!("{year}");
        }
        acted = true;
    }
    if params.list_winners {
        for winner in dataset.winners() {
            println!("{winner}");
        }
        acted = true;
    }
    if let Some(year) = &params.year {
        // Query miss is soft: a message, not an error.
        match dataset.final_summary(year) {
            Some(line) => println!("{line}"),
            None => println!("Data unavailable."),
        }
        acted = true;
    }
    if let Some(name) = &params.winner {
        println!("{},{}", name, dataset.wins_for(name));
        acted = true;
    }
    if let Some(out) = &params.out {
        let mut export = ExportOptions::default();
        export.format = params.format;
        export.include_headers = params.include_headers;
        export.set_path(out);
        let path = file::write_export(&export, &dataset).map_err(|e| {
            loge!("Export failed: {e}");
            eyre!("export: {e}")
        })?;
        println!("Wrote {}", path.display());
        acted = true;
    }

    // No flags: print the win-count table.
    if !acted {
        for wc in dataset.win_counts() {
            println!("{},{}", wc.entity, wc.wins);
        }
    }

    Ok(())
}

fn parse_cli() -> Result<Params> {
    let mut params = Params::new();

    let mut args = env::args().skip(1);
    while let Some(a) = args.next() {
        match a.as_str() {
            "--csv" => {
                let v = args.next().ok_or_else(|| eyre!("Missing path for --csv"))?;
                params.source = Source::File(PathBuf::from(v));
            }
            "--url" => {
                let v = args.next().ok_or_else(|| eyre!("Missing url for --url"))?;
                params.source = Source::Url(v);
            }
            "--year" => params.year = Some(args.next().ok_or_else(|| eyre!("Missing value for --year"))?),
            "--winner" => params.winner = Some(args.next().ok_or_else(|| eyre!("Missing value for --winner"))?),
            "--list-years" => params.list_years = true,
            "--list-winners" => params.list_winners = true,
            "-o" | "--out" => params.out = Some(args.next().ok_or_else(|| eyre!("Missing output path"))?),
            "--format" => {
                let v = args.next().ok_or_else(|| eyre!("Missing value for --format"))?;
                params.format = match v.to_ascii_lowercase().as_str() {
                    "csv" => ExportFormat::Csv,
                    "tsv" => ExportFormat::Tsv,
                    "json" => ExportFormat::Json,
                    other => return Err(eyre!("Unknown format: {other}")),
                };
            }
            "--include-headers" => params.include_headers = true,
            "-h" | "--help" => {
                eprintln!("{}", include_str!("cli_help.txt"));
                std::process::exit(0);
            }
            _ => return Err(eyre!("Unknown arg: {a}")),
        }
    }

    Ok(params)
}

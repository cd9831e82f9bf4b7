// src/config/options.rs

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use super::consts::*;

/// Where the raw finals table comes from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Source {
    /// Local delimited file with a header row.
    File(PathBuf),
    /// Remote HTML document; the first table with enough columns is used.
    Url(String),
}

impl Default for Source {
    fn default() -> Self {
        Source::File(PathBuf::from(DEFAULT_CSV_FILE))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Tsv,
    Json,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Tsv => "tsv",
            ExportFormat::Json => "json",
        }
    }

    /// Cell separator for the delimited formats; None for JSON.
    pub fn delim(&self) -> Option<char> {
        match self {
            ExportFormat::Csv => Some(','),
            ExportFormat::Tsv => Some('\t'),
            ExportFormat::Json => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    out_path: OutputPath,
    pub include_headers: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Csv,
            out_path: OutputPath::default(),
            include_headers: false,
        }
    }
}

impl ExportOptions {
    /// Resolved output file path. The extension follows the selected format
    /// unless the user supplied one explicitly via `set_path`.
    pub fn out_path(&self) -> PathBuf {
        let stem = self.out_path.file_stem.to_string_lossy();
        let ext = self
            .out_path
            .ext
            .as_deref()
            .unwrap_or_else(|| self.format.ext());
        self.out_path.dir.join(format!("{stem}.{ext}"))
    }

    /// Parse a user-supplied path into dir + stem (+ explicit extension).
    pub fn set_path(&mut self, text: &str) {
        let p = Path::new(text.trim());
        if let Some(parent) = p.parent() {
            if !parent.as_os_str().is_empty() {
                self.out_path.dir = parent.to_path_buf();
            }
        }
        if let Some(stem) = p.file_stem() {
            self.out_path.file_stem = stem.to_os_string();
        }
        self.out_path.ext = p
            .extension()
            .map(|e| e.to_string_lossy().into_owned());
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct OutputPath {
    dir: PathBuf,
    file_stem: OsString, // without extension
    ext: Option<String>, // user-supplied extension wins over format
}

impl Default for OutputPath {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(DEFAULT_OUT_DIR),
            file_stem: OsString::from(DEFAULT_FILE_STEM),
            ext: None,
        }
    }
}

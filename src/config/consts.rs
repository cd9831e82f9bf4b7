// src/config/consts.rs

// Net
pub const HTTP_PORT: u16 = 80;
pub const HTTP_TIMEOUT_SECS: u64 = 15;
pub const USER_AGENT: &str = "wc_finals/0.2";

// Default sources
pub const DEFAULT_CSV_FILE: &str = "data/world_cup_data.csv";

// Table selection: first table (document order) whose first row has at
// least this many cells.
pub const MIN_COLUMNS: usize = 5;

// Positional schema for the scraped table. The first 8 columns are
// reinterpreted in this order regardless of the source's header text;
// only year/winner/runner-up survive normalization.
pub const COL_YEAR: usize = 0;
pub const COL_WINNER: usize = 1;
pub const COL_SCORE: usize = 2;
pub const COL_RUNNER_UP: usize = 3;
pub const COL_VENUE: usize = 4;
pub const COL_LOCATION: usize = 5;
pub const COL_ATTENDANCE: usize = 6;
pub const COL_REFERENCE: usize = 7;

// CSV header names, matched case-sensitively.
pub const HDR_YEAR: &str = "Year";
pub const HDR_WINNERS: &str = "Winners";
pub const HDR_RUNNERS_UP: &str = "Runners-up";

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const DEFAULT_FILE_STEM: &str = "finals";

// Dashboard host
pub const PORT_ENV: &str = "PORT";
pub const DEFAULT_PORT: u16 = 10000;

// Logging
pub const LOG_FILE: &str = "debug.log";

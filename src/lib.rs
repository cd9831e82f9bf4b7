// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod specs;

pub mod aggregate;
pub mod csv;
pub mod file;
pub mod ingest;
pub mod store;

pub use config::options::Source;
pub use error::IngestError;
pub use store::{Dataset, MatchRecord, WinCount};

//! `blk-output` — schedule export.
//!
//! | Module     | Contents                                                       |
//! |------------|----------------------------------------------------------------|
//! | [`csv`]    | `SUMMARY_HEADER`, `write_summary_csv`, `summary_csv`           |
//! | [`writer`] | `ReportWriter` trait, `export_report`                          |
//! | [`file`]   | `FileReportWriter` — `vehicle_summary.csv` + `event_log.txt`   |
//!
//! # Usage
//!
//! ```rust,ignore
//! use blk_output::{FileReportWriter, export_report};
//!
//! let mut writer = FileReportWriter::new(Path::new("./out"))?;
//! export_report(&mut writer, &vehicles)?;
//! ```

pub mod csv;
pub mod error;
pub mod file;
pub mod writer;


pub use self::csv::{SUMMARY_HEADER, summary_csv, write_summary_csv};
pub use error::{OutputError, OutputResult};
pub use file::{EVENT_LOG_FILE, FileReportWriter, SUMMARY_FILE};
pub use writer::{ReportWriter, export_report};

//! Directory-backed report writer.
//!
//! Creates two files in the configured output directory:
//! - `vehicle_summary.csv`
//! - `event_log.txt`

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use csv::Writer;

use blk_timeline::{SummaryRow, VehicleEvent};

use crate::OutputResult;
use crate::csv::{SUMMARY_HEADER, write_rows};
use crate::writer::ReportWriter;

pub const SUMMARY_FILE: &str = "vehicle_summary.csv";
pub const EVENT_LOG_FILE: &str = "event_log.txt";

pub struct FileReportWriter {
    summary:  Writer<File>,
    events:   BufWriter<File>,
    finished: bool,
}

impl FileReportWriter {
    /// Create (or truncate) both files in `dir` and write the CSV header.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut summary = Writer::from_path(dir.join(SUMMARY_FILE))?;
        summary.write_record(SUMMARY_HEADER)?;

        let events = BufWriter::new(File::create(dir.join(EVENT_LOG_FILE))?);

        Ok(Self { summary, events, finished: false })
    }
}

impl ReportWriter for FileReportWriter {
    fn write_summary(&mut self, rows: &[SummaryRow]) -> OutputResult<()> {
        write_rows(&mut self.summary, rows)
    }

    fn write_events(&mut self, events: &[VehicleEvent]) -> OutputResult<()> {
        for event in events {
            writeln!(self.events, "{event}")?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.summary.flush()?;
        self.events.flush()?;
        Ok(())
    }
}

//! The `ReportWriter` trait implemented by export backends.

use blk_assign::Vehicle;
use blk_timeline::{SummaryRow, VehicleEvent, summary_rows, vehicle_events};

use crate::OutputResult;

/// A sink for the two schedule reports.
pub trait ReportWriter {
    /// Write per-vehicle summary rows.
    fn write_summary(&mut self, rows: &[SummaryRow]) -> OutputResult<()>;

    /// Write chronologically ordered leg events.
    fn write_events(&mut self, events: &[VehicleEvent]) -> OutputResult<()>;

    /// Flush and close all underlying handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}

/// Write both reports for `vehicles` and finish the writer.
pub fn export_report<W: ReportWriter + ?Sized>(writer: &mut W, vehicles: &[Vehicle]) -> OutputResult<()> {
    writer.write_summary(&summary_rows(vehicles))?;
    writer.write_events(&vehicle_events(vehicles))?;
    writer.finish()
}

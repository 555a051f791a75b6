//! Vehicle summary CSV.
//!
//! One row per vehicle under [`SUMMARY_HEADER`].  Minutes are rounded to the
//! nearest whole minute (see [`blk_timeline::round_minutes`]).

use std::io;

use csv::Writer;

use blk_assign::Vehicle;
use blk_timeline::{SummaryRow, summary_rows};

use crate::OutputResult;

pub const SUMMARY_HEADER: [&str; 5] = [
    "Bus ID",
    "Route(s)",
    "Total Trips",
    "Commercial Time (min)",
    "Empty Time (min)",
];

/// One record per row; the caller writes the header.
pub(crate) fn write_rows<W: io::Write>(out: &mut Writer<W>, rows: &[SummaryRow]) -> OutputResult<()> {
    for row in rows {
        let routes = row.routes.iter().map(|r| r.as_str()).collect::<Vec<_>>().join(";");
        out.write_record(&[
            row.vehicle_id.to_string(),
            routes,
            row.trip_count.to_string(),
            row.commercial_minutes.to_string(),
            row.empty_minutes.to_string(),
        ])?;
    }
    Ok(())
}

/// Write the summary CSV for `vehicles` to `writer`.
pub fn write_summary_csv<W: io::Write>(writer: W, vehicles: &[Vehicle]) -> OutputResult<()> {
    let mut out = Writer::from_writer(writer);
    out.write_record(SUMMARY_HEADER)?;
    write_rows(&mut out, &summary_rows(vehicles))?;
    out.flush()?;
    Ok(())
}

/// The summary CSV for `vehicles` as a string.
pub fn summary_csv(vehicles: &[Vehicle]) -> OutputResult<String> {
    let mut buf = Vec::new();
    write_summary_csv(&mut buf, vehicles)?;
    Ok(String::from_utf8(buf)?)
}

//! GTFS-style CSV trip loader.
//!
//! # CSV format
//!
//! Two files, as in a GTFS feed.  Extra columns are ignored.
//!
//! ```csv
//! # trips.txt
//! route_id,service_id,trip_id,direction_id
//! R1,WEEKDAY,T1,0
//!
//! # stop_times.txt
//! trip_id,arrival_time,departure_time,stop_id,stop_sequence
//! T1,08:00:00,08:00:00,X,1
//! T1,08:30:00,08:30:00,Y,2
//! ```
//!
//! `direction_id` may be empty or missing (→ 0).  Times are kept as text and
//! resolved later by the normalizer, so the configured parse policy applies.
//! Trips come back in `trips.txt` order; stop-times referencing a trip that
//! is not in `trips.txt` are skipped with a warning.

use std::collections::hash_map::Entry;
use std::io::Read;
use std::path::Path;

use log::warn;
use rustc_hash::FxHashMap;
use serde::Deserialize;

use blk_core::{RouteId, StopId, TripId};

use crate::raw::{RawStopTime, RawTime, RawTrip};
use crate::{TimetableError, TimetableResult};

// ── CSV records ───────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct TripRecord {
    route_id:     String,
    trip_id:      String,
    #[serde(default)]
    direction_id: Option<u8>,
}

#[derive(Deserialize)]
struct StopTimeRecord {
    trip_id:        String,
    #[serde(default)]
    arrival_time:   String,
    #[serde(default)]
    departure_time: String,
    stop_id:        String,
    stop_sequence:  u32,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load raw trips from `trips.txt` and `stop_times.txt` inside `dir`.
pub fn load_gtfs_dir(dir: &Path) -> TimetableResult<Vec<RawTrip>> {
    let trips = std::fs::File::open(dir.join("trips.txt"))?;
    let stop_times = std::fs::File::open(dir.join("stop_times.txt"))?;
    load_gtfs_readers(trips, stop_times)
}

/// Like [`load_gtfs_dir`] but accepts any `Read` sources.
///
/// Useful for testing (pass a `std::io::Cursor`) or embedded fixtures.
pub fn load_gtfs_readers<T: Read, S: Read>(trips: T, stop_times: S) -> TimetableResult<Vec<RawTrip>> {
    // ── trips.txt ─────────────────────────────────────────────────────────
    let mut raw: Vec<RawTrip> = Vec::new();
    let mut by_id: FxHashMap<String, usize> = FxHashMap::default();

    for result in csv::Reader::from_reader(trips).deserialize::<TripRecord>() {
        let row = result.map_err(|e| TimetableError::Parse(e.to_string()))?;
        match by_id.entry(row.trip_id) {
            Entry::Occupied(e) => warn!("trips.txt lists trip {} twice; keeping the first", e.key()),
            Entry::Vacant(e) => {
                raw.push(RawTrip {
                    trip_id:      TripId::new(e.key().as_str()),
                    route_id:     RouteId::new(row.route_id),
                    direction_id: row.direction_id.unwrap_or(0),
                    stop_times:   Vec::new(),
                });
                e.insert(raw.len() - 1);
            }
        }
    }

    // ── stop_times.txt ────────────────────────────────────────────────────
    for result in csv::Reader::from_reader(stop_times).deserialize::<StopTimeRecord>() {
        let row = result.map_err(|e| TimetableError::Parse(e.to_string()))?;
        let Some(&i) = by_id.get(&row.trip_id) else {
            warn!("stop_times.txt references unknown trip {}; skipped", row.trip_id);
            continue;
        };
        raw[i].stop_times.push(RawStopTime {
            stop_id:        StopId::new(row.stop_id),
            stop_sequence:  row.stop_sequence,
            arrival_time:   RawTime::Text(row.arrival_time),
            departure_time: RawTime::Text(row.departure_time),
        });
    }

    Ok(raw)
}

//! Trip normalization: raw records → sorted, seconds-based [`Trip`]s.
//!
//! # Algorithm
//!
//! For each raw trip:
//!
//! 1. Resolve every arrival/departure to seconds (see [`TimeParsePolicy`]).
//! 2. Stable-sort stop-times by `stop_sequence`.
//! 3. Drop the trip if fewer than two stop-times remain.
//! 4. `start_time` = first departure, `end_time` = last arrival.  If
//!    `end_time < start_time` the trip crossed midnight: add 86 400 s once to
//!    `end_time` and to every later stop time earlier than `start_time`.
//!
//! The resulting collection is stable-sorted by `start_time`, so trips that
//! start together keep their input order.  Trips spanning more than 24 h are
//! not supported.  A rollover that would overflow `u32` seconds makes the
//! trip invalid: the lenient policy drops it with a warning, the strict
//! policy reports [`TimetableError::InvalidTime`].

use log::{debug, warn};

use blk_core::{CoreError, CoreResult, ServiceTime, TimeParsePolicy, TripId};

use crate::raw::{RawStopTime, RawTime, RawTrip};
use crate::trip::{StopTime, Trip};
use crate::{TimetableError, TimetableResult};

/// Normalize with the lenient policy: malformed times become 0 s.
///
/// Never fails; short trips are dropped silently (logged at debug level) and
/// trips whose midnight rollover overflows are dropped with a warning.
pub fn normalize_trips(raw: &[RawTrip]) -> Vec<Trip> {
    let mut trips: Vec<Trip> = raw
        .iter()
        .filter_map(|r| {
            let stop_times = r
                .stop_times
                .iter()
                .map(|st| resolve_lenient(&r.trip_id, st))
                .collect();
            build_trip(r, stop_times).unwrap_or_else(|e| {
                warn!("dropping trip {}: {e}", r.trip_id);
                None
            })
        })
        .collect();
    trips.sort_by_key(|t| t.start_time);
    trips
}

/// Normalize with the strict policy.
///
/// # Errors
///
/// - [`TimetableError::InvalidTime`] for the first malformed time found.
/// - [`TimetableError::DuplicateSequence`] if a trip repeats a
///   `stop_sequence`.
pub fn try_normalize_trips(raw: &[RawTrip]) -> TimetableResult<Vec<Trip>> {
    let mut trips = Vec::with_capacity(raw.len());
    for r in raw {
        let stop_times = r
            .stop_times
            .iter()
            .map(|st| {
                resolve_strict(st).map_err(|source| TimetableError::InvalidTime {
                    trip_id: r.trip_id.clone(),
                    source,
                })
            })
            .collect::<TimetableResult<Vec<_>>>()?;

        let mut sequences: Vec<u32> = stop_times.iter().map(|st| st.stop_sequence).collect();
        sequences.sort_unstable();
        if let Some(w) = sequences.windows(2).find(|w| w[0] == w[1]) {
            return Err(TimetableError::DuplicateSequence {
                trip_id:  r.trip_id.clone(),
                sequence: w[0],
            });
        }

        let trip = build_trip(r, stop_times).map_err(|source| TimetableError::InvalidTime {
            trip_id: r.trip_id.clone(),
            source,
        })?;
        trips.extend(trip);
    }
    trips.sort_by_key(|t| t.start_time);
    Ok(trips)
}

/// Dispatch on a configured [`TimeParsePolicy`].
pub fn normalize_with_policy(raw: &[RawTrip], policy: TimeParsePolicy) -> TimetableResult<Vec<Trip>> {
    match policy {
        TimeParsePolicy::Lenient => Ok(normalize_trips(raw)),
        TimeParsePolicy::Strict  => try_normalize_trips(raw),
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn resolve_strict(st: &RawStopTime) -> CoreResult<StopTime> {
    Ok(StopTime {
        stop_id:        st.stop_id.clone(),
        stop_sequence:  st.stop_sequence,
        arrival_time:   st.arrival_time.resolve()?,
        departure_time: st.departure_time.resolve()?,
    })
}

fn resolve_lenient(trip_id: &TripId, st: &RawStopTime) -> StopTime {
    let resolve = |t: &RawTime| {
        t.resolve().unwrap_or_else(|e| {
            warn!("trip {trip_id} stop {}: {e}; using 00:00:00", st.stop_id);
            ServiceTime::ZERO
        })
    };
    StopTime {
        stop_id:        st.stop_id.clone(),
        stop_sequence:  st.stop_sequence,
        arrival_time:   resolve(&st.arrival_time),
        departure_time: resolve(&st.departure_time),
    }
}

fn build_trip(raw: &RawTrip, mut stop_times: Vec<StopTime>) -> CoreResult<Option<Trip>> {
    if stop_times.len() < 2 {
        debug!("dropping trip {}: {} stop-time(s)", raw.trip_id, stop_times.len());
        return Ok(None);
    }
    stop_times.sort_by_key(|st| st.stop_sequence);

    let start_time = stop_times[0].departure_time;
    let mut end_time = stop_times[stop_times.len() - 1].arrival_time;

    if end_time < start_time {
        end_time = roll_over(end_time)?;
        // The origin may legitimately arrive before it departs; leave it alone.
        for st in stop_times.iter_mut().skip(1) {
            for time in [&mut st.arrival_time, &mut st.departure_time] {
                if *time < start_time {
                    *time = roll_over(*time)?;
                }
            }
        }
    }

    Ok(Some(Trip {
        trip_id:      raw.trip_id.clone(),
        route_id:     raw.route_id.clone(),
        direction_id: raw.direction_id,
        stop_times,
        start_time,
        end_time,
    }))
}

fn roll_over(time: ServiceTime) -> CoreResult<ServiceTime> {
    time.checked_next_day()
        .ok_or_else(|| CoreError::InvalidTime(format!("{time} overflows when moved past midnight")))
}

//! Unit tests for blk-timetable.

use blk_core::{RouteId, ServiceTime, StopId, TripId};

use crate::{RawStopTime, RawTime, RawTrip};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn st(stop: &str, seq: u32, arr: impl Into<RawTime>, dep: impl Into<RawTime>) -> RawStopTime {
    RawStopTime {
        stop_id:        StopId::from(stop),
        stop_sequence:  seq,
        arrival_time:   arr.into(),
        departure_time: dep.into(),
    }
}

fn raw_trip(id: &str, route: &str, stop_times: Vec<RawStopTime>) -> RawTrip {
    RawTrip {
        trip_id:      TripId::from(id),
        route_id:     RouteId::from(route),
        direction_id: 0,
        stop_times,
    }
}

/// X → Y, 08:00–08:30.
fn simple(id: &str, route: &str, dep: &str, arr: &str) -> RawTrip {
    raw_trip(id, route, vec![st("X", 1, dep, dep), st("Y", 2, arr, arr)])
}

// ── Normalizer ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod normalize {
    use super::*;
    use crate::{TimetableError, normalize_trips, normalize_with_policy, try_normalize_trips};
    use blk_core::TimeParsePolicy;

    #[test]
    fn start_and_end_from_first_departure_last_arrival() {
        let trips = normalize_trips(&[raw_trip("T1", "R1", vec![
            st("X", 1, "07:58:00", "08:00:00"),
            st("M", 2, "08:10:00", "08:11:00"),
            st("Y", 3, "08:30:00", "08:35:00"),
        ])]);
        assert_eq!(trips.len(), 1);
        assert_eq!(trips[0].start_time, ServiceTime::from_hms(8, 0, 0));
        assert_eq!(trips[0].end_time, ServiceTime::from_hms(8, 30, 0));
        assert_eq!(trips[0].duration_secs(), 1_800);
    }

    #[test]
    fn stop_times_sorted_by_sequence() {
        let trips = normalize_trips(&[raw_trip("T1", "R1", vec![
            st("Z", 30, "08:20:00", "08:20:00"),
            st("X", 10, "08:00:00", "08:00:00"),
            st("Y", 20, "08:10:00", "08:10:00"),
        ])]);
        let order: Vec<&str> = trips[0].stop_times.iter().map(|s| s.stop_id.as_str()).collect();
        assert_eq!(order, ["X", "Y", "Z"]);
        assert_eq!(trips[0].first_stop_id().as_str(), "X");
        assert_eq!(trips[0].last_stop_id().as_str(), "Z");
    }

    #[test]
    fn numeric_and_text_times_mix() {
        let trips = normalize_trips(&[raw_trip("T1", "R1", vec![
            st("X", 1, 28_800u32, "08:00:00"),
            st("Y", 2, "08:30:00", 30_600u32),
        ])]);
        assert_eq!(trips[0].start_time, ServiceTime(28_800));
        assert_eq!(trips[0].end_time, ServiceTime(30_600));
    }

    #[test]
    fn midnight_rollover() {
        let trips = normalize_trips(&[simple("N1", "R1", "23:50:00", "00:10:00")]);
        assert_eq!(trips[0].start_time, ServiceTime(85_800));
        assert_eq!(trips[0].end_time, ServiceTime(87_000));
        assert!(trips[0].end_time > trips[0].start_time);
    }

    #[test]
    fn rollover_keeps_intermediate_stops_monotone() {
        let trips = normalize_trips(&[raw_trip("N1", "R1", vec![
            st("X", 1, "23:40:00", "23:50:00"),
            st("M", 2, "23:59:00", "00:01:00"),
            st("Y", 3, "00:10:00", "00:10:00"),
        ])]);
        let t = &trips[0];
        // Origin arrival precedes its departure and is left as-is.
        assert_eq!(t.stop_times[0].arrival_time, ServiceTime::from_hms(23, 40, 0));
        assert_eq!(t.stop_times[1].arrival_time, ServiceTime::from_hms(23, 59, 0));
        assert_eq!(t.stop_times[1].departure_time, ServiceTime::from_hms(24, 1, 0));
        assert_eq!(t.stop_times[2].arrival_time, ServiceTime::from_hms(24, 10, 0));
        assert_eq!(t.end_time, ServiceTime::from_hms(24, 10, 0));
    }

    #[test]
    fn hours_past_24_need_no_rollover() {
        let trips = normalize_trips(&[simple("N1", "R1", "23:50:00", "24:10:00")]);
        assert_eq!(trips[0].end_time, ServiceTime(87_000));
    }

    #[test]
    fn short_trips_dropped() {
        let trips = normalize_trips(&[
            raw_trip("EMPTY", "R1", vec![]),
            raw_trip("ONE", "R1", vec![st("X", 1, "08:00:00", "08:00:00")]),
            simple("OK", "R1", "08:00:00", "08:30:00"),
        ]);
        assert_eq!(trips.len(), 1);
        assert_eq!(trips[0].trip_id.as_str(), "OK");
    }

    #[test]
    fn sorted_by_start_time_stable_on_ties() {
        let trips = normalize_trips(&[
            simple("LATE", "R1", "09:00:00", "09:30:00"),
            simple("TIE-A", "R1", "08:00:00", "08:30:00"),
            simple("TIE-B", "R2", "08:00:00", "08:20:00"),
            simple("EARLY", "R1", "07:00:00", "07:30:00"),
        ]);
        let ids: Vec<&str> = trips.iter().map(|t| t.trip_id.as_str()).collect();
        assert_eq!(ids, ["EARLY", "TIE-A", "TIE-B", "LATE"]);
    }

    #[test]
    fn lenient_parse_uses_zero() {
        let trips = normalize_trips(&[simple("BAD", "R1", "not-a-time", "08:30:00")]);
        assert_eq!(trips[0].start_time, ServiceTime::ZERO);
        assert_eq!(trips[0].end_time, ServiceTime::from_hms(8, 30, 0));
    }

    #[test]
    fn strict_parse_reports_trip() {
        let err = try_normalize_trips(&[simple("BAD", "R1", "not-a-time", "08:30:00")]).unwrap_err();
        match err {
            TimetableError::InvalidTime { trip_id, .. } => assert_eq!(trip_id.as_str(), "BAD"),
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn strict_rejects_duplicate_sequence() {
        let err = try_normalize_trips(&[raw_trip("DUP", "R1", vec![
            st("X", 1, "08:00:00", "08:00:00"),
            st("Y", 1, "08:30:00", "08:30:00"),
        ])])
        .unwrap_err();
        assert!(matches!(err, TimetableError::DuplicateSequence { sequence: 1, .. }));
    }

    /// Ends "before" it starts near `u32::MAX`, so rolling over would overflow.
    fn overflowing_rollover() -> RawTrip {
        raw_trip("HUGE", "R1", vec![
            st("X", 1, 4_294_967_000u32, 4_294_967_000u32),
            st("Y", 2, 4_294_960_000u32, 4_294_960_000u32),
        ])
    }

    #[test]
    fn lenient_drops_overflowing_rollover() {
        let trips = normalize_trips(&[overflowing_rollover(), simple("OK", "R1", "08:00:00", "08:30:00")]);
        assert_eq!(trips.len(), 1);
        assert_eq!(trips[0].trip_id.as_str(), "OK");
        assert!(trips.iter().all(|t| t.end_time >= t.start_time));
    }

    #[test]
    fn strict_rejects_overflowing_rollover() {
        let err = try_normalize_trips(&[overflowing_rollover()]).unwrap_err();
        match err {
            TimetableError::InvalidTime { trip_id, .. } => assert_eq!(trip_id.as_str(), "HUGE"),
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn large_times_without_rollover_are_kept() {
        let trips = normalize_trips(&[raw_trip("LATE", "R1", vec![
            st("X", 1, 4_294_960_000u32, 4_294_960_000u32),
            st("Y", 2, u32::MAX, u32::MAX),
        ])]);
        assert_eq!(trips[0].end_time, ServiceTime(u32::MAX));
    }

    #[test]
    fn strict_matches_lenient_on_clean_input() {
        let raw = [
            simple("B", "R1", "09:00:00", "09:30:00"),
            simple("A", "R1", "08:00:00", "08:30:00"),
        ];
        assert_eq!(try_normalize_trips(&raw).unwrap(), normalize_trips(&raw));
        assert_eq!(
            normalize_with_policy(&raw, TimeParsePolicy::Strict).unwrap(),
            normalize_with_policy(&raw, TimeParsePolicy::Lenient).unwrap(),
        );
    }
}

// ── Timetable ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod timetable {
    use super::*;
    use crate::Timetable;

    #[test]
    fn lookup_by_id() {
        let tt = Timetable::from_raw(&[
            simple("B", "R1", "09:00:00", "09:30:00"),
            simple("A", "R1", "08:00:00", "08:30:00"),
        ]);
        assert_eq!(tt.len(), 2);
        assert_eq!(tt.trips()[0].trip_id.as_str(), "A");
        assert_eq!(tt.get(&TripId::from("B")).unwrap().start_time, ServiceTime::from_hms(9, 0, 0));
        assert!(tt.get(&TripId::from("C")).is_none());
    }

    #[test]
    fn duplicate_ids_resolve_to_first() {
        let tt = Timetable::from_raw(&[
            simple("A", "R1", "08:00:00", "08:30:00"),
            simple("A", "R2", "09:00:00", "09:30:00"),
        ]);
        assert_eq!(tt.len(), 2);
        assert_eq!(tt.get(&TripId::from("A")).unwrap().route_id.as_str(), "R1");
    }

    #[test]
    fn empty() {
        let tt = Timetable::from_raw(&[]);
        assert!(tt.is_empty());
    }
}

// ── RoutePaths ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod route_paths {
    use super::*;
    use crate::{RoutePath, RoutePaths, normalize_trips};

    #[test]
    fn index_of_and_terminal() {
        let path = RoutePath::new(vec![StopId::from("A"), StopId::from("B"), StopId::from("C")]);
        assert_eq!(path.index_of(&StopId::from("B")), Some(1));
        assert_eq!(path.index_of(&StopId::from("Q")), None);
        assert_eq!(path.terminal_index(), 2);
        assert_eq!(RoutePath::default().terminal_index(), 0);
    }

    #[test]
    fn derived_from_longest_trip() {
        let trips = normalize_trips(&[
            simple("SHORT", "R1", "08:00:00", "08:30:00"),
            raw_trip("LONG", "R1", vec![
                st("X", 1, "09:00:00", "09:00:00"),
                st("M", 2, "09:10:00", "09:10:00"),
                st("Y", 3, "09:20:00", "09:20:00"),
            ]),
        ]);
        let paths = RoutePaths::from_trips(&trips);
        assert_eq!(paths.len(), 1);
        let path = paths.get(&RouteId::from("R1"), 0).unwrap();
        let stops: Vec<&str> = path.stops().iter().map(|s| s.as_str()).collect();
        assert_eq!(stops, ["X", "M", "Y"]);
        assert_eq!(paths.for_trip(&trips[0]).unwrap().len(), 3);
    }

    #[test]
    fn directions_are_separate() {
        let mut back = simple("BACK", "R1", "10:00:00", "10:30:00");
        back.direction_id = 1;
        back.stop_times.reverse();
        let trips = normalize_trips(&[simple("OUT", "R1", "08:00:00", "08:30:00"), back]);
        let paths = RoutePaths::from_trips(&trips);
        assert_eq!(paths.len(), 2);
        assert!(paths.get(&RouteId::from("R1"), 1).is_some());
    }

    #[test]
    fn insert_overrides() {
        let mut paths = RoutePaths::new();
        paths.insert(RouteId::from("R1"), 0, vec![StopId::from("A"), StopId::from("B")]);
        assert_eq!(paths.get(&RouteId::from("R1"), 0).unwrap().len(), 2);
        assert!(paths.get(&RouteId::from("R2"), 0).is_none());
    }
}

// ── Loader ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod loader {
    use std::io::Cursor;

    use super::*;
    use crate::{load_gtfs_dir, load_gtfs_readers, normalize_trips};

    const TRIPS: &str = "\
route_id,service_id,trip_id,direction_id
R1,WK,T2,1
R1,WK,T1,
";

    const STOP_TIMES: &str = "\
trip_id,arrival_time,departure_time,stop_id,stop_sequence
T1,08:00:00,08:00:00,X,1
T1,08:30:00,08:30:00,Y,2
T2,09:30:00,09:30:00,Y,2
T2,09:00:00,09:00:00,Z,1
GHOST,10:00:00,10:00:00,X,1
";

    #[test]
    fn preserves_trip_order_and_defaults_direction() {
        let raw = load_gtfs_readers(Cursor::new(TRIPS), Cursor::new(STOP_TIMES)).unwrap();
        assert_eq!(raw.len(), 2);
        assert_eq!(raw[0].trip_id.as_str(), "T2");
        assert_eq!(raw[0].direction_id, 1);
        assert_eq!(raw[1].direction_id, 0);
        assert_eq!(raw[0].stop_times.len(), 2);
        assert_eq!(raw[1].stop_times[0].arrival_time, RawTime::Text("08:00:00".into()));
    }

    #[test]
    fn loaded_trips_normalize() {
        let raw = load_gtfs_readers(Cursor::new(TRIPS), Cursor::new(STOP_TIMES)).unwrap();
        let trips = normalize_trips(&raw);
        assert_eq!(trips[0].trip_id.as_str(), "T1");
        assert_eq!(trips[1].first_stop_id().as_str(), "Z");
        assert_eq!(trips[1].end_time, ServiceTime::from_hms(9, 30, 0));
    }

    #[test]
    fn bad_sequence_is_parse_error() {
        let bad = "trip_id,arrival_time,departure_time,stop_id,stop_sequence\nT1,08:00:00,08:00:00,X,first\n";
        let err = load_gtfs_readers(Cursor::new(TRIPS), Cursor::new(bad)).unwrap_err();
        assert!(matches!(err, crate::TimetableError::Parse(_)));
    }

    #[test]
    fn from_directory() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("trips.txt"), TRIPS).unwrap();
        std::fs::write(dir.path().join("stop_times.txt"), STOP_TIMES).unwrap();
        let raw = load_gtfs_dir(dir.path()).unwrap();
        assert_eq!(raw.len(), 2);
    }

    #[test]
    fn missing_directory_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_gtfs_dir(&dir.path().join("nope")).unwrap_err();
        assert!(matches!(err, crate::TimetableError::Io(_)));
    }
}

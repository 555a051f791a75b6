//! `Timetable` — the normalized trip collection plus an id index.

use log::warn;
use rustc_hash::FxHashMap;

use blk_core::TripId;

use crate::raw::RawTrip;
use crate::trip::Trip;
use crate::normalize::normalize_trips;

/// Normalized trips, sorted by `start_time`, with O(1) lookup by `TripId`.
///
/// Immutable once built.  When the underlying data changes, build a new one.
#[derive(Clone, Debug, Default)]
pub struct Timetable {
    trips: Vec<Trip>,
    by_id: FxHashMap<TripId, usize>,
}

impl Timetable {
    /// Wrap already-normalized trips.  `trips` must be sorted by
    /// `start_time` (as returned by the normalizer).
    ///
    /// Duplicate trip ids keep the first occurrence in the index.
    pub fn new(trips: Vec<Trip>) -> Self {
        debug_assert!(trips.windows(2).all(|w| w[0].start_time <= w[1].start_time));

        let mut by_id = FxHashMap::with_capacity_and_hasher(trips.len(), Default::default());
        for (i, trip) in trips.iter().enumerate() {
            if by_id.contains_key(&trip.trip_id) {
                warn!("duplicate trip id {}; lookups resolve to the first", trip.trip_id);
                continue;
            }
            by_id.insert(trip.trip_id.clone(), i);
        }
        Self { trips, by_id }
    }

    /// Normalize `raw` (lenient policy) and index the result.
    pub fn from_raw(raw: &[RawTrip]) -> Self {
        Self::new(normalize_trips(raw))
    }

    /// All trips, sorted ascending by `start_time`.
    pub fn trips(&self) -> &[Trip] {
        &self.trips
    }

    pub fn get(&self, id: &TripId) -> Option<&Trip> {
        self.by_id.get(id).map(|&i| &self.trips[i])
    }

    pub fn len(&self) -> usize {
        self.trips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trips.is_empty()
    }
}

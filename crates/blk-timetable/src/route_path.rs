//! Authoritative ordered stop lists per route and direction.
//!
//! Playback positions are expressed as an index into a route's stop path.
//! A trip's own stop order is not guaranteed to match the path (short
//! turns, skipped stops), so positions always resolve stops through
//! [`RoutePath::index_of`].

use rustc_hash::FxHashMap;

use blk_core::{RouteId, StopId};

use crate::trip::Trip;

/// The ordered stops of one route in one direction.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RoutePath {
    stops: Vec<StopId>,
    index: FxHashMap<StopId, usize>,
}

impl RoutePath {
    /// Build from an ordered stop list.  A stop listed twice resolves to its
    /// first position.
    pub fn new(stops: Vec<StopId>) -> Self {
        let mut index = FxHashMap::default();
        for (i, stop) in stops.iter().enumerate() {
            index.entry(stop.clone()).or_insert(i);
        }
        Self { stops, index }
    }

    pub fn stops(&self) -> &[StopId] {
        &self.stops
    }

    pub fn len(&self) -> usize {
        self.stops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    #[inline]
    pub fn index_of(&self, stop: &StopId) -> Option<usize> {
        self.index.get(stop).copied()
    }

    /// Index of the last stop; 0 for an empty path.
    #[inline]
    pub fn terminal_index(&self) -> usize {
        self.stops.len().saturating_sub(1)
    }
}

/// `(route, direction) → RoutePath`.
#[derive(Clone, Debug, Default)]
pub struct RoutePaths {
    paths: FxHashMap<(RouteId, u8), RoutePath>,
}

impl RoutePaths {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register (or replace) the authoritative path of a route direction.
    pub fn insert(&mut self, route: RouteId, direction: u8, stops: Vec<StopId>) {
        self.paths.insert((route, direction), RoutePath::new(stops));
    }

    /// Derive paths from trips: each route direction takes the stop order of
    /// its trip with the most stop-times (first such trip on ties).
    pub fn from_trips(trips: &[Trip]) -> Self {
        let mut longest: FxHashMap<(RouteId, u8), &Trip> = FxHashMap::default();
        for trip in trips {
            let key = (trip.route_id.clone(), trip.direction_id);
            match longest.get(&key) {
                Some(best) if best.stop_times.len() >= trip.stop_times.len() => {}
                _ => {
                    longest.insert(key, trip);
                }
            }
        }

        let paths = longest
            .into_iter()
            .map(|(key, trip)| {
                let stops = trip.stop_times.iter().map(|st| st.stop_id.clone()).collect();
                (key, RoutePath::new(stops))
            })
            .collect();
        Self { paths }
    }

    pub fn get(&self, route: &RouteId, direction: u8) -> Option<&RoutePath> {
        // Tuple keys cannot be borrowed piecewise, so build an owned key.
        self.paths.get(&(route.clone(), direction))
    }

    /// The path a trip runs along.
    pub fn for_trip(&self, trip: &Trip) -> Option<&RoutePath> {
        self.get(&trip.route_id, trip.direction_id)
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

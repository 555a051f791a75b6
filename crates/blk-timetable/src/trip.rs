//! Normalized, immutable trip representation.

use blk_core::{RouteId, ServiceTime, StopId, TripId};

/// One stop visit with times resolved to seconds.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct StopTime {
    pub stop_id:        StopId,
    pub stop_sequence:  u32,
    pub arrival_time:   ServiceTime,
    pub departure_time: ServiceTime,
}

/// A normalized trip.
///
/// `stop_times` is sorted by `stop_sequence` and holds at least two entries.
/// `start_time` is the first departure and `end_time` the last arrival; when
/// the trip crosses midnight both `end_time` and the affected stop times
/// carry the +86 400 s rollover, so `end_time >= start_time` always holds.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Trip {
    pub trip_id:      TripId,
    pub route_id:     RouteId,
    pub direction_id: u8,
    pub stop_times:   Vec<StopTime>,
    pub start_time:   ServiceTime,
    pub end_time:     ServiceTime,
}

impl Trip {
    /// # Panics
    /// If `stop_times` is empty; normalized trips always have two or more.
    #[inline]
    pub fn first_stop_id(&self) -> &StopId {
        &self.stop_times[0].stop_id
    }

    /// # Panics
    /// If `stop_times` is empty.
    #[inline]
    pub fn last_stop_id(&self) -> &StopId {
        &self.stop_times[self.stop_times.len() - 1].stop_id
    }

    /// Scheduled in-service duration in seconds.
    #[inline]
    pub fn duration_secs(&self) -> u32 {
        self.end_time - self.start_time
    }

    /// Position of `stop` within this trip's own stop list.
    pub fn local_index(&self, stop: &StopId) -> Option<usize> {
        self.stop_times.iter().position(|st| &st.stop_id == stop)
    }
}

//! Vehicle legs: commercial trips and empty repositioning runs.

use std::fmt;

use blk_core::{ServiceTime, StopId, TripId};
use blk_timetable::Trip;

/// What a vehicle is doing during a leg.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum LegKind {
    /// Running a timetabled passenger trip.
    Commercial,
    /// Driving without passengers to the next trip's first stop.
    Empty,
}

impl LegKind {
    pub fn as_str(self) -> &'static str {
        match self {
            LegKind::Commercial => "commercial",
            LegKind::Empty      => "empty",
        }
    }
}

impl fmt::Display for LegKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// One contiguous piece of a vehicle's duty.
///
/// `trip_id` is `Some` exactly when `kind == Commercial`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Leg {
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub kind:          LegKind,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub trip_id:       Option<TripId>,
    pub start_stop_id: StopId,
    pub end_stop_id:   StopId,
    pub start_time:    ServiceTime,
    pub end_time:      ServiceTime,
}

impl Leg {
    /// A commercial leg covering `trip` end to end.
    pub fn commercial(trip: &Trip) -> Self {
        Self {
            kind:          LegKind::Commercial,
            trip_id:       Some(trip.trip_id.clone()),
            start_stop_id: trip.first_stop_id().clone(),
            end_stop_id:   trip.last_stop_id().clone(),
            start_time:    trip.start_time,
            end_time:      trip.end_time,
        }
    }

    /// An empty leg leaving `from` at `start` and reaching `to` after
    /// `deadhead_secs`.
    pub fn empty(from: StopId, to: StopId, start: ServiceTime, deadhead_secs: u32) -> Self {
        Self {
            kind:          LegKind::Empty,
            trip_id:       None,
            start_stop_id: from,
            end_stop_id:   to,
            start_time:    start,
            end_time:      ServiceTime(start.0.saturating_add(deadhead_secs)),
        }
    }

    #[inline]
    pub fn is_commercial(&self) -> bool {
        self.kind == LegKind::Commercial
    }

    #[inline]
    pub fn duration_secs(&self) -> u32 {
        self.end_time - self.start_time
    }
}

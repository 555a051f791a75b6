//! Fractional positions along a route's ordered stop path.
//!
//! # Commercial legs
//!
//! The trip's stop-times are walked to find the bracket containing `t`:
//!
//! | Situation                                   | Position                         |
//! |---------------------------------------------|----------------------------------|
//! | `t < first departure`                       | path index 0                     |
//! | `arrival_i <= t <= departure_i` (dwelling)  | index of stop *i*                |
//! | `departure_i <= t < arrival_{i+1}`          | between stops *i* and *i+1*      |
//! | after the last arrival                      | terminal index of the path       |
//!
//! Each stop is resolved through the route path, not the trip's own order.
//! A stop missing from the path falls back to its index within the trip.
//!
//! # Empty legs
//!
//! Pure time interpolation between the path indices of the two endpoint
//! stops (0 for a stop not on the path); intermediate stops play no part.

use blk_core::ServiceTime;
use blk_assign::Leg;
use blk_timetable::{RoutePath, Trip};

/// A point between two path indices.
///
/// `fraction` is in `[0.0, 1.0]`; `from_index == to_index` means the vehicle
/// is at a stop.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PathPosition {
    pub from_index: usize,
    pub to_index:   usize,
    pub fraction:   f64,
}

impl PathPosition {
    /// Stationary at `index`.
    #[inline]
    pub fn at(index: usize) -> Self {
        Self { from_index: index, to_index: index, fraction: 0.0 }
    }

    /// Between two indices; `fraction` is clamped to `[0, 1]`.
    #[inline]
    pub fn between(from_index: usize, to_index: usize, fraction: f64) -> Self {
        Self { from_index, to_index, fraction: fraction.clamp(0.0, 1.0) }
    }

    /// Fractional path index, e.g. `2.25` for a quarter of the way from stop
    /// 2 to stop 3.  Works in either direction along the path.
    pub fn index(&self) -> f64 {
        let from = self.from_index as f64;
        from + (self.to_index as f64 - from) * self.fraction
    }
}

/// Fraction of `[start, end]` elapsed at `t`, clamped to `[0, 1]`; 0 for a
/// zero-length interval.
pub fn time_fraction(start: ServiceTime, end: ServiceTime, t: ServiceTime) -> f64 {
    if end <= start {
        return 0.0;
    }
    ((t - start) as f64 / (end - start) as f64).clamp(0.0, 1.0)
}

/// Position on an empty leg at `t`.
pub fn empty_leg_position(leg: &Leg, path: &RoutePath, t: ServiceTime) -> PathPosition {
    let from = path.index_of(&leg.start_stop_id).unwrap_or(0);
    let to = path.index_of(&leg.end_stop_id).unwrap_or(0);
    PathPosition::between(from, to, time_fraction(leg.start_time, leg.end_time, t))
}

/// Position of a vehicle running `trip` at `t`.
pub fn commercial_position(trip: &Trip, path: &RoutePath, t: ServiceTime) -> PathPosition {
    let stops = &trip.stop_times;
    let path_index = |i: usize| {
        path.index_of(&stops[i].stop_id)
            .unwrap_or_else(|| i.min(path.terminal_index()))
    };

    let Some(first) = stops.first() else {
        return PathPosition::at(0);
    };
    if t < first.departure_time {
        return PathPosition::at(0);
    }

    for (i, stop) in stops.iter().enumerate() {
        if stop.arrival_time <= t && t <= stop.departure_time {
            return PathPosition::at(path_index(i));
        }
        if let Some(next) = stops.get(i + 1) {
            if stop.departure_time <= t && t < next.arrival_time {
                return PathPosition::between(
                    path_index(i),
                    path_index(i + 1),
                    time_fraction(stop.departure_time, next.arrival_time, t),
                );
            }
        }
    }

    PathPosition::at(path.terminal_index())
}

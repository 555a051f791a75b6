//! Active-leg and active-vehicle queries at an instant.
//!
//! A leg is active on the closed interval `[start_time, end_time]`.  At the
//! instant one leg ends and the next begins both are active;
//! [`display_leg`] resolves that by preferring the later-starting leg.

use blk_core::ServiceTime;
use blk_assign::{Leg, Vehicle};

/// `true` iff `start_time <= t <= end_time`.
#[inline]
pub fn is_active(leg: &Leg, t: ServiceTime) -> bool {
    leg.start_time <= t && t <= leg.end_time
}

/// `(index, leg)` for every leg of `vehicle` active at `t`.
pub fn active_legs(vehicle: &Vehicle, t: ServiceTime) -> impl Iterator<Item = (usize, &Leg)> + '_ {
    vehicle
        .legs()
        .iter()
        .enumerate()
        .filter(move |(_, leg)| is_active(leg, t))
}

#[inline]
pub fn is_vehicle_active(vehicle: &Vehicle, t: ServiceTime) -> bool {
    vehicle.legs().iter().any(|leg| is_active(leg, t))
}

/// Vehicles with at least one active leg at `t`, in input order.
pub fn active_vehicles_at(vehicles: &[Vehicle], t: ServiceTime) -> Vec<&Vehicle> {
    vehicles.iter().filter(|v| is_vehicle_active(v, t)).collect()
}

/// The leg to render for `vehicle` at `t`.
///
/// Among the active legs, the one with the latest `start_time` wins; equal
/// starts resolve to the later leg in the vehicle's order.  `None` when the
/// vehicle is idle (before service, between trips, or after its last leg).
pub fn display_leg(vehicle: &Vehicle, t: ServiceTime) -> Option<(usize, &Leg)> {
    active_legs(vehicle, t).max_by_key(|(_, leg)| leg.start_time)
}

/// Earliest leg start and latest leg end across all vehicles.
pub fn service_window(vehicles: &[Vehicle]) -> Option<(ServiceTime, ServiceTime)> {
    let mut legs = vehicles.iter().flat_map(|v| v.legs());
    let first = legs.next()?;
    Some(legs.fold((first.start_time, first.end_time), |(lo, hi), leg| {
        (lo.min(leg.start_time), hi.max(leg.end_time))
    }))
}

/// Highest number of simultaneously active vehicles.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Peak {
    pub count: usize,
    /// First instant at which `count` vehicles are active.
    pub at:    ServiceTime,
}

/// Sweep all vehicles' active spans for the maximum concurrency.
///
/// Each vehicle's legs are merged into spans (legs that touch or overlap
/// join), so a vehicle counts once however many of its legs are active.
/// Bounds are inclusive: a vehicle ending at `t` and another starting at `t`
/// are both active at `t`.
pub fn peak_active_vehicles(vehicles: &[Vehicle]) -> Option<Peak> {
    // (time, is_end): starts sort before ends at the same instant.
    let mut edges: Vec<(ServiceTime, bool)> = Vec::new();
    for v in vehicles {
        let mut spans = v.legs().iter().map(|l| (l.start_time, l.end_time));
        let Some(mut current) = spans.next() else { continue };
        for (start, end) in spans {
            if start <= current.1 {
                current.1 = current.1.max(end);
            } else {
                edges.push((current.0, false));
                edges.push((current.1, true));
                current = (start, end);
            }
        }
        edges.push((current.0, false));
        edges.push((current.1, true));
    }
    edges.sort_unstable();

    let mut active = 0usize;
    let mut peak: Option<Peak> = None;
    for (time, is_end) in edges {
        if is_end {
            active -= 1;
            continue;
        }
        active += 1;
        if peak.is_none_or(|p| active > p.count) {
            peak = Some(Peak { count: active, at: time });
        }
    }
    peak
}

//! Per-vehicle frames for a renderer.
//!
//! A snapshot picks the vehicle's display leg (see
//! [`blk_timeline::display_leg`]) and resolves it to a [`PathPosition`].
//! Empty legs are drawn along the path of the commercial trip the vehicle is
//! heading to, since they belong to no route of their own.

use log::debug;

use blk_assign::{Leg, LegKind, Vehicle};
use blk_core::{RouteId, ServiceTime, TripId, VehicleColor, VehicleId};
use blk_timeline::display_leg;
use blk_timetable::{RoutePath, RoutePaths, Timetable, Trip};

use crate::position::{PathPosition, commercial_position, empty_leg_position};

/// Where one vehicle is drawn at a given instant.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct VehicleSnapshot {
    pub vehicle_id: VehicleId,
    pub color:      VehicleColor,
    /// Index of the display leg within the vehicle's block.
    pub leg_index:  usize,
    pub leg_kind:   LegKind,
    /// The trip whose route path `position` refers to.  For an empty leg this
    /// is the next commercial trip.
    pub trip_id:    TripId,
    pub route_id:   RouteId,
    pub direction_id: u8,
    pub position:   PathPosition,
}

/// Snapshot of one vehicle at `t`, or `None` when it is idle or its trip
/// cannot be found in `timetable`.
pub fn vehicle_snapshot(
    vehicle:   &Vehicle,
    timetable: &Timetable,
    paths:     &RoutePaths,
    t:         ServiceTime,
) -> Option<VehicleSnapshot> {
    let (leg_index, leg) = display_leg(vehicle, t)?;

    let Some(trip) = path_trip(vehicle, leg_index, leg, timetable) else {
        debug!("vehicle {}: no trip to position leg {leg_index} against", vehicle.id());
        return None;
    };

    let derived;
    let path = match paths.for_trip(trip) {
        Some(path) => path,
        None => {
            derived = RoutePath::new(trip.stop_times.iter().map(|st| st.stop_id.clone()).collect());
            &derived
        }
    };

    let position = match leg.kind {
        LegKind::Commercial => commercial_position(trip, path, t),
        LegKind::Empty      => empty_leg_position(leg, path, t),
    };

    Some(VehicleSnapshot {
        vehicle_id: vehicle.id().clone(),
        color:      vehicle.color(),
        leg_index,
        leg_kind:   leg.kind,
        trip_id:    trip.trip_id.clone(),
        route_id:   trip.route_id.clone(),
        direction_id: trip.direction_id,
        position,
    })
}

/// Snapshots of every vehicle active at `t`, in `vehicles` order.
pub fn snapshot_at(
    vehicles:  &[Vehicle],
    timetable: &Timetable,
    paths:     &RoutePaths,
    t:         ServiceTime,
) -> Vec<VehicleSnapshot> {
    vehicles
        .iter()
        .filter_map(|v| vehicle_snapshot(v, timetable, paths, t))
        .collect()
}

fn path_trip<'t>(
    vehicle:   &Vehicle,
    leg_index: usize,
    leg:       &Leg,
    timetable: &'t Timetable,
) -> Option<&'t Trip> {
    let trip_id = match leg.kind {
        LegKind::Commercial => leg.trip_id.as_ref()?,
        LegKind::Empty => vehicle.legs()[leg_index + 1..]
            .iter()
            .find(|l| l.is_commercial())?
            .trip_id
            .as_ref()?,
    };
    timetable.get(trip_id)
}

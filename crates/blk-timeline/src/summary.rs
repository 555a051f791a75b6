//! Per-vehicle summary rows.

use blk_core::{RouteId, VehicleId};
use blk_assign::Vehicle;

/// One summary line per vehicle: id, routes, trip count, and rounded
/// commercial / empty minutes.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SummaryRow {
    pub vehicle_id:         VehicleId,
    /// Distinct routes served, in first-seen order.
    pub routes:             Vec<RouteId>,
    pub trip_count:         usize,
    pub commercial_minutes: u32,
    pub empty_minutes:      u32,
}

impl SummaryRow {
    pub fn from_vehicle(vehicle: &Vehicle) -> Self {
        Self {
            vehicle_id:         vehicle.id().clone(),
            routes:             vec![vehicle.route_id().clone()],
            trip_count:         vehicle.trip_count(),
            commercial_minutes: round_minutes(vehicle.commercial_secs()),
            empty_minutes:      round_minutes(vehicle.empty_secs()),
        }
    }
}

/// Summary rows for `vehicles`, in order.
pub fn summary_rows(vehicles: &[Vehicle]) -> Vec<SummaryRow> {
    vehicles.iter().map(SummaryRow::from_vehicle).collect()
}

/// Seconds → minutes, rounding halves up (89 s → 1, 90 s → 2).
#[inline]
pub fn round_minutes(secs: u32) -> u32 {
    secs.saturating_add(30) / 60
}

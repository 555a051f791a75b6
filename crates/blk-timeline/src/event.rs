//! Chronological leg start/end events and the plain-text event log.
//!
//! Every leg contributes a start and an end event.  Events are stable-sorted
//! by time, so simultaneous events keep vehicle order, then leg order, with a
//! leg's start ahead of its end.
//!
//! ```text
//! [08:00:00] Vehicle BUS-0001 starts commercial trip A at stop X
//! [08:30:00] Vehicle BUS-0001 ends commercial trip A at stop Y
//! [08:30:00] Vehicle BUS-0001 starts empty run from stop Y to stop W
//! [08:35:00] Vehicle BUS-0001 ends empty run at stop W
//! ```
//!
//! Times past midnight keep counting (`24:10:00`), matching the service-day
//! clock.

use std::fmt;

use blk_core::{ServiceTime, StopId, TripId, VehicleId};
use blk_assign::{Leg, LegKind, Vehicle};

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum EventEdge {
    Starts,
    Ends,
}

/// A leg boundary on one vehicle.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct VehicleEvent {
    pub time:       ServiceTime,
    pub vehicle_id: VehicleId,
    pub edge:       EventEdge,
    pub leg_kind:   LegKind,
    pub trip_id:    Option<TripId>,
    /// The leg's start stop.
    pub from_stop:  StopId,
    /// The leg's end stop.
    pub to_stop:    StopId,
}

impl VehicleEvent {
    fn new(vehicle: &Vehicle, leg: &Leg, edge: EventEdge) -> Self {
        Self {
            time: match edge {
                EventEdge::Starts => leg.start_time,
                EventEdge::Ends   => leg.end_time,
            },
            vehicle_id: vehicle.id().clone(),
            edge,
            leg_kind:   leg.kind,
            trip_id:    leg.trip_id.clone(),
            from_stop:  leg.start_stop_id.clone(),
            to_stop:    leg.end_stop_id.clone(),
        }
    }
}

impl fmt::Display for VehicleEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] Vehicle {} ", self.time, self.vehicle_id)?;
        match (self.leg_kind, self.edge) {
            (LegKind::Commercial, EventEdge::Starts) => {
                write!(f, "starts commercial trip {} at stop {}", trip_label(&self.trip_id), self.from_stop)
            }
            (LegKind::Commercial, EventEdge::Ends) => {
                write!(f, "ends commercial trip {} at stop {}", trip_label(&self.trip_id), self.to_stop)
            }
            (LegKind::Empty, EventEdge::Starts) => {
                write!(f, "starts empty run from stop {} to stop {}", self.from_stop, self.to_stop)
            }
            (LegKind::Empty, EventEdge::Ends) => {
                write!(f, "ends empty run at stop {}", self.to_stop)
            }
        }
    }
}

fn trip_label(trip_id: &Option<TripId>) -> &str {
    trip_id.as_ref().map_or("?", |id| id.as_str())
}

/// All leg start/end events across `vehicles`, in chronological order.
pub fn vehicle_events(vehicles: &[Vehicle]) -> Vec<VehicleEvent> {
    let mut events: Vec<VehicleEvent> = vehicles
        .iter()
        .flat_map(|v| {
            v.legs().iter().flat_map(move |leg| {
                [
                    VehicleEvent::new(v, leg, EventEdge::Starts),
                    VehicleEvent::new(v, leg, EventEdge::Ends),
                ]
            })
        })
        .collect();
    events.sort_by_key(|e| e.time);
    events
}

/// Render `events` one per line (no trailing newline).
pub fn render_event_log(events: &[VehicleEvent]) -> String {
    events.iter().map(ToString::to_string).collect::<Vec<_>>().join("\n")
}

/// The full event log for `vehicles`.
pub fn event_log(vehicles: &[Vehicle]) -> String {
    render_event_log(&vehicle_events(vehicles))
}

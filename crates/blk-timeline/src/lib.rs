//! `blk-timeline` — read-only queries over assigned vehicles.
//!
//! Every function here is pure: callers may scrub, pause, or seek a virtual
//! clock freely and re-query at any instant.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                        |
//! |-------------|-----------------------------------------------------------------|
//! | [`query`]   | `is_active`, `active_vehicles_at`, `display_leg`, `service_window`, `peak_active_vehicles` |
//! | [`summary`] | `SummaryRow`, `summary_rows`, `round_minutes`                   |
//! | [`event`]   | `VehicleEvent`, `vehicle_events`, `event_log`                   |

pub mod event;
pub mod query;
pub mod summary;


pub use event::{EventEdge, VehicleEvent, event_log, render_event_log, vehicle_events};
pub use query::{
    Peak, active_legs, active_vehicles_at, display_leg, is_active, is_vehicle_active,
    peak_active_vehicles, service_window,
};
pub use summary::{SummaryRow, round_minutes, summary_rows};

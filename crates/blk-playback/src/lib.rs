//! `blk-playback` — where each vehicle is drawn at a point in service time.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                       |
//! |--------------|----------------------------------------------------------------|
//! | [`position`] | `PathPosition`, `commercial_position`, `empty_leg_position`    |
//! | [`snapshot`] | `VehicleSnapshot`, `vehicle_snapshot`, `snapshot_at`           |
//! | [`clock`]    | `PlaybackClock` — play / pause / seek / speed over a window    |
//!
//! # Position model
//!
//! Vehicles are placed on a route's stop path by a fractional index: a
//! vehicle halfway between the third and fourth stops sits at `2.5`.  The
//! renderer maps that index onto geometry.  All functions are pure in `t`,
//! so the clock can move in either direction.

pub mod clock;
pub mod position;
pub mod snapshot;


pub use clock::{DEFAULT_SPEED, PlaybackClock};
pub use position::{PathPosition, commercial_position, empty_leg_position, time_fraction};
pub use snapshot::{VehicleSnapshot, snapshot_at, vehicle_snapshot};

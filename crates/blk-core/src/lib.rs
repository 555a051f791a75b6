//! `blk-core` — foundational types for the vehicle blocking engine.
//!
//! This crate is a dependency of every other `blk-*` crate.  It has no
//! `blk-*` dependencies and minimal external ones (only `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                                  |
//! |-------------|-----------------------------------------------------------|
//! | [`ids`]     | `StopId`, `RouteId`, `TripId`, `VehicleId`                |
//! | [`time`]    | `ServiceTime`, HH:MM:SS parsing and formatting            |
//! | [`color`]   | `VehicleColor`, deterministic id → hue hashing            |
//! | [`config`]  | `EngineConfig`, `TimeParsePolicy`                         |
//! | [`error`]   | `CoreError`, `CoreResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                              |
//! |---------|---------------------------------------------------------------------|
//! | `serde` | `Serialize`/`Deserialize` on ids, `ServiceTime`, and `EngineConfig` |
//! |         | `Serialize` on `VehicleColor` (as its `hsl(...)` text)              |

pub mod color;
pub mod config;
pub mod error;
pub mod ids;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use color::VehicleColor;
pub use config::{DEFAULT_DEADHEAD_SECS, EngineConfig, TimeParsePolicy};
pub use error::{CoreError, CoreResult};
pub use ids::{RouteId, StopId, TripId, VehicleId};
pub use time::{SECS_PER_DAY, ServiceTime};

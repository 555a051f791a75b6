//! `blk-timetable` — the trip normalizer and its supporting indexes.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                  |
//! |----------------|-----------------------------------------------------------|
//! | [`raw`]        | `RawTrip`, `RawStopTime`, `RawTime` (input records)       |
//! | [`trip`]       | `Trip`, `StopTime` (normalized, immutable)                |
//! | [`normalize`]  | `normalize_trips`, `try_normalize_trips`                  |
//! | [`timetable`]  | `Timetable` (sorted trips + id index)                     |
//! | [`route_path`] | `RoutePath`, `RoutePaths` (ordered stops per direction)   |
//! | [`loader`]     | `load_gtfs_dir`, `load_gtfs_readers`                      |
//! | [`error`]      | `TimetableError`, `TimetableResult<T>`                    |
//!
//! # Normalization (summary)
//!
//! ```text
//! stop_times  sorted by stop_sequence
//! start_time  = first departure
//! end_time    = last arrival (+86 400 once if it precedes start_time)
//! trips       stable-sorted by start_time; < 2 stop-times dropped
//! ```

pub mod error;
pub mod loader;
pub mod normalize;
pub mod raw;
pub mod route_path;
pub mod timetable;
pub mod trip;

#[cfg(test)]
mod tests;

pub use error::{TimetableError, TimetableResult};
pub use loader::{load_gtfs_dir, load_gtfs_readers};
pub use normalize::{normalize_trips, normalize_with_policy, try_normalize_trips};
pub use raw::{RawStopTime, RawTime, RawTrip};
pub use route_path::{RoutePath, RoutePaths};
pub use timetable::Timetable;
pub use trip::{StopTime, Trip};

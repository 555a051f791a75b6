//! Raw trip records as handed over by the storage layer.
//!
//! Times arrive either as already-numeric seconds or as `H:MM:SS` strings;
//! [`RawTime`] accepts both shapes when deserialized:
//!
//! ```json
//! { "trip_id": "T1", "route_id": "R1", "direction_id": 0,
//!   "stop_times": [
//!     { "stop_id": "X", "stop_sequence": 1, "arrival_time": "08:00:00", "departure_time": 28800 }
//!   ] }
//! ```

use serde::Deserialize;

use blk_core::{CoreResult, RouteId, ServiceTime, StopId, TripId};

/// A time value in either of the two accepted input shapes.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum RawTime {
    Seconds(u32),
    Text(String),
}

impl RawTime {
    /// Strict conversion to [`ServiceTime`].
    pub fn resolve(&self) -> CoreResult<ServiceTime> {
        match self {
            RawTime::Seconds(s) => Ok(ServiceTime(*s)),
            RawTime::Text(t)    => ServiceTime::parse_hms(t),
        }
    }
}

impl Default for RawTime {
    fn default() -> Self {
        RawTime::Text(String::new())
    }
}

impl From<u32> for RawTime {
    fn from(secs: u32) -> Self {
        RawTime::Seconds(secs)
    }
}

impl From<&str> for RawTime {
    fn from(text: &str) -> Self {
        RawTime::Text(text.to_owned())
    }
}

/// One stop visit of a raw trip.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct RawStopTime {
    pub stop_id:        StopId,
    pub stop_sequence:  u32,
    #[serde(default)]
    pub arrival_time:   RawTime,
    #[serde(default)]
    pub departure_time: RawTime,
}

/// A raw trip with its unordered stop visits.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct RawTrip {
    pub trip_id:      TripId,
    pub route_id:     RouteId,
    #[serde(default)]
    pub direction_id: u8,
    #[serde(default)]
    pub stop_times:   Vec<RawStopTime>,
}

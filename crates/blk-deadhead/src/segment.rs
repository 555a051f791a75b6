//! Directed inter-stop segments.

use serde::Deserialize;

use blk_core::StopId;

/// A directed edge between two stops with a repositioning travel time.
///
/// Segments only feed deadhead resolution; they say nothing about passenger
/// service.  Field names follow the storage layer's column names.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Segment {
    pub start_node_id: StopId,
    pub end_node_id:   StopId,
    /// Travel time in seconds.
    pub travel_time:   u32,
}

impl Segment {
    pub fn new(start: impl Into<StopId>, end: impl Into<StopId>, travel_time: u32) -> Self {
        Self {
            start_node_id: start.into(),
            end_node_id:   end.into(),
            travel_time,
        }
    }
}

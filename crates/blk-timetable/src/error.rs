use blk_core::{CoreError, TripId};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TimetableError {
    #[error("trip {trip_id}: {source}")]
    InvalidTime {
        trip_id: TripId,
        #[source]
        source:  CoreError,
    },

    #[error("trip {trip_id}: stop_sequence {sequence} appears more than once")]
    DuplicateSequence { trip_id: TripId, sequence: u32 },

    #[error("timetable parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type TimetableResult<T> = Result<T, TimetableError>;

//! CSV segment loader.
//!
//! ```csv
//! start_node_id,end_node_id,travel_time
//! Y,W,300
//! W,Y,320
//! ```

use std::io::Read;
use std::path::Path;

use crate::{DeadheadError, DeadheadResult, Segment};

/// Load segments from a CSV file.
pub fn load_segments_csv(path: &Path) -> DeadheadResult<Vec<Segment>> {
    let file = std::fs::File::open(path)?;
    load_segments_reader(file)
}

/// Like [`load_segments_csv`] but accepts any `Read` source.
pub fn load_segments_reader<R: Read>(reader: R) -> DeadheadResult<Vec<Segment>> {
    csv::Reader::from_reader(reader)
        .deserialize::<Segment>()
        .map(|row| row.map_err(|e| DeadheadError::Parse(e.to_string())))
        .collect()
}

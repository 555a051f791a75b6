//! `blk-deadhead` — segment table and deadhead travel-time resolution.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                    |
//! |-------------|-------------------------------------------------------------|
//! | [`segment`] | `Segment` (directed stop → stop edge)                       |
//! | [`lookup`]  | `DeadheadLookup` trait, `DeadheadTable`, builder            |
//! | [`loader`]  | `load_segments_csv`, `load_segments_reader`                 |
//! | [`error`]   | `DeadheadError`, `DeadheadResult<T>`                        |

pub mod error;
pub mod loader;
pub mod lookup;
pub mod segment;

#[cfg(test)]
mod tests;

pub use error::{DeadheadError, DeadheadResult};
pub use loader::{load_segments_csv, load_segments_reader};
pub use lookup::{DeadheadLookup, DeadheadTable, DeadheadTableBuilder};
pub use segment::Segment;

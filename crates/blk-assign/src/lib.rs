//! `blk-assign` — greedy chaining of trips into vehicle blocks.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                   |
//! |--------------|------------------------------------------------------------|
//! | [`leg`]      | `Leg`, `LegKind`                                           |
//! | [`vehicle`]  | `Vehicle`, `VehicleIdSequence`                             |
//! | [`pool`]     | `TripPool` (assigned flags + per-route index), `Candidate` |
//! | [`assigner`] | `VehicleAssigner<L>`, `assign_vehicles`                    |
//!
//! # Guarantees
//!
//! For any input the output satisfies:
//!
//! - **Coverage** — every input trip appears as exactly one commercial leg.
//! - **Non-overlap** — legs of a vehicle never overlap in time.
//! - **Route purity** — a vehicle only runs trips of its seed route.
//! - **Determinism** — identical input yields identical vehicles, ids, and
//!   colours.
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | `Serialize` for `Vehicle`/`Leg` in the export shape          |
//! |         | (`bus_id`, `color`, `legs[].type`, `total_commercial_time`…) |

pub mod assigner;
pub mod leg;
pub mod pool;
pub mod vehicle;


pub use assigner::{VehicleAssigner, assign_vehicles};
pub use leg::{Leg, LegKind};
pub use pool::{Candidate, TripPool};
pub use vehicle::{Vehicle, VehicleIdSequence};

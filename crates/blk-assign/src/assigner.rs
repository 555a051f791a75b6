//! The greedy earliest-feasible-next vehicle assigner.
//!
//! # Algorithm
//!
//! ```text
//! while pool not empty:
//!     seed ← earliest unassigned trip            (new vehicle, next id)
//!     legs ← [commercial(seed)]
//!     loop:
//!         last ← legs.last
//!         C ← earliest trip on seed.route with
//!             C.start ≥ last.end + deadhead(last.end_stop, C.first_stop)
//!         none → finalize vehicle
//!         some → if last.end_stop ≠ C.first_stop: push empty(last.end, deadhead)
//!                push commercial(C)
//! ```
//!
//! It never revisits a choice and only reuses a vehicle within its seed's
//! route.  There is no optimality guarantee and no crew, vehicle-type, or
//! cross-route blocking.
//!
//! # Complexity
//!
//! Each chaining step rescans the remaining same-route trips from the
//! previous leg's end time onward: O(n²) in the worst case over the whole
//! run.  That is fine for daily schedules of a few thousand trips and is the
//! known scaling ceiling for larger inputs.
//!
//! Every outer iteration removes at least the seed from a finite pool, so
//! the loop always terminates.

use log::{debug, info};

use blk_core::EngineConfig;
use blk_deadhead::DeadheadLookup;
use blk_timetable::Trip;

use crate::{Leg, TripPool, Vehicle, VehicleIdSequence};

/// Chains trips into vehicles using a deadhead lookup `L`.
///
/// # Type parameter
///
/// `L` must implement [`DeadheadLookup`] (e.g.
/// [`blk_deadhead::DeadheadTable`], or `&DeadheadTable`).
pub struct VehicleAssigner<L: DeadheadLookup> {
    lookup: L,
}

impl<L: DeadheadLookup> VehicleAssigner<L> {
    pub fn new(lookup: L) -> Self {
        Self { lookup }
    }

    pub fn lookup(&self) -> &L {
        &self.lookup
    }

    /// Partition `trips` into vehicles, numbering them from `ids`.
    ///
    /// `trips` need not be sorted; the pool orders them by `start_time`
    /// (stable, so equal starts keep slice order).  On return `ids` has
    /// advanced past the last vehicle created.  Trips with fewer than two
    /// stop-times are skipped.
    pub fn assign(&self, trips: &[Trip], ids: &mut VehicleIdSequence) -> Vec<Vehicle> {
        let mut pool = TripPool::new(trips);
        let mut vehicles = Vec::new();

        while let Some(seed_idx) = pool.take_earliest() {
            let seed = &trips[seed_idx];
            let mut legs = vec![Leg::commercial(seed)];

            loop {
                let (free_at, at_stop) = match legs.last() {
                    Some(last) => (last.end_time, last.end_stop_id.clone()),
                    None => break,
                };
                let Some(next) = pool.take_next_feasible(&seed.route_id, free_at, &at_stop, &self.lookup)
                else {
                    break;
                };

                let trip = &trips[next.trip];
                if at_stop != *trip.first_stop_id() {
                    legs.push(Leg::empty(at_stop, trip.first_stop_id().clone(), free_at, next.deadhead_secs));
                }
                legs.push(Leg::commercial(trip));
            }

            let vehicle = Vehicle::new(ids.next_id(), seed.route_id.clone(), legs);
            debug!(
                "{}: route {}, {} trip(s), {} s commercial, {} s empty",
                vehicle.id(),
                vehicle.route_id(),
                vehicle.trip_count(),
                vehicle.commercial_secs(),
                vehicle.empty_secs(),
            );
            vehicles.push(vehicle);
        }

        let assigned: usize = vehicles.iter().map(Vehicle::trip_count).sum();
        info!("assigned {assigned} trip(s) to {} vehicle(s)", vehicles.len());
        vehicles
    }
}

/// Convenience wrapper: assign with a fresh id sequence from `config`.
pub fn assign_vehicles<L: DeadheadLookup>(
    trips:  &[Trip],
    lookup: &L,
    config: &EngineConfig,
) -> Vec<Vehicle> {
    let mut ids = VehicleIdSequence::new(config);
    VehicleAssigner::new(lookup).assign(trips, &mut ids)
}

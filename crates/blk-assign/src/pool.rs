//! `TripPool` — the removable pool of not-yet-assigned trips.
//!
//! # Layout
//!
//! Trips are never moved or removed.  The pool keeps:
//!
//! - `order`: trip indices stable-sorted by `start_time` (the pool's
//!   iteration order, which defines every tie-break);
//! - `assigned`: one flag per trip;
//! - `by_route`: per-route index lists in `order`, so chaining only scans
//!   trips that could ever be feasible.
//!
//! Trips with fewer than two stop-times never enter the pool.
//!
//! Each chaining query binary-searches its route list for the first trip
//! starting at or after the previous leg's end, then walks forward.  Worst
//! case is still O(n) per query and O(n²) overall.

use log::debug;
use rustc_hash::FxHashMap;

use blk_core::{RouteId, ServiceTime, StopId};
use blk_deadhead::DeadheadLookup;
use blk_timetable::Trip;

/// A chaining candidate accepted by [`TripPool::take_next_feasible`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Candidate {
    /// Index of the trip in the slice the pool was built from.
    pub trip:          usize,
    /// Repositioning time from the previous leg's end stop.
    pub deadhead_secs: u32,
}

pub struct TripPool<'a> {
    trips:     &'a [Trip],
    order:     Vec<usize>,
    assigned:  Vec<bool>,
    by_route:  FxHashMap<&'a RouteId, Vec<usize>>,
    /// Position in `order` before which every trip is assigned.
    cursor:    usize,
    remaining: usize,
}

impl<'a> TripPool<'a> {
    /// Index `trips`.  Trips with fewer than two stop-times cannot be turned
    /// into legs and are left out of the pool.
    pub fn new(trips: &'a [Trip]) -> Self {
        let mut order: Vec<usize> = (0..trips.len())
            .filter(|&i| {
                let usable = trips[i].stop_times.len() >= 2;
                if !usable {
                    debug!("skipping trip {}: fewer than two stop-times", trips[i].trip_id);
                }
                usable
            })
            .collect();
        order.sort_by_key(|&i| trips[i].start_time);

        let mut by_route: FxHashMap<&'a RouteId, Vec<usize>> = FxHashMap::default();
        for &i in &order {
            by_route.entry(&trips[i].route_id).or_default().push(i);
        }

        let remaining = order.len();
        Self {
            trips,
            order,
            assigned: vec![false; trips.len()],
            by_route,
            cursor: 0,
            remaining,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.remaining == 0
    }

    /// Trips not yet assigned.
    pub fn remaining(&self) -> usize {
        self.remaining
    }

    /// Remove and return the earliest-starting unassigned trip.
    pub fn take_earliest(&mut self) -> Option<usize> {
        while self.cursor < self.order.len() {
            let i = self.order[self.cursor];
            self.cursor += 1;
            if !self.assigned[i] {
                self.mark(i);
                return Some(i);
            }
        }
        None
    }

    /// Remove and return the earliest-starting trip on `route` that a vehicle
    /// standing at `at_stop` from `free_at` can still reach:
    ///
    /// ```text
    /// start_time >= free_at + deadhead(at_stop, first_stop)
    /// ```
    ///
    /// Ties on `start_time` go to the trip met first in pool order.  Returns
    /// `None` when no unassigned trip qualifies.
    pub fn take_next_feasible<L: DeadheadLookup>(
        &mut self,
        route:   &RouteId,
        free_at: ServiceTime,
        at_stop: &StopId,
        lookup:  &L,
    ) -> Option<Candidate> {
        let trips = self.trips;
        let candidates = self.by_route.get(route)?;

        // Deadheads are never negative, so nothing starting before `free_at`
        // can be feasible.
        let from = candidates.partition_point(|&i| trips[i].start_time < free_at);

        let found = candidates[from..]
            .iter()
            .copied()
            .filter(|&i| !self.assigned[i])
            .find_map(|i| {
                let trip = &trips[i];
                let deadhead_secs = lookup.deadhead(at_stop, trip.first_stop_id());
                (trip.start_time.0 >= free_at.0.saturating_add(deadhead_secs))
                    .then_some(Candidate { trip: i, deadhead_secs })
            })?;

        self.mark(found.trip);
        Some(found)
    }

    fn mark(&mut self, i: usize) {
        debug_assert!(!self.assigned[i]);
        self.assigned[i] = true;
        self.remaining -= 1;
    }
}

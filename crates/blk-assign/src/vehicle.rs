//! Vehicles (blocks) and their id sequence.

use blk_core::{EngineConfig, RouteId, VehicleColor, VehicleId};

use crate::{Leg, LegKind};

// ── Vehicle ───────────────────────────────────────────────────────────────────

/// One physical vehicle's chain of legs for the service day.
///
/// Fields are read-only after construction: the assigner finalizes a vehicle
/// once its chaining loop ends and never touches it again.
///
/// # Invariants
///
/// - Legs are chronological and non-overlapping
///   (`legs[i].end_time <= legs[i + 1].start_time`).
/// - The first leg is commercial; every commercial leg runs on `route_id`.
/// - An empty leg only sits between two commercial legs whose connecting
///   stops differ.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Vehicle {
    #[cfg_attr(feature = "serde", serde(rename = "bus_id"))]
    id:              VehicleId,
    color:           VehicleColor,
    #[cfg_attr(feature = "serde", serde(skip))]
    route_id:        RouteId,
    legs:            Vec<Leg>,
    #[cfg_attr(feature = "serde", serde(rename = "total_commercial_time"))]
    commercial_secs: u32,
    #[cfg_attr(feature = "serde", serde(rename = "total_empty_time"))]
    empty_secs:      u32,
}

impl Vehicle {
    /// Assemble a vehicle from finished legs.  The colour is derived from
    /// `id` and the time totals from `legs`.
    pub fn new(id: VehicleId, route_id: RouteId, legs: Vec<Leg>) -> Self {
        debug_assert!(
            legs.windows(2).all(|w| w[0].end_time <= w[1].start_time),
            "legs of {id} overlap"
        );

        let (commercial_secs, empty_secs) =
            legs.iter().fold((0u32, 0u32), |(c, e), leg| match leg.kind {
                LegKind::Commercial => (c.saturating_add(leg.duration_secs()), e),
                LegKind::Empty      => (c, e.saturating_add(leg.duration_secs())),
            });

        Self {
            color: VehicleColor::from_key(id.as_str()),
            id,
            route_id,
            legs,
            commercial_secs,
            empty_secs,
        }
    }

    pub fn id(&self) -> &VehicleId {
        &self.id
    }

    pub fn color(&self) -> VehicleColor {
        self.color
    }

    /// The seed trip's route; shared by every commercial leg.
    pub fn route_id(&self) -> &RouteId {
        &self.route_id
    }

    pub fn legs(&self) -> &[Leg] {
        &self.legs
    }

    /// Accumulated in-service seconds.
    pub fn commercial_secs(&self) -> u32 {
        self.commercial_secs
    }

    /// Accumulated deadhead seconds.
    pub fn empty_secs(&self) -> u32 {
        self.empty_secs
    }

    pub fn commercial_legs(&self) -> impl Iterator<Item = &Leg> + '_ {
        self.legs.iter().filter(|l| l.is_commercial())
    }

    /// Number of commercial trips in the block.
    pub fn trip_count(&self) -> usize {
        self.commercial_legs().count()
    }
}

// ── VehicleIdSequence ─────────────────────────────────────────────────────────

/// Monotonic vehicle numbering (`BUS-0001`, `BUS-0002`, …).
///
/// Passed explicitly (`&mut`) into the assigner so numbering is visible
/// state owned by the caller rather than a hidden global counter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VehicleIdSequence {
    next:   u32,
    prefix: String,
    width:  usize,
}

impl VehicleIdSequence {
    /// A sequence starting at 1 with the configured prefix and width.
    pub fn new(config: &EngineConfig) -> Self {
        Self::starting_at(config, 1)
    }

    pub fn starting_at(config: &EngineConfig, first: u32) -> Self {
        Self {
            next:   first,
            prefix: config.vehicle_id_prefix.clone(),
            width:  config.vehicle_id_width,
        }
    }

    /// The number the next id will carry.
    pub fn peek(&self) -> u32 {
        self.next
    }

    /// Produce the next id and advance.
    pub fn next_id(&mut self) -> VehicleId {
        let id = VehicleId::new(format!("{}{:0width$}", self.prefix, self.next, width = self.width));
        self.next += 1;
        id
    }
}

impl Default for VehicleIdSequence {
    fn default() -> Self {
        Self::new(&EngineConfig::default())
    }
}

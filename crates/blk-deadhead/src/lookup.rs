//! Deadhead lookup trait and the hash-indexed segment table.
//!
//! # Resolution rule
//!
//! ```text
//! deadhead(a, a) = 0
//! deadhead(a, b) = travel_time of the segment a → b, if one exists
//!                = default penalty (600 s unless configured) otherwise
//! ```
//!
//! Only exact directed matches count: a segment `b → a` says nothing about
//! `a → b`, and no multi-hop paths are searched.

use std::collections::hash_map::Entry;

use log::trace;
use rustc_hash::FxHashMap;

use blk_core::{DEFAULT_DEADHEAD_SECS, EngineConfig, StopId};

use crate::Segment;

type EdgeMap = FxHashMap<StopId, FxHashMap<StopId, u32>>;

// ── Trait ─────────────────────────────────────────────────────────────────────

/// Resolves empty repositioning time between two stops.
///
/// The assigner is generic over this trait so alternative sources (a routed
/// road network, a precomputed matrix) can be swapped in at compile time.
///
/// # Contract
///
/// - Must return 0 when `from == to`.
/// - Must be pure: the same pair always yields the same value.
pub trait DeadheadLookup {
    /// Seconds needed to drive empty from `from` to `to`.
    fn deadhead(&self, from: &StopId, to: &StopId) -> u32;
}

impl<L: DeadheadLookup + ?Sized> DeadheadLookup for &L {
    #[inline]
    fn deadhead(&self, from: &StopId, to: &StopId) -> u32 {
        (**self).deadhead(from, to)
    }
}

// ── DeadheadTable ─────────────────────────────────────────────────────────────

/// Segment travel times indexed `start → end → secs` for O(1) lookup.
///
/// Nested maps let a query borrow both stop ids instead of building an owned
/// pair key.
///
/// Do not construct directly; use [`DeadheadTableBuilder`] or
/// [`DeadheadTable::from_segments`].
#[derive(Clone, Debug)]
pub struct DeadheadTable {
    edges:        EdgeMap,
    edge_count:   usize,
    default_secs: u32,
}

impl DeadheadTable {
    /// A table with no segments: every distinct pair costs the default.
    pub fn empty() -> Self {
        DeadheadTableBuilder::new().build()
    }

    /// Index `segments` with the standard 600 s fallback.
    pub fn from_segments<'a>(segments: impl IntoIterator<Item = &'a Segment>) -> Self {
        let mut b = DeadheadTableBuilder::new();
        for s in segments {
            b.add_segment(s);
        }
        b.build()
    }

    /// Fallback penalty for unknown pairs.
    pub fn default_secs(&self) -> u32 {
        self.default_secs
    }

    /// Number of distinct directed edges.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// The indexed travel time of `from → to`, without fallback.
    pub fn edge(&self, from: &StopId, to: &StopId) -> Option<u32> {
        self.edges.get(from)?.get(to).copied()
    }
}

impl DeadheadLookup for DeadheadTable {
    fn deadhead(&self, from: &StopId, to: &StopId) -> u32 {
        if from == to {
            return 0;
        }
        self.edge(from, to).unwrap_or_else(|| {
            trace!("no segment {from} → {to}; using {} s", self.default_secs);
            self.default_secs
        })
    }
}

impl Default for DeadheadTable {
    fn default() -> Self {
        Self::empty()
    }
}

// ── DeadheadTableBuilder ──────────────────────────────────────────────────────

/// Construct a [`DeadheadTable`] incrementally, then call
/// [`build`](Self::build).
///
/// When the same directed pair is added twice the first travel time wins,
/// matching a first-match scan over the raw segment list.
///
/// # Example
///
/// ```
/// use blk_core::StopId;
/// use blk_deadhead::{DeadheadLookup, DeadheadTableBuilder};
///
/// let mut b = DeadheadTableBuilder::new();
/// b.add_edge("Y".into(), "W".into(), 300);
/// let table = b.build();
/// assert_eq!(table.deadhead(&StopId::from("Y"), &StopId::from("W")), 300);
/// assert_eq!(table.deadhead(&StopId::from("W"), &StopId::from("Y")), 600);
/// ```
pub struct DeadheadTableBuilder {
    edges:        EdgeMap,
    edge_count:   usize,
    default_secs: u32,
}

impl DeadheadTableBuilder {
    pub fn new() -> Self {
        Self { edges: FxHashMap::default(), edge_count: 0, default_secs: DEFAULT_DEADHEAD_SECS }
    }

    /// Pre-allocate for the expected number of distinct start stops.
    pub fn with_capacity(stops: usize) -> Self {
        Self {
            edges:        FxHashMap::with_capacity_and_hasher(stops, Default::default()),
            edge_count:   0,
            default_secs: DEFAULT_DEADHEAD_SECS,
        }
    }

    /// Take the fallback penalty from `config`.
    pub fn config(mut self, config: &EngineConfig) -> Self {
        self.default_secs = config.default_deadhead_secs;
        self
    }

    /// Override the fallback penalty.
    pub fn default_secs(mut self, secs: u32) -> Self {
        self.default_secs = secs;
        self
    }

    /// Add a **directed** edge `from → to`.
    pub fn add_edge(&mut self, from: StopId, to: StopId, travel_secs: u32) {
        if let Entry::Vacant(slot) = self.edges.entry(from).or_default().entry(to) {
            slot.insert(travel_secs);
            self.edge_count += 1;
        }
    }

    pub fn add_segment(&mut self, segment: &Segment) {
        self.add_edge(
            segment.start_node_id.clone(),
            segment.end_node_id.clone(),
            segment.travel_time,
        );
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn build(self) -> DeadheadTable {
        DeadheadTable {
            edges:        self.edges,
            edge_count:   self.edge_count,
            default_secs: self.default_secs,
        }
    }
}

impl Default for DeadheadTableBuilder {
    fn default() -> Self {
        Self::new()
    }
}

//! Unit tests for blk-deadhead.

use blk_core::StopId;

use crate::{DeadheadLookup, DeadheadTable, DeadheadTableBuilder, Segment};

fn s(id: &str) -> StopId {
    StopId::from(id)
}

fn table() -> DeadheadTable {
    DeadheadTable::from_segments(&[
        Segment::new("Y", "W", 300),
        Segment::new("W", "Y", 320),
        Segment::new("Y", "W", 999), // duplicate: first wins
    ])
}

#[cfg(test)]
mod lookup {
    use blk_core::EngineConfig;

    use super::*;

    #[test]
    fn same_stop_is_free() {
        assert_eq!(table().deadhead(&s("Y"), &s("Y")), 0);
        assert_eq!(DeadheadTable::empty().deadhead(&s("Q"), &s("Q")), 0);
    }

    #[test]
    fn exact_directed_match() {
        let t = table();
        assert_eq!(t.deadhead(&s("Y"), &s("W")), 300);
        assert_eq!(t.deadhead(&s("W"), &s("Y")), 320);
    }

    #[test]
    fn duplicate_edge_keeps_first() {
        let t = table();
        assert_eq!(t.edge_count(), 2);
        assert_eq!(t.edge(&s("Y"), &s("W")), Some(300));
    }

    #[test]
    fn missing_pair_falls_back_to_600() {
        let t = table();
        assert_eq!(t.deadhead(&s("A"), &s("B")), 600);
        // Reverse of a known edge is not implied.
        let one_way = DeadheadTable::from_segments(&[Segment::new("A", "B", 60)]);
        assert_eq!(one_way.deadhead(&s("B"), &s("A")), 600);
    }

    #[test]
    fn configured_penalty() {
        let cfg = EngineConfig { default_deadhead_secs: 900, ..EngineConfig::default() };
        let t = DeadheadTableBuilder::new().config(&cfg).build();
        assert_eq!(t.default_secs(), 900);
        assert_eq!(t.deadhead(&s("A"), &s("B")), 900);

        let t = DeadheadTableBuilder::with_capacity(4).default_secs(42).build();
        assert_eq!(t.deadhead(&s("A"), &s("B")), 42);
    }

    #[test]
    fn zero_travel_time_edge_is_respected() {
        let t = DeadheadTable::from_segments(&[Segment::new("A", "B", 0)]);
        assert_eq!(t.deadhead(&s("A"), &s("B")), 0);
    }

    #[test]
    fn shared_start_stop_fans_out() {
        let mut b = DeadheadTableBuilder::new();
        b.add_edge(s("Y"), s("W"), 300);
        b.add_edge(s("Y"), s("Z"), 450);
        b.add_edge(s("Y"), s("W"), 1);
        b.add_edge(s("Z"), s("Y"), 500);
        assert_eq!(b.edge_count(), 3);

        let t = b.build();
        assert_eq!(t.edge_count(), 3);
        assert_eq!(t.edge(&s("Y"), &s("W")), Some(300));
        assert_eq!(t.edge(&s("Y"), &s("Z")), Some(450));
        assert_eq!(t.edge(&s("Z"), &s("W")), None);
        assert_eq!(t.edge(&s("Q"), &s("Y")), None);
    }

    #[test]
    fn lookup_through_reference() {
        fn via<L: DeadheadLookup>(l: L) -> u32 {
            l.deadhead(&StopId::from("Y"), &StopId::from("W"))
        }
        let t = table();
        assert_eq!(via(&t), 300);
    }
}

#[cfg(test)]
mod loader {
    use std::io::Cursor;

    use super::*;
    use crate::{DeadheadError, load_segments_csv, load_segments_reader};

    const CSV: &str = "start_node_id,end_node_id,travel_time\nY,W,300\nW,Y,320\n";

    #[test]
    fn reader_round_trip() {
        let segs = load_segments_reader(Cursor::new(CSV)).unwrap();
        assert_eq!(segs, vec![Segment::new("Y", "W", 300), Segment::new("W", "Y", 320)]);
        let t = DeadheadTable::from_segments(&segs);
        assert_eq!(t.deadhead(&s("W"), &s("Y")), 320);
    }

    #[test]
    fn bad_travel_time_is_parse_error() {
        let err = load_segments_reader(Cursor::new("start_node_id,end_node_id,travel_time\nY,W,soon\n"))
            .unwrap_err();
        assert!(matches!(err, DeadheadError::Parse(_)));
    }

    #[test]
    fn from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("segments.csv");
        std::fs::write(&path, CSV).unwrap();
        assert_eq!(load_segments_csv(&path).unwrap().len(), 2);
    }
}

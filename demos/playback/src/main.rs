//! playback — end-to-end run of the blocking and playback engine.
//!
//! Loads a small embedded feed, chains its trips into vehicle blocks, prints
//! the summary CSV, event log and vehicle JSON, then steps a playback clock
//! through the service day and prints where every active vehicle is drawn.
//!
//! ```text
//! playback [config.json] [output_dir]
//! ```
//!
//! `config.json` is an optional `EngineConfig`; missing fields take their
//! defaults.  When `output_dir` is given the reports are also written there.

mod fixture;

use std::io::Cursor;
use std::path::Path;

use anyhow::{Context, Result};
use log::info;

use blk_assign::assign_vehicles;
use blk_core::EngineConfig;
use blk_deadhead::{DeadheadTableBuilder, load_segments_reader};
use blk_output::{FileReportWriter, export_report, summary_csv};
use blk_playback::{PlaybackClock, snapshot_at};
use blk_timeline::{event_log, peak_active_vehicles};
use blk_timetable::{RoutePaths, Timetable, load_gtfs_readers, normalize_with_policy};

use fixture::{SEGMENTS_CSV, STOP_TIMES_TXT, TRIPS_TXT};

// ── Constants ─────────────────────────────────────────────────────────────────

/// Service seconds per wall second while stepping frames (30 min / s).
const PLAYBACK_SPEED: f64 = 1_800.0;
/// Wall seconds between printed frames.
const FRAME_SECS:     f64 = 1.0;

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::init();
    let mut args = std::env::args().skip(1);

    // 1. Config.
    let config = match args.next() {
        Some(path) => {
            let text = std::fs::read_to_string(&path).with_context(|| format!("reading {path}"))?;
            serde_json::from_str::<EngineConfig>(&text).with_context(|| format!("parsing {path}"))?
        }
        None => EngineConfig::default(),
    };
    config.validate()?;

    // 2. Timetable.
    let raw = load_gtfs_readers(Cursor::new(TRIPS_TXT), Cursor::new(STOP_TIMES_TXT))?;
    let timetable = Timetable::new(normalize_with_policy(&raw, config.time_parse)?);
    let paths = RoutePaths::from_trips(timetable.trips());
    info!("{} raw trips, {} schedulable, {} route paths", raw.len(), timetable.len(), paths.len());

    // 3. Deadhead table.
    let mut builder = DeadheadTableBuilder::new().config(&config);
    for segment in load_segments_reader(Cursor::new(SEGMENTS_CSV))? {
        builder.add_segment(&segment);
    }
    let lookup = builder.build();

    // 4. Blocking.
    let vehicles = assign_vehicles(timetable.trips(), &lookup, &config);

    println!("=== Vehicle summary ===");
    print!("{}", summary_csv(&vehicles)?);
    println!();

    println!("=== Event log ===");
    println!("{}", event_log(&vehicles));
    println!();

    println!("=== Vehicles (JSON) ===");
    println!("{}", serde_json::to_string_pretty(&vehicles)?);
    println!();

    if let Some(peak) = peak_active_vehicles(&vehicles) {
        println!("Peak: {} vehicles in service at {}", peak.count, peak.at);
        println!();
    }

    // 5. Playback.
    let Some(mut clock) = PlaybackClock::for_vehicles(&vehicles) else {
        println!("No vehicles to play back.");
        return Ok(());
    };
    clock.set_speed(PLAYBACK_SPEED);
    clock.play();

    println!("=== Playback ===");
    loop {
        let now = clock.now();
        let frame = snapshot_at(&vehicles, &timetable, &paths, now);
        println!("[{now}] {} active", frame.len());
        for snap in &frame {
            println!(
                "    {:<10} {:<10} {:<6} trip {:<6} route {}/{} at {:.2}  {}",
                snap.vehicle_id,
                snap.leg_kind,
                if snap.position.from_index == snap.position.to_index { "stop" } else { "moving" },
                snap.trip_id,
                snap.route_id,
                snap.direction_id,
                snap.position.index(),
                snap.color,
            );
        }
        if !clock.is_playing() {
            break;
        }
        clock.advance(FRAME_SECS);
    }

    // 6. Optional file export.
    if let Some(dir) = args.next() {
        let dir = Path::new(&dir);
        std::fs::create_dir_all(dir)?;
        let mut writer = FileReportWriter::new(dir)?;
        export_report(&mut writer, &vehicles)?;
        println!();
        println!("Reports written to {}", dir.display());
    }

    Ok(())
}

//! Caller-driven virtual clock for scrubbing through a service day.
//!
//! The clock never reads wall time itself.  A UI loop measures the real time
//! elapsed between frames and hands it to [`PlaybackClock::advance`], which
//! scales it by the playback speed.  Positions are recomputed from scratch at
//! every frame, so seeking backwards is as cheap as playing forwards.

use blk_assign::Vehicle;
use blk_core::ServiceTime;
use blk_timeline::service_window;

/// Playback speed used by [`PlaybackClock::new`]: one service minute per
/// real second.
pub const DEFAULT_SPEED: f64 = 60.0;

#[derive(Clone, Debug, PartialEq)]
pub struct PlaybackClock {
    start:   ServiceTime,
    end:     ServiceTime,
    /// Fractional seconds so that slow speeds still make progress.
    now:     f64,
    speed:   f64,
    playing: bool,
}

impl PlaybackClock {
    /// A paused clock at `start`.  Bounds given in the wrong order are
    /// swapped.
    pub fn new(start: ServiceTime, end: ServiceTime) -> Self {
        let (start, end) = if end < start { (end, start) } else { (start, end) };
        Self { start, end, now: start.as_f64(), speed: DEFAULT_SPEED, playing: false }
    }

    /// A clock spanning the fleet's service window; `None` for an empty fleet.
    pub fn for_vehicles(vehicles: &[Vehicle]) -> Option<Self> {
        service_window(vehicles).map(|(start, end)| Self::new(start, end))
    }

    /// Current service time, rounded down to the second.
    #[inline]
    pub fn now(&self) -> ServiceTime {
        ServiceTime::from_secs(self.now.floor() as u32)
    }

    #[inline]
    pub fn now_secs(&self) -> f64 {
        self.now
    }

    pub fn window(&self) -> (ServiceTime, ServiceTime) {
        (self.start, self.end)
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn is_finished(&self) -> bool {
        self.now >= self.end.as_f64()
    }

    /// Start playing.  A finished clock restarts from the beginning.
    pub fn play(&mut self) {
        if self.is_finished() {
            self.now = self.start.as_f64();
        }
        self.playing = true;
    }

    pub fn pause(&mut self) {
        self.playing = false;
    }

    pub fn toggle(&mut self) {
        if self.playing { self.pause() } else { self.play() }
    }

    /// Service seconds per real second.  Negative or non-finite values stop
    /// the clock from advancing.
    pub fn set_speed(&mut self, speed: f64) {
        self.speed = if speed.is_finite() && speed > 0.0 { speed } else { 0.0 };
    }

    /// Jump to `t`, clamped to the window.  Play state is unchanged.
    pub fn seek(&mut self, t: ServiceTime) {
        self.now = t.clamp(self.start, self.end).as_f64();
    }

    /// Back to the start of the window, paused.
    pub fn reset(&mut self) {
        self.now = self.start.as_f64();
        self.playing = false;
    }

    /// Advance by `wall_secs` of real time.  Reaching the end of the window
    /// pauses the clock there.  Returns the new current time.
    pub fn advance(&mut self, wall_secs: f64) -> ServiceTime {
        if self.playing && wall_secs.is_finite() && wall_secs > 0.0 {
            let end = self.end.as_f64();
            self.now = (self.now + wall_secs * self.speed).min(end);
            if self.now >= end {
                self.playing = false;
            }
        }
        self.now()
    }
}

//! Service-day time model.
//!
//! # Design
//!
//! Every instant the engine deals with is a whole number of seconds since
//! midnight of the service day.  Values may exceed [`SECS_PER_DAY`]: a trip
//! that leaves at 23:50 and arrives at 00:10 belongs to the earlier service
//! day and arrives at `24:10:00` (87 000 s).  Integer seconds keep all
//! schedule arithmetic exact and comparisons O(1).
//!
//! Text input follows the GTFS convention `H:MM:SS`, where the hour field is
//! unbounded.  Formatting never wraps the day either, so `86 400 + 600`
//! renders as `24:10:00`.

use std::fmt;

use crate::{CoreError, CoreResult};

/// Seconds in one calendar day; the single rollover amount applied to trips
/// that cross midnight.
pub const SECS_PER_DAY: u32 = 86_400;

// ── ServiceTime ───────────────────────────────────────────────────────────────

/// Seconds since service-day midnight.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ServiceTime(pub u32);

impl ServiceTime {
    pub const ZERO: ServiceTime = ServiceTime(0);

    #[inline]
    pub fn from_secs(secs: u32) -> Self {
        ServiceTime(secs)
    }

    /// Build from hour/minute/second components.  `h` may exceed 23.
    #[inline]
    pub fn from_hms(h: u32, m: u32, s: u32) -> Self {
        ServiceTime(h * 3_600 + m * 60 + s)
    }

    #[inline]
    pub fn secs(self) -> u32 {
        self.0
    }

    #[inline]
    pub fn as_f64(self) -> f64 {
        self.0 as f64
    }

    /// Split into `(hours, minutes, seconds)`; hours are not wrapped at 24.
    pub fn hms(self) -> (u32, u32, u32) {
        (self.0 / 3_600, (self.0 % 3_600) / 60, self.0 % 60)
    }

    /// The same instant one service day later, or `None` on overflow.
    #[inline]
    pub fn checked_next_day(self) -> Option<Self> {
        self.0.checked_add(SECS_PER_DAY).map(ServiceTime)
    }

    /// Seconds from `earlier` to `self`, or 0 if `earlier` is later.
    #[inline]
    pub fn saturating_since(self, earlier: ServiceTime) -> u32 {
        self.0.saturating_sub(earlier.0)
    }

    /// Parse `H:MM:SS` (surrounding whitespace allowed, hour unbounded).
    ///
    /// # Errors
    ///
    /// [`CoreError::InvalidTime`] for empty input, a wrong number of fields,
    /// non-digit characters, minutes or seconds ≥ 60, or overflow.
    pub fn parse_hms(text: &str) -> CoreResult<ServiceTime> {
        let invalid = || CoreError::InvalidTime(text.to_owned());

        let mut fields = text.trim().split(':');
        let (Some(h), Some(m), Some(s), None) =
            (fields.next(), fields.next(), fields.next(), fields.next())
        else {
            return Err(invalid());
        };

        let h = parse_field(h).ok_or_else(invalid)?;
        let m = parse_field(m).ok_or_else(invalid)?;
        let s = parse_field(s).ok_or_else(invalid)?;
        if m >= 60 || s >= 60 {
            return Err(invalid());
        }

        h.checked_mul(3_600)
            .and_then(|secs| secs.checked_add(m * 60 + s))
            .map(ServiceTime)
            .ok_or_else(invalid)
    }

    /// Like [`parse_hms`](Self::parse_hms) but resolves any malformed input
    /// to [`ServiceTime::ZERO`].
    pub fn parse_lenient(text: &str) -> ServiceTime {
        Self::parse_hms(text).unwrap_or(ServiceTime::ZERO)
    }
}

fn parse_field(field: &str) -> Option<u32> {
    if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    field.parse().ok()
}

impl std::ops::Add<u32> for ServiceTime {
    type Output = ServiceTime;
    #[inline]
    fn add(self, rhs: u32) -> ServiceTime {
        ServiceTime(self.0 + rhs)
    }
}

impl std::ops::Sub for ServiceTime {
    type Output = u32;
    /// Saturating difference in seconds.
    #[inline]
    fn sub(self, rhs: ServiceTime) -> u32 {
        self.saturating_since(rhs)
    }
}

impl fmt::Display for ServiceTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (h, m, s) = self.hms();
        write!(f, "{h:02}:{m:02}:{s:02}")
    }
}

impl std::str::FromStr for ServiceTime {
    type Err = CoreError;

    fn from_str(s: &str) -> CoreResult<Self> {
        Self::parse_hms(s)
    }
}

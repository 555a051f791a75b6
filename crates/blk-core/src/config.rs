//! Engine configuration.
//!
//! Typically loaded from a JSON file by the application and handed to the
//! deadhead table, normalizer, and assigner.  Every field has a default, so
//! `EngineConfig::default()` reproduces the reference behaviour.

use crate::{CoreError, CoreResult};

/// Fallback repositioning time when no segment joins two stops.
pub const DEFAULT_DEADHEAD_SECS: u32 = 600;

/// How the normalizer treats malformed `H:MM:SS` strings.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum TimeParsePolicy {
    /// Malformed times resolve to 0 s and are logged.
    #[default]
    Lenient,
    /// Malformed times are reported as errors.
    Strict,
}

/// Top-level engine configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EngineConfig {
    /// Deadhead penalty in seconds for stop pairs with no known segment.
    pub default_deadhead_secs: u32,

    /// Prefix of generated vehicle ids.  Default: `"BUS-"`.
    pub vehicle_id_prefix: String,

    /// Zero-padded width of the vehicle counter.  Default: 4 (`BUS-0001`).
    pub vehicle_id_width: usize,

    /// Malformed time handling.  Default: lenient.
    pub time_parse: TimeParsePolicy,
}

impl EngineConfig {
    /// Check the fields that have no meaningful zero/empty value.
    pub fn validate(&self) -> CoreResult<()> {
        if self.vehicle_id_prefix.is_empty() {
            return Err(CoreError::Config("vehicle_id_prefix must not be empty".into()));
        }
        if self.vehicle_id_width == 0 {
            return Err(CoreError::Config("vehicle_id_width must be > 0".into()));
        }
        Ok(())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            default_deadhead_secs: DEFAULT_DEADHEAD_SECS,
            vehicle_id_prefix:     "BUS-".to_owned(),
            vehicle_id_width:      4,
            time_parse:            TimeParsePolicy::Lenient,
        }
    }
}

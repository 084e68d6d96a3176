//! Types for the Moon-planet alignment scanner.

use lunario_ephem::Body;
use lunario_time::{CivilDateTime, Instant};

/// Reference frame an alignment event was evaluated in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlignmentFrame {
    /// Earth-center frame; alignment measured in ecliptic longitude.
    Geocentric,
    /// Ground-observer frame (includes parallax); alignment measured as
    /// apparent angular separation.
    Topocentric,
}

impl AlignmentFrame {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Geocentric => "geocentric",
            Self::Topocentric => "topocentric",
        }
    }
}

/// A detected Moon-planet near-conjunction.
///
/// Events come in matched geocentric/topocentric pairs sharing the same
/// root instant; `longitude_diff_deg` is meaningful only for the
/// geocentric frame and is 0 for topocentric events by construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConjunctionEvent {
    /// The interpolated crossing instant in UTC.
    pub instant: Instant,
    /// The same instant in the calendar's civil offset.
    pub local: CivilDateTime,
    /// Which planet the Moon aligned with.
    pub planet: Body,
    /// Angular separation between Moon and planet at the root, in degrees.
    pub separation_deg: f64,
    /// Absolute ecliptic longitude difference at the root, in degrees.
    pub longitude_diff_deg: f64,
    /// Frame the separation was evaluated in.
    pub frame: AlignmentFrame,
}

/// Alignment events for one year, split by frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Alignments {
    pub geocentric: Vec<ConjunctionEvent>,
    pub topocentric: Vec<ConjunctionEvent>,
}

/// Scanner tuning knobs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScanConfig {
    /// Grid step in days. The default 0.25 (6 hours) guarantees the Moon
    /// (~13°/day) cannot cross a planet's longitude and come back within
    /// one step, so each bracket holds at most one root.
    pub step_days: f64,
    /// Sun altitude threshold in degrees; a root is kept only while the
    /// Sun sits strictly below this altitude.
    pub twilight_altitude_deg: f64,
}

/// Civil twilight: the Sun 6° below the horizon.
pub const CIVIL_TWILIGHT_ALTITUDE_DEG: f64 = -6.0;

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            step_days: 0.25,
            twilight_altitude_deg: CIVIL_TWILIGHT_ALTITUDE_DEG,
        }
    }
}

impl ScanConfig {
    pub fn validate(&self) -> Result<(), &'static str> {
        if !(self.step_days > 0.0) {
            return Err("step_days must be positive");
        }
        if self.step_days > 0.5 {
            return Err("step_days above 0.5 breaks the one-root-per-bracket assumption");
        }
        if !self.twilight_altitude_deg.is_finite() {
            return Err("twilight_altitude_deg must be finite");
        }
        Ok(())
    }
}

//! Year pipeline for the lunario calendar.
//!
//! Glues the phase finder and the alignment scanner into a single
//! all-or-nothing computation per year, owns the display-time <1° filter,
//! recovers invalid year input, and persists/loads year documents.
//!
//! The ephemeris provider stays external: every entry point is generic
//! over [`lunario_ephem::Ephemeris`].

pub mod cache;
pub mod error;

use std::path::Path;

use log::{info, warn};

use lunario_ephem::{Ephemeris, Observer};
use lunario_search::{
    AlignmentFrame, Alignments, ConjunctionEvent, MoonPhaseEvent, ScanConfig, find_alignments,
    find_phases,
};

pub use cache::{AlignmentRecord, AlignmentsRecord, PhaseRecord, YearDocument};
pub use error::CalendarError;

/// Year substituted when the caller's input cannot be used.
pub const DEFAULT_YEAR: i32 = 2026;

/// Display-time cutoff: alignments at or beyond this are detected but hidden.
pub const DISPLAY_LIMIT_DEG: f64 = 1.0;

/// Civil offset of the target locale (Montevideo, UTC−3), in minutes east
/// of UTC. A locale change only requires altering this value.
pub const MONTEVIDEO_UTC_OFFSET_MIN: i32 = -180;

/// Stage names used in error wrapping.
const STAGE_PHASES: &str = "moon phases";
const STAGE_ALIGNMENTS: &str = "alignments";

/// Pipeline configuration: who is watching, from which civil offset, and
/// how the scanner is tuned.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalendarConfig {
    pub observer: Observer,
    pub utc_offset_min: i32,
    pub scan: ScanConfig,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            observer: Observer::MONTEVIDEO,
            utc_offset_min: MONTEVIDEO_UTC_OFFSET_MIN,
            scan: ScanConfig::default(),
        }
    }
}

/// Everything computed for one year. Owned by a single computation;
/// recomputed wholesale on every trigger, never updated incrementally.
#[derive(Debug, Clone, PartialEq)]
pub struct YearResult {
    pub year: i32,
    pub moon_phases: Vec<MoonPhaseEvent>,
    pub alignments: Alignments,
}

impl YearResult {
    /// The alignment events a frame's display retains (<1°).
    pub fn displayed_alignments(&self, frame: AlignmentFrame) -> Vec<&ConjunctionEvent> {
        let events = match frame {
            AlignmentFrame::Geocentric => &self.alignments.geocentric,
            AlignmentFrame::Topocentric => &self.alignments.topocentric,
        };
        events
            .iter()
            .filter(|e| match frame {
                AlignmentFrame::Geocentric => e.longitude_diff_deg < DISPLAY_LIMIT_DEG,
                AlignmentFrame::Topocentric => e.separation_deg < DISPLAY_LIMIT_DEG,
            })
            .collect()
    }
}

/// Compute a full year: all lunar quarters plus all Moon-planet
/// alignments in both frames.
///
/// All-or-nothing: any stage failure aborts the computation and is
/// wrapped with the stage name. A fresh [`YearResult`] is returned per
/// invocation so the caller can keep a previously good result on failure
/// and perform last-write-wins installation on success.
pub fn compute_year<E: Ephemeris + ?Sized>(
    eph: &E,
    year: i32,
    config: &CalendarConfig,
) -> Result<YearResult, CalendarError> {
    info!("computing calendar for {year}");

    let moon_phases = find_phases(eph, year, config.utc_offset_min)
        .map_err(|e| CalendarError::stage(STAGE_PHASES, e))?;

    let alignments = find_alignments(
        eph,
        year,
        &config.observer,
        config.utc_offset_min,
        &config.scan,
    )
    .map_err(|e| CalendarError::stage(STAGE_ALIGNMENTS, e))?;

    info!(
        "year {year}: {} phases, {} geocentric / {} topocentric alignments",
        moon_phases.len(),
        alignments.geocentric.len(),
        alignments.topocentric.len()
    );

    Ok(YearResult {
        year,
        moon_phases,
        alignments,
    })
}

/// Generate one persisted document per year in `years`, written to `dir`
/// as `data_YYYY.json`.
pub fn write_year_documents<E: Ephemeris + ?Sized>(
    eph: &E,
    years: std::ops::RangeInclusive<i32>,
    dir: &Path,
    config: &CalendarConfig,
) -> Result<(), CalendarError> {
    std::fs::create_dir_all(dir)?;
    for year in years {
        let result = compute_year(eph, year, config)?;
        let path = dir.join(YearDocument::file_name(year));
        YearDocument::from_result(&result).save(&path)?;
        info!("saved {}", path.display());
    }
    Ok(())
}

/// Parse caller year input, substituting [`DEFAULT_YEAR`] for anything
/// non-numeric or non-positive. Recovered locally, never escalated.
pub fn sanitize_year(input: &str) -> i32 {
    match input.trim().parse::<i32>() {
        Ok(year) if year >= 1 => year,
        _ => {
            warn!("invalid year input {input:?}, falling back to {DEFAULT_YEAR}");
            DEFAULT_YEAR
        }
    }
}

/// Explicit context object for a presentation layer: the current year's
/// result plus the active display frame.
///
/// The pipeline returns a fresh result per invocation; `install` is the
/// caller's last-write-wins assignment. Nothing here is global; hosts
/// that allow overlapping computations keep whichever finished last.
#[derive(Debug)]
pub struct Session {
    frame: AlignmentFrame,
    result: Option<YearResult>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self {
            frame: AlignmentFrame::Geocentric,
            result: None,
        }
    }

    /// The active display frame.
    pub fn frame(&self) -> AlignmentFrame {
        self.frame
    }

    /// Flip between the geocentric and topocentric views.
    pub fn toggle_frame(&mut self) {
        self.frame = match self.frame {
            AlignmentFrame::Geocentric => AlignmentFrame::Topocentric,
            AlignmentFrame::Topocentric => AlignmentFrame::Geocentric,
        };
    }

    /// Install a freshly computed result, replacing any previous one.
    pub fn install(&mut self, result: YearResult) {
        self.result = Some(result);
    }

    /// The currently installed result, if any.
    pub fn result(&self) -> Option<&YearResult> {
        self.result.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_accepts_positive_years() {
        assert_eq!(sanitize_year("2026"), 2026);
        assert_eq!(sanitize_year(" 1999 "), 1999);
        assert_eq!(sanitize_year("1"), 1);
    }

    #[test]
    fn sanitize_falls_back_on_garbage() {
        assert_eq!(sanitize_year("abc"), DEFAULT_YEAR);
        assert_eq!(sanitize_year(""), DEFAULT_YEAR);
        assert_eq!(sanitize_year("0"), DEFAULT_YEAR);
        assert_eq!(sanitize_year("-5"), DEFAULT_YEAR);
        assert_eq!(sanitize_year("20.26"), DEFAULT_YEAR);
    }

    #[test]
    fn session_starts_geocentric_and_toggles() {
        let mut session = Session::new();
        assert_eq!(session.frame(), AlignmentFrame::Geocentric);
        session.toggle_frame();
        assert_eq!(session.frame(), AlignmentFrame::Topocentric);
        session.toggle_frame();
        assert_eq!(session.frame(), AlignmentFrame::Geocentric);
    }

    #[test]
    fn session_install_is_last_write_wins() {
        let mut session = Session::new();
        assert!(session.result().is_none());
        let a = YearResult {
            year: 2025,
            moon_phases: Vec::new(),
            alignments: Alignments::default(),
        };
        let b = YearResult {
            year: 2026,
            moon_phases: Vec::new(),
            alignments: Alignments::default(),
        };
        session.install(a);
        session.install(b);
        assert_eq!(session.result().map(|r| r.year), Some(2026));
    }
}

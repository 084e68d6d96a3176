//! Persisted year documents.
//!
//! One JSON file per year, `data_YYYY.json`, with the shape the renderer
//! consumes:
//!
//! ```json
//! {
//!   "moon_phases": [{"date": "...", "time": "...", "phase": "Full Moon"}],
//!   "alignments": {"geocentric": [...], "topocentric": [...]}
//! }
//! ```
//!
//! Angles are rounded on the way out: separation to 2 decimals,
//! longitude difference to 4.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::YearResult;
use crate::error::CalendarError;
use lunario_search::{AlignmentFrame, ConjunctionEvent, MoonPhaseEvent};

/// A persisted year of calendar data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearDocument {
    pub moon_phases: Vec<PhaseRecord>,
    pub alignments: AlignmentsRecord,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhaseRecord {
    pub date: String,
    pub time: String,
    pub phase: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlignmentsRecord {
    pub geocentric: Vec<AlignmentRecord>,
    pub topocentric: Vec<AlignmentRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlignmentRecord {
    pub date: String,
    pub time: String,
    pub planet: String,
    /// Angular separation in degrees, rounded to 2 decimals.
    pub degrees: f64,
    /// Ecliptic longitude difference in degrees, rounded to 4 decimals.
    /// Always 0 in the topocentric list.
    pub longitude_diff: f64,
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

fn round4(x: f64) -> f64 {
    (x * 10_000.0).round() / 10_000.0
}

fn phase_record(event: &MoonPhaseEvent) -> PhaseRecord {
    PhaseRecord {
        date: event.local.date_string(),
        time: event.local.time_string(),
        phase: event.phase.name().to_owned(),
    }
}

fn alignment_record(event: &ConjunctionEvent) -> AlignmentRecord {
    AlignmentRecord {
        date: event.local.date_string(),
        time: event.local.time_string(),
        planet: event.planet.name().to_owned(),
        degrees: round2(event.separation_deg),
        longitude_diff: round4(event.longitude_diff_deg),
    }
}

impl YearDocument {
    /// Build the persisted form of a computed year.
    pub fn from_result(result: &YearResult) -> Self {
        Self {
            moon_phases: result.moon_phases.iter().map(phase_record).collect(),
            alignments: AlignmentsRecord {
                geocentric: result
                    .alignments
                    .geocentric
                    .iter()
                    .map(alignment_record)
                    .collect(),
                topocentric: result
                    .alignments
                    .topocentric
                    .iter()
                    .map(alignment_record)
                    .collect(),
            },
        }
    }

    /// Conventional file name for a year, `data_YYYY.json`.
    pub fn file_name(year: i32) -> String {
        format!("data_{year}.json")
    }

    pub fn save(&self, path: &Path) -> Result<(), CalendarError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    pub fn load(path: &Path) -> Result<Self, CalendarError> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }
}

impl AlignmentsRecord {
    /// The records a frame's display retains: geocentric alignments are
    /// filtered on longitude difference, topocentric on separation, both
    /// strictly under 1°.
    pub fn displayed(&self, frame: AlignmentFrame) -> Vec<&AlignmentRecord> {
        match frame {
            AlignmentFrame::Geocentric => self
                .geocentric
                .iter()
                .filter(|r| r.longitude_diff < crate::DISPLAY_LIMIT_DEG)
                .collect(),
            AlignmentFrame::Topocentric => self
                .topocentric
                .iter()
                .filter(|r| r.degrees < crate::DISPLAY_LIMIT_DEG)
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounding() {
        assert_eq!(round2(0.3456), 0.35);
        assert_eq!(round4(0.34567), 0.3457);
        assert_eq!(round2(1.0), 1.0);
        assert_eq!(round4(0.0), 0.0);
    }

    #[test]
    fn file_name_convention() {
        assert_eq!(YearDocument::file_name(2026), "data_2026.json");
    }

    #[test]
    fn displayed_filters_per_frame() {
        let wide = AlignmentRecord {
            date: "2026-03-14".into(),
            time: "23:00".into(),
            planet: "Venus".into(),
            degrees: 1.5,
            longitude_diff: 0.0,
        };
        let tight = AlignmentRecord {
            degrees: 0.4,
            ..wide.clone()
        };
        let doc = AlignmentsRecord {
            geocentric: vec![wide.clone(), tight.clone()],
            topocentric: vec![wide, tight],
        };
        // geocentric filter looks at longitude_diff (both 0 → both kept)
        assert_eq!(doc.displayed(AlignmentFrame::Geocentric).len(), 2);
        // topocentric filter looks at separation (1.5° hidden)
        assert_eq!(doc.displayed(AlignmentFrame::Topocentric).len(), 1);
    }
}

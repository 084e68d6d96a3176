//! Celestial event search for the lunario calendar: lunar quarters and
//! Moon-planet alignments.
//!
//! This crate provides:
//! - The lunar phase finder (padded-window quarter walk)
//! - The Moon-planet alignment scanner (fixed-step bracketing on the
//!   ecliptic longitude difference, with linear root interpolation)
//! - The night/visibility filter (civil-twilight gate at the observer)
//!
//! Everything is generic over the [`lunario_ephem::Ephemeris`] oracle, so
//! tests and benchmarks drive the engine with synthetic fixtures.

pub mod alignment;
pub mod alignment_types;
pub mod error;
pub mod night;
pub mod phase;
pub mod phase_types;

pub use alignment::{find_alignments, geo_longitude_diff, is_zero_crossing, wrap_to_pm180};
pub use alignment_types::{
    AlignmentFrame, Alignments, CIVIL_TWILIGHT_ALTITUDE_DEG, ConjunctionEvent, ScanConfig,
};
pub use error::SearchError;
pub use night::is_observable_at;
pub use phase::find_phases;
pub use phase_types::MoonPhaseEvent;

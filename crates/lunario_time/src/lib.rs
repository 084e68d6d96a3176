//! Time handling for the lunario engine.
//!
//! This crate provides:
//! - Julian Date ↔ Gregorian calendar conversions
//! - An `Instant` type for absolute UTC points in time
//! - Civil date/time stamps in a fixed UTC offset
//!
//! The engine intentionally works in plain UTC Julian Dates: event timing
//! is displayed truncated to the minute, so leap-second and TT/TDB
//! corrections are below the precision the calendar presents.

pub mod civil;
pub mod julian;

pub use civil::CivilDateTime;
pub use julian::{J2000_JD, MINUTES_PER_DAY, SECONDS_PER_DAY, calendar_to_jd, jd_to_calendar};

/// An absolute point in time, represented as a UTC Julian Date.
///
/// This is the unit the ephemeris oracle consumes and produces.
/// Supports addition of fractional-day offsets and ordering.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Instant {
    jd_utc: f64,
}

impl Instant {
    /// Create an instant from a UTC Julian Date.
    pub fn from_jd_utc(jd: f64) -> Self {
        Self { jd_utc: jd }
    }

    /// Create an instant from a UTC calendar date and time.
    pub fn from_utc(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: f64) -> Self {
        let day_frac = day as f64
            + hour as f64 / 24.0
            + minute as f64 / 1_440.0
            + second / SECONDS_PER_DAY;
        Self {
            jd_utc: calendar_to_jd(year, month, day_frac),
        }
    }

    /// The UTC Julian Date value.
    pub fn as_jd_utc(self) -> f64 {
        self.jd_utc
    }

    /// This instant shifted by a (possibly fractional, possibly negative)
    /// number of days.
    pub fn add_days(self, days: f64) -> Self {
        Self {
            jd_utc: self.jd_utc + days,
        }
    }

    /// Signed distance in days from `self` to `other`.
    pub fn days_until(self, other: Instant) -> f64 {
        other.jd_utc - self.jd_utc
    }
}

impl std::fmt::Display for Instant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (year, month, day_frac) = jd_to_calendar(self.jd_utc);
        let day = day_frac.floor() as u32;
        let mut seconds = (day_frac.fract() * SECONDS_PER_DAY + 0.5).floor() as u32;
        if seconds >= 86_400 {
            seconds = 86_399;
        }
        write!(
            f,
            "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}Z",
            year,
            month,
            day,
            seconds / 3600,
            (seconds % 3600) / 60,
            seconds % 60
        )
    }
}

//! Julian Date ↔ Gregorian calendar conversion.
//!
//! Standard Meeus-style algorithms, valid for the Gregorian calendar
//! (all dates this engine handles are post-1582).

/// Julian Date of the J2000.0 epoch (2000-01-01 12:00 UTC).
pub const J2000_JD: f64 = 2_451_545.0;

/// Seconds in one day.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Minutes in one day.
pub const MINUTES_PER_DAY: f64 = 1_440.0;

/// Convert a Gregorian calendar date to a Julian Date.
///
/// `day` may carry a fractional part for the time of day
/// (e.g. `15.5` for the 15th at 12:00).
pub fn calendar_to_jd(year: i32, month: u32, day: f64) -> f64 {
    let (y, m) = if month <= 2 {
        (year - 1, month + 12)
    } else {
        (year, month)
    };
    let a = (y as f64 / 100.0).floor();
    let b = 2.0 - a + (a / 4.0).floor();
    (365.25 * (y as f64 + 4716.0)).floor() + (30.6001 * (m as f64 + 1.0)).floor() + day + b
        - 1524.5
}

/// Convert a Julian Date back to a Gregorian calendar date.
///
/// Returns `(year, month, day_fraction)` where `day_fraction` carries
/// the time of day in its fractional part.
pub fn jd_to_calendar(jd: f64) -> (i32, u32, f64) {
    let z = (jd + 0.5).floor();
    let f = jd + 0.5 - z;

    let a = if z < 2_299_161.0 {
        z
    } else {
        let alpha = ((z - 1_867_216.25) / 36_524.25).floor();
        z + 1.0 + alpha - (alpha / 4.0).floor()
    };

    let b = a + 1524.0;
    let c = ((b - 122.1) / 365.25).floor();
    let d = (365.25 * c).floor();
    let e = ((b - d) / 30.6001).floor();

    let day_frac = b - d - (30.6001 * e).floor() + f;
    let month = if e < 14.0 { e - 1.0 } else { e - 13.0 } as u32;
    let year = if month > 2 {
        (c - 4716.0) as i32
    } else {
        (c - 4715.0) as i32
    };

    (year, month, day_frac)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn j2000_epoch() {
        let jd = calendar_to_jd(2000, 1, 1.5);
        assert!((jd - J2000_JD).abs() < 1e-9);
    }

    #[test]
    fn unix_epoch() {
        // 1970-01-01 00:00 UTC is JD 2440587.5
        let jd = calendar_to_jd(1970, 1, 1.0);
        assert!((jd - 2_440_587.5).abs() < 1e-9);
    }

    #[test]
    fn roundtrip_with_fraction() {
        let jd = calendar_to_jd(2026, 3, 15.25);
        let (y, m, d) = jd_to_calendar(jd);
        assert_eq!(y, 2026);
        assert_eq!(m, 3);
        assert!((d - 15.25).abs() < 1e-9, "day_frac = {d}");
    }

    #[test]
    fn roundtrip_year_boundary() {
        let jd = calendar_to_jd(2025, 12, 31.999);
        let (y, m, d) = jd_to_calendar(jd);
        assert_eq!(y, 2025);
        assert_eq!(m, 12);
        assert!((d - 31.999).abs() < 1e-6);
    }

    #[test]
    fn january_ordering() {
        // Jan 1 of year+1 is exactly 365 or 366 days after Jan 1
        let jd_2026 = calendar_to_jd(2026, 1, 1.0);
        let jd_2027 = calendar_to_jd(2027, 1, 1.0);
        assert!((jd_2027 - jd_2026 - 365.0).abs() < 1e-9);
        let jd_2028 = calendar_to_jd(2028, 1, 1.0);
        let jd_2029 = calendar_to_jd(2029, 1, 1.0);
        // 2028 is a leap year
        assert!((jd_2029 - jd_2028 - 366.0).abs() < 1e-9);
    }

    #[test]
    fn february_leap_day() {
        let jd = calendar_to_jd(2028, 2, 29.0);
        let (y, m, d) = jd_to_calendar(jd);
        assert_eq!((y, m), (2028, 2));
        assert!((d - 29.0).abs() < 1e-9);
    }
}

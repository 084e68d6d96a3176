//! Night/visibility filter.
//!
//! An alignment is only worth a calendar entry if the sky is dark at the
//! observer. Both frames are gated by the same physical observer: even the
//! Earth-center ("astrological") events exist to be looked at from the
//! ground, so a daylight root is dropped for both, not deferred.

use lunario_ephem::{Body, Ephemeris, Observer};
use lunario_time::Instant;

use crate::error::SearchError;

/// Whether the sky is dark enough for naked-eye observation at `instant`.
///
/// Computes the Sun's topocentric horizontal altitude and requires it to
/// be strictly below `twilight_altitude_deg`. At exactly the threshold the
/// instant counts as daylight.
pub fn is_observable_at<E: Ephemeris + ?Sized>(
    eph: &E,
    instant: Instant,
    observer: &Observer,
    twilight_altitude_deg: f64,
) -> Result<bool, SearchError> {
    let sun = eph.topocentric_equatorial(Body::Sun, instant, observer, true)?;
    let altitude = eph.horizon_altitude(instant, observer, &sun)?;
    Ok(altitude < twilight_altitude_deg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lunario_ephem::{Equatorial, EphemerisError, MoonQuarter};

    /// Oracle stub with a constant Sun altitude.
    struct FlatSky {
        sun_altitude_deg: f64,
    }

    impl Ephemeris for FlatSky {
        fn next_lunar_quarter(
            &self,
            _after: Instant,
        ) -> Result<Option<MoonQuarter>, EphemerisError> {
            Ok(None)
        }

        fn geocentric_vector(
            &self,
            _body: Body,
            _instant: Instant,
            _apparent: bool,
        ) -> Result<[f64; 3], EphemerisError> {
            Ok([1.0, 0.0, 0.0])
        }

        fn topocentric_equatorial(
            &self,
            _body: Body,
            _instant: Instant,
            _observer: &Observer,
            _apparent: bool,
        ) -> Result<Equatorial, EphemerisError> {
            Ok(Equatorial {
                ra_deg: 0.0,
                dec_deg: 0.0,
            })
        }

        fn horizon_altitude(
            &self,
            _instant: Instant,
            _observer: &Observer,
            _equatorial: &Equatorial,
        ) -> Result<f64, EphemerisError> {
            Ok(self.sun_altitude_deg)
        }
    }

    fn check(altitude: f64) -> bool {
        let sky = FlatSky {
            sun_altitude_deg: altitude,
        };
        let t = Instant::from_utc(2026, 6, 1, 23, 0, 0.0);
        is_observable_at(&sky, t, &Observer::MONTEVIDEO, -6.0).expect("oracle stub cannot fail")
    }

    #[test]
    fn deep_night_is_observable() {
        assert!(check(-30.0));
    }

    #[test]
    fn noon_is_not_observable() {
        assert!(!check(45.0));
    }

    #[test]
    fn exact_threshold_is_daylight() {
        assert!(!check(-6.0));
    }

    #[test]
    fn just_below_threshold_is_observable() {
        assert!(check(-6.01));
    }
}

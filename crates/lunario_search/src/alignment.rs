//! Moon-planet alignment scanner.
//!
//! Fixed-step bracketing search on the geocentric ecliptic longitude
//! difference f(t) = lon_moon(t) - lon_planet(t), wrapped to (-180, +180].
//! The wrap turns a cyclic quantity into one where a sign change between
//! two grid points implies a crossing through 0, once the false flips the
//! wrap itself produces at the ±180 seam are rejected.
//!
//! Fixed-step scan, not an adaptive root-finder: the grid is 6 hours, the
//! crossing is linearly interpolated inside the bracket, and the cost is
//! bounded at ~1460 evaluations per planet per year. Downstream display
//! truncates to the minute and filters to <1°.

use log::{debug, info};

use lunario_ephem::{
    Body, Ephemeris, NAKED_EYE_PLANETS, Observer, angle_between_deg, ecliptic_longitude_deg,
};
use lunario_time::{CivilDateTime, Instant};

use crate::alignment_types::{AlignmentFrame, Alignments, ConjunctionEvent, ScanConfig};
use crate::error::SearchError;
use crate::night::is_observable_at;

/// Wrap an angle difference to (-180, +180] degrees.
pub fn wrap_to_pm180(deg: f64) -> f64 {
    let mut d = deg % 360.0;
    if d > 180.0 {
        d -= 360.0;
    } else if d <= -180.0 {
        d += 360.0;
    }
    d
}

/// Check whether a sign change is a genuine zero crossing rather than the
/// wrap discontinuity jumping between ~+180 and ~-180.
pub fn is_zero_crossing(d1: f64, d2: f64) -> bool {
    d1 * d2 < 0.0 && (d1 - d2).abs() < 180.0
}

/// Geocentric ecliptic longitude difference Moon - planet in degrees,
/// wrapped to (-180, +180].
pub fn geo_longitude_diff<E: Ephemeris + ?Sized>(
    eph: &E,
    planet: Body,
    instant: Instant,
) -> Result<f64, SearchError> {
    let moon = eph.geocentric_vector(Body::Moon, instant, true)?;
    let target = eph.geocentric_vector(planet, instant, true)?;
    Ok(wrap_to_pm180(
        ecliptic_longitude_deg(&moon) - ecliptic_longitude_deg(&target),
    ))
}

/// Build the geocentric/topocentric event pair for a root instant.
///
/// Both events share the geocentric crossing instant; the topocentric
/// pass actually peaks at a slightly different time (parallax), which is
/// accepted as a shared approximation.
fn make_event_pair<E: Ephemeris + ?Sized>(
    eph: &E,
    planet: Body,
    root: Instant,
    local: CivilDateTime,
    observer: &Observer,
) -> Result<(ConjunctionEvent, ConjunctionEvent), SearchError> {
    let moon_vec = eph.geocentric_vector(Body::Moon, root, true)?;
    let planet_vec = eph.geocentric_vector(planet, root, true)?;
    let geocentric = ConjunctionEvent {
        instant: root,
        local,
        planet,
        separation_deg: angle_between_deg(&moon_vec, &planet_vec),
        longitude_diff_deg: geo_longitude_diff(eph, planet, root)?.abs(),
        frame: AlignmentFrame::Geocentric,
    };

    let moon_eq = eph.topocentric_equatorial(Body::Moon, root, observer, true)?;
    let planet_eq = eph.topocentric_equatorial(planet, root, observer, true)?;
    let topocentric = ConjunctionEvent {
        instant: root,
        local,
        planet,
        separation_deg: angle_between_deg(&moon_eq.unit_vector(), &planet_eq.unit_vector()),
        longitude_diff_deg: 0.0,
        frame: AlignmentFrame::Topocentric,
    };

    Ok((geocentric, topocentric))
}

/// Scan a year for Moon-planet alignments.
///
/// Steps a 6-hour grid (by default) across the UTC year. At each step and
/// for each naked-eye planet, the longitude difference at the two step
/// endpoints is sign-tested; a genuine crossing is linearly interpolated
/// to a root instant, gated by the night filter, and emitted as one
/// geocentric + one topocentric event.
///
/// Roots whose local date falls outside `year` are discarded, and a
/// second detection for the same planet on the same local day (grazing
/// passes can bracket twice in adjacent steps) is suppressed.
pub fn find_alignments<E: Ephemeris + ?Sized>(
    eph: &E,
    year: i32,
    observer: &Observer,
    utc_offset_min: i32,
    config: &ScanConfig,
) -> Result<Alignments, SearchError> {
    config.validate().map_err(SearchError::InvalidConfig)?;

    let mut cursor = Instant::from_utc(year, 1, 1, 0, 0, 0.0);
    let limit = Instant::from_utc(year + 1, 1, 1, 0, 0, 0.0);

    let mut geocentric = Vec::new();
    let mut topocentric = Vec::new();

    // Carry each planet's endpoint value forward so the grid costs one
    // evaluation per planet per step.
    let mut diff_prev = [0.0f64; NAKED_EYE_PLANETS.len()];
    for (i, &planet) in NAKED_EYE_PLANETS.iter().enumerate() {
        diff_prev[i] = geo_longitude_diff(eph, planet, cursor)?;
    }

    // Last local day an event was emitted for, per planet.
    let mut last_emitted_day: [Option<(i32, u32, u32)>; NAKED_EYE_PLANETS.len()] =
        [None; NAKED_EYE_PLANETS.len()];

    while cursor < limit {
        let next = cursor.add_days(config.step_days);

        for (i, &planet) in NAKED_EYE_PLANETS.iter().enumerate() {
            let d1 = diff_prev[i];
            let d2 = geo_longitude_diff(eph, planet, next)?;
            diff_prev[i] = d2;

            if !is_zero_crossing(d1, d2) {
                continue;
            }

            let fraction = d1.abs() / (d1 - d2).abs();
            let root = cursor.add_days(config.step_days * fraction);
            let local = CivilDateTime::from_instant(root, utc_offset_min);

            if local.year != year {
                continue;
            }
            if last_emitted_day[i] == Some(local.date()) {
                debug!("Moon-{} re-bracketed on {}, suppressed", planet.name(), local.date_string());
                continue;
            }
            if !is_observable_at(eph, root, observer, config.twilight_altitude_deg)? {
                debug!("Moon-{} root at {root} falls in daylight, dropped", planet.name());
                continue;
            }

            let (geo, topo) = make_event_pair(eph, planet, root, local, observer)?;
            debug!(
                "Moon-{} alignment at {root}: lon diff {:.4}°, topo sep {:.2}°",
                planet.name(),
                geo.longitude_diff_deg,
                topo.separation_deg
            );
            geocentric.push(geo);
            topocentric.push(topo);
            last_emitted_day[i] = Some(local.date());
        }

        cursor = next;
    }

    // Planets are scanned in a fixed order, so same-step events can land
    // out of time order.
    geocentric.sort_by(|a, b| a.instant.as_jd_utc().total_cmp(&b.instant.as_jd_utc()));
    topocentric.sort_by(|a, b| a.instant.as_jd_utc().total_cmp(&b.instant.as_jd_utc()));

    info!(
        "year {year}: {} geocentric / {} topocentric alignments",
        geocentric.len(),
        topocentric.len()
    );

    Ok(Alignments {
        geocentric,
        topocentric,
    })
}

//! Lunar phase finder.
//!
//! Walks the oracle's quarter search across a padded window around the
//! target year and keeps the quarters whose local date lands inside it.
//! The padding (Dec 20 of the prior year to Jan 10 of the next) catches
//! quarters that straddle the year boundary once the civil offset is
//! applied.

use log::debug;

use lunario_ephem::Ephemeris;
use lunario_time::{CivilDateTime, Instant};

use crate::error::SearchError;
use crate::phase_types::MoonPhaseEvent;

/// Safety bound on quarter-search iterations. A two-year window holds
/// fewer than 100 quarters, so hitting this means the oracle is stuck.
const MAX_QUARTER_SEARCHES: usize = 100;

/// Find all lunar quarter events whose local date falls in `year`.
///
/// `utc_offset_min` is the civil offset in minutes east of UTC used to
/// decide which year an instant belongs to.
///
/// The cursor is nudged one day past each hit so the oracle cannot
/// re-find the same event. Search stops when the oracle reports no
/// further quarter, when a quarter lands past the padded window, or at
/// the safety bound.
pub fn find_phases<E: Ephemeris + ?Sized>(
    eph: &E,
    year: i32,
    utc_offset_min: i32,
) -> Result<Vec<MoonPhaseEvent>, SearchError> {
    let mut cursor = Instant::from_utc(year - 1, 12, 20, 0, 0, 0.0);
    let stop = Instant::from_utc(year + 1, 1, 10, 0, 0, 0.0);

    let mut events = Vec::new();
    for _ in 0..MAX_QUARTER_SEARCHES {
        let Some(quarter) = eph.next_lunar_quarter(cursor)? else {
            break;
        };
        if quarter.instant > stop {
            break;
        }

        let local = CivilDateTime::from_instant(quarter.instant, utc_offset_min);
        if local.year == year {
            debug!("{} at {} ({local} local)", quarter.phase.name(), quarter.instant);
            events.push(MoonPhaseEvent {
                instant: quarter.instant,
                local,
                phase: quarter.phase,
            });
        }

        cursor = quarter.instant.add_days(1.0);
    }

    Ok(events)
}

//! Types for the lunar phase finder.

use lunario_ephem::MoonPhase;
use lunario_time::{CivilDateTime, Instant};

/// A lunar quarter instant that falls inside the requested year.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoonPhaseEvent {
    /// The quarter instant in UTC.
    pub instant: Instant,
    /// The same instant in the calendar's civil offset, truncated to the minute.
    pub local: CivilDateTime,
    /// Which quarter was reached.
    pub phase: MoonPhase,
}

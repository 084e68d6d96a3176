//! Error types for event search.

use std::error::Error;
use std::fmt::{Display, Formatter};

use lunario_ephem::EphemerisError;

/// Errors from phase or alignment search.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum SearchError {
    /// The ephemeris oracle failed or is unavailable.
    Ephemeris(EphemerisError),
    /// A search configuration value is invalid.
    InvalidConfig(&'static str),
}

impl Display for SearchError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ephemeris(e) => write!(f, "{e}"),
            Self::InvalidConfig(msg) => write!(f, "invalid config: {msg}"),
        }
    }
}

impl Error for SearchError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Ephemeris(e) => Some(e),
            Self::InvalidConfig(_) => None,
        }
    }
}

impl From<EphemerisError> for SearchError {
    fn from(e: EphemerisError) -> Self {
        Self::Ephemeris(e)
    }
}

//! Error types for the calendar pipeline.

use std::error::Error;
use std::fmt::{Display, Formatter};

use lunario_search::SearchError;

/// Errors from the year pipeline or the persisted document layer.
///
/// The pipeline is all-or-nothing per year: a failure in either stage
/// aborts the whole computation and names the stage that failed, so a
/// caller never sees a partially filled result.
#[derive(Debug)]
#[non_exhaustive]
pub enum CalendarError {
    /// A pipeline stage failed, wrapping the originating search error.
    Stage {
        stage: &'static str,
        source: SearchError,
    },
    /// Reading or writing a year document failed.
    Io(String),
    /// A year document could not be encoded or decoded.
    Json(String),
}

impl CalendarError {
    pub(crate) fn stage(stage: &'static str, source: SearchError) -> Self {
        Self::Stage { stage, source }
    }
}

impl Display for CalendarError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Stage { stage, source } => write!(f, "{stage} stage failed: {source}"),
            Self::Io(msg) => write!(f, "I/O error: {msg}"),
            Self::Json(msg) => write!(f, "JSON error: {msg}"),
        }
    }
}

impl Error for CalendarError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Stage { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<std::io::Error> for CalendarError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e.to_string())
    }
}

impl From<serde_json::Error> for CalendarError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e.to_string())
    }
}

//! Error types for chart computation.

use std::error::Error;
use std::fmt::{Display, Formatter};

use udaya_time::TimeError;

use crate::provider::EphemerisError;

/// Errors from chart computation.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ChartError {
    /// Out-of-range latitude/longitude or otherwise unusable input.
    InvalidInput(String),
    /// Unparseable civil date/time.
    Time(TimeError),
    /// A provider query failed where no further candidate exists.
    Ephemeris(EphemerisError),
}

impl Display for ChartError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
            Self::Time(e) => write!(f, "{e}"),
            Self::Ephemeris(e) => write!(f, "{e}"),
        }
    }
}

impl Error for ChartError {}

impl From<TimeError> for ChartError {
    fn from(e: TimeError) -> Self {
        Self::Time(e)
    }
}

impl From<EphemerisError> for ChartError {
    fn from(e: EphemerisError) -> Self {
        Self::Ephemeris(e)
    }
}

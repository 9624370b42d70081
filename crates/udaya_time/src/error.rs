//! Error types for civil time parsing.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from civil date/time parsing and validation.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum TimeError {
    /// Date string could not be parsed into valid calendar fields.
    InvalidDate(String),
    /// Time string could not be parsed into valid clock fields.
    InvalidTime(String),
}

impl Display for TimeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDate(msg) => write!(f, "invalid date: {msg}"),
            Self::InvalidTime(msg) => write!(f, "invalid time: {msg}"),
        }
    }
}

impl Error for TimeError {}

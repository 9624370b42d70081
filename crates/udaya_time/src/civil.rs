//! Civil date/time value types and conversion to JD UT.
//!
//! A birth moment arrives as a civil date, a civil wall-clock time, and a
//! signed timezone offset in hours (fractional offsets such as +5.5 are
//! common). Subtracting the offset from the civil clock gives universal
//! time, which maps onto the Julian Day scale via [`calendar_to_jd`].

use crate::error::TimeError;
use crate::julian::calendar_to_jd;

/// Civil calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CivilDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

/// Civil wall-clock time with sub-second precision.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CivilTime {
    pub hour: u32,
    pub minute: u32,
    pub second: f64,
}

impl CivilDate {
    pub fn new(year: i32, month: u32, day: u32) -> Self {
        Self { year, month, day }
    }

    /// Parse a `YYYY-MM-DD` date string.
    pub fn parse(s: &str) -> Result<Self, TimeError> {
        let mut parts = s.split('-');
        // A leading '-' (negative year) would split wrong; birth charts
        // do not reach the common-era boundary.
        let (y, m, d) = match (parts.next(), parts.next(), parts.next(), parts.next()) {
            (Some(y), Some(m), Some(d), None) => (y, m, d),
            _ => return Err(TimeError::InvalidDate(format!("expected YYYY-MM-DD, got {s:?}"))),
        };
        let year: i32 = y
            .parse()
            .map_err(|_| TimeError::InvalidDate(format!("bad year in {s:?}")))?;
        let month: u32 = m
            .parse()
            .map_err(|_| TimeError::InvalidDate(format!("bad month in {s:?}")))?;
        let day: u32 = d
            .parse()
            .map_err(|_| TimeError::InvalidDate(format!("bad day in {s:?}")))?;

        if !(1..=12).contains(&month) {
            return Err(TimeError::InvalidDate(format!("month {month} out of range")));
        }
        if day < 1 || day > days_in_month(year, month) {
            return Err(TimeError::InvalidDate(format!(
                "day {day} out of range for {year}-{month:02}"
            )));
        }
        Ok(Self { year, month, day })
    }
}

impl CivilTime {
    pub fn new(hour: u32, minute: u32, second: f64) -> Self {
        Self {
            hour,
            minute,
            second,
        }
    }

    /// Parse an `HH:MM` or `HH:MM:SS` time string.
    pub fn parse(s: &str) -> Result<Self, TimeError> {
        let parts: Vec<&str> = s.split(':').collect();
        if parts.len() != 2 && parts.len() != 3 {
            return Err(TimeError::InvalidTime(format!(
                "expected HH:MM or HH:MM:SS, got {s:?}"
            )));
        }
        let hour: u32 = parts[0]
            .parse()
            .map_err(|_| TimeError::InvalidTime(format!("bad hour in {s:?}")))?;
        let minute: u32 = parts[1]
            .parse()
            .map_err(|_| TimeError::InvalidTime(format!("bad minute in {s:?}")))?;
        let second: f64 = if parts.len() == 3 {
            parts[2]
                .parse()
                .map_err(|_| TimeError::InvalidTime(format!("bad second in {s:?}")))?
        } else {
            0.0
        };

        if hour >= 24 {
            return Err(TimeError::InvalidTime(format!("hour {hour} out of range")));
        }
        if minute >= 60 {
            return Err(TimeError::InvalidTime(format!("minute {minute} out of range")));
        }
        if !(0.0..60.0).contains(&second) {
            return Err(TimeError::InvalidTime(format!("second {second} out of range")));
        }
        Ok(Self {
            hour,
            minute,
            second,
        })
    }

    /// Fractional hour of day (hour + minute/60 + second/3600).
    pub fn fractional_hours(&self) -> f64 {
        self.hour as f64 + self.minute as f64 / 60.0 + self.second / 3600.0
    }
}

impl std::fmt::Display for CivilDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl std::fmt::Display for CivilTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:06.3}",
            self.hour, self.minute, self.second
        )
    }
}

/// Days in a Gregorian month, honoring leap years.
fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 0,
    }
}

fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Convert a civil date/time plus timezone offset to JD UT.
///
/// The universal-time fractional hour is `civil hours - offset`; it may go
/// negative or past 24, which the continuous day-fraction in
/// [`calendar_to_jd`] absorbs without explicit rollover.
pub fn civil_to_jd_ut(date: CivilDate, time: CivilTime, tz_offset_hours: f64) -> f64 {
    let ut_hours = time.fractional_hours() - tz_offset_hours;
    calendar_to_jd(date.year, date.month, date.day as f64 + ut_hours / 24.0)
}

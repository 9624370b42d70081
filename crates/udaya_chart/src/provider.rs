//! Ephemeris provider capability.
//!
//! The numerical engine that solves body positions, sunrise events, and
//! ascendant angles lives outside this crate. It is consumed through the
//! [`EphemerisProvider`] trait so chart computation can run against any
//! engine, or against a deterministic stub in tests.

use std::error::Error;
use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use udaya_time::{calendar_to_jd, jd_to_calendar_date};
use udaya_vedic_base::Graha;

/// Geographic location on Earth's surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    /// Geodetic latitude in degrees, north positive. Range: [-90, 90].
    pub latitude_deg: f64,
    /// Geodetic longitude in degrees, east positive. Range: [-180, 180].
    pub longitude_deg: f64,
}

impl GeoLocation {
    pub fn new(latitude_deg: f64, longitude_deg: f64) -> Self {
        Self {
            latitude_deg,
            longitude_deg,
        }
    }

    /// Latitude in radians.
    pub fn latitude_rad(&self) -> f64 {
        self.latitude_deg.to_radians()
    }

    /// Longitude in radians (east positive).
    pub fn longitude_rad(&self) -> f64 {
        self.longitude_deg.to_radians()
    }
}

/// Ecliptic longitude and its rate of change for a body at a moment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyState {
    /// Longitude in degrees, [0, 360).
    pub longitude_deg: f64,
    /// Longitude rate in degrees per day; negative means retrograde motion.
    pub speed_deg_per_day: f64,
}

/// A failed ephemeris provider query.
#[derive(Debug, Clone, PartialEq)]
pub struct EphemerisError {
    message: String,
}

impl EphemerisError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Display for EphemerisError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "ephemeris unavailable: {}", self.message)
    }
}

impl Error for EphemerisError {}

/// Abstract ephemeris capability consumed by chart computation.
///
/// All moments are JD UT ("moment" scale). Implementations must be
/// deterministic for identical inputs; chart idempotence depends on it.
pub trait EphemerisProvider {
    /// Ecliptic longitude and rate for a graha at a moment.
    ///
    /// `sidereal` selects sidereal (ayanamsha-corrected) longitudes;
    /// tropical otherwise. Never called for Ketu: the chart layer
    /// mirrors it from Rahu.
    fn body_longitude(
        &self,
        jd_ut: f64,
        graha: Graha,
        sidereal: bool,
    ) -> Result<BodyState, EphemerisError>;

    /// Sunrise moment nearest the given moment's day at a location.
    ///
    /// `Ok(None)` means no sunrise exists for that day (polar conditions);
    /// the locator treats it like any other failed candidate.
    fn find_sunrise(
        &self,
        jd_ut: f64,
        location: &GeoLocation,
    ) -> Result<Option<f64>, EphemerisError>;

    /// Ascendant (rising degree) ecliptic longitude at a moment.
    fn ascendant_longitude(
        &self,
        jd_ut: f64,
        location: &GeoLocation,
    ) -> Result<f64, EphemerisError>;

    /// Map a civil date plus fractional UT hour onto the moment scale.
    fn civil_to_moment(&self, year: i32, month: u32, day: u32, ut_hours: f64) -> f64 {
        calendar_to_jd(year, month, day as f64 + ut_hours / 24.0)
    }

    /// Whole civil date containing a moment.
    fn moment_to_civil_date(&self, jd_ut: f64) -> (i32, u32, u32) {
        jd_to_calendar_date(jd_ut)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Dummy;

    impl EphemerisProvider for Dummy {
        fn body_longitude(
            &self,
            _jd_ut: f64,
            _graha: Graha,
            _sidereal: bool,
        ) -> Result<BodyState, EphemerisError> {
            Err(EphemerisError::new("not implemented"))
        }

        fn find_sunrise(
            &self,
            _jd_ut: f64,
            _location: &GeoLocation,
        ) -> Result<Option<f64>, EphemerisError> {
            Ok(None)
        }

        fn ascendant_longitude(
            &self,
            _jd_ut: f64,
            _location: &GeoLocation,
        ) -> Result<f64, EphemerisError> {
            Err(EphemerisError::new("not implemented"))
        }
    }

    #[test]
    fn default_civil_to_moment_is_meeus() {
        assert!((Dummy.civil_to_moment(2000, 1, 1, 12.0) - 2_451_545.0).abs() < 1e-9);
    }

    #[test]
    fn default_moment_to_civil_date_roundtrips() {
        let jd = Dummy.civil_to_moment(1994, 11, 8, 9.0);
        assert_eq!(Dummy.moment_to_civil_date(jd), (1994, 11, 8));
    }

    #[test]
    fn location_radian_accessors() {
        let loc = GeoLocation::new(28.6139, 77.2090);
        assert!((loc.latitude_rad() - 28.6139_f64.to_radians()).abs() < 1e-12);
        assert!((loc.longitude_rad() - 77.2090_f64.to_radians()).abs() < 1e-12);
    }

    #[test]
    fn ephemeris_error_display() {
        let e = EphemerisError::new("solver diverged");
        assert_eq!(e.to_string(), "ephemeris unavailable: solver diverged");
    }
}

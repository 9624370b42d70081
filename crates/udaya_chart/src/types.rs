//! Chart value types.
//!
//! Everything here is created fresh per chart request and never mutated
//! after construction. Planet entries live in a fixed array indexed by
//! `graha.index()`, which keeps output ordering byte-stable across
//! identical requests.

use serde::{Deserialize, Serialize};
use udaya_time::{CivilDate, CivilTime, civil_to_jd_ut};
use udaya_vedic_base::{
    Dms, Graha, LagnaVariant, Nakshatra, Rashi, house_from_rashi, nakshatra_from_longitude,
    normalize_360, rashi_from_longitude,
};

use crate::error::ChartError;
use crate::provider::GeoLocation;

/// A validated birth moment and place.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BirthInput {
    pub date: CivilDate,
    pub time: CivilTime,
    pub latitude_deg: f64,
    pub longitude_deg: f64,
    /// Timezone offset in hours, signed, may be fractional (e.g. +5.5).
    pub tz_offset_hours: f64,
}

impl BirthInput {
    /// Parse and validate raw request fields.
    pub fn parse(
        date: &str,
        time: &str,
        latitude_deg: f64,
        longitude_deg: f64,
        tz_offset_hours: f64,
    ) -> Result<Self, ChartError> {
        let date = CivilDate::parse(date)?;
        let time = CivilTime::parse(time)?;
        if !(-90.0..=90.0).contains(&latitude_deg) {
            return Err(ChartError::InvalidInput(format!(
                "latitude {latitude_deg} out of range [-90, 90]"
            )));
        }
        if !(-180.0..=180.0).contains(&longitude_deg) {
            return Err(ChartError::InvalidInput(format!(
                "longitude {longitude_deg} out of range [-180, 180]"
            )));
        }
        Ok(Self {
            date,
            time,
            latitude_deg,
            longitude_deg,
            tz_offset_hours,
        })
    }

    /// The birth moment as JD UT.
    pub fn moment(&self) -> f64 {
        civil_to_jd_ut(self.date, self.time, self.tz_offset_hours)
    }

    /// The birth place.
    pub fn location(&self) -> GeoLocation {
        GeoLocation::new(self.latitude_deg, self.longitude_deg)
    }
}

/// Chart computation options.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    /// Which special lagna anchors the chart.
    pub variant: LagnaVariant,
    /// Request sidereal longitudes from the provider. Default: true.
    pub sidereal: bool,
}

impl ChartConfig {
    pub fn new(variant: LagnaVariant) -> Self {
        Self {
            variant,
            sidereal: true,
        }
    }
}

/// A longitude fully resolved into sign and lunar-mansion coordinates.
///
/// Shared shape for the lagna point and every planet position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LongitudePoint {
    /// Longitude in degrees, [0, 360).
    pub longitude_deg: f64,
    pub rashi: Rashi,
    /// Decimal degrees within the rashi, [0.0, 30.0).
    pub degrees_in_rashi: f64,
    /// Position within the rashi as DMS.
    pub dms: Dms,
    pub nakshatra: Nakshatra,
    /// Ruling graha of the nakshatra.
    pub nakshatra_lord: Graha,
    /// Pada within the nakshatra, 1-4.
    pub pada: u8,
}

impl LongitudePoint {
    /// Resolve a longitude into its full sign/nakshatra coordinates.
    pub fn from_longitude(lon_deg: f64) -> Self {
        let lon = normalize_360(lon_deg);
        let rashi = rashi_from_longitude(lon);
        let nak = nakshatra_from_longitude(lon);
        Self {
            longitude_deg: lon,
            rashi: rashi.rashi,
            degrees_in_rashi: rashi.degrees_in_rashi,
            dms: rashi.dms,
            nakshatra: nak.nakshatra,
            nakshatra_lord: nak.lord,
            pada: nak.pada,
        }
    }
}

/// One graha placed in the chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlanetPosition {
    pub graha: Graha,
    pub point: LongitudePoint,
    /// Negative longitude rate at the birth moment. Always false for Ketu.
    pub retrograde: bool,
    /// Whole-sign house from the lagna rashi, [1, 12].
    pub house: u8,
}

impl PlanetPosition {
    /// Place a graha at a longitude relative to a lagna rashi.
    pub fn place(graha: Graha, lon_deg: f64, retrograde: bool, lagna_rashi_index: u8) -> Self {
        let point = LongitudePoint::from_longitude(lon_deg);
        let house = house_from_rashi(point.rashi.index(), lagna_rashi_index);
        Self {
            graha,
            point,
            retrograde,
            house,
        }
    }

    /// Placeholder entry for array initialization before placement.
    pub(crate) const fn sentinel() -> Self {
        Self {
            graha: Graha::Surya,
            point: LongitudePoint {
                longitude_deg: 0.0,
                rashi: Rashi::Mesha,
                degrees_in_rashi: 0.0,
                dms: Dms {
                    degrees: 0,
                    minutes: 0,
                    seconds: 0.0,
                },
                nakshatra: Nakshatra::Ashwini,
                nakshatra_lord: Graha::Ketu,
                pada: 1,
            },
            retrograde: false,
            house: 1,
        }
    }
}

/// A complete special-lagna chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Chart {
    pub variant: LagnaVariant,
    pub lagna: LongitudePoint,
    /// All 9 grahas in traditional order, indexed by `graha.index()`.
    pub planets: [PlanetPosition; 9],
}

impl Chart {
    /// Position of a graha.
    pub fn position(&self, graha: Graha) -> &PlanetPosition {
        &self.planets[graha.index() as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_validates_latitude() {
        let err = BirthInput::parse("1994-11-08", "14:30", 95.0, 77.2, 5.5).unwrap_err();
        assert!(matches!(err, ChartError::InvalidInput(_)));
    }

    #[test]
    fn parse_validates_longitude() {
        let err = BirthInput::parse("1994-11-08", "14:30", 28.6, 200.0, 5.5).unwrap_err();
        assert!(matches!(err, ChartError::InvalidInput(_)));
    }

    #[test]
    fn parse_surfaces_time_errors() {
        let err = BirthInput::parse("1994-13-08", "14:30", 28.6, 77.2, 5.5).unwrap_err();
        assert!(matches!(err, ChartError::Time(_)));
        let err = BirthInput::parse("1994-11-08", "25:30", 28.6, 77.2, 5.5).unwrap_err();
        assert!(matches!(err, ChartError::Time(_)));
    }

    #[test]
    fn moment_subtracts_offset() {
        let input = BirthInput::parse("2000-01-01", "17:30", 0.0, 0.0, 5.5).unwrap();
        assert!((input.moment() - 2_451_545.0).abs() < 1e-9);
    }

    #[test]
    fn point_from_longitude_resolves_all_fields() {
        let p = LongitudePoint::from_longitude(190.0);
        assert_eq!(p.rashi, Rashi::Tula);
        assert!((p.degrees_in_rashi - 10.0).abs() < 1e-12);
        assert_eq!(p.nakshatra, Nakshatra::Swati);
        assert_eq!(p.nakshatra_lord, Graha::Rahu);
        assert_eq!(p.pada, 1);
    }

    #[test]
    fn point_normalizes_input() {
        let p = LongitudePoint::from_longitude(370.0);
        assert!((p.longitude_deg - 10.0).abs() < 1e-12);
    }

    #[test]
    fn place_assigns_house_one_in_lagna_sign() {
        let pos = PlanetPosition::place(Graha::Mangal, 44.0, false, 1);
        assert_eq!(pos.house, 1);
        assert_eq!(pos.point.rashi, Rashi::Vrishabha);
    }
}
